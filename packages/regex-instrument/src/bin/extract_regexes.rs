//! Static regex extractor
//!
//! Prints one NDJSON record per input file listing the regexes whose
//! pattern and flags are known without running the program:
//!
//! ```text
//! {"fileName":"a.js","language":"javascript","couldParse":1,"regexes":[{"pattern":"x+","flags":"g"}]}
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use regex_instrument::features::parsing::load_source;
use regex_instrument::{extract_static_regexes, InstrumentConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "extract-regexes")]
#[command(version, about = "List statically known regexes of JavaScript/TypeScript files", long_about = None)]
struct Cli {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match InstrumentConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let mut status = ExitCode::SUCCESS;
    for path in &cli.files {
        let line = load_source(path).and_then(|source| {
            extract_static_regexes(&source, &path.to_string_lossy(), &config)?.to_json_line()
        });
        match line {
            Ok(line) => {
                if writeln!(stdout, "{line}").is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
