//! Regex construction-site instrumenter
//!
//! # Usage
//!
//! ```bash
//! instrument app.js /tmp/regexes.ndjson > app.instrumented.js
//! node app.instrumented.js && cat /tmp/regexes.ndjson
//! ```
//!
//! The rewritten program goes to stdout; diagnostics go to stderr (`RUST_LOG`
//! controls verbosity). An optional YAML config is read from the file named
//! by `REGEX_INSTRUMENT_CONFIG`.
//!
//! Exactly two arguments are accepted. There are no flags: `--help` is a
//! usage error like any other argument count, and `-V log` instruments a
//! file named `-V`.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use regex_instrument::{InstrumentConfig, InstrumentError, InstrumentPipeline};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "instrument")]
#[command(about = "Log every regex construction of a JavaScript/TypeScript program", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Program to instrument
    #[arg(allow_hyphen_values = true)]
    source_file: PathBuf,

    /// Log file the instrumented program appends NDJSON records to
    #[arg(allow_hyphen_values = true)]
    log_file: String,
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            let usage = InstrumentError::Usage(err.render().to_string().trim_end().to_string());
            println!("{}", Cli::command().render_usage());
            eprintln!("You gave {:?}", args.get(1..).unwrap_or_default());
            eprintln!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    match run(&cli) {
        Ok(code) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(code.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("error: failed to write output: {err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> regex_instrument::Result<String> {
    let config = InstrumentConfig::from_env()?;
    let output = InstrumentPipeline::new(config).instrument_file(&cli.source_file, &cli.log_file)?;
    Ok(output.code)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
