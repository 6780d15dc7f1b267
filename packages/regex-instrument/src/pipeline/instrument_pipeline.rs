//! Instrumentation pipeline

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::InstrumentConfig;
use crate::errors::{InstrumentError, Result};
use crate::features::instrumentation::Synthesizer;
use crate::features::parsing::{load_source, ParseFileUseCase, Parser, TreeSitterParser};
use crate::features::rewriting::{print_source, Rewriter};
use crate::features::site_detection::RegexSiteDetector;
use crate::pipeline::InstrumentOutput;

/// Runs instrumentation passes with one configuration
#[derive(Debug, Clone, Default)]
pub struct InstrumentPipeline {
    config: InstrumentConfig,
}

impl InstrumentPipeline {
    pub fn new(config: InstrumentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InstrumentConfig {
        &self.config
    }

    /// Read `path` and instrument it; the path string as given is what the
    /// log records carry as `file`
    pub fn instrument_file(&self, path: impl AsRef<Path>, log_path: &str) -> Result<InstrumentOutput> {
        let path = path.as_ref();
        let source = load_source(path)?;
        self.instrument_source(&source, &path.to_string_lossy(), log_path)
    }

    /// Instrument program text
    ///
    /// A file without regex construction sites comes back byte-identical.
    pub fn instrument_source(
        &self,
        source: &str,
        file: &str,
        log_path: &str,
    ) -> Result<InstrumentOutput> {
        self.config.validate()?;
        let start = Instant::now();

        let parser = TreeSitterParser::for_path(file, self.config.language);
        let tree = ParseFileUseCase::new(parser).execute(source, file)?;

        let detection = RegexSiteDetector::new(&self.config).detect(&tree);
        if detection.is_empty() {
            info!(
                "No regex sites in {} ({} skipped), output unchanged",
                file,
                detection.skipped.len()
            );
            return Ok(InstrumentOutput {
                code: source.to_string(),
                sites: detection.sites,
                skipped: detection.skipped,
            });
        }

        let synthesizer = Synthesizer::new(self.config.identifier_prefix.clone(), log_path)
            .for_language(parser.language());
        let rewritten = Rewriter::new(synthesizer).rewrite(source, &detection.sites);
        debug!(
            "Rendered {} sites into {} replacements",
            rewritten.rewritten_sites,
            rewritten.replacements.len()
        );
        let code = print_source(source, &rewritten);

        if self.config.verify_output {
            Self::verify(&parser, &code, file)?;
        }

        let output = InstrumentOutput {
            code,
            sites: detection.sites,
            skipped: detection.skipped,
        };
        info!(
            "Instrumented {} regex sites ({} static) in {} ({} skipped) in {:.2?}",
            output.site_count(),
            output.static_site_count(),
            file,
            output.skipped.len(),
            start.elapsed()
        );
        Ok(output)
    }

    /// The rewritten program must still parse
    fn verify(parser: &TreeSitterParser, code: &str, file: &str) -> Result<()> {
        let reparsed = parser.parse(code, file)?;
        match reparsed.errors.first() {
            Some(err) => Err(InstrumentError::OutputVerification {
                file: file.to_string(),
                line: err.line,
                column: err.column,
            }),
            None => {
                debug!("Rewritten {} re-parsed cleanly", file);
                Ok(())
            }
        }
    }
}
