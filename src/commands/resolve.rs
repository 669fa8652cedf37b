use crate::cli::CiphertextSource;
use crate::config::{self, CipherIdConfig};
use crate::io::output::{JsonWriter, TerminalWriter};
use crate::io::{self, create_writer, OutputFormat, OutputWriter};
use crate::resolution::Coordinator;
use crate::scoring::ScoreNormalizer;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

pub struct ResolveConfig {
    pub source: CiphertextSource,
    pub dictionary: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

/// How a resolve run ended, as far as the shell is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    /// A candidate was reported, whether or not it cleared the threshold
    Resolved,
    /// The ciphertext was missing or empty
    InvalidInput,
    /// Configuration, input reading, or every strategy failed
    Failed,
}

impl ResolveStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            ResolveStatus::Resolved => 0,
            ResolveStatus::Failed => 1,
            ResolveStatus::InvalidInput => 2,
        }
    }
}

/// Run the cascade and report in the requested format.
///
/// Resolution failures are reported, not returned; the `Err` case is
/// reserved for failing to write the report itself.
pub fn resolve_command(config: ResolveConfig) -> Result<ResolveStatus> {
    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            report_error(config.format, &e.to_string())?;
            return Ok(ResolveStatus::Failed);
        }
    };

    let ciphertext = match read_ciphertext(&config.source) {
        Ok(text) => text,
        Err(e) => {
            report_error(config.format, &format!("{e:#}"))?;
            return Ok(ResolveStatus::Failed);
        }
    };

    let coordinator = Coordinator::from_config(&settings);
    debug!(?coordinator, "Resolving ciphertext");

    match coordinator.resolve_blocking(&ciphertext) {
        Ok(outcome) => {
            let normalizer = ScoreNormalizer::new(settings.weights.clone());
            create_writer(config.format, normalizer).write_outcome(&outcome)?;
            Ok(ResolveStatus::Resolved)
        }
        Err(e) => {
            report_error(config.format, &e.to_string())?;
            if e.is_input_error() {
                Ok(ResolveStatus::InvalidInput)
            } else {
                Ok(ResolveStatus::Failed)
            }
        }
    }
}

/// Explicit `--config` must load; otherwise search ancestors. `--dictionary`
/// overrides the configured path.
fn load_settings(config: &ResolveConfig) -> crate::Result<CipherIdConfig> {
    let mut settings = match &config.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };
    if let Some(path) = &config.dictionary {
        settings.dictionary.path = Some(path.clone());
    }
    Ok(settings)
}

fn read_ciphertext(source: &CiphertextSource) -> Result<String> {
    let text = match source {
        CiphertextSource::Inline(text) => return Ok(text.clone()),
        CiphertextSource::File(path) => io::read_file(path)?,
        CiphertextSource::Stdin => io::read_stdin()?,
    };
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

fn report_error(format: OutputFormat, message: &str) -> Result<()> {
    match format {
        OutputFormat::Json => JsonWriter::new(std::io::stdout()).write_error(message),
        OutputFormat::Terminal => {
            TerminalWriter::new(std::io::stderr(), ScoreNormalizer::default()).write_error(message)
        }
    }
}
