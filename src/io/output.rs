use crate::core::types::{CipherKey, CipherMethod};
use crate::resolution::DecryptionOutcome;
use crate::scoring::ScoreNormalizer;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// Flat `key` field: the shift or rail count as a number, the keyword as a string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KeyValue<'a> {
    Number(u64),
    Text(&'a str),
}

impl<'a> From<&'a CipherKey> for KeyValue<'a> {
    fn from(key: &'a CipherKey) -> Self {
        match key {
            CipherKey::Shift { shift } => KeyValue::Number(u64::from(*shift)),
            CipherKey::Rails { rails } => KeyValue::Number(*rails as u64),
            CipherKey::Keyword { key } => KeyValue::Text(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails<'a> {
    pub valid_words: usize,
    pub total_words: usize,
    pub invalid_words: &'a [String],
}

/// Wire shape of a resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionReport<'a> {
    pub success: bool,
    pub method: CipherMethod,
    pub decrypted: &'a str,
    pub confidence: f64,
    pub key: KeyValue<'a>,
    pub params: &'a CipherKey,
    pub details: ReportDetails<'a>,
}

impl<'a> ResolutionReport<'a> {
    pub fn from_outcome(outcome: &'a DecryptionOutcome) -> Self {
        let details = outcome.details();
        Self {
            success: outcome.success,
            method: outcome.method(),
            decrypted: outcome.decrypted(),
            confidence: outcome.confidence(),
            key: KeyValue::from(outcome.params()),
            params: outcome.params(),
            details: ReportDetails {
                valid_words: details.valid_word_count,
                total_words: details.total_word_count,
                invalid_words: &details.invalid_words,
            },
        }
    }
}

/// Wire shape of a failed resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

pub trait OutputWriter {
    fn write_outcome(&mut self, outcome: &DecryptionOutcome) -> anyhow::Result<()>;
    fn write_error(&mut self, message: &str) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_outcome(&mut self, outcome: &DecryptionOutcome) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&ResolutionReport::from_outcome(outcome))?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&ErrorReport::new(message))?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    normalizer: ScoreNormalizer,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, normalizer: ScoreNormalizer) -> Self {
        Self { writer, normalizer }
    }

    fn write_header(&mut self, outcome: &DecryptionOutcome) -> anyhow::Result<()> {
        let status = if outcome.success {
            "RESOLVED".green().bold()
        } else {
            "BEST GUESS".yellow().bold()
        };
        writeln!(self.writer, "{} {}", "cipherid".bold().blue(), status)?;
        writeln!(self.writer, "{}", "================".blue())?;
        Ok(())
    }

    fn write_details(&mut self, outcome: &DecryptionOutcome) -> anyhow::Result<()> {
        let details = outcome.details();
        writeln!(self.writer, "  Method:      {}", outcome.method().to_string().bold())?;
        writeln!(self.writer, "  Key:         {}", outcome.params())?;
        writeln!(
            self.writer,
            "  Confidence:  {}",
            confidence_display(outcome.confidence())
        )?;
        writeln!(
            self.writer,
            "  Score:       {:.3}",
            outcome.candidate.presentation_score(&self.normalizer)
        )?;
        writeln!(
            self.writer,
            "  Words:       {}/{} recognised",
            details.valid_word_count, details.total_word_count
        )?;
        if !details.invalid_words.is_empty() {
            writeln!(
                self.writer,
                "  Unknown:     {}",
                details.invalid_words.join(", ").dimmed()
            )?;
        }
        let advisory = if outcome.advisory_threshold_met {
            "met".green()
        } else {
            "not met".yellow()
        };
        writeln!(self.writer, "  Advisory:    {advisory}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", outcome.decrypted())?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_outcome(&mut self, outcome: &DecryptionOutcome) -> anyhow::Result<()> {
        self.write_header(outcome)?;
        self.write_details(outcome)?;
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{} {}", "error:".red().bold(), message)?;
        Ok(())
    }
}

fn confidence_display(confidence: f64) -> ColoredString {
    let text = format!("{:.1}%", confidence * 100.0);
    if confidence >= 0.9 {
        text.green()
    } else if confidence >= 0.5 {
        text.yellow()
    } else {
        text.red()
    }
}

pub fn create_writer(format: OutputFormat, normalizer: ScoreNormalizer) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), normalizer)),
    }
}
