use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cipherid")]
#[command(about = "Identify and break Caesar, Rail Fence and Vigenère ciphers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a ciphertext by running the cipher cascade
    Resolve {
        /// Ciphertext to resolve ("-" reads stdin)
        #[arg(conflicts_with = "file")]
        ciphertext: Option<String>,

        /// Read the ciphertext from a file
        #[arg(short = 'i', long)]
        file: Option<PathBuf>,

        /// JSON dictionary of the form {"words": [...]}
        #[arg(short, long, env = "CIPHERID_DICTIONARY")]
        dictionary: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .cipherid.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize a configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Where the ciphertext comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CiphertextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl CiphertextSource {
    pub fn from_args(ciphertext: Option<String>, file: Option<PathBuf>) -> Self {
        match (ciphertext, file) {
            (_, Some(path)) => CiphertextSource::File(path),
            (Some(text), None) if text == "-" => CiphertextSource::Stdin,
            (Some(text), None) => CiphertextSource::Inline(text),
            (None, None) => CiphertextSource::Stdin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_resolve_command() {
        let cli = Cli::parse_from(["cipherid", "resolve", "WKH TXLFN", "--format", "json"]);

        match cli.command {
            Commands::Resolve {
                ciphertext,
                file,
                format,
                ..
            } => {
                assert_eq!(ciphertext.as_deref(), Some("WKH TXLFN"));
                assert_eq!(file, None);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_parsing_resolve_defaults_to_terminal() {
        let cli = Cli::parse_from(["cipherid", "resolve", "--file", "/tmp/msg.txt"]);

        match cli.command {
            Commands::Resolve { file, format, .. } => {
                assert_eq!(file, Some(PathBuf::from("/tmp/msg.txt")));
                assert_eq!(format, OutputFormat::Terminal);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["cipherid", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_ciphertext_and_file_conflict() {
        let result =
            Cli::try_parse_from(["cipherid", "resolve", "ABC", "--file", "/tmp/msg.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ciphertext_source() {
        assert_eq!(
            CiphertextSource::from_args(Some("-".into()), None),
            CiphertextSource::Stdin
        );
        assert_eq!(
            CiphertextSource::from_args(None, None),
            CiphertextSource::Stdin
        );
        assert_eq!(
            CiphertextSource::from_args(Some("ABC".into()), None),
            CiphertextSource::Inline("ABC".into())
        );
        assert_eq!(
            CiphertextSource::from_args(None, Some("msg.txt".into())),
            CiphertextSource::File("msg.txt".into())
        );
    }
}
