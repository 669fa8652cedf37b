use anyhow::Result;
use cipherid::cli::{CiphertextSource, Cli, Commands};
use cipherid::commands::{self, ResolveConfig};
use cipherid::observability::init_tracing;
use clap::Parser;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Resolve {
            ciphertext,
            file,
            dictionary,
            config,
            format,
        } => {
            let status = commands::resolve_command(ResolveConfig {
                source: CiphertextSource::from_args(ciphertext, file),
                dictionary,
                config,
                format,
            })?;
            Ok(ExitCode::from(status.exit_code()))
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
