//! Mnemo - create, import and validate BIP-39 mnemonic phrases.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "mnemo=debug" } else { "warn" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to set global default subscriber");
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::New(cmd) => cmd.execute()?,
        Commands::Import(cmd) => cmd.execute()?,
        Commands::Validate(cmd) => return Ok(cmd.execute()),
    }
    Ok(ExitCode::SUCCESS)
}
