//! CLI command definitions and handlers.

mod import;
mod new;
mod validate;

use clap::{Parser, Subcommand};
use colored::Colorize;
use mnemo::Session;
use mnemo::encoding::hex_encode;

pub use import::ImportCommand;
pub use new::NewCommand;
pub use validate::ValidateCommand;

/// Mnemo - create, import and validate BIP-39 mnemonic phrases.
#[derive(Parser)]
#[command(name = "mnemo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug logs to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new random mnemonic.
    #[command(alias = "generate")]
    New(NewCommand),

    /// Import a mnemonic phrase or raw entropy.
    Import(ImportCommand),

    /// Check whether a mnemonic phrase is valid.
    #[command(alias = "check")]
    Validate(ValidateCommand),
}

#[rustfmt::skip]
fn print_session(session: &Session) {
    println!();
    println!("      {}     {}", "Language".cyan().bold(), session.language().to_string().dimmed());
    println!("      {}        {} words", "Words".cyan().bold(), session.word_count());
    println!("      {}     {}", "Mnemonic".cyan().bold(), session.mnemonic().green());
    if session.has_passphrase() {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
    println!("      {}      {}", "Entropy".cyan().bold(), hex_encode(session.entropy()).as_str());
    println!("      {}         {}", "Seed".cyan().bold(), hex_encode(session.seed().as_slice()).as_str());
    println!();
}
