//! Phrase validation.

use std::process::ExitCode;

use clap::Args;
use colored::Colorize;
use mnemo::{Language, MnemonicCodec};

/// Check whether a mnemonic phrase is valid.
#[derive(Args)]
pub struct ValidateCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    pub(crate) mnemonic: String,

    /// Word list language.
    #[arg(short, long, default_value = "english")]
    pub(crate) language: Language,
}

impl ValidateCommand {
    /// Execute the validate command.
    ///
    /// Exits with a failure code when the phrase is invalid.
    #[rustfmt::skip]
    pub fn execute(self) -> ExitCode {
        let codec = MnemonicCodec::for_language(self.language);
        let words = self.mnemonic.split_whitespace().count();

        println!();
        println!("      {}     {}", "Language".cyan().bold(), self.language.to_string().dimmed());
        println!("      {}        {words} words", "Words".cyan().bold());
        let code = match codec.decode(&self.mnemonic) {
            Ok(_) => {
                println!("      {}        {}", "Valid".cyan().bold(), "yes".green());
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("      {}        {}", "Valid".cyan().bold(), "no".red());
                println!("      {}       {}", "Reason".cyan().bold(), e.to_string().dimmed());
                ExitCode::FAILURE
            }
        };
        println!();
        code
    }
}
