//! Random mnemonic generation.

use clap::Args;
use mnemo::{Language, Session};

/// Generate a new random mnemonic.
#[derive(Args)]
pub struct NewCommand {
    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    pub(crate) words: usize,

    /// Word list language.
    #[arg(short, long, default_value = "english")]
    pub(crate) language: Language,

    /// BIP39 passphrase (optional extra security).
    #[arg(short, long)]
    pub(crate) passphrase: Option<String>,
}

impl NewCommand {
    /// Execute the new command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let session = Session::generate(self.language, self.words, self.passphrase.as_deref())?;
        super::print_session(&session);
        Ok(())
    }
}
