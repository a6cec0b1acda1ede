//! Import from an existing phrase or raw entropy.

use clap::{ArgGroup, Args};
use mnemo::encoding::hex_decode;
use mnemo::{Language, Session};

/// Import a mnemonic phrase or raw entropy.
#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["mnemonic", "entropy"])))]
pub struct ImportCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    pub(crate) mnemonic: Option<String>,

    /// Raw entropy in hex format (with or without 0x prefix).
    #[arg(short, long)]
    pub(crate) entropy: Option<String>,

    /// Word list language.
    #[arg(short, long, default_value = "english")]
    pub(crate) language: Language,

    /// BIP39 passphrase (if used when creating).
    #[arg(short, long)]
    pub(crate) passphrase: Option<String>,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let passphrase = self.passphrase.as_deref();
        let session = match (self.mnemonic, self.entropy) {
            (Some(phrase), _) => Session::from_mnemonic(self.language, phrase.trim(), passphrase)?,
            (None, Some(hex)) => {
                let entropy = hex_decode(&hex)?;
                Session::from_entropy(self.language, &entropy, passphrase)?
            }
            (None, None) => return Err("either --mnemonic or --entropy is required".into()),
        };
        super::print_session(&session);
        Ok(())
    }
}
