//! Mnemonic session: one entropy, phrase and passphrase triple.
//!
//! A [`Session`] is only ever constructed fully populated. Each constructor
//! either generates or imports the entropy, keeps the matching phrase next to
//! it, and fails without producing a session if anything is invalid. To
//! change the state, build a new session.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "rand")]
use rand_core::OsRng;
use rand_core::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::codec::{MnemonicCodec, entropy_len_for_word_count};
use crate::error::{Error, Result};
use crate::language::Language;
use crate::seed::{SEED_LEN, derive_seed};
use crate::wordlist::{Bip39WordList, WordList};

/// A populated mnemonic session.
///
/// Holds the entropy, the phrase encoding it and the passphrase used to
/// derive the seed. Whenever both are present, decoding the phrase yields the
/// entropy.
///
/// # Passphrase Support
///
/// The passphrase (sometimes called the "25th word") only affects the seed.
/// The same phrase with different passphrases produces unrelated seeds, and
/// an empty passphrase is the same as none.
pub struct Session<W = Bip39WordList> {
    codec: MnemonicCodec<W>,
    entropy: Zeroizing<Vec<u8>>,
    mnemonic: Zeroizing<String>,
    passphrase: Zeroizing<String>,
}

impl Session<Bip39WordList> {
    /// Generate a session with fresh entropy from the operating system.
    ///
    /// # Arguments
    ///
    /// * `language` - Word list language
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    /// * `passphrase` - Optional passphrase for seed derivation
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] for an unsupported word count and
    /// [`Error::RandomSource`] if the system random source fails.
    ///
    /// # Note
    ///
    /// This function requires the `rand` feature to be enabled.
    #[cfg(feature = "rand")]
    pub fn generate(
        language: Language,
        word_count: usize,
        passphrase: Option<&str>,
    ) -> Result<Self> {
        Self::generate_with(language.word_list(), word_count, passphrase, &mut OsRng)
    }

    /// Create a session from raw entropy bytes.
    ///
    /// Useful in `no_std` environments where the caller provides its own
    /// entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntropyLength`] if `entropy` is not 16, 20,
    /// 24, 28 or 32 bytes long.
    pub fn from_entropy(
        language: Language,
        entropy: &[u8],
        passphrase: Option<&str>,
    ) -> Result<Self> {
        Self::from_entropy_with(language.word_list(), entropy, passphrase)
    }

    /// Create a session from an existing phrase.
    ///
    /// # Errors
    ///
    /// Returns any error produced by [`MnemonicCodec::decode`].
    pub fn from_mnemonic(
        language: Language,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<Self> {
        Self::from_mnemonic_with(language.word_list(), phrase, passphrase)
    }
}

impl<W: WordList> Session<W> {
    /// Generate a session over `word_list`, drawing entropy from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] for an unsupported word count and
    /// [`Error::RandomSource`] if `rng` fails.
    pub fn generate_with<R>(
        word_list: W,
        word_count: usize,
        passphrase: Option<&str>,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let mut entropy = Zeroizing::new(vec![0u8; entropy_len_for_word_count(word_count)?]);
        rng.try_fill_bytes(&mut entropy)
            .map_err(|e| Error::RandomSource(e.to_string()))?;

        let session = Self::build(MnemonicCodec::new(word_list), entropy, passphrase)?;
        debug!(
            language = %session.language(),
            words = word_count,
            "generated session"
        );
        Ok(session)
    }

    /// Create a session over `word_list` from raw entropy bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntropyLength`] for an unsupported length.
    pub fn from_entropy_with(
        word_list: W,
        entropy: &[u8],
        passphrase: Option<&str>,
    ) -> Result<Self> {
        let session = Self::build(
            MnemonicCodec::new(word_list),
            Zeroizing::new(entropy.to_vec()),
            passphrase,
        )?;
        debug!(
            language = %session.language(),
            words = session.word_count(),
            "imported entropy"
        );
        Ok(session)
    }

    /// Create a session over `word_list` from an existing phrase.
    ///
    /// The phrase is kept exactly as given, so the seed is derived from the
    /// caller's text.
    ///
    /// # Errors
    ///
    /// Returns any error produced by [`MnemonicCodec::decode`].
    pub fn from_mnemonic_with(
        word_list: W,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<Self> {
        let codec = MnemonicCodec::new(word_list);
        let entropy = codec.decode(phrase)?;

        let session = Self {
            codec,
            entropy,
            mnemonic: Zeroizing::new(String::from(phrase)),
            passphrase: Zeroizing::new(String::from(passphrase.unwrap_or_default())),
        };
        debug!(
            language = %session.language(),
            words = session.word_count(),
            "imported mnemonic"
        );
        Ok(session)
    }

    fn build(
        codec: MnemonicCodec<W>,
        entropy: Zeroizing<Vec<u8>>,
        passphrase: Option<&str>,
    ) -> Result<Self> {
        let mnemonic = codec.encode(&entropy)?;
        Ok(Self {
            codec,
            entropy,
            mnemonic,
            passphrase: Zeroizing::new(String::from(passphrase.unwrap_or_default())),
        })
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security Warning**: Handle this value carefully as it can
    /// reconstruct the seed.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Get the passphrase, empty if none was given.
    #[inline]
    #[must_use]
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Get the raw entropy bytes.
    #[inline]
    #[must_use]
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// Derive the seed from the current phrase and passphrase.
    ///
    /// The seed is not cached; every call runs the full derivation.
    #[must_use]
    pub fn seed(&self) -> Zeroizing<[u8; SEED_LEN]> {
        derive_seed(&self.mnemonic, &self.passphrase)
    }

    /// Language of the session's word list.
    #[inline]
    pub fn language(&self) -> Language {
        self.codec.language()
    }

    /// Number of words in the phrase.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }

    /// Check if a non-empty passphrase is in use.
    #[inline]
    #[must_use]
    pub fn has_passphrase(&self) -> bool {
        !self.passphrase.is_empty()
    }

    /// Get the codec bound to this session's word list.
    #[inline]
    pub const fn codec(&self) -> &MnemonicCodec<W> {
        &self.codec
    }
}

impl<W: WordList> fmt::Debug for Session<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("language", &self.language())
            .field("word_count", &self.word_count())
            .field("has_passphrase", &self.has_passphrase())
            .finish_non_exhaustive()
    }
}
