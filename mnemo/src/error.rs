//! Error types for mnemonic encoding, decoding and seed derivation.

use alloc::string::String;
use core::fmt;

/// Errors that can occur while encoding, decoding or generating mnemonics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Entropy byte length is not 16, 20, 24, 28 or 32.
    InvalidEntropyLength(usize),
    /// Word count is not 12, 15, 18, 21 or 24.
    InvalidWordCount(usize),
    /// Word is not part of the selected language's word list.
    UnknownWord(String),
    /// Word list has no word at this index.
    InvalidIndex(u16),
    /// Checksum embedded in the phrase does not match the entropy.
    ChecksumMismatch,
    /// Bit-group text contains something other than `0` and `1`.
    InvalidFormat(String),
    /// Bit sequence has an unexpected length.
    InvalidLength {
        /// Expected number of bits.
        expected: usize,
        /// Actual number of bits.
        actual: usize,
    },
    /// Invalid hex string.
    InvalidHex,
    /// The secure random source failed.
    RandomSource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntropyLength(n) => {
                write!(
                    f,
                    "invalid entropy length {n} bytes, must be 16, 20, 24, 28, or 32"
                )
            }
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::UnknownWord(word) => write!(f, "word \"{word}\" is not in the word list"),
            Self::InvalidIndex(i) => write!(f, "no word at word list index {i}"),
            Self::ChecksumMismatch => write!(f, "invalid mnemonic: checksum mismatch"),
            Self::InvalidFormat(bits) => write!(f, "invalid bit group \"{bits}\""),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid bit length: expected {expected}, got {actual}")
            }
            Self::InvalidHex => write!(f, "invalid hex string"),
            Self::RandomSource(msg) => write!(f, "random source failure: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A convenient Result type alias for mnemo operations.
pub type Result<T> = core::result::Result<T, Error>;
