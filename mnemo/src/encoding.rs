//! Hex encoding for entropy and seed bytes.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Encode bytes as lowercase hex.
#[inline]
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> Zeroizing<String> {
    Zeroizing::new(hex::encode(bytes))
}

/// Decode hex text, with or without a `0x` prefix.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidHex`] for odd-length input or non-hex characters.
pub fn hex_decode(text: &str) -> Result<Zeroizing<Vec<u8>>> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    hex::decode(digits)
        .map(Zeroizing::new)
        .map_err(|_| Error::InvalidHex)
}
