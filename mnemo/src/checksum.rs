//! Entropy checksum.
//!
//! The checksum is the first `ENT / 32` bits of the SHA-256 digest of the raw
//! entropy, where `ENT` is the entropy length in bits (4 to 8 bits).

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};

use crate::bits::{self, BITS_PER_BYTE};
use crate::error::{Error, Result};

/// Entropy bits covered by one checksum bit.
const ENTROPY_BITS_PER_CHECKSUM_BIT: usize = 32;

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Number of checksum bits for `entropy_len` bytes of entropy.
#[inline]
#[must_use]
pub const fn checksum_len(entropy_len: usize) -> usize {
    entropy_len * BITS_PER_BYTE / ENTROPY_BITS_PER_CHECKSUM_BIT
}

/// Leading bits of an entropy digest.
///
/// `bits` holds the checksum right-aligned; only the low `len` bits are
/// meaningful.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    bits: u8,
    len: usize,
}

impl Checksum {
    /// Build a checksum from its right-aligned bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if `len` is above 8 or `bits` does not
    /// fit in `len` bits.
    pub fn new(bits: u8, len: usize) -> Result<Self> {
        if len > BITS_PER_BYTE || (len < BITS_PER_BYTE && bits >> len != 0) {
            return Err(Error::InvalidFormat(bits::pack_group(
                u32::from(bits),
                BITS_PER_BYTE,
            )));
        }
        Ok(Self { bits, len })
    }

    /// The checksum bits, right-aligned.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Number of checksum bits.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Whether the checksum has no bits.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

impl ConstantTimeEq for Checksum {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_len = Choice::from(u8::from(self.len == other.len));
        same_len & self.bits.ct_eq(&other.bits)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits::pack_group(u32::from(self.bits), self.len))
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({self})")
    }
}

/// Parses the `0`/`1` text written by `Display`; the text length is the
/// checksum length.
impl FromStr for Checksum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = bits::unpack_group(s)?;
        let bits = u8::try_from(value).map_err(|_| Error::InvalidFormat(String::from(s)))?;
        Self::new(bits, s.len())
    }
}

/// Compute the checksum of `entropy`.
///
/// Takes the first `entropy.len() * 8 / 32` bits of `SHA-256(entropy)`.
#[must_use]
pub fn checksum(entropy: &[u8]) -> Checksum {
    let len = checksum_len(entropy.len()).min(BITS_PER_BYTE);
    let digest = sha256(entropy);
    let bits = if len == 0 {
        0
    } else {
        digest[0] >> (BITS_PER_BYTE - len)
    };
    Checksum { bits, len }
}
