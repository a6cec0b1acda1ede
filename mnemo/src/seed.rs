//! Seed derivation.
//!
//! `seed = PBKDF2-HMAC-SHA512(password = phrase, salt = "mnemonic" || passphrase, 2048, 64)`
//!
//! The phrase is hashed exactly as given. Derivation does not check that the
//! phrase is a valid mnemonic, and any text produces a seed.

use alloc::vec::Vec;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes.
pub const SEED_LEN: usize = 64;

/// Fixed prefix of the PBKDF2 salt.
pub const SALT_PREFIX: &[u8] = b"mnemonic";

/// Derive the 64-byte seed for `phrase` and `passphrase`.
///
/// An empty passphrase is the same as no passphrase.
///
/// ```
/// let seed = mnemo::derive_seed(
///     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
///     "TREZOR",
/// );
/// assert_eq!(seed[..4], [0xc5, 0x52, 0x57, 0xc3]);
/// ```
#[must_use]
pub fn derive_seed(phrase: &str, passphrase: &str) -> Zeroizing<[u8; SEED_LEN]> {
    let mut salt = Zeroizing::new(Vec::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.extend_from_slice(SALT_PREFIX);
    salt.extend_from_slice(passphrase.as_bytes());

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    pbkdf2_hmac::<Sha512>(phrase.as_bytes(), &salt, PBKDF2_ROUNDS, seed.as_mut());
    seed
}
