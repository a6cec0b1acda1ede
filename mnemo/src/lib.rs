//! # Mnemo - BIP-39 Mnemonic Core Library
//!
//! A `no_std` compatible library for turning entropy into checksummed
//! mnemonic phrases, validating phrases, and deriving 64-byte seeds.
//!
//! ## Features
//!
//! - **no_std compatible**: only `alloc` is required
//! - **Seven word lists**: English, Chinese (Simplified and Traditional),
//!   French, Italian, Japanese and Spanish
//! - **Secrets are zeroized**: entropy, phrases, passphrases and seeds are
//!   wiped on drop, and checksums are compared in constant time
//!
//! ## Example
//!
//! ```
//! use mnemo::{Language, Session};
//!
//! let session = Session::from_entropy(Language::English, &[0x7f; 16], Some("TREZOR")).unwrap();
//! assert_eq!(
//!     session.mnemonic(),
//!     "legal winner thank year wave sausage worth useful legal winner thank yellow"
//! );
//!
//! let restored = Session::from_mnemonic(Language::English, session.mnemonic(), Some("TREZOR")).unwrap();
//! assert_eq!(restored.entropy(), &[0x7f; 16]);
//! assert_eq!(*restored.seed(), *session.seed());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::cast_possible_truncation,
    clippy::uninlined_format_args,
    clippy::missing_fields_in_debug
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bits;
pub mod checksum;
pub mod codec;
pub mod encoding;
pub mod error;
pub mod language;
pub mod seed;
pub mod session;
pub mod wordlist;

pub use codec::{
    ENTROPY_LENGTHS, MnemonicCodec, WORD_COUNTS, entropy_len_for_word_count,
    word_count_for_entropy_len,
};
pub use error::{Error, Result};
pub use language::{Language, ParseLanguageError};
pub use seed::derive_seed;
pub use session::Session;
pub use wordlist::{Bip39WordList, WordList};

// Re-export rand_core so callers of `Session::generate_with` share its trait versions
pub use rand_core;
