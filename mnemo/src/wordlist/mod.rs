//! Word lists backing the mnemonic codec.
//!
//! A word list is a fixed, ordered vocabulary of exactly [`WORD_COUNT`]
//! entries. Encoding maps 11-bit indices to words and decoding maps words
//! back to indices, so both directions must agree on the same ordering.

mod bip39;

pub use self::bip39::Bip39WordList;

use crate::language::Language;

/// Number of words in every supported list (2^11).
pub const WORD_COUNT: usize = 2048;

/// Index-to-word and word-to-index lookup for one language.
///
/// Implementations own their data; nothing is cached globally.
pub trait WordList {
    /// Language of this list, which also fixes the phrase separator.
    fn language(&self) -> Language;

    /// Get the word at the given index, `None` outside `0..2048`.
    fn word(&self, index: u16) -> Option<&str>;

    /// Get the index of the given word, `None` if it is not in the list.
    fn index_of(&self, word: &str) -> Option<u16>;
}

impl<W: WordList + ?Sized> WordList for &W {
    fn language(&self) -> Language {
        (**self).language()
    }

    fn word(&self, index: u16) -> Option<&str> {
        (**self).word(index)
    }

    fn index_of(&self, word: &str) -> Option<u16> {
        (**self).index_of(word)
    }
}
