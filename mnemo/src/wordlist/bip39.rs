//! Standard BIP-39 word lists.

use alloc::collections::BTreeMap;
use core::fmt;

use super::{WORD_COUNT, WordList};
use crate::language::Language;

/// One language's BIP-39 word list with a reverse index built up front.
#[derive(Clone)]
pub struct Bip39WordList {
    language: Language,
    words: &'static [&'static str; WORD_COUNT],
    index: BTreeMap<&'static str, u16>,
}

impl Bip39WordList {
    /// Load the list for `language` and index every word.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let words = language.to_bip39().word_list();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word, i as u16))
            .collect();
        Self {
            language,
            words,
            index,
        }
    }

    /// Get all words in list order.
    #[must_use]
    pub fn words(&self) -> &'static [&'static str; WORD_COUNT] {
        self.words
    }
}

impl WordList for Bip39WordList {
    fn language(&self) -> Language {
        self.language
    }

    fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).copied()
    }

    fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }
}

impl fmt::Debug for Bip39WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bip39WordList({})", self.language)
    }
}
