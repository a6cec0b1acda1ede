//! Supported mnemonic languages.
//!
//! Each language is bound to its fixed 2048-word list and to the separator
//! placed between words of an encoded phrase.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::wordlist::Bip39WordList;

/// Separator used by every language except Japanese.
pub const ASCII_SPACE: &str = " ";

/// Full-width ideographic space used to join Japanese phrases.
pub const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

/// Word-list languages a mnemonic can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// English.
    #[default]
    English,
    /// Chinese (Simplified).
    ChineseSimplified,
    /// Chinese (Traditional).
    ChineseTraditional,
    /// French.
    French,
    /// Italian.
    Italian,
    /// Japanese, joined with [`IDEOGRAPHIC_SPACE`].
    Japanese,
    /// Spanish.
    Spanish,
}

impl Language {
    /// Canonical lowercase identifier, e.g. `chinese_simplified`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Spanish => "spanish",
        }
    }

    /// Separator placed between words when encoding.
    #[inline]
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => ASCII_SPACE,
        }
    }

    /// Get all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::English,
            Self::ChineseSimplified,
            Self::ChineseTraditional,
            Self::French,
            Self::Italian,
            Self::Japanese,
            Self::Spanish,
        ]
    }

    /// Load the word list bound to this language.
    #[must_use]
    pub fn word_list(self) -> Bip39WordList {
        Bip39WordList::new(self)
    }

    pub(crate) const fn to_bip39(self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Japanese => bip39::Language::Japanese,
            Self::Spanish => bip39::Language::Spanish,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown language name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError(pub(crate) String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown language '{}', expected one of: english, chinese_simplified, \
             chinese_traditional, french, italian, japanese, spanish",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "english" | "en" => Ok(Self::English),
            "chinese_simplified" | "zh_hans" | "zh_cn" => Ok(Self::ChineseSimplified),
            "chinese_traditional" | "zh_hant" | "zh_tw" => Ok(Self::ChineseTraditional),
            "french" | "fr" => Ok(Self::French),
            "italian" | "it" => Ok(Self::Italian),
            "japanese" | "ja" | "jp" => Ok(Self::Japanese),
            "spanish" | "es" => Ok(Self::Spanish),
            _ => Err(ParseLanguageError(String::from(s))),
        }
    }
}
