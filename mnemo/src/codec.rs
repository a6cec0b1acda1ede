//! Entropy to phrase and phrase to entropy.
//!
//! ```text
//! |  ENT  | CS | ENT+CS | words |
//! +-------+----+--------+-------+
//! |  128  |  4 |   132  |   12  |
//! |  160  |  5 |   165  |   15  |
//! |  192  |  6 |   198  |   18  |
//! |  224  |  7 |   231  |   21  |
//! |  256  |  8 |   264  |   24  |
//! ```
//!
//! The entropy bits are followed by the checksum bits and the result is cut
//! into 11-bit groups, each selecting one word. Decoding reverses this and
//! rejects any phrase whose embedded checksum disagrees with its entropy.
//!
//! # Example
//!
//! ```
//! use mnemo::{Language, MnemonicCodec};
//!
//! let codec = MnemonicCodec::for_language(Language::English);
//! let phrase = codec.encode(&[0u8; 16]).unwrap();
//! assert_eq!(
//!     phrase.as_str(),
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! assert_eq!(codec.decode(&phrase).unwrap().as_slice(), &[0u8; 16]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::bits::{BITS_PER_BYTE, BITS_PER_WORD, BitReader, BitWriter};
use crate::checksum::{Checksum, checksum, checksum_len};
use crate::error::{Error, Result};
use crate::language::Language;
use crate::wordlist::{Bip39WordList, WORD_COUNT, WordList};

/// Entropy bits covered by one checksum bit.
const CHECKSUM_DIVISOR: usize = 32;

/// Valid phrase lengths in words.
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Valid entropy lengths in bytes.
pub const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Entropy byte length encoded by a phrase of `word_count` words.
///
/// # Errors
///
/// Returns [`Error::InvalidWordCount`] unless `word_count` is 12, 15, 18, 21
/// or 24.
pub fn entropy_len_for_word_count(word_count: usize) -> Result<usize> {
    if !WORD_COUNTS.contains(&word_count) {
        return Err(Error::InvalidWordCount(word_count));
    }
    let mnemonic_bits = word_count * BITS_PER_WORD;
    Ok((mnemonic_bits - mnemonic_bits % CHECKSUM_DIVISOR) / BITS_PER_BYTE)
}

/// Number of words needed to encode `entropy_len` bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidEntropyLength`] unless `entropy_len` is 16, 20,
/// 24, 28 or 32.
pub fn word_count_for_entropy_len(entropy_len: usize) -> Result<usize> {
    if !ENTROPY_LENGTHS.contains(&entropy_len) {
        return Err(Error::InvalidEntropyLength(entropy_len));
    }
    Ok((entropy_len * BITS_PER_BYTE + checksum_len(entropy_len)) / BITS_PER_WORD)
}

/// Encoder and validating decoder bound to one word list.
#[derive(Debug, Clone)]
pub struct MnemonicCodec<W = Bip39WordList> {
    word_list: W,
}

impl MnemonicCodec<Bip39WordList> {
    /// Create a codec over the standard list for `language`.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self::new(language.word_list())
    }
}

impl<W: WordList> MnemonicCodec<W> {
    /// Create a codec over the given word list.
    #[inline]
    #[must_use]
    pub const fn new(word_list: W) -> Self {
        Self { word_list }
    }

    /// Language of the underlying word list.
    #[inline]
    pub fn language(&self) -> Language {
        self.word_list.language()
    }

    /// Get the underlying word list.
    #[inline]
    pub const fn word_list(&self) -> &W {
        &self.word_list
    }

    /// Encode entropy as a phrase joined with the language's separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntropyLength`] if `entropy` is not 16, 20, 24,
    /// 28 or 32 bytes long.
    pub fn encode(&self, entropy: &[u8]) -> Result<Zeroizing<String>> {
        let word_count = word_count_for_entropy_len(entropy.len())?;
        let mnemonic_bits = word_count * BITS_PER_WORD;

        let cs = checksum(entropy);
        let mut writer = BitWriter::with_capacity(mnemonic_bits);
        writer.write_bytes(entropy);
        writer.write_bits(u32::from(cs.bits()), cs.len());

        let bit_len = writer.bit_len();
        if bit_len % BITS_PER_WORD != 0 || bit_len != mnemonic_bits {
            return Err(Error::InvalidLength {
                expected: mnemonic_bits,
                actual: bit_len,
            });
        }

        let bits = writer.finish();
        let mut reader = BitReader::new(&bits, bit_len);
        let separator = self.language().separator();

        let mut phrase = Zeroizing::new(String::new());
        for i in 0..word_count {
            let index = reader.read_bits(BITS_PER_WORD)? as u16;
            let word = self
                .word_list
                .word(index)
                .ok_or(Error::InvalidIndex(index))?;
            if i > 0 {
                phrase.push_str(separator);
            }
            phrase.push_str(word);
        }

        trace!(
            language = %self.language(),
            entropy_bits = entropy.len() * BITS_PER_BYTE,
            words = word_count,
            "encoded entropy"
        );
        Ok(phrase)
    }

    /// Decode a phrase back into its entropy, verifying the checksum.
    ///
    /// Words may be separated by any Unicode whitespace, including the
    /// ideographic space.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWordCount`] if the phrase is not 12, 15, 18, 21 or
    ///   24 words long.
    /// - [`Error::UnknownWord`] if a word is not in the word list.
    /// - [`Error::ChecksumMismatch`] if the embedded checksum is wrong.
    pub fn decode(&self, phrase: &str) -> Result<Zeroizing<Vec<u8>>> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let word_count = words.len();

        let mnemonic_bits = word_count * BITS_PER_WORD;
        let checksum_bits = mnemonic_bits % CHECKSUM_DIVISOR;
        let entropy_bits = mnemonic_bits - checksum_bits;

        if !ENTROPY_LENGTHS.contains(&(entropy_bits / BITS_PER_BYTE))
            || checksum_bits != entropy_bits / CHECKSUM_DIVISOR
        {
            debug!(words = word_count, "rejected phrase: invalid word count");
            return Err(Error::InvalidWordCount(word_count));
        }

        let mut writer = BitWriter::with_capacity(mnemonic_bits);
        for (position, word) in words.iter().enumerate() {
            let Some(index) = self
                .word_list
                .index_of(word)
                .filter(|&index| usize::from(index) < WORD_COUNT)
            else {
                debug!(
                    language = %self.language(),
                    position,
                    "rejected phrase: unknown word"
                );
                return Err(Error::UnknownWord(String::from(*word)));
            };
            writer.write_bits(u32::from(index), BITS_PER_WORD);
        }

        if writer.bit_len() != mnemonic_bits {
            return Err(Error::InvalidLength {
                expected: mnemonic_bits,
                actual: writer.bit_len(),
            });
        }

        let bits = writer.finish();
        let mut reader = BitReader::new(&bits, mnemonic_bits);

        let mut entropy = Zeroizing::new(Vec::with_capacity(entropy_bits / BITS_PER_BYTE));
        for _ in 0..entropy_bits / BITS_PER_BYTE {
            entropy.push(reader.read_byte()?);
        }

        let claimed = Checksum::new(reader.read_bits(checksum_bits)? as u8, checksum_bits)?;
        if !bool::from(claimed.ct_eq(&checksum(&entropy))) {
            debug!(words = word_count, "rejected phrase: checksum mismatch");
            return Err(Error::ChecksumMismatch);
        }

        trace!(
            language = %self.language(),
            entropy_bits,
            words = word_count,
            "decoded phrase"
        );
        Ok(entropy)
    }

    /// Whether `phrase` decodes successfully.
    ///
    /// Runs the same checks as [`decode`](Self::decode) and discards the
    /// reason for any failure.
    #[must_use]
    pub fn is_valid(&self, phrase: &str) -> bool {
        self.decode(phrase).is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use alloc::vec;
    use hex_literal::hex;
    use proptest::prelude::*;
    use test_strategy::proptest;

    /// (entropy, phrase) pairs from the reference BIP-39 test vectors.
    const ENGLISH_VECTORS: &[(&[u8], &str)] = &[
        (
            &hex!("00000000000000000000000000000000"),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        ),
        (
            &hex!("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f"),
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        ),
        (
            &hex!("80808080808080808080808080808080"),
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        ),
        (
            &hex!("ffffffffffffffffffffffffffffffff"),
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        ),
        (
            &hex!("0000000000000000000000000000000000000000"),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address",
        ),
        (
            &hex!("000000000000000000000000000000000000000000000000"),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        ),
        (
            &hex!("00000000000000000000000000000000000000000000000000000000"),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon admit",
        ),
        (
            &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        ),
    ];

    fn english() -> MnemonicCodec {
        MnemonicCodec::for_language(Language::English)
    }

    #[test]
    fn encode_matches_reference_vectors() {
        let codec = english();
        for (entropy, phrase) in ENGLISH_VECTORS {
            assert_eq!(codec.encode(entropy).unwrap().as_str(), *phrase);
        }
    }

    #[test]
    fn decode_matches_reference_vectors() {
        let codec = english();
        for (entropy, phrase) in ENGLISH_VECTORS {
            assert_eq!(codec.decode(phrase).unwrap().as_slice(), *entropy);
            assert!(codec.is_valid(phrase));
        }
    }

    #[test]
    fn encode_rejects_invalid_entropy_lengths() {
        let codec = english();
        for len in [0, 1, 15, 17, 31, 33, 64] {
            assert_eq!(
                codec.encode(&vec![0u8; len]),
                Err(Error::InvalidEntropyLength(len))
            );
        }
    }

    #[test]
    fn decode_rejects_invalid_word_counts() {
        let codec = english();
        for count in [0, 1, 3, 11, 13, 14, 16, 23, 25, 27, 48] {
            let phrase = vec!["abandon"; count].join(" ");
            assert_eq!(
                codec.decode(&phrase),
                Err(Error::InvalidWordCount(count)),
                "{count} words"
            );
            assert!(!codec.is_valid(&phrase));
        }
    }

    #[test]
    fn decode_rejects_unknown_words() {
        let codec = english();
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon notaword";
        assert_eq!(
            codec.decode(phrase),
            Err(Error::UnknownWord("notaword".into()))
        );

        // Words from another language are unknown too.
        let french = MnemonicCodec::for_language(Language::French);
        assert!(matches!(
            french.decode(ENGLISH_VECTORS[1].1),
            Err(Error::UnknownWord(_))
        ));
    }

    #[test]
    fn decode_is_case_sensitive() {
        let codec = english();
        let phrase = "Abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        assert_eq!(
            codec.decode(phrase),
            Err(Error::UnknownWord("Abandon".into()))
        );
    }

    #[test]
    fn decode_rejects_bad_checksums() {
        let codec = english();

        // Last word replaced.
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert_eq!(codec.decode(phrase), Err(Error::ChecksumMismatch));

        // Words reordered.
        let phrase = "about abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert_eq!(codec.decode(phrase), Err(Error::ChecksumMismatch));

        // Same entropy, different checksum bits.
        let phrase = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrist";
        assert_eq!(codec.decode(phrase), Err(Error::ChecksumMismatch));
        assert!(!codec.is_valid(phrase));
    }

    #[test]
    fn decode_accepts_any_whitespace_between_words() {
        let codec = english();
        let phrase = "  legal winner\tthank year\nwave sausage worth useful legal  winner thank yellow ";
        assert_eq!(
            codec.decode(phrase).unwrap().as_slice(),
            &hex!("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f")
        );
    }

    #[test]
    fn japanese_phrases_use_ideographic_space() {
        let codec = MnemonicCodec::for_language(Language::Japanese);
        let entropy = hex!("9e885d952ad362caeb4efe34a8e91bd2");
        let phrase = codec.encode(&entropy).unwrap();

        assert_eq!(phrase.split('\u{3000}').count(), 12);
        assert!(!phrase.contains(' '));
        assert_eq!(codec.decode(&phrase).unwrap().as_slice(), &entropy);

        // Ordinary spaces decode to the same entropy.
        let ascii = phrase.replace('\u{3000}', " ");
        assert_eq!(codec.decode(&ascii).unwrap().as_slice(), &entropy);
    }

    #[test]
    fn other_languages_use_ascii_space() {
        for language in [Language::ChineseSimplified, Language::Spanish] {
            let codec = MnemonicCodec::for_language(language);
            let phrase = codec.encode(&[0u8; 16]).unwrap();
            assert_eq!(phrase.split(' ').count(), 12);
            assert!(!phrase.contains('\u{3000}'));
        }
        let chinese = MnemonicCodec::for_language(Language::ChineseSimplified);
        let phrase = chinese.encode(&[0u8; 16]).unwrap();
        assert!(phrase.starts_with("的 的 的"));
    }

    #[test]
    fn word_count_and_entropy_length_are_in_bijection() {
        for (words, bytes) in WORD_COUNTS.iter().zip(ENTROPY_LENGTHS) {
            assert_eq!(entropy_len_for_word_count(*words).unwrap(), bytes);
            assert_eq!(word_count_for_entropy_len(bytes).unwrap(), *words);
        }
        assert_eq!(
            entropy_len_for_word_count(13),
            Err(Error::InvalidWordCount(13))
        );
        assert_eq!(
            word_count_for_entropy_len(17),
            Err(Error::InvalidEntropyLength(17))
        );
    }

    #[test]
    fn codec_reports_its_language() {
        let codec = MnemonicCodec::for_language(Language::Italian);
        assert_eq!(codec.language(), Language::Italian);
        assert_eq!(codec.word_list().language(), Language::Italian);
    }

    #[proptest]
    fn decode_inverts_encode(
        #[strategy(prop::sample::select(Language::all()))] language: Language,
        #[strategy(prop::sample::select(ENTROPY_LENGTHS.to_vec()))] len: usize,
        #[strategy(prop::collection::vec(any::<u8>(), #len))] entropy: Vec<u8>,
    ) {
        let codec = MnemonicCodec::for_language(language);
        let phrase = codec.encode(&entropy).unwrap();

        let word_count = phrase.split(language.separator()).count();
        prop_assert!(WORD_COUNTS.contains(&word_count));
        prop_assert_eq!(word_count, word_count_for_entropy_len(len).unwrap());
        let decoded = codec.decode(&phrase).unwrap();
        prop_assert_eq!(decoded.as_slice(), entropy.as_slice());
    }

    #[proptest]
    fn is_valid_agrees_with_decode(
        #[strategy(prop::collection::vec(0u16..2048, 0..30))] indices: Vec<u16>,
        #[strategy(any::<bool>())] append_unknown: bool,
    ) {
        let codec = english();
        let mut words: Vec<&str> = indices
            .iter()
            .map(|&i| codec.word_list().word(i).unwrap())
            .collect();
        if append_unknown {
            words.push("qwerty");
        }
        let phrase = words.join(" ");
        prop_assert_eq!(codec.is_valid(&phrase), codec.decode(&phrase).is_ok());
    }

    #[proptest]
    fn encode_never_leaves_valid_word_counts(
        #[strategy(prop::sample::select(ENTROPY_LENGTHS.to_vec()))] len: usize,
        #[strategy(prop::collection::vec(any::<u8>(), #len))] entropy: Vec<u8>,
    ) {
        let codec = english();
        let phrase = codec.encode(&entropy).unwrap();
        let count = phrase.split_whitespace().count();
        prop_assert!(WORD_COUNTS.contains(&count), "{} words", count);
        prop_assert_eq!(count, word_count_for_entropy_len(len).unwrap());
    }
}
