//! Bit-level packing for the mnemonic codec.
//!
//! A mnemonic is a bit sequence read in groups of 11. The sequence is the
//! entropy bytes, first byte to last and most significant bit first within
//! each byte, followed directly by the checksum bits. [`BitWriter`] builds
//! that sequence and [`BitReader`] walks it back in the same order.
//!
//! [`pack_group`] and [`unpack_group`] convert single groups to and from
//! their fixed-width `0`/`1` text form.
//!
//! # Example
//!
//! ```
//! use mnemo::bits::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b11, 2);
//! assert_eq!(writer.bit_len(), 5);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes.as_slice(), &[0b1011_1000]);
//!
//! let mut reader = BitReader::new(&bytes, 5);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(2).unwrap(), 0b11);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Number of bits in one byte group.
pub const BITS_PER_BYTE: usize = 8;

/// Number of bits encoded by one word (2048 = 2^11 words per list).
pub const BITS_PER_WORD: usize = 11;

/// Widest group that fits the `u32` accumulators below.
const MAX_GROUP_BITS: usize = 32;

/// Writes bits MSB-first into a byte buffer.
///
/// The buffer holds entropy, so it is wiped when the writer is dropped.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct BitWriter {
    /// Completed bytes.
    bytes: Vec<u8>,
    /// Current partial byte, MSB-aligned.
    bit_buffer: u8,
    /// Number of bits in `bit_buffer` (0-7).
    bit_count: usize,
}

impl BitWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `bits` bits.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(BITS_PER_BYTE)),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 0x80 >> self.bit_count;
        }
        self.bit_count += 1;

        if self.bit_count == BITS_PER_BYTE {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append the lowest `count` bits of `value`, most significant first.
    ///
    /// `count` must not exceed 32.
    pub fn write_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= MAX_GROUP_BITS, "group of {count} bits");
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    /// Append every bit of `bytes`, first byte first.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_bits(u32::from(byte), BITS_PER_BYTE);
        }
    }

    /// Total number of bits written so far.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * BITS_PER_BYTE + self.bit_count
    }

    /// Finish writing and return the packed bytes.
    ///
    /// A trailing partial byte is padded with zero bits.
    #[must_use]
    pub fn finish(mut self) -> Zeroizing<Vec<u8>> {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        Zeroizing::new(mem::take(&mut self.bytes))
    }
}

impl fmt::Debug for BitWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitWriter({} bits)", self.bit_len())
    }
}

/// Reads bits MSB-first from a byte buffer.
///
/// Only the first `bit_len` bits of the buffer are readable; padding past
/// that point is never returned.
#[derive(Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_len: usize,
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `bit_len` bits of `data`.
    ///
    /// `bit_len` is clamped to the size of `data`.
    #[must_use]
    pub fn new(data: &'a [u8], bit_len: usize) -> Self {
        Self {
            data,
            bit_len: bit_len.min(data.len() * BITS_PER_BYTE),
            bit_position: 0,
        }
    }

    /// Read `count` bits (at most 32) as an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if fewer than `count` bits remain,
    /// and [`Error::InvalidFormat`] if `count` exceeds 32.
    pub fn read_bits(&mut self, count: usize) -> Result<u32> {
        if count > MAX_GROUP_BITS {
            return Err(Error::InvalidFormat(alloc::format!("{count}-bit group")));
        }
        if count > self.bits_remaining() {
            return Err(Error::InvalidLength {
                expected: count,
                actual: self.bits_remaining(),
            });
        }

        let mut value = 0u32;
        for _ in 0..count {
            let byte = self.data[self.bit_position / BITS_PER_BYTE];
            let bit = (byte >> (7 - self.bit_position % BITS_PER_BYTE)) & 1;
            value = (value << 1) | u32::from(bit);
            self.bit_position += 1;
        }
        Ok(value)
    }

    /// Read one full byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if fewer than 8 bits remain.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(BITS_PER_BYTE)? as u8)
    }

    /// Number of unread bits.
    #[must_use]
    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.bit_position
    }
}

impl fmt::Debug for BitReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitReader")
            .field("bit_len", &self.bit_len)
            .field("bit_position", &self.bit_position)
            .finish_non_exhaustive()
    }
}

/// Render `value` as exactly `width` binary digits, zero-padded, MSB first.
///
/// Bits of `value` above `width` are dropped.
///
/// ```
/// assert_eq!(mnemo::bits::pack_group(3, 11), "00000000011");
/// assert_eq!(mnemo::bits::pack_group(0xa5, 8), "10100101");
/// ```
#[must_use]
pub fn pack_group(value: u32, width: usize) -> String {
    (0..width)
        .rev()
        .map(|shift| {
            let bit = u32::try_from(shift)
                .ok()
                .and_then(|shift| value.checked_shr(shift))
                .unwrap_or(0)
                & 1;
            if bit == 1 { '1' } else { '0' }
        })
        .collect()
}

/// Parse a binary digit string back into an integer.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the text is empty, longer than 32
/// digits, or contains anything other than `0` and `1`.
pub fn unpack_group(bits: &str) -> Result<u32> {
    if bits.is_empty() || bits.len() > MAX_GROUP_BITS {
        return Err(Error::InvalidFormat(String::from(bits)));
    }
    bits.bytes().try_fold(0u32, |acc, digit| match digit {
        b'0' => Ok(acc << 1),
        b'1' => Ok((acc << 1) | 1),
        _ => Err(Error::InvalidFormat(String::from(bits))),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_written_msb_first_in_order() {
        let mut writer = BitWriter::new();
        writer.write_bytes(&[0xa5, 0x0f]);
        assert_eq!(writer.bit_len(), 16);
        assert_eq!(writer.finish().as_slice(), &[0xa5, 0x0f]);
    }

    #[test]
    fn eleven_bit_groups_straddle_bytes() {
        let mut writer = BitWriter::with_capacity(33);
        writer.write_bits(2047, BITS_PER_WORD);
        writer.write_bits(0, BITS_PER_WORD);
        writer.write_bits(3, BITS_PER_WORD);
        assert_eq!(writer.bit_len(), 33);

        let bytes = writer.finish();
        // 11111111111 00000000000 00000000011 + 7 padding bits
        assert_eq!(bytes.as_slice(), &[0xff, 0xe0, 0x00, 0x01, 0x80]);

        let mut reader = BitReader::new(&bytes, 33);
        assert_eq!(reader.read_bits(BITS_PER_WORD).unwrap(), 2047);
        assert_eq!(reader.read_bits(BITS_PER_WORD).unwrap(), 0);
        assert_eq!(reader.read_bits(BITS_PER_WORD).unwrap(), 3);
        assert_eq!(reader.bits_remaining(), 0);
    }

    #[test]
    fn reader_regroups_words_into_bytes() {
        let mut writer = BitWriter::new();
        for index in [0x7f7u32, 0x6ff, 0x5a5] {
            writer.write_bits(index, BITS_PER_WORD);
        }
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes, 33);
        assert_eq!(reader.read_byte().unwrap(), 0xfe);
        assert_eq!(reader.read_byte().unwrap(), 0xfb);
        assert_eq!(reader.read_byte().unwrap(), 0xfe);
        assert_eq!(reader.read_byte().unwrap(), 0xd2);
        assert_eq!(reader.bits_remaining(), 1);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
    }

    #[test]
    fn reader_stops_at_declared_length() {
        let data = [0xffu8, 0xff];
        let mut reader = BitReader::new(&data, 12);
        assert_eq!(reader.read_bits(8).unwrap(), 0xff);
        assert_eq!(
            reader.read_bits(5),
            Err(Error::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(reader.read_bits(4).unwrap(), 0xf);
    }

    #[test]
    fn reader_clamps_length_to_data() {
        let data = [0u8];
        let reader = BitReader::new(&data, 64);
        assert_eq!(reader.bits_remaining(), 8);
    }

    #[test]
    fn pack_group_is_fixed_width() {
        assert_eq!(pack_group(0, 11), "00000000000");
        assert_eq!(pack_group(2047, 11), "11111111111");
        assert_eq!(pack_group(280, 8), "00011000");
        assert_eq!(pack_group(1, 0), "");
    }

    #[test]
    fn unpack_group_inverts_pack_group() {
        assert_eq!(unpack_group("00000000011").unwrap(), 3);
        assert_eq!(unpack_group(&pack_group(1234, 11)).unwrap(), 1234);
        assert_eq!(unpack_group("10100101").unwrap(), 0xa5);
    }

    #[test]
    fn unpack_group_rejects_malformed_text() {
        assert_eq!(
            unpack_group("0102"),
            Err(Error::InvalidFormat("0102".into()))
        );
        assert!(unpack_group("").is_err());
        assert!(unpack_group(" 101").is_err());
        assert!(unpack_group(&"1".repeat(33)).is_err());
    }
}
