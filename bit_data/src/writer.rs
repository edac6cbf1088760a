//! Append-only bit writer.
//!
//! # Examples
//!
//! ```rust
//! use bit_data::BitWriter;
//!
//! let mut writer = BitWriter::new();
//! writer.write_u8(0b11101, 5);
//! writer.write_u8(0b0110, 4);
//! writer.write_u16(0xABC, 12);
//!
//! assert_eq!(writer.bits_written(), 21);
//! assert_eq!(writer.len(), 3);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bit_ops::{self, BitWidth};

/// Packs values of 1 to 64 bits into a growable byte buffer.
///
/// Bits within each byte are filled from the LSB upward. The trailing
/// bits of the last byte stay zero until a later write fills them.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    data: Vec<u8>,
    bits_written: usize,
}

impl BitWriter {
    /// Creates an empty writer.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            bits_written: 0,
        }
    }

    /// Creates an empty writer with room for `bytes` bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            data: Vec::with_capacity(bytes),
            bits_written: 0,
        }
    }

    #[inline]
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Length of the packed data in bytes, including a trailing partial byte.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets a view of the bytes written so far.
    ///
    /// The last byte may still change if it is only partially filled.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the writer and returns the packed bytes.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Writes the low `bit_count` bits of `value`.
    ///
    /// Higher bits of `value` are discarded. A `bit_count` of zero is a
    /// no-op, and a `bit_count` past the width of `T` pads the value with
    /// zero bits.
    pub fn write_bits<T: BitWidth>(&mut self, value: T, bit_count: u32) {
        bit_ops::write_bits(&mut self.data, self.bits_written, value, bit_count);
        self.bits_written += bit_count as usize;

        debug_assert_eq!(self.data.len(), self.bits_written.div_ceil(8));
    }

    /// Writes a single bit.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_bits(value as u8, 1);
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8, bit_count: u32) {
        self.write_bits(value, bit_count);
    }

    #[inline]
    pub fn write_u16(&mut self, value: u16, bit_count: u32) {
        self.write_bits(value, bit_count);
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32, bit_count: u32) {
        self.write_bits(value, bit_count);
    }

    #[inline]
    pub fn write_u64(&mut self, value: u64, bit_count: u32) {
        self.write_bits(value, bit_count);
    }
}

impl From<BitWriter> for Vec<u8> {
    fn from(writer: BitWriter) -> Self {
        writer.into_inner()
    }
}

impl AsRef<[u8]> for BitWriter {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
