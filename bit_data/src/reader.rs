use crate::bit_ops::{self, BitWidth};
use crate::error::Result;

/// Read access to a packed bit sequence.
///
/// Decoders written against this trait work with both [`BitReader`],
/// which fails per call, and [`crate::StickyReader`], which latches the
/// first failure and keeps returning zero values.
pub trait BitRead {
    /// Advances the cursor by `bit_count` bits without reading them.
    fn skip(&mut self, bit_count: usize);

    /// Reads `bit_count` bits into a `T`.
    fn read_bits<T: BitWidth>(&mut self, bit_count: u32) -> Result<T>;

    fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_bits::<u8>(1)? != 0)
    }

    fn read_u8(&mut self, bit_count: u32) -> Result<u8> {
        self.read_bits(bit_count)
    }

    fn read_u16(&mut self, bit_count: u32) -> Result<u16> {
        self.read_bits(bit_count)
    }

    fn read_u32(&mut self, bit_count: u32) -> Result<u32> {
        self.read_bits(bit_count)
    }

    fn read_u64(&mut self, bit_count: u32) -> Result<u64> {
        self.read_bits(bit_count)
    }
}

/// A forward-only cursor over packed bits.
///
/// Reads must replay the widths used when writing, in the same order;
/// the data carries no framing of its own.
///
/// A failed read leaves the cursor where it was.
///
/// ```rust
/// use bit_data::{BitRead, BitReader};
///
/// let data = [0b1111_1101, 0xBC, 0x0A];
/// let mut reader = BitReader::new(&data);
///
/// assert_eq!(reader.read_u8(3)?, 0b101);
/// assert_eq!(reader.read_u8(5)?, 0b11111);
/// assert_eq!(reader.read_u16(12)?, 0xABC);
/// assert_eq!(reader.remaining_bits(), 4);
/// # Ok::<(), bit_data::BitDataError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bits_read: usize,
}

impl<'a> BitReader<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, bits_read: 0 }
    }

    /// The underlying bytes.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Bits consumed so far, including skipped ones.
    #[inline]
    pub fn bits_read(&self) -> usize {
        self.bits_read
    }

    /// Bits left before the end of the data.
    ///
    /// Zero once [`BitRead::skip`] has moved past the end.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.bits_read)
    }
}

impl BitRead for BitReader<'_> {
    /// Trusts the caller: skipping past the end is allowed and only
    /// surfaces as an error on the next read. The cursor saturates
    /// instead of wrapping back into the data.
    #[inline]
    fn skip(&mut self, bit_count: usize) {
        self.bits_read = self.bits_read.saturating_add(bit_count);
    }

    fn read_bits<T: BitWidth>(&mut self, bit_count: u32) -> Result<T> {
        let value = bit_ops::read_bits(self.data, self.bits_read, bit_count)?;
        self.bits_read += bit_count as usize;
        Ok(value)
    }
}
