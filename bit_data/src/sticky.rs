//! Reader that latches its first error.
//!
//! Lets a decoder issue a whole sequence of reads unconditionally and check
//! for failure once at the end.
//!
//! # Examples
//!
//! ```rust
//! use bit_data::{BitDataError, BitWriter, StickyReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_u8(0b101, 3);
//! let data = writer.into_inner();
//!
//! let mut reader = StickyReader::new(&data);
//! let a = reader.read_u8(3);
//! let b = reader.read_u16(16); // runs out of data
//! let c = reader.read_bool(); // no-op from here on
//!
//! assert_eq!((a, b, c), (0b101, 0, false));
//! assert!(matches!(
//!     reader.error(),
//!     Some(BitDataError::UnexpectedEndOfData { .. })
//! ));
//! ```

use crate::bit_ops::BitWidth;
use crate::error::{BitDataError, Result};
use crate::reader::{BitRead, BitReader};

/// Wraps a [`BitReader`] and suppresses per-call errors.
///
/// The first failing read is recorded and never overwritten. Every read
/// after it returns the zero value without touching the data, so the
/// cursor stops where the failure happened. [`Self::skip`] still moves it.
#[derive(Debug, Clone)]
pub struct StickyReader<'a> {
    reader: BitReader<'a>,
    error: Option<BitDataError>,
}

impl<'a> StickyReader<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self::from_reader(BitReader::new(data))
    }

    /// Wraps a reader, continuing from its current position.
    pub const fn from_reader(reader: BitReader<'a>) -> Self {
        Self {
            reader,
            error: None,
        }
    }

    /// The first error encountered, if any.
    #[inline]
    pub fn error(&self) -> Option<&BitDataError> {
        self.error.as_ref()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Consumes the reader and reports the latched error.
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn bits_read(&self) -> usize {
        self.reader.bits_read()
    }

    #[inline]
    pub fn skip(&mut self, bit_count: usize) {
        self.reader.skip(bit_count);
    }

    /// Reads `bit_count` bits, or returns zero if this or an earlier
    /// read failed.
    pub fn read_bits<T: BitWidth>(&mut self, bit_count: u32) -> T {
        if self.error.is_some() {
            log::trace!("Suppressed {bit_count}-bit read after earlier failure");
            return T::ZERO;
        }

        match self.reader.read_bits(bit_count) {
            Ok(value) => value,
            Err(err) => {
                log::debug!(
                    "Latched read error at bit {}: {err}",
                    self.reader.bits_read()
                );
                self.error = Some(err);
                T::ZERO
            }
        }
    }

    #[inline]
    pub fn read_bool(&mut self) -> bool {
        self.read_bits::<u8>(1) != 0
    }

    #[inline]
    pub fn read_u8(&mut self, bit_count: u32) -> u8 {
        self.read_bits(bit_count)
    }

    #[inline]
    pub fn read_u16(&mut self, bit_count: u32) -> u16 {
        self.read_bits(bit_count)
    }

    #[inline]
    pub fn read_u32(&mut self, bit_count: u32) -> u32 {
        self.read_bits(bit_count)
    }

    #[inline]
    pub fn read_u64(&mut self, bit_count: u32) -> u64 {
        self.read_bits(bit_count)
    }
}

/// Never returns `Err`; failures show up in [`StickyReader::error`].
impl BitRead for StickyReader<'_> {
    fn skip(&mut self, bit_count: usize) {
        StickyReader::skip(self, bit_count);
    }

    fn read_bits<T: BitWidth>(&mut self, bit_count: u32) -> Result<T> {
        Ok(StickyReader::read_bits(self, bit_count))
    }
}
