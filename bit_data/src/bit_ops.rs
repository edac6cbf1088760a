//! Bit-level arithmetic shared by the writer and the reader.
//!
//! Bits are packed LSB first: the first value written starts at bit 0 of
//! byte 0, and a value that straddles a byte boundary continues in the next
//! byte with its next most significant bits.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr};

use crate::error::{BitDataError, Result};

mod sealed {
    /// Byte and shift helpers for the generic engine. Private so the set of
    /// containers stays closed.
    pub trait Sealed: Copy {
        /// Truncates to the low 8 bits.
        fn low_byte(self) -> u8;

        fn from_byte(byte: u8) -> Self;

        /// Shift right that yields zero once `n` reaches the width.
        fn shr_or_zero(self, n: u32) -> Self;

        /// Shift left that yields zero once `n` reaches the width.
        fn shl_or_zero(self, n: u32) -> Self;
    }
}

use sealed::Sealed;

/// An unsigned integer container of a fixed bit width.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only; the trait is sealed.
///
/// ```compile_fail
/// use bit_data::BitWidth;
/// use core::ops::{BitAnd, BitOr};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Nibble(u8);
///
/// impl BitAnd for Nibble {
///     type Output = Self;
///     fn bitand(self, rhs: Self) -> Self {
///         Nibble(self.0 & rhs.0)
///     }
/// }
///
/// impl BitOr for Nibble {
///     type Output = Self;
///     fn bitor(self, rhs: Self) -> Self {
///         Nibble(self.0 | rhs.0)
///     }
/// }
///
/// impl BitWidth for Nibble {
///     const BITS: u32 = 4;
///     const ZERO: Self = Nibble(0);
///     const MAX: Self = Nibble(0xF);
/// }
/// ```
pub trait BitWidth:
    Sealed + Debug + PartialEq + BitAnd<Output = Self> + BitOr<Output = Self>
{
    /// Width of the container in bits.
    const BITS: u32;
    const ZERO: Self;
    const MAX: Self;

    /// Returns a value with the low `n` bits set.
    ///
    /// `n >= Self::BITS` yields [`Self::MAX`], never an empty mask.
    #[inline]
    fn mask(n: u32) -> Self {
        match n {
            0 => Self::ZERO,
            n if n >= Self::BITS => Self::MAX,
            n => Self::MAX.shr_or_zero(Self::BITS - n),
        }
    }
}

macro_rules! impl_bit_width {
    ($($ty:ty),*) => {
        $(
            impl Sealed for $ty {
                #[inline(always)]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline(always)]
                fn from_byte(byte: u8) -> Self {
                    byte as $ty
                }

                #[inline(always)]
                fn shr_or_zero(self, n: u32) -> Self {
                    self.checked_shr(n).unwrap_or(0)
                }

                #[inline(always)]
                fn shl_or_zero(self, n: u32) -> Self {
                    self.checked_shl(n).unwrap_or(0)
                }
            }

            impl BitWidth for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;
            }
        )*
    };
}

impl_bit_width!(u8, u16, u32, u64);

/// Appends the low `bit_count` bits of `value` to `buf`, which currently
/// holds `bits_written` bits.
///
/// A `bit_count` past the width of `T` zero-extends the value.
pub(crate) fn write_bits<T: BitWidth>(
    buf: &mut Vec<u8>,
    bits_written: usize,
    value: T,
    bit_count: u32,
) {
    if bit_count == 0 {
        return;
    }

    let mut value = value & T::mask(bit_count);
    let ofs = (bits_written % 8) as u32;
    let mut remaining = bit_count;

    if ofs > 0 {
        let free = 8 - ofs;
        // A partial byte always exists at the tail when the cursor is unaligned.
        if let Some(last) = buf.last_mut() {
            *last |= value.low_byte() << ofs;
        }
        value = value.shr_or_zero(free);
        remaining = remaining.saturating_sub(free);
    }

    while remaining > 0 {
        buf.push(value.low_byte());
        value = value.shr_or_zero(8);
        remaining = remaining.saturating_sub(8);
    }
}

/// Extracts `bit_count` bits starting at bit `bits_read` of `data`.
///
/// Pure with respect to the cursor: the caller advances it on success only.
pub(crate) fn read_bits<T: BitWidth>(data: &[u8], bits_read: usize, bit_count: u32) -> Result<T> {
    if bit_count > T::BITS {
        return Err(BitDataError::BitCountTooBig {
            requested: bit_count,
            width: T::BITS,
        });
    }
    if bit_count == 0 {
        return Ok(T::ZERO);
    }

    let byte_at = |idx: usize| {
        data.get(idx)
            .copied()
            .ok_or(BitDataError::UnexpectedEndOfData {
                byte: idx,
                len: data.len(),
            })
    };

    let mut idx = bits_read / 8;
    let ofs = (bits_read % 8) as u32;
    let mut value = T::ZERO;
    let mut filled = 0;

    if ofs > 0 {
        value = T::from_byte(byte_at(idx)? >> ofs);
        filled = 8 - ofs;
        idx += 1;
    }

    while filled < bit_count {
        value = value | T::from_byte(byte_at(idx)?).shl_or_zero(filled);
        filled += 8;
        idx += 1;
    }

    Ok(value & T::mask(bit_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_edges() {
        assert_eq!(u8::mask(0), 0);
        assert_eq!(u8::mask(3), 0b111);
        assert_eq!(u8::mask(8), u8::MAX);
        assert_eq!(u16::mask(16), u16::MAX);
        assert_eq!(u32::mask(31), u32::MAX >> 1);
        assert_eq!(u64::mask(64), u64::MAX);
        assert_eq!(u64::mask(1), 1);
    }

    #[test]
    fn mask_past_width_saturates() {
        assert_eq!(u8::mask(10), u8::MAX);
        assert_eq!(u64::mask(200), u64::MAX);
    }

    #[test]
    fn mask_with_std_shift_traits_in_scope() {
        #[allow(unused_imports)]
        use core::ops::{Shl, Shr};

        assert_eq!(u16::mask(9), 0x1FF);
        assert_eq!(0xF0u8.shr_or_zero(4), 0x0F);
        assert_eq!(0xF0u8.shr_or_zero(8), 0);
        assert_eq!(0x01u16.shl_or_zero(16), 0);
    }

    #[test]
    fn lsb_first_layout() {
        let mut buf = Vec::new();
        write_bits(&mut buf, 0, 0b101u8, 3);
        write_bits(&mut buf, 3, 0b11111u8, 5);
        write_bits(&mut buf, 8, 0xABCu16, 12);

        assert_eq!(buf, [0b1111_1101, 0xBC, 0x0A]);
    }

    #[test]
    fn straddling_value() {
        let mut buf = Vec::new();
        write_bits(&mut buf, 0, 0b1u8, 1);
        write_bits(&mut buf, 1, 0xFFu8, 8);

        assert_eq!(buf, [0xFF, 0x01]);
        assert_eq!(read_bits::<u8>(&buf, 1, 8), Ok(0xFF));
        assert_eq!(read_bits::<u16>(&buf, 0, 9), Ok(0x1FF));
    }

    #[test]
    fn high_bits_are_discarded() {
        let mut buf = Vec::new();
        write_bits(&mut buf, 0, 0xFFFF_FFFFu32, 4);
        assert_eq!(buf, [0x0F]);
    }

    #[test]
    fn read_reports_missing_byte() {
        let data = [0xAA];
        assert_eq!(
            read_bits::<u16>(&data, 4, 8),
            Err(BitDataError::UnexpectedEndOfData { byte: 1, len: 1 })
        );
        assert_eq!(
            read_bits::<u8>(&data, 8, 1),
            Err(BitDataError::UnexpectedEndOfData { byte: 1, len: 1 })
        );
    }

    #[test]
    fn width_checked_before_data() {
        assert_eq!(
            read_bits::<u8>(&[], 0, 9),
            Err(BitDataError::BitCountTooBig {
                requested: 9,
                width: 8
            })
        );
    }
}
