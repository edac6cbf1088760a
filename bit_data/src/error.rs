#[cfg(feature = "std")]
use thiserror::Error;

/// Errors produced while reading packed bits.
///
/// Writing never fails; both variants come from the read side.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitDataError {
    /// The read asked for more bits than its container holds,
    /// e.g. 10 bits into a `u8`.
    #[cfg_attr(
        feature = "std",
        error("bit count too big: requested {requested} bits from a {width}-bit container")
    )]
    BitCountTooBig { requested: u32, width: u32 },

    /// The read needed a byte past the end of the data.
    #[cfg_attr(
        feature = "std",
        error("unexpected end of data: needed byte {byte} but only {len} are available")
    )]
    UnexpectedEndOfData { byte: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitDataError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitDataError::BitCountTooBig { requested, width } => write!(
                f,
                "bit count too big: requested {} bits from a {}-bit container",
                requested, width
            ),
            BitDataError::UnexpectedEndOfData { byte, len } => write!(
                f,
                "unexpected end of data: needed byte {} but only {} are available",
                byte, len
            ),
        }
    }
}

pub type Result<T> = core::result::Result<T, BitDataError>;
