//! # bit_data
//!
//! A `no_std` compatible library for packing values of 1 to 64 bits
//! contiguously into bytes, with no padding between them.
//!
//! Bits are filled from the LSB of each byte upward. A value crossing a
//! byte boundary keeps its low bits in the current byte and continues into
//! the next one. The stream has no header or framing, so a reader must
//! replay the exact widths the writer used, in the same order.
//!
//! ```rust
//! use bit_data::{BitRead, BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bool(true);
//! writer.write_u8(0b0110, 4);
//! writer.write_u64(0xDEAD_BEEF, 40);
//!
//! let data = writer.into_inner();
//! assert_eq!(data.len(), 6); // 45 bits
//!
//! let mut reader = BitReader::new(&data);
//! assert!(reader.read_bool()?);
//! assert_eq!(reader.read_u8(4)?, 0b0110);
//! assert_eq!(reader.read_u64(40)?, 0xDEAD_BEEF);
//! # Ok::<(), bit_data::BitDataError>(())
//! ```
//!
//! ## Reader disciplines
//!
//! [`BitReader`] returns a [`Result`] from every read. [`StickyReader`]
//! records the first failure and turns every later read into a no-op that
//! returns zero, so the error only needs checking once at the end.
//! Both implement [`BitRead`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{BitDataError, Result};

mod bit_ops;
pub use bit_ops::BitWidth;

pub mod reader;
pub use reader::{BitRead, BitReader};

pub mod sticky;
pub use sticky::StickyReader;

pub mod writer;
pub use writer::BitWriter;
