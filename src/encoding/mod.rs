//! # Fixed-width integer encoder and decoder
//!
//! Encode and decode functions for 8, 16, 32, 64, 128 and 256-bit integers, signed or
//! unsigned, in either byte order.
//!
//! Values are [`BigInt`]s throughout, so a 256-bit value is handled exactly like an 8-bit
//! one. Encoding runs the range check, the two's-complement transform, the fixed-width
//! render and finally the byte reordering; decoding runs the same steps backwards.
//!
//! # Example
//!
//! ```
//! use fixint::encoding::*;
//! use num_bigint::BigInt;
//!
//! let format = IntFormat::signed(Width::W128);
//! let value = BigInt::from(-99999999999999999999i128);
//!
//! // encode it
//! let enc = encode_full(&value, format, Endianness::Little).unwrap();
//!
//! // encoded values are always exactly as long as the format
//! assert_eq!(enc.len(), 16);
//!
//! // let's encode it a different way too
//! let out = &mut Vec::new();
//! encode(&value, format, Endianness::Little, out).unwrap();
//!
//! // but they are equivalent
//! assert_eq!(*out, enc);
//!
//! // Note: decoding returns a `Result`
//! let dec = decode(&enc, format, Endianness::Little).unwrap();
//!
//! // success!
//! assert_eq!(dec, value);
//! ```

use crate::errors::CodecError;
use bytes::Bytes;

mod bounds;
pub use bounds::*;
mod constants;
pub(crate) use constants::*;
pub mod de;
pub use de::*;
mod endian;
pub use endian::*;
mod format;
pub use format::*;
pub mod ser;
pub use ser::*;
mod twos;
pub use twos::*;

use bytes::BytesMut;
use num_bigint::BigInt;

/// Encodes `value` into a frozen [`Bytes`] buffer of exactly `format.bytes()` bytes.
///
/// # Example
///
/// ```
/// use fixint::encoding::*;
/// use num_bigint::BigInt;
///
/// let format = IntFormat::unsigned(Width::W32);
///
/// let enc = encode_bytes(&BigInt::from(1), format, Endianness::Big).unwrap();
///
/// assert_eq!(&enc[..], &[0, 0, 0, 1]);
/// ```
pub fn encode_bytes(value: &BigInt, format: IntFormat, order: Endianness) -> Result<Bytes, CodecError> {
    let mut out = BytesMut::with_capacity(format.bytes());
    encode(value, format, order, &mut out)?;
    Ok(out.finalize())
}
