//! # fixint
//!
//! Fixed-width binary integer codecs: 8, 16, 32, 64, 128 and 256-bit integers, signed or
//! unsigned, big or little-endian, with arbitrary-precision arithmetic underneath so that
//! no width ever overflows a machine integer.
//!
//! # Usage
//!
//! The typed API in [`encoding`] works on [`BigInt`]s directly:
//!
//! ```
//! use fixint::prelude::*;
//!
//! let format = IntFormat::unsigned(Width::W256);
//! let big = BigInt::from(u128::max_value()) * BigInt::from(u128::max_value());
//!
//! let enc = encode_full(&big, format, Endianness::Big).unwrap();
//! assert_eq!(enc.len(), 32);
//!
//! let dec = decode(&enc, format, Endianness::Big).unwrap();
//! assert_eq!(dec, big);
//! ```
//!
//! The [`builtins`] wrap it for dynamically typed callers, taking and returning
//! [`Value`]s:
//!
//! ```
//! use fixint::prelude::*;
//!
//! let enc = encode_i128_to_little_endian(&[Value::from(-2)]).unwrap();
//!
//! let mut expected = vec![0xffu8; 16];
//! expected[0] = 0xfe;
//! assert_eq!(enc.to_bytes().unwrap(), expected);
//!
//! let dec = decode_i128_from_little_endian(&[enc]).unwrap();
//! assert_eq!(dec, Value::from(-2));
//! ```
//!
//! # Errors
//!
//! Every failure is a [`CodecError`](errors::CodecError), tagged with a stable code:
//!
//! | kind           | code  | raised when                                      |
//! |----------------|-------|--------------------------------------------------|
//! | `Arity`        | E7001 | a builtin gets other than one argument            |
//! | `Type`         | E3020 | an argument or element has the wrong kind         |
//! | `Length`       | E3021 | a byte sequence is not exactly `width / 8` long   |
//! | `ElementRange` | E3022 | a byte sequence element is outside `[0, 255]`     |
//! | `Range`        | E3023 | a value is outside the bounds of the format       |
//!
//! # Features
//!
//! * `native` (default) - decode 16, 32 and 64-bit values through `byteorder` instead of
//!   the arbitrary-precision path. Results are identical either way.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_debug_implementations,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

pub mod builtins;
pub mod encoding;
pub mod errors;
pub mod float;
pub mod inum;
pub mod marshal;
pub mod prelude;
mod util;

use bytes::Bytes;
use failure::*;
use float::Float;
use half::f16;
use inum::Inum;
use num_bigint::BigInt;

#[derive(Eq, PartialEq, Clone, Hash, Debug)]
/// [`Value`] and its variants: the arguments and results of the [`builtins`].
///
/// # Example
///
/// ```
/// use fixint::prelude::*;
///
/// let b = Value::Bool(true);
///
/// let val = match b {
///     Value::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// ```
pub enum Value {
    /// Null. What a caller passes for "nothing".
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer, of any size.
    ///
    /// # Example
    ///
    /// ```
    /// use fixint::prelude::*;
    ///
    /// let num = Value::Int(Inum::I64(1));
    ///
    /// assert_eq!(num, Value::from(1));
    /// ```
    Int(Inum),
    /// Floating point number.
    Float(Float),
    /// A single byte.
    Byte(u8),
    /// Bytestring.
    Byt(Bytes),
    /// Array.
    Array(Vec<Value>),
}

impl Value {
    /// An array of [`Value::Byte`]s, the form encoded integers are returned in.
    ///
    /// # Example
    ///
    /// ```
    /// use fixint::Value;
    ///
    /// let arr = Value::byte_array(&[1, 2]);
    ///
    /// assert_eq!(arr, Value::Array(vec![Value::Byte(1), Value::Byte(2)]));
    /// ```
    pub fn byte_array(bytes: &[u8]) -> Value { Value::Array(bytes.iter().map(|b| Value::Byte(*b)).collect()) }

    /// A short name for the kind of value, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Byte(_) => "byte",
            Value::Byt(_) => "bytes",
            Value::Array(_) => "array",
        }
    }

    /// Consumes the value, converting it to a [`BigInt`].
    /// This will return an [`Error`] unless the value is an integer or a byte.
    ///
    /// # Example
    ///
    /// ```
    /// use fixint::prelude::*;
    ///
    /// let n = Value::from(u128::max_value()).into_bigint().unwrap();
    ///
    /// assert_eq!(n, BigInt::from(u128::max_value()));
    /// ```
    pub fn into_bigint(self) -> Result<BigInt, Error> {
        match self {
            Value::Int(i) => Ok(i.into_bigint()),
            Value::Byte(b) => Ok(BigInt::from(b)),
            v => bail!("Value is `{}`, cannot convert to `BigInt`", v.type_name()),
        }
    }

    /// Reads a byte sequence: either a bytestring or an array of bytes.
    /// This will return an [`Error`] for anything else, including arrays holding
    /// something other than [`Value::Byte`]s.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        match self {
            Value::Byt(bs) => Ok(bs.to_vec()),
            Value::Array(items) => {
                items
                    .iter()
                    .map(|item| {
                        match item {
                            Value::Byte(b) => Ok(*b),
                            other => Err(format_err!("Array holds `{}`, not a byte", other.type_name())),
                        }
                    })
                    .collect()
            }
            v => bail!("Value is `{}`, not a byte sequence", v.type_name()),
        }
    }

    /// Consumes the value, reading it as a byte sequence, see [`Value::to_bytes`].
    pub fn into_bytes(self) -> Result<Vec<u8>, Error> { self.to_bytes() }
}

from_fn!(Value:
    Inum => Value::Int;
    Float => Value::Float;
    bool => Value::Bool;
    u8 => Value::Byte;
    Bytes => Value::Byt;
    Vec<Value> => Value::Array;
    () => |_| Value::Null;
);

compose_from!(Value via Inum: i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, BigInt);
compose_from!(Value via Float: f16, f32, f64);
