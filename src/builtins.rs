//! # Codec builtins
//!
//! One encode and one decode function per width, signedness and byte order, each taking
//! a slice of [`Value`] arguments the way an interpreter passes them:
//!
//! * `encode_<i|u><width>_to_<big|little>_endian(value)` returns an array of bytes;
//! * `decode_<i|u><width>_from_<big|little>_endian(bytes)` returns an integer.
//!
//! Arguments are checked in a fixed order: arity, argument type, sequence length,
//! sequence elements and finally the numeric range.
//!
//! # Example
//!
//! ```
//! use fixint::{builtins::*, Value};
//!
//! let enc = encode_i16_to_little_endian(&[Value::from(-1)]).unwrap();
//! assert_eq!(enc.into_bytes().unwrap(), vec![0xff, 0xff]);
//!
//! let dec = decode_i8_from_big_endian(&[Value::byte_array(&[0xff])]).unwrap();
//! assert_eq!(dec, Value::from(-1));
//!
//! // or by name
//! let dec = call("decode_u16_from_little_endian", &[Value::byte_array(&[1, 2])]).unwrap();
//! assert_eq!(dec, Value::from(0x0201));
//! ```

use crate::{
    encoding::{self, Endianness, IntFormat, Signedness, Width},
    errors::CodecError,
    marshal::{check_arity, to_byte_buffer, to_magnitude},
    Value,
};
use failure::{bail, Error};
use log::{debug, trace};

/// The signature shared by every builtin.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, CodecError>;

/// A named builtin.
#[derive(Copy, Clone)]
pub struct Builtin {
    /// The name the builtin is called by.
    pub name: &'static str,
    /// The implementation.
    pub func: BuiltinFn,
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

/// Encodes the single numeric argument in `args`.
///
/// # Errors
///
/// Fails on arity, on a non-numeric argument and on a value outside of `format`.
pub fn encode_value(args: &[Value], format: IntFormat, order: Endianness) -> Result<Value, CodecError> {
    check_arity(args, 1)?;
    let value = to_magnitude(&args[0])?;
    let enc = encoding::encode_full(&value, format, order)?;
    Ok(Value::byte_array(&enc))
}

/// Decodes the single byte-sequence argument in `args`.
///
/// # Errors
///
/// Fails on arity, on a non-sequence argument, on a length other than `format.bytes()`
/// and on elements that are not bytes.
pub fn decode_value(args: &[Value], format: IntFormat, order: Endianness) -> Result<Value, CodecError> {
    check_arity(args, 1)?;
    let data = to_byte_buffer(&args[0], format.bytes())?;
    let value = encoding::decode(&data, format, order)?;
    Ok(Value::from(value))
}

macro_rules! builtins {
    ($($enc:ident, $dec:ident => $width:ident, $sign:ident, $order:ident;)*) => {
        $(
            #[doc = "Encodes one value, see the [module documentation](self)."]
            pub fn $enc(args: &[Value]) -> Result<Value, CodecError> {
                encode_value(
                    args,
                    IntFormat::new(Width::$width, Signedness::$sign),
                    Endianness::$order,
                )
            }

            #[doc = "Decodes one byte sequence, see the [module documentation](self)."]
            pub fn $dec(args: &[Value]) -> Result<Value, CodecError> {
                decode_value(
                    args,
                    IntFormat::new(Width::$width, Signedness::$sign),
                    Endianness::$order,
                )
            }
        )*

        /// Every builtin, by name.
        pub static BUILTINS: &[Builtin] = &[
            $(
                Builtin { name: stringify!($enc), func: $enc },
                Builtin { name: stringify!($dec), func: $dec },
            )*
        ];
    };
}

builtins! {
    encode_u8_to_big_endian, decode_u8_from_big_endian => W8, Unsigned, Big;
    encode_u8_to_little_endian, decode_u8_from_little_endian => W8, Unsigned, Little;
    encode_i8_to_big_endian, decode_i8_from_big_endian => W8, Signed, Big;
    encode_i8_to_little_endian, decode_i8_from_little_endian => W8, Signed, Little;

    encode_u16_to_big_endian, decode_u16_from_big_endian => W16, Unsigned, Big;
    encode_u16_to_little_endian, decode_u16_from_little_endian => W16, Unsigned, Little;
    encode_i16_to_big_endian, decode_i16_from_big_endian => W16, Signed, Big;
    encode_i16_to_little_endian, decode_i16_from_little_endian => W16, Signed, Little;

    encode_u32_to_big_endian, decode_u32_from_big_endian => W32, Unsigned, Big;
    encode_u32_to_little_endian, decode_u32_from_little_endian => W32, Unsigned, Little;
    encode_i32_to_big_endian, decode_i32_from_big_endian => W32, Signed, Big;
    encode_i32_to_little_endian, decode_i32_from_little_endian => W32, Signed, Little;

    encode_u64_to_big_endian, decode_u64_from_big_endian => W64, Unsigned, Big;
    encode_u64_to_little_endian, decode_u64_from_little_endian => W64, Unsigned, Little;
    encode_i64_to_big_endian, decode_i64_from_big_endian => W64, Signed, Big;
    encode_i64_to_little_endian, decode_i64_from_little_endian => W64, Signed, Little;

    encode_u128_to_big_endian, decode_u128_from_big_endian => W128, Unsigned, Big;
    encode_u128_to_little_endian, decode_u128_from_little_endian => W128, Unsigned, Little;
    encode_i128_to_big_endian, decode_i128_from_big_endian => W128, Signed, Big;
    encode_i128_to_little_endian, decode_i128_from_little_endian => W128, Signed, Little;

    encode_u256_to_big_endian, decode_u256_from_big_endian => W256, Unsigned, Big;
    encode_u256_to_little_endian, decode_u256_from_little_endian => W256, Unsigned, Little;
    encode_i256_to_big_endian, decode_i256_from_big_endian => W256, Signed, Big;
    encode_i256_to_little_endian, decode_i256_from_little_endian => W256, Signed, Little;
}

/// Finds a builtin by name.
pub fn lookup(name: &str) -> Option<&'static Builtin> { BUILTINS.iter().find(|b| b.name == name) }

/// Calls the builtin `name` with `args`.
///
/// # Errors
///
/// Fails if no builtin is called `name`, or with the builtin's own [`CodecError`].
pub fn call(name: &str, args: &[Value]) -> Result<Value, Error> {
    let builtin = match lookup(name) {
        Some(b) => b,
        None => bail!("no builtin named `{}`", name),
    };
    trace!("calling {} with {} argument(s)", name, args.len());
    match (builtin.func)(args) {
        Ok(v) => Ok(v),
        Err(e) => {
            debug!("{} rejected its arguments: {}", name, e);
            Err(e.into())
        }
    }
}
