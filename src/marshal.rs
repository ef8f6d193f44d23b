//! Coercion of [`Value`] arguments into the types the codec operates on.

use crate::{
    encoding::FixedBytes,
    errors::CodecError,
    Value,
};
use num_bigint::BigInt;
use smallvec::SmallVec;

/// Checks that exactly `expected` arguments were passed.
#[inline]
pub fn check_arity(args: &[Value], expected: usize) -> Result<(), CodecError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CodecError::Arity {
            expected,
            found: args.len(),
        })
    }
}

/// Coerces a numeric argument into a magnitude.
///
/// Integers are taken exactly, bytes are widened and floats are truncated toward zero.
///
/// # Errors
///
/// Returns a type error for non-numeric arguments and for NaN or infinite floats.
///
/// # Example
///
/// ```
/// use fixint::{marshal::to_magnitude, Value};
/// use num_bigint::BigInt;
///
/// assert_eq!(to_magnitude(&Value::from(42.7)).unwrap(), BigInt::from(42));
/// assert!(to_magnitude(&Value::Null).is_err());
/// ```
pub fn to_magnitude(arg: &Value) -> Result<BigInt, CodecError> {
    match arg {
        Value::Int(i) => Ok(i.to_bigint()),
        Value::Float(f) => f.trunc().ok_or_else(|| CodecError::NonFinite(f.to_f64())),
        Value::Byte(b) => Ok(BigInt::from(*b)),
        Value::Null | Value::Bool(_) | Value::Byt(_) | Value::Array(_) => {
            Err(CodecError::Type {
                expected: "an integer",
                found:    arg.type_name(),
            })
        }
    }
}

#[inline]
fn check_len(found: usize, expected: usize) -> Result<(), CodecError> {
    if found == expected {
        Ok(())
    } else {
        Err(CodecError::Length { expected, found })
    }
}

/// Coerces a byte-sequence argument into exactly `expected_len` raw bytes.
///
/// Arrays may hold bytes or integers in `[0, 255]`; bytestrings are taken as they are.
/// The container is checked first, then its length, then each element in order.
///
/// # Errors
///
/// * a type error if `arg` is not a sequence, or holds something other than bytes or
///   integers;
/// * a length error if it does not hold `expected_len` elements;
/// * an element range error for the first integer element outside `[0, 255]`.
pub fn to_byte_buffer(arg: &Value, expected_len: usize) -> Result<FixedBytes, CodecError> {
    match arg {
        Value::Array(items) => {
            check_len(items.len(), expected_len)?;
            let mut out = FixedBytes::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                out.push(element_to_byte(index, item)?);
            }
            Ok(out)
        }
        Value::Byt(bs) => {
            check_len(bs.len(), expected_len)?;
            Ok(SmallVec::from_slice(bs))
        }
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Byte(_) => {
            Err(CodecError::Type {
                expected: "a byte sequence",
                found:    arg.type_name(),
            })
        }
    }
}

fn element_to_byte(index: usize, item: &Value) -> Result<u8, CodecError> {
    match item {
        Value::Byte(b) => Ok(*b),
        Value::Int(i) => {
            i.to_u8().ok_or_else(|| CodecError::ElementRange {
                index,
                value: i.to_bigint(),
            })
        }
        _ => {
            Err(CodecError::ElementType {
                index,
                found: item.type_name(),
            })
        }
    }
}
