//! Inclusive bounds of each format and the range check run before every encode.

use super::format::{IntFormat, Signedness::*};
use crate::errors::CodecError;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// `2^bits` as a [`BigInt`].
#[inline]
pub(crate) fn pow2(bits: usize) -> BigInt { BigInt::one() << bits }

/// Computes the inclusive minimum and maximum of `format`.
///
/// # Example
///
/// ```
/// use fixint::encoding::{bounds, IntFormat, Width};
/// use num_bigint::BigInt;
///
/// let (min, max) = bounds(IntFormat::signed(Width::W8));
///
/// assert_eq!(min, BigInt::from(-128));
/// assert_eq!(max, BigInt::from(127));
/// ```
pub fn bounds(format: IntFormat) -> (BigInt, BigInt) {
    match format.signedness {
        Unsigned => (BigInt::zero(), pow2(format.bits()) - BigInt::one()),
        Signed => {
            let half = pow2(format.bits() - 1);
            (-half.clone(), half - BigInt::one())
        }
    }
}

/// Checks that `value` lies within the bounds of `format`.
///
/// # Errors
///
/// Returns [`CodecError::Range`] carrying the value and the format otherwise.
pub fn validate(value: &BigInt, format: IntFormat) -> Result<(), CodecError> {
    let (min, max) = bounds(format);
    if &min <= value && value <= &max {
        Ok(())
    } else {
        Err(CodecError::Range {
            value: value.clone(),
            format,
        })
    }
}
