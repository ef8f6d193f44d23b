use half::f16;
use num_bigint::BigInt;
use num_traits::FromPrimitive;

/// A floating point argument, stored as its bit pattern.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub enum Float {
    Half(u16),
    Single(u32),
    Double(u64),
}

use Float::*;

impl From<f16> for Float {
    fn from(f: f16) -> Float { Half(f.to_bits()) }
}

impl From<f32> for Float {
    fn from(f: f32) -> Float { Single(f.to_bits()) }
}

impl From<f64> for Float {
    fn from(f: f64) -> Float { Double(f.to_bits()) }
}

impl Float {
    /// Widens to an `f64`. Every precision converts exactly.
    pub fn to_f64(self) -> f64 {
        match self {
            Half(n) => f64::from(f16::from_bits(n)),
            Single(n) => f64::from(f32::from_bits(n)),
            Double(n) => f64::from_bits(n),
        }
    }

    /// Truncates toward zero, returning `None` for NaN and infinities.
    ///
    /// # Example
    ///
    /// ```
    /// use fixint::float::Float;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Float::from(-7.9f64).trunc(), Some(BigInt::from(-7)));
    /// assert_eq!(Float::from(std::f64::NAN).trunc(), None);
    /// ```
    pub fn trunc(self) -> Option<BigInt> { BigInt::from_f64(self.to_f64().trunc()) }
}
