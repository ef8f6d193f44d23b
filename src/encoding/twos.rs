//! Conversion between signed magnitudes and their unsigned two's-complement form.
//!
//! Negative values map to `2^width + value` by modular addition rather than by flipping
//! bits, which keeps the arithmetic exact at every width.

use super::format::{IntFormat, Width};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

#[inline]
fn modulus(width: Width) -> BigUint { BigUint::one() << width.bits() }

/// Maps `value` to its unsigned representation in `width` bits, i.e. `value mod 2^width`.
///
/// The result is always below `2^width`. For values that passed
/// [`validate`](super::validate) this is the two's-complement encoding; anything wider is
/// reduced, keeping only the low `width` bits.
///
/// # Example
///
/// ```
/// use fixint::encoding::{to_twos_complement, Width};
/// use num_bigint::{BigInt, BigUint};
///
/// let rep = to_twos_complement(&BigInt::from(-1), Width::W16);
///
/// assert_eq!(rep, BigUint::from(0xffffu32));
/// ```
pub fn to_twos_complement(value: &BigInt, width: Width) -> BigUint {
    let (sign, digits) = value.to_bytes_be();
    let size = modulus(width);
    let low = BigUint::from_bytes_be(&digits) % &size;
    match sign {
        Sign::Minus if !low.is_zero() => size - low,
        Sign::Minus | Sign::NoSign | Sign::Plus => low,
    }
}

/// Recovers a magnitude from its unsigned representation.
///
/// Unsigned formats pass the value through; signed formats subtract `2^width` when bit
/// `width - 1` is set.
pub fn from_twos_complement(unsigned: BigUint, format: IntFormat) -> BigInt {
    if format.is_signed() && unsigned.bits() == format.bits() {
        BigInt::from(unsigned) - BigInt::from(modulus(format.width))
    } else {
        BigInt::from(unsigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::bounds;

    #[test]
    fn non_negative_passes_through() {
        let v = BigInt::from(0x0102);
        assert_eq!(to_twos_complement(&v, Width::W16), BigUint::from(0x0102u32));
        assert_eq!(to_twos_complement(&BigInt::from(0), Width::W8), BigUint::from(0u32));
    }

    #[test]
    fn negative_one_is_all_ones() {
        for width in Width::ALL.iter() {
            let rep = to_twos_complement(&BigInt::from(-1), *width);
            assert_eq!(rep, modulus(*width) - BigUint::one());
            assert_eq!(rep.bits(), width.bits());
        }
    }

    #[test]
    fn min_maps_to_sign_bit_only() {
        let (min, _) = bounds(IntFormat::signed(Width::W256));
        let rep = to_twos_complement(&min, Width::W256);
        assert_eq!(rep, BigUint::one() << 255);
    }

    #[test]
    fn back_and_forth() {
        for format in IntFormat::all().filter(|f| f.is_signed()) {
            let (min, max) = bounds(format);
            for v in vec![min, max, BigInt::from(-1), BigInt::from(0), BigInt::from(1)] {
                let rep = to_twos_complement(&v, format.width);
                assert_eq!(from_twos_complement(rep, format), v);
            }
        }
    }

    #[test]
    fn wide_values_wrap() {
        // -2^16 - 1 is all ones in the low 16 bits
        let v = -(BigInt::one() << 16) - BigInt::one();
        assert_eq!(to_twos_complement(&v, Width::W16), BigUint::from(0xffffu32));

        let v = -(BigInt::one() << 300);
        assert_eq!(to_twos_complement(&v, Width::W256), BigUint::from(0u32));

        let v = (BigInt::one() << 8) + BigInt::from(7);
        assert_eq!(to_twos_complement(&v, Width::W8), BigUint::from(7u32));
    }

    #[test]
    fn unsigned_ignores_top_bit() {
        let format = IntFormat::unsigned(Width::W8);
        assert_eq!(
            from_twos_complement(BigUint::from(0xffu32), format),
            BigInt::from(255)
        );
        let format = IntFormat::signed(Width::W8);
        assert_eq!(
            from_twos_complement(BigUint::from(0xffu32), format),
            BigInt::from(-1)
        );
    }
}
