use super::*;
use bytes::BytesMut;
use num_bigint::{BigInt, BigUint};
use smallvec::{smallvec, SmallVec};

/// A fixed-width integer rendered as bytes. Never longer than the widest format.
pub type FixedBytes = SmallVec<[u8; MAX_WIDTH_BYTES]>;

/// A sink for encoded bytes.
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

/// Convenience methods for [`Serializer`].
pub trait SerializerExt: Serializer {
    /// Add an unsigned representation as exactly `width.bytes()` bytes in `order`.
    ///
    /// # Arguments
    ///
    /// * `unsigned: &BigUint` - The value to be added, already below `2^width`.
    /// * `width: Width` - The width of the encoded value.
    /// * `order: Endianness` - The byte order of the encoded value.
    fn put_fixed(&mut self, unsigned: &BigUint, width: Width, order: Endianness);
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

impl Serializer for BytesMut {
    type Out = Bytes;

    fn put_u8(&mut self, u: u8) { self.extend_from_slice(&[u]) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self.freeze() }
}

impl<S: Serializer> SerializerExt for S {
    #[inline]
    fn put_fixed(&mut self, unsigned: &BigUint, width: Width, order: Endianness) {
        let mut out = render(unsigned, width);
        reorder(&mut out[..], order);
        self.put_slice(&out);
    }
}

/// Renders `unsigned` as exactly `width.bytes()` big-endian bytes, padding with zeros on
/// the left.
///
/// # Example
///
/// ```
/// use fixint::encoding::{render, Width};
/// use num_bigint::BigUint;
///
/// let out = render(&BigUint::from(0x0102u32), Width::W32);
///
/// assert_eq!(&out[..], &[0, 0, 1, 2]);
/// ```
pub fn render(unsigned: &BigUint, width: Width) -> FixedBytes {
    let digits = unsigned.to_bytes_be();
    let len = width.bytes();

    if digits.len() >= len {
        // only zero padding can be dropped for validated input
        SmallVec::from_slice(&digits[digits.len() - len..])
    } else {
        let mut out: FixedBytes = smallvec![0; len - digits.len()];
        out.extend_from_slice(&digits);
        out
    }
}

/// Encodes `value` in `format` and byte `order`, storing output in `out`.
///
/// # Arguments
///
/// * `value: &BigInt` - The value to be encoded.
/// * `format: IntFormat` - The width and signedness of the encoded value.
/// * `order: Endianness` - The byte order of the encoded value.
/// * `out: &mut S` - The [`Serializer`] the bytes are written to.
///
/// # Errors
///
/// Returns [`CodecError::Range`] if `value` does not fit in `format`; nothing is
/// written in that case.
pub fn encode<S: Serializer>(
    value: &BigInt,
    format: IntFormat,
    order: Endianness,
    out: &mut S,
) -> Result<(), CodecError> {
    validate(value, format)?;
    let unsigned = to_twos_complement(value, format.width);
    out.put_fixed(&unsigned, format.width, order);
    Ok(())
}

/// Encodes `value` into a new vector of exactly `format.bytes()` bytes.
///
/// # Example
///
/// ```
/// use fixint::encoding::*;
/// use num_bigint::BigInt;
///
/// let format = IntFormat::signed(Width::W16);
///
/// let enc = encode_full(&BigInt::from(-1), format, Endianness::Little).unwrap();
///
/// assert_eq!(enc, vec![0xff, 0xff]);
/// ```
pub fn encode_full(
    value: &BigInt,
    format: IntFormat,
    order: Endianness,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(format.bytes());
    encode(value, format, order, &mut out)?;
    Ok(out.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use num_traits::One;

    #[test]
    fn render_pads_to_width() {
        for width in Width::ALL.iter() {
            let out = render(&BigUint::one(), *width);
            assert_eq!(out.len(), width.bytes());
            assert_eq!(out[out.len() - 1], 1);
            assert!(out[..out.len() - 1].iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn render_zero() {
        assert_eq!(&render(&BigUint::from(0u32), Width::W64)[..], &[0; 8]);
    }

    #[test]
    fn render_drops_excess_leading_bytes() {
        let out = render(&BigUint::from(0x01_0203u32), Width::W16);
        assert_eq!(&out[..], &[2, 3]);
    }

    #[test]
    fn two_byte_orders() {
        let v = BigInt::from(0x0102);
        let format = IntFormat::signed(Width::W16);
        assert_eq!(encode_full(&v, format, Endianness::Big).unwrap(), vec![1, 2]);
        assert_eq!(encode_full(&v, format, Endianness::Little).unwrap(), vec![2, 1]);
    }

    #[test]
    fn negative_values() {
        let format = IntFormat::signed(Width::W32);
        assert_eq!(
            encode_full(&BigInt::from(-2), format, Endianness::Big).unwrap(),
            vec![0xff, 0xff, 0xff, 0xfe]
        );
        assert_eq!(
            encode_full(&BigInt::from(i32::min_value()), format, Endianness::Little).unwrap(),
            vec![0, 0, 0, 0x80]
        );
    }

    #[test]
    fn u256_top_bit() {
        let v = BigInt::one() << 255;
        let enc = encode_full(&v, IntFormat::unsigned(Width::W256), Endianness::Big).unwrap();
        assert_eq!(enc.len(), 32);
        assert_eq!(enc[0], 0x80);
        assert!(enc[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let mut out = Vec::<u8>::new();
        let err = encode(
            &BigInt::from(-1),
            IntFormat::unsigned(Width::W8),
            Endianness::Big,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(out.is_empty());
    }

    #[test]
    fn appends_to_bytes_mut() {
        let mut out = BytesMut::with_capacity(3);
        out.put_u8(0xaa);
        encode(
            &BigInt::from(258),
            IntFormat::unsigned(Width::W16),
            Endianness::Little,
            &mut out,
        )
        .unwrap();
        assert_eq!(&out.finalize()[..], &[0xaa, 2, 1]);
    }
}
