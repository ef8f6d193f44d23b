use super::*;
use bytes::{Buf, IntoBuf};
use num_bigint::{BigInt, BigUint};
use smallvec::{smallvec, SmallVec};

/// Interprets `bytes` as a big-endian unsigned integer.
///
/// # Example
///
/// ```
/// use fixint::encoding::parse;
/// use num_bigint::BigUint;
///
/// assert_eq!(parse(&[0, 1, 2]), BigUint::from(0x0102u32));
/// ```
pub fn parse(bytes: &[u8]) -> BigUint { BigUint::from_bytes_be(bytes) }

#[inline]
fn check_len(data: &[u8], format: IntFormat) -> Result<(), CodecError> {
    if data.len() == format.bytes() {
        Ok(())
    } else {
        Err(CodecError::Length {
            expected: format.bytes(),
            found:    data.len(),
        })
    }
}

/// Decodes exactly `format.bytes()` bytes in byte `order`.
///
/// # Arguments
///
/// * `data: &[u8]` - The encoded value.
/// * `format: IntFormat` - The width and signedness of the encoded value.
/// * `order: Endianness` - The byte order of `data`.
///
/// # Errors
///
/// Returns [`CodecError::Length`] if `data` is not exactly as long as the format.
///
/// # Example
///
/// ```
/// use fixint::encoding::*;
/// use num_bigint::BigInt;
///
/// let format = IntFormat::signed(Width::W8);
///
/// assert_eq!(decode(&[0xff], format, Endianness::Big).unwrap(), BigInt::from(-1));
/// ```
pub fn decode(data: &[u8], format: IntFormat, order: Endianness) -> Result<BigInt, CodecError> {
    check_len(data, format)?;

    #[cfg(feature = "native")]
    {
        if let Some(i) = native::decode(data, format, order) {
            return Ok(i);
        }
    }

    Ok(decode_wide(data, format, order))
}

/// The generic path, valid for every width.
pub(crate) fn decode_wide(data: &[u8], format: IntFormat, order: Endianness) -> BigInt {
    let mut canon: SmallVec<[u8; MAX_WIDTH_BYTES]> = SmallVec::from_slice(data);
    if order == Endianness::Little {
        from_little_endian(&mut canon[..]);
    }
    from_twos_complement(parse(&canon), format)
}

/// Decodes a whole buffer, which must hold exactly one value.
///
/// # Arguments
///
/// * `bs` - A buffer containing the encoded value.
///
/// # Example
///
/// ```
/// use fixint::encoding::*;
/// use num_bigint::BigInt;
///
/// let format = IntFormat::unsigned(Width::W16);
///
/// let dec = decode_full(&[0x34u8, 0x12][..], format, Endianness::Little).unwrap();
///
/// assert_eq!(dec, BigInt::from(0x1234));
/// ```
pub fn decode_full<B: IntoBuf>(
    bs: B,
    format: IntFormat,
    order: Endianness,
) -> Result<BigInt, CodecError> {
    let mut buf = bs.into_buf();
    if buf.remaining() != format.bytes() {
        return Err(CodecError::Length {
            expected: format.bytes(),
            found:    buf.remaining(),
        });
    }
    let mut data: SmallVec<[u8; MAX_WIDTH_BYTES]> = smallvec![0; format.bytes()];
    buf.copy_to_slice(&mut data);
    decode(&data, format, order)
}

#[cfg(feature = "native")]
mod native {
    //! Fixed-width primitives for the widths that fit a machine integer.

    use super::*;
    use byteorder::{BigEndian, ByteOrder, LittleEndian};

    fn read<B: ByteOrder>(data: &[u8], format: IntFormat) -> Option<BigInt> {
        let signed = format.is_signed();
        let i = match format.width {
            Width::W16 if signed => BigInt::from(B::read_i16(data)),
            Width::W16 => BigInt::from(B::read_u16(data)),
            Width::W32 if signed => BigInt::from(B::read_i32(data)),
            Width::W32 => BigInt::from(B::read_u32(data)),
            Width::W64 if signed => BigInt::from(B::read_i64(data)),
            Width::W64 => BigInt::from(B::read_u64(data)),
            Width::W8 | Width::W128 | Width::W256 => return None,
        };
        Some(i)
    }

    /// Reads 16, 32 and 64-bit values directly; `None` for every other width.
    ///
    /// `data` must already have the length of `format`.
    pub(super) fn decode(data: &[u8], format: IntFormat, order: Endianness) -> Option<BigInt> {
        match order {
            Endianness::Big => read::<BigEndian>(data, format),
            Endianness::Little => read::<LittleEndian>(data, format),
        }
    }
}
