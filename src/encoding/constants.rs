/// 8
pub(crate) const BITS_PER_BYTE: usize = 8;
/// Largest value of a byte-sequence element
pub(crate) const BYTE_MAX: u8 = 0b1111_1111;
/// Bytes in the widest supported format (256 bits)
pub(crate) const MAX_WIDTH_BYTES: usize = 32;
