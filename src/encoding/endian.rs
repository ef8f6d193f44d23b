/// Byte order of an encoded integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Endianness {
    /// Most significant byte first. The canonical order used internally.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Both orders, big-endian first.
    pub const ALL: [Endianness; 2] = [Endianness::Big, Endianness::Little];
}

/// Turns canonical big-endian bytes into little-endian bytes.
///
/// # Example
///
/// ```
/// use fixint::encoding::to_little_endian;
///
/// assert_eq!(to_little_endian(vec![1, 2, 3]), vec![3, 2, 1]);
/// ```
pub fn to_little_endian<B: AsMut<[u8]>>(mut bytes: B) -> B {
    bytes.as_mut().reverse();
    bytes
}

/// Turns little-endian bytes into canonical big-endian bytes.
pub fn from_little_endian<B: AsMut<[u8]>>(mut bytes: B) -> B {
    bytes.as_mut().reverse();
    bytes
}

/// Moves canonical big-endian bytes into `order`, or back.
#[inline]
pub(crate) fn reorder<B: AsMut<[u8]>>(bytes: B, order: Endianness) -> B {
    match order {
        Endianness::Big => bytes,
        Endianness::Little => to_little_endian(bytes),
    }
}
