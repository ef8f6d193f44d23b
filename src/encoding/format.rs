use super::constants::*;
use std::fmt;

/// The bit-width of a fixed-width integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    W128,
    W256,
}

impl Width {
    /// Every supported width, narrowest first.
    pub const ALL: [Width; 6] = [
        Width::W8,
        Width::W16,
        Width::W32,
        Width::W64,
        Width::W128,
        Width::W256,
    ];

    /// Number of bits.
    pub fn bits(self) -> usize {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::W128 => 128,
            Width::W256 => 256,
        }
    }

    /// Number of bytes in the encoded form.
    ///
    /// # Example
    ///
    /// ```
    /// use fixint::encoding::Width;
    ///
    /// assert_eq!(Width::W128.bytes(), 16);
    /// ```
    pub fn bytes(self) -> usize { self.bits() / BITS_PER_BYTE }
}

/// Whether a format holds negative values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    pub fn is_signed(self) -> bool { self == Signedness::Signed }
}

/// A width together with a signedness, e.g. `i128` or `u16`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct IntFormat {
    pub width:      Width,
    pub signedness: Signedness,
}

impl IntFormat {
    pub const fn new(width: Width, signedness: Signedness) -> Self { IntFormat { width, signedness } }

    /// A signed format of the given width.
    pub const fn signed(width: Width) -> Self { IntFormat::new(width, Signedness::Signed) }

    /// An unsigned format of the given width.
    pub const fn unsigned(width: Width) -> Self { IntFormat::new(width, Signedness::Unsigned) }

    pub fn bits(self) -> usize { self.width.bits() }

    pub fn bytes(self) -> usize { self.width.bytes() }

    pub fn is_signed(self) -> bool { self.signedness.is_signed() }

    /// All twelve formats, unsigned before signed for each width.
    pub fn all() -> impl Iterator<Item = IntFormat> {
        Width::ALL
            .to_vec()
            .into_iter()
            .flat_map(|w| vec![IntFormat::unsigned(w), IntFormat::signed(w)].into_iter())
    }
}

impl fmt::Display for IntFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = if self.is_signed() { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits())
    }
}
