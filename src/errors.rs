use crate::encoding::IntFormat;
use num_bigint::BigInt;
use std::{error::Error, fmt};

/// The category of a [`CodecError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Wrong number of arguments.
    Arity,
    /// Argument (or sequence element) of the wrong kind.
    Type,
    /// Byte sequence of the wrong length.
    Length,
    /// Byte sequence element outside of `[0, 255]`.
    ElementRange,
    /// Numeric value outside of the bounds of the requested format.
    Range,
}

impl ErrorKind {
    /// The stable code attached to this kind of error.
    ///
    /// # Example
    ///
    /// ```
    /// use fixint::errors::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::Arity.code(), "E7001");
    /// ```
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Arity => "E7001",
            ErrorKind::Type => "E3020",
            ErrorKind::Length => "E3021",
            ErrorKind::ElementRange => "E3022",
            ErrorKind::Range => "E3023",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::Arity => "ArityError",
            ErrorKind::Type => "TypeError",
            ErrorKind::Length => "LengthError",
            ErrorKind::ElementRange => "ElementRangeError",
            ErrorKind::Range => "RangeError",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// An error encountered when encoding or decoding fails.
pub enum CodecError {
    /// The builtin was called with `found` arguments instead of `expected`.
    Arity { expected: usize, found: usize },
    /// The argument was of kind `found` where `expected` was required.
    Type {
        expected: &'static str,
        found:    &'static str,
    },
    /// An element of a byte sequence was of kind `found`.
    ElementType { index: usize, found: &'static str },
    /// A non-finite float was given where an integer was required.
    NonFinite(f64),
    /// The byte sequence had `found` elements instead of `expected`.
    Length { expected: usize, found: usize },
    /// The element at `index` does not fit in a byte.
    ElementRange { index: usize, value: BigInt },
    /// The value does not fit in `format`.
    Range { value: BigInt, format: IntFormat },
}

impl CodecError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Arity { .. } => ErrorKind::Arity,
            CodecError::Type { .. } | CodecError::ElementType { .. } | CodecError::NonFinite(_) => {
                ErrorKind::Type
            }
            CodecError::Length { .. } => ErrorKind::Length,
            CodecError::ElementRange { .. } => ErrorKind::ElementRange,
            CodecError::Range { .. } => ErrorKind::Range,
        }
    }

    /// The stable code of this error, see [`ErrorKind::code`].
    pub fn code(&self) -> &'static str { self.kind().code() }
}

impl Error for CodecError {}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}: ", self.code(), self.kind())?;
        match self {
            CodecError::Arity { expected, found } => {
                write!(f, "expected {} argument(s), found {}", expected, found)
            }
            CodecError::Type { expected, found } => {
                write!(f, "requires {} argument, found {}", expected, found)
            }
            CodecError::ElementType { index, found } => {
                write!(f, "element {} must be a byte, found {}", index, found)
            }
            CodecError::NonFinite(x) => {
                write!(f, "requires an integer argument, found non-finite float {}", x)
            }
            CodecError::Length { expected, found } => {
                write!(f, "expected {} bytes, found {}", expected, found)
            }
            CodecError::ElementRange { index, value } => {
                write!(f, "element {} has value {} out of byte range", index, value)
            }
            CodecError::Range { value, format } => {
                write!(f, "value {} out of {} range", value, format)
            }
        }
    }
}
