use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{encoding::BYTE_MAX, from_as, from_fn};

/// `Inum`s are either `i64` or `BigInt`s (i.e., big integers).
///
/// Values that fit in an `i64` are always stored as [`Inum::I64`], so two equal numbers
/// compare equal regardless of how they were built.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
pub enum Inum {
    I64(i64),
    Int(BigInt),
}

use Inum::*;

from_fn!(Inum:
    i64 => I64;
    u64 => |u: u64| {
        if u <= i64::max_value() as u64 {
            I64(u as i64)
        } else {
            Int(BigInt::from(u))
        }
    };
    BigInt => |i: BigInt| i.to_i64().map_or_else(|| Int(i), I64);
    i128 => |i: i128| Inum::from(BigInt::from(i));
    u128 => |u: u128| Inum::from(BigInt::from(u));
);

from_as!(Inum as i64: i8, i16, i32, isize, u8, u16, u32);
from_as!(Inum as u64: usize);

impl Inum {
    /// Consumes `self` to produce a `BigInt`.
    pub fn into_bigint(self) -> BigInt {
        match self {
            Inum::I64(i) => BigInt::from(i),
            Inum::Int(i) => i,
        }
    }

    /// Produces a `BigInt`.
    pub fn to_bigint(&self) -> BigInt {
        match self {
            Inum::I64(i) => BigInt::from(*i),
            Inum::Int(i) => i.clone(),
        }
    }

    /// Produces a `u8` if `self` lies in `[0, 255]`, otherwise returns `None`.
    pub fn to_u8(&self) -> Option<u8> {
        match self {
            Inum::I64(i) => {
                if 0 <= *i && *i <= i64::from(BYTE_MAX) {
                    Some(*i as u8)
                } else {
                    None
                }
            }
            Inum::Int(i) => i.to_u8(),
        }
    }
}
