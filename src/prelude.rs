pub use crate::{
    builtins::*,
    encoding::{
        bounds, decode, decode_full, encode, encode_bytes, encode_full, validate, Endianness,
        IntFormat, Signedness, Width,
    },
    errors::{CodecError, ErrorKind},
    float::Float,
    inum::Inum,
    Value,
};
pub use bytes::{Bytes, IntoBuf};
pub use half::f16;
pub use num_bigint::BigInt;
