use fixint::{
    encoding::{bounds, decode, Endianness, IntFormat, Signedness, Width},
    Value,
};
use num_bigint::BigInt;
use num_traits::One;
use proptest::prelude::*;

/// arbitrary Width for use with proptest
pub fn arb_width() -> impl Strategy<Value = Width> { (0..Width::ALL.len()).prop_map(|i| Width::ALL[i]) }

/// arbitrary Signedness for use with proptest
pub fn arb_signedness() -> impl Strategy<Value = Signedness> {
    prop_oneof![Just(Signedness::Signed), Just(Signedness::Unsigned)]
}

/// arbitrary IntFormat for use with proptest
pub fn arb_format() -> impl Strategy<Value = IntFormat> {
    (arb_width(), arb_signedness()).prop_map(|(w, s)| IntFormat::new(w, s))
}

/// arbitrary Endianness for use with proptest
pub fn arb_endianness() -> impl Strategy<Value = Endianness> {
    prop_oneof![Just(Endianness::Big), Just(Endianness::Little)]
}

/// arbitrary Integer that fits in `format`, drawn uniformly over its bit patterns
pub fn arb_in_range(format: IntFormat) -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u8>(), format.bytes())
        .prop_map(move |bs| decode(&bs, format, Endianness::Big).unwrap())
}

/// arbitrary Integer just outside of the bounds of `format`
pub fn arb_out_of_range(format: IntFormat) -> impl Strategy<Value = BigInt> {
    let (min, max) = bounds(format);
    (any::<bool>(), any::<u64>()).prop_map(move |(above, offset)| {
        let offset = BigInt::from(offset);
        if above {
            &max + BigInt::one() + offset
        } else {
            &min - BigInt::one() - offset
        }
    })
}

/// arbitrary format paired with an Integer that fits in it
pub fn arb_format_and_value() -> impl Strategy<Value = (IntFormat, BigInt)> {
    arb_format().prop_flat_map(|format| (Just(format), arb_in_range(format)))
}

/// arbitrary byte sequence argument of exactly `len` elements
pub fn arb_byte_seq(len: usize) -> impl Strategy<Value = Value> {
    let bytes = prop::collection::vec(any::<u8>(), len);
    prop_oneof![
        bytes.clone().prop_map(|bs| Value::byte_array(&bs)),
        bytes
            .clone()
            .prop_map(|bs| Value::Array(bs.into_iter().map(i64::from).map(Value::from).collect())),
        bytes.prop_map(|bs| Value::from(fixint::prelude::Bytes::from(bs))),
    ]
}

/// arbitrary argument that is neither a number nor a byte sequence
pub fn arb_non_numeric() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(|bs| Value::byte_array(&bs)),
    ]
}
