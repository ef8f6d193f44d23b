use fixint::prelude::*;
use fixint_strategy::*;
use proptest::prelude::*;

fn name(prefix: &str, format: IntFormat, link: &str, order: Endianness) -> String {
    let order = match order {
        Endianness::Big => "big",
        Endianness::Little => "little",
    };
    format!("{}_{}_{}_{}_endian", prefix, format, link, order)
}

fn encoder(format: IntFormat, order: Endianness) -> BuiltinFn {
    lookup(&name("encode", format, "to", order)).unwrap().func
}

fn decoder(format: IntFormat, order: Endianness) -> BuiltinFn {
    lookup(&name("decode", format, "from", order)).unwrap().func
}

#[test]
fn every_format_is_registered() {
    for format in IntFormat::all() {
        for order in Endianness::ALL.iter() {
            assert!(lookup(&name("encode", format, "to", *order)).is_some());
            assert!(lookup(&name("decode", format, "from", *order)).is_some());
        }
    }
}

#[test]
fn i128_little() {
    let enc = call("encode_i128_to_little_endian", &[Value::from(-2)]).unwrap();
    let mut expected = vec![0xffu8; 16];
    expected[0] = 0xfe;
    assert_eq!(enc.into_bytes().unwrap(), expected);
}

#[test]
fn i8_bounds() {
    assert_eq!(
        encode_i8_to_big_endian(&[Value::from(-128)]).unwrap(),
        Value::byte_array(&[0x80])
    );
    assert_eq!(
        encode_i8_to_big_endian(&[Value::from(127)]).unwrap(),
        Value::byte_array(&[0x7f])
    );
    assert_eq!(
        encode_i8_to_big_endian(&[Value::from(128)]).unwrap_err().kind(),
        ErrorKind::Range
    );
    assert_eq!(
        encode_i8_to_big_endian(&[Value::from(-129)]).unwrap_err().kind(),
        ErrorKind::Range
    );
}

#[test]
fn u256_max() {
    let enc = decode_u256_from_little_endian(&[Value::byte_array(&[0xff; 32])]).unwrap();
    let (_, max) = bounds(IntFormat::unsigned(Width::W256));
    assert_eq!(enc.into_bigint().unwrap(), max);
}

#[test]
fn bytestring_argument() {
    let dec = decode_u16_from_big_endian(&[Value::from(Bytes::from_static(&[1, 2]))]).unwrap();
    assert_eq!(dec, Value::from(0x0102));
}

#[test]
fn error_messages() {
    let err = encode_u8_to_big_endian(&[Value::Null]).unwrap_err();
    assert_eq!(err.code(), "E3020");

    let err = decode_u64_from_big_endian(&[Value::byte_array(&[0; 7])]).unwrap_err();
    assert_eq!(err.code(), "E3021");

    let err = decode_u8_from_big_endian(&[Value::Array(vec![Value::from(-5)])]).unwrap_err();
    assert_eq!(err.code(), "E3022");

    let err = encode_u8_to_big_endian(&[]).unwrap_err();
    assert_eq!(err.code(), "E7001");
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode((format, value) in arb_format_and_value(), order in arb_endianness()) {
        let enc = encoder(format, order)(&[Value::from(value.clone())]).unwrap();
        prop_assert_eq!(enc.to_bytes().unwrap().len(), format.bytes());

        let dec = decoder(format, order)(&[enc]).unwrap();
        prop_assert_eq!(dec, Value::from(value));
    }

    #[test]
    fn builtins_agree_with_codec((format, value) in arb_format_and_value(), order in arb_endianness()) {
        let enc = encoder(format, order)(&[Value::from(value.clone())]).unwrap();
        prop_assert_eq!(enc.into_bytes().unwrap(), encode_full(&value, format, order).unwrap());
    }

    #[test]
    fn any_byte_sequence_decodes(
        (format, arg) in arb_format().prop_flat_map(|f| (Just(f), arb_byte_seq(f.bytes()))),
        order in arb_endianness(),
    ) {
        let dec = decoder(format, order)(&[arg.clone()]);
        prop_assert!(dec.is_ok(), "{:?} rejected as {}", arg, format);
    }

    #[test]
    fn floats_truncate(f in -1e30f64..1e30f64, order in arb_endianness()) {
        let format = IntFormat::signed(Width::W128);
        let from_float = encoder(format, order)(&[Value::from(f)]).unwrap();
        let truncated = BigInt::from(f.trunc() as i128);
        let from_int = encoder(format, order)(&[Value::from(truncated)]).unwrap();
        prop_assert_eq!(from_float, from_int);
    }

    #[test]
    fn non_numeric_rejected(format in arb_format(), order in arb_endianness(), arg in arb_non_numeric()) {
        let err = encoder(format, order)(&[arg]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn out_of_range_rejected(
        (format, value) in arb_format().prop_flat_map(|f| (Just(f), arb_out_of_range(f))),
        order in arb_endianness(),
    ) {
        let err = encoder(format, order)(&[Value::from(value)]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn wrong_arity_rejected(format in arb_format(), order in arb_endianness(), n in 0usize..5) {
        prop_assume!(n != 1);
        let args = vec![Value::from(0); n];
        prop_assert_eq!(encoder(format, order)(&args).unwrap_err().kind(), ErrorKind::Arity);
        prop_assert_eq!(decoder(format, order)(&args).unwrap_err().kind(), ErrorKind::Arity);
    }
}
