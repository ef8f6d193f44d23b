#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use fixint::prelude::*;
use num_traits::One;

fn big_value() -> BigInt { -(BigInt::one() << 254) + BigInt::from(0x1234_5678) }

fn bench_enc(c: &mut Criterion) {
    for width in Width::ALL.iter() {
        let format = IntFormat::signed(*width);
        let (min, _) = bounds(format);
        c.bench_function(&format!("Encoding the minimum {}", format), move |b| {
            b.iter(|| encode_full(black_box(&min), format, Endianness::Little).unwrap())
        });
    }
}

fn bench_enc_single_alloc(c: &mut Criterion) {
    let value = big_value();
    let format = IntFormat::signed(Width::W256);
    c.bench_function("Encoding an i256, buffer preallocated", move |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(format.bytes());
            encode(black_box(&value), format, Endianness::Big, &mut out).unwrap();
            out
        })
    });
}

fn bench_dec(c: &mut Criterion) {
    for width in Width::ALL.iter() {
        let format = IntFormat::unsigned(*width);
        let enc = vec![0xa5u8; format.bytes()];
        c.bench_function(&format!("Decoding a {}", format), move |b| {
            b.iter(|| decode(black_box(&enc), format, Endianness::Little).unwrap())
        });
    }
}

fn bench_builtin(c: &mut Criterion) {
    let arg = Value::from(big_value());
    c.bench_function("Round trip through the i256 builtins", move |b| {
        b.iter(|| {
            let enc = encode_i256_to_big_endian(black_box(&[arg.clone()])).unwrap();
            decode_i256_from_big_endian(&[enc]).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_enc,
    bench_enc_single_alloc,
    bench_dec,
    bench_builtin
);
criterion_main!(benches);
