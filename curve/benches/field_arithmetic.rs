use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{mod_inverse, DomainParams};
use num_bigint::BigUint;

fn bench_secp256k1_field_mul(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let f = params.curve().field();
    let a = f.element(&BigUint::from(123456789u64).pow(7));
    let b = f.element(&BigUint::from(987654321u64).pow(7));
    c.bench_function("secp256k1_field_mul", |bencher| {
        bencher.iter(|| black_box(f.mul(black_box(&a), black_box(&b))))
    });
}

fn bench_secp256k1_field_inverse(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let f = params.curve().field();
    let a = f.element(&BigUint::from(123456789u64).pow(7));
    c.bench_function("secp256k1_field_inverse", |bencher| {
        bencher.iter(|| black_box(f.inverse(black_box(&a))))
    });
}

fn bench_scalar_inverse(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let k = BigUint::from(987654321u64).pow(7);
    c.bench_function("secp256k1_scalar_inverse", |bencher| {
        bencher.iter(|| black_box(mod_inverse(black_box(&k), params.order())))
    });
}

criterion_group!(
    benches,
    bench_secp256k1_field_mul,
    bench_secp256k1_field_inverse,
    bench_scalar_inverse
);
criterion_main!(benches);
