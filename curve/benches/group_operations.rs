use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::{random_scalar, DomainParams, Point};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_double(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let curve = params.curve();
    let g = params.generator();
    c.bench_function("secp256k1_double", |bencher| {
        bencher.iter(|| black_box(curve.double(black_box(g))))
    });
}

fn bench_add(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let curve = params.curve();
    let g = params.generator();
    let h = curve.mul_u64(g, 3).expect("mul");
    c.bench_function("secp256k1_add", |bencher| {
        bencher.iter(|| black_box(curve.add(black_box(g), black_box(&h))))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng, params.order()).expect("scalar");

    c.bench_function("secp256k1_scalar_mul", |bencher| {
        bencher.iter(|| black_box(params.mul_generator(black_box(&scalar))))
    });
}

fn bench_msm(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1_msm");
    let params = DomainParams::secp256k1();
    let curve = params.curve();

    for size in [2, 4, 8, 16].iter() {
        let mut rng = StdRng::seed_from_u64(12345);

        let points: Vec<Point> = (0..*size)
            .map(|i| curve.mul_u64(params.generator(), i as u64 + 1).expect("mul"))
            .collect();
        let scalars: Vec<BigUint> = (0..*size)
            .map(|_| random_scalar(&mut rng, params.order()).expect("scalar"))
            .collect();
        let terms: Vec<(&Point, &BigUint)> = points.iter().zip(scalars.iter()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(curve.multi_scalar_mul(black_box(&terms))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_double, bench_add, bench_scalar_mul, bench_msm);
criterion_main!(benches);
