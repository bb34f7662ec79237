use criterion::{Criterion, black_box, criterion_group, criterion_main};
use curve::DomainParams;
use ecdsa::{SigningKey, VerifyingKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sign(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&params, &mut rng).expect("keygen");
    let msg = b"benchmark message";

    c.bench_function("ecdsa_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk
                .sign_message(&params, &mut rng, black_box(msg))
                .expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let params = DomainParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&params, &mut rng).expect("keygen");
    let vk = VerifyingKey::from(&sk);
    let msg = b"benchmark message";
    let sig = sk.sign_message(&params, &mut rng, msg).expect("sign");

    c.bench_function("ecdsa_verify", |bencher| {
        bencher.iter(|| {
            let ok = vk.verify_message(&params, black_box(msg), black_box(&sig));
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
