use curve::DomainParams;
use ecdsa::{Signature, SigningKey, VerifyingKey};

fn main() {
    let params = DomainParams::secp256k1();
    let mut rng = rand::rng();
    let sk = SigningKey::random(&params, &mut rng).expect("keygen");
    let vk = VerifyingKey::from(&sk);

    let params_bytes = bincode::serialize(&params).expect("serialize params");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = b"hello ecdsa";
    let sig = sk.sign_message(&params, &mut rng, msg).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    println!("r = {:x}", sig.r);
    println!("s = {:x}", sig.s);

    // Everything arriving from outside is validated before use.
    let params2: DomainParams = bincode::deserialize(&params_bytes).expect("deserialize params");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let vk2 = VerifyingKey::from_point(&params2, vk2.point().clone()).expect("valid key");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = vk2.verify_message(&params2, msg, &sig2);
    println!("signature valid: {ok}");
    assert!(ok);
}
