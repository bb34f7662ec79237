use curve::{DomainParams, KeyPair};
use elgamal::Ciphertext;

fn main() {
    let params = DomainParams::toy();
    let mut rng = rand::rng();
    let keys = KeyPair::generate(&params, &mut rng).expect("keygen");
    println!("public key: {}", keys.public_point());

    let message = params.curve().point_u64(10, 9).expect("point");
    let ct = elgamal::encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
    println!("ciphertext: ({}, {})", ct.c1, ct.c2);

    let bytes = bincode::serialize(&ct).expect("serialize");
    let received: Ciphertext = bincode::deserialize(&bytes).expect("deserialize");

    let decrypted = elgamal::decrypt(&params, keys.private_scalar(), &received).expect("decrypt");
    println!("decrypted:  {decrypted}");
    assert_eq!(decrypted, message);
}
