/// Upper bound on nonce draws for a single ElGamal signature.
///
/// A nonce is usable when it is coprime to `p - 1`; for a safe prime that is
/// close to half of all draws.
pub const MAX_SIGNING_ATTEMPTS: u32 = 256;
