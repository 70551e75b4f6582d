//! Deterministic Ed25519 signing and verification.

use subtle::ConstantTimeEq;

use crate::{
    edwards25519::Edwards25519,
    group::CurveGroup,
    hashers::{expand_signing_seed, signing_challenge, signing_nonce},
    types::{PrivateKey, PublicKey, Signature},
};

/// Sign `message`. Deterministic in `(private_key, message)`; never fails.
#[must_use]
pub fn sign_over<C: CurveGroup>(message: &[u8], private_key: &PrivateKey) -> Signature {
    let expanded = expand_signing_seed(private_key.seed());
    let s0 = C::scalar_from_bytes(&expanded.scalar);

    let r = signing_nonce::<C>(&expanded.nonce_key, message);
    let encoded_r = C::encode(&C::mul_base(&r));

    let k = signing_challenge::<C>(&encoded_r, &private_key.public_key().0, message);
    let s = C::scalar_mul_add(&k, &s0, &r);

    Signature::from_parts(&encoded_r, &C::scalar_to_bytes(&s))
}

#[must_use]
pub fn sign(message: &[u8], private_key: &PrivateKey) -> Signature {
    sign_over::<Edwards25519>(message, private_key)
}

/// Check `signature` on `message` under `public_key`.
///
/// Total: every input yields `true` or `false`, and all rejections look the same.
#[must_use]
pub fn verify_over<C: CurveGroup>(message: &[u8], public_key: &PublicKey, signature: &Signature) -> bool {
    let r_bytes = signature.r();
    let s_bytes = signature.s();
    // s must be < 2^253
    if s_bytes[31] & 0xE0 != 0 {
        return false;
    }
    let Some(a) = C::decode(&public_key.0) else {
        return false;
    };
    let minus_a = C::neg(&a);

    let k = signing_challenge::<C>(&r_bytes, &public_key.0, message);
    let s = C::scalar_from_bytes(&s_bytes);
    // R' = k·(-A) + s·B
    let check = C::encode(&C::double_mul_base(&k, &minus_a, &s));

    check[..].ct_eq(&r_bytes[..]).into()
}

#[must_use]
pub fn verify(message: &[u8], public_key: &PublicKey, signature: &Signature) -> bool {
    verify_over::<Edwards25519>(message, public_key, signature)
}
