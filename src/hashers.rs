use sha2::{Digest, Sha512};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{group::CurveGroup, keys::clamp};

/// Seed expansion result: clamped scalar bytes and the nonce-derivation key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ExpandedSecret {
    pub scalar: [u8; 32],
    pub nonce_key: [u8; 32],
}

/// SHA-512 of `data`.
#[must_use]
pub fn sha512(data: &[u8]) -> [u8; 64] {
    sha512_parts(&[data])
}

/// SHA-512 over the concatenation of `parts`.
#[must_use]
pub fn sha512_parts(parts: &[&[u8]]) -> [u8; 64] {
    let mut h = Sha512::new();
    for p in parts {
        // Sha512 also implements digest::Update; name the trait
        Digest::update(&mut h, p);
    }
    let digest = h.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}

/// First `N` bytes of SHAKE256 over the concatenation of `parts`.
#[must_use]
pub fn shake256<const N: usize>(parts: &[&[u8]]) -> [u8; N] {
    let mut xof = Shake256::default();
    for p in parts {
        xof.update(p);
    }
    let mut out = [0u8; N];
    xof.finalize_xof().read(&mut out);
    out
}

/// Signature scheme: `SHA-512(seed)` split into the clamped scalar and the nonce prefix.
#[must_use]
pub fn expand_signing_seed(seed: &[u8]) -> ExpandedSecret {
    let mut digest = sha512(seed);
    let expanded = split_and_clamp(&digest);
    digest.zeroize();
    expanded
}

/// VRF: the first 64 bytes of `SHAKE256(seed)` split into the clamped scalar `x` and `skhr`.
#[must_use]
pub fn expand_vrf_seed(seed: &[u8]) -> ExpandedSecret {
    let mut stream = shake256::<64>(&[seed]);
    let expanded = split_and_clamp(&stream);
    stream.zeroize();
    expanded
}

fn split_and_clamp(wide: &[u8; 64]) -> ExpandedSecret {
    let mut expanded = ExpandedSecret { scalar: [0u8; 32], nonce_key: [0u8; 32] };
    expanded.scalar.copy_from_slice(&wide[..32]);
    expanded.nonce_key.copy_from_slice(&wide[32..]);
    clamp(&mut expanded.scalar);
    expanded
}

/// r = SHA-512(prefix || M) mod ℓ
#[must_use]
pub fn signing_nonce<C: CurveGroup>(prefix: &[u8; 32], message: &[u8]) -> C::Scalar {
    let mut wide = sha512_parts(&[prefix, message]);
    let r = C::scalar_reduce_wide(&wide);
    wide.zeroize();
    r
}

/// k = SHA-512(R || A || M) mod ℓ
#[must_use]
pub fn signing_challenge<C: CurveGroup>(r: &[u8; 32], public_key: &[u8; 32], message: &[u8]) -> C::Scalar {
    C::scalar_reduce_wide(&sha512_parts(&[r, public_key, message]))
}

/// r = SHAKE256(skhr || pk || M)[..64] mod ℓ
#[must_use]
pub fn vrf_nonce<C: CurveGroup>(skhr: &[u8; 32], public_key: &[u8; 32], message: &[u8]) -> C::Scalar {
    let mut wide = shake256::<64>(&[skhr, public_key, message]);
    let r = C::scalar_reduce_wide(&wide);
    wide.zeroize();
    r
}

/// c = SHAKE256(A || B || M)[..64] mod ℓ
#[must_use]
pub fn vrf_challenge<C: CurveGroup>(a: &[u8; 32], b: &[u8; 32], message: &[u8]) -> C::Scalar {
    C::scalar_reduce_wide(&shake256::<64>(&[a, b, message]))
}

/// VRF value: SHAKE256(ii || M)[..32]
#[must_use]
pub fn vrf_output_hash(ii: &[u8; 32], message: &[u8]) -> [u8; 32] {
    shake256::<32>(&[ii, message])
}

/// Hash a message onto the prime-order subgroup:
/// `8 · map_to_curve(SHAKE256(M)[..32])`.
#[must_use]
pub fn hash_to_curve<C: CurveGroup>(message: &[u8]) -> C::Point {
    let point = C::map_to_curve(&shake256::<32>(&[message]));
    C::double(&C::double(&C::double(&point)))
}
