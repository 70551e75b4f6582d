//! EC-VRF over Edwards25519 with SHAKE256.
//!
//! Proof layout is `c || t || ii` where `ii = x·H(M)` is the proof point,
//! `c` the challenge and `t = r - c·x` the response. The VRF value is
//! `SHAKE256(ii || M)[..32]`. Proving needs no randomness: the nonce is
//! derived from the secret `skhr`, the public key and the message.

use subtle::ConstantTimeEq;

use crate::{
    edwards25519::Edwards25519,
    errors::CryptoError,
    group::CurveGroup,
    hashers::{expand_vrf_seed, hash_to_curve, vrf_challenge, vrf_nonce, vrf_output_hash},
    keys::{generate_vrf_key_from_rng, vrf_keypair_from_seed},
    types::{PublicKey, VrfOutput, VrfPrivateKey, VrfProof, SEED_LEN},
};

/// Produce the VRF value and its proof for `message`.
#[must_use]
pub fn prove_over<C: CurveGroup>(message: &[u8], private_key: &VrfPrivateKey) -> (VrfOutput, VrfProof) {
    let expanded = expand_vrf_seed(private_key.seed());
    let x = C::scalar_from_bytes(&expanded.scalar);

    let hm = hash_to_curve::<C>(message);
    let ii = C::encode(&C::mul(&x, &hm));

    let r = vrf_nonce::<C>(&expanded.nonce_key, &private_key.public_key().0, message);
    let gr = C::encode(&C::mul_base(&r));
    let hr = C::encode(&C::mul(&r, &hm));

    let c = vrf_challenge::<C>(&gr, &hr, message);
    let t = C::scalar_mul_add(&x, &C::scalar_neg(&c), &r);

    let proof = VrfProof::from_parts(&C::scalar_to_bytes(&c), &C::scalar_to_bytes(&t), &ii);
    (VrfOutput(vrf_output_hash(&ii, message)), proof)
}

#[must_use]
pub fn prove(message: &[u8], private_key: &VrfPrivateKey) -> (VrfOutput, VrfProof) {
    prove_over::<Edwards25519>(message, private_key)
}

/// Recompute the VRF value without a proof. Byte-identical to the value from [`prove_over`].
#[must_use]
pub fn compute_over<C: CurveGroup>(message: &[u8], private_key: &VrfPrivateKey) -> VrfOutput {
    let expanded = expand_vrf_seed(private_key.seed());
    let x = C::scalar_from_bytes(&expanded.scalar);
    let ii = C::encode(&C::mul(&x, &hash_to_curve::<C>(message)));
    VrfOutput(vrf_output_hash(&ii, message))
}

#[must_use]
pub fn compute(message: &[u8], private_key: &VrfPrivateKey) -> VrfOutput {
    compute_over::<Edwards25519>(message, private_key)
}

/// Check that `value` is the VRF value of `message` under `public_key`, as attested by `proof`.
///
/// Total: every input yields `true` or `false`.
#[must_use]
pub fn verify_over<C: CurveGroup>(
    message: &[u8],
    public_key: &PublicKey,
    value: &VrfOutput,
    proof: &VrfProof,
) -> bool {
    let (c_bytes, t_bytes, ii_bytes) = proof.parts();

    let expected = vrf_output_hash(&ii_bytes, message);
    if !bool::from(expected[..].ct_eq(&value.0[..])) {
        return false;
    }

    let Some(p) = C::decode_prime_order(&public_key.0) else {
        return false;
    };
    let Some(ii) = C::decode_prime_order(&ii_bytes) else {
        return false;
    };

    let c = C::scalar_from_bytes(&c_bytes);
    let t = C::scalar_from_bytes(&t_bytes);

    // A = c·P + t·B, B = t·H(M) + c·ii
    let a = C::double_mul_base(&c, &p, &t);
    let hm = hash_to_curve::<C>(message);
    let b = C::double_mul(&t, &hm, &c, &ii);

    // byte comparison also rejects a non-reduced c
    let c_check = vrf_challenge::<C>(&C::encode(&a), &C::encode(&b), message);
    C::scalar_to_bytes(&c_check)[..].ct_eq(&c_bytes[..]).into()
}

#[must_use]
pub fn verify(message: &[u8], public_key: &PublicKey, value: &VrfOutput, proof: &VrfProof) -> bool {
    verify_over::<Edwards25519>(message, public_key, value, proof)
}

/// Raw-byte verifier: any buffer of the wrong length is a rejection.
#[must_use]
pub fn verify_slices_over<C: CurveGroup>(message: &[u8], public_key: &[u8], value: &[u8], proof: &[u8]) -> bool {
    let (Ok(public_key), Ok(value), Ok(proof)) = (
        PublicKey::try_from(public_key),
        VrfOutput::try_from(value),
        VrfProof::try_from(proof),
    ) else {
        return false;
    };
    verify_over::<C>(message, &public_key, &value, &proof)
}

#[must_use]
pub fn verify_slices(message: &[u8], public_key: &[u8], value: &[u8], proof: &[u8]) -> bool {
    verify_slices_over::<Edwards25519>(message, public_key, value, proof)
}

/// A VRF key holder.
pub trait Vrf {
    /// Produce the VRF value for `alpha` together with its proof.
    fn prove(&self, alpha: &[u8]) -> (VrfOutput, VrfProof);

    /// The VRF value for `alpha`, without a proof.
    fn compute(&self, alpha: &[u8]) -> VrfOutput;

    fn public_key(&self) -> PublicKey;
}

/// Edwards25519 VRF keypair.
#[derive(Clone, Debug)]
pub struct VrfKeypair {
    private_key: VrfPrivateKey,
}

impl VrfKeypair {
    /// Generate a new VRF keypair from the OS entropy source.
    ///
    /// # Errors
    /// Returns `CryptoError::Entropy` if the OS generator fails.
    #[cfg(feature = "std")]
    pub fn generate() -> Result<Self, CryptoError> {
        Self::generate_from_rng(&mut rand_core::OsRng)
    }

    /// # Errors
    /// Returns `CryptoError::Entropy` if `rng` cannot supply the seed.
    pub fn generate_from_rng<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> Result<Self, CryptoError> {
        let (private_key, _) = generate_vrf_key_from_rng(rng)?;
        Ok(Self { private_key })
    }

    #[must_use]
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let (private_key, _) = vrf_keypair_from_seed(seed);
        Self { private_key }
    }

    #[must_use]
    pub const fn from_private_key(private_key: VrfPrivateKey) -> Self {
        Self { private_key }
    }

    #[must_use]
    pub const fn private_key(&self) -> &VrfPrivateKey {
        &self.private_key
    }
}

impl Vrf for VrfKeypair {
    fn prove(&self, alpha: &[u8]) -> (VrfOutput, VrfProof) {
        prove(alpha, &self.private_key)
    }

    fn compute(&self, alpha: &[u8]) -> VrfOutput {
        compute(alpha, &self.private_key)
    }

    fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }
}
