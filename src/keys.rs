//! Key derivation for the signature scheme and the VRF.
//!
//! Both schemes store `seed || public key`. The scalar is re-derived from the
//! seed on every use: SHA-512 for signatures, SHAKE256 for the VRF.

#[cfg(feature = "std")]
use rand_core::OsRng;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::{
    edwards25519::Edwards25519,
    errors::CryptoError,
    group::CurveGroup,
    hashers::{expand_signing_seed, expand_vrf_seed},
    types::{PrivateKey, PublicKey, VrfPrivateKey, SEED_LEN},
};

/// Clear the low 3 bits of byte 0, clear bit 7 and set bit 6 of byte 31.
pub fn clamp(scalar: &mut [u8; 32]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}

fn draw_seed<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Zeroizing<[u8; SEED_LEN]>, CryptoError> {
    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    if let Err(e) = rng.try_fill_bytes(&mut *seed) {
        tracing::error!(error = %e, "entropy source failed, key generation aborted");
        return Err(CryptoError::Entropy(e));
    }
    Ok(seed)
}

/// Derive a signature keypair from a 32-byte seed.
#[must_use]
pub fn keypair_from_seed_over<C: CurveGroup>(seed: &[u8; SEED_LEN]) -> (PrivateKey, PublicKey) {
    let expanded = expand_signing_seed(seed);
    let x = C::scalar_from_bytes(&expanded.scalar);
    let public_key = PublicKey(C::encode(&C::mul_base(&x)));
    (PrivateKey::from_parts(seed, &public_key), public_key)
}

#[must_use]
pub fn keypair_from_seed(seed: &[u8; SEED_LEN]) -> (PrivateKey, PublicKey) {
    keypair_from_seed_over::<Edwards25519>(seed)
}

/// Derive a VRF keypair from a 32-byte seed.
#[must_use]
pub fn vrf_keypair_from_seed_over<C: CurveGroup>(seed: &[u8; SEED_LEN]) -> (VrfPrivateKey, PublicKey) {
    let expanded = expand_vrf_seed(seed);
    let x = C::scalar_from_bytes(&expanded.scalar);
    let public_key = PublicKey(C::encode(&C::mul_base(&x)));
    (VrfPrivateKey::from_parts(seed, &public_key), public_key)
}

#[must_use]
pub fn vrf_keypair_from_seed(seed: &[u8; SEED_LEN]) -> (VrfPrivateKey, PublicKey) {
    vrf_keypair_from_seed_over::<Edwards25519>(seed)
}

/// Generate a signature keypair from 32 bytes drawn from `rng`.
///
/// # Errors
/// Returns `CryptoError::Entropy` if `rng` cannot supply the seed.
pub fn generate_key_from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(PrivateKey, PublicKey), CryptoError> {
    let seed = draw_seed(rng)?;
    let (private_key, public_key) = keypair_from_seed(&seed);
    tracing::debug!(scheme = "ed25519", %public_key, "generated keypair");
    Ok((private_key, public_key))
}

/// Generate a VRF keypair from 32 bytes drawn from `rng`.
///
/// # Errors
/// Returns `CryptoError::Entropy` if `rng` cannot supply the seed.
pub fn generate_vrf_key_from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(VrfPrivateKey, PublicKey), CryptoError> {
    let seed = draw_seed(rng)?;
    let (private_key, public_key) = vrf_keypair_from_seed(&seed);
    tracing::debug!(scheme = "ecvrf", %public_key, "generated keypair");
    Ok((private_key, public_key))
}

/// Generate a signature keypair from the operating system's entropy source.
///
/// # Errors
/// Returns `CryptoError::Entropy` if the OS generator fails.
#[cfg(feature = "std")]
pub fn generate_key() -> Result<(PrivateKey, PublicKey), CryptoError> {
    generate_key_from_rng(&mut OsRng)
}

/// Generate a VRF keypair from the operating system's entropy source.
///
/// # Errors
/// Returns `CryptoError::Entropy` if the OS generator fails.
#[cfg(feature = "std")]
pub fn generate_vrf_key() -> Result<(VrfPrivateKey, PublicKey), CryptoError> {
    generate_vrf_key_from_rng(&mut OsRng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroU32;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(rand_core::Error::from(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap()))
        }
    }
    impl CryptoRng for FailingRng {}

    #[test]
    fn clamp_sets_expected_bits() {
        let mut s = [0xFFu8; 32];
        clamp(&mut s);
        assert_eq!(s[0], 0xF8);
        assert_eq!(s[31], 0x7F);
        let mut z = [0u8; 32];
        clamp(&mut z);
        assert_eq!(z[31], 0x40);
    }

    #[test]
    fn entropy_failure_aborts_generation() {
        assert!(matches!(generate_key_from_rng(&mut FailingRng), Err(CryptoError::Entropy(_))));
        assert!(matches!(generate_vrf_key_from_rng(&mut FailingRng), Err(CryptoError::Entropy(_))));
    }

    #[test]
    fn private_key_embeds_seed_and_public_key() {
        let seed = [5u8; 32];
        let (sk, pk) = keypair_from_seed(&seed);
        assert_eq!(sk.seed(), &seed[..]);
        assert_eq!(sk.public_key(), pk);
        let (vsk, vpk) = vrf_keypair_from_seed(&seed);
        assert_eq!(vsk.public_key(), vpk);
        // independent expansions give independent keys
        assert_ne!(pk, vpk);
    }

    #[test]
    #[cfg(feature = "std")]
    fn os_generated_keys_differ() {
        let (_, a) = generate_key().unwrap();
        let (_, b) = generate_key().unwrap();
        assert_ne!(a, b);
    }
}
