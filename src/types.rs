use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::CryptoError;

pub const SEED_LEN: usize = 32;
pub const PUBLIC_KEY_LEN: usize = 32;
pub const PRIVATE_KEY_LEN: usize = 64;             // seed(32) || public key(32)
pub const SIGNATURE_LEN: usize = 64;               // R(32) || s(32)
pub const VRF_OUTPUT_LEN: usize = 32;
pub const VRF_PROOF_LEN: usize = 96;               // c(32) || t(32) || ii(32)

/// Compressed curve point encoding of a public key (signature or VRF).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_LEN]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Signature(pub [u8; SIGNATURE_LEN]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct VrfOutput(pub [u8; VRF_OUTPUT_LEN]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct VrfProof(pub [u8; VRF_PROOF_LEN]);

/// Expanded signature private key: `seed || public key`.
///
/// The SHA-512 expansion of the seed is recomputed on every use and never stored.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LEN]);

/// Expanded VRF private key: `seed || public key`.
///
/// Kept as a separate type from [`PrivateKey`]: the two schemes expand the seed
/// with different hash constructions and the keys must not be interchanged.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct VrfPrivateKey([u8; PRIVATE_KEY_LEN]);

fn word(bytes: &[u8], index: usize) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes[index * 32..(index + 1) * 32]);
    out
}

fn join<const N: usize>(parts: &[&[u8; 32]]) -> [u8; N] {
    let mut out = [0u8; N];
    for (chunk, part) in out.chunks_exact_mut(32).zip(parts) {
        chunk.copy_from_slice(*part);
    }
    out
}

// Private keys share one layout; the macro keeps the two types in lockstep.
macro_rules! impl_private_key {
    ($t:ident) => {
        impl $t {
            /// Wrap raw `seed || public key` bytes. The public half is trusted as given.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; PRIVATE_KEY_LEN]) -> Self {
                Self(bytes)
            }

            #[must_use]
            pub fn from_parts(seed: &[u8; SEED_LEN], public_key: &PublicKey) -> Self {
                Self(join(&[seed, &public_key.0]))
            }

            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
                &self.0
            }

            /// The 32-byte seed half.
            #[must_use]
            pub fn seed(&self) -> &[u8] {
                &self.0[..SEED_LEN]
            }

            #[must_use]
            pub fn public_key(&self) -> PublicKey {
                PublicKey(word(&self.0, 1))
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($t))
                    .field("public_key", &self.public_key())
                    .finish_non_exhaustive()
            }
        }
    };
}
impl_private_key!(PrivateKey);
impl_private_key!(VrfPrivateKey);

impl Signature {
    #[must_use]
    pub fn from_parts(r: &[u8; 32], s: &[u8; 32]) -> Self {
        Self(join(&[r, s]))
    }

    /// Compressed nonce point `R`.
    #[must_use]
    pub fn r(&self) -> [u8; 32] {
        word(&self.0, 0)
    }

    /// Response scalar `s`.
    #[must_use]
    pub fn s(&self) -> [u8; 32] {
        word(&self.0, 1)
    }
}

impl VrfProof {
    #[must_use]
    pub fn from_parts(c: &[u8; 32], t: &[u8; 32], ii: &[u8; 32]) -> Self {
        Self(join(&[c, t, ii]))
    }

    /// Split into `(c, t, ii)`.
    #[must_use]
    pub fn parts(&self) -> ([u8; 32], [u8; 32], [u8; 32]) {
        (word(&self.0, 0), word(&self.0, 1), word(&self.0, 2))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; PUBLIC_KEY_LEN * 2];
        hex::encode_to_slice(self.0, &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

// Exact-sized decode helpers
macro_rules! impl_tryfrom_slice {
    ($t:ty, $len:expr) => {
        impl TryFrom<&[u8]> for $t {
            type Error = CryptoError;
            fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
                if b.len() != $len {
                    return Err(CryptoError::InvalidLength { expected: $len, got: b.len() });
                }
                let mut arr = [0u8; $len];
                arr.copy_from_slice(b);
                Ok(Self(arr))
            }
        }
    };
}
impl_tryfrom_slice!(PublicKey, PUBLIC_KEY_LEN);
impl_tryfrom_slice!(Signature, SIGNATURE_LEN);
impl_tryfrom_slice!(VrfOutput, VRF_OUTPUT_LEN);
impl_tryfrom_slice!(VrfProof, VRF_PROOF_LEN);
impl_tryfrom_slice!(PrivateKey, PRIVATE_KEY_LEN);
impl_tryfrom_slice!(VrfPrivateKey, PRIVATE_KEY_LEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_length_is_exact() {
        assert!(PublicKey::try_from(&[0u8; 31][..]).is_err());
        assert!(PublicKey::try_from(&[0u8; 33][..]).is_err());
        assert!(VrfProof::try_from(&[0u8; VRF_PROOF_LEN][..]).is_ok());
        match Signature::try_from(&[0u8; 63][..]) {
            Err(CryptoError::InvalidLength { expected, got }) => {
                assert_eq!((expected, got), (SIGNATURE_LEN, 63));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn proof_parts_are_ordered() {
        let proof = VrfProof::from_parts(&[1u8; 32], &[2u8; 32], &[3u8; 32]);
        assert_eq!(proof.parts(), ([1u8; 32], [2u8; 32], [3u8; 32]));
        assert_eq!(proof.0[32], 2);
    }

    #[test]
    fn public_key_formats_as_hex() {
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes[0] = 0xAB;
        bytes[31] = 0x01;
        let shown = PublicKey(bytes).to_string();
        assert_eq!(shown.len(), 64);
        assert!(shown.starts_with("ab00"));
        assert!(shown.ends_with("0001"));
        assert_eq!(format!("{:?}", PublicKey(bytes)), format!("PublicKey({shown})"));
    }

    #[test]
    fn private_key_debug_hides_seed() {
        let key = PrivateKey::from_parts(&[0xAB; 32], &PublicKey([0x01; 32]));
        let shown = format!("{key:?}");
        assert!(shown.contains("0101"));
        assert!(!shown.to_lowercase().contains("abab"));
        assert_eq!(key.seed(), &[0xAB; 32][..]);
    }
}
