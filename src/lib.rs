#![forbid(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

//! edvrf - deterministic Ed25519 signatures and an EC-VRF on the same curve.
//!
//! This crate implements the protocol layer only: key derivation, nonce
//! derivation, challenge/response construction and verification. Group
//! arithmetic comes from a [`CurveGroup`] provider; [`Edwards25519`]
//! (curve25519-dalek) is the default and every operation also has a
//! `*_over::<C>` form for other providers.
//!
// Fixed cryptographic choices:
// - Signatures: Ed25519 (SHA-512), byte-compatible with RFC 8032
// - VRF: Edwards25519, SHAKE256 for seed expansion, nonces, challenges,
//   hash-to-curve and output
// - Keys: 64-byte `seed || public key`; signature and VRF keys expand the
//   seed differently and are distinct types
//
// Verification is total (bool, never an error) and compares secret-dependent
// bytes in constant time via `subtle`.

// Core modules
pub mod types;
pub mod errors;
pub mod group;
mod field;
pub mod edwards25519;
pub mod hashers;
pub mod keys;
pub mod ed25519;
pub mod vrf;

// Re-export commonly used types and functions
pub use types::*;
pub use errors::CryptoError;
pub use group::CurveGroup;
pub use edwards25519::Edwards25519;
pub use ed25519::{sign, verify};
pub use keys::{generate_key_from_rng, generate_vrf_key_from_rng, keypair_from_seed, vrf_keypair_from_seed};
#[cfg(feature = "std")]
pub use keys::{generate_key, generate_vrf_key};
pub use vrf::{Vrf, VrfKeypair};

// Version and protocol constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROTOCOL_VERSION: u32 = 1;
