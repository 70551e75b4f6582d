#![no_main]

use libfuzzer_sys::fuzz_target;
use edvrf::{vrf, vrf_keypair_from_seed};

fuzz_target!(|data: &[u8]| {
    // public key || value || proof || message
    if data.len() < 32 + 32 + 96 { return; }

    let (pk, rest) = data.split_at(32);
    let (value, rest) = rest.split_at(32);
    let (proof, message) = rest.split_at(96);

    let _ = vrf::verify_slices(message, pk, value, proof);

    // Honest proofs over the fuzzed message must verify
    let mut seed = [0u8; 32];
    seed.copy_from_slice(pk);
    let (sk, honest_pk) = vrf_keypair_from_seed(&seed);
    let (honest_value, honest_proof) = vrf::prove(message, &sk);
    assert!(vrf::verify(message, &honest_pk, &honest_value, &honest_proof));
});
