//! Property-based tests for edvrf

use edvrf::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Any seed and message: sign then verify succeeds
    #[test]
    fn sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let (sk, pk) = keypair_from_seed(&seed);
        let sig = sign(&message, &sk);
        prop_assert!(verify(&message, &pk, &sig));
        prop_assert_eq!(sig, sign(&message, &sk));
    }

    // Arbitrary bytes must never panic the verifier
    #[test]
    fn verify_total_on_arbitrary_input(
        pk in prop::array::uniform32(any::<u8>()),
        r in prop::array::uniform32(any::<u8>()),
        s in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let sig = Signature::from_parts(&r, &s);
        let _ = verify(&message, &PublicKey(pk), &sig);
    }

    #[test]
    fn vrf_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let (sk, pk) = vrf_keypair_from_seed(&seed);
        let (value, proof) = vrf::prove(&message, &sk);
        prop_assert_eq!(vrf::compute(&message, &sk), value);
        prop_assert!(vrf::verify(&message, &pk, &value, &proof));
    }

    #[test]
    fn vrf_verify_total_on_arbitrary_input(
        pk in prop::array::uniform32(any::<u8>()),
        value in prop::array::uniform32(any::<u8>()),
        c in prop::array::uniform32(any::<u8>()),
        t in prop::array::uniform32(any::<u8>()),
        ii in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let proof = VrfProof::from_parts(&c, &t, &ii);
        prop_assert!(!vrf::verify(&message, &PublicKey(pk), &VrfOutput(value), &proof));
    }

    // A proof for one message never vouches for another
    #[test]
    fn vrf_proof_bound_to_message(
        seed in prop::array::uniform32(any::<u8>()),
        a in prop::collection::vec(any::<u8>(), 0..64),
        b in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        prop_assume!(a != b);
        let (sk, pk) = vrf_keypair_from_seed(&seed);
        let (value, proof) = vrf::prove(&a, &sk);
        prop_assert!(!vrf::verify(&b, &pk, &value, &proof));
        prop_assert_ne!(value, vrf::compute(&b, &sk));
    }

    #[test]
    fn hash_to_curve_is_deterministic_and_prime_order(message in prop::collection::vec(any::<u8>(), 0..128)) {
        let point = hashers::hash_to_curve::<Edwards25519>(&message);
        prop_assert_eq!(point, hashers::hash_to_curve::<Edwards25519>(&message));
        prop_assert!(Edwards25519::decode_prime_order(&Edwards25519::encode(&point)).is_some());
    }
}
