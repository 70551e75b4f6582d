use edvrf::{generate_key, keypair_from_seed, sign, verify, PublicKey};

#[test]
fn hello_world_verifies_under_own_key_only() {
    let (sk1, pk1) = generate_key().expect("keygen");
    let (_, pk2) = generate_key().expect("keygen");

    let message = b"hello world";
    let signature = sign(message, &sk1);

    assert!(verify(message, &pk1, &signature));
    assert!(!verify(message, &pk2, &signature));
}

#[test]
fn signing_is_deterministic() {
    let (sk, _) = generate_key().expect("keygen");
    let a = sign(b"same message", &sk);
    let b = sign(b"same message", &sk);
    assert_eq!(a, b);
    assert_ne!(a, sign(b"other message", &sk));
}

#[test]
fn every_signature_bit_matters() {
    let (sk, pk) = keypair_from_seed(&[0x42u8; 32]);
    let message = b"tamper";
    let signature = sign(message, &sk);
    for bit in 0..512 {
        let mut tampered = signature;
        tampered.0[bit / 8] ^= 1 << (bit % 8);
        assert!(!verify(message, &pk, &tampered), "flipped signature bit {bit}");
    }
}

#[test]
fn message_and_key_bits_matter() {
    let (sk, pk) = keypair_from_seed(&[0x42u8; 32]);
    let message = b"tamper".to_vec();
    let signature = sign(&message, &sk);

    for bit in 0..message.len() * 8 {
        let mut m = message.clone();
        m[bit / 8] ^= 1 << (bit % 8);
        assert!(!verify(&m, &pk, &signature), "flipped message bit {bit}");
    }
    for bit in 0..256 {
        let mut k = pk.0;
        k[bit / 8] ^= 1 << (bit % 8);
        assert!(!verify(&message, &PublicKey(k), &signature), "flipped key bit {bit}");
    }
}

#[test]
fn long_and_empty_messages() {
    let (sk, pk) = keypair_from_seed(&[1u8; 32]);
    let long = vec![0xA5u8; 1 << 16];
    assert!(verify(&long, &pk, &sign(&long, &sk)));
    assert!(verify(b"", &pk, &sign(b"", &sk)));
}

#[test]
fn public_key_displays_as_lowercase_hex() {
    let (_, pk) = keypair_from_seed(&[0u8; 32]);
    let shown = pk.to_string();
    assert_eq!(shown, hex::encode(pk.0));
    assert_eq!(hex::decode(&shown).expect("hex"), pk.0.to_vec());
}
