#![no_main]

use libfuzzer_sys::fuzz_target;
use edvrf::{verify, PublicKey, Signature};

fuzz_target!(|data: &[u8]| {
    // public key || signature || message
    if data.len() < 32 + 64 { return; }

    let (pk_bytes, rest) = data.split_at(32);
    let (sig_bytes, message) = rest.split_at(64);

    let (Ok(pk), Ok(sig)) = (PublicKey::try_from(pk_bytes), Signature::try_from(sig_bytes)) else {
        return;
    };

    let _ = verify(message, &pk, &sig);
});
