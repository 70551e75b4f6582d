use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// The entropy source could not fill a seed. Key generation is aborted;
    /// no key material is returned.
    #[error("entropy source failure: {0}")]
    Entropy(rand_core::Error),
}
