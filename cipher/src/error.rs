use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CipherError {
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// a recovered value that does not map back to a character
    #[error("Invalid char code `{0}` cannot convert to char")]
    InvalidCharCode(BigUint),

    #[error("{0}")]
    Other(String),
}

impl From<String> for CipherError {
    fn from(s: String) -> Self {
        CipherError::Other(s)
    }
}
