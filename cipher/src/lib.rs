use num_bigint::BigUint;

mod error;
pub use error::CipherError;

pub use rand::{DefaultRand, Rand, SeedRand};

pub mod rsa;

pub trait Encrypt {
    // appends to `cipher` without clearing it
    fn encrypt(&self, plaintext: &str, cipher: &mut Vec<BigUint>) -> Result<(), CipherError>;
}

pub trait Decrypt {
    // appends to `plaintext` without clearing it
    fn decrypt(&self, cipher: &[BigUint], plaintext: &mut String) -> Result<(), CipherError>;
}

pub trait Sign {
    // appends to `sig` without clearing it
    fn sign(&self, msg: &[u8], sig: &mut Vec<BigUint>) -> Result<(), CipherError>;
}

/// Verification is total: a malformed signature is merely invalid, never an
/// error.
pub trait Verify {
    fn verify(&self, msg: &[u8], sig: &[BigUint]) -> bool;
}
