use crate::rsa::{PrivateKey, PublicKey};
use crate::{CipherError, Sign, Verify};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use sha2::{Digest, Sha512};

/// Signs the SHA-512 digest of a message, textbook style: the digest is
/// rendered as 128 lowercase hex characters and each character's code point
/// is raised to `d`, one `BigUint` per character.
#[derive(Clone, Debug)]
pub struct Sha512Sign {
    key: PrivateKey,
}

/// Verifies a [`Sha512Sign`] signature: recovers one character per element
/// with the public exponent and compares against the recomputed digest.
#[derive(Clone, Debug)]
pub struct Sha512Verify {
    key: PublicKey,
}

// lowercase hex of SHA-512(msg), 128 chars
fn hex_digest(msg: &[u8]) -> String {
    hex::encode(Sha512::digest(msg))
}

impl Sha512Sign {
    pub fn new(key: PrivateKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &PrivateKey {
        &self.key
    }
}

impl Sha512Verify {
    pub fn new(key: PublicKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &PublicKey {
        &self.key
    }

    // the digest characters hidden in `sig`; None when an element does not
    // map back to a character
    fn recover(&self, sig: &[BigUint]) -> Option<String> {
        let mut s = String::with_capacity(sig.len());
        for c in sig {
            s.push(self.key.rsaep(c).to_u32().and_then(char::from_u32)?);
        }
        Some(s)
    }
}

impl Sign for Sha512Sign {
    fn sign(&self, msg: &[u8], sig: &mut Vec<BigUint>) -> Result<(), CipherError> {
        for c in hex_digest(msg).chars() {
            sig.push(self.key.rsadp(&BigUint::from(c as u32)));
        }
        Ok(())
    }
}

impl Verify for Sha512Verify {
    fn verify(&self, msg: &[u8], sig: &[BigUint]) -> bool {
        match self.recover(sig) {
            Some(digest) => digest == hex_digest(msg),
            None => false,
        }
    }
}
