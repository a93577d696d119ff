use crate::rsa::{PrivateKey, PublicKey};
use crate::{CipherError, Decrypt, Encrypt};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Per-character textbook encryption: every Unicode code point of the
/// plaintext is raised to `e` separately, giving one `BigUint` per character.
///
/// The code points are not checked against the modulus. A code point at or
/// above `n` wraps to its residue and decrypts to a different character, so
/// keys must be generated large enough for the alphabet in use.
#[derive(Clone, Debug)]
pub struct TextbookEncrypt {
    key: PublicKey,
}

/// The inverse of [`TextbookEncrypt`]: raises every ciphertext element to `d`
/// and maps the residues back to characters.
#[derive(Clone, Debug)]
pub struct TextbookDecrypt {
    key: PrivateKey,
}

impl TextbookEncrypt {
    pub fn new(key: PublicKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &PublicKey {
        &self.key
    }
}

impl TextbookDecrypt {
    pub fn new(key: PrivateKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &PrivateKey {
        &self.key
    }
}

impl Encrypt for TextbookEncrypt {
    fn encrypt(&self, plaintext: &str, cipher: &mut Vec<BigUint>) -> Result<(), CipherError> {
        for c in plaintext.chars() {
            cipher.push(self.key.rsaep(&BigUint::from(c as u32)));
        }
        Ok(())
    }
}

impl Decrypt for TextbookDecrypt {
    fn decrypt(&self, cipher: &[BigUint], plaintext: &mut String) -> Result<(), CipherError> {
        for c in cipher {
            let m = self.key.rsadp(c);
            let ch = m
                .to_u32()
                .and_then(char::from_u32)
                .ok_or_else(|| CipherError::InvalidCharCode(m.clone()))?;
            plaintext.push(ch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::KeyPair;
    use num_traits::One;
    use rand::SeedRand;

    fn classic_pair() -> (TextbookEncrypt, TextbookDecrypt) {
        // p = 61, q = 53
        let n = BigUint::from(3233u32);
        (
            TextbookEncrypt::new(PublicKey::new_uncheck(n.clone(), BigUint::from(17u32))),
            TextbookDecrypt::new(PrivateKey::new_uncheck(n, BigUint::from(2753u32))),
        )
    }

    #[test]
    fn classic_key_round_trip() {
        let (enc, dec) = classic_pair();
        let mut cipher = Vec::new();
        enc.encrypt("HI", &mut cipher).unwrap();
        assert_eq!(cipher.len(), 2);
        // 'A' = 65 encrypts to the textbook value
        enc.encrypt("A", &mut cipher).unwrap();
        assert_eq!(cipher.len(), 3, "encrypt must append, not clear");
        assert_eq!(cipher[2], BigUint::from(2790u32));

        let mut plain = String::new();
        dec.decrypt(&cipher, &mut plain).unwrap();
        assert_eq!(plain, "HIA");
    }

    #[test]
    fn generated_key_round_trip() {
        let (pk, sk) = KeyPair::generate(128, 19, &mut SeedRand::new(5))
            .unwrap()
            .split();
        let (enc, dec) = (TextbookEncrypt::new(pk), TextbookDecrypt::new(sk));

        let msg = "textbook RSA: per-char, no padding \u{4f60}\u{597d} \u{1f510}";
        let mut cipher = Vec::new();
        enc.encrypt(msg, &mut cipher).unwrap();
        assert_eq!(cipher.len(), msg.chars().count());

        let mut plain = String::new();
        dec.decrypt(&cipher, &mut plain).unwrap();
        assert_eq!(plain, msg);
    }

    #[test]
    fn identical_characters_encrypt_identically() {
        // deterministic by construction: no padding, no randomness
        let (enc, _) = classic_pair();
        let mut cipher = Vec::new();
        enc.encrypt("aa", &mut cipher).unwrap();
        assert_eq!(cipher[0], cipher[1]);
    }

    #[test]
    fn oversized_code_point_wraps() {
        let (enc, dec) = classic_pair();

        // U+2140 = 8512 exceeds n = 3233; only the residue survives
        let mut cipher = Vec::new();
        enc.encrypt("\u{2140}", &mut cipher).unwrap();
        let mut plain = String::new();
        dec.decrypt(&cipher, &mut plain).unwrap();
        assert_ne!(plain, "\u{2140}");
        assert_eq!(plain.chars().next().map(|c| c as u32), Some(8512 % 3233));
    }

    #[test]
    fn unmappable_values_error() {
        // identity key: d = 1 leaves values untouched
        let dec = TextbookDecrypt::new(PrivateKey::new_uncheck(
            BigUint::one() << 64u32,
            BigUint::one(),
        ));
        let mut out = String::new();

        // a UTF-16 surrogate is not a char
        let err = dec
            .decrypt(&[BigUint::from(0xD800u32)], &mut out)
            .unwrap_err();
        assert!(matches!(err, CipherError::InvalidCharCode(_)));

        let err = dec
            .decrypt(&[BigUint::from(u64::MAX - 1)], &mut out)
            .unwrap_err();
        assert!(matches!(err, CipherError::InvalidCharCode(_)));
    }
}
