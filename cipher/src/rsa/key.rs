use crate::{CipherError, Rand};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use utils::BigUintExt;

// `q` is drawn between GAP_MIN_BITS and GAP_MAX_BITS bits longer than `p`,
// uniformly, so the two factors of `n` never sit close enough together for
// Fermat factorization to walk from `sqrt(n)` to either of them.
const GAP_MIN_BITS: usize = 48;
const GAP_MAX_BITS: usize = 144;

#[derive(Clone, Debug, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    // n = p * q
    n: BigUint,
    // public exponent, gcd(e, (p-1)(q-1)) = 1
    e: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    // n = p * q, shared with the public half
    n: BigUint,
    // private exponent, d * e = 1 % (p-1)(q-1)
    d: BigUint,
}

/// A generated pair. The primes and the totient live only inside
/// [`KeyPair::generate`]; once it returns, `(n, e)` and `(n, d)` are all
/// that remains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl PublicKey {
    /// n: RSA modules
    /// exp: public key exponent
    /// note: not to check the `n` and `exp` are right RSA parameters
    pub fn new_uncheck(n: BigUint, exp: BigUint) -> Self {
        Self { e: exp, n }
    }

    /// note: not to check the `n` and `exp` are right RSA parameters
    pub fn from_be_bytes(n: &[u8], exp: &[u8]) -> Self {
        Self {
            e: BigUint::from_bytes_be(exp),
            n: BigUint::from_bytes_be(n),
        }
    }

    /// n
    pub fn modules(&self) -> &BigUint {
        &self.n
    }

    /// e
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Big-endian minimal `(n, e)` byte strings.
    pub fn to_be_bytes(&self) -> (Vec<u8>, Vec<u8>) {
        (self.n.to_bytes_be(), self.e.to_bytes_be())
    }

    /// Lowercase hex over the big-endian bytes of `(n, e)`.
    pub fn export_hex(&self) -> (String, String) {
        (
            hex::encode(self.n.to_bytes_be()),
            hex::encode(self.e.to_bytes_be()),
        )
    }

    pub fn import_hex(n: &str, exp: &str) -> Result<Self, CipherError> {
        let n = hex::decode(n)
            .map_err(|err| CipherError::InvalidPublicKey(format!("modulus: {}", err)))?;
        let exp = hex::decode(exp)
            .map_err(|err| CipherError::InvalidPublicKey(format!("exponent: {}", err)))?;
        Ok(Self::from_be_bytes(n.as_slice(), exp.as_slice()))
    }

    /// RSAEP: $m^e \mod n$. `m` is expected below `n`; a larger value wraps
    /// around and cannot be recovered.
    pub fn rsaep(&self, m: &BigUint) -> BigUint {
        m.modpow(&self.e, &self.n)
    }
}

impl PrivateKey {
    /// note: not to check the `modulus` and `private_exp` are right RSA parameters
    pub fn new_uncheck(modulus: BigUint, private_exp: BigUint) -> Self {
        Self {
            n: modulus,
            d: private_exp,
        }
    }

    /// note: not to check the `n` and `exp` are right RSA parameters
    pub fn from_be_bytes(n: &[u8], exp: &[u8]) -> Self {
        Self {
            d: BigUint::from_bytes_be(exp),
            n: BigUint::from_bytes_be(n),
        }
    }

    /// n
    pub fn modules(&self) -> &BigUint {
        &self.n
    }

    /// Big-endian minimal `(n, d)` byte strings.
    pub fn to_be_bytes(&self) -> (Vec<u8>, Vec<u8>) {
        (self.n.to_bytes_be(), self.d.to_bytes_be())
    }

    /// Lowercase hex over the big-endian bytes of `(n, d)`.
    pub fn export_hex(&self) -> (String, String) {
        (
            hex::encode(self.n.to_bytes_be()),
            hex::encode(self.d.to_bytes_be()),
        )
    }

    pub fn import_hex(n: &str, exp: &str) -> Result<Self, CipherError> {
        let n = hex::decode(n)
            .map_err(|err| CipherError::InvalidPrivateKey(format!("modulus: {}", err)))?;
        let exp = hex::decode(exp)
            .map_err(|err| CipherError::InvalidPrivateKey(format!("exponent: {}", err)))?;
        Ok(Self::from_be_bytes(n.as_slice(), exp.as_slice()))
    }

    /// RSADP: $c^d \mod n$
    pub fn rsadp(&self, c: &BigUint) -> BigUint {
        c.modpow(&self.d, &self.n)
    }
}

impl KeyPair {
    /// Generate a keypair whose primes deliberately differ in size: `p` gets
    /// exactly `bits_len` bits, `q` between 48 and 144 bits more, and
    /// `e` starts from a random even 16-bit draw and steps up to the first
    /// value coprime with $\phi(n)$ (an odd one, since $\phi(n)$ is even).
    ///
    /// `prime_test_rounds`(n) means the number of test rounds, for any odd number
    /// that great than 2 and positive integer n, the probability of error
    /// in MillerRabinPrimeTest is at most $4^{-n}$.
    pub fn generate<R: Rand>(
        bits_len: usize,
        prime_test_rounds: usize,
        rd: &mut R,
    ) -> Result<KeyPair, CipherError> {
        let gap = Self::magnitude_gap(rd);
        let p = BigUintExt::<BigUint>::generate_prime(bits_len, prime_test_rounds, rd)?;
        let q = BigUintExt::<BigUint>::generate_prime(bits_len + gap, prime_test_rounds, rd)?;

        let n = &p * &q;
        let phi = (p - 1u32) * (q - 1u32);

        let mut e = BigUintExt::<BigUint>::gen_uint_even(16, rd);
        while !e.gcd(&phi).is_one() {
            e += 1u32;
        }

        let d = BigUintExt(&e)
            .modinv(&phi)
            .expect("e and phi are coprime by the selection loop");
        debug_assert!(((&d * &e) % &phi).is_one());

        Ok(Self {
            public: PublicKey::new_uncheck(n.clone(), e),
            private: PrivateKey::new_uncheck(n, d),
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Hand out the two halves.
    pub fn split(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }

    // how many bits longer `q` is drawn than `p`, uniform in [48, 144]
    fn magnitude_gap<R: Rand>(rd: &mut R) -> usize {
        let span = BigUint::from((GAP_MAX_BITS - GAP_MIN_BITS + 1) as u32);
        let r = BigUintExt(&span).gen_random(rd);
        GAP_MIN_BITS + r.to_usize().expect("gap fits in usize")
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={:#x}, e={:#x}}}", self.n, self.e)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={:#x}, d={:#x}}}", self.n, self.d)
    }
}

impl Display for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{public: {}, private: {}}}", self.public, self.private)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{DefaultRand, SeedRand};

    fn keygen(bits_len: usize) -> KeyPair {
        let mut rng = DefaultRand::default();
        let pair = KeyPair::generate(bits_len, 19, &mut rng).unwrap();

        // p has bits_len bits and q between 48 and 144 more, so the modulus
        // lands in [2*bits_len + 47, 2*bits_len + 144]
        let n_bits = pair.public_key().modules().bits() as usize;
        assert!(
            n_bits >= 2 * bits_len + GAP_MIN_BITS - 1,
            "modulus too small: {} bits",
            n_bits
        );
        assert!(
            n_bits <= 2 * bits_len + GAP_MAX_BITS,
            "modulus too large: {} bits",
            n_bits
        );
        pair
    }

    fn key_basics(pair: &KeyPair) {
        let m = BigUint::from(42u32);
        let c = pair.public_key().rsaep(&m);
        assert_eq!(
            pair.private_key().rsadp(&c),
            m,
            "encrypt message != decrypt message"
        );

        // e starts from an even 16-bit draw and steps to the first value
        // coprime with phi, which must be odd
        let e = pair.public_key().exponent();
        assert!(e.is_odd());
        assert!(e.bits() >= 16);

        assert_eq!(pair.public_key().modules(), pair.private_key().modules());
    }

    #[test]
    fn rsa_keygen_256() {
        key_basics(&keygen(256));
    }

    #[test]
    fn rsa_keygen_512() {
        key_basics(&keygen(512));
    }

    #[test]
    fn seeded_keygen_replays() {
        let a = KeyPair::generate(128, 19, &mut SeedRand::new(7)).unwrap();
        let b = KeyPair::generate(128, 19, &mut SeedRand::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn classic_textbook_key() {
        // p = 61, q = 53: n = 3233, phi = 3120, e = 17, d = 2753
        let pk = PublicKey::new_uncheck(BigUint::from(3233u32), BigUint::from(17u32));
        let sk = PrivateKey::new_uncheck(BigUint::from(3233u32), BigUint::from(2753u32));

        let m = BigUint::from(65u32);
        let c = pk.rsaep(&m);
        assert_eq!(c, BigUint::from(2790u32));
        assert_eq!(sk.rsadp(&c), m);
    }

    #[test]
    fn split_hands_out_both_halves() {
        let pair = KeyPair::generate(64, 19, &mut SeedRand::new(23)).unwrap();
        let (pk, sk) = pair.clone().split();
        assert_eq!(&pk, pair.public_key());
        assert_eq!(&sk, pair.private_key());
    }

    #[test]
    fn be_bytes_round_trip() {
        let pk = PublicKey::new_uncheck(BigUint::from(3233u32), BigUint::from(17u32));
        let (n, e) = pk.to_be_bytes();
        assert_eq!(n, vec![0x0c, 0xa1]);
        assert_eq!(e, vec![0x11]);
        assert_eq!(PublicKey::from_be_bytes(&n, &e), pk);

        let sk = PrivateKey::new_uncheck(BigUint::from(3233u32), BigUint::from(2753u32));
        let (n, d) = sk.to_be_bytes();
        assert_eq!(PrivateKey::from_be_bytes(&n, &d), sk);
    }

    #[test]
    fn hex_export_round_trip() {
        let pk = PublicKey::new_uncheck(BigUint::from(3233u32), BigUint::from(17u32));
        let (n, e) = pk.export_hex();
        assert_eq!((n.as_str(), e.as_str()), ("0ca1", "11"));
        assert_eq!(PublicKey::import_hex(&n, &e).unwrap(), pk);

        let sk = PrivateKey::new_uncheck(BigUint::from(3233u32), BigUint::from(2753u32));
        let (n, d) = sk.export_hex();
        assert_eq!(PrivateKey::import_hex(&n, &d).unwrap(), sk);

        assert!(PublicKey::import_hex("0ca", "11").is_err());
        assert!(PublicKey::import_hex("zz", "11").is_err());
        assert!(PrivateKey::import_hex("0ca1", "xy").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let pair = KeyPair::generate(64, 19, &mut SeedRand::new(11)).unwrap();
        let s = serde_json::to_string(&pair).unwrap();
        let back: KeyPair = serde_json::from_str(&s).unwrap();
        assert_eq!(back, pair);
    }
}
