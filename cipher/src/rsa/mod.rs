//! RSA
//!
//! - choose two random primes $p \neq q$; the modulus is $n = p q$ and the
//!   totient $\phi(n) = (p-1)(q-1)$;
//! - pick a public exponent $e$ with $\gcd(e, \phi(n)) = 1$ and derive the
//!   private exponent $d$ from $d e \equiv 1 \mod \phi(n)$;
//! - encrypt: $y = x^e \mod n$; decrypt: $x = y^d \mod n$, by Euler's theorem
//!   $x^{k\phi(n)+1} \equiv x \mod n$;
//!
//! Everything here is the unpadded, per-character scheme: each Unicode code
//! point (or hex digest character when signing) is raised separately. That
//! keeps the arithmetic visible and is exactly as deterministic and malleable
//! as the textbooks warn; none of it is meant for real traffic.

mod key;
pub use key::{KeyPair, PrivateKey, PublicKey};

mod textbook;
pub use textbook::{TextbookDecrypt, TextbookEncrypt};

mod sign;
pub use sign::{Sha512Sign, Sha512Verify};
