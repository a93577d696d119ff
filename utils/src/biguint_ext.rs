use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Euclid, One, Zero};
use rand::Rand;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ops::{Deref, Rem, Sub};

pub struct BigUintExt<T: Borrow<BigUint>>(pub T);

impl<T: Borrow<BigUint>> Deref for BigUintExt<T> {
    type Target = BigUint;
    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

impl<T: Borrow<BigUint>> PartialEq<Self> for BigUintExt<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deref().eq(other.deref())
    }
}

impl<T: Borrow<BigUint>> Eq for BigUintExt<T> {}

impl<T: Borrow<BigUint>> PartialOrd<Self> for BigUintExt<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Borrow<BigUint>> Ord for BigUintExt<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deref().cmp(other.deref())
    }
}

impl<T: Borrow<BigUint>> PartialEq<BigUint> for BigUintExt<T> {
    fn eq(&self, other: &BigUint) -> bool {
        self.deref().eq(other)
    }
}

impl<T: Borrow<BigUint>> PartialEq<BigUint> for &BigUintExt<T> {
    fn eq(&self, other: &BigUint) -> bool {
        (*self).deref().eq(other)
    }
}

impl<T: Borrow<BigUint>> PartialOrd<BigUint> for BigUintExt<T> {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        self.deref().partial_cmp(other)
    }
}

impl<T: Borrow<BigUint>> PartialOrd<BigUint> for &BigUintExt<T> {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        (*self).deref().partial_cmp(other)
    }
}

impl<T: Borrow<BigUint>> Sub<u32> for BigUintExt<T> {
    type Output = BigUint;
    fn sub(self, rhs: u32) -> Self::Output {
        self.deref() - rhs
    }
}

impl<T: Borrow<BigUint>> Sub<u32> for &BigUintExt<T> {
    type Output = BigUint;
    fn sub(self, rhs: u32) -> Self::Output {
        self.deref() - rhs
    }
}

impl<T: Borrow<BigUint>> Rem<&BigUint> for &BigUintExt<T> {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> Self::Output {
        self.deref() % rhs
    }
}

impl<T: Borrow<BigUint>> BigUintExt<T> {
    /// The `x` with `self * x = 1 (mod modulus)`, taken from the extended
    /// Euclidean identity `gcd(a, n) = a*x + n*y` and shifted into `(0, n)`.
    /// `None` when `gcd(self, modulus) != 1`, in which case no inverse exists.
    pub fn modinv(&self, modulus: &BigUint) -> Option<BigUint> {
        let (a, n) = (BigInt::from(self % modulus), BigInt::from(modulus.clone()));
        let g = a.extended_gcd(&n);
        g.gcd.is_one().then_some(
            g.x.rem_euclid(&n)
                .to_biguint()
                .expect("rem_euclid is non-negative"),
        )
    }

    /// Uniform random number in `[0, self)` by rejection sampling.
    /// `self` must be nonzero.
    pub fn gen_random<R: Rand>(&self, rng: &mut R) -> BigUint {
        let bits = self.bits() as usize;
        let mut n = vec![0u8; (bits + 7) >> 3];

        loop {
            rng.rand(n.as_mut_slice());
            let r = BigUint::from_bytes_le(n.as_mut_slice());
            if self > r {
                return r;
            }
        }
    }

    /// Deterministic primality by trial division over `[2, isqrt(self)]`.
    /// Cost grows with the square root of `self`; small numbers only.
    pub fn is_prime_naive(&self) -> bool {
        let n = self.deref();
        if self.bits() < 2 {
            return false;
        }

        let bound = n.sqrt();
        let mut d = BigUint::from(2u32);
        while d <= bound {
            if (n % &d).is_zero() {
                return false;
            }
            d += 1u32;
        }
        true
    }

    /// Fermat primality test with `rounds` random bases drawn from `[1, self-1]`.
    ///
    /// A prime always passes. A composite survives `rounds` rounds with
    /// probability at most $2^{-rounds}$, except for the Carmichael numbers
    /// (561, 1105, 1729, ...): every base coprime to them is a liar, so they
    /// fall only to the rare base sharing a factor. `is_prime_miller_rabin`
    /// has no such blind spot.
    pub fn is_prime_fermat<Rng: Rand>(&self, rounds: usize, rng: &mut Rng) -> bool {
        let n = self.deref();
        if self.bits() < 2 {
            return false;
        } else if self.bits() == 2 {
            // 2 and 3
            return true;
        } else if n.is_even() {
            return false;
        }

        let n_m1 = self - 1u32;
        for _ in 0..rounds {
            let a = BigUintExt(&n_m1).gen_random(rng) + 1u32;
            if !a.modpow(&n_m1, n).is_one() {
                return false;
            }
        }
        true
    }

    /// Miller-Rabin probabilistic primality test with `rounds` random bases
    /// drawn from `[2, self-1)`.
    ///
    /// A prime always passes; a composite survives with probability at most
    /// $4^{-rounds}$, Carmichael numbers included.
    pub fn is_prime_miller_rabin<Rng: Rand>(&self, rounds: usize, rng: &mut Rng) -> bool {
        let n = self.deref();
        if self.bits() < 2 {
            return false;
        } else if self.bits() == 2 {
            return true;
        } else if n.is_even() {
            return false;
        }

        // n-1 = 2^s * d with d odd; s >= 1 since n is odd
        let n_m1 = self - 1u32;
        let s = n_m1.trailing_zeros().unwrap_or(0);
        let d = &n_m1 >> s;

        // n >= 5 here, so the base range is never empty
        let span = n - 3u32;
        'round: for _ in 0..rounds {
            let a = BigUintExt(&span).gen_random(rng) + 2u32;
            let mut x = a.modpow(&d, n);
            if x.is_one() || x == n_m1 {
                continue;
            }

            for _ in 0..s.saturating_sub(1) {
                x = (&x * &x) % n;
                if x == n_m1 {
                    continue 'round;
                }
            }
            return false;
        }
        true
    }

    /// Fermat difference-of-squares factorization: walk `a` up from
    /// `ceil(sqrt(self))` until `a^2 - self` is a perfect square `b^2`, then
    /// `self = (a-b)(a+b)`.
    ///
    /// Odd numbers only; even or zero input returns `None` (an even number
    /// that is not a multiple of 4 is never a difference of two squares, so
    /// the walk may not terminate). An odd prime ends at the trivial split
    /// `(1, self)`. The walk is short exactly when the two factors lie close
    /// together, which is why the factors of an RSA modulus must not.
    pub fn factorize_fermat(&self) -> Option<(BigUint, BigUint)> {
        let n = self.deref();
        if n.is_zero() || n.is_even() {
            return None;
        }

        let mut a = n.sqrt();
        if &a * &a != *n {
            a += 1u32;
        }
        loop {
            let b2 = &a * &a - n;
            let b = b2.sqrt();
            if &b * &b == b2 {
                return Some((&a - &b, a + b));
            }
            a += 1u32;
        }
    }

    // Exact `bits`-length sample: bits above `bits` cleared, the top bit
    // pinned, the bottom bit selecting parity.
    fn gen_uint<Rng: Rand>(bits: usize, even: bool, rng: &mut Rng) -> BigUint {
        debug_assert!(bits >= 2);
        let (mut buf, b) = (
            vec![0u8; (bits + 7) >> 3],
            if (bits & 7) == 0 { 8 } else { bits & 7 },
        );
        rng.rand(buf.as_mut_slice());

        if let Some(x) = buf.last_mut() {
            if b != 8 {
                *x &= (1u8 << b) - 1;
            }
            *x |= 1 << (b - 1);
        }
        if let Some(x) = buf.first_mut() {
            if even {
                *x &= !1;
            } else {
                *x |= 1;
            }
        }

        BigUint::from_bytes_le(buf.as_slice())
    }

    /// Uniform odd number of exactly `bits` bits (top and bottom bits set).
    /// `bits` must be at least 2.
    pub fn gen_uint_odd<Rng: Rand>(bits: usize, rng: &mut Rng) -> BigUint {
        Self::gen_uint(bits, false, rng)
    }

    /// Uniform even number of exactly `bits` bits (top bit set, bottom bit
    /// clear). `bits` must be at least 2.
    pub fn gen_uint_even<Rng: Rand>(bits: usize, rng: &mut Rng) -> BigUint {
        Self::gen_uint(bits, true, rng)
    }

    /// Generate a prime of exactly `bits_len` bits, prime with probability at
    /// least $1 - 4^{-test_rounds}$.
    ///
    /// Failed candidates are redrawn rather than incremented, so the result
    /// stays uniform over the odd `bits_len`-bit numbers that pass the test.
    pub fn generate_prime<Rng: Rand>(
        bits_len: usize,
        test_rounds: usize,
        rng: &mut Rng,
    ) -> Result<BigUint, String> {
        if bits_len < 2 {
            return Err("prime size must at least 2-bits".to_string());
        }

        loop {
            let p = Self::gen_uint_odd(bits_len, rng);
            debug_assert_eq!(p.bits() as usize, bits_len);
            if BigUintExt(&p).is_prime_miller_rabin(test_rounds, rng) {
                return Ok(p);
            }
        }
    }
}
