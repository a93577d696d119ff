//! Sieve of Eratosthenes over machine integers, plus a brute-force search
//! for Carmichael numbers built on top of it.

use num_integer::Integer;

/// Primality flags for `0..=limit`: `flags[i]` is true iff `i` is prime.
pub fn sieve(limit: u64) -> Vec<bool> {
    let limit = limit as usize;
    let mut flags = vec![true; limit + 1];
    for x in flags.iter_mut().take(2) {
        *x = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if flags[i] {
            let mut c = i * i;
            while c <= limit {
                flags[c] = false;
                c += i;
            }
        }
        i += 1;
    }
    flags
}

/// The primes in `[0, limit]`, ascending.
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    sieve(limit)
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i as u64))
        .collect()
}

/// The Carmichael numbers in `[0, limit]`, ascending: odd composites `n` for
/// which every base coprime to `n` satisfies `a^(n-1) = 1 (mod n)`, so the
/// Fermat test only catches them through a base sharing a factor.
///
/// Checks the defining property against every base, which is fine for the
/// small limits this is meant for and hopeless beyond them.
pub fn carmichael_numbers(limit: u64) -> Vec<u64> {
    let flags = sieve(limit);
    let mut found = Vec::new();

    // 9 is the first odd composite
    let mut n = 9u64;
    while n <= limit {
        if !flags[n as usize]
            && (2..n - 1)
                .filter(|a| a.gcd(&n) == 1)
                .all(|a| pow_mod(a, n - 1, n) == 1)
        {
            found.push(n);
        }
        n += 2;
    }
    found
}

// square-and-multiply in u128 so the products cannot overflow
fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let (mut result, mut base) = (1u128, (base % modulus) as u128);
    let modulus = modulus as u128;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sieve_flags() {
        let flags = sieve(30);
        assert_eq!(flags.len(), 31);
        for p in [2usize, 3, 5, 7, 11, 13, 17, 19, 23, 29] {
            assert!(flags[p], "{} is prime", p);
        }
        for c in [0usize, 1, 4, 9, 15, 21, 25, 27, 30] {
            assert!(!flags[c], "{} is composite", c);
        }

        // perfect-square limit exercises the outer bound
        assert!(!sieve(25)[25]);
        assert_eq!(sieve(0), vec![false]);
    }

    #[test]
    fn primes_list() {
        assert_eq!(primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(primes_up_to(2), vec![2]);
        assert!(primes_up_to(1).is_empty());
    }

    #[test]
    fn carmichael_search() {
        assert_eq!(carmichael_numbers(2000), vec![561, 1105, 1729]);
        assert!(carmichael_numbers(560).is_empty());
    }

    #[test]
    fn pow_mod_matches_known_values() {
        assert_eq!(pow_mod(2, 560, 561), 1);
        assert_eq!(pow_mod(2, 10, 1024), 0);
        assert_eq!(pow_mod(7, 0, 13), 1);
        // near the u64 boundary
        assert_eq!(pow_mod(u64::MAX - 1, 2, u64::MAX), 1);
    }
}
