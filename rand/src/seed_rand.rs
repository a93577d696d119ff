use crate::Rand;
use rand_chacha::ChaCha20Rng;
use xrand::{RngCore, SeedableRng};

/// ChaCha20 stream seeded from a `u64`, so that prime generation and the
/// probabilistic primality tests can be replayed. Not for key material.
#[derive(Clone)]
pub struct SeedRand {
    rng: ChaCha20Rng,
}

impl SeedRand {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Rand for SeedRand {
    fn rand(&mut self, random: &mut [u8]) {
        self.rng.fill_bytes(random);
    }
}
