use rand_core::RngCore;
use strand_core::UniformRng;

use crate::{Mt19937, Mt19937_64, resolve_seed};

/// 2⁻⁵³, the resolution of a 53-bit fraction.
const TWO_POW_NEG_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// A seeded uniform generator over the 32-bit Mersenne Twister.
///
/// Each double consumes two engine outputs to fill all 53 mantissa bits.
#[derive(Debug, Clone)]
pub struct MersenneTwister32 {
    engine: Mt19937,
    seed: u32,
}

impl MersenneTwister32 {
    /// Creates a generator, drawing the seed from entropy if `seed` is zero.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let seed = resolve_seed(seed);
        Self {
            engine: Mt19937::new(seed),
            seed,
        }
    }

    /// Returns the seed the engine was started from.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the underlying engine.
    pub fn engine_mut(&mut self) -> &mut Mt19937 {
        &mut self.engine
    }
}

impl UniformRng for MersenneTwister32 {
    fn next(&mut self) -> f64 {
        let a = self.engine.next_u32() >> 5;
        let b = self.engine.next_u32() >> 6;
        (f64::from(a) * 67_108_864.0 + f64::from(b)) * TWO_POW_NEG_53
    }
}

/// A seeded uniform generator over the 64-bit Mersenne Twister.
///
/// Each double takes the top 53 bits of one engine output.
#[derive(Debug, Clone)]
pub struct MersenneTwister64 {
    engine: Mt19937_64,
    seed: u64,
}

impl MersenneTwister64 {
    /// Creates a generator, drawing the seed from entropy if `seed` is zero.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let seed = resolve_seed(seed);
        Self {
            engine: Mt19937_64::new(seed),
            seed,
        }
    }

    /// Returns the seed the engine was started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the underlying engine.
    pub fn engine_mut(&mut self) -> &mut Mt19937_64 {
        &mut self.engine
    }
}

impl UniformRng for MersenneTwister64 {
    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> f64 {
        (self.engine.next_u64() >> 11) as f64 * TWO_POW_NEG_53
    }
}
