use std::fmt::Display;

use rand::distr::{Distribution, StandardUniform};
use tracing::debug;

/// Resolves a user-supplied seed.
///
/// A nonzero seed is returned unchanged. Zero means "derive from entropy":
/// a fresh nonzero seed is drawn from the thread-local generator, which is
/// itself seeded from the operating system. The drawn seed is logged at
/// `debug` level so an irreproducible run can be repeated.
pub fn resolve_seed<T>(seed: T) -> T
where
    T: Copy + Default + PartialEq + Display,
    StandardUniform: Distribution<T>,
{
    if seed != T::default() {
        return seed;
    }

    let drawn = loop {
        let candidate: T = rand::random();
        if candidate != T::default() {
            break candidate;
        }
    };
    debug!(seed = %drawn, "drew seed from entropy");
    drawn
}
