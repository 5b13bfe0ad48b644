//! Seeded uniform random number generators.
//!
//! Every generator implements [`UniformRng`] and produces doubles in `[0, 1)`:
//!
//! - [`Drand48`] — the classic 48-bit linear congruential generator, with a
//!   fixed starting state and no seeding hook
//! - [`MersenneTwister32`] — a seeded adapter over [`Mt19937`]
//! - [`MersenneTwister64`] — a seeded adapter over [`Mt19937_64`]
//!
//! The Mersenne Twister adapters follow one seeding rule, implemented by
//! [`resolve_seed`]: a nonzero seed is used verbatim and gives a reproducible
//! sequence, while a seed of zero draws a fresh seed from the operating
//! system's entropy. A literal seed of zero therefore cannot be requested.
//!
//! The engines implement [`rand::RngCore`] and [`rand::SeedableRng`], so they
//! can drive anything in the `rand` ecosystem.
//!
//! [`UniformRng`]: strand_core::UniformRng

mod drand48;
mod engine;
mod seed;
mod twister;

pub use drand48::Drand48;
pub use engine::{Mt19937, Mt19937_64};
pub use seed::resolve_seed;
pub use twister::{MersenneTwister32, MersenneTwister64};
