//! Mersenne Twister engines.
//!
//! Both engines reproduce the reference MT19937 and MT19937-64 sequences of
//! Matsumoto and Nishimura, including their default seed of 5489.

mod mt32;
mod mt64;

pub use mt32::Mt19937;
pub use mt64::Mt19937_64;

/// Seed used when an engine is created through `Default`.
const DEFAULT_SEED: u16 = 5489;
