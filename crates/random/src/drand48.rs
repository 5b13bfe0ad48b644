use std::sync::atomic::{AtomicU64, Ordering};

use strand_core::UniformRng;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// State of the C library generator before any call to `srand48`.
const DEFAULT_STATE: u64 = 0x1234_ABCD_330E;

static STATE: AtomicU64 = AtomicU64::new(DEFAULT_STATE);

/// The 48-bit linear congruential generator behind the C `drand48` function.
///
/// The generator state is process-level and starts from the C library's
/// default state. Every `Drand48` handle, on any thread, advances the same
/// sequence, so concurrent callers never see repeated streams. There is no
/// seeding hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct Drand48;

impl Drand48 {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn step(state: u64) -> u64 {
    MULTIPLIER.wrapping_mul(state).wrapping_add(INCREMENT) & MASK
}

impl UniformRng for Drand48 {
    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> f64 {
        let (Ok(previous) | Err(previous)) =
            STATE.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |state| {
                Some(step(state))
            });
        step(previous) as f64 / (1_u64 << 48) as f64
    }
}
