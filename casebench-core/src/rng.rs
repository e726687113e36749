//! Deterministic random engine and uniform integer draws.
//!
//! Generated corpora must be byte-identical across runs and across
//! implementations, so both the bit generator and the reduction of its output
//! to a bounded integer are fixed here:
//!
//! - [`Mt19937_64`]: the 64-bit Mersenne Twister, seeded the same way as
//!   C++'s `std::mt19937_64`.
//! - [`uniform_below`]: multiply-shift reduction with rejection of the biased
//!   low region, the method libstdc++ uses for `uniform_int_distribution`
//!   over a full 64-bit engine.

use rand::RngCore;
use rand_mt::Mt64;

/// 64-bit Mersenne Twister engine.
///
/// Wraps [`rand_mt::Mt64`] and exposes it through [`RngCore`], so the content
/// model can also be driven by any other `rand` engine in tests.
#[derive(Clone)]
pub struct Mt19937_64(Mt64);

impl Mt19937_64 {
    /// Seed used by a default-constructed `std::mt19937_64`.
    pub const DEFAULT_SEED: u64 = 5489;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self(Mt64::new(seed))
    }
}

impl std::fmt::Debug for Mt19937_64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937_64").finish_non_exhaustive()
    }
}

impl RngCore for Mt19937_64 {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst);
    }
}

/// Draws a uniform integer in `0..bound` from 64-bit engine output.
///
/// The 128-bit product `x * bound` is split into a high word (the result) and
/// a low word. Products whose low word falls below `2^64 mod bound` are
/// rejected, which removes the modulo bias while usually needing no division.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    assert!(bound > 0, "uniform_below requires a non-zero bound");

    let mut product = u128::from(rng.next_u64()) * u128::from(bound);
    let mut low = product as u64;
    if low < bound {
        let threshold = bound.wrapping_neg() % bound;
        while low < threshold {
            product = u128::from(rng.next_u64()) * u128::from(bound);
            low = product as u64;
        }
    }
    (product >> 64) as u64
}
