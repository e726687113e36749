//! Generation parameters and their defaults.

/// Default corpus size in bytes (1 MiB).
pub const DEFAULT_SIZE: u64 = 1 << 20;

/// Default share of letters, in percent.
pub const DEFAULT_ALPHA: u8 = 50;

/// Default alignment of the generation buffer in bytes.
pub const DEFAULT_ALIGN: usize = 32;

/// Default offset of the first written byte past the aligned base.
pub const DEFAULT_MISALIGN: usize = 0;

/// Default seed for the random engine.
pub const DEFAULT_SEED: u64 = 12345;

/// Upper bound of the alphabetic ratio.
pub const MAX_ALPHA: u8 = 100;

/// Immutable configuration for one generation run.
///
/// Every setter clamps its input into the valid range instead of rejecting it,
/// so any combination of values yields a usable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    size: u64,
    alpha: u8,
    align: usize,
    misalign: usize,
    seed: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            alpha: DEFAULT_ALPHA,
            align: DEFAULT_ALIGN,
            misalign: DEFAULT_MISALIGN,
            seed: DEFAULT_SEED,
        }
    }
}

impl GenerationParams {
    /// Sets the number of bytes to generate.
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Sets the alphabetic ratio in percent, clamped to `0..=100`.
    #[must_use]
    pub fn with_alpha(mut self, alpha: i64) -> Self {
        let clamped = alpha.clamp(0, i64::from(MAX_ALPHA));
        self.alpha = u8::try_from(clamped).unwrap_or(MAX_ALPHA);
        self
    }

    /// Sets the buffer alignment in bytes. Zero is raised to one.
    #[must_use]
    pub fn with_align(mut self, align: usize) -> Self {
        self.align = align.max(1);
        self
    }

    /// Sets the offset of the first byte past the aligned base.
    ///
    /// The value is stored as given and reduced modulo the alignment on read,
    /// so the order in which alignment and misalignment are set does not matter.
    #[must_use]
    pub fn with_misalign(mut self, misalign: usize) -> Self {
        self.misalign = misalign;
        self
    }

    /// Sets the seed of the random engine.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of bytes to generate.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Alphabetic ratio in percent (`0..=100`).
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Buffer alignment in bytes (at least one).
    pub fn align(&self) -> usize {
        self.align
    }

    /// Effective misalignment, always below [`align`](Self::align).
    pub fn misalign(&self) -> usize {
        self.misalign % self.align
    }

    /// Seed of the random engine.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
