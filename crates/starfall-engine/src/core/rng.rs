//! Random sources for star and meteor parameters.
//!
//! The engine only ever asks for uniform samples, so the seam is a single
//! method. Tests use a fixed-seed `Rng`; the browser host seeds it from
//! `Math.random()`.

/// Source of uniform samples in [0, 1).
pub trait RandomSource {
    /// Next uniform sample in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in [lo, hi). Returns `lo` when the range is empty.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform sample in a `(lo, hi)` pair, as stored in `BackgroundConfig`.
    fn in_range(&mut self, bounds: (f64, f64)) -> f64 {
        self.range(bounds.0, bounds.1)
    }
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill the f64 mantissa exactly.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
