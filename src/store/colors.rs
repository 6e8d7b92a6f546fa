//! Sources of fresh category colors.

use crate::domain::Rgba;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies a color for a category seen for the first time.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgba;
}

/// Opaque colors with red, green, and blue drawn uniformly from `[0, 1)`.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Rgba {
        let r: f64 = self.rng.r#gen();
        let g: f64 = self.rng.r#gen();
        let b: f64 = self.rng.r#gen();
        Rgba::clamped(r, g, b, 1.0)
    }
}
