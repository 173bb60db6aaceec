//! Random sign source consumed by the diagonal tie-break in `Grid::step`.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Supplies the primary diagonal direction for a blocked particle.
pub trait SignSource {
    /// `1` or `-1`, each with probability one half.
    fn next_sign(&mut self) -> i32;
}

impl<R: RngCore + ?Sized> SignSource for R {
    fn next_sign(&mut self) -> i32 {
        if self.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }
}

#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed sequence of signs, cycling when exhausted.
/// Non-negative entries read as `1`, negative ones as `-1`.
#[derive(Debug, Clone)]
pub struct ScriptedSigns {
    signs: Vec<i32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedSigns {
    /// # Panics
    ///
    /// Panics if `signs` is empty.
    #[must_use]
    pub fn new(signs: &[i32]) -> Self {
        assert!(!signs.is_empty(), "scripted sign sequence must not be empty");
        Self {
            signs: signs.iter().map(|&s| if s < 0 { -1 } else { 1 }).collect(),
            cursor: 0,
            draws: 0,
        }
    }

    /// How many signs have been handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl SignSource for ScriptedSigns {
    fn next_sign(&mut self) -> i32 {
        let sign = self.signs[self.cursor];
        self.cursor = (self.cursor + 1) % self.signs.len();
        self.draws += 1;
        sign
    }
}
