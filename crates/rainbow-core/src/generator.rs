//! Random question generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::level::Level;
use crate::question::{Question, QuestionKind};

/// Draws single questions for a level.
///
/// Generic over the random source so tests and `--seed` runs can be
/// reproduced; the default is an entropy-seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R = StdRng> {
    rng: R,
}

impl QuestionGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A generator that produces the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for QuestionGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce one random question of a randomly chosen enabled kind.
    ///
    /// # Panics
    ///
    /// Panics if `level.tables` is empty or `level.ceiling` is zero. Levels
    /// that passed [`Level::validate`] never are.
    pub fn generate_one(&mut self, level: &Level) -> Question {
        let kinds = level.enabled_kinds();
        let kind = kinds
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(QuestionKind::Multiple);

        let table = level.tables[self.rng.gen_range(0..level.tables.len())];
        let multiplier = self.rng.gen_range(1..=level.ceiling);

        match kind {
            QuestionKind::Square => Question::Square { base: table },
            QuestionKind::Inverse => {
                if self.coin_flip() {
                    Question::hide_first(table, multiplier)
                } else {
                    Question::hide_second(table, multiplier)
                }
            }
            QuestionKind::Multiple | QuestionKind::Fraction => {
                if self.coin_flip() {
                    Question::Multiple {
                        multiplicand: table,
                        multiplier,
                    }
                } else {
                    Question::Multiple {
                        multiplicand: multiplier,
                        multiplier: table,
                    }
                }
            }
        }
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}
