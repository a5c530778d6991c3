//! Question set building.
//!
//! Draws questions until the set is full, discarding duplicates. The loop is
//! bounded so a level that cannot be satisfied fails instead of spinning.

use std::collections::HashSet;

use rand::Rng;

use crate::error::WorksheetError;
use crate::generator::QuestionGenerator;
use crate::level::Level;
use crate::question::Question;

/// Generator calls allowed per set before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Build an ordered, duplicate-free set of `level.questions` questions.
///
/// Fails up front with [`WorksheetError::InsufficientCapacity`] when the level
/// cannot produce that many distinct questions, and with
/// [`WorksheetError::AttemptsExhausted`] when `max_attempts` draws were not
/// enough.
pub fn build_question_set<R: Rng>(
    level: &Level,
    generator: &mut QuestionGenerator<R>,
    max_attempts: usize,
) -> Result<Vec<Question>, WorksheetError> {
    level.validate()?;

    let target = level.questions;
    let mut questions = Vec::with_capacity(target);
    let mut seen = HashSet::with_capacity(target);
    let mut attempts = 0usize;
    let mut discarded = 0usize;

    while questions.len() < target {
        if attempts >= max_attempts {
            return Err(WorksheetError::AttemptsExhausted {
                key: level.key.clone(),
                attempts,
                built: questions.len(),
                requested: target,
            });
        }
        attempts += 1;

        let question = generator.generate_one(level);
        if seen.insert(question) {
            questions.push(question);
        } else {
            discarded += 1;
        }
    }

    tracing::debug!(
        "level '{}': {} questions in {} draws ({} duplicates discarded)",
        level.key,
        questions.len(),
        attempts,
        discarded
    );

    Ok(questions)
}
