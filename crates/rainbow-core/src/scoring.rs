//! Answer scoring.

use serde::{Deserialize, Serialize};

/// Marker appended to the summary of a perfect sheet.
pub const PERFECT_MARKER: &str = "🤩";

/// The outcome of comparing submitted answers against expected answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    /// Per-question result, in question order.
    pub marks: Vec<bool>,
    /// Number of correct answers.
    pub tally: usize,
    /// Number of questions.
    pub total: usize,
}

impl Scorecard {
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.tally == self.total
    }

    /// Fraction of correct answers in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.tally as f64 / self.total as f64
        }
    }

    /// `"tally / total"`, with a celebration when every answer is right.
    pub fn summary(&self) -> String {
        let mut summary = format!("{} / {}", self.tally, self.total);
        if self.is_perfect() {
            summary.push(' ');
            summary.push_str(PERFECT_MARKER);
        }
        summary
    }
}

/// Score submitted answers position by position.
///
/// Both sides are trimmed before an exact string comparison. Positions with
/// no submission count as wrong; extra submissions are ignored. The total is
/// always the number of expected answers.
pub fn score<S, E>(submitted: &[S], expected: &[E]) -> Scorecard
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let marks: Vec<bool> = expected
        .iter()
        .enumerate()
        .map(|(i, want)| {
            submitted
                .get(i)
                .is_some_and(|got| got.as_ref().trim() == want.as_ref().trim())
        })
        .collect();
    let tally = marks.iter().filter(|&&m| m).count();

    Scorecard {
        tally,
        total: expected.len(),
        marks,
    }
}
