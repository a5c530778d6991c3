//! Question model.
//!
//! A question is one of three kinds. Equality is structural: two questions
//! are duplicates only when they are the same kind with identical fields, so
//! `2 x 5` and `5 x 2` are different questions.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// The kinds of question a level can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple,
    Square,
    Inverse,
    /// Reserved. Levels may carry the flag but no generator produces it.
    Fraction,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Multiple => write!(f, "multiple"),
            QuestionKind::Square => write!(f, "square"),
            QuestionKind::Inverse => write!(f, "inverse"),
            QuestionKind::Fraction => write!(f, "fraction"),
        }
    }
}

/// One side of an inverse question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    /// The placeholder the pupil fills in.
    Hidden,
    Shown(u32),
}

impl Factor {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Factor::Hidden)
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Factor::Hidden => None,
            Factor::Shown(n) => Some(*n),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Hidden => write!(f, "_"),
            Factor::Shown(n) => write!(f, "{n}"),
        }
    }
}

/// A single worksheet question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Question {
    /// `multiplicand x multiplier`, in display order.
    Multiple { multiplicand: u32, multiplier: u32 },
    /// `base²`.
    Square { base: u32 },
    /// `first x second = product` with exactly one factor hidden.
    Inverse {
        first: Factor,
        second: Factor,
        product: u64,
    },
}

impl Question {
    /// Build an inverse question that hides the first factor.
    pub fn hide_first(first: u32, second: u32) -> Self {
        Question::Inverse {
            first: Factor::Hidden,
            second: Factor::Shown(second),
            product: u64::from(first) * u64::from(second),
        }
    }

    /// Build an inverse question that hides the second factor.
    pub fn hide_second(first: u32, second: u32) -> Self {
        Question::Inverse {
            first: Factor::Shown(first),
            second: Factor::Hidden,
            product: u64::from(first) * u64::from(second),
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::Multiple { .. } => QuestionKind::Multiple,
            Question::Square { .. } => QuestionKind::Square,
            Question::Inverse { .. } => QuestionKind::Inverse,
        }
    }

    /// The expected answer.
    ///
    /// Computed in `u64` so any pair of `u32` factors fits.
    pub fn answer(&self) -> u64 {
        match *self {
            Question::Multiple {
                multiplicand,
                multiplier,
            } => u64::from(multiplicand) * u64::from(multiplier),
            Question::Square { base } => u64::from(base) * u64::from(base),
            Question::Inverse {
                first,
                second,
                product,
            } => match (first, second) {
                (Factor::Hidden, Factor::Shown(n)) | (Factor::Shown(n), Factor::Hidden) => {
                    if n == 0 {
                        0
                    } else {
                        product / u64::from(n)
                    }
                }
                // Unreachable through the constructors; a hand-built
                // question with no single gap has nothing to ask.
                _ => 0,
            },
        }
    }

    /// The expected answer as it is compared against submitted text.
    pub fn answer_text(&self) -> String {
        self.answer().to_string()
    }

    /// Question text with HTML markup for the superscript.
    pub fn html(&self) -> String {
        match self {
            Question::Square { base } => format!("{base} <sup>2</sup>"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::Multiple {
                multiplicand,
                multiplier,
            } => write!(f, "{multiplicand} x {multiplier}"),
            Question::Square { base } => write!(f, "{base}²"),
            Question::Inverse {
                first,
                second,
                product,
            } => write!(f, "{first} x {second} = {product}"),
        }
    }
}

/// Every distinct question a level can produce.
///
/// Mirrors the generator's choices: each table value against each multiplier
/// in `1..=ceiling`, in both display orders, plus squares and inverses when
/// the level enables them.
pub fn enumerate(level: &Level) -> HashSet<Question> {
    let mut all = HashSet::new();
    for &table in &level.tables {
        if level.squares {
            all.insert(Question::Square { base: table });
        }
        for multiplier in 1..=level.ceiling {
            all.insert(Question::Multiple {
                multiplicand: table,
                multiplier,
            });
            all.insert(Question::Multiple {
                multiplicand: multiplier,
                multiplier: table,
            });
            if level.inverses {
                all.insert(Question::hide_first(table, multiplier));
                all.insert(Question::hide_second(table, multiplier));
            }
        }
    }
    all
}
