//! Worksheet error types.
//!
//! Typed failures for level registration, question-set building, and the
//! answer sheet. File and TOML failures are reported through `anyhow` by the
//! callers that touch the filesystem.

use thiserror::Error;

/// Errors raised by the rainbow-maths core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorksheetError {
    /// A level definition failed validation.
    #[error("invalid level '{key}': {reason}")]
    InvalidLevel { key: String, reason: String },

    /// The level cannot produce as many distinct questions as it asks for.
    #[error("level '{key}' asks for {requested} questions but can only produce {capacity} distinct ones")]
    InsufficientCapacity {
        key: String,
        requested: usize,
        capacity: usize,
    },

    /// The builder ran out of attempts before the set was full.
    #[error("gave up on level '{key}' after {attempts} attempts with {built}/{requested} questions")]
    AttemptsExhausted {
        key: String,
        attempts: usize,
        built: usize,
        requested: usize,
    },

    /// The registry does not contain its own default level.
    #[error("default level '{0}' is not defined")]
    MissingDefault(String),

    /// An answer was entered after reveal or on a printable sheet.
    #[error("answer sheet is read-only")]
    ReadOnly,

    /// An answer index does not name a question on the sheet.
    #[error("question {index} is out of range (sheet has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = WorksheetError::InsufficientCapacity {
            key: "tiny".into(),
            requested: 10,
            capacity: 4,
        };
        assert_eq!(
            err.to_string(),
            "level 'tiny' asks for 10 questions but can only produce 4 distinct ones"
        );
        assert_eq!(WorksheetError::ReadOnly.to_string(), "answer sheet is read-only");
    }
}
