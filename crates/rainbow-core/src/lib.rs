//! rainbow-core — Level registry, question generation, and scoring.
//!
//! This crate defines the level model, the question sum type, the bounded
//! generate-and-deduplicate builder, and the scoring logic that the rest
//! of rainbow-maths renders and drives.

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod level;
pub mod parser;
pub mod question;
pub mod scoring;
pub mod worksheet;

pub use builder::{build_question_set, DEFAULT_MAX_ATTEMPTS};
pub use error::WorksheetError;
pub use generator::QuestionGenerator;
pub use level::{Level, LevelRegistry, DEFAULT_LEVEL_KEY, MAX_FACTOR};
pub use question::{Factor, Question, QuestionKind};
pub use scoring::{score, Scorecard};
pub use worksheet::{AnswerSheet, RevealState, Worksheet};
