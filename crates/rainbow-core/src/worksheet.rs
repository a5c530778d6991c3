//! Worksheets and answer sheets.
//!
//! A [`Worksheet`] is the generated sheet: level, questions, and layout. An
//! [`AnswerSheet`] layers a pupil's typed answers on top and moves once from
//! unrevealed to revealed.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::builder::build_question_set;
use crate::error::WorksheetError;
use crate::generator::QuestionGenerator;
use crate::level::Level;
use crate::question::Question;
use crate::scoring::{score, Scorecard};

/// A generated worksheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    /// Unique worksheet identifier.
    pub id: Uuid,
    /// When the worksheet was generated.
    pub created_at: DateTime<Utc>,
    /// The level the questions were drawn from.
    pub level: Level,
    /// Questions in answer order.
    pub questions: Vec<Question>,
    /// Printable sheets have no editable answers and no reveal control.
    #[serde(default)]
    pub printable: bool,
}

impl Worksheet {
    /// Generate a worksheet for a level.
    pub fn generate<R: Rng>(
        level: &Level,
        generator: &mut QuestionGenerator<R>,
        max_attempts: usize,
        printable: bool,
    ) -> Result<Self, WorksheetError> {
        let questions = build_question_set(level, generator, max_attempts)?;
        tracing::info!(
            "generated {} questions for level '{}'",
            questions.len(),
            level.key
        );
        Ok(Self::from_questions(level.clone(), questions, printable))
    }

    pub fn from_questions(level: Level, questions: Vec<Question>, printable: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            level,
            questions,
            printable,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Expected answers in question order.
    pub fn answer_key(&self) -> Vec<String> {
        self.questions.iter().map(Question::answer_text).collect()
    }

    /// Number of grid rows.
    pub fn row_count(&self) -> usize {
        let columns = self.level.columns.max(1);
        self.questions.len().div_ceil(columns)
    }

    /// Question indices laid out row by row, filling columns top to bottom.
    ///
    /// The first `row_count` questions go down the first column, the next
    /// `row_count` down the second, and so on.
    pub fn rows(&self) -> Vec<Vec<usize>> {
        let rows = self.row_count();
        let columns = self.level.columns.max(1);
        (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| row + column * rows)
                    .filter(|&index| index < self.questions.len())
                    .collect()
            })
            .collect()
    }

    /// The answer cell that Tab or Enter moves to from `index`, wrapping from
    /// the last question back to the first.
    pub fn next_focus(&self, index: usize) -> usize {
        if self.questions.is_empty() {
            0
        } else {
            (index + 1) % self.questions.len()
        }
    }

    /// Score submitted answers against this sheet.
    pub fn score<S: AsRef<str>>(&self, submitted: &[S]) -> Scorecard {
        score(submitted, &self.answer_key())
    }

    /// Start an answer sheet for this worksheet.
    pub fn answer_sheet(&self) -> AnswerSheet<'_> {
        AnswerSheet::new(self)
    }

    /// Save the worksheet as JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize worksheet")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write worksheet to {}", path.display()))?;
        Ok(())
    }

    /// Load a worksheet from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read worksheet from {}", path.display()))?;
        let worksheet: Worksheet =
            serde_json::from_str(&content).context("failed to parse worksheet JSON")?;
        Ok(worksheet)
    }
}

/// Reveal state of an answer sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed(Scorecard),
}

/// Typed answers for a worksheet.
#[derive(Debug, Clone)]
pub struct AnswerSheet<'a> {
    worksheet: &'a Worksheet,
    answers: Vec<String>,
    state: RevealState,
}

impl<'a> AnswerSheet<'a> {
    pub fn new(worksheet: &'a Worksheet) -> Self {
        Self {
            worksheet,
            answers: vec![String::new(); worksheet.len()],
            state: RevealState::Unrevealed,
        }
    }

    pub fn worksheet(&self) -> &Worksheet {
        self.worksheet
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// Answers can be typed until reveal, and never on a printable sheet.
    pub fn is_editable(&self) -> bool {
        !self.worksheet.printable && matches!(self.state, RevealState::Unrevealed)
    }

    /// Replace the answer typed for question `index`.
    pub fn enter(&mut self, index: usize, text: impl Into<String>) -> Result<(), WorksheetError> {
        if !self.is_editable() {
            return Err(WorksheetError::ReadOnly);
        }
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(WorksheetError::IndexOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Score the sheet and lock it. Later calls return the same scorecard.
    pub fn reveal(&mut self) -> Scorecard {
        match &self.state {
            RevealState::Revealed(card) => card.clone(),
            RevealState::Unrevealed => {
                let card = self.worksheet.score(&self.answers);
                tracing::debug!(
                    "worksheet {} revealed: {}",
                    self.worksheet.id,
                    card.summary()
                );
                self.state = RevealState::Revealed(card.clone());
                card
            }
        }
    }

    pub fn scorecard(&self) -> Option<&Scorecard> {
        match &self.state {
            RevealState::Revealed(card) => Some(card),
            RevealState::Unrevealed => None,
        }
    }
}
