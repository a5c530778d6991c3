//! Level configuration and the level registry.
//!
//! A level controls which times tables, multiplier range, and question kinds
//! a worksheet draws from, and how it is laid out. The registry is an
//! immutable value built once and passed to whoever needs it.

use serde::{Deserialize, Serialize};

use crate::error::WorksheetError;
use crate::question::{self, QuestionKind};

/// Key of the level used when a lookup misses.
pub const DEFAULT_LEVEL_KEY: &str = "yellow";

/// Largest table value or ceiling a level may use.
pub const MAX_FACTOR: u32 = 1000;

/// A named difficulty configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Lookup key, stored lowercase.
    pub key: String,
    /// Display name shown in the worksheet title.
    pub name: String,
    /// Eligible multiplicands.
    pub tables: Vec<u32>,
    /// Largest multiplier drawn (inclusive).
    pub ceiling: u32,
    /// Number of questions on the sheet.
    pub questions: usize,
    /// Number of question columns in the grid.
    pub columns: usize,
    #[serde(default)]
    pub squares: bool,
    #[serde(default)]
    pub inverses: bool,
    /// Reserved; accepted but never produces questions.
    #[serde(default)]
    pub fractions: bool,
    /// CSS colour for the title row.
    pub colour: String,
}

impl Level {
    /// Question kinds the generator may choose from, in a stable order.
    pub fn enabled_kinds(&self) -> Vec<QuestionKind> {
        let mut kinds = vec![QuestionKind::Multiple];
        if self.squares {
            kinds.push(QuestionKind::Square);
        }
        if self.inverses {
            kinds.push(QuestionKind::Inverse);
        }
        kinds
    }

    /// Number of distinct questions this level can produce.
    pub fn capacity(&self) -> usize {
        question::enumerate(self).len()
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.questions / self.columns
        }
    }

    /// Check that a worksheet can be built and laid out for this level.
    pub fn validate(&self) -> Result<(), WorksheetError> {
        let invalid = |reason: &str| WorksheetError::InvalidLevel {
            key: self.key.clone(),
            reason: reason.to_string(),
        };

        if self.key.trim().is_empty() {
            return Err(invalid("key is empty"));
        }
        if self.tables.is_empty() {
            return Err(invalid("tables must not be empty"));
        }
        if self.tables.contains(&0) {
            return Err(invalid("tables must be positive"));
        }
        if self.ceiling == 0 {
            return Err(invalid("ceiling must be positive"));
        }
        if let Some(table) = self.tables.iter().find(|&&t| t > MAX_FACTOR) {
            return Err(invalid(&format!(
                "table {table} is above the limit of {MAX_FACTOR}"
            )));
        }
        if self.ceiling > MAX_FACTOR {
            return Err(invalid(&format!(
                "ceiling {} is above the limit of {MAX_FACTOR}",
                self.ceiling
            )));
        }
        if self.questions == 0 {
            return Err(invalid("questions must be positive"));
        }
        if self.columns == 0 {
            return Err(invalid("columns must be positive"));
        }
        if self.questions % self.columns != 0 {
            return Err(invalid(&format!(
                "{} questions do not fill {} columns evenly",
                self.questions, self.columns
            )));
        }

        let capacity = self.capacity();
        if capacity < self.questions {
            return Err(WorksheetError::InsufficientCapacity {
                key: self.key.clone(),
                requested: self.questions,
                capacity,
            });
        }
        Ok(())
    }
}

/// Immutable mapping from level key to level.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    levels: Vec<Level>,
    default_key: String,
}

impl LevelRegistry {
    /// Build a registry, validating every level.
    ///
    /// Keys are normalised to lowercase. Later definitions of the same key
    /// replace earlier ones. The default key must name one of the levels.
    pub fn new(levels: Vec<Level>, default_key: &str) -> Result<Self, WorksheetError> {
        let mut registered: Vec<Level> = Vec::with_capacity(levels.len());
        for mut level in levels {
            level.key = normalise(&level.key);
            level.validate()?;
            match registered.iter_mut().find(|l| l.key == level.key) {
                Some(existing) => *existing = level,
                None => registered.push(level),
            }
        }

        let default_key = normalise(default_key);
        if !registered.iter().any(|l| l.key == default_key) {
            return Err(WorksheetError::MissingDefault(default_key));
        }

        Ok(Self {
            levels: registered,
            default_key,
        })
    }

    /// The ten rainbow levels, from pink to silver.
    pub fn builtin() -> Self {
        let all_tables: Vec<u32> = (2..=12).collect();
        let level = |key: &str, tables: &[u32], ceiling, questions, columns, colour: &str| Level {
            key: key.to_string(),
            name: capitalise(key),
            tables: tables.to_vec(),
            ceiling,
            questions,
            columns,
            squares: false,
            inverses: false,
            fractions: false,
            colour: colour.to_string(),
        };

        let levels = vec![
            level("pink", &[2], 10, 10, 2, "pink"),
            level("red", &[2, 5], 10, 10, 2, "red"),
            level("orange", &[2, 5, 10], 10, 20, 2, "orange"),
            level("yellow", &[2, 3, 4, 5, 10], 10, 40, 2, "yellow"),
            level("green", &[2, 3, 4, 5, 8, 10], 10, 40, 2, "green"),
            level("blue", &all_tables, 12, 60, 3, "blue"),
            Level {
                inverses: true,
                ..level("indigo", &all_tables, 12, 60, 3, "indigo")
            },
            Level {
                inverses: true,
                ..level("violet", &all_tables, 12, 60, 3, "violet")
            },
            Level {
                inverses: true,
                ..level("bronze", &all_tables, 12, 80, 4, "#cd7f32")
            },
            Level {
                inverses: true,
                squares: true,
                fractions: true,
                ..level("silver", &all_tables, 10, 80, 4, "silver")
            },
        ];

        Self {
            levels,
            default_key: DEFAULT_LEVEL_KEY.to_string(),
        }
    }

    /// Look up a level, falling back to the default level.
    ///
    /// Never fails: a missing, empty, or unknown key yields the default.
    pub fn resolve(&self, key: Option<&str>) -> &Level {
        if let Some(level) = key.and_then(|k| self.get(k)) {
            return level;
        }
        tracing::debug!(
            "level {:?} not found, using default '{}'",
            key,
            self.default_key
        );
        self.default_level()
    }

    /// Exact (case-insensitive) lookup.
    pub fn get(&self, key: &str) -> Option<&Level> {
        let key = normalise(key);
        self.levels.iter().find(|l| l.key == key)
    }

    pub fn default_level(&self) -> &Level {
        // `new` and `builtin` both guarantee the default key is present.
        self.levels
            .iter()
            .find(|l| l.key == self.default_key)
            .unwrap_or(&self.levels[0])
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Levels in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalise(key: &str) -> String {
    key.trim().to_lowercase()
}

pub(crate) fn capitalise(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
