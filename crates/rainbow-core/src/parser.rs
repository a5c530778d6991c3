//! TOML level file parser.
//!
//! Loads custom level definitions from TOML files and checks them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::level::{capitalise, Level, LevelRegistry, DEFAULT_LEVEL_KEY};

/// Intermediate TOML structure for level files.
#[derive(Debug, Deserialize)]
struct TomlLevelFile {
    #[serde(default)]
    settings: TomlSettings,
    #[serde(default)]
    levels: Vec<TomlLevel>,
}

#[derive(Debug, Deserialize)]
struct TomlSettings {
    #[serde(default = "default_key")]
    default: String,
}

impl Default for TomlSettings {
    fn default() -> Self {
        Self {
            default: default_key(),
        }
    }
}

fn default_key() -> String {
    DEFAULT_LEVEL_KEY.to_string()
}

#[derive(Debug, Deserialize)]
struct TomlLevel {
    key: String,
    #[serde(default)]
    name: Option<String>,
    tables: Vec<u32>,
    ceiling: u32,
    questions: usize,
    #[serde(default = "default_columns")]
    columns: usize,
    #[serde(default)]
    squares: bool,
    #[serde(default)]
    inverses: bool,
    #[serde(default)]
    fractions: bool,
    #[serde(default)]
    colour: Option<String>,
}

fn default_columns() -> usize {
    2
}

/// Levels read from a file, not yet registered.
#[derive(Debug, Clone)]
pub struct LevelFile {
    /// Key of the fallback level.
    pub default_key: String,
    pub levels: Vec<Level>,
}

impl LevelFile {
    /// Validate every level and build a registry from them.
    pub fn into_registry(self) -> Result<LevelRegistry> {
        Ok(LevelRegistry::new(self.levels, &self.default_key)?)
    }
}

/// Parse a level file from disk.
pub fn parse_level_file(path: &Path) -> Result<LevelFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read level file: {}", path.display()))?;

    parse_level_str(&content, path)
}

/// Parse a TOML string into a `LevelFile` (useful for testing).
pub fn parse_level_str(content: &str, source_path: &Path) -> Result<LevelFile> {
    let parsed: TomlLevelFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let levels = parsed
        .levels
        .into_iter()
        .map(|l| {
            let key = l.key.trim().to_lowercase();
            Level {
                name: l.name.unwrap_or_else(|| capitalise(&key)),
                colour: l.colour.unwrap_or_else(|| key.clone()),
                key,
                tables: l.tables,
                ceiling: l.ceiling,
                questions: l.questions,
                columns: l.columns,
                squares: l.squares,
                inverses: l.inverses,
                fractions: l.fractions,
            }
        })
        .collect();

    Ok(LevelFile {
        default_key: parsed.settings.default.trim().to_lowercase(),
        levels,
    })
}

/// Load a level file and register its levels.
pub fn load_registry(path: &Path) -> Result<LevelRegistry> {
    parse_level_file(path)?
        .into_registry()
        .with_context(|| format!("invalid level file: {}", path.display()))
}

/// A finding from level file validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The level key (if applicable).
    pub level_key: Option<String>,
    pub message: String,
    /// Errors stop the file from being registered; warnings do not.
    pub is_error: bool,
}

/// Validate a level file for common issues.
pub fn validate_level_file(file: &LevelFile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let warn = |key: &str, message: String| ValidationWarning {
        level_key: Some(key.to_string()),
        message,
        is_error: false,
    };

    if file.levels.is_empty() {
        warnings.push(ValidationWarning {
            level_key: None,
            message: "no levels defined".into(),
            is_error: true,
        });
    }

    let mut seen_keys = HashSet::new();
    for level in &file.levels {
        if !seen_keys.insert(&level.key) {
            warnings.push(warn(
                &level.key,
                format!("duplicate level key: {} (later definition wins)", level.key),
            ));
        }
    }

    if !file.levels.iter().any(|l| l.key == file.default_key) {
        warnings.push(ValidationWarning {
            level_key: None,
            message: format!("default level '{}' is not defined", file.default_key),
            is_error: true,
        });
    }

    for level in &file.levels {
        if let Err(e) = level.validate() {
            warnings.push(ValidationWarning {
                level_key: Some(level.key.clone()),
                message: e.to_string(),
                is_error: true,
            });
        }

        let distinct: HashSet<_> = level.tables.iter().collect();
        if distinct.len() != level.tables.len() {
            warnings.push(warn(
                &level.key,
                "tables contain repeated values, which weights them more often".into(),
            ));
        }

        if level.fractions {
            warnings.push(warn(
                &level.key,
                "fraction questions are not supported and will be ignored".into(),
            ));
        }

        if level.colour.trim().is_empty() {
            warnings.push(warn(&level.key, "colour is empty".into()));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r##"
[settings]
default = "Starter"

[[levels]]
key = "starter"
name = "Starter"
tables = [2, 10]
ceiling = 5
questions = 10
columns = 2
colour = "#88cc88"

[[levels]]
key = "Tricky"
tables = [7, 8, 9]
ceiling = 12
questions = 30
columns = 3
squares = true
inverses = true
"##;

    #[test]
    fn parse_valid_toml() {
        let file = parse_level_str(VALID_TOML, &PathBuf::from("levels.toml")).unwrap();
        assert_eq!(file.default_key, "starter");
        assert_eq!(file.levels.len(), 2);
        assert_eq!(file.levels[0].colour, "#88cc88");

        let tricky = &file.levels[1];
        assert_eq!(tricky.key, "tricky");
        assert_eq!(tricky.name, "Tricky");
        assert_eq!(tricky.colour, "tricky");
        assert!(tricky.squares && tricky.inverses);
        assert!(validate_level_file(&file).is_empty());
    }

    #[test]
    fn registry_from_file() {
        let file = parse_level_str(VALID_TOML, &PathBuf::from("levels.toml")).unwrap();
        let registry = file.into_registry().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(Some("yellow")).key, "starter");
        assert_eq!(registry.resolve(Some("TRICKY")).key, "tricky");
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[[levels]]
key = "yellow"
tables = [3]
ceiling = 10
questions = 10
"#;
        let file = parse_level_str(toml, &PathBuf::from("levels.toml")).unwrap();
        assert_eq!(file.default_key, "yellow");
        let level = &file.levels[0];
        assert_eq!(level.columns, 2);
        assert!(!level.squares && !level.inverses && !level.fractions);
        assert_eq!(level.name, "Yellow");
    }

    #[test]
    fn over_capacity_is_an_error() {
        let toml = r#"
[settings]
default = "tiny"

[[levels]]
key = "tiny"
tables = [2]
ceiling = 2
questions = 4
columns = 1
"#;
        let file = parse_level_str(toml, &PathBuf::from("levels.toml")).unwrap();
        let warnings = validate_level_file(&file);
        assert!(warnings
            .iter()
            .any(|w| w.is_error && w.message.contains("can only produce 3")));
        assert!(file.into_registry().is_err());
    }

    #[test]
    fn warns_about_fractions_and_duplicates() {
        let toml = r#"
[[levels]]
key = "yellow"
tables = [2, 2, 5]
ceiling = 10
questions = 10
fractions = true

[[levels]]
key = "yellow"
tables = [3]
ceiling = 10
questions = 10
"#;
        let file = parse_level_str(toml, &PathBuf::from("levels.toml")).unwrap();
        let warnings = validate_level_file(&file);
        assert!(warnings.iter().all(|w| !w.is_error));
        assert!(warnings.iter().any(|w| w.message.contains("duplicate level key")));
        assert!(warnings.iter().any(|w| w.message.contains("fraction")));
        assert!(warnings.iter().any(|w| w.message.contains("repeated values")));
    }

    #[test]
    fn missing_default_is_reported() {
        let toml = r#"
[[levels]]
key = "only"
tables = [4]
ceiling = 10
questions = 10
"#;
        let file = parse_level_str(toml, &PathBuf::from("levels.toml")).unwrap();
        let warnings = validate_level_file(&file);
        assert!(warnings
            .iter()
            .any(|w| w.is_error && w.message.contains("default level 'yellow'")));
    }

    #[test]
    fn large_factors_are_reported_as_errors() {
        let toml = r#"
[settings]
default = "huge"

[[levels]]
key = "huge"
tables = [70000]
ceiling = 70000
questions = 10
inverses = true
"#;
        let file = parse_level_str(toml, &PathBuf::from("levels.toml")).unwrap();
        let warnings = validate_level_file(&file);
        assert!(warnings
            .iter()
            .any(|w| w.is_error && w.message.contains("table 70000 is above the limit")));
        assert!(file.into_registry().is_err());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_level_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_registry_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let registry = load_registry(&path).unwrap();
        assert_eq!(registry.default_key(), "starter");
    }
}
