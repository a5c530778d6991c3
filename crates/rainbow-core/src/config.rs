//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_MAX_ATTEMPTS;
use crate::level::{LevelRegistry, DEFAULT_LEVEL_KEY};
use crate::parser;

/// Top-level rainbow-maths configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainbowConfig {
    /// Level used when none is requested.
    #[serde(default = "default_level")]
    pub default_level: String,
    /// Produce printable sheets by default.
    #[serde(default)]
    pub printable: bool,
    /// Generator calls allowed per question set.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Output directory for generated worksheets.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Custom level file replacing the built-in levels.
    #[serde(default)]
    pub levels_file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LEVEL_KEY.to_string()
}
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./rainbow-worksheets")
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            printable: false,
            max_attempts: default_max_attempts(),
            output_dir: default_output_dir(),
            levels_file: None,
        }
    }
}

impl RainbowConfig {
    /// The level registry this configuration selects.
    ///
    /// An explicit `levels` path wins over `levels_file`; with neither, the
    /// built-in rainbow levels are used.
    pub fn registry(&self, levels: Option<&Path>) -> Result<LevelRegistry> {
        match levels.or(self.levels_file.as_deref()) {
            Some(path) => parser::load_registry(path),
            None => Ok(LevelRegistry::builtin()),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `rainbow.toml` in the current directory
/// 2. `~/.config/rainbow/config.toml`
///
/// Environment variable overrides: `RAINBOW_LEVEL`, `RAINBOW_PRINTABLE`.
pub fn load_config_from(path: Option<&Path>) -> Result<RainbowConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("rainbow.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<RainbowConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            // Relative level files are relative to the config file.
            if let (Some(levels), Some(dir)) = (&config.levels_file, path.parent()) {
                if levels.is_relative() && !dir.as_os_str().is_empty() {
                    config.levels_file = Some(dir.join(levels));
                }
            }
            config
        }
        None => RainbowConfig::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut RainbowConfig) {
    if let Ok(level) = std::env::var("RAINBOW_LEVEL") {
        if !level.trim().is_empty() {
            config.default_level = level;
        }
    }

    if let Ok(printable) = std::env::var("RAINBOW_PRINTABLE") {
        config.printable = parse_flag(&printable);
    }
}

/// Lenient boolean: anything other than a recognised "true" is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("rainbow"))
}
