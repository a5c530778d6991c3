//! The `rainbow init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing("rainbow.toml", SAMPLE_CONFIG)?;
    write_if_missing("levels.toml", SAMPLE_LEVELS)?;

    println!("\nNext steps:");
    println!("  1. Edit levels.toml and point rainbow.toml at it with levels_file");
    println!("  2. Run: rainbow validate --levels levels.toml");
    println!("  3. Run: rainbow generate --levels levels.toml --level starter");

    Ok(())
}

fn write_if_missing(path: &str, content: &str) -> Result<()> {
    if std::path::Path::new(path).exists() {
        println!("{path} already exists, skipping.");
    } else {
        std::fs::write(path, content)?;
        println!("Created {path}");
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# rainbow-maths configuration

default_level = "yellow"
printable = false
max_attempts = 100000
output_dir = "./rainbow-worksheets"
# levels_file = "levels.toml"
"#;

const SAMPLE_LEVELS: &str = r##"# Custom levels. Every level must be able to produce `questions`
# distinct questions, and `questions` must fill `columns` evenly.

[settings]
default = "starter"

[[levels]]
key = "starter"
name = "Starter"
tables = [2, 10]
ceiling = 10
questions = 20
columns = 2
colour = "#a7f3d0"

[[levels]]
key = "stretch"
name = "Stretch"
tables = [6, 7, 8, 9]
ceiling = 12
questions = 30
columns = 3
inverses = true
colour = "#c4b5fd"

[[levels]]
key = "squares"
name = "Squares"
tables = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
ceiling = 12
questions = 40
columns = 4
squares = true
inverses = true
colour = "#fcd34d"
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use rainbow_core::parser::{parse_level_str, validate_level_file};

    #[test]
    fn sample_levels_are_valid() {
        let file = parse_level_str(SAMPLE_LEVELS, Path::new("levels.toml")).unwrap();
        assert_eq!(file.levels.len(), 3);
        assert!(validate_level_file(&file).is_empty());
    }

    #[test]
    fn sample_config_parses() {
        let config: rainbow_core::config::RainbowConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.default_level, "yellow");
    }
}
