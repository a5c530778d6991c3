//! The `rainbow validate` command.

use std::path::PathBuf;

use anyhow::Result;

use rainbow_core::parser::{parse_level_file, validate_level_file};

pub fn execute(levels_path: PathBuf) -> Result<()> {
    let file = parse_level_file(&levels_path)?;
    println!(
        "Level file: {} ({} levels, default '{}')",
        levels_path.display(),
        file.levels.len(),
        file.default_key
    );

    let warnings = validate_level_file(&file);
    let mut errors = 0;

    for w in &warnings {
        let prefix = w
            .level_key
            .as_ref()
            .map(|key| format!("  [{key}]"))
            .unwrap_or_else(|| "  ".to_string());
        let severity = if w.is_error { "ERROR" } else { "WARNING" };
        println!("{prefix} {severity}: {}", w.message);
        if w.is_error {
            errors += 1;
        }
    }

    if warnings.is_empty() {
        println!("All levels valid.");
    } else {
        println!("\n{} finding(s), {errors} error(s).", warnings.len());
    }

    anyhow::ensure!(errors == 0, "{errors} level error(s) in {}", levels_path.display());
    Ok(())
}
