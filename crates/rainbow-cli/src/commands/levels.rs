//! The `rainbow levels` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use rainbow_core::config::load_config_from;

pub fn execute(levels_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let registry = config.registry(levels_path.as_deref())?;

    let mut table = Table::new();
    table.set_header(vec![
        "Key", "Name", "Tables", "Ceiling", "Questions", "Grid", "Kinds", "Colour", "Capacity",
    ]);

    for level in registry.iter() {
        let key = if level.key == registry.default_key() {
            format!("{} *", level.key)
        } else {
            level.key.clone()
        };
        let tables = level
            .tables
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let kinds = level
            .enabled_kinds()
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            key,
            level.name.clone(),
            tables,
            level.ceiling.to_string(),
            level.questions.to_string(),
            format!("{} x {}", level.rows(), level.columns),
            kinds,
            level.colour.clone(),
            level.capacity().to_string(),
        ]);
    }

    println!("{table}");
    println!("* default level");

    Ok(())
}
