//! The `rainbow generate` command.

use std::path::PathBuf;

use anyhow::Result;

use rainbow_core::config::load_config_from;
use rainbow_core::{QuestionGenerator, Worksheet};
use rainbow_report::html::write_html_worksheet;
use rainbow_report::text::write_text_worksheet;

pub struct GenerateArgs {
    pub level: Option<String>,
    pub printable: bool,
    pub seed: Option<u64>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub answers: bool,
    pub max_attempts: Option<usize>,
    pub levels: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let formats: Vec<&str> = match args.format.as_str() {
        "all" => vec!["html", "text", "json"],
        "html" | "text" | "json" => vec![args.format.as_str()],
        other => anyhow::bail!("unknown format: {other} (expected html, text, json, or all)"),
    };

    let config = load_config_from(args.config.as_deref())?;
    let registry = config.registry(args.levels.as_deref())?;

    let requested = args.level.as_deref().unwrap_or(&config.default_level);
    let level = registry.resolve(Some(requested));

    let max_attempts = args.max_attempts.unwrap_or(config.max_attempts);
    anyhow::ensure!(max_attempts >= 1, "max-attempts must be at least 1");

    let printable = args.printable || config.printable;
    let mut generator = match args.seed {
        Some(seed) => QuestionGenerator::seeded(seed),
        None => QuestionGenerator::new(),
    };
    let worksheet = Worksheet::generate(level, &mut generator, max_attempts, printable)?;

    let output = args.output.unwrap_or(config.output_dir);
    let stem = format!("worksheet-{}", level.key);

    for format in formats {
        let path = match format {
            "html" => {
                let path = output.join(format!("{stem}.html"));
                write_html_worksheet(&worksheet, &path)?;
                path
            }
            "text" => {
                let path = output.join(format!("{stem}.txt"));
                write_text_worksheet(&worksheet, &path, args.answers)?;
                path
            }
            _ => {
                let path = output.join(format!("{stem}.json"));
                worksheet.save_json(&path)?;
                path
            }
        };
        println!("Wrote {}", path.display());
    }

    println!(
        "Level: {} ({} questions{})",
        level.name,
        worksheet.len(),
        if printable { ", printable" } else { "" }
    );

    Ok(())
}
