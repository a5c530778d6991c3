//! The `rainbow check` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use rainbow_core::Worksheet;

pub fn execute(worksheet_path: PathBuf, answers_path: PathBuf, format: String) -> Result<()> {
    let worksheet = Worksheet::load_json(&worksheet_path)?;
    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers from {}", answers_path.display()))?;
    let submitted: Vec<&str> = content.lines().collect();

    if submitted.len() > worksheet.len() {
        tracing::warn!(
            "{} answers for {} questions, extra answers ignored",
            submitted.len(),
            worksheet.len()
        );
    }

    let card = worksheet.score(&submitted);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        _ => {
            println!("Rainbow Maths {}", worksheet.level.name);
            for (index, question) in worksheet.questions.iter().enumerate() {
                let given = submitted.get(index).map(|s| s.trim()).unwrap_or("");
                let mark = if card.marks[index] { "OK" } else { "WRONG" };
                println!(
                    "  {:>3}) {:<14} {:>6} [{}] {mark}",
                    index + 1,
                    question.to_string(),
                    given,
                    question.answer()
                );
            }
            println!(
                "\nScore: {} ({:.0}%)",
                card.summary(),
                card.ratio() * 100.0
            );
        }
    }

    Ok(())
}
