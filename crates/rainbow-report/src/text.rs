//! Plain-text worksheet for printing.

use std::path::Path;

use anyhow::Result;

use rainbow_core::Worksheet;

const QUESTION_WIDTH: usize = 14;
const BLANK: &str = "______";

/// Render a worksheet as a fixed-width text grid.
///
/// Questions are numbered in answer order and laid out column-major like
/// the HTML sheet. With `with_answers`, an answer key follows the grid.
pub fn generate_text(worksheet: &Worksheet, with_answers: bool) -> String {
    let mut out = String::new();
    let number_width = worksheet.len().to_string().len();

    out.push_str(&format!("Rainbow Maths {}\n", worksheet.level.name));
    out.push_str(&format!(
        "{} questions | generated {}\n\n",
        worksheet.len(),
        worksheet.created_at.format("%Y-%m-%d")
    ));

    for row in worksheet.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&index| {
                format!(
                    "{:>number_width$}) {:<QUESTION_WIDTH$} {BLANK}",
                    index + 1,
                    worksheet.questions[index].to_string()
                )
            })
            .collect();
        out.push_str(cells.join("    ").trim_end());
        out.push('\n');
    }

    if with_answers {
        out.push_str("\nAnswers\n");
        for (index, answer) in worksheet.answer_key().iter().enumerate() {
            out.push_str(&format!("{:>number_width$}) {answer}\n", index + 1));
        }
    }

    out
}

/// Write a text worksheet to a file.
pub fn write_text_worksheet(worksheet: &Worksheet, path: &Path, with_answers: bool) -> Result<()> {
    let text = generate_text(worksheet, with_answers);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    Ok(())
}
