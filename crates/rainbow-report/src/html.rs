//! HTML worksheet generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined. The page
//! handles answer entry, Tab/Enter navigation, and the one-shot reveal.

use anyhow::Result;
use std::path::Path;

use rainbow_core::Worksheet;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page for a worksheet.
pub fn generate_html(worksheet: &Worksheet) -> String {
    let level = &worksheet.level;
    let columns = level.columns.max(1);
    let editable = !worksheet.printable;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Rainbow Maths {}</title>\n",
        html_escape(&level.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<table id=\"table\" data-worksheet=\"{}\" data-total=\"{}\">\n",
        worksheet.id,
        worksheet.len()
    ));

    // Title row; the last cell of the row holds the score after reveal.
    html.push_str("<tr>");
    html.push_str(&format!(
        "<th id=\"title\" colspan=\"{}\" style=\"background-color: {}\">Rainbow Maths {}</th>",
        columns * 3 - 1,
        html_escape(&level.colour),
        html_escape(&level.name)
    ));
    html.push_str("<th id=\"score\" class=\"hidden\"></th>");
    html.push_str("</tr>\n");

    for row in worksheet.rows() {
        html.push_str("<tr>");
        for index in row {
            let question = &worksheet.questions[index];
            html.push_str(&format!("<td class=\"question\">{}</td>", question.html()));
            html.push_str(&format!(
                "<td id=\"q{index}\" class=\"answer\" data-next=\"q{}\" contenteditable=\"{editable}\"></td>",
                worksheet.next_focus(index)
            ));
            html.push_str(&format!(
                "<td class=\"correct-answer hidden\">{}</td>",
                question.answer()
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");

    if !worksheet.printable {
        html.push_str("<button id=\"reveal-button\" type=\"button\">Check answers</button>\n");
    }

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML worksheet to a file.
pub fn write_html_worksheet(worksheet: &Worksheet, path: &Path) -> Result<()> {
    let html = generate_html(worksheet);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; }
table { border-collapse: collapse; margin: 1rem 0; font-size: 1.4rem; }
th { padding: 0.5rem 1rem; text-align: left; }
td { border: 1px solid #d1d5db; padding: 0.4rem 0.8rem; min-width: 3rem; }
td.question { white-space: nowrap; }
td.answer { background: #fff; }
td.answer:focus { outline: 2px solid #2563eb; }
td.correct-answer { color: #6b7280; }
.correct { background: #dcfce7 !important; }
.hidden { display: none; }
button { font-size: 1.2rem; padding: 0.5rem 1.5rem; cursor: pointer; }
@media print { button { display: none; } }
"#;

const JS: &str = r#"
const table = document.getElementById('table');
const revealButton = document.getElementById('reveal-button');

table.querySelectorAll('.answer').forEach(cell => {
  cell.addEventListener('keydown', e => {
    if (e.key === 'Enter' || e.key === 'Tab') {
      e.preventDefault();
      const next = document.getElementById(cell.dataset.next) || document.getElementById('q0');
      next.focus();
    }
  });
});

if (revealButton) {
  const first = document.getElementById('q0');
  if (first) first.focus();

  revealButton.addEventListener('click', () => {
    const answers = table.querySelectorAll('.answer');
    const correctAnswers = table.querySelectorAll('.correct-answer');
    const total = Number(table.dataset.total);
    let score = 0;

    for (let i = 0; i < answers.length; ++i) {
      if (answers[i].textContent.trim() === correctAnswers[i].textContent.trim()) {
        answers[i].classList.add('correct');
        correctAnswers[i].classList.add('correct');
        ++score;
      }
      correctAnswers[i].classList.remove('hidden');
      answers[i].contentEditable = false;
    }

    const scoreCell = document.getElementById('score');
    scoreCell.textContent = `${score} / ${total}` + (total > 0 && score === total ? ' 🤩' : '');
    scoreCell.classList.remove('hidden');
    revealButton.disabled = true;
  }, { once: true });
}
"#;
