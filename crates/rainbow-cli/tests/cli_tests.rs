//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rainbow(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("rainbow").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("RAINBOW_LEVEL")
        .env_remove("RAINBOW_PRINTABLE");
    cmd
}

fn generate_json(dir: &Path, level: &str) -> serde_json::Value {
    rainbow(dir)
        .args(["generate", "--format", "json", "--seed", "7", "--level", level])
        .arg("--output")
        .arg(dir)
        .assert()
        .success();
    let files: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .collect();
    assert_eq!(files.len(), 1);
    serde_json::from_str(&std::fs::read_to_string(&files[0]).unwrap()).unwrap()
}

#[test]
fn generate_html_worksheet() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .args(["generate", "--level", "PINK", "--seed", "1", "--output", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("worksheet-pink.html"))
        .stdout(predicate::str::contains("Level: Pink (10 questions)"));

    let html = std::fs::read_to_string(dir.path().join("out/worksheet-pink.html")).unwrap();
    assert!(html.contains("Rainbow Maths Pink"));
    assert!(html.contains("reveal-button"));
    assert_eq!(html.matches("class=\"answer\"").count(), 10);
}

#[test]
fn generate_unknown_level_falls_back_to_yellow() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .args(["generate", "--level", "ultraviolet", "--output", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("worksheet-yellow.html"))
        .stdout(predicate::str::contains("Level: Yellow (40 questions)"));
}

#[test]
fn generate_printable_hides_reveal() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .args(["generate", "--level", "red", "--printable", "--output", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("printable"));

    let html = std::fs::read_to_string(dir.path().join("worksheet-red.html")).unwrap();
    assert!(!html.contains("<button"));
    assert!(!html.contains("contenteditable=\"true\""));
}

#[test]
fn generate_all_formats() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .args(["generate", "--level", "silver", "--format", "all", "--answers"])
        .args(["--output", "sheets"])
        .assert()
        .success();

    let sheets = dir.path().join("sheets");
    assert!(sheets.join("worksheet-silver.html").exists());
    assert!(sheets.join("worksheet-silver.json").exists());
    let text = std::fs::read_to_string(sheets.join("worksheet-silver.txt")).unwrap();
    assert!(text.contains("Answers"));
}

#[test]
fn generate_seed_is_reproducible() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();

    let first = generate_json(a.path(), "indigo");
    let second = generate_json(b.path(), "indigo");
    assert_eq!(first["questions"], second["questions"]);
    assert_eq!(first["questions"].as_array().unwrap().len(), 60);
}

#[test]
fn generate_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .args(["generate", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn generate_reports_exhausted_attempts() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .args(["generate", "--level", "bronze", "--max-attempts", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gave up on level 'bronze'"));
}

#[test]
fn check_scores_answers() {
    let dir = TempDir::new().unwrap();
    let sheet = generate_json(dir.path(), "pink");
    let questions = sheet["questions"].as_array().unwrap();

    // Answer the first question correctly and leave the rest blank.
    let first = &questions[0];
    let answer = match first["kind"].as_str().unwrap() {
        "multiple" => {
            first["multiplicand"].as_u64().unwrap() * first["multiplier"].as_u64().unwrap()
        }
        other => panic!("pink produced a {other} question"),
    };
    let answers_path = dir.path().join("answers.txt");
    std::fs::write(&answers_path, format!("  {answer} \n")).unwrap();

    rainbow(dir.path())
        .arg("check")
        .arg("--worksheet")
        .arg(dir.path().join("worksheet-pink.json"))
        .arg("--answers")
        .arg(&answers_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1 / 10 (10%)"));
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    generate_json(dir.path(), "red");
    let answers_path = dir.path().join("answers.txt");
    std::fs::write(&answers_path, "").unwrap();

    let output = rainbow(dir.path())
        .arg("check")
        .arg("--worksheet")
        .arg(dir.path().join("worksheet-red.json"))
        .arg("--answers")
        .arg(&answers_path)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let card: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(card["tally"], 0);
    assert_eq!(card["total"], 10);
}

#[test]
fn check_nonexistent_worksheet() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .args(["check", "--worksheet", "no_such.json", "--answers", "none.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn levels_lists_builtin_levels() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("pink"))
        .stdout(predicate::str::contains("yellow *"))
        .stdout(predicate::str::contains("#cd7f32"))
        .stdout(predicate::str::contains("multiple, square, inverse"));
}

#[test]
fn init_then_validate_and_generate() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created rainbow.toml"))
        .stdout(predicate::str::contains("Created levels.toml"));

    rainbow(dir.path())
        .args(["validate", "--levels", "levels.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 levels"))
        .stdout(predicate::str::contains("All levels valid"));

    rainbow(dir.path())
        .args(["generate", "--levels", "levels.toml", "--level", "Stretch"])
        .args(["--format", "text", "--output", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("worksheet-stretch.txt"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path()).arg("init").assert().success();

    rainbow(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_reports_over_capacity() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("levels.toml");
    std::fs::write(
        &path,
        r#"
[settings]
default = "tiny"

[[levels]]
key = "tiny"
tables = [2]
ceiling = 2
questions = 4
columns = 2
"#,
    )
    .unwrap();

    rainbow(dir.path())
        .args(["validate", "--levels", "levels.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR"))
        .stdout(predicate::str::contains("can only produce 3"));
}

#[test]
fn validate_reports_large_factors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("levels.toml"),
        r#"
[settings]
default = "huge"

[[levels]]
key = "huge"
tables = [3]
ceiling = 4000000000
questions = 10
"#,
    )
    .unwrap();

    rainbow(dir.path())
        .args(["validate", "--levels", "levels.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ceiling 4000000000 is above the limit of 1000"));

    rainbow(dir.path())
        .args(["generate", "--levels", "levels.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("above the limit"));
}

#[test]
fn config_default_level_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("rainbow.toml"),
        "default_level = \"orange\"\noutput_dir = \"from-config\"\n",
    )
    .unwrap();

    rainbow(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level: Orange (20 questions)"));

    assert!(dir.path().join("from-config/worksheet-orange.html").exists());
}

#[test]
fn env_level_override() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .env("RAINBOW_LEVEL", "Green")
        .args(["generate", "--output", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Level: Green"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Times-tables worksheet generator"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    rainbow(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rainbow"));
}
