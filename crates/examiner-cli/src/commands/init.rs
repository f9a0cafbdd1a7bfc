//! The `examiner init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("examiner.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("exams").context("failed to create exams/")?;
    write_if_missing(Path::new("exams/example.toml"), EXAMPLE_EXAM)?;

    println!("\nNext steps:");
    println!("  1. Edit examiner.toml to name your subject");
    println!("  2. Run: examiner validate --definition exams/example.toml");
    println!("  3. Run: examiner take --definition exams/example.toml");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examiner configuration

subject_id = 1
subject_name = "General Knowledge"

# Used when an exam definition has no time_minutes.
default_time_minutes = 60
"#;

const EXAMPLE_EXAM: &str = r#"[exam]
title = "Example Exam"
kind = "final"
time_minutes = 10

[subject]
id = 1
name = "Rust Programming"

[[questions]]
kind = "true_false"
header = "Q1"
body = "Rust has a garbage collector"
mark = 2
answer = false

[[questions]]
kind = "mcq"
header = "Q2"
body = "Which keyword declares a mutable binding?"
mark = 3
answers = ["let", "let mut", "var"]
right_answer = "2"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use examiner_core::parser::{parse_exam_definition_str, validate_exam};

    use crate::config::ExaminerConfig;

    #[test]
    fn example_exam_is_valid() {
        let def =
            parse_exam_definition_str(EXAMPLE_EXAM, &PathBuf::from("example.toml"), 60).unwrap();
        assert_eq!(def.exam.questions().len(), 2);
        assert!(validate_exam(&def.exam).is_empty());
    }

    #[test]
    fn sample_config_parses() {
        let config: ExaminerConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, ExaminerConfig::default());
    }
}
