//! The `examiner validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use examiner_core::parser::{
    load_definition_directory, parse_exam_definition, validate_exam, ExamDefinition,
    ValidationWarning,
};

use crate::config::load_config_from;

#[derive(Serialize)]
struct DefinitionSummary<'a> {
    title: &'a str,
    kind: String,
    time_minutes: u32,
    declared_count: u32,
    question_count: usize,
    possible_marks: u64,
    warnings: Vec<ValidationWarning>,
}

pub fn execute(definition_path: PathBuf, format: String, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;

    let definitions = if definition_path.is_dir() {
        load_definition_directory(&definition_path, config.default_time_minutes)?
    } else {
        vec![parse_exam_definition(
            &definition_path,
            config.default_time_minutes,
        )?]
    };

    match format.as_str() {
        "json" => print_json(&definitions),
        _ => {
            print_text(&definitions);
            Ok(())
        }
    }
}

fn summarize(def: &ExamDefinition) -> DefinitionSummary<'_> {
    let exam = &def.exam;
    DefinitionSummary {
        title: &def.title,
        kind: exam.kind().to_string(),
        time_minutes: exam.time_minutes(),
        declared_count: exam.declared_count(),
        question_count: exam.questions().len(),
        possible_marks: exam.possible_marks(),
        warnings: validate_exam(exam),
    }
}

fn print_json(definitions: &[ExamDefinition]) -> Result<()> {
    let summaries: Vec<DefinitionSummary<'_>> = definitions.iter().map(summarize).collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

fn print_text(definitions: &[ExamDefinition]) {
    let mut total_warnings = 0;

    for def in definitions {
        let summary = summarize(def);
        println!(
            "Exam: {} ({} exam, {} questions, {} marks, {} minutes)",
            summary.title,
            summary.kind,
            summary.question_count,
            summary.possible_marks,
            summary.time_minutes
        );

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["#", "Kind", "Header", "Mark", "Answers", "Right answer"]);
        for (index, question) in def.exam.questions().iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                question.kind().to_string(),
                question.header.clone(),
                question.mark.to_string(),
                question.answers().len().to_string(),
                question.right_answer().to_string(),
            ]);
        }
        if !def.exam.questions().is_empty() {
            println!("{table}");
        }

        for w in &summary.warnings {
            let prefix = w
                .question
                .map(|n| format!("  [Q{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += summary.warnings.len();
    }

    if total_warnings == 0 {
        println!("All exam definitions valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }
}
