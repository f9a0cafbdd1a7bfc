//! TOML exam definition parser.
//!
//! Loads pre-authored exams from TOML files and directories, and validates
//! them against the invariants the grading loop silently relies on.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::exam::{Exam, ExamKind};
use crate::model::{Question, QuestionKind, FALSE_ANSWER, TRUE_ANSWER};

/// A parsed exam definition file.
#[derive(Debug, Clone)]
pub struct ExamDefinition {
    /// Title shown by `validate`; defaults to the file stem.
    pub title: String,
    /// Subject the file asks the exam to be filed under, if any.
    pub subject: Option<SubjectHeader>,
    pub exam: Exam,
}

/// The optional `[subject]` table of a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubjectHeader {
    pub id: u32,
    pub name: String,
}

/// Intermediate TOML structure for parsing definition files.
#[derive(Debug, Deserialize)]
struct TomlExamFile {
    exam: TomlExamHeader,
    #[serde(default)]
    subject: Option<SubjectHeader>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlExamHeader {
    #[serde(default)]
    title: Option<String>,
    kind: String,
    #[serde(default)]
    time_minutes: Option<u32>,
    #[serde(default)]
    question_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    kind: String,
    header: String,
    #[serde(default)]
    body: String,
    mark: u32,
    /// True/false questions only.
    #[serde(default)]
    answer: Option<bool>,
    /// MCQ only.
    #[serde(default)]
    answers: Vec<String>,
    /// MCQ only; the number of the right answer.
    #[serde(default)]
    right_answer: Option<TomlRightAnswer>,
}

/// MCQ right answers may be written as `2` or `"2"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlRightAnswer {
    Number(i64),
    Text(String),
}

impl TomlRightAnswer {
    fn into_string(self) -> String {
        match self {
            TomlRightAnswer::Number(n) => n.to_string(),
            TomlRightAnswer::Text(s) => s,
        }
    }
}

/// Parse a single TOML file into an `ExamDefinition`.
pub fn parse_exam_definition(path: &Path, default_time_minutes: u32) -> Result<ExamDefinition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exam definition: {}", path.display()))?;

    parse_exam_definition_str(&content, path, default_time_minutes)
}

/// Parse a TOML string into an `ExamDefinition` (useful for testing).
pub fn parse_exam_definition_str(
    content: &str,
    source_path: &Path,
    default_time_minutes: u32,
) -> Result<ExamDefinition> {
    let parsed: TomlExamFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let kind: ExamKind = parsed
        .exam
        .kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| {
            build_question(q).with_context(|| format!("invalid question {}", index + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let declared_count = parsed
        .exam
        .question_count
        .unwrap_or(questions.len() as u32);
    let mut exam = Exam::new(
        kind,
        parsed.exam.time_minutes.unwrap_or(default_time_minutes),
        declared_count,
    );
    for question in questions {
        exam.add_question(question);
    }

    let title = parsed.exam.title.unwrap_or_else(|| {
        source_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    Ok(ExamDefinition {
        title,
        subject: parsed.subject,
        exam,
    })
}

fn build_question(q: TomlQuestion) -> Result<Question> {
    let kind: QuestionKind = q.kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;

    match kind {
        QuestionKind::TrueFalse => {
            let answer = q
                .answer
                .with_context(|| format!("true/false question '{}' has no `answer`", q.header))?;
            if !q.answers.is_empty() {
                tracing::warn!("ignoring `answers` on true/false question '{}'", q.header);
            }
            Ok(Question::true_false(q.header, q.body, q.mark, answer))
        }
        QuestionKind::Mcq => {
            let right_answer = q
                .right_answer
                .map(TomlRightAnswer::into_string)
                .unwrap_or_default();
            Ok(Question::mcq(q.header, q.body, q.mark, q.answers, right_answer))
        }
    }
}

/// Recursively load all `.toml` exam definitions from a directory.
pub fn load_definition_directory(
    dir: &Path,
    default_time_minutes: u32,
) -> Result<Vec<ExamDefinition>> {
    let mut definitions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            definitions.extend(load_definition_directory(&path, default_time_minutes)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_exam_definition(&path, default_time_minutes) {
                Ok(definition) => definitions.push(definition),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(definitions)
}

/// A warning from exam validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate an exam for data the grader accepts but can never score as
/// intended.
pub fn validate_exam(exam: &Exam) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let actual = exam.questions().len();

    if actual == 0 {
        warnings.push(ValidationWarning {
            question: None,
            message: "exam has no questions".into(),
        });
    }

    if exam.declared_count() as usize != actual {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "exam declares {} questions but has {actual}",
                exam.declared_count()
            ),
        });
    }

    for (index, question) in exam.questions().iter().enumerate() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: Some(index + 1),
                message,
            })
        };

        if question.mark == 0 {
            warn("question is worth 0 marks".into());
        }

        if question.right_answer().is_empty() {
            warn("right answer is empty".into());
            continue;
        }

        match question.kind() {
            QuestionKind::TrueFalse => {
                let right = question.right_answer();
                if right != TRUE_ANSWER && right != FALSE_ANSWER {
                    warn(format!(
                        "true/false right answer must be \"{TRUE_ANSWER}\" or \"{FALSE_ANSWER}\", got {right:?}"
                    ));
                }
            }
            QuestionKind::Mcq => {
                let answers = question.answers();
                if answers.is_empty() {
                    warn("multiple-choice question has no answers".into());
                    continue;
                }

                let matches_id = answers
                    .iter()
                    .any(|a| a.id().to_string() == question.right_answer());
                if !matches_id {
                    warn(format!(
                        "right answer {:?} does not match any answer id",
                        question.right_answer()
                    ));
                }

                let contiguous = answers
                    .iter()
                    .enumerate()
                    .all(|(position, a)| a.id() as usize == position + 1);
                if !contiguous {
                    warn("answer ids do not match their displayed numbers".into());
                }
            }
        }
    }

    warnings
}
