//! The interactive session driver.
//!
//! Walks the user through defining an exam (type, time, questions), files
//! it under a subject, and then has them take it. Malformed numbers are
//! handled here by asking again; the core only ever sees valid values.

use anyhow::{Context, Result};

use examiner_core::error::ExamError;
use examiner_core::exam::{Exam, ExamKind, Grade};
use examiner_core::model::{Answer, Question, QuestionKind};
use examiner_core::subject::Subject;
use examiner_core::traits::{InputProvider, OutputSink};

const NOT_A_NUMBER: &str = "Please enter a whole number.";
const NEGATIVE: &str = "Please enter a number that is zero or more.";
const NOT_A_CHOICE: &str = "Please choose 1 or 2.";

/// Interactively define an exam.
pub fn build_exam(
    input: &mut dyn InputProvider,
    out: &mut dyn OutputSink,
) -> Result<Exam, ExamError> {
    out.write_line("Choose the exam type:");
    out.write_line("1. Final Exam");
    out.write_line("2. Practical Exam");
    let kind = prompt_choice(input, out, None, ExamKind::from_menu)?;

    let time = prompt_count(input, out, "Enter the exam time (in minutes): ")?;
    let count = prompt_count(
        input,
        out,
        "Please enter the number of questions you wanted to create: ",
    )?;

    let mut exam = Exam::new(kind, time, count);
    for number in 1..=count {
        out.write_line(&format!("Enter details for Question {number}:"));
        exam.add_question(build_question(input, out)?);
    }

    tracing::debug!(kind = %kind, time, count, "exam defined");
    Ok(exam)
}

fn build_question(
    input: &mut dyn InputProvider,
    out: &mut dyn OutputSink,
) -> Result<Question, ExamError> {
    out.write_line("Choose the question type:");
    out.write_line("1. True/False");
    out.write_line("2. MCQ");
    let kind = prompt_choice(input, out, None, QuestionKind::from_menu)?;

    let header = prompt_line(input, out, "Header: ")?;
    let body = prompt_line(input, out, "Body: ")?;
    let mark = prompt_count(input, out, "Mark: ")?;

    let question = match kind {
        QuestionKind::TrueFalse => {
            let answer = prompt_choice(
                input,
                out,
                Some("Right answer (1 for True, 2 for False): "),
                |choice| match choice {
                    1 => Some(true),
                    2 => Some(false),
                    _ => None,
                },
            )?;
            Question::true_false(header, body, mark, answer)
        }
        QuestionKind::Mcq => {
            let mut question = Question::new(QuestionKind::Mcq, header, body, mark);
            let answers = prompt_count(input, out, "Enter the number of answers: ")?;
            for id in 1..=answers {
                let text = prompt_line(input, out, &format!("Answer {id} Text: "))?;
                question.add_answer(Answer::new(id, text));
            }
            let right = prompt_line(input, out, "Right answer (enter the answer number): ")?;
            question.set_right_answer(right);
            question
        }
    };

    Ok(question)
}

/// File the exam under `subject` and take it.
pub fn run(
    subject: &mut Subject,
    input: &mut dyn InputProvider,
    out: &mut dyn OutputSink,
) -> Result<Grade> {
    out.write_line(&subject.to_string());
    let exam = subject
        .exam_mut()
        .context("subject has no exam to take")?;
    let grade = exam.take(input, out)?;
    Ok(grade)
}

fn prompt_line(
    input: &mut dyn InputProvider,
    out: &mut dyn OutputSink,
    prompt: &str,
) -> Result<String, ExamError> {
    out.write(prompt);
    input.read_line()
}

/// Ask until the answer is a whole number that is zero or more.
fn prompt_count(
    input: &mut dyn InputProvider,
    out: &mut dyn OutputSink,
    prompt: &str,
) -> Result<u32, ExamError> {
    loop {
        out.write(prompt);
        match input.read_integer() {
            Ok(n) => match u32::try_from(n) {
                Ok(n) => return Ok(n),
                Err(_) => out.write_line(NEGATIVE),
            },
            Err(e) if !e.is_fatal() => out.write_line(NOT_A_NUMBER),
            Err(e) => return Err(e),
        }
    }
}

/// Ask until `pick` accepts the menu number typed.
fn prompt_choice<T>(
    input: &mut dyn InputProvider,
    out: &mut dyn OutputSink,
    prompt: Option<&str>,
    pick: impl Fn(i64) -> Option<T>,
) -> Result<T, ExamError> {
    loop {
        if let Some(prompt) = prompt {
            out.write(prompt);
        }
        match input.read_integer() {
            Ok(n) => match pick(n) {
                Some(choice) => return Ok(choice),
                None => out.write_line(NOT_A_CHOICE),
            },
            Err(e) if !e.is_fatal() => out.write_line(NOT_A_NUMBER),
            Err(e) => return Err(e),
        }
    }
}
