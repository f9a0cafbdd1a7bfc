//! Exams and the grading loop.
//!
//! An [`Exam`] moves through three states: it starts `Empty`, becomes
//! `Populated` as questions are added, and ends `Taken` once
//! [`Exam::take`] has run. Taking is one-shot; a second call is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExamError;
use crate::model::Question;
use crate::traits::{InputProvider, OutputSink};

/// The kinds of exam, which differ only in how results are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamKind {
    Final,
    Practical,
}

impl ExamKind {
    /// Map the driver's menu number (1 = final, 2 = practical).
    pub fn from_menu(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(ExamKind::Final),
            2 => Some(ExamKind::Practical),
            _ => None,
        }
    }

    /// Heading printed above the results transcript.
    pub fn results_heading(&self) -> &'static str {
        match self {
            ExamKind::Final => "Final Exam Results:",
            ExamKind::Practical => "Practical Exam Results:",
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamKind::Final => write!(f, "final"),
            ExamKind::Practical => write!(f, "practical"),
        }
    }
}

impl FromStr for ExamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "final" => Ok(ExamKind::Final),
            "practical" => Ok(ExamKind::Practical),
            other => Err(format!("unknown exam kind: {other}")),
        }
    }
}

/// Where an exam is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamState {
    Empty,
    Populated,
    Taken,
}

/// Marks earned against marks available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub earned: u64,
    pub possible: u64,
}

impl Grade {
    /// Fold one question into the running grade.
    pub fn with_question(self, question: &Question) -> Self {
        Self {
            earned: self.earned + u64::from(question.earned()),
            possible: self.possible + u64::from(question.mark),
        }
    }

    /// Returns `true` if every mark was earned (vacuously true for 0/0).
    pub fn is_full_marks(&self) -> bool {
        self.earned == self.possible
    }

    /// Earned marks as a fraction of possible marks; 0.0 when nothing was
    /// possible.
    pub fn ratio(&self) -> f64 {
        if self.possible == 0 {
            0.0
        } else {
            self.earned as f64 / self.possible as f64
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.earned, self.possible)
    }
}

/// A timed, ordered set of questions.
#[derive(Debug, Clone)]
pub struct Exam {
    kind: ExamKind,
    /// Advisory only; never checked against a clock.
    time_minutes: u32,
    /// Advisory target length; the actual number of questions may differ.
    declared_count: u32,
    questions: Vec<Question>,
    state: ExamState,
}

impl Exam {
    pub fn new(kind: ExamKind, time_minutes: u32, declared_count: u32) -> Self {
        Self {
            kind,
            time_minutes,
            declared_count,
            questions: Vec::new(),
            state: ExamState::Empty,
        }
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    pub fn time_minutes(&self) -> u32 {
        self.time_minutes
    }

    pub fn declared_count(&self) -> u32 {
        self.declared_count
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> ExamState {
        self.state
    }

    /// Append a question. Any number may be added, regardless of the
    /// declared count.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
        if self.state == ExamState::Empty {
            self.state = ExamState::Populated;
        }
    }

    /// Sum of all question marks.
    pub fn possible_marks(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.mark)).sum()
    }

    /// Grade the answers captured so far.
    pub fn grade(&self) -> Grade {
        self.questions.iter().fold(Grade::default(), Grade::with_question)
    }

    /// Take the exam: show each question in order, capture an answer for
    /// it, then print the results transcript and the final grade.
    pub fn take(
        &mut self,
        input: &mut dyn InputProvider,
        out: &mut dyn OutputSink,
    ) -> Result<Grade, ExamError> {
        if self.state == ExamState::Taken {
            return Err(ExamError::AlreadyTaken);
        }

        tracing::info!(
            kind = %self.kind,
            questions = self.questions.len(),
            time_minutes = self.time_minutes,
            "starting exam"
        );
        out.write_line(&format!(
            "Starting the exam... You have {} minutes.",
            self.time_minutes
        ));

        for (index, question) in self.questions.iter_mut().enumerate() {
            question.display(out);
            question.capture_user_answer(input, out)?;
            tracing::debug!(
                question = index + 1,
                correct = question.is_correct(),
                earned = question.earned(),
                mark = question.mark,
                "graded question"
            );
        }
        self.state = ExamState::Taken;

        let grade = self.grade();
        out.write_line("Exam finished. Here are your answers:");
        self.show_results(out);
        out.write_line(&format!("Your exam grade is {grade}"));

        tracing::info!(
            earned = grade.earned,
            possible = grade.possible,
            full_marks = grade.is_full_marks(),
            ratio = grade.ratio(),
            "exam finished"
        );
        Ok(grade)
    }

    /// Print the results transcript in the style of this exam's kind.
    ///
    /// Final exams show the right answer for each question. Practical exams
    /// list every offered answer under "Correct answers:", whichever one is
    /// actually right.
    pub fn show_results(&self, out: &mut dyn OutputSink) {
        out.write_line(self.kind.results_heading());
        for question in &self.questions {
            out.write_line(&format!("{}: {}", question.header, question.body));
            out.write_line(&format!(
                "Your answer: {}",
                question.user_answer().unwrap_or_default()
            ));
            match self.kind {
                ExamKind::Final => {
                    out.write_line(&format!("Right answer: {}", question.right_answer()));
                }
                ExamKind::Practical => {
                    out.write_line("Correct answers:");
                    for answer in question.answers() {
                        out.write_line(&answer.to_string());
                    }
                }
            }
        }
    }
}
