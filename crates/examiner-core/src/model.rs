//! Core data model types for examiner.
//!
//! A [`Question`] is either true/false or multiple choice. Both kinds share
//! one struct and differ only in how they are displayed, so the kind is a
//! plain discriminant rather than a trait object.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExamError;
use crate::traits::{InputProvider, OutputSink};

/// Right answer stored for a true/false question answered "true".
pub const TRUE_ANSWER: &str = "True";
/// Right answer stored for a true/false question answered "false".
pub const FALSE_ANSWER: &str = "False";

/// One choice offered by a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    id: u32,
    text: String,
}

impl Answer {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Answer ID: {}, Text: {}", self.id, self.text)
    }
}

/// The kinds of question an exam can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    TrueFalse,
    Mcq,
}

impl QuestionKind {
    /// Map the driver's menu number (1 = true/false, 2 = MCQ).
    pub fn from_menu(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(QuestionKind::TrueFalse),
            2 => Some(QuestionKind::Mcq),
            _ => None,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::TrueFalse => write!(f, "true_false"),
            QuestionKind::Mcq => write!(f, "mcq"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "true_false" | "truefalse" | "tf" => Ok(QuestionKind::TrueFalse),
            "mcq" | "multiple_choice" => Ok(QuestionKind::Mcq),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// A single exam question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub header: String,
    pub body: String,
    pub mark: u32,
    kind: QuestionKind,
    answers: Vec<Answer>,
    right_answer: String,
    user_answer: Option<String>,
}

impl Question {
    /// Create a question with no answers and no right answer yet.
    pub fn new(
        kind: QuestionKind,
        header: impl Into<String>,
        body: impl Into<String>,
        mark: u32,
    ) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            mark,
            kind,
            answers: Vec::new(),
            right_answer: String::new(),
            user_answer: None,
        }
    }

    /// A true/false question whose right answer is "True" or "False".
    pub fn true_false(
        header: impl Into<String>,
        body: impl Into<String>,
        mark: u32,
        answer: bool,
    ) -> Self {
        let mut question = Self::new(QuestionKind::TrueFalse, header, body, mark);
        question.set_right_answer(if answer { TRUE_ANSWER } else { FALSE_ANSWER });
        question
    }

    /// A multiple-choice question. Answer ids are assigned 1..=n in order.
    pub fn mcq<I, S>(
        header: impl Into<String>,
        body: impl Into<String>,
        mark: u32,
        choices: I,
        right_answer: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut question = Self::new(QuestionKind::Mcq, header, body, mark);
        for (index, text) in choices.into_iter().enumerate() {
            question.add_answer(Answer::new(index as u32 + 1, text));
        }
        question.set_right_answer(right_answer);
        question
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Append a choice. Ignored for true/false questions, which have none.
    pub fn add_answer(&mut self, answer: Answer) {
        if self.kind == QuestionKind::Mcq {
            self.answers.push(answer);
        } else {
            tracing::debug!("ignoring answer for true/false question '{}'", self.header);
        }
    }

    pub fn right_answer(&self) -> &str {
        &self.right_answer
    }

    pub fn set_right_answer(&mut self, right_answer: impl Into<String>) {
        self.right_answer = right_answer.into();
    }

    /// The answer captured while the exam was taken, if any.
    pub fn user_answer(&self) -> Option<&str> {
        self.user_answer.as_deref()
    }

    pub fn set_user_answer(&mut self, user_answer: impl Into<String>) {
        self.user_answer = Some(user_answer.into());
    }

    /// Exact, case-sensitive comparison of the captured answer with the
    /// right answer. An unanswered question is never correct.
    pub fn is_correct(&self) -> bool {
        self.user_answer.as_deref() == Some(self.right_answer.as_str())
    }

    /// Marks earned by the captured answer: all or nothing.
    pub fn earned(&self) -> u32 {
        if self.is_correct() {
            self.mark
        } else {
            0
        }
    }

    /// Show the question to the user.
    ///
    /// Multiple-choice answers are numbered by list position, not by their
    /// stored id.
    pub fn display(&self, out: &mut dyn OutputSink) {
        match self.kind {
            QuestionKind::TrueFalse => {
                out.write_line(&format!("{}: {} (True/False)", self.header, self.body));
            }
            QuestionKind::Mcq => {
                out.write_line(&format!("{}: {}", self.header, self.body));
                for (position, answer) in self.answers.iter().enumerate() {
                    out.write_line(&format!("{}. {}", position + 1, answer.text));
                }
            }
        }
    }

    /// Prompt for and store the user's answer, unvalidated.
    pub fn capture_user_answer(
        &mut self,
        input: &mut dyn InputProvider,
        out: &mut dyn OutputSink,
    ) -> Result<(), ExamError> {
        out.write("Your answer: ");
        let answer = input.read_line()?;
        self.user_answer = Some(answer);
        Ok(())
    }

    /// Order by mark, ascending.
    pub fn cmp_by_mark(&self, other: &Question) -> Ordering {
        self.mark.cmp(&other.mark)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Header: {}, Body: {}, Mark: {}",
            self.header, self.body, self.mark
        )
    }
}

/// Stable sort by mark, ascending. Equal marks keep their insertion order.
pub fn sort_by_mark(questions: &mut [Question]) {
    questions.sort_by(Question::cmp_by_mark);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingSink, ScriptedInput};

    fn colours() -> Question {
        Question::mcq("Q1", "Pick blue", 4, ["Red", "Blue"], "2")
    }

    #[test]
    fn answer_display() {
        assert_eq!(Answer::new(3, "Paris").to_string(), "Answer ID: 3, Text: Paris");
    }

    #[test]
    fn question_kind_display_and_parse() {
        assert_eq!(QuestionKind::TrueFalse.to_string(), "true_false");
        assert_eq!("MCQ".parse::<QuestionKind>().unwrap(), QuestionKind::Mcq);
        assert_eq!("tf".parse::<QuestionKind>().unwrap(), QuestionKind::TrueFalse);
        assert!("essay".parse::<QuestionKind>().is_err());
        assert_eq!(QuestionKind::from_menu(2), Some(QuestionKind::Mcq));
        assert_eq!(QuestionKind::from_menu(3), None);
    }

    #[test]
    fn true_false_right_answer() {
        assert_eq!(Question::true_false("H", "B", 1, true).right_answer(), "True");
        assert_eq!(Question::true_false("H", "B", 1, false).right_answer(), "False");
    }

    #[test]
    fn true_false_has_no_answers() {
        let mut question = Question::true_false("H", "B", 1, true);
        question.add_answer(Answer::new(1, "ignored"));
        assert!(question.answers().is_empty());
    }

    #[test]
    fn mcq_assigns_sequential_ids() {
        let question = colours();
        let ids: Vec<u32> = question.answers().iter().map(Answer::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(question.answers()[1].text(), "Blue");
    }

    #[test]
    fn true_false_display() {
        let mut sink = RecordingSink::new();
        Question::true_false("Q1", "The sky is blue", 5, true).display(&mut sink);
        assert_eq!(sink.lines(), ["Q1: The sky is blue (True/False)"]);
    }

    #[test]
    fn mcq_display_numbers_by_position() {
        let mut question = Question::new(QuestionKind::Mcq, "Q2", "Pick one", 2);
        question.add_answer(Answer::new(10, "Ten"));
        question.add_answer(Answer::new(20, "Twenty"));

        let mut sink = RecordingSink::new();
        question.display(&mut sink);
        assert_eq!(sink.lines(), ["Q2: Pick one", "1. Ten", "2. Twenty"]);
    }

    #[test]
    fn capture_stores_raw_input() {
        let mut question = colours();
        let mut input = ScriptedInput::new(["  2 "]);
        let mut sink = RecordingSink::new();
        question.capture_user_answer(&mut input, &mut sink).unwrap();

        assert_eq!(sink.lines(), ["Your answer: "]);
        assert_eq!(question.user_answer(), Some("  2 "));
        assert!(!question.is_correct());
    }

    #[test]
    fn capture_propagates_closed_input() {
        let mut question = colours();
        let mut input = ScriptedInput::default();
        let err = question
            .capture_user_answer(&mut input, &mut RecordingSink::new())
            .unwrap_err();
        assert!(matches!(err, ExamError::InputClosed));
        assert_eq!(question.user_answer(), None);
    }

    #[test]
    fn true_false_scoring() {
        let mut right = Question::true_false("Q", "B", 5, true);
        right.set_user_answer("True");
        assert_eq!(right.earned(), 5);

        let mut wrong = Question::true_false("Q", "B", 5, true);
        wrong.set_user_answer("False");
        assert_eq!(wrong.earned(), 0);

        let mut lowercase = Question::true_false("Q", "B", 5, true);
        lowercase.set_user_answer("true");
        assert_eq!(lowercase.earned(), 0);
    }

    #[test]
    fn mcq_scoring() {
        let mut question = colours();
        question.set_user_answer("2");
        assert_eq!(question.earned(), 4);
        question.set_user_answer("1");
        assert_eq!(question.earned(), 0);
    }

    #[test]
    fn unanswered_is_not_correct() {
        let question = Question::new(QuestionKind::Mcq, "H", "B", 1);
        assert!(!question.is_correct());
        assert_eq!(question.earned(), 0);
    }

    #[test]
    fn clone_is_independent() {
        let original = colours();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_user_answer("1");
        copy.add_answer(Answer::new(3, "Green"));
        assert_eq!(original.user_answer(), None);
        assert_eq!(original.answers().len(), 2);
        assert_ne!(copy, original);
    }

    #[test]
    fn sort_by_mark_ascending_and_stable() {
        let mut questions = vec![
            Question::true_false("a", "", 3, true),
            Question::true_false("b", "", 1, true),
            Question::true_false("c", "", 2, true),
            Question::true_false("d", "", 1, false),
        ];
        sort_by_mark(&mut questions);
        let order: Vec<&str> = questions.iter().map(|q| q.header.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn question_display() {
        let question = Question::true_false("Q1", "Water is wet", 2, true);
        assert_eq!(question.to_string(), "Header: Q1, Body: Water is wet, Mark: 2");
    }
}
