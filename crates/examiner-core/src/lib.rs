//! examiner-core — Question/exam model, grading, and result rendering.
//!
//! This crate defines the exam data model, the collaborator traits the
//! grading loop talks through, and the TOML exam-definition parser that
//! the examiner CLI builds on.

pub mod error;
pub mod exam;
pub mod mock;
pub mod model;
pub mod parser;
pub mod subject;
pub mod traits;

pub use error::ExamError;
pub use exam::{Exam, ExamKind, ExamState, Grade};
pub use model::{Answer, Question, QuestionKind};
pub use subject::Subject;
pub use traits::{InputProvider, OutputSink};
