//! Exam error types.
//!
//! Grading itself never fails; these errors come from the collaborators the
//! grading loop reads from, and from the re-take guard on `Exam::take`.

use thiserror::Error;

/// Errors that can occur while an exam is being taken.
#[derive(Debug, Error)]
pub enum ExamError {
    /// `take` was called on an exam that has already been taken.
    #[error("exam has already been taken")]
    AlreadyTaken,

    /// The input provider has no more lines to give.
    #[error("input closed before the exam was finished")]
    InputClosed,

    /// A line that should have been a whole number was not.
    #[error("not a whole number: {0:?}")]
    InvalidNumber(String),

    /// An I/O error from a console collaborator.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExamError {
    /// Returns `true` if the session cannot continue after this error.
    ///
    /// Only a malformed number is recoverable, by asking again.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ExamError::InvalidNumber(_))
    }
}
