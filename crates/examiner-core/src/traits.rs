//! Collaborator traits for the grading loop.
//!
//! The core never touches a terminal directly. It reads answers through an
//! [`InputProvider`] and writes everything it shows through an
//! [`OutputSink`]; the CLI supplies console implementations and tests use
//! the in-memory ones from [`crate::mock`].

use crate::error::ExamError;

/// Source of user input, one line at a time.
pub trait InputProvider {
    /// Read one line, without its trailing line terminator.
    ///
    /// Blocks until a line is available. Returns [`ExamError::InputClosed`]
    /// when there is nothing left to read.
    fn read_line(&mut self) -> Result<String, ExamError>;

    /// Read one line and parse it as a whole number.
    fn read_integer(&mut self) -> Result<i64, ExamError> {
        let line = self.read_line()?;
        parse_integer(&line)
    }
}

/// Destination for everything the core displays.
///
/// Writes are fire-and-forget and appear in call order.
pub trait OutputSink {
    /// Write a full line.
    fn write_line(&mut self, line: &str);

    /// Write text without ending the line (used for prompts).
    fn write(&mut self, text: &str);
}

/// Parse a whole number, ignoring surrounding whitespace.
pub fn parse_integer(line: &str) -> Result<i64, ExamError> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| ExamError::InvalidNumber(line.to_string()))
}
