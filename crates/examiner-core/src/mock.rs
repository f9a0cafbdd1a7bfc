//! In-memory collaborators for tests and scripted sessions.

use std::collections::VecDeque;

use crate::error::ExamError;
use crate::traits::{InputProvider, OutputSink};

/// An input provider that replays a fixed list of lines.
///
/// Once the lines run out every read returns [`ExamError::InputClosed`].
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    reads: usize,
}

impl ScriptedInput {
    /// Create a provider that will return `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Number of lines handed out so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self) -> Result<String, ExamError> {
        let line = self.lines.pop_front().ok_or(ExamError::InputClosed)?;
        self.reads += 1;
        Ok(line)
    }
}

/// An output sink that records everything written to it.
///
/// Prompt text written with [`OutputSink::write`] is recorded as its own
/// entry, so a transcript reads the same whether or not input was echoed.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written, in write order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole transcript joined with newlines.
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    /// Returns `true` if any entry equals `line` exactly.
    pub fn contains_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Index of the first entry equal to `line`.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines.iter().position(|l| l == line)
    }
}

impl OutputSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn write(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
