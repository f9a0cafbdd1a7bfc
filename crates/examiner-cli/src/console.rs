//! Console implementations of the core's input and output traits.

use std::io::{BufRead, Write};

use examiner_core::error::ExamError;
use examiner_core::traits::{InputProvider, OutputSink};

/// Reads lines from any buffered reader (stdin in the binary).
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for ConsoleInput<R> {
    /// Strips the line terminator and nothing else. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<String, ExamError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ExamError::InputClosed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Writes to any writer (stdout in the binary).
///
/// Write failures are logged and otherwise ignored.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            tracing::warn!("failed to write output: {e}");
        }
    }

    fn write(&mut self, text: &str) {
        let result = write!(self.writer, "{text}").and_then(|()| self.writer.flush());
        if let Err(e) = result {
            tracing::warn!("failed to write output: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_strips_only_the_terminator() {
        let mut input = ConsoleInput::new(" True \r\nsecond\nlast".as_bytes());
        assert_eq!(input.read_line().unwrap(), " True ");
        assert_eq!(input.read_line().unwrap(), "second");
        assert_eq!(input.read_line().unwrap(), "last");
        assert!(matches!(input.read_line(), Err(ExamError::InputClosed)));
    }

    #[test]
    fn read_line_keeps_going_after_invalid_utf8() {
        let mut input = ConsoleInput::new(&b"caf\xe9\r\nnext\n"[..]);
        assert_eq!(input.read_line().unwrap(), "caf\u{FFFD}");
        assert_eq!(input.read_line().unwrap(), "next");
    }

    #[test]
    fn read_integer_parses_a_line() {
        let mut input = ConsoleInput::new("12\nabc\n".as_bytes());
        assert_eq!(input.read_integer().unwrap(), 12);
        assert!(matches!(
            input.read_integer(),
            Err(ExamError::InvalidNumber(_))
        ));
    }

    #[test]
    fn output_writes_prompts_inline() {
        let mut buf = Vec::new();
        {
            let mut out = ConsoleOutput::new(&mut buf);
            out.write_line("Q1: Body");
            out.write("Your answer: ");
            out.write_line("next");
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "Q1: Body\nYour answer: next\n");
    }
}
