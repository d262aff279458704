//! Line-oriented prompt handling for the CLI client.
//!
//! The rest of the application talks to a [`Prompter`] and never touches
//! stdin/stdout directly, so whole sessions can be driven from in-memory
//! buffers.

use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads one-line answers from `input`.
pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Print `question` (without newline) and read one answer.
    ///
    /// Returns `None` once input is exhausted. The trailing line terminator
    /// is stripped; everything else is kept verbatim.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_owned()))
    }

    /// Print one full line.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }
}
