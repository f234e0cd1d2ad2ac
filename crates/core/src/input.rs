//! Validated line input.
//!
//! Interactive construction (e.g. prompting for a product name) is written
//! against [`LineSource`] so tests can feed a fixed sequence of lines instead
//! of a real console.

use std::io::{self, BufRead, Write};

use crate::error::{DomainError, DomainResult};

/// A source of raw input lines.
pub trait LineSource {
    /// Show `prompt` and return the next raw line without its line terminator.
    ///
    /// Returns `None` once the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        (**self).read_line(prompt)
    }
}

/// [`LineSource`] over any buffered reader, echoing prompts to a writer.
#[derive(Debug)]
pub struct PromptReader<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl PromptReader<io::StdinLock<'static>, io::Stdout> {
    /// Bind to the process console.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for PromptReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = writeln!(self.writer, "{prompt}").and_then(|_| self.writer.flush()) {
            tracing::warn!(error = %e, "failed to write prompt");
        }

        // An undecodable line is still a line, not end of input.
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&bytes);
                Some(line.trim_end_matches(['\n', '\r']).to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input line");
                None
            }
        }
    }
}

/// Prompt repeatedly until `accept` turns a line into a value.
///
/// Rejected lines are silently re-prompted. If the source runs dry first,
/// fails with [`DomainError::InputExhausted`].
pub fn prompt_until<S, T, F>(source: &mut S, prompt: &str, mut accept: F) -> DomainResult<T>
where
    S: LineSource + ?Sized,
    F: FnMut(&str) -> Option<T>,
{
    while let Some(raw) = source.read_line(prompt) {
        if let Some(value) = accept(&raw) {
            return Ok(value);
        }
        tracing::debug!(prompt, input = %raw, "rejected input, prompting again");
    }
    Err(DomainError::input_exhausted(prompt))
}
