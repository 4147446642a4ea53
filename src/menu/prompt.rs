//! Prompt helpers - line-oriented operator input with inline re-prompts.

use std::io::{self, BufRead, Write};

use crate::validate;

/// The operator-facing reader and writer behind every menu flow.
///
/// Menus only ever talk to a `Console`, so a scripted reader and a byte
/// buffer drive the whole tree in tests exactly like a terminal would.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub(crate) fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `label` without a newline and read one trimmed answer line.
    ///
    /// A closed input stream is an error: the menu loops re-prompt
    /// indefinitely and would otherwise spin forever on a dead pipe.
    pub(crate) fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, reporting `error` inline on
    /// every rejection.
    pub(crate) fn ask_until<T>(
        &mut self,
        label: &str,
        error: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => self.say(error)?,
            }
        }
    }

    /// Ask for an optional replacement value: blank keeps the current one,
    /// anything else must pass `parse` and re-prompts until it does.
    pub(crate) fn ask_optional_until<T>(
        &mut self,
        label: &str,
        error: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let answer = self.ask(label)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => self.say(error)?,
            }
        }
    }

    /// A required free-text field, stored upper-cased.
    pub(crate) fn ask_text(&mut self, label: &str) -> io::Result<String> {
        self.ask_until(label, "Field cannot be empty.", |answer| {
            let value = validate::normalize_text(answer);
            (!value.is_empty()).then_some(value)
        })
    }

    /// An optional free-text replacement, upper-cased when present.
    pub(crate) fn ask_optional_text(&mut self, label: &str) -> io::Result<Option<String>> {
        let answer = self.ask(label)?;
        Ok((!answer.is_empty()).then(|| validate::normalize_text(&answer)))
    }

    /// A required whole number.
    pub(crate) fn ask_u32(&mut self, label: &str) -> io::Result<u32> {
        self.ask_until(label, "Invalid number.", |answer| answer.parse().ok())
    }

    /// A required non-negative amount.
    pub(crate) fn ask_price(&mut self, label: &str) -> io::Result<f64> {
        self.ask_until(label, "Invalid amount.", |answer| {
            answer.parse::<f64>().ok().filter(|value| *value >= 0.0)
        })
    }
}
