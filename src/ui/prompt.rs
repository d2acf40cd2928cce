//! Interactive variable prompt

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use super::theme::DEFAULT_THEME;
use crate::interpreter::variables::VariableResolver;

/// Asks the user for variable values on a line-oriented terminal
///
/// Generic over its streams so the prompt can be driven from memory in tests.
pub struct PromptResolver<I, O> {
    input: I,
    output: O,
}

impl PromptResolver<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> PromptResolver<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Read one line, `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print `text` styled as a prompt, without a newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text.with(DEFAULT_THEME.prompt))?;
        self.output.flush()
    }

    pub fn output(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<I: BufRead, O: Write> VariableResolver for PromptResolver<I, O> {
    fn resolve(&mut self, name: &str) -> io::Result<String> {
        writeln!(
            self.output,
            "{} {}:",
            "Enter the value for variable".with(DEFAULT_THEME.prompt),
            name.with(DEFAULT_THEME.variable).bold()
        )?;
        self.output.flush()?;

        self.read_line()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
        })
    }
}
