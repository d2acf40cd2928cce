//! Terminal front end for the `exprcalc` binary
//!
//! Not part of the stable library API. Holds the interactive
//! [`PromptResolver`](prompt::PromptResolver) and the result/error rendering
//! used by `main`.

pub mod prompt;
pub mod theme;

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::interpreter::errors::EvalError;
use crate::parser::ast::Expr;
use theme::DEFAULT_THEME;

pub fn print_result(out: &mut impl Write, value: f64) -> io::Result<()> {
    writeln!(out, "{}", value.to_string().with(DEFAULT_THEME.result))
}

pub fn print_ast(out: &mut impl Write, expr: &Expr) -> io::Result<()> {
    writeln!(out, "{}", expr.to_string().with(DEFAULT_THEME.ast))
}

/// Print the error message, then the expression with a caret under the
/// offending column.
pub fn print_error(out: &mut impl Write, expression: &str, err: &EvalError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().with(DEFAULT_THEME.error))?;
    writeln!(out, "  {}", expression)?;
    let padding = " ".repeat(err.location().column.saturating_sub(1));
    writeln!(out, "  {}{}", padding, "^".with(DEFAULT_THEME.caret).bold())
}
