//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the parse error types, and the
//! [`parse`] entry point that checks the whole input was consumed.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, options, errors, and coordination
//! - `expressions`: the grammar levels (expression, term, factor, primary)
//!
//! Grammar methods live in `impl Parser` blocks in `expressions`, with access
//! to the shared cursor and options.

use crate::parser::ast::{Expr, SourceLocation};
use crate::parser::lexer::Cursor;
use std::fmt;

/// What went wrong while parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// An operator or `)` directly after a binary or `^` operator
    UnexpectedOperator,

    /// Input left over after a complete expression
    UnexpectedCharacter(char),

    /// A run of digits and dots that is not a valid number
    InvalidNumber(String),

    /// Missing `)` (strict mode only)
    UnclosedParen,

    /// No operand where one was required (strict mode only)
    ExpectedOperand(Option<char>),

    /// Parentheses, signs, calls or operator chains nested past the limits
    TooDeeplyNested,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedOperator => {
                write!(f, "Syntax error: unexpected operator")
            }
            ParseErrorKind::UnexpectedCharacter(ch) => {
                write!(f, "Unexpected character: {}", ch)
            }
            ParseErrorKind::InvalidNumber(literal) => {
                write!(f, "Invalid number: {}", literal)
            }
            ParseErrorKind::UnclosedParen => write!(f, "Syntax error: expected ')'"),
            ParseErrorKind::ExpectedOperand(Some(ch)) => {
                write!(f, "Syntax error: expected operand, found '{}'", ch)
            }
            ParseErrorKind::ExpectedOperand(None) => {
                write!(f, "Syntax error: expected operand, found end of input")
            }
            ParseErrorKind::TooDeeplyNested => {
                write!(f, "Syntax error: expression nested too deeply")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parser configuration
///
/// The default is permissive: a missing `)` is tolerated and a missing
/// operand reads as `0`. `strict` turns both into errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Maximum number of factors being parsed at once (parentheses, unary
/// signs, `^` exponents and function arguments all open a factor)
pub const MAX_NESTING_DEPTH: usize = 128;

/// Maximum height of the finished expression tree
pub const MAX_TREE_HEIGHT: usize = 1024;

/// Recursive descent parser for arithmetic expressions
pub struct Parser {
    pub(crate) cursor: Cursor,
    pub(crate) options: ParseOptions,
    depth: usize,
}

impl Parser {
    pub fn new(source: &str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            depth: 0,
        }
    }

    /// Parse the entire input as one expression.
    ///
    /// Anything left over after the expression is an
    /// [`ParseErrorKind::UnexpectedCharacter`] naming the first leftover
    /// character.
    pub fn parse_complete(&mut self) -> Result<Expr, ParseError> {
        let (expr, height) = self.parse_expression()?;

        if !self.cursor.is_at_end() {
            let ch = self.cursor.current().unwrap_or_default();
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedCharacter(ch),
                self.cursor.location(),
            ));
        }

        log::trace!(
            "parsed {} ({} chars, height {})",
            expr,
            self.cursor.position(),
            height
        );
        Ok(expr)
    }

    // ===== Helper methods =====

    /// Open a factor. Fails once factors nest past [`MAX_NESTING_DEPTH`].
    pub(crate) fn enter_factor(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.too_deep());
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_factor(&mut self) {
        self.depth -= 1;
    }

    /// Height of a new node over children at most `child_height` tall.
    /// Fails past [`MAX_TREE_HEIGHT`].
    pub(crate) fn node_height(&self, child_height: usize) -> Result<usize, ParseError> {
        let height = child_height + 1;
        if height > MAX_TREE_HEIGHT {
            return Err(self.too_deep());
        }
        Ok(height)
    }

    fn too_deep(&self) -> ParseError {
        ParseError::new(ParseErrorKind::TooDeeplyNested, self.cursor.location())
    }

    /// Reject an operator (or `)`) right after the operator just consumed.
    pub(crate) fn reject_operator(&mut self) -> Result<(), ParseError> {
        if self.cursor.at_operator() {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedOperator,
                self.cursor.location(),
            ))
        } else {
            Ok(())
        }
    }
}

/// Parse `source` into an expression tree.
pub fn parse(source: &str, options: ParseOptions) -> Result<Expr, ParseError> {
    Parser::new(source, options).parse_complete()
}
