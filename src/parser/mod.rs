//! Arithmetic expression parser
//!
//! This module transforms expression text into an expression tree:
//! - [`lexer`]: Character cursor with space skipping
//! - [`parse`]: Parser struct, options, errors, and the [`parse()`] entry point
//! - [`ast`]: Expression tree definitions
//!
//! # Supported Syntax
//!
//! - Numbers: runs of digits and `.` (`3`, `2.5`, `.5`)
//! - Binary operators: `+`, `-`, `*`, `/`, `^`
//! - Unary operators: `+`, `-`
//! - Functions: `sqrt`, `sin`, `cos`, `tan` (trig in degrees)
//! - Variables: any other run of lowercase letters
//! - Parentheses
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent straight over characters; there is no
//! token stream.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;

pub use parse::{parse, ParseError, ParseErrorKind, ParseOptions};
