//! Expression evaluation
//!
//! This module provides the evaluation side of the crate:
//! - [`engine`]: the [`Evaluator`](engine::Evaluator) that parses and walks expressions
//! - [`variables`]: the variable cache and the resolver seam
//! - [`errors`]: evaluation error types
//!
//! # Built-in Functions
//!
//! `sqrt`, `sin`, `cos` and `tan` are applied by `builtins` through
//! [`Function::apply`](crate::parser::ast::Function::apply).

mod builtins;
pub mod engine;
pub mod errors;
pub mod variables;
