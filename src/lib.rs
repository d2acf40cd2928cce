//! # Introduction
//!
//! exprcalc evaluates arithmetic expressions written as text: the four basic
//! operators, `^`, unary signs, parentheses, `sqrt`/`sin`/`cos`/`tan` (trig in
//! degrees) and free-form lowercase variables whose values are asked for the
//! first time they are seen and remembered afterwards.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Source → Cursor → Parser → Expr → Evaluator (+ VariableCache, VariableResolver) → f64
//! ```
//!
//! 1. [`parser`] — reads characters through a [`parser::lexer::Cursor`] and
//!    builds an [`parser::ast::Expr`] by recursive descent.
//! 2. [`interpreter`] — walks the tree; unknown variables go through the
//!    [`interpreter::variables::VariableResolver`] once and land in the
//!    [`interpreter::variables::VariableCache`].
//! 3. [`ui`] — terminal prompt and output for the binary; not part of the
//!    stable library API.
//!
//! ## Example
//!
//! ```
//! use exprcalc::interpreter::engine::Evaluator;
//! use exprcalc::interpreter::variables::ScriptedResolver;
//!
//! let resolver = ScriptedResolver::new().with("a", "5").with("b", "16");
//! let mut evaluator = Evaluator::new(resolver);
//! assert_eq!(evaluator.evaluate("b+a*sqrt(b)/4").unwrap(), 21.0);
//! ```

pub mod interpreter;
pub mod parser;
pub mod ui;
