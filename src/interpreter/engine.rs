//! Expression evaluator
//!
//! [`Evaluator`] owns the variable cache and the resolver, parses each input
//! string into an [`Expr`] and then walks the tree. Because parsing finishes
//! before evaluation starts, a malformed expression never triggers a
//! resolver call.

use crate::interpreter::errors::EvalError;
use crate::interpreter::variables::{VariableCache, VariableResolver};
use crate::parser::ast::{BinOp, Expr, SourceLocation, UnOp};
use crate::parser::{parse, ParseError, ParseOptions};

/// Evaluates expressions against a persistent variable cache
///
/// The cache lives as long as the evaluator, so a variable resolved in one
/// call to [`Evaluator::evaluate`] is reused by every later call.
#[derive(Debug)]
pub struct Evaluator<R: VariableResolver> {
    variables: VariableCache,
    resolver: R,
    options: ParseOptions,
}

impl<R: VariableResolver> Evaluator<R> {
    /// Create an evaluator with an empty cache and default (permissive) parsing.
    pub fn new(resolver: R) -> Self {
        Self::with_variables(VariableCache::new(), resolver)
    }

    /// Create an evaluator that starts from an existing cache.
    pub fn with_variables(variables: VariableCache, resolver: R) -> Self {
        Evaluator {
            variables,
            resolver,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse and evaluate one expression.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvalError> {
        let expr = self.parse(expression)?;
        self.evaluate_expr(&expr)
    }

    /// Parse without evaluating, using this evaluator's options.
    pub fn parse(&self, expression: &str) -> Result<Expr, ParseError> {
        parse(expression, self.options)
    }

    /// Evaluate an already parsed expression
    pub fn evaluate_expr(&mut self, expr: &Expr) -> Result<f64, EvalError> {
        match expr {
            Expr::Number(n, _) => Ok(*n),

            Expr::Variable(name, location) => self.lookup_variable(name, *location),

            Expr::Unary { op, operand, .. } => {
                let value = self.evaluate_expr(operand)?;
                Ok(match op {
                    UnOp::Plus => value,
                    UnOp::Neg => -value,
                })
            }

            Expr::Binary {
                op, left, right, ..
            } => {
                // Left first so variables are resolved in source order
                let left = self.evaluate_expr(left)?;
                let right = self.evaluate_expr(right)?;
                Ok(apply_binary(*op, left, right))
            }

            Expr::Call {
                function, argument, ..
            } => {
                let argument = self.evaluate_expr(argument)?;
                Ok(function.apply(argument))
            }
        }
    }

    /// Look a variable up in the cache, asking the resolver on a miss
    fn lookup_variable(&mut self, name: &str, location: SourceLocation) -> Result<f64, EvalError> {
        if let Some(value) = self.variables.get(name) {
            log::debug!("variable '{}' cached as {}", name, value);
            return Ok(value);
        }

        log::debug!("resolving variable '{}'", name);
        let input = self
            .resolver
            .resolve(name)
            .map_err(|err| EvalError::ResolverFailed {
                name: name.to_string(),
                message: err.to_string(),
                location,
            })?;

        let value = input
            .trim()
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidVariableValue {
                name: name.to_string(),
                input: input.clone(),
                location,
            })?;

        self.variables.insert(name, value);
        Ok(value)
    }

    pub fn variables(&self) -> &VariableCache {
        &self.variables
    }

    pub fn into_variables(self) -> VariableCache {
        self.variables
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }
}

/// IEEE semantics throughout: division by zero gives an infinity or `NaN`
#[inline]
fn apply_binary(op: BinOp, left: f64, right: f64) -> f64 {
    match op {
        BinOp::Add => left + right,
        BinOp::Sub => left - right,
        BinOp::Mul => left * right,
        BinOp::Div => left / right,
        BinOp::Pow => left.powf(right),
    }
}
