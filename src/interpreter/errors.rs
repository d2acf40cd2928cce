//! Evaluation error types
//!
//! This module defines [`EvalError`], the one error type callers of
//! [`Evaluator::evaluate`](crate::interpreter::engine::Evaluator::evaluate)
//! see. Parse errors are wrapped unchanged; the remaining variants come from
//! resolving variables.
//!
//! All errors are fatal to the evaluation in progress. There is no partial
//! result.

use crate::parser::ast::SourceLocation;
use crate::parser::ParseError;
use std::fmt;

/// Errors that can occur while evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Malformed expression text
    Parse(ParseError),

    /// The resolver answered with something that is not a number
    InvalidVariableValue {
        name: String,
        input: String,
        location: SourceLocation,
    },

    /// The resolver could not produce an answer at all (e.g. stdin closed)
    ResolverFailed {
        name: String,
        message: String,
        location: SourceLocation,
    },
}

impl EvalError {
    /// Column the error points at; for variable errors, the variable itself
    pub fn location(&self) -> SourceLocation {
        match self {
            EvalError::Parse(err) => err.location,
            EvalError::InvalidVariableValue { location, .. }
            | EvalError::ResolverFailed { location, .. } => *location,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Parse(err) => write!(f, "{}", err),
            EvalError::InvalidVariableValue { name, input, .. } => {
                write!(
                    f,
                    "Invalid value for variable '{}': {:?} is not a number",
                    name, input
                )
            }
            EvalError::ResolverFailed { name, message, .. } => {
                write!(f, "Could not read value for variable '{}': {}", name, message)
            }
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        EvalError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseErrorKind;

    #[test]
    fn test_parse_error_text_is_unchanged() {
        let err: EvalError =
            ParseError::new(ParseErrorKind::UnexpectedCharacter('a'), SourceLocation::new(7)).into();
        assert_eq!(err.to_string(), "Unexpected character: a");
        assert_eq!(err.location(), SourceLocation::new(7));
    }

    #[test]
    fn test_invalid_variable_value_message() {
        let err = EvalError::InvalidVariableValue {
            name: "a".to_string(),
            input: "five".to_string(),
            location: SourceLocation::new(1),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for variable 'a': \"five\" is not a number"
        );
    }
}
