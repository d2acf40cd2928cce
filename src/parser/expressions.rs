//! Expression parsing implementation
//!
//! Recursive descent over four grammar levels, lowest precedence first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := ('+' | '-') factor
//!             | primary ('^' factor)?
//! primary    := '(' expression ')'
//!             | number
//!             | function factor
//!             | variable
//! ```
//!
//! # Precedence
//!
//! `^` binds tighter than unary signs, which bind tighter than `*` and `/`,
//! which bind tighter than `+` and `-`. The exponent is itself a factor, so
//! `^` is right-associative; the loops in `parse_expression` and `parse_term`
//! make the other operators left-associative.
//!
//! # Double operators
//!
//! After any binary operator or `^`, the next non-space character may not be
//! another operator or `)`. `3 + * 4`, `2 * -3` and `(1 +)` are all rejected
//! with [`ParseErrorKind::UnexpectedOperator`].
//!
//! # Nesting limits
//!
//! Each grammar method returns the tree it built together with the tree's
//! height. Factors being parsed at once are capped at
//! [`MAX_NESTING_DEPTH`](crate::parser::parse::MAX_NESTING_DEPTH) and tree
//! height at [`MAX_TREE_HEIGHT`](crate::parser::parse::MAX_TREE_HEIGHT);
//! past either limit parsing stops with [`ParseErrorKind::TooDeeplyNested`],
//! so parsing, evaluating and dropping the tree stay within a small stack.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

/// A parsed subtree and its height
pub(crate) type Parsed = (Expr, usize);

impl Parser {
    /// Parse additive expression (+ -)
    pub(crate) fn parse_expression(&mut self) -> Result<Parsed, ParseError> {
        let (mut left, mut height) = self.parse_term()?;

        loop {
            self.cursor.skip_spaces();
            let loc = self.cursor.location();
            let op = if self.cursor.consume_if('+') {
                BinOp::Add
            } else if self.cursor.consume_if('-') {
                BinOp::Sub
            } else {
                break;
            };

            self.reject_operator()?;
            let (right, right_height) = self.parse_term()?;
            height = self.node_height(height.max(right_height))?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok((left, height))
    }

    /// Parse multiplicative expression (* /)
    fn parse_term(&mut self) -> Result<Parsed, ParseError> {
        let (mut left, mut height) = self.parse_factor()?;

        loop {
            self.cursor.skip_spaces();
            let loc = self.cursor.location();
            let op = if self.cursor.consume_if('*') {
                BinOp::Mul
            } else if self.cursor.consume_if('/') {
                BinOp::Div
            } else {
                break;
            };

            self.reject_operator()?;
            let (right, right_height) = self.parse_factor()?;
            height = self.node_height(height.max(right_height))?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok((left, height))
    }

    /// Parse signed factor with optional exponent
    fn parse_factor(&mut self) -> Result<Parsed, ParseError> {
        self.enter_factor()?;
        let factor = self.parse_signed_factor();
        self.leave_factor();
        factor
    }

    fn parse_signed_factor(&mut self) -> Result<Parsed, ParseError> {
        self.cursor.skip_spaces();
        let loc = self.cursor.location();

        // Unary sign applies to the whole factor, exponent included: -2^2 is -(2^2)
        let unary = if self.cursor.consume_if('+') {
            Some(UnOp::Plus)
        } else if self.cursor.consume_if('-') {
            Some(UnOp::Neg)
        } else {
            None
        };

        if let Some(op) = unary {
            log::trace!("unary {} at column {}", op.symbol(), loc.column);
            let (operand, operand_height) = self.parse_factor()?;
            let height = self.node_height(operand_height)?;
            return Ok((
                Expr::Unary {
                    op,
                    operand: Box::new(operand),
                    location: loc,
                },
                height,
            ));
        }

        let (base, base_height) = self.parse_primary()?;

        self.cursor.skip_spaces();
        let loc = self.cursor.location();
        if self.cursor.consume_if('^') {
            self.reject_operator()?;
            let (exponent, exponent_height) = self.parse_factor()?;
            let height = self.node_height(base_height.max(exponent_height))?;
            return Ok((
                Expr::Binary {
                    op: BinOp::Pow,
                    left: Box::new(base),
                    right: Box::new(exponent),
                    location: loc,
                },
                height,
            ));
        }

        Ok((base, base_height))
    }

    /// Parse primary: parenthesized group, number, function call, or variable
    fn parse_primary(&mut self) -> Result<Parsed, ParseError> {
        self.cursor.skip_spaces();
        let loc = self.cursor.location();

        if self.cursor.consume_if('(') {
            let inner = self.parse_expression()?;
            if !self.cursor.consume_if(')') && self.options.strict {
                return Err(ParseError::new(
                    ParseErrorKind::UnclosedParen,
                    self.cursor.location(),
                ));
            }
            return Ok(inner);
        }

        match self.cursor.current() {
            Some(ch) if ch.is_ascii_digit() || ch == '.' => Ok((self.parse_number(loc)?, 1)),
            Some(ch) if ch.is_ascii_lowercase() => {
                let name = self.cursor.take_while(|c| c.is_ascii_lowercase());
                match Function::from_name(&name) {
                    Some(function) => {
                        log::trace!("call {} at column {}", name, loc.column);
                        let (argument, argument_height) = self.parse_factor()?;
                        let height = self.node_height(argument_height)?;
                        Ok((
                            Expr::Call {
                                function,
                                argument: Box::new(argument),
                                location: loc,
                            },
                            height,
                        ))
                    }
                    None => Ok((Expr::Variable(name, loc), 1)),
                }
            }
            found => {
                if self.options.strict {
                    return Err(ParseError::new(ParseErrorKind::ExpectedOperand(found), loc));
                }
                // Nothing here; the top-level check reports any leftover input
                Ok((Expr::Number(0.0, loc), 1))
            }
        }
    }

    /// Parse a run of digits and dots as a floating-point literal
    fn parse_number(&mut self, loc: SourceLocation) -> Result<Expr, ParseError> {
        let literal = self.cursor.take_while(|ch| ch.is_ascii_digit() || ch == '.');
        match literal.parse::<f64>() {
            Ok(value) => Ok(Expr::Number(value, loc)),
            Err(_) => Err(ParseError::new(
                ParseErrorKind::InvalidNumber(literal),
                loc,
            )),
        }
    }
}
