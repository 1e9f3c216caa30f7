//! # infixcalc
//!
//! infixcalc evaluates infix arithmetic expressions over floating-point
//! numbers. It supports `+`, `-`, `*`, `/` and parentheses, with the usual
//! precedence and left associativity.
//!
//! An expression goes through three phases: the lexer scans it into tokens,
//! the parser reorders them into postfix form with the shunting-yard
//! algorithm, and the evaluator reduces the postfix sequence with an operand
//! stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::evaluate, parser::core::parse};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// reordering, or evaluating an expression, and the [`Status`] classes they
/// map to.
///
/// # Responsibilities
/// - Defines error enums for each phase (parser, evaluator, stack).
/// - Attaches byte offsets for error reporting.
/// - Folds phase errors into the top-level [`Error`].
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the shunting-yard parser, the
/// evaluator, and the stack they share.
///
/// # Responsibilities
/// - Tokenizes expressions.
/// - Reorders tokens into postfix form.
/// - Reduces postfix sequences to a number.
pub mod interpreter;

pub use error::{Error, Status};

/// Evaluates an infix expression.
///
/// The expression is parsed into postfix form and then evaluated. The first
/// failure in either phase is returned unchanged; a parse failure means
/// evaluation is never attempted. Each call owns its stacks, so concurrent
/// calls need no synchronization.
///
/// # Errors
/// Returns [`Error::Parse`] for invalid characters or unbalanced
/// parentheses, [`Error::Evaluation`] for division by zero or a wrong number
/// of operands, and [`Error::OutOfMemory`] if a stack cannot grow.
///
/// # Examples
/// ```
/// use infixcalc::solve;
///
/// assert_eq!(solve("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(solve("(2 - 1) / (1 + 4 * 2 - 5)"), Ok(0.25));
///
/// // Division by exactly zero is an error, never infinity.
/// assert!(solve("5 / 0").is_err());
/// ```
pub fn solve(expression: &str) -> Result<f64, Error> {
    let postfix = parse(expression)?;
    let value = evaluate(&postfix)?;
    log::debug!("{expression} = {value}");
    Ok(value)
}

/// Evaluates an expression given as raw bytes.
///
/// The bytes must be valid UTF-8. This check runs before anything is
/// allocated.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the input is not UTF-8, otherwise
/// the same errors as [`solve`].
///
/// # Examples
/// ```
/// use infixcalc::{Status, solve_bytes};
///
/// assert_eq!(solve_bytes(b"10 - 3 - 2"), Ok(5.0));
///
/// let err = solve_bytes(&[b'1', b'+', 0xff]).unwrap_err();
/// assert_eq!(err.status(), Status::InvalidArgument);
/// ```
pub fn solve_bytes(expression: &[u8]) -> Result<f64, Error> {
    let expression = std::str::from_utf8(expression).map_err(Error::InvalidArgument)?;
    solve(expression)
}
