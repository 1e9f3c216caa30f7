use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, lexer::Token}};

/// Applies a binary operator to two operands.
///
/// `left` is the operand pushed first, `right` the one pushed last, so
/// `left OP right` keeps subtraction and division in source order. Division
/// fails when `right` is exactly zero; there is no tolerance.
///
/// # Parameters
/// - `op`: One of `Plus`, `Minus`, `Multiply` or `Divide`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `pos`: Byte offset of the operator, for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::binary::apply, lexer::Token};
///
/// assert_eq!(apply(Token::Minus, 10.0, 3.0, 0), Ok(7.0));
/// assert_eq!(apply(Token::Divide, 1.0, 4.0, 0), Ok(0.25));
/// assert!(apply(Token::Divide, 1.0, 0.0, 0).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn apply(op: Token, left: f64, right: f64, pos: usize) -> EvalResult<f64> {
    match op {
        Token::Plus => Ok(left + right),
        Token::Minus => Ok(left - right),
        Token::Multiply => Ok(left * right),
        Token::Divide => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { pos });
            }
            Ok(left / right)
        },
        Token::Number(_) | Token::OpenParen | Token::CloseParen => {
            Err(RuntimeError::MalformedPostfix { pos })
        },
    }
}
