use crate::{
    error::{RuntimeError, stack_error::Underflow},
    interpreter::{evaluator::binary::apply, lexer::Token, parser::core::Postfix, stack::Stack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix sequence to a single number.
///
/// Numbers are pushed on an operand stack. Each operator pops its right
/// operand, then its left one, and pushes the result. Exactly one value must
/// be left once the sequence is consumed.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by the parser.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `Underflow` if an operator has fewer than two operands.
/// - `DivisionByZero` if a divisor is exactly `0.0`.
/// - `MalformedExpression` if zero or several values remain.
/// - `MalformedPostfix` if the sequence contains a parenthesis.
/// - `OutOfMemory` if the operand stack cannot grow.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::core::evaluate, parser::core::parse};
///
/// let postfix = parse("(2 + 3) * 4").unwrap();
/// assert_eq!(evaluate(&postfix), Ok(20.0));
/// ```
pub fn evaluate(postfix: &Postfix) -> EvalResult<f64> {
    let mut operands = Stack::new()?;

    for &(token, pos) in postfix {
        if let Token::Number(value) = token {
            operands.push(value)?;
            continue;
        }
        if !token.is_operator() {
            return Err(RuntimeError::MalformedPostfix { pos });
        }

        let right = operands.pop().map_err(|Underflow| RuntimeError::Underflow { pos })?;
        let left = operands.pop().map_err(|Underflow| RuntimeError::Underflow { pos })?;
        let value = apply(token, left, right, pos)?;
        log::trace!("{left} {token} {right} = {value}");
        operands.push(value)?;
    }

    match operands.len() {
        1 => operands.pop()
                     .map_err(|Underflow| RuntimeError::MalformedExpression { remaining: 0 }),
        remaining => Err(RuntimeError::MalformedExpression { remaining }),
    }
}
