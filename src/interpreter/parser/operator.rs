use crate::{
    error::{ParseError, stack_error::Underflow},
    interpreter::{lexer::Token, parser::core::{ParseResult, Positioned}, stack::Stack},
};

/// Returns whether `top` must leave the operator stack before `incoming` is
/// pushed.
///
/// Parentheses never leave by comparison. Otherwise an operator of equal or
/// higher rank goes first, which makes equal ranks group left to right.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{lexer::Token, parser::operator::precedes};
///
/// assert!(precedes(Token::Multiply, Token::Plus));
/// assert!(precedes(Token::Minus, Token::Plus));
/// assert!(!precedes(Token::Plus, Token::Divide));
/// assert!(!precedes(Token::OpenParen, Token::Plus));
/// ```
#[must_use]
pub fn precedes(top: Token, incoming: Token) -> bool {
    if top.is_paren() {
        return false;
    }
    match (top.precedence(), incoming.precedence()) {
        (Some(top), Some(incoming)) => top >= incoming,
        _ => false,
    }
}

/// Moves every operator that binds at least as tightly as `incoming` from the
/// operator stack to the output.
pub fn drain_preceding(incoming: Token,
                       output: &mut Stack<Positioned>,
                       operators: &mut Stack<Positioned>)
                       -> ParseResult<()> {
    while operators.peek().is_some_and(|&(top, _)| precedes(top, incoming)) {
        let Ok(popped) = operators.pop() else {
            break;
        };
        log::trace!("{} leaves before {incoming}", popped.0);
        output.push(popped)?;
    }
    Ok(())
}

/// Closes a parenthesized group.
///
/// Pops operators to the output until the matching `(` is found, which is
/// discarded.
///
/// # Errors
/// `UnbalancedParentheses` at `close_pos` if the stack runs out first.
pub fn drain_group(output: &mut Stack<Positioned>,
                   operators: &mut Stack<Positioned>,
                   close_pos: usize)
                   -> ParseResult<()> {
    loop {
        match operators.pop() {
            Ok((Token::OpenParen, _)) => return Ok(()),
            Ok(positioned) => output.push(positioned)?,
            Err(Underflow) => return Err(ParseError::UnbalancedParentheses { pos: close_pos }),
        }
    }
}

/// Moves all remaining operators to the output once the input is exhausted.
///
/// # Errors
/// `UnclosedParenthesis` if a `(` is still waiting for its `)`.
pub fn drain_remaining(output: &mut Stack<Positioned>,
                       operators: &mut Stack<Positioned>)
                       -> ParseResult<()> {
    while let Ok(positioned) = operators.pop() {
        if let (Token::OpenParen, pos) = positioned {
            return Err(ParseError::UnclosedParenthesis { pos });
        }
        output.push(positioned)?;
    }
    Ok(())
}
