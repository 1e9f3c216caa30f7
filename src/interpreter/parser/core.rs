use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::operator::{drain_group, drain_preceding, drain_remaining},
        stack::Stack,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A token paired with its byte offset in the expression.
pub type Positioned = (Token, usize);

/// An expression reordered into postfix (Reverse Polish) form.
///
/// Tokens are stored bottom to top in the order they were emitted, each with
/// the byte offset it was scanned from. The sequence never contains
/// parentheses when produced by [`parse`].
///
/// # Example
/// ```
/// use infixcalc::interpreter::parser::core::parse;
///
/// let postfix = parse("1 + 2 * 3").unwrap();
/// assert_eq!(postfix.to_string(), "1 2 3 * +");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Postfix {
    tokens: Stack<Positioned>,
}

impl Postfix {
    /// Wraps an already ordered token stack.
    #[must_use]
    pub const fn new(tokens: Stack<Positioned>) -> Self {
        Self { tokens }
    }

    /// Iterates the tokens in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Positioned> {
        self.tokens.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type IntoIter = std::slice::Iter<'a, Positioned>;
    type Item = &'a Positioned;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (token, _)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Scans an expression and reorders it into postfix form in a single pass.
///
/// Numbers go straight to the output. Operators wait on an operator stack
/// until an operator of lower rank, a closing parenthesis, or the end of the
/// input releases them (shunting-yard).
///
/// # Parameters
/// - `expression`: The infix expression, scanned left to right.
///
/// # Returns
/// The [`Postfix`] sequence, ready for evaluation.
///
/// # Errors
/// - `InvalidCharacter` if a character starts no token.
/// - `UnbalancedParentheses` if a `)` has no matching `(`.
/// - `UnclosedParenthesis` if a `(` is still open at the end of the input.
/// - `OutOfMemory` if a stack cannot grow.
pub fn parse(expression: &str) -> ParseResult<Postfix> {
    let mut output = Stack::new()?;
    let mut operators = Stack::new()?;
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        let pos = lexer.span().start;
        let Ok(token) = token else {
            return Err(ParseError::InvalidCharacter { lexeme: lexer.slice().to_string(),
                                                      pos });
        };
        log::trace!("scanned {token} at {pos}");

        match token {
            Token::Number(_) => output.push((token, pos))?,
            Token::OpenParen => operators.push((token, pos))?,
            Token::CloseParen => drain_group(&mut output, &mut operators, pos)?,
            _ => {
                drain_preceding(token, &mut output, &mut operators)?;
                operators.push((token, pos))?;
            },
        }
    }

    drain_remaining(&mut output, &mut operators)?;

    let postfix = Postfix::new(output);
    log::debug!("postfix: {postfix}");
    Ok(postfix)
}
