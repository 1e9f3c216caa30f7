use crate::error::stack_error::OutOfMemory;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression and
/// reordering it into postfix form.
pub enum ParseError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The unrecognized input, as sliced by the lexer.
        lexeme: String,
        /// Byte offset of the lexeme in the expression.
        pos:    usize,
    },
    /// A closing parenthesis `)` was found with no open `(` to match it.
    UnbalancedParentheses {
        /// Byte offset of the `)`.
        pos: usize,
    },
    /// An opening parenthesis `(` was never closed.
    UnclosedParenthesis {
        /// Byte offset of the `(`.
        pos: usize,
    },
    /// A token stack could not grow.
    OutOfMemory,
}

impl ParseError {
    /// Byte offset of the offending input, if the error points at one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidCharacter { pos, .. }
            | Self::UnbalancedParentheses { pos }
            | Self::UnclosedParenthesis { pos } => Some(*pos),
            Self::OutOfMemory => None,
        }
    }
}

impl From<OutOfMemory> for ParseError {
    fn from(_: OutOfMemory) -> Self {
        Self::OutOfMemory
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { lexeme, pos } => {
                write!(f, "Error at position {pos}: Invalid character in '{lexeme}'.")
            },
            Self::UnbalancedParentheses { pos } => write!(f,
                                                          "Error at position {pos}: Closing parenthesis ')' has no matching '('."),
            Self::UnclosedParenthesis { pos } => write!(f,
                                                        "Error at position {pos}: Opening parenthesis '(' is never closed."),
            Self::OutOfMemory => write!(f, "Out of memory while parsing."),
        }
    }
}

impl std::error::Error for ParseError {}
