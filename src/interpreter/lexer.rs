use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
///
/// Numbers carry their value; every other kind is a bare symbol, so a value
/// can only ever be read from a `Number`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\n]+")]
pub enum Token {
    /// Digit-leading numeric literals, such as `42`, `3.14`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
}

impl Token {
    /// Returns the precedence rank of an operator or parenthesis.
    ///
    /// `(` ranks highest but is never drained by comparison; `*` and `/` bind
    /// tighter than `+` and `-`. Numbers and `)` have no rank.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::OpenParen => Some(3),
            Self::Multiply | Self::Divide => Some(2),
            Self::Plus | Self::Minus => Some(1),
            Self::Number(_) | Self::CloseParen => None,
        }
    }

    /// Whether this is one of the four binary operators.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Multiply | Self::Divide)
    }

    /// Whether this is `(` or `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self, Self::OpenParen | Self::CloseParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which the lexer reports as an
///   error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
