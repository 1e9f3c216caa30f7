/// Parsing errors.
///
/// Defines all error types that can occur while scanning an expression and
/// reordering it into postfix form: unrecognized characters and parentheses
/// that do not pair up.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as division by zero or operators without enough operands.
pub mod runtime_error;
/// Stack errors.
///
/// Marker types returned by [`Stack`](crate::interpreter::stack::Stack) when it
/// cannot grow or has nothing left to pop.
pub mod stack_error;

use std::str::Utf8Error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Every way a call to [`solve`](crate::solve) can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be read as text.
    InvalidArgument(Utf8Error),
    /// The expression could not be turned into postfix form.
    Parse(ParseError),
    /// The postfix sequence could not be reduced to a value.
    Evaluation(RuntimeError),
    /// A stack could not grow in either phase.
    OutOfMemory,
}

/// Coarse outcome of a solve, with a stable process exit code per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    InvalidArgument,
    ParseError,
    EvaluationError,
    OutOfMemory,
}

impl Status {
    /// Exit code reported by the command-line front end.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InvalidArgument => 1,
            Self::ParseError => 2,
            Self::EvaluationError => 3,
            Self::OutOfMemory => 4,
        }
    }
}

impl<T> From<&Result<T, Error>> for Status {
    fn from(result: &Result<T, Error>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) => e.status(),
        }
    }
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{Status, solve};
    ///
    /// let err = solve("5 / 0").unwrap_err();
    /// assert_eq!(err.status(), Status::EvaluationError);
    /// assert_eq!(err.status().exit_code(), 3);
    /// ```
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::InvalidArgument(_) => Status::InvalidArgument,
            Self::Parse(_) => Status::ParseError,
            Self::Evaluation(_) => Status::EvaluationError,
            Self::OutOfMemory => Status::OutOfMemory,
        }
    }

    /// Byte offset of the offending input, if known.
    ///
    /// For [`Error::InvalidArgument`] this is the length of the valid UTF-8
    /// prefix.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidArgument(e) => Some(e.valid_up_to()),
            Self::Parse(e) => e.position(),
            Self::Evaluation(e) => e.position(),
            Self::OutOfMemory => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::OutOfMemory => Self::OutOfMemory,
            e => Self::Parse(e),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        match error {
            RuntimeError::OutOfMemory => Self::OutOfMemory,
            e => Self::Evaluation(e),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "Invalid argument: expression is not UTF-8 ({e})."),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::OutOfMemory => write!(f, "Out of memory."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Evaluation(e) => Some(e),
            Self::OutOfMemory => None,
        }
    }
}
