use crate::error::stack_error::OutOfMemory;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// Attempted division by exactly zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        pos: usize,
    },
    /// An operator found fewer than two operands on the stack.
    Underflow {
        /// Byte offset of the operator.
        pos: usize,
    },
    /// The sequence did not reduce to exactly one value.
    MalformedExpression {
        /// How many values were left on the operand stack.
        remaining: usize,
    },
    /// A parenthesis reached the evaluator. The parser never emits one.
    MalformedPostfix {
        /// Byte offset of the parenthesis.
        pos: usize,
    },
    /// The operand stack could not grow.
    OutOfMemory,
}

impl RuntimeError {
    /// Byte offset of the offending token, if the error points at one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::DivisionByZero { pos } | Self::Underflow { pos } | Self::MalformedPostfix { pos } => {
                Some(*pos)
            },
            Self::MalformedExpression { .. } | Self::OutOfMemory => None,
        }
    }
}

impl From<OutOfMemory> for RuntimeError {
    fn from(_: OutOfMemory) -> Self {
        Self::OutOfMemory
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { pos } => write!(f, "Error at position {pos}: Division by zero."),
            Self::Underflow { pos } => {
                write!(f, "Error at position {pos}: Operator is missing an operand.")
            },
            Self::MalformedExpression { remaining: 0 } => {
                write!(f, "Error: Expression does not contain a value.")
            },
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Error: Expression leaves {remaining} values without an operator."),
            Self::MalformedPostfix { pos } => write!(f,
                                                     "Error at position {pos}: Parenthesis found in postfix sequence."),
            Self::OutOfMemory => write!(f, "Out of memory while evaluating."),
        }
    }
}

impl std::error::Error for RuntimeError {}
