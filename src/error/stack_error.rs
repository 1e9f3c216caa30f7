use std::collections::TryReserveError;

/// A stack could not reserve room for another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfMemory;

/// Tried to pop from an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underflow;

impl From<TryReserveError> for OutOfMemory {
    fn from(_: TryReserveError) -> Self {
        Self
    }
}

impl std::fmt::Display for OutOfMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack allocation failed.")
    }
}

impl std::fmt::Display for Underflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack is empty.")
    }
}

impl std::error::Error for OutOfMemory {}

impl std::error::Error for Underflow {}
