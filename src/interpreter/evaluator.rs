/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to two operands, including the exact
/// division-by-zero check.
pub mod binary;

/// Core evaluation logic.
///
/// Walks a postfix sequence with an operand stack and checks that it reduces
/// to exactly one value.
pub mod core;
