/// Core parsing logic.
///
/// Drives the lexer over the expression and routes each token either to the
/// output or through the operator stack. Defines [`core::Postfix`], the
/// parser's output.
pub mod core;

/// Operator stack handling.
///
/// Precedence comparison and the drain steps of the shunting-yard algorithm:
/// before pushing an operator, on a closing parenthesis, and at the end of the
/// input.
pub mod operator;
