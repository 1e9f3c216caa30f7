/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator walks the tokens produced by the parser with an operand
/// stack, applies each operator to the two most recent values, and checks that
/// the sequence reduces to a single number.
///
/// # Responsibilities
/// - Applies the four arithmetic operators in source order.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw expression text and produces tokens: numeric
/// literals, the four operators, and parentheses. Whitespace is skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Parses floating-point literals.
/// - Rejects characters that start no token.
pub mod lexer;
/// The parser module reorders tokens into postfix form.
///
/// The parser consumes the lexer's tokens and applies the shunting-yard
/// algorithm: numbers are emitted directly while operators wait on a stack
/// until precedence or parentheses release them.
///
/// # Responsibilities
/// - Resolves precedence and left associativity.
/// - Validates that parentheses pair up, reporting errors with positions.
pub mod parser;
/// The stack module provides the LIFO container used by every phase.
///
/// One stack type backs the operator stack, the postfix output, and the
/// operand stack. It grows by doubling and reports allocation failure instead
/// of aborting.
pub mod stack;
