/// The evaluator module executes the token sequence and computes the result.
///
/// The evaluator is the stack machine at the core of the crate. It walks the
/// token sequence left to right, pushes numeric operands onto a value stack,
/// reduces the stack whenever an operator appears, and yields the final
/// scalar result.
///
/// # Responsibilities
/// - Applies each operator to the top two stack values, last-in as the right
///   operand.
/// - Enforces that the first two tokens are operands.
/// - Reports runtime errors such as stack underflow, division by zero, or
///   leftover operands.
pub mod evaluator;
/// The lexer module tokenizes and classifies the raw expression.
///
/// The lexer splits the input on whitespace and classifies each word as a
/// numeric operand or one of the five operator symbols. This is the first
/// stage of evaluation; malformed words are rejected here before the stack
/// machine runs.
///
/// # Responsibilities
/// - Splits the raw expression into words on runs of whitespace.
/// - Classifies every word as a number or an operator, tracking its position
///   for error reporting.
/// - Rejects words that match neither category.
pub mod lexer;
