/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing a postfix
/// expression. Parse errors cover input words that are neither a valid
/// numeric operand nor one of the recognized operator symbols.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the stack machine
/// evaluates a token sequence. Runtime errors include stack underflow,
/// division by zero, leftover operands, and expressions that never apply
/// an operator.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
