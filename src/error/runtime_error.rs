#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token sequence.
pub enum RuntimeError {
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// One of the first two tokens was not a numeric operand.
    ExpectedOperand {
        /// The 0-indexed position of the offending token.
        position: usize,
    },
    /// An operator was applied with fewer than two values on the stack.
    StackUnderflow {
        /// The 0-indexed position of the operator token.
        position: usize,
    },
    /// The expression finished without ever applying an operator.
    MissingOperator,
    /// Values were left on the stack after the final token was processed.
    UnconsumedOperands {
        /// The number of leftover values beyond the result.
        count: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The 0-indexed position of the `/` token.
        position: usize,
    },
    /// A power operation produced no real result, such as a negative base
    /// raised to a fractional exponent.
    InvalidPower {
        /// The 0-indexed position of the `^` token.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),
            Self::ExpectedOperand { position } => {
                write!(f, "Error at token {position}: Expected a number.")
            },
            Self::StackUnderflow { position } => write!(f,
                                                        "Error at token {position}: Operator needs two values but the stack holds fewer."),
            Self::MissingOperator => {
                write!(f, "Error: Expression ends without applying any operator.")
            },
            Self::UnconsumedOperands { count } => write!(f,
                                                         "Error: {count} operand(s) left unconsumed after evaluation."),
            Self::DivisionByZero { position } => {
                write!(f, "Error at token {position}: Division by zero.")
            },
            Self::InvalidPower { position } => {
                write!(f, "Error at token {position}: Power operation has no real result.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
