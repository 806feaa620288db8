#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum ParseError {
    /// Found a word that is neither a numeric operand nor an operator.
    InvalidToken {
        /// The offending word, exactly as it appeared in the input.
        token:    String,
        /// The 0-indexed position of the word in the expression.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token, position } => write!(f,
                                                             "Error at token {position}: '{token}' is neither a number nor an operator."),
        }
    }
}

impl std::error::Error for ParseError {}
