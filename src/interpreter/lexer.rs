use logos::Logos;

use crate::error::ParseError;

/// Represents a single token of a postfix expression.
/// A token is one whitespace-separated word of the input, classified as
/// either a numeric operand or one of the five operator symbols.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `-120`.
    ///
    /// A literal may start with a single minus sign, must contain at least
    /// one digit, and may contain at most one decimal point after the first
    /// digit.
    #[regex(r"-?[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
}

/// Splits an expression into classified tokens.
///
/// The input is split on runs of whitespace; the split itself cannot fail,
/// and an empty input yields an empty sequence. Each word is then classified
/// by [`classify`], which rejects anything that is not a clean operand or
/// operator. Every token carries its 0-indexed position in the expression
/// for error reporting.
///
/// # Parameters
/// - `expression`: The raw postfix expression.
///
/// # Returns
/// The ordered sequence of `(Token, position)` pairs.
///
/// # Errors
/// - `InvalidToken` if any word is neither a number nor an operator.
///
/// # Example
/// ```
/// use postfixa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("3 4 +").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(3.0), 0), (Token::Number(4.0), 1), (Token::Plus, 2)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();

    for (position, word) in expression.split_whitespace().enumerate() {
        tokens.push((classify(word, position)?, position));
    }

    Ok(tokens)
}

/// Classifies a single word as a number or an operator.
///
/// The word is accepted only if the lexer matches it as exactly one token
/// with no characters left over. This makes words like `1.2.3`, `--5` or
/// `3x` invalid even though a prefix of them would match.
///
/// # Parameters
/// - `word`: One whitespace-separated word of the expression.
/// - `position`: The 0-indexed position of the word, used for error
///   reporting.
///
/// # Returns
/// The classified token.
///
/// # Errors
/// - `InvalidToken` if the word is neither a number nor an operator.
pub fn classify(word: &str, position: usize) -> Result<Token, ParseError> {
    let mut lexer = Token::lexer(word);

    match lexer.next() {
        Some(Ok(token)) if lexer.remainder().is_empty() => Ok(token),
        _ => Err(ParseError::InvalidToken { token: word.to_string(),
                                            position }),
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
