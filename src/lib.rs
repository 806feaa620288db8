//! # postfixa
//!
//! postfixa is an evaluator for arithmetic expressions written in postfix
//! (reverse Polish) notation. It tokenizes a whitespace-separated expression,
//! classifies every token as a number or an operator, and evaluates the
//! sequence with a stack machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::eval_tokens, lexer::tokenize};

/// Defines the closed operator set.
///
/// This module declares the `Operator` enum that represents the five
/// arithmetic operators a postfix expression may contain. Mapping operator
/// symbols to a tagged variant once, at classification time, avoids
/// repeating string comparisons at every use site.
///
/// # Responsibilities
/// - Defines the operator variants and their display symbols.
pub mod ast;
/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating a postfix expression. It standardizes error reporting and
/// carries the token position where each failure was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches token positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer and the stack-machine evaluator to
/// provide a complete runtime for postfix expressions. It exposes the
/// components that [`evaluate`] composes.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a postfix expression and returns its numeric result.
///
/// This function tokenizes and evaluates the provided expression string in
/// one pass. Evaluation is deterministic and carries no state between calls;
/// the token sequence and value stack are created and dropped inside the
/// call. The first error encountered is returned and no partial result is
/// ever produced.
///
/// # Errors
/// Returns an error if any token is neither a number nor an operator, or if
/// the token sequence cannot be reduced to exactly one value.
///
/// # Examples
/// ```
/// use postfixa::evaluate;
///
/// // `3 4 +` is postfix for `3 + 4`.
/// let result = evaluate("3 4 +").unwrap();
/// assert_eq!(result, 7.0);
///
/// // The first two tokens must be numbers.
/// assert!(evaluate("+ 3 4").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(expression)?;
    let value = eval_tokens(&tokens)?;

    Ok(value)
}
