use crate::{ast::Operator, error::RuntimeError, interpreter::lexer::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a classified token sequence and returns the final value.
///
/// The tokens are processed left to right with a value stack that lives only
/// for the duration of this call. The first two tokens must be numbers.
/// Numbers are pushed; an operator pops the top two values, with the
/// last-in value as the right operand, and pushes the result. After the
/// final token, exactly one value must remain and at least one operator
/// must have been applied.
///
/// # Parameters
/// - `tokens`: The `(Token, position)` sequence produced by the lexer.
///
/// # Returns
/// The value left on the stack after the last reduction.
///
/// # Errors
/// - `EmptyExpression` if the sequence contains no tokens.
/// - `ExpectedOperand` if either of the first two tokens is an operator.
/// - `StackUnderflow` if an operator finds fewer than two stack values.
/// - `MissingOperator` if the sequence ends without any operator applied.
/// - `UnconsumedOperands` if values beyond the result remain on the stack.
/// - `DivisionByZero` and `InvalidPower` from operator application.
///
/// # Example
/// ```
/// use postfixa::interpreter::{evaluator::eval_tokens, lexer::tokenize};
///
/// let tokens = tokenize("5 1 2 + 4 * + 3 -").unwrap();
/// assert_eq!(eval_tokens(&tokens).unwrap(), 14.0);
/// ```
pub fn eval_tokens(tokens: &[(Token, usize)]) -> EvalResult<f64> {
    if tokens.is_empty() {
        return Err(RuntimeError::EmptyExpression);
    }

    let mut stack: Vec<f64> = Vec::new();
    let mut reduced = false;

    for (index, (token, position)) in tokens.iter().enumerate() {
        match token {
            Token::Number(value) => stack.push(*value),
            // The first two tokens of a postfix expression can only be
            // numbers.
            _ if index < 2 => return Err(RuntimeError::ExpectedOperand { position: *position }),
            token => {
                let operator = binary_operator(*token);

                let right = stack.pop()
                                 .ok_or(RuntimeError::StackUnderflow { position: *position })?;
                let left = stack.pop()
                                .ok_or(RuntimeError::StackUnderflow { position: *position })?;

                stack.push(apply_operator(operator, left, right, *position)?);
                reduced = true;
            },
        }
    }

    if !reduced {
        return Err(RuntimeError::MissingOperator);
    }
    if stack.len() > 1 {
        return Err(RuntimeError::UnconsumedOperands { count: stack.len() - 1 });
    }

    stack.pop().ok_or(RuntimeError::MissingOperator)
}

/// Maps an operator token to its [`Operator`].
///
/// # Parameters
/// - `token`: An operator token; `Number` tokens are never passed here.
///
/// # Returns
/// The corresponding operator variant.
fn binary_operator(token: Token) -> Operator {
    use Operator::{Add, Div, Mul, Pow, Sub};

    match token {
        Token::Plus => Add,
        Token::Minus => Sub,
        Token::Star => Mul,
        Token::Slash => Div,
        Token::Caret => Pow,
        Token::Number(_) => unreachable!(),
    }
}

/// Applies a binary operator to two stack values.
///
/// Division by zero is checked explicitly instead of producing an infinity.
/// Exponentiation uses `powf`; a result that is not a real number, such as
/// a negative base raised to a fractional exponent, is rejected.
///
/// # Parameters
/// - `operator`: The operator to apply.
/// - `left`: Left operand, the earlier-pushed of the pair.
/// - `right`: Right operand, the most recently pushed value.
/// - `position`: Token position for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
fn apply_operator(operator: Operator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Pow, Sub};

    match operator {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(left / right)
        },
        Pow => {
            let result = left.powf(right);
            if result.is_nan() {
                return Err(RuntimeError::InvalidPower { position });
            }
            Ok(result)
        },
    }
}
