use postfixa::{
    error::{ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::eval_tokens, lexer::tokenize},
};

#[test]
fn simple_addition_works() {
    assert_eq!(evaluate("3 4 +").unwrap(), 7.0);
}

#[test]
fn longer_expression_works() {
    // Postfix for `5 + ((1 + 2) * 4) - 3`.
    assert_eq!(evaluate("5 1 2 + 4 * + 3 -").unwrap(), 14.0);
}

#[test]
fn exponentiation_works() {
    assert_eq!(evaluate("2 3 ^").unwrap(), 8.0);
    assert_eq!(evaluate("2 3 ^ 2 ^").unwrap(), 64.0);
}

#[test]
fn negative_and_decimal_operands_work() {
    assert_eq!(evaluate("-3 -4 *").unwrap(), 12.0);
    assert_eq!(evaluate("6.25 2.5 /").unwrap(), 2.5);
    assert_eq!(evaluate("12. 3 +").unwrap(), 15.0);
}

#[test]
fn operand_order_is_preserved() {
    // The most recently pushed value is the right operand.
    assert_eq!(evaluate("10 4 -").unwrap(), 6.0);
    assert_eq!(evaluate("1 8 /").unwrap(), 0.125);
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate("5 1 2 + 4 * + 3 -").unwrap();
    let second = evaluate("5 1 2 + 4 * + 3 -").unwrap();

    assert_eq!(first, second);
}

#[test]
fn leading_operator_is_rejected() {
    let tokens = tokenize("+ 3 4").unwrap();

    assert_eq!(eval_tokens(&tokens),
               Err(RuntimeError::ExpectedOperand { position: 0 }));
    assert!(evaluate("+ 3 4").is_err());
}

#[test]
fn operator_in_second_position_is_rejected() {
    let tokens = tokenize("3 +").unwrap();

    assert_eq!(eval_tokens(&tokens),
               Err(RuntimeError::ExpectedOperand { position: 1 }));
}

#[test]
fn stack_underflow_is_reported() {
    // `1 2 +` reduces to one value; the second `+` has nothing to pair it
    // with.
    let tokens = tokenize("1 2 + +").unwrap();

    assert_eq!(eval_tokens(&tokens),
               Err(RuntimeError::StackUnderflow { position: 3 }));
}

#[test]
fn unknown_symbol_is_rejected() {
    assert_eq!(tokenize("3 4 %"),
               Err(ParseError::InvalidToken { token:    "%".to_string(),
                                              position: 2, }));
    assert!(evaluate("3 4 %").is_err());
}

#[test]
fn malformed_numbers_are_rejected() {
    for word in ["1.2.3", "--5", "3x", ".5", "4-", "1e3"] {
        assert!(evaluate(&format!("{word} 1 +")).is_err(),
                "'{word}' should not classify as an operand");
    }
}

#[test]
fn empty_expression_is_an_error() {
    assert_eq!(eval_tokens(&[]), Err(RuntimeError::EmptyExpression));
    assert!(evaluate("").is_err());
    assert!(evaluate("   \t  ").is_err());
}

#[test]
fn expression_without_operator_is_an_error() {
    let tokens = tokenize("5").unwrap();

    assert_eq!(eval_tokens(&tokens), Err(RuntimeError::MissingOperator));

    let tokens = tokenize("3 4").unwrap();

    assert_eq!(eval_tokens(&tokens), Err(RuntimeError::MissingOperator));
}

#[test]
fn leftover_operands_are_an_error() {
    let tokens = tokenize("1 2 3 +").unwrap();

    assert_eq!(eval_tokens(&tokens),
               Err(RuntimeError::UnconsumedOperands { count: 1 }));
}

#[test]
fn division_by_zero_is_an_error() {
    let tokens = tokenize("4 0 /").unwrap();

    assert_eq!(eval_tokens(&tokens),
               Err(RuntimeError::DivisionByZero { position: 2 }));
}

#[test]
fn power_without_real_result_is_an_error() {
    let tokens = tokenize("-8 0.5 ^").unwrap();

    assert_eq!(eval_tokens(&tokens),
               Err(RuntimeError::InvalidPower { position: 2 }));
}

#[test]
fn errors_name_the_offending_token() {
    let message = evaluate("3 4 %").unwrap_err().to_string();

    assert!(message.contains('%'), "unexpected message: {message}");
}
