pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod options;
pub mod parser;
pub mod token;

use crate::interpreter::error::ExpressionError;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::options::EvaluationOptions;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use string_builder::Builder;

/// Evaluates the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, e.g. `2 + 3 * 4`.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluate;
///
/// let value = evaluate("(2 + 3) * 4");
/// assert_eq!(value, Ok(20.0));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, ExpressionError> {
    evaluate_with(expression, &EvaluationOptions::default())
}

/// Evaluates the given arithmetic expression with non-default options.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `options`: How strictly to evaluate it.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::error::ExpressionError;
/// use arithmetic_evaluator::interpreter::evaluate_with;
/// use arithmetic_evaluator::interpreter::options::EvaluationOptions;
///
/// let value = evaluate_with("1 / 0", &EvaluationOptions::strict());
/// assert_eq!(value, Err(ExpressionError::DivisionIntentZero));
/// ```
pub fn evaluate_with(
    expression: &str,
    options: &EvaluationOptions,
) -> Result<f64, ExpressionError> {
    let postfix_tokens = convert(expression)?;
    evaluate_postfix(postfix_tokens, options)
}

/// Converts the given input string into the equivalent tokens in postfix order.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent postfix tokens.
pub fn convert(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let lexemes = lexer::tokenize(expression);
    parser::parse(lexemes)
}

/// Converts the given infix expression to postfix notation text.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::to_postfix_notation;
///
/// let postfix = to_postfix_notation("2 + 3 * 4");
/// assert_eq!(postfix, Ok("2 3 4 * +".to_string()));
/// ```
pub fn to_postfix_notation(expression: &str) -> Result<String, ExpressionError> {
    let postfix_tokens = convert(expression)?;
    Ok(postfix_to_string(&postfix_tokens))
}

/// Joins postfix tokens with single spaces.
pub fn postfix_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

/// Reassembles lexemes into the normalized expression they were split from.
///
/// # Arguments
///
/// * `lexemes`: The lexemes to join.
///
/// returns: The lexemes, in order, without separators.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
/// use arithmetic_evaluator::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let lexemes = tokenize("1 + 2,5");
/// let reassembled = tokens_to_string(&lexemes)?;
/// assert_eq!(reassembled, "1+2.5");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string<S: AsRef<str>>(lexemes: &[S]) -> Result<String> {
    let mut builder = Builder::new(lexemes.len());

    for lexeme in lexemes {
        builder.append(lexeme.as_ref());
    }

    builder.string().context("Failed to build token string")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "2+3*4",
    "8-3-2",
    "2,5+1",
    "(2+3)*4",
    "10/4",
    "10 % 4",
    "2*(3+4)*5",
    "100/10/5",
    "7 - 2 * 3 + 1",
    "((1))",
    "1 % ((2 + 3) / 4)",
    " 0,25 * 8 ",
    },
    expected = {
    14.0,
    3.0,
    3.5,
    20.0,
    2.5,
    2.0,
    70.0,
    2.0,
    2.0,
    1.0,
    1.0,
    2.0,
    }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected: f64) {
        assert_eq!(evaluate(expression), Ok(expected));
    }

    #[parameterized(
    expression = {
    "",
    "   ",
    "2+*3",
    "2+",
    "+",
    "1.2.3+4",
    "2+x",
    "(1+2))",
    ")",
    "-5",
    "2^3",
    "(x)",
    "(2+x)",
    },
    expected_error = {
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    ExpressionError::SyntaxError,
    }
    )]
    fn malformed_expression_returns_syntax_error(
        expression: &str,
        expected_error: ExpressionError,
    ) {
        assert_eq!(evaluate(expression), Err(expected_error));
    }

    #[parameterized(expression = { "(2+3", "((1+2)*3", "4*(", "(2+x", "x+(2", "1.2.3*(4" })]
    fn unclosed_bracket_is_reported(expression: &str) {
        assert_eq!(evaluate(expression), Err(ExpressionError::UnclosedBracket));
    }

    #[test]
    fn zero_division_follows_floating_point_by_default() {
        assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
        assert!(evaluate("1%0").unwrap().is_nan());
    }

    #[test]
    fn strict_options_reject_zero_division_and_leftover_operands() {
        let options = EvaluationOptions::strict();

        assert_eq!(
            evaluate_with("1/(2-2)", &options),
            Err(ExpressionError::DivisionIntentZero)
        );
        assert_eq!(evaluate_with("(2)(3)", &options), Err(ExpressionError::SyntaxError));
    }

    #[test]
    fn juxtaposed_numbers_are_one_lexeme() {
        // Whitespace is stripped before splitting, so "2 3" reads as 23.
        assert_eq!(evaluate("2 3"), Ok(23.0));
    }

    #[test]
    fn leftover_operands_return_last_value() {
        assert_eq!(evaluate("(2)(3)"), Ok(3.0));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let expression = "3 * (4 - 1) % 5";

        assert_eq!(evaluate(expression), evaluate(expression));
    }

    #[test]
    fn postfix_notation_is_space_separated() {
        assert_eq!(
            to_postfix_notation("(1 + 2) * 3 - 4 / 5"),
            Ok("1 2 + 3 * 4 5 / -".to_string())
        );
    }

    #[test]
    fn lexemes_regenerate_to_normalized_expression() {
        let expression = "(12 + 3,5) * 4 % 2 / 1";

        let lexemes = lexer::tokenize(expression);
        let regenerated_expression = tokens_to_string(&lexemes).unwrap();

        assert_eq!(regenerated_expression, "(12+3.5)*4%2/1")
    }
}
