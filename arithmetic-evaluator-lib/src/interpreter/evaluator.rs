use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::Operator;
use crate::interpreter::options::EvaluationOptions;
use crate::interpreter::token::Token;
use log::{debug, trace};

/// Evaluates tokens in postfix order to a single number.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens as produced by [`parse`](crate::interpreter::parser::parse).
/// * `options`: How strictly to treat zero divisors and leftover operands.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), arithmetic_evaluator::interpreter::error::ExpressionError> {
/// use arithmetic_evaluator::interpreter::evaluator::evaluate_postfix;
/// use arithmetic_evaluator::interpreter::operator::Operator;
/// use arithmetic_evaluator::interpreter::options::EvaluationOptions;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let tokens = vec![Token::Number(8.0), Token::Number(3.0), Token::Operator(Operator::Subtract)];
/// let value = evaluate_postfix(tokens, &EvaluationOptions::default())?;
/// assert_eq!(value, 5.0);
/// # Ok(()) }
/// ```
pub fn evaluate_postfix<I>(
    postfix_tokens: I,
    options: &EvaluationOptions,
) -> Result<f64, ExpressionError>
where
    I: IntoIterator<Item = Token>,
{
    let mut values: Vec<f64> = vec![];

    for token in postfix_tokens {
        match token {
            Token::Number(value) => values.push(value),
            Token::Operator(operator) => {
                let value = apply_operator(&mut values, operator, options)?;
                trace!("Applied {} giving {}", operator, value);
                values.push(value);
            }
        }
    }

    if options.reject_leftover_operands && values.len() > 1 {
        return Err(ExpressionError::SyntaxError);
    }
    let value = values.pop().ok_or(ExpressionError::SyntaxError)?;
    debug!("Evaluated to {}", value);
    Ok(value)
}

fn apply_operator(
    values: &mut Vec<f64>,
    operator: Operator,
    options: &EvaluationOptions,
) -> Result<f64, ExpressionError> {
    let right = values.pop().ok_or(ExpressionError::SyntaxError)?;
    let left = values.pop().ok_or(ExpressionError::SyntaxError)?;

    if options.reject_zero_division && operator.divides() && right == 0.0 {
        return Err(ExpressionError::DivisionIntentZero);
    }

    operator
        .reduce(right, left)
        .ok_or(ExpressionError::SyntaxError)
}
