mod infix_converter;

use crate::interpreter::error::ExpressionError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use log::debug;

/// Parses lexemes in infix order into tokens in postfix order,
/// which can be evaluated without looking at brackets or precedence.
///
/// # Arguments
///
/// * `infix_lexemes`: The lexemes to parse, in infix order.
///
/// returns: The equivalent postfix tokens.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), arithmetic_evaluator::interpreter::error::ExpressionError> {
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
/// use arithmetic_evaluator::interpreter::parser::parse;
///
/// let postfix_tokens = parse(tokenize("2 + 3 * 4"))?;
/// assert_eq!(postfix_tokens.len(), 5);
/// # Ok(()) }
/// ```
pub fn parse<I, S>(infix_lexemes: I) -> Result<Vec<Token>, ExpressionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let postfix_tokens = infix_to_postfix(infix_lexemes)?;
    debug!("Postfix tokens: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
