use crate::interpreter::operator::Operator;
use std::mem;

/// Strips all whitespace and turns decimal commas into decimal points.
pub fn normalize(expression: &str) -> String {
    expression
        .chars()
        .filter(|character| !character.is_whitespace())
        .map(|character| if character == ',' { '.' } else { character })
        .collect()
}

/// Splits an expression into lexemes.
///
/// Every operator or bracket becomes a lexeme of its own, everything between
/// them is kept together as a candidate number. Lexemes are never empty, and
/// whether a candidate really is a number is left to the parser.
///
/// # Arguments
///
/// * `expression`: The raw expression, as typed.
///
/// returns: The lexemes of the normalized expression, in order.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
///
/// let lexemes = tokenize("2,5 * (1+x)");
/// assert_eq!(lexemes, vec!["2.5", "*", "(", "1", "+", "x", ")"]);
/// ```
pub fn tokenize(expression: &str) -> Vec<String> {
    let mut lexemes = vec![];
    let mut candidate = String::new();

    for character in normalize(expression).chars() {
        if Operator::is_symbol(character) {
            if !candidate.is_empty() {
                lexemes.push(mem::take(&mut candidate));
            }
            lexemes.push(character.to_string());
        } else {
            candidate.push(character);
        }
    }
    if !candidate.is_empty() {
        lexemes.push(candidate);
    }

    lexemes
}
