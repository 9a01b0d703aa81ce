use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;

/// A classified part of an expression, as it appears in postfix order.
#[derive(Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

impl Token {
    pub fn is_left_bracket(&self) -> bool {
        matches!(self, Token::Operator(Operator::LeftBracket))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Parses a lexeme as a number literal.
///
/// Only digits, decimal points and exponent markers are accepted, so words that
/// `f64` would otherwise understand (`inf`, `NaN`) are not numbers here.
pub fn parse_number(lexeme: &str) -> Option<f64> {
    let is_numeric = lexeme
        .chars()
        .all(|character| character.is_ascii_digit() || matches!(character, '.' | 'e' | 'E'));
    if !is_numeric {
        return None;
    }
    lexeme.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    lexeme = { "2", "2.5", ".5", "5.", "1e3", "007" },
    expected = { 2.0, 2.5, 0.5, 5.0, 1000.0, 7.0 }
    )]
    fn number_lexeme_is_parsed(lexeme: &str, expected: f64) {
        assert_eq!(parse_number(lexeme), Some(expected));
    }

    #[parameterized(lexeme = { "", ".", "1.2.3", "inf", "NaN", "x", "e5", "2a" })]
    fn malformed_lexeme_is_not_a_number(lexeme: &str) {
        assert_eq!(parse_number(lexeme), None);
    }

    #[test]
    fn tokens_display_like_their_source() {
        assert_eq!(Token::Number(2.5).to_string(), "2.5");
        assert_eq!(Token::Operator(Operator::Modulo).to_string(), "%");
    }
}
