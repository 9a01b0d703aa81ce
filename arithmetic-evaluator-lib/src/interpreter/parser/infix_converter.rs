use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::Operator;
use crate::interpreter::token::{parse_number, Token};
use log::trace;

/// Reorders infix lexemes into postfix tokens using the shunting-yard algorithm.
///
/// Operators of equal precedence are left-associative. A malformed lexeme does not
/// stop the conversion: the first such error is kept while the remaining brackets
/// are still matched, so an unclosed bracket anywhere is reported ahead of it.
pub(crate) fn infix_to_postfix<I, S>(lexemes: I) -> Result<Vec<Token>, ExpressionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut operators: Vec<Operator> = vec![];
    let mut output: Vec<Token> = vec![];

    let mut malformed: Option<ExpressionError> = None;

    for lexeme in lexemes {
        if let Err(error) = parse_lexeme(&mut operators, &mut output, lexeme.as_ref()) {
            trace!("Malformed lexeme {:?}", lexeme.as_ref());
            malformed.get_or_insert(error);
        }
    }

    transfer_leftover_operators(&mut operators, &mut output);

    if output.iter().any(Token::is_left_bracket) {
        return Err(ExpressionError::UnclosedBracket);
    }
    if let Some(error) = malformed {
        return Err(error);
    }

    Ok(output)
}

fn parse_lexeme(
    operators: &mut Vec<Operator>,
    output: &mut Vec<Token>,
    lexeme: &str,
) -> Result<(), ExpressionError> {
    if let Some(value) = parse_number(lexeme) {
        output.push(Token::Number(value));
        return Ok(());
    }

    let operator = lexeme
        .chars()
        .next()
        .and_then(Operator::find)
        .ok_or(ExpressionError::SyntaxError)?;
    trace!("Operator {} with stack {:?}", operator, operators);

    match operator {
        Operator::LeftBracket => operators.push(operator),
        Operator::RightBracket => parse_right_bracket(operators, output)?,
        operator => parse_operator(operators, output, operator),
    }
    Ok(())
}

fn transfer_leftover_operators(operators: &mut Vec<Operator>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop() {
        output.push(Token::Operator(operator));
    }
}

fn parse_right_bracket(
    operators: &mut Vec<Operator>,
    output: &mut Vec<Token>,
) -> Result<(), ExpressionError> {
    loop {
        match operators.pop() {
            None => return Err(ExpressionError::SyntaxError),
            // Discard the matching bracket.
            Some(Operator::LeftBracket) => return Ok(()),
            Some(operator) => output.push(Token::Operator(operator)),
        }
    }
}

fn parse_operator(operators: &mut Vec<Operator>, output: &mut Vec<Token>, operator: Operator) {
    while let Some(top_of_operator_stack) = operators.last() {
        if *top_of_operator_stack == Operator::LeftBracket
            || !operator.precedence_le(top_of_operator_stack)
        {
            break;
        }
        output.push(Token::Operator(*top_of_operator_stack));
        operators.pop();
    }

    operators.push(operator);
}
