use arithmetic_evaluator::interpreter::error::ExpressionError;

/// English text for every message key the front end shows.
const MESSAGES: [(&str, &str); 5] = [
    ("zero_divide", "Division by zero"),
    ("unclosed_curly", "Unclosed bracket"),
    ("syntax_error", "Syntax error"),
    ("expression_result", "Result: {0}"),
    ("empty_result", "Empty expression"),
];

/// Looks up the message for a key, falling back to the key itself.
pub fn message(key: &str) -> &str {
    MESSAGES
        .iter()
        .find(|(message_key, _)| *message_key == key)
        .map_or(key, |&(_, text)| text)
}

/// Looks up a message and substitutes `{0}` with the given argument.
pub fn format_message(key: &str, argument: impl ToString) -> String {
    message(key).replace("{0}", &argument.to_string())
}

pub fn error_message(error: &ExpressionError) -> &'static str {
    message(error.message_key())
}
