use thiserror::Error;

/// The ways evaluating an expression can fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum ExpressionError {
    /// Only raised when zero divisors are rejected, see
    /// [`EvaluationOptions::reject_zero_division`](crate::interpreter::options::EvaluationOptions).
    #[error("division by zero")]
    DivisionIntentZero,
    #[error("unclosed bracket")]
    UnclosedBracket,
    #[error("syntax error")]
    SyntaxError,
}

impl ExpressionError {
    /// The key a presentation layer looks the human-readable message up by.
    pub fn message_key(&self) -> &'static str {
        match self {
            ExpressionError::DivisionIntentZero => "zero_divide",
            ExpressionError::UnclosedBracket => "unclosed_curly",
            ExpressionError::SyntaxError => "syntax_error",
        }
    }
}
