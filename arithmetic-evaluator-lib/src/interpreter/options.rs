/// Tunes how strictly a postfix sequence is evaluated.
///
/// The default accepts everything native floating point accepts:
/// `1/0` evaluates to infinity, and `(2)(3)` evaluates to its last operand.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Fail with `DivisionIntentZero` when `/` or `%` gets a zero right operand.
    pub reject_zero_division: bool,
    /// Fail with `SyntaxError` when more than one value is left once all tokens are consumed.
    pub reject_leftover_operands: bool,
}

impl EvaluationOptions {
    /// Both checks enabled.
    pub fn strict() -> Self {
        EvaluationOptions {
            reject_zero_division: true,
            reject_leftover_operands: true,
        }
    }
}
