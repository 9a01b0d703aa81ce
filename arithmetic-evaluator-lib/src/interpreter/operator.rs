use std::fmt;
use std::fmt::Formatter;

/// An arithmetic operator, or one of the brackets that group them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    LeftBracket,
    RightBracket,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

/// Every operator the interpreter knows, in lookup order.
pub const OPERATORS: [Operator; 7] = [
    Operator::LeftBracket,
    Operator::RightBracket,
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Modulo,
];

impl Operator {
    /// Finds the operator written as the given character, if there is one.
    pub fn find(symbol: char) -> Option<Operator> {
        OPERATORS
            .iter()
            .copied()
            .find(|operator| operator.symbol() == symbol)
    }

    pub fn is_symbol(character: char) -> bool {
        Self::find(character).is_some()
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::LeftBracket => '(',
            Operator::RightBracket => ')',
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
        }
    }

    /// Brackets share the sentinel precedence 0, they never compete with real operators.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::LeftBracket | Operator::RightBracket => 0,
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 2,
        }
    }

    pub(crate) fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }

    /// Whether a zero right operand makes this operator a division by zero.
    pub fn divides(&self) -> bool {
        matches!(self, Operator::Divide | Operator::Modulo)
    }

    /// Applies the operator to its operands.
    ///
    /// The operand that was pushed last comes first, matching the order
    /// in which they are popped off a value stack.
    ///
    /// # Arguments
    ///
    /// * `right`: The right-hand operand.
    /// * `left`: The left-hand operand.
    ///
    /// returns: The result, or `None` for brackets, which can't be applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use arithmetic_evaluator::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Subtract.reduce(3.0, 8.0), Some(5.0));
    /// assert_eq!(Operator::LeftBracket.reduce(3.0, 8.0), None);
    /// ```
    pub fn reduce(&self, right: f64, left: f64) -> Option<f64> {
        match self {
            Operator::LeftBracket | Operator::RightBracket => None,
            Operator::Add => Some(left + right),
            Operator::Subtract => Some(left - right),
            Operator::Multiply => Some(left * right),
            Operator::Divide => Some(left / right),
            Operator::Modulo => Some(left % right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
