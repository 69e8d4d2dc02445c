use std::str::FromStr;

use crate::{
    arithmetic::{self, RuntimeResult},
    error::EvalError,
};

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Every operator the evaluator understands.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the symbol this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// # Errors
    /// Only [`Operator::Div`] can fail, with
    /// [`crate::error::RuntimeError::DivisionByZero`] when `right` is zero.
    ///
    /// # Example
    /// ```
    /// use calculator::ast::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(1.0, 6.0), Ok(-5.0));
    /// assert!(Operator::Div.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64) -> RuntimeResult<f64> {
        let operands = [left, right];
        match self {
            Self::Add => Ok(arithmetic::add(&operands)),
            Self::Sub => Ok(arithmetic::subtract(&operands)),
            Self::Mul => Ok(arithmetic::multiply(&operands)),
            Self::Div => arithmetic::divide(&operands),
        }
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or_else(|| EvalError::UnknownOperator { symbol: symbol.to_string() })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed `operand operator operand` expression.
///
/// The operator is kept as its raw symbol: the parser only checks that it
/// is punctuation, and the evaluator decides whether it names an
/// [`Operator`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// First operand.
    pub left:   f64,
    /// Operator symbol as written.
    pub symbol: String,
    /// Second operand.
    pub right:  f64,
}

impl std::fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.symbol, self.right)
    }
}
