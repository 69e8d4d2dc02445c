use tracing::debug;

use crate::{ast::{BinaryExpr, Operator}, error::EvalError};

/// Result type used by the evaluator.
///
/// Evaluation returns either a value of type `T` or an `EvalError` covering
/// parse, operator and arithmetic failures.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a parsed binary expression.
///
/// The operator symbol is resolved first, then both operands are handed to
/// the matching arithmetic operation.
///
/// # Errors
/// - [`EvalError::UnknownOperator`] if the symbol is not `+ - * /`.
/// - [`EvalError::Runtime`] if the operation fails (division by zero).
///
/// # Example
/// ```
/// use calculator::{ast::BinaryExpr, interpreter::evaluator::eval};
///
/// let expr = BinaryExpr { left: 18.0, symbol: "/".into(), right: 6.0 };
/// assert_eq!(eval(&expr).unwrap(), 3.0);
/// ```
pub fn eval(expr: &BinaryExpr) -> EvalResult<f64> {
    let operator: Operator = expr.symbol.parse()?;
    debug!(left = expr.left, %operator, right = expr.right, "applying operator");
    Ok(operator.apply(expr.left, expr.right)?)
}
