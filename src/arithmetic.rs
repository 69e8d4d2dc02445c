use tracing::debug;

use crate::error::RuntimeError;

/// Result type used by the fallible arithmetic operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Folds `values` left to right with `op`, seeded by the first element.
///
/// An empty slice folds to `0.0`.
fn fold_from_first(values: &[f64], op: impl Fn(f64, f64) -> f64) -> f64 {
    values.split_first()
          .map_or(0.0, |(&first, rest)| rest.iter().fold(first, |acc, &x| op(acc, x)))
}

/// Returns the sum of all values.
///
/// An empty slice sums to `0`.
///
/// # Example
/// ```
/// use calculator::arithmetic::add;
///
/// assert_eq!(add(&[1.0, 2.0, 3.5]), 6.5);
/// assert_eq!(add(&[]), 0.0);
/// ```
#[must_use]
pub fn add(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &x| acc + x)
}

/// Subtracts every later value from the first one.
///
/// A single value is returned unchanged; an empty slice yields `0`.
///
/// # Example
/// ```
/// use calculator::arithmetic::subtract;
///
/// assert_eq!(subtract(&[10.0, 3.0, 2.0]), 5.0);
/// assert_eq!(subtract(&[4.0]), 4.0);
/// ```
#[must_use]
pub fn subtract(values: &[f64]) -> f64 {
    fold_from_first(values, |a, b| a - b)
}

/// Returns the product of all values.
///
/// Unlike the mathematical empty product, an empty slice yields `0`.
///
/// # Example
/// ```
/// use calculator::arithmetic::multiply;
///
/// assert_eq!(multiply(&[2.0, -3.5]), -7.0);
/// assert_eq!(multiply(&[]), 0.0);
/// ```
#[must_use]
pub fn multiply(values: &[f64]) -> f64 {
    fold_from_first(values, |a, b| a * b)
}

/// Divides the first value by every later value in turn.
///
/// The first element is the dividend and may be zero. Every later element is
/// a divisor and must not be exactly zero (`-0.0` counts as zero). An empty
/// slice yields `Ok(0.0)`.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] carrying the index of the first
/// zero divisor.
///
/// # Example
/// ```
/// use calculator::{arithmetic::divide, error::RuntimeError};
///
/// assert_eq!(divide(&[100.0, 5.0, 2.0]), Ok(10.0));
/// assert_eq!(divide(&[1.0, 0.0]), Err(RuntimeError::DivisionByZero { index: 1 }));
/// ```
pub fn divide(values: &[f64]) -> RuntimeResult<f64> {
    if let Some(index) = values.iter().skip(1).position(|&x| x == 0.0) {
        let index = index + 1;
        debug!(index, "division by zero");
        return Err(RuntimeError::DivisionByZero { index });
    }

    Ok(fold_from_first(values, |a, b| a / b))
}

/// Computes the principal square root.
///
/// `NaN` is not negative and comes back as `NaN`.
///
/// # Errors
/// Returns [`RuntimeError::Domain`] when `x` is negative.
///
/// # Example
/// ```
/// use calculator::{arithmetic::sqrt, error::RuntimeError};
///
/// assert_eq!(sqrt(9.0), Ok(3.0));
/// assert_eq!(sqrt(-2.0), Err(RuntimeError::Domain { value: -2.0 }));
/// ```
pub fn sqrt(x: f64) -> RuntimeResult<f64> {
    if x < 0.0 {
        debug!(x, "square root of negative number");
        return Err(RuntimeError::Domain { value: x });
    }

    Ok(x.sqrt())
}
