/// Represents all errors raised by the arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("division by zero is undefined (divisor at index {index})")]
    DivisionByZero {
        /// Index of the zero divisor in the input sequence.
        index: usize,
    },
    /// The argument lies outside the domain of the operation.
    #[error("square root of negative number {value} is undefined")]
    Domain {
        /// The rejected argument.
        value: f64,
    },
}
