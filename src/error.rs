/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression string. Parse errors include wrong token counts, words that are
/// neither numbers nor operator symbols, and tokens in the wrong position.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised by the arithmetic operations themselves:
/// division by zero and square roots of negative numbers.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Represents every way [`crate::evaluate`] can fail.
///
/// Parse and runtime failures are wrapped so that `?` can lift them from the
/// parser and the arithmetic operations. An operator symbol that tokenizes
/// correctly but is not one of `+ - * /` is reported separately as
/// [`EvalError::UnknownOperator`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The expression did not have the shape `operand operator operand`.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The operator symbol is not a recognized arithmetic operator.
    #[error("unknown operator '{symbol}', expected one of + - * /")]
    UnknownOperator {
        /// The symbol found in operator position.
        symbol: String,
    },
    /// The arithmetic operation itself failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
