//! # calculator
//!
//! calculator is a small floating-point arithmetic library written in Rust.
//! It provides variadic `add`, `subtract`, `multiply` and `divide`, a checked
//! square root, and an evaluator for single `a OP b` expressions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use tracing::debug;

use crate::interpreter::{evaluator::eval, lexer::tokenize, parser::parse_expression};

/// Variadic arithmetic over `f64` slices.
///
/// Every operation folds its input left to right, seeded by the first
/// element, and maps an empty slice to `0`. Division and square root are the
/// only fallible operations.
///
/// # Responsibilities
/// - Sums, differences, products and quotients of any number of values.
/// - Rejects zero divisors and negative square-root arguments.
pub mod arithmetic;
/// Defines the structure of a parsed expression.
///
/// This module declares the [`ast::Operator`] enum and the
/// [`ast::BinaryExpr`] produced by the parser and consumed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Wraps them in a single [`error::EvalError`] for the expression
///   evaluator.
pub mod error;
/// Orchestrates expression evaluation.
///
/// This module ties together lexing, parsing and evaluation of `a OP b`
/// strings.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use arithmetic::{add, divide, multiply, sqrt, subtract};
pub use ast::Operator;
pub use error::{EvalError, ParseError, RuntimeError};

/// Evaluates a single `operand operator operand` expression.
///
/// Tokens are separated by any amount of whitespace. Operands are decimal
/// numbers with an optional sign and exponent; the operator is one of
/// `+ - * /`.
///
/// # Errors
/// - [`EvalError::Parse`] if the string is not three tokens shaped
///   `number symbol number`.
/// - [`EvalError::UnknownOperator`] if the symbol is not `+ - * /`.
/// - [`EvalError::Runtime`] if the operation fails (division by zero).
///
/// # Examples
/// ```
/// use calculator::{EvalError, evaluate};
///
/// assert_eq!(evaluate("2 * 2").unwrap(), 4.0);
/// assert_eq!(evaluate("  18   /  6 ").unwrap(), 3.0);
///
/// // `&` is punctuation, so it parses, but it names no operator.
/// assert!(matches!(evaluate("100 & 0.1"), Err(EvalError::UnknownOperator { .. })));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    debug!(expression, "evaluating expression");

    let tokens = tokenize(expression)?;
    let expr = parse_expression(&tokens)?;
    eval(&expr).inspect_err(|e| debug!(%expr, error = %e, "evaluation failed"))
}
