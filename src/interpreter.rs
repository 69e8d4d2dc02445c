/// The evaluator module resolves and applies a parsed expression.
///
/// The evaluator looks up the operator symbol of a [`crate::ast::BinaryExpr`]
/// and dispatches both operands to the matching arithmetic operation.
///
/// # Responsibilities
/// - Rejects operator symbols that are not `+ - * /`.
/// - Propagates arithmetic failures such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression strings.
///
/// The input is split on whitespace and every word is classified as a
/// number or an operator symbol. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts each whitespace-separated word into exactly one token.
/// - Reports words that are neither numbers nor punctuation.
pub mod lexer;
/// The parser module checks the `operand operator operand` shape.
///
/// # Responsibilities
/// - Requires exactly three tokens.
/// - Requires a number, then a symbol, then a number.
pub mod parser;
