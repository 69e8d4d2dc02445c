use crate::{ast::BinaryExpr, error::ParseError, interpreter::lexer::Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream into a binary expression.
///
/// Grammar: `expression := Number Symbol Number`
///
/// The symbol is not checked against the known operators here; any run of
/// punctuation is accepted and resolved by the evaluator.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] for no tokens.
/// - [`ParseError::TokenCount`] for any count other than three.
/// - [`ParseError::UnexpectedToken`] for a token of the wrong kind, reported
///   at the first offending position.
///
/// # Example
/// ```
/// use calculator::interpreter::{lexer::tokenize, parser::parse_expression};
///
/// let expr = parse_expression(&tokenize("1 + 1.5").unwrap()).unwrap();
/// assert_eq!((expr.left, expr.symbol.as_str(), expr.right), (1.0, "+", 1.5));
///
/// assert!(parse_expression(&tokenize("+ 1 2").unwrap()).is_err());
/// ```
pub fn parse_expression(tokens: &[Token]) -> ParseResult<BinaryExpr> {
    match tokens {
        [] => Err(ParseError::EmptyExpression),
        [left, symbol, right] => Ok(BinaryExpr { left:   expect_operand(left, 0)?,
                                                 symbol: expect_symbol(symbol, 1)?,
                                                 right:  expect_operand(right, 2)?, }),
        _ => Err(ParseError::TokenCount { found: tokens.len() }),
    }
}

fn expect_operand(token: &Token, position: usize) -> ParseResult<f64> {
    match token {
        Token::Number(n) => Ok(*n),
        Token::Symbol(_) => Err(unexpected(token, position, "a number")),
    }
}

fn expect_symbol(token: &Token, position: usize) -> ParseResult<String> {
    match token {
        Token::Symbol(s) => Ok(s.clone()),
        Token::Number(_) => Err(unexpected(token, position, "an operator")),
    }
}

fn unexpected(token: &Token, position: usize, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string(),
                                  position,
                                  expected }
}
