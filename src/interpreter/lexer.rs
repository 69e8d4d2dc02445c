use logos::Logos;

use crate::{error::ParseError, interpreter::parser::ParseResult};

/// Represents a lexical token of an expression.
///
/// Every whitespace-separated word of the input becomes exactly one token.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `-1.5`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// A run of ASCII punctuation in operator position, such as `+` or `&`.
    #[regex(r"[!-/:-@\[-`{-~]+", |lex| lex.slice().to_string())]
    Symbol(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(s) => f.write_str(s),
        }
    }
}

/// Splits `source` on whitespace and lexes every word into one token.
///
/// # Errors
/// Returns [`ParseError::MalformedToken`] for a word that does not lex as a
/// single number or symbol, e.g. `abc`, `1.2.3` or `2*2`.
///
/// # Example
/// ```
/// use calculator::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("  1 +   -2.5 ").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Symbol("+".into()), Token::Number(-2.5)]);
/// assert!(tokenize("1 plus 2").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    source.split_whitespace().map(lex_word).collect()
}

/// Lexes a single word, requiring the first token to span all of it.
fn lex_word(word: &str) -> ParseResult<Token> {
    let mut lexer = Token::lexer(word);
    let first = lexer.next();
    match (first, lexer.next()) {
        (Some(Ok(token)), None) => Ok(token),
        _ => Err(ParseError::MalformedToken { token: word.to_string() }),
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
