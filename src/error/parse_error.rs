/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The expression contained nothing but whitespace.
    #[error("empty expression, expected 'operand operator operand'")]
    EmptyExpression,
    /// The expression did not split into exactly three tokens.
    #[error("expected 3 tokens ('operand operator operand') but found {found}")]
    TokenCount {
        /// The number of whitespace-separated tokens found.
        found: usize,
    },
    /// A whitespace-separated word is neither a number nor an operator symbol.
    #[error("malformed token '{token}'")]
    MalformedToken {
        /// The offending word.
        token: String,
    },
    /// A well-formed token appeared where a different kind was required.
    #[error("unexpected token '{token}' at position {position}, expected {expected}")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Zero-based index of the token in the expression.
        position: usize,
        /// What the parser wanted at this position.
        expected: &'static str,
    },
}
