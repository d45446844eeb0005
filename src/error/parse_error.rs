use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token {kind} '{text}', expected {expected}.")]
    UnexpectedToken {
        /// The kind of the token encountered.
        kind:     TokenKind,
        /// The surface text of the token encountered.
        text:     String,
        /// A description of what the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token stream ended before the construct was complete.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Statements or expressions nest deeper than
    /// [`MAX_DEPTH`](crate::interpreter::parser::MAX_DEPTH) allows.
    #[error("Error on line {line}: Program is nested too deeply.")]
    TooDeeplyNested {
        /// The source line where the limit was exceeded.
        line: usize,
    },
}

impl ParseError {
    /// Returns the line on which the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::TooDeeplyNested { line } => *line,
        }
    }
}
