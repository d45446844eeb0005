/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl LexError {
    /// Returns the line on which the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } => *line,
        }
    }
}
