/// Lexical errors.
///
/// Raised by the tokenizer when it meets a character that starts no token.
/// Lexing stops at the first such character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised while building the syntax tree from tokens:
/// unexpected tokens and a token stream that ends too early.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the fatal errors that can be raised during evaluation, such as
/// reading an unbound name or calling an unmapped automation function.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any fatal error produced by running a program.
///
/// Each pipeline stage has its own error family; this enum lets callers handle
/// all of them through one type while still being able to tell the stages
/// apart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tokenizer rejected the source text.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation was aborted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
