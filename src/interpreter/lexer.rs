use logos::Logos;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::LexError, interpreter::keywords};

/// The canonical classification of a token.
///
/// Keyword kinds are language independent: every supported spelling of a
/// keyword resolves to the same kind through the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Numeric literal such as `42` or `3.14`.
    Number,
    /// String literal; the token text holds the content without quotes.
    String,
    /// A name that is not a keyword.
    Identifier,
    /// `if`
    If,
    /// `else`
    Else,
    /// `loop` / `for`
    Loop,
    /// `print`
    Print,
    /// `def` / `var`
    Def,
    /// `return` (reserved)
    Return,
    /// `while` (reserved)
    While,
    /// `auto`
    Auto,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// One of `== != <> >= <= > < = + - * /`.
    Operator,
    /// One of `( ) , { } ;`.
    Punctuation,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Every keyword kind, in keyword-table column order.
    pub const KEYWORDS: [Self; 11] = [Self::If,
                                      Self::Else,
                                      Self::Loop,
                                      Self::Print,
                                      Self::Def,
                                      Self::Return,
                                      Self::While,
                                      Self::Auto,
                                      Self::True,
                                      Self::False,
                                      Self::Null];

    /// Returns `true` if the kind is produced from a keyword spelling.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self,
                 Self::If
                 | Self::Else
                 | Self::Loop
                 | Self::Print
                 | Self::Def
                 | Self::Return
                 | Self::While
                 | Self::Auto
                 | Self::True
                 | Self::False
                 | Self::Null)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Loop => "LOOP",
            Self::Print => "PRINT",
            Self::Def => "DEF",
            Self::Return => "RETURN",
            Self::While => "WHILE",
            Self::Auto => "AUTO",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::Operator => "OPERATOR",
            Self::Punctuation => "PUNCTUATION",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: a minimal but meaningful unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The canonical kind.
    pub kind: TokenKind,
    /// The surface text. String literals are stored without their quotes.
    pub text: String,
    /// The 1-based line the token starts on.
    pub line: usize,
}

impl Token {
    /// Returns `true` if the token is the operator `symbol`.
    #[must_use]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == symbol
    }

    /// Returns `true` if the token is the punctuation mark `symbol`.
    #[must_use]
    pub fn is_punctuation(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == symbol
    }
}

/// The raw token classes recognized by the scanner, before keyword lookup.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Numeric literal tokens, such as `3` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// Double-quoted strings without escape sequences.
    #[regex(r#""[^"]*""#, allow_greedy = true)]
    String,
    /// Identifiers and keywords in any supported script.
    #[regex(r"[\p{L}_][\p{L}0-9_]*")]
    Word,
    /// Arithmetic, comparison and assignment operators.
    #[regex(r"==|!=|<>|>=|<=|>|<|=|\+|-|\*|/")]
    Operator,
    /// `( ) , { } ;`
    #[regex(r"[(),{};]")]
    Punctuation,
    /// Newlines advance the line counter and are not emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into an ordered sequence of tokens.
///
/// Words are looked up in the keyword table, so `if`, `如果` and `もし` all
/// produce [`TokenKind::If`]. Comments, whitespace and newlines are dropped.
/// The sequence always ends with one [`TokenKind::Eof`] token.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first character that
/// starts no token. No tokens are returned in that case.
///
/// # Example
/// ```
/// use novolang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("如果 (x > 1) 打印 \"大\"").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds[0], TokenKind::If);
/// assert_eq!(kinds[6], TokenKind::Print);
/// assert_eq!(tokens[7].text, "大");
/// assert_eq!(*kinds.last().unwrap(), TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(raw) = lexer.next() {
        let line = lexer.extras.line;

        let Ok(raw) = raw else {
            let character = source[lexer.span().start..].chars()
                                                        .next()
                                                        .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(LexError::UnexpectedCharacter { character, line });
        };

        let slice = lexer.slice();
        let (kind, text) = match raw {
            RawToken::Number => (TokenKind::Number, slice),
            RawToken::String => (TokenKind::String, &slice[1..slice.len() - 1]),
            RawToken::Word => (keywords::lookup(slice).unwrap_or(TokenKind::Identifier), slice),
            RawToken::Operator => (TokenKind::Operator, slice),
            RawToken::Punctuation => (TokenKind::Punctuation, slice),
            RawToken::Comment | RawToken::NewLine | RawToken::Ignored => continue,
        };

        if kind == TokenKind::String {
            lexer.extras.line += text.matches('\n').count();
        }

        tokens.push(Token { kind,
                            text: text.to_string(),
                            line });
    }

    tokens.push(Token { kind: TokenKind::Eof,
                        text: String::new(),
                        line: lexer.extras.line, });

    debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}
