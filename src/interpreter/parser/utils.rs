use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_DEPTH, ParseResult},
    },
};

/// Builds the error for a token that does not fit the current rule.
///
/// Reaching the end-of-input marker (or running off the end of the token
/// slice) is reported as [`ParseError::UnexpectedEndOfInput`]; anything else
/// is [`ParseError::UnexpectedToken`].
///
/// # Parameters
/// - `token`: The offending token, or `None` when the stream is exhausted.
/// - `expected`: A short description of what the rule wanted.
pub fn unexpected(token: Option<&Token>, expected: &str) -> ParseError {
    match token {
        Some(token) if token.kind != TokenKind::Eof => {
            ParseError::UnexpectedToken { kind:     token.kind,
                                          text:     token.text.clone(),
                                          expected: expected.to_string(),
                                          line:     token.line, }
        },
        Some(token) => ParseError::UnexpectedEndOfInput { line: token.line },
        None => ParseError::UnexpectedEndOfInput { line: 0 },
    }
}

/// Consumes the punctuation mark `symbol`.
///
/// # Returns
/// The consumed token, so callers can read its line.
///
/// # Errors
/// Returns a `ParseError` if the next token is anything else.
pub(in crate::interpreter::parser) fn expect_punctuation<'a, I>(tokens: &mut Peekable<I>,
                                                                symbol: &str)
                                                                -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|t| t.is_punctuation(symbol)) {
        Some(token) => Ok(token),
        None => Err(unexpected(tokens.peek().copied(), &format!("'{symbol}'"))),
    }
}

/// Consumes the operator `symbol`.
///
/// # Errors
/// Returns a `ParseError` if the next token is anything else.
pub(in crate::interpreter::parser) fn expect_operator<'a, I>(tokens: &mut Peekable<I>,
                                                             symbol: &str)
                                                             -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|t| t.is_operator(symbol)) {
        Some(token) => Ok(token),
        None => Err(unexpected(tokens.peek().copied(), &format!("'{symbol}'"))),
    }
}

/// Parses a plain identifier and returns its name.
///
/// Keywords never reach this point as identifiers: the lexer has already
/// reclassified them.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|t| t.kind == TokenKind::Identifier) {
        Some(token) => Ok(token.text.clone()),
        None => Err(unexpected(tokens.peek().copied(), "identifier")),
    }
}

/// Parses a comma-separated list of items until a closing punctuation mark.
///
/// An immediately encountered closing mark produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing mark.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The punctuation that terminates the list, such as `)`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an item is followed by anything other than `,` or the closing mark.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|t| t.is_punctuation(closing)).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(t) if t.is_punctuation(",") => {},
            Some(t) if t.is_punctuation(closing) => break,
            other => return Err(unexpected(other, &format!("',' or '{closing}'"))),
        }
    }
    Ok(items)
}

/// Fails once `depth` exceeds [`MAX_DEPTH`].
///
/// # Errors
/// Returns [`ParseError::TooDeeplyNested`] reported at `line`.
pub(in crate::interpreter::parser) const fn check_depth(depth: usize, line: usize) -> ParseResult<()> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeeplyNested { line });
    }
    Ok(())
}

/// Skips any run of `;` separators.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|t| t.is_punctuation(";")).is_some() {}
}
