use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect_punctuation, skip_separators},
        },
    },
};

/// Parses the body of an `if`, `else` or `loop`.
///
/// A body is either a braced list of statements or exactly one statement
/// without braces. Inside braces, `;` separators are skipped.
///
/// Grammar: `block := "{" statement* "}" | statement`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the body's statements.
///
/// # Returns
/// The statements of the body, in order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token> + Clone
{
    if tokens.next_if(|t| t.is_punctuation("{")).is_none() {
        return Ok(vec![parse_statement(tokens, depth)?]);
    }

    let mut statements = Vec::new();
    loop {
        skip_separators(tokens);
        if tokens.peek().is_some_and(|t| t.is_punctuation("}")) {
            break;
        }
        statements.push(parse_statement(tokens, depth)?);
    }
    expect_punctuation(tokens, "}")?;

    Ok(statements)
}
