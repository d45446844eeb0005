use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression, parse_if, parse_loop},
            utils::{
                check_depth, expect_operator, expect_punctuation, parse_comma_separated,
                parse_identifier, unexpected,
            },
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` statement,
/// - a `loop` statement,
/// - a `print` statement,
/// - a declaration (`def name = value`),
/// - an automation call (`auto name(args)`),
/// - an assignment (`name = value`).
///
/// The leading token decides the rule. A bare expression is not a
/// statement, so an identifier must be followed by `=`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a statement.
/// - `depth`: Nesting depth of the statement; `0` at program level.
///
/// # Returns
/// A parsed statement [`Node`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(unexpected(None, "statement"));
    };
    let line = token.line;
    check_depth(depth, line)?;

    match token.kind {
        TokenKind::If => {
            tokens.next();
            parse_if(tokens, line, depth)
        },
        TokenKind::Loop => {
            tokens.next();
            parse_loop(tokens, line, depth)
        },
        TokenKind::Print => {
            tokens.next();
            let expr = parse_expression(tokens, depth + 1)?;
            Ok(Node::Print { expr: Box::new(expr),
                             line })
        },
        TokenKind::Def => {
            tokens.next();
            parse_declaration(tokens, line, depth)
        },
        TokenKind::Auto => {
            tokens.next();
            parse_auto_call(tokens, line, depth)
        },
        TokenKind::Identifier => parse_assignment(tokens, depth),
        _ => Err(unexpected(Some(token), "statement")),
    }
}

/// Parses `name = value`.
///
/// Used both for assignment statements and for the init and step clauses of
/// a counted loop.
///
/// # Errors
/// Returns a `ParseError` if the identifier or `=` is missing, or if the
/// value fails to parse.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = tokens.peek().map_or(0, |t| t.line);
    let target = parse_identifier(tokens)?;
    expect_operator(tokens, "=")?;
    let value = parse_expression(tokens, depth + 1)?;

    Ok(Node::Assignment { target,
                          value: Box::new(value),
                          line })
}

/// Parses the remainder of `def name = value` after the keyword.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                            line: usize,
                            depth: usize)
                            -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_identifier(tokens)?;
    expect_operator(tokens, "=")?;
    let value = parse_expression(tokens, depth + 1)?;

    Ok(Node::Declaration { target,
                           value: Box::new(value),
                           line })
}

/// Parses the remainder of `auto name(arg, ...)` after the keyword.
///
/// The function name is kept exactly as written; resolving it against the
/// capability table happens at run time.
fn parse_auto_call<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let function = parse_identifier(tokens)?;
    expect_punctuation(tokens, "(")?;
    let args = parse_comma_separated(tokens, |tokens| parse_expression(tokens, depth + 1), ")")?;

    Ok(Node::AutoCall { function,
                        args,
                        line })
}
