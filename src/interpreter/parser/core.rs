use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_comparison,
            block::parse_block,
            statement::{parse_assignment, parse_statement},
            utils::{expect_punctuation, skip_separators},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of statements and expressions a program may have.
///
/// Deeper programs are rejected while parsing, so evaluating, compiling and
/// dropping a tree never recurses further than this.
pub const MAX_DEPTH: usize = 256;

/// Parses a whole program.
///
/// Statements are read until the end-of-input marker. The root of the
/// returned tree is always a [`Node::Block`]. `;` may separate statements but
/// is never required.
///
/// # Errors
/// Returns the first `ParseError` encountered; no recovery is attempted.
///
/// # Example
/// ```
/// use novolang::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("var a = 10; print(a)").unwrap();
/// let Node::Block { statements, .. } = parse(&tokens).unwrap() else { panic!() };
///
/// assert!(matches!(statements[0], Node::Declaration { .. }));
/// assert!(matches!(statements[1], Node::Print { .. }));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_separators(&mut iter);
        match iter.peek() {
            None => break,
            Some(token) if token.kind == TokenKind::Eof => break,
            Some(_) => statements.push(parse_statement(&mut iter, 0)?),
        }
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Node::Block { statements,
                     line: 1 })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// comparison level and descends through the precedence hierarchy.
///
/// Grammar: `expression := additive (cmp_op expression)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the expression within the program.
///
/// # Errors
/// Returns [`ParseError::TooDeeplyNested`] when the expression would reach
/// past [`MAX_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_comparison(tokens, depth)
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition> <block>
///     else <block>
/// ```
/// There is no `else if` form; an `else` body that is itself an `if`
/// statement nests naturally through the single-statement block rule.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
/// - `depth`: Nesting depth of the `if` statement.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth + 1)?;
    let body = parse_block(tokens, depth + 1)?;

    let else_body = match tokens.next_if(|t| t.kind == TokenKind::Else) {
        Some(_) => Some(parse_block(tokens, depth + 1)?),
        None => None,
    };

    Ok(Node::If { condition: Box::new(condition),
                  body,
                  else_body,
                  line })
}

/// Parses a `loop` statement.
///
/// Two forms exist:
/// ```text
///     loop (<condition>) <block>
///     loop (<name> = <expr>; <condition>; <name> = <expr>) <block>
/// ```
/// The counted form is chosen when the token after `(` is an identifier
/// immediately followed by `=`. It is rewritten into
/// `Block[init, Loop(condition, body ++ [step])]`, so the counter lives in the
/// block's scope and is gone once the loop ends.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `loop` keyword.
/// - `line`: Line number of the `loop` token.
/// - `depth`: Nesting depth of the `loop` statement.
pub fn parse_loop<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect_punctuation(tokens, "(")?;

    let mut lookahead = tokens.clone();
    let counted = lookahead.next().is_some_and(|t| t.kind == TokenKind::Identifier)
                  && lookahead.next().is_some_and(|t| t.is_operator("="));

    if !counted {
        let condition = parse_expression(tokens, depth + 1)?;
        expect_punctuation(tokens, ")")?;
        let body = parse_block(tokens, depth + 1)?;

        return Ok(Node::Loop { condition: Box::new(condition),
                               body,
                               line });
    }

    // The rewrite puts the loop one level below its block.
    let inner = depth + 2;
    let init = parse_assignment(tokens, depth + 1)?;
    expect_punctuation(tokens, ";")?;
    let condition = parse_expression(tokens, inner)?;
    expect_punctuation(tokens, ";")?;
    let step = parse_assignment(tokens, inner)?;
    expect_punctuation(tokens, ")")?;

    let mut body = parse_block(tokens, inner)?;
    body.push(step);

    let looped = Node::Loop { condition: Box::new(condition),
                              body,
                              line };

    Ok(Node::Block { statements: vec![init, looped],
                     line })
}
