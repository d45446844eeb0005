use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            utils::{check_depth, expect_punctuation, unexpected},
        },
    },
};

/// An expression together with the height of its tree.
type Subtree = (Node, usize);

/// Parses an optional comparison.
///
/// At most one comparison operator is applied, and its right side is a full
/// expression. Chains therefore group to the right: `a < b < c` is
/// `a < (b < c)`.
///
/// The rule is: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" |
/// "!=" | "<>") expression)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the expression within the program.
///
/// # Errors
/// Besides syntax errors, returns
/// [`ParseError::TooDeeplyNested`](crate::error::ParseError::TooDeeplyNested) when
/// `depth` plus the height of the parsed tree exceeds
/// [`MAX_DEPTH`](crate::interpreter::parser::MAX_DEPTH). Long operator
/// chains count as deep as they are long.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    comparison(tokens, depth).map(|(node, _)| node)
}

fn comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    check_depth(depth, tokens.peek().map_or(0, |t| t.line))?;
    let left = additive(tokens, depth)?;

    if let Some((op, line)) = next_operator(tokens, BinaryOperator::is_comparison) {
        let right = comparison(tokens, depth + 1)?;
        return combine(left, op, right, depth, line);
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := term (("+" | "-") term)*`
fn additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = term(tokens, depth)?;
    while let Some((op, line)) =
        next_operator(tokens, |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))
    {
        let right = term(tokens, depth + 1)?;
        left = combine(left, op, right, depth, line)?;
    }
    Ok(left)
}

/// Parses multiplication and division, left-associative.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
fn term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = factor(tokens, depth)?;
    while let Some((op, line)) =
        next_operator(tokens, |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div))
    {
        let right = factor(tokens, depth + 1)?;
        left = combine(left, op, right, depth, line)?;
    }
    Ok(left)
}

/// Parses a literal, a name or a parenthesized expression.
///
/// The rule is: `factor := number | string | identifier | true | false |
/// null | "(" expression ")"`
///
/// # Errors
/// Returns a `ParseError` naming "expression" for any other token.
fn factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.next() else {
        return Err(unexpected(None, "expression"));
    };
    let line = token.line;

    let leaf = match token.kind {
        TokenKind::Number => {
            let value = token.text.parse().map_err(|_| unexpected(Some(token), "number"))?;
            Node::NumberLit { value, line }
        },
        TokenKind::String => Node::StringLit { value: token.text.clone(),
                                               line },
        TokenKind::Identifier => Node::Identifier { name: token.text.clone(),
                                                    line },
        TokenKind::True => Node::BoolLit { value: true,
                                           line },
        TokenKind::False => Node::BoolLit { value: false,
                                            line },
        TokenKind::Null => Node::NullLit { line },
        // Parentheses add no node but still cost a level of recursion.
        TokenKind::Punctuation if token.text == "(" => {
            let inner = comparison(tokens, depth + 1)?;
            expect_punctuation(tokens, ")")?;
            return Ok(inner);
        },
        _ => return Err(unexpected(Some(token), "expression")),
    };
    Ok((leaf, 0))
}

/// Joins two operands under `op`, checking the height of the result.
fn combine(left: Subtree,
           op: BinaryOperator,
           right: Subtree,
           depth: usize,
           line: usize)
           -> ParseResult<Subtree> {
    let ((left, left_height), (right, right_height)) = (left, right);
    let height = left_height.max(right_height) + 1;
    check_depth(depth + height, line)?;

    Ok((Node::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line },
        height))
}

/// Consumes the next token if it is a binary operator accepted by `accept`.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        accept: impl Fn(BinaryOperator) -> bool)
                        -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek()?;
    if token.kind != TokenKind::Operator {
        return None;
    }
    let op = BinaryOperator::from_symbol(&token.text).filter(|op| accept(*op))?;
    let line = token.line;
    tokens.next();
    Some((op, line))
}
