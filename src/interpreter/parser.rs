/// Entry point, expressions and control flow.
///
/// Contains the program-level driver, the expression entry point and the
/// `if` and `loop` rules, including the rewrite of counted loops.
pub mod core;

/// Arithmetic and comparison expressions.
///
/// Implements the precedence ladder from comparisons down to literal factors.
pub mod binary;

/// Statement bodies.
///
/// Parses braced statement lists and the single-statement shorthand.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectations, identifier parsing, argument lists and error
/// construction shared by the other rules.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading keyword to declarations, assignments, printing
/// and automation calls.
pub mod statement;

pub use self::core::{MAX_DEPTH, ParseResult, parse};
