/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each carrying a canonical kind, its surface text and the line it
/// starts on. Keywords in every supported language collapse to the same kind
/// here, so nothing downstream knows which language a program was written in.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and line.
/// - Skips comments and whitespace, and counts lines.
/// - Reports the first unexpected character as a lexical error.
pub mod lexer;
/// The keyword table shared by all supported languages.
///
/// Maps every spelling of every keyword to its canonical token kind, and
/// back from a kind to the canonical spelling of a chosen language.
pub mod keywords;
/// Re-synthesizes source text from tokens, optionally translated to another
/// keyword set.
pub mod render;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per grammar
/// rule. It validates the token sequence against the grammar, rewrites
/// counted loops into plain loops, and stops at the first error.
pub mod parser;
/// Runtime values and the operator semantics shared by every backend.
pub mod value;
/// Lexical scopes as an arena of records linked by parent handles.
pub mod scope;
/// Host automation capabilities and the table that resolves their localized
/// names.
pub mod capability;
/// The boundary between a running program and its environment: printed
/// output and automation calls.
pub mod host;
/// The evaluator module executes AST nodes directly.
///
/// This is the reference backend: a tree-walking interpreter over a scope
/// chain. It defines the behavior every other backend must reproduce.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements in source order.
/// - Manages scopes for blocks, conditional branches and loop iterations.
/// - Reports fatal runtime errors with the line they occurred on.
pub mod evaluator;
/// The accelerated backend: a compiler from AST to flat instructions plus a
/// stack machine that runs them.
#[cfg(feature = "accelerated")]
pub mod accelerated;
/// Backend selection and the common execution trait.
pub mod backend;
