//! # novolang
//!
//! novolang is a small scripting language whose keywords can be written in
//! Chinese, English, Japanese, Korean or Russian, mixed freely within one
//! program. Source text is tokenized, parsed into a syntax tree and executed
//! by one of two interchangeable backends: a tree-walking evaluator and a
//! bytecode compiler with a stack machine.
//!
//! ```
//! let outcome = novolang::run("定义 a = 10\nif (a > 5) { 打印(\"big\") }");
//!
//! assert_eq!(outcome.output, ["big"]);
//! assert!(outcome.result.is_ok());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Node,
    error::{Error, RuntimeError},
    interpreter::{
        backend::Backend,
        capability::CapabilityTable,
        host::{Host, Output},
        lexer::tokenize,
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the binary operators that
/// represent the syntactic structure of a program as a tree. The tree is
/// built by the parser, traversed by the evaluator, compiled by the
/// accelerated backend and can be exchanged as JSON.
///
/// # Responsibilities
/// - Defines expression and statement nodes for all language constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Provides the serialized interchange form.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all fatal errors that can be raised while running a
/// program. Every message names the source line it refers to.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Wraps them in a single crate-level [`Error`](error::Error).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, scopes and the host boundary.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, backends and host.
/// - Provides entry points for each pipeline stage.
pub mod interpreter;
/// General utilities shared across the interpreter.
///
/// # Responsibilities
/// - Formats numbers the way programs print them.
pub mod util;

/// Runs programs with a chosen backend and set of capabilities.
///
/// # Examples
/// ```
/// use novolang::{
///     Interpreter,
///     interpreter::{
///         backend::Backend,
///         capability::{Action, CapabilityTable},
///         value::core::Value,
///     },
/// };
///
/// let mut capabilities = CapabilityTable::new();
/// capabilities.provide(Action::Click, |_: &[Value]| Ok(Value::Null));
///
/// let mut interpreter = Interpreter::new().with_backend(Backend::Reference)
///                                         .with_capabilities(capabilities);
/// let outcome = interpreter.run("auto 点击(1, 2)\nprint \"done\"");
///
/// assert_eq!(outcome.output, ["done"]);
/// ```
#[derive(Debug)]
pub struct Interpreter {
    backend:      Backend,
    capabilities: CapabilityTable,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with the preferred backend and the default
    /// capability table.
    #[must_use]
    pub fn new() -> Self {
        Self { backend:      Backend::preferred(),
               capabilities: CapabilityTable::default(), }
    }

    /// Selects the backend.
    #[must_use]
    pub const fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Replaces the capability table.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: CapabilityTable) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// The selected backend.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Mutable access to the capability table, for registering providers.
    pub const fn capabilities_mut(&mut self) -> &mut CapabilityTable {
        &mut self.capabilities
    }

    /// Executes an already parsed program, streaming printed lines to
    /// `output`.
    pub fn execute(&mut self, program: &Node, output: &mut dyn Output) -> Result<(), RuntimeError> {
        debug!(backend = %self.backend, "selected backend");
        let host = Host::new(output, &mut self.capabilities);
        self.backend.engine(host).execute(program)
    }

    /// Tokenizes, parses and executes `source`, streaming printed lines to
    /// `output`.
    ///
    /// Lines printed before a fatal runtime error have already been written
    /// when the error is returned.
    pub fn run_with(&mut self, source: &str, output: &mut dyn Output) -> Result<(), Error> {
        let tokens = tokenize(source)?;
        let program = parse(&tokens)?;
        self.execute(&program, output)?;
        Ok(())
    }

    /// Runs `source` and collects everything it prints.
    pub fn run(&mut self, source: &str) -> RunOutcome {
        let mut output: Vec<String> = Vec::new();
        let result = self.run_with(source, &mut output);
        if let Err(e) = &result {
            debug!(line = e.line(), lines_printed = output.len(), "program failed");
        }
        RunOutcome { output, result }
    }
}

/// The observable result of running a program.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Printed lines, in order, including capability notices. Lines printed
    /// before a fatal error are kept.
    pub output: Vec<String>,
    /// How the run ended.
    pub result: Result<(), Error>,
}

/// Which stage, if any, stopped a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The program ran to its end.
    Success,
    /// The tokenizer rejected the source; nothing was executed.
    LexError,
    /// The parser rejected the source; nothing was executed.
    ParseError,
    /// Execution stopped at a fatal error after printing any earlier output.
    RuntimeError,
}

impl RunOutcome {
    /// Classifies [`result`](Self::result).
    #[must_use]
    pub const fn status(&self) -> Status {
        match &self.result {
            Ok(()) => Status::Success,
            Err(Error::Lex(_)) => Status::LexError,
            Err(Error::Parse(_)) => Status::ParseError,
            Err(Error::Runtime(_)) => Status::RuntimeError,
        }
    }
}

/// Runs `source` with the preferred backend and default capabilities.
///
/// # Examples
/// ```
/// use novolang::{Status, run};
///
/// assert_eq!(run("print 1 / 0").output, ["0"]);
/// assert_eq!(run("print \"a\" + 1").output, ["a1"]);
///
/// // Unknown name: output before the error is kept.
/// let outcome = run("print 1\nprint y");
/// assert_eq!(outcome.output, ["1"]);
/// assert_eq!(outcome.status(), Status::RuntimeError);
/// ```
#[must_use]
pub fn run(source: &str) -> RunOutcome {
    Interpreter::new().run(source)
}
