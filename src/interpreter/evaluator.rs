/// Core evaluation logic and context management.
///
/// Contains the runtime context, the program entry point and expression
/// evaluation.
pub mod core;

/// Evaluation of simple statements.
///
/// Assignments, declarations, printing and automation calls.
pub mod statement;

/// Evaluation of control flow.
///
/// Conditionals, loops and nested blocks, each run in its own child scope.
pub mod control;
