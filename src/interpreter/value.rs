/// Operator semantics.
///
/// Implements every binary operator over runtime values. Both evaluator
/// backends call into this module, which keeps their arithmetic, string
/// concatenation and comparison results identical.
pub mod ops;

pub mod core;
