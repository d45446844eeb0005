/// Numeric formatting helpers.
///
/// The language has a single number type, `f64`. These helpers decide how such
/// numbers are shown to the user, so that both evaluator backends and the
/// string concatenation rule print numbers the same way.
pub mod num;
