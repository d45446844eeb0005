use std::rc::Rc;

use crate::util::num::format_number;

/// Represents a runtime value in the interpreter.
///
/// The language is dynamically typed; every expression evaluates to one of
/// these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A boolean value, produced by literals and comparison operators.
    Bool(bool),
    /// The absence of a value.
    Null,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl Value {
    /// Returns `false` only for `false` and `null`.
    ///
    /// This is the rule used by `if` and `loop` conditions. Numbers and
    /// strings are always truthy, including `0` and `""`.
    ///
    /// # Example
    /// ```
    /// use novolang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Returns a short name for the kind of value, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Null => "null",
        }
    }

    /// Returns `true` if the value is [`Value::Str`].
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(..))
    }
}

/// The printed form of a value.
///
/// Booleans and null always use the fixed glyphs `真`, `假` and `空`,
/// independent of the keyword set the program was written in.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "真"),
            Self::Bool(false) => write!(f, "假"),
            Self::Null => write!(f, "空"),
        }
    }
}
