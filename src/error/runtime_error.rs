use crate::ast::BinaryOperator;

/// Represents all fatal errors that can occur during evaluation.
///
/// Recoverable capability failures are not part of this enum: they are
/// reported as output and evaluation continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a name that is not bound in any enclosing scope.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnresolvedReference {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an automation function that has no entry in the capability
    /// table.
    #[error("Error on line {line}: Unknown automation function '{name}'.")]
    UnknownCapability {
        /// The localized function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands it is not defined for.
    #[error("Error on line {line}: Type error: cannot apply '{op}' to {left} and {right}.")]
    TypeMismatch {
        /// The operator.
        op:    BinaryOperator,
        /// Kind of the left operand.
        left:  &'static str,
        /// Kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the line on which the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnresolvedReference { line, .. }
            | Self::UnknownCapability { line, .. }
            | Self::TypeMismatch { line, .. } => *line,
        }
    }
}
