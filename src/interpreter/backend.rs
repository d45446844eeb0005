#[cfg(feature = "accelerated")]
use crate::interpreter::accelerated::vm::Machine;
use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        host::Host,
    },
};

/// Executes a syntax tree against a host.
///
/// Every backend implements the same observable contract: for a given tree
/// they print the same lines, make the same capability calls in the same
/// order, and fail with the same error.
pub trait Engine {
    /// Runs `program` to completion or to its first fatal error.
    fn execute(&mut self, program: &Node) -> EvalResult<()>;
}

impl Engine for Context<'_> {
    fn execute(&mut self, program: &Node) -> EvalResult<()> {
        Context::execute(self, program)
    }
}

#[cfg(feature = "accelerated")]
impl Engine for Machine<'_> {
    fn execute(&mut self, program: &Node) -> EvalResult<()> {
        Machine::execute(self, program)
    }
}

/// Selects which evaluator runs a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Backend {
    /// The tree-walking evaluator.
    Reference,
    /// The bytecode compiler and stack machine.
    #[cfg(feature = "accelerated")]
    Accelerated,
}

impl Backend {
    /// Every backend compiled into this build.
    pub const AVAILABLE: &[Self] = &[Self::Reference,
                                     #[cfg(feature = "accelerated")]
                                     Self::Accelerated];

    /// The accelerated backend when it is compiled in, otherwise the
    /// reference evaluator.
    #[must_use]
    pub const fn preferred() -> Self {
        #[cfg(feature = "accelerated")]
        {
            Self::Accelerated
        }
        #[cfg(not(feature = "accelerated"))]
        {
            Self::Reference
        }
    }

    /// Builds an engine of this kind that talks to `host`.
    #[must_use]
    pub fn engine<'h>(self, host: Host<'h>) -> Box<dyn Engine + 'h> {
        match self {
            Self::Reference => Box::new(Context::new(host)),
            #[cfg(feature = "accelerated")]
            Self::Accelerated => Box::new(Machine::new(host)),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Reference => "reference",
            #[cfg(feature = "accelerated")]
            Self::Accelerated => "accelerated",
        };
        write!(f, "{name}")
    }
}
