use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        host::Host,
        scope::ScopeChain,
        value::{core::Value, ops::apply_binary},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context of the tree-walking evaluator.
///
/// A `Context` executes one program: it owns the scope chain for that run and
/// borrows the host through which all output and automation flows.
///
/// ## Usage
///
/// ```
/// use novolang::interpreter::{
///     capability::CapabilityTable, evaluator::core::Context, host::Host, lexer::tokenize,
///     parser::parse,
/// };
///
/// let program = parse(&tokenize("x = 2\nprint x * 21").unwrap()).unwrap();
///
/// let mut lines: Vec<String> = Vec::new();
/// let mut capabilities = CapabilityTable::new();
/// let mut context = Context::new(Host::new(&mut lines, &mut capabilities));
/// context.execute(&program).unwrap();
/// drop(context);
///
/// assert_eq!(lines, ["42"]);
/// ```
pub struct Context<'h> {
    /// Variable bindings, keyed by name.
    pub scopes: ScopeChain<String>,
    host:       Host<'h>,
}

impl<'h> Context<'h> {
    /// Creates a context with an empty global scope.
    #[must_use]
    pub fn new(host: Host<'h>) -> Self {
        Self { scopes: ScopeChain::new(),
               host }
    }

    /// Executes a program.
    ///
    /// The statements of a root [`Node::Block`] run directly in the global
    /// scope. Any other root node is executed as a single statement.
    ///
    /// # Errors
    /// Stops at the first fatal `RuntimeError`. Output produced before the
    /// error has already reached the host.
    pub fn execute(&mut self, program: &Node) -> EvalResult<()> {
        debug!(backend = "reference", "executing program");
        match program {
            Node::Block { statements, .. } => self.exec_all(statements),
            statement => self.exec(statement),
        }
    }

    /// Executes statements in order in the current scope.
    pub(in crate::interpreter::evaluator) fn exec_all(&mut self, statements: &[Node]) -> EvalResult<()> {
        statements.iter().try_for_each(|statement| self.exec(statement))
    }

    /// Executes a single statement.
    ///
    /// Expression nodes in statement position are evaluated for their errors
    /// and their value is discarded.
    pub fn exec(&mut self, statement: &Node) -> EvalResult<()> {
        match statement {
            Node::Assignment { target, value, .. } => self.exec_assignment(target, value),
            Node::Declaration { target, value, .. } => self.exec_declaration(target, value),
            Node::Print { expr, .. } => self.exec_print(expr),
            Node::AutoCall { function,
                             args,
                             line, } => self.exec_auto_call(function, args, *line),
            Node::If { condition,
                       body,
                       else_body,
                       .. } => self.exec_if(condition, body, else_body.as_deref()),
            Node::Loop { condition, body, .. } => self.exec_loop(condition, body),
            Node::Block { statements, .. } => self.exec_scoped(statements),
            expr => self.eval(expr).map(drop),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Binary operands
    /// are evaluated left to right before the operator is applied.
    ///
    /// A statement node in expression position is executed and evaluates to
    /// [`Value::Null`].
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnresolvedReference`] for unbound names and
    /// [`RuntimeError::TypeMismatch`] for invalid operands.
    pub fn eval(&mut self, expr: &Node) -> EvalResult<Value> {
        match expr {
            Node::NumberLit { value, .. } => Ok(Value::Number(*value)),
            Node::StringLit { value, .. } => Ok(Value::from(value.as_str())),
            Node::BoolLit { value, .. } => Ok(Value::Bool(*value)),
            Node::NullLit { .. } => Ok(Value::Null),
            Node::Identifier { name, line } => self.eval_variable(name, *line),
            Node::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                apply_binary(*op, &left, &right, *line)
            },
            statement => {
                self.exec(statement)?;
                Ok(Value::Null)
            },
        }
    }

    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.scopes
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnresolvedReference { name: name.to_string(),
                                                               line })
    }

    pub(in crate::interpreter::evaluator) const fn host(&mut self) -> &mut Host<'h> {
        &mut self.host
    }
}
