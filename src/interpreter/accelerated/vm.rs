use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        accelerated::{
            codegen::compile,
            ir::{Instr, Program, Symbol},
        },
        evaluator::core::EvalResult,
        host::Host,
        scope::{ScopeChain, Unbound},
        value::{core::Value, ops::apply_binary},
    },
};

/// A stack machine for compiled programs.
///
/// The machine holds an operand stack and a scope chain keyed by interned
/// symbol. Every observable effect goes through the same [`Host`] the
/// tree-walking evaluator uses.
pub struct Machine<'h> {
    stack:  Vec<Value>,
    scopes: ScopeChain<Symbol>,
    host:   Host<'h>,
}

impl<'h> Machine<'h> {
    #[must_use]
    pub fn new(host: Host<'h>) -> Self {
        Self { stack: Vec::with_capacity(64),
               scopes: ScopeChain::new(),
               host }
    }

    /// Compiles and runs a syntax tree.
    ///
    /// # Errors
    /// Stops at the first fatal `RuntimeError`.
    pub fn execute(&mut self, program: &Node) -> EvalResult<()> {
        let compiled = compile(program);
        self.run(&compiled)
    }

    /// Runs a compiled program from its first instruction to its end.
    ///
    /// # Errors
    /// Stops at the first fatal `RuntimeError`; output already printed stays
    /// printed.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        debug!(backend = "accelerated", "executing program");
        let mut ip = 0;

        while let Some(&instr) = program.code.get(ip) {
            ip += 1;

            match instr {
                Instr::Const(index) => {
                    let value = program.constants.get(index).cloned().unwrap_or(Value::Null);
                    self.stack.push(value);
                },
                Instr::Load { symbol, line } => {
                    let Some(value) = self.scopes.get(&symbol) else {
                        return Err(RuntimeError::UnresolvedReference { name: program.name(symbol)
                                                                                    .to_string(),
                                                                       line });
                    };
                    self.stack.push(value.clone());
                },
                Instr::Store(symbol) => {
                    let value = self.pop();
                    if let Err(Unbound(value)) = self.scopes.assign(&symbol, value) {
                        self.scopes.define(symbol, value);
                    }
                },
                Instr::Define(symbol) => {
                    let value = self.pop();
                    self.scopes.define(symbol, value);
                },
                Instr::Binary { op, line } => {
                    let right = self.pop();
                    let left = self.pop();
                    self.stack.push(apply_binary(op, &left, &right, line)?);
                },
                Instr::Print => {
                    let value = self.pop();
                    self.host.print(&value);
                },
                Instr::Invoke { name, argc, line } => {
                    let args = self.stack.split_off(self.stack.len().saturating_sub(argc));
                    self.host.invoke(program.name(name), &args, line)?;
                },
                Instr::EnterScope => {
                    self.scopes.enter();
                },
                Instr::ExitScope => self.scopes.exit(),
                Instr::Jump(target) => ip = target,
                Instr::JumpUnless(target) => {
                    if !self.pop().is_truthy() {
                        ip = target;
                    }
                },
                Instr::Pop => {
                    self.pop();
                },
            }
        }
        Ok(())
    }

    fn pop(&mut self) -> Value {
        self.stack.pop().unwrap_or(Value::Null)
    }
}
