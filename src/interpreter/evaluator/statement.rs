use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::Unbound,
    },
};

impl Context<'_> {
    /// Evaluates `value` and stores it under `target`.
    ///
    /// The nearest enclosing binding is updated. When no scope binds
    /// `target`, it is defined in the current scope instead.
    pub(in crate::interpreter::evaluator) fn exec_assignment(&mut self,
                                                             target: &str,
                                                             value: &Node)
                                                             -> EvalResult<()> {
        let value = self.eval(value)?;
        if let Err(Unbound(value)) = self.scopes.assign(target, value) {
            self.scopes.define(target.to_string(), value);
        }
        Ok(())
    }

    /// Evaluates `value` and binds it in the current scope, shadowing any
    /// outer binding of `target`.
    pub(in crate::interpreter::evaluator) fn exec_declaration(&mut self,
                                                              target: &str,
                                                              value: &Node)
                                                              -> EvalResult<()> {
        let value = self.eval(value)?;
        self.scopes.define(target.to_string(), value);
        Ok(())
    }

    pub(in crate::interpreter::evaluator) fn exec_print(&mut self, expr: &Node) -> EvalResult<()> {
        let value = self.eval(expr)?;
        self.host().print(&value);
        Ok(())
    }

    /// Evaluates the arguments left to right, then hands the call to the
    /// host.
    pub(in crate::interpreter::evaluator) fn exec_auto_call(&mut self,
                                                            function: &str,
                                                            args: &[Node],
                                                            line: usize)
                                                            -> EvalResult<()> {
        let args = args.iter().map(|arg| self.eval(arg)).collect::<EvalResult<Vec<_>>>()?;
        self.host().invoke(function, &args, line)
    }
}
