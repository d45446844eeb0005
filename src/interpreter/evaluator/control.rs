use crate::{
    ast::Node,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Runs the taken branch of an `if` in a fresh child scope.
    ///
    /// Only `false` and `null` select the `else` branch. When the condition
    /// is falsy and there is no `else`, nothing happens and no scope is
    /// entered.
    pub(in crate::interpreter::evaluator) fn exec_if(&mut self,
                                                     condition: &Node,
                                                     body: &[Node],
                                                     else_body: Option<&[Node]>)
                                                     -> EvalResult<()> {
        if self.eval(condition)?.is_truthy() {
            self.exec_scoped(body)
        } else if let Some(else_body) = else_body {
            self.exec_scoped(else_body)
        } else {
            Ok(())
        }
    }

    /// Runs a `loop` until its condition becomes falsy.
    ///
    /// The condition is evaluated in the enclosing scope before every
    /// iteration, and each iteration gets its own child scope, so locals do
    /// not survive from one iteration to the next.
    pub(in crate::interpreter::evaluator) fn exec_loop(&mut self,
                                                       condition: &Node,
                                                       body: &[Node])
                                                       -> EvalResult<()> {
        while self.eval(condition)?.is_truthy() {
            self.exec_scoped(body)?;
        }
        Ok(())
    }

    /// Runs statements in a new child scope that is discarded afterwards.
    pub(in crate::interpreter::evaluator) fn exec_scoped(&mut self, statements: &[Node]) -> EvalResult<()> {
        self.scopes.enter();
        let result = self.exec_all(statements);
        self.scopes.exit();
        result
    }
}
