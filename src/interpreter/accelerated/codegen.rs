use std::collections::HashMap;

use ordered_float::OrderedFloat;
use string_interner::DefaultStringInterner;
use tracing::debug;

use crate::{
    ast::Node,
    interpreter::{
        accelerated::ir::{Address, Instr, Program},
        value::core::Value,
    },
};

/// Hashable identity of a literal, used to share constant pool slots.
#[derive(Debug, PartialEq, Eq, Hash)]
enum ConstKey {
    Number(OrderedFloat<f64>),
    Str(String),
    Bool(bool),
    Null,
}

/// Lowers a syntax tree to a [`Program`].
///
/// Scoping mirrors the tree-walking evaluator exactly: the root block's
/// statements run in the global scope, while nested blocks, taken `if`
/// branches and every loop iteration are wrapped in enter/exit scope
/// instructions.
///
/// # Example
/// ```
/// use novolang::interpreter::{accelerated::codegen::compile, lexer::tokenize, parser::parse};
///
/// let ast = parse(&tokenize("print 1 + 1\nprint 1").unwrap()).unwrap();
/// let program = compile(&ast);
///
/// assert_eq!(program.constants.len(), 1);
/// ```
#[must_use]
pub fn compile(program: &Node) -> Program {
    let mut compiler = Compiler::default();
    match program {
        Node::Block { statements, .. } => statements.iter().for_each(|s| compiler.stmt(s)),
        statement => compiler.stmt(statement),
    }

    debug!(instructions = compiler.code.len(),
           constants = compiler.constants.len(),
           "compiled program");

    Program { code:      compiler.code,
              constants: compiler.constants,
              symbols:   compiler.symbols, }
}

#[derive(Default)]
struct Compiler {
    code:      Vec<Instr>,
    constants: Vec<Value>,
    pool:      HashMap<ConstKey, usize>,
    symbols:   DefaultStringInterner,
}

impl Compiler {
    fn emit(&mut self, instr: Instr) -> Address {
        let at = self.code.len();
        self.code.push(instr);
        at
    }

    fn patch(&mut self, at: Address, target: Address) {
        if let Instr::Jump(t) | Instr::JumpUnless(t) = &mut self.code[at] {
            *t = target;
        }
    }

    fn constant(&mut self, key: ConstKey) {
        let index = match self.pool.get(&key) {
            Some(&index) => index,
            None => {
                let value = match &key {
                    ConstKey::Number(n) => Value::Number(n.0),
                    ConstKey::Str(s) => Value::from(s.as_str()),
                    ConstKey::Bool(b) => Value::Bool(*b),
                    ConstKey::Null => Value::Null,
                };
                let index = self.constants.len();
                self.constants.push(value);
                self.pool.insert(key, index);
                index
            },
        };
        self.emit(Instr::Const(index));
    }

    /// Emits a scoped statement list.
    fn scoped(&mut self, statements: &[Node]) {
        self.emit(Instr::EnterScope);
        for statement in statements {
            self.stmt(statement);
        }
        self.emit(Instr::ExitScope);
    }

    fn stmt(&mut self, node: &Node) {
        match node {
            Node::Assignment { target, value, .. } => {
                self.expr(value);
                let symbol = self.symbols.get_or_intern(target);
                self.emit(Instr::Store(symbol));
            },
            Node::Declaration { target, value, .. } => {
                self.expr(value);
                let symbol = self.symbols.get_or_intern(target);
                self.emit(Instr::Define(symbol));
            },
            Node::Print { expr, .. } => {
                self.expr(expr);
                self.emit(Instr::Print);
            },
            Node::AutoCall { function,
                             args,
                             line, } => {
                for arg in args {
                    self.expr(arg);
                }
                let name = self.symbols.get_or_intern(function);
                self.emit(Instr::Invoke { name,
                                          argc: args.len(),
                                          line: *line });
            },
            Node::If { condition,
                       body,
                       else_body,
                       .. } => {
                self.expr(condition);
                let skip_body = self.emit(Instr::JumpUnless(0));
                self.scoped(body);

                if let Some(else_body) = else_body {
                    let skip_else = self.emit(Instr::Jump(0));
                    self.patch(skip_body, self.code.len());
                    self.scoped(else_body);
                    self.patch(skip_else, self.code.len());
                } else {
                    self.patch(skip_body, self.code.len());
                }
            },
            Node::Loop { condition, body, .. } => {
                let start = self.code.len();
                self.expr(condition);
                let exit = self.emit(Instr::JumpUnless(0));
                self.scoped(body);
                self.emit(Instr::Jump(start));
                self.patch(exit, self.code.len());
            },
            Node::Block { statements, .. } => self.scoped(statements),
            expr => {
                self.expr(expr);
                self.emit(Instr::Pop);
            },
        }
    }

    fn expr(&mut self, node: &Node) {
        match node {
            Node::NumberLit { value, .. } => self.constant(ConstKey::Number(OrderedFloat(*value))),
            Node::StringLit { value, .. } => self.constant(ConstKey::Str(value.clone())),
            Node::BoolLit { value, .. } => self.constant(ConstKey::Bool(*value)),
            Node::NullLit { .. } => self.constant(ConstKey::Null),
            Node::Identifier { name, line } => {
                let symbol = self.symbols.get_or_intern(name);
                self.emit(Instr::Load { symbol,
                                        line: *line });
            },
            Node::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                self.expr(left);
                self.expr(right);
                self.emit(Instr::Binary { op:   *op,
                                          line: *line, });
            },
            statement => {
                self.stmt(statement);
                self.constant(ConstKey::Null);
            },
        }
    }
}
