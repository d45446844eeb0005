use string_interner::{DefaultStringInterner, DefaultSymbol};

use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// An interned variable or capability name.
pub type Symbol = DefaultSymbol;

/// Index of an instruction in [`Program::code`].
pub type Address = usize;

/// One stack-machine instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// Push `constants[index]`.
    Const(usize),
    /// Push the value bound to a name.
    Load {
        symbol: Symbol,
        line:   usize,
    },
    /// Pop a value and assign it, defining it locally if nothing binds it.
    Store(Symbol),
    /// Pop a value and bind it in the current scope.
    Define(Symbol),
    /// Pop the right then the left operand and push the result.
    Binary {
        op:   BinaryOperator,
        line: usize,
    },
    /// Pop a value and print it.
    Print,
    /// Pop `argc` arguments and call the named capability.
    Invoke {
        name: Symbol,
        argc: usize,
        line: usize,
    },
    EnterScope,
    ExitScope,
    /// Continue at the target.
    Jump(Address),
    /// Pop a value and continue at the target if it is falsy.
    JumpUnless(Address),
    /// Discard the top of the stack.
    Pop,
}

/// A compiled program: straight-line code plus the tables it refers to.
#[derive(Debug)]
pub struct Program {
    pub code:      Vec<Instr>,
    pub constants: Vec<Value>,
    pub symbols:   DefaultStringInterner,
}

impl Program {
    /// Returns the text of an interned name.
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> &str {
        self.symbols.resolve(symbol).unwrap_or_default()
    }
}

impl std::fmt::Display for Program {
    /// One instruction per line, with constants and names spelled out.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (address, instr) in self.code.iter().enumerate() {
            write!(f, "{address:>4}  ")?;
            match *instr {
                Instr::Const(index) => match self.constants.get(index) {
                    Some(Value::Str(s)) => writeln!(f, "const {s:?}"),
                    Some(value) => writeln!(f, "const {value}"),
                    None => writeln!(f, "const ?"),
                },
                Instr::Load { symbol, .. } => writeln!(f, "load {}", self.name(symbol)),
                Instr::Store(symbol) => writeln!(f, "store {}", self.name(symbol)),
                Instr::Define(symbol) => writeln!(f, "define {}", self.name(symbol)),
                Instr::Binary { op, .. } => writeln!(f, "binary {op}"),
                Instr::Print => writeln!(f, "print"),
                Instr::Invoke { name, argc, .. } => {
                    writeln!(f, "invoke {} {argc}", self.name(name))
                },
                Instr::EnterScope => writeln!(f, "enter"),
                Instr::ExitScope => writeln!(f, "exit"),
                Instr::Jump(target) => writeln!(f, "jump {target}"),
                Instr::JumpUnless(target) => writeln!(f, "jump_unless {target}"),
                Instr::Pop => writeln!(f, "pop"),
            }?;
        }
        Ok(())
    }
}
