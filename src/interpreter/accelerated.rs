/// Instruction set and compiled program layout.
pub mod ir;

/// Lowering of syntax trees to instructions.
///
/// Control flow becomes conditional and unconditional jumps whose targets
/// are patched once the jumped-over code has been emitted. Literals are
/// collected in a deduplicated constant pool and names are interned.
pub mod codegen;

/// The stack machine that runs compiled programs.
pub mod vm;
