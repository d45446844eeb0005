//! Compares the tree-walking evaluator with the bytecode machine.
//!
//! Run with: cargo bench --bench backends

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use novolang::{
    Interpreter,
    ast::Node,
    interpreter::{backend::Backend, lexer::tokenize, parser::parse},
};

/// Nested counted loops with arithmetic and a conditional in the body.
const LOOP_HEAVY: &str = r"
var total = 0
loop (i = 0; i < 200; i = i + 1) {
    loop (j = 0; j < 50; j = j + 1) {
        total = total + i * j / 3
        if (total > 100000) { total = total - 100000 }
    }
}
print total
";

/// A long straight-line program, dominated by scope lookups.
fn straight_line(statements: usize) -> String {
    let mut source = String::from("定义 x = 0\n");
    for n in 0..statements {
        source.push_str(&format!("x = x + {n} - 1\n"));
    }
    source.push_str("打印 x\n");
    source
}

fn compile(source: &str) -> Node {
    let tokens = tokenize(source).expect("benchmark source tokenizes");
    parse(&tokens).expect("benchmark source parses")
}

fn execute(program: &Node, backend: Backend) -> Vec<String> {
    let mut output: Vec<String> = Vec::new();
    Interpreter::new().with_backend(backend)
                      .execute(program, &mut output)
                      .expect("benchmark program runs");
    output
}

fn bench_loops(c: &mut Criterion) {
    let program = compile(LOOP_HEAVY);
    let mut group = c.benchmark_group("loops");

    for &backend in Backend::AVAILABLE {
        group.bench_with_input(BenchmarkId::from_parameter(backend), &program, |b, program| {
                 b.iter(|| execute(black_box(program), backend));
             });
    }

    group.finish();
}

fn bench_straight_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("straight_line");

    for size in [100, 1000] {
        let program = compile(&straight_line(size));
        for &backend in Backend::AVAILABLE {
            group.bench_with_input(BenchmarkId::new(backend.to_string(), size),
                                   &program,
                                   |b, program| b.iter(|| execute(black_box(program), backend)));
        }
    }

    group.finish();
}

criterion_group!(benches, bench_loops, bench_straight_line);
criterion_main!(benches);
