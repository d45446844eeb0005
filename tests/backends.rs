//! Property-based checks that the accelerated backend is observationally
//! identical to the tree-walking evaluator.
//!
//! Programs are generated as syntax trees. Loops only come from the counted
//! form, and every nesting depth has its own counter, so every generated
//! program terminates.

#![cfg(feature = "accelerated")]

use std::{cell::RefCell, rc::Rc};

use novolang::{
    Interpreter,
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        backend::Backend,
        capability::{Action, CapabilityError, CapabilityTable},
        value::core::Value,
    },
};
use proptest::prelude::*;

type CallLog = Rc<RefCell<Vec<String>>>;

/// What a run of a program looks like from the outside.
type Observation = (Vec<String>, Vec<String>, Result<(), RuntimeError>);

const TARGETS: [&str; 3] = ["a", "b", "c"];
const NAMES: [&str; 5] = ["a", "b", "c", "i0", "i1"];
const CALLS: [&str; 6] = ["点击", "wait", "입력", "截图", "снимок", "fly"];
const MAX_DEPTH: usize = 2;

/// Click and wait record their calls, type fails on non-text, everything
/// else stays unavailable.
fn recording_table(log: &CallLog) -> CapabilityTable {
    let mut table = CapabilityTable::new();
    for action in [Action::Click, Action::Wait] {
        let log = Rc::clone(log);
        table.provide(action, move |args: &[Value]| {
                 let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                 log.borrow_mut().push(format!("{action}({})", args.join(", ")));
                 Ok(Value::Null)
             });
    }
    table.provide(Action::Type, |args: &[Value]| match args.first() {
             Some(Value::Str(_)) => Ok(Value::Null),
             _ => Err(CapabilityError::Failed("expected text".to_string())),
         });
    table
}

fn observe(program: &Node, backend: Backend) -> Observation {
    let log = CallLog::default();
    let mut output: Vec<String> = Vec::new();
    let result = Interpreter::new().with_backend(backend)
                                   .with_capabilities(recording_table(&log))
                                   .execute(program, &mut output);
    let calls = log.borrow().clone();
    (output, calls, result)
}

fn line() -> impl Strategy<Value = usize> {
    1usize..40
}

fn operator() -> impl Strategy<Value = BinaryOperator> {
    prop::sample::select(vec![BinaryOperator::Add,
                              BinaryOperator::Sub,
                              BinaryOperator::Mul,
                              BinaryOperator::Div,
                              BinaryOperator::Less,
                              BinaryOperator::Greater,
                              BinaryOperator::LessEqual,
                              BinaryOperator::GreaterEqual,
                              BinaryOperator::Equal,
                              BinaryOperator::NotEqual])
}

fn expression() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (-3i32..10, line()).prop_map(|(n, line)| Node::NumberLit { value: f64::from(n),
                                                                   line }),
        line().prop_map(|line| Node::NumberLit { value: 0.5, line }),
        (prop::sample::select(vec!["", "s", "t"]), line())
            .prop_map(|(s, line)| Node::StringLit { value: s.to_string(), line }),
        (any::<bool>(), line()).prop_map(|(value, line)| Node::BoolLit { value, line }),
        line().prop_map(|line| Node::NullLit { line }),
        (prop::sample::select(NAMES.to_vec()), line())
            .prop_map(|(name, line)| Node::Identifier { name: name.to_string(), line }),
    ];

    leaf.prop_recursive(3, 16, 2, |inner| {
            (inner.clone(), operator(), inner, line()).prop_map(|(left, op, right, line)| {
                                                          Node::BinaryOp { left: Box::new(left),
                                                                           op,
                                                                           right: Box::new(right),
                                                                           line }
                                                      })
        })
}

fn target() -> impl Strategy<Value = String> {
    prop::sample::select(TARGETS.to_vec()).prop_map(str::to_string)
}

/// `i{depth} = 0; loop (i{depth} < count) { body; i{depth} = i{depth} + 1 }`
/// wrapped in its own block, the same shape the parser produces.
fn counted_loop(depth: usize, mut body: Vec<Node>, count: u8, line: usize) -> Node {
    let counter = format!("i{depth}");
    let read = || Box::new(Node::Identifier { name: counter.clone(),
                                              line });
    let number = |value: f64| Box::new(Node::NumberLit { value, line });

    body.push(Node::Assignment { target: counter.clone(),
                                 value: Box::new(Node::BinaryOp { left: read(),
                                                                  op: BinaryOperator::Add,
                                                                  right: number(1.0),
                                                                  line }),
                                 line });

    let condition = Node::BinaryOp { left: read(),
                                     op: BinaryOperator::Less,
                                     right: number(f64::from(count)),
                                     line };

    Node::Block { statements: vec![Node::Assignment { target: counter.clone(),
                                                      value: number(0.0),
                                                      line },
                                   Node::Loop { condition: Box::new(condition),
                                                body,
                                                line }],
                  line }
}

fn statement(depth: usize) -> BoxedStrategy<Node> {
    let simple = prop_oneof![
        (target(), expression(), line()).prop_map(|(target, value, line)| {
                                            Node::Assignment { target,
                                                               value: Box::new(value),
                                                               line }
                                        }),
        (target(), expression(), line()).prop_map(|(target, value, line)| {
                                            Node::Declaration { target,
                                                                value: Box::new(value),
                                                                line }
                                        }),
        (expression(), line()).prop_map(|(expr, line)| Node::Print { expr: Box::new(expr),
                                                                      line }),
        (prop::sample::select(CALLS.to_vec()), prop::collection::vec(expression(), 0..3), line())
            .prop_map(|(function, args, line)| Node::AutoCall { function: function.to_string(),
                                                                 args,
                                                                 line }),
        expression(),
    ];

    if depth >= MAX_DEPTH {
        return simple.boxed();
    }

    let body = || prop::collection::vec(statement(depth + 1), 0..4);
    prop_oneof![
        4 => simple,
        1 => (expression(), body(), prop::option::of(body()), line())
            .prop_map(|(condition, body, else_body, line)| Node::If { condition: Box::new(condition),
                                                                        body,
                                                                        else_body,
                                                                        line }),
        1 => (body(), 0u8..4, line())
            .prop_map(move |(body, count, line)| counted_loop(depth, body, count, line)),
        1 => (body(), line()).prop_map(|(statements, line)| Node::Block { statements, line }),
    ].boxed()
}

fn program() -> impl Strategy<Value = Node> {
    prop::collection::vec(statement(0), 0..8).prop_map(|statements| Node::Block { statements,
                                                                                   line: 1 })
}

/// Source text that never loops, built from keyword spellings, names and
/// punctuation in arbitrary order.
fn token_soup() -> impl Strategy<Value = String> {
    let pieces = vec!["print", "打印", "출력", "x", "y", "=", "1", "2.5", "\"s\"", "+", "-", "*",
                      "/", "<", "==", "<>", "(", ")", "{", "}", "if", "如果", "else", "var",
                      "定义", "真", "null", ";", "\n", "auto", "点击", "fly", ","];
    prop::collection::vec(prop::sample::select(pieces), 0..24).prop_map(|pieces| pieces.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn backends_agree_on_syntax_trees(program in program()) {
        let expected = observe(&program, Backend::Reference);
        let actual = observe(&program, Backend::Accelerated);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn backends_agree_on_source_text(source in token_soup()) {
        let expected = Interpreter::new().with_backend(Backend::Reference).run(&source);
        let actual = Interpreter::new().with_backend(Backend::Accelerated).run(&source);
        prop_assert_eq!(actual, expected);
    }
}
