use std::{cell::RefCell, rc::Rc};

use novolang::{
    Interpreter, RunOutcome, Status,
    ast::Node,
    error::{Error, LexError, RuntimeError},
    interpreter::{
        backend::Backend,
        capability::{Action, CapabilityTable},
        lexer::{TokenKind, tokenize},
        value::core::Value,
    },
};

/// Runs `src` on every backend, checks that they agree, and returns the
/// common outcome.
fn run_with(src: &str, capabilities: fn() -> CapabilityTable) -> RunOutcome {
    let mut outcomes = Vec::new();
    for &backend in Backend::AVAILABLE {
        let mut interpreter = Interpreter::new().with_backend(backend)
                                                .with_capabilities(capabilities());
        outcomes.push((interpreter.backend(), interpreter.run(src)));
    }

    let (_, first) = outcomes.remove(0);
    for (backend, outcome) in outcomes {
        assert_eq!(outcome, first, "{backend} disagrees on:\n{src}");
    }
    first
}

fn run(src: &str) -> RunOutcome {
    run_with(src, CapabilityTable::new)
}

fn assert_output(src: &str, expected: &[&str]) {
    let outcome = run(src);
    if let Err(e) = &outcome.result {
        panic!("Script failed: {e}\n{src}");
    }
    assert_eq!(outcome.output, expected, "{src}");
}

fn assert_failure(src: &str, status: Status) -> RunOutcome {
    let outcome = run(src);
    assert_eq!(outcome.status(), status, "{src}");
    outcome
}

#[test]
fn every_keyword_set_means_the_same() {
    let programs = ["var a = 10; if (a > 5) { print(\"x\") }",
                    "定义 a = 10; 如果 (a > 5) { 打印(\"x\") }",
                    "定義 a = 10; もし (a > 5) { 表示(\"x\") }",
                    "정의 a = 10; 만약 (a > 5) { 출력(\"x\") }",
                    "определить a = 10; если (a > 5) { печать(\"x\") }"];

    let kinds = |src: &str| -> Vec<TokenKind> {
        tokenize(src).unwrap().iter().map(|t| t.kind).collect()
    };
    let expected = kinds(programs[0]);

    for src in programs {
        assert_eq!(kinds(src), expected, "{src}");
        assert_output(src, &["x"]);
    }
}

#[test]
fn mixed_spellings_in_one_program() {
    assert_output("定义 n = 2\nloop (n > 0) { печать n; n = n - 1 }\nif (n == 0) 출력 \"done\"",
                  &["2", "1", "done"]);
}

#[test]
fn printed_forms() {
    assert_output("print(true)\nprint(false)\nprint(null)", &["真", "假", "空"]);
    assert_output("print true == true", &["真"]);
    assert_output("print 2 * 3\nprint 7 / 2\nprint 0.1 + 0.2",
                  &["6", "3.5", "0.30000000000000004"]);
    assert_output("print 0 - 0", &["0"]);

    let huge = format!("1{}", "0".repeat(400));
    assert_output(&format!("big = {huge}\nprint big\nprint 0 - big\nprint big - big"),
                  &["inf", "-inf", "nan"]);
}

#[test]
fn arithmetic_and_concatenation() {
    assert_output("print 1 / 0", &["0"]);
    assert_output("print \"a\" + 1", &["a1"]);
    assert_output("print 1 + 1", &["2"]);
    assert_output("print 1 + \"a\"", &["1a"]);
    assert_output("print \"ok: \" + (1 < 2)", &["ok: 真"]);
    assert_output("print \"n\" + null", &["n空"]);
    assert_output("print 10 - 4 - 3", &["3"]);
    assert_output("print (1 + 2) * 3", &["9"]);
}

#[test]
fn comparisons() {
    assert_output("print 1 <> 2\nprint 1 != 1\nprint \"b\" > \"a\"\nprint 2 >= 2",
                  &["真", "假", "真", "真"]);
    assert_output("print 1 == \"1\"", &["假"]);
    assert_output("print null == null", &["真"]);
}

#[test]
fn comparison_chains_group_right() {
    // (1 == 1) == true would print 真.
    assert_output("print 1 == 1 == true", &["假"]);

    let outcome = assert_failure("print 3 > 2 > 1", Status::RuntimeError);
    assert_eq!(outcome.result.unwrap_err().to_string(),
               "Error on line 1: Type error: cannot apply '>' to number and bool.");
}

#[test]
fn invalid_operands_are_fatal() {
    assert_failure("print \"a\" - 1", Status::RuntimeError);
    assert_failure("print true * 2", Status::RuntimeError);
    assert_failure("print null < 1", Status::RuntimeError);
}

#[test]
fn counted_loop_counter_is_scoped() {
    let outcome = assert_failure("loop (i = 0; i < 3; i = i + 1) { print(i) }\nprint(i)",
                                 Status::RuntimeError);

    assert_eq!(outcome.output, ["0", "1", "2"]);
    assert_eq!(outcome.result,
               Err(Error::Runtime(RuntimeError::UnresolvedReference { name: "i".to_string(),
                                                                     line: 2, })));
}

#[test]
fn english_for_and_var_aliases() {
    assert_output("var total = 0\nfor (k = 1; k <= 4; k = k + 1) total = total + k\nprint total",
                  &["10"]);
}

#[test]
fn conditional_loop() {
    assert_output("n = 3\nloop (n > 0) { print n; n = n - 1 }", &["3", "2", "1"]);
    assert_output("loop (false) print \"never\"\nprint \"after\"", &["after"]);
}

#[test]
fn assignment_reaches_outer_binding() {
    assert_output("x = 1\nif (true) { x = 2 }\nprint x", &["2"]);
}

#[test]
fn assignment_to_unknown_name_is_local() {
    let outcome = assert_failure("if (true) { y = 5; print y }\nprint y", Status::RuntimeError);
    assert_eq!(outcome.output, ["5"]);
}

#[test]
fn declaration_shadows() {
    assert_output("var x = 1\nif (true) { var x = 2; print x; x = 3; print x }\nprint x",
                  &["2", "3", "1"]);
}

#[test]
fn iteration_locals_do_not_survive() {
    let outcome =
        assert_failure("loop (i = 0; i < 2; i = i + 1) {\n  if (i == 1) print seen\n  seen = i\n}",
                       Status::RuntimeError);

    assert!(outcome.output.is_empty());
    assert_eq!(outcome.result.unwrap_err().to_string(),
               "Error on line 2: Unknown variable 'seen'.");
}

#[test]
fn truthiness() {
    assert_output("if (0) print \"zero\"", &["zero"]);
    assert_output("if (\"\") print \"empty\"", &["empty"]);
    assert_output("if (null) print 1 else print 2", &["2"]);
    assert_output("if (false) print 1 else print 2", &["2"]);
    assert_output("if (1 > 2) print 1", &[]);
}

#[test]
fn unknown_capability_aborts() {
    let outcome = assert_failure("print \"before\"\nauto fly(1)\nprint \"after\"",
                                 Status::RuntimeError);

    assert_eq!(outcome.output, ["before"]);
    assert_eq!(outcome.result.unwrap_err().to_string(),
               "Error on line 2: Unknown automation function 'fly'.");
}

#[test]
fn unavailable_capability_continues() {
    assert_output("auto 截图()\nprint \"after\"",
                  &["System: '截图' is unavailable (no provider for screenshot). Skipping execution.",
                    "after"]);
}

#[test]
fn arguments_are_evaluated_before_dispatch() {
    let outcome = assert_failure("auto 点击(missing)", Status::RuntimeError);
    assert!(matches!(outcome.result,
                     Err(Error::Runtime(RuntimeError::UnresolvedReference { .. }))));
}

#[test]
fn built_in_wait() {
    let outcome = run_with("auto wait(0)\nauto 等待(\"soon\")\nprint 1",
                           CapabilityTable::default);

    assert_eq!(outcome.output,
               ["Runtime Error in '等待': expected a number of seconds", "1"]);
}

#[test]
fn registered_providers_receive_arguments() {
    for &backend in Backend::AVAILABLE {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let mut interpreter = Interpreter::new().with_backend(backend);
        let seen = Rc::clone(&clicks);
        interpreter.capabilities_mut()
                   .alias("tap", Action::Click)
                   .provide(Action::Click, move |args: &[Value]| {
                       seen.borrow_mut().push(args.to_vec());
                       Ok(Value::Null)
                   });

        let outcome = interpreter.run("x = 3\nauto tap(x * 2, \"left\")\nauto 클릭()\nprint x");

        assert_eq!(outcome.output, ["3"], "{backend}");
        assert_eq!(*clicks.borrow(),
                   [vec![Value::from(6.0), Value::from("left")], vec![]],
                   "{backend}");
    }
}

#[test]
fn lexical_errors() {
    let outcome = assert_failure("print 1\nprint 2 # 3", Status::LexError);

    assert!(outcome.output.is_empty());
    assert_eq!(outcome.result,
               Err(Error::Lex(LexError::UnexpectedCharacter { character: '#',
                                                             line:      2, })));
    let error = outcome.result.unwrap_err();
    assert_eq!(error.line(), 2);
    assert_eq!(error.to_string(), "Error on line 2: Unexpected character '#'.");
}

#[test]
fn syntax_errors() {
    let outcome = assert_failure("print 1\nx + 1", Status::ParseError);
    assert!(outcome.output.is_empty());
    assert_eq!(outcome.result.unwrap_err().to_string(),
               "Error on line 2: Unexpected token OPERATOR '+', expected '='.");

    assert_failure("if (x) {", Status::ParseError);
    assert_failure("while (true) print 1", Status::ParseError);
    assert_failure("return 1", Status::ParseError);
    assert_failure("print 1 +", Status::ParseError);
}

#[test]
fn deep_programs_fail_cleanly() {
    let sum = |terms: usize| format!("print {}", vec!["1"; terms].join(" + "));
    assert_output(&sum(200), &["200"]);

    let outcome = assert_failure(&format!("print 0\n{}", sum(10_000)), Status::ParseError);
    assert!(outcome.output.is_empty());
    assert_eq!(outcome.result.unwrap_err().to_string(),
               "Error on line 2: Program is nested too deeply.");

    let ifs = format!("{}print 1", "if (true) ".repeat(100));
    assert_output(&ifs, &["1"]);
    assert_failure(&format!("{}print 1", "if (true) ".repeat(5_000)), Status::ParseError);
}

#[test]
fn lines_count_through_multiline_strings() {
    let outcome = assert_failure("print \"one\ntwo\"\nprint nope", Status::RuntimeError);

    assert_eq!(outcome.output, ["one\ntwo"]);
    assert_eq!(outcome.result.unwrap_err().to_string(),
               "Error on line 3: Unknown variable 'nope'.");
}

#[test]
fn comments_and_separators() {
    assert_output("// header\nprint 1 // one\n;; print 2;", &["1", "2"]);
    assert_output("", &[]);
}

#[test]
fn syntax_tree_interchange() {
    let json = r#"{
        "type": "BLOCK",
        "statements": [
            {"type": "ASSIGNMENT", "target": "x", "value": {"type": "NUMBER", "value": 4}},
            {"type": "PRINT", "expr": {
                "type": "BINARY_OP", "op": "<>",
                "left": {"type": "IDENTIFIER", "name": "x"},
                "right": {"type": "NULL"}
            }}
        ]
    }"#;
    let program: Node = serde_json::from_str(json).unwrap();

    for &backend in Backend::AVAILABLE {
        let mut lines: Vec<String> = Vec::new();
        Interpreter::new().with_backend(backend)
                          .execute(&program, &mut lines)
                          .unwrap();
        assert_eq!(lines, ["真"], "{backend}");
    }

    let tokens = tokenize("print 1 < 2").unwrap();
    let parsed = novolang::interpreter::parser::parse(&tokens).unwrap();
    let text = serde_json::to_string(&parsed).unwrap();
    assert!(text.contains(r#""type":"BINARY_OP""#));
    assert_eq!(serde_json::from_str::<Node>(&text).unwrap(), parsed);
}
