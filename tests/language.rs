use std::fs::{self};

use infixcalc::{
    Error, Status,
    error::{ParseError, RuntimeError},
    solve, solve_bytes,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in extract_example_lines(&content).into_iter().enumerate() {
            count += 1;
            let (expression, expected) =
                line.rsplit_once('=')
                    .unwrap_or_else(|| panic!("Example {} in {:?} has no '= <value>': {line}",
                                              i + 1,
                                              path));
            let expected = expected.trim();
            match solve(expression) {
                Ok(value) if expected != "error" => {
                    let expected: f64 = expected.parse().unwrap_or_else(|e| {
                                                             panic!("Bad expected value in {path:?}: {line}: {e}")
                                                         });
                    assert!((value - expected).abs() < 1e-9,
                            "Example {} in {:?} gave {value}: {line}",
                            i + 1,
                            path);
                },
                Err(_) if expected == "error" => {},
                other => panic!("Example {} in {:?} failed:\n{line}\nResult: {other:?}",
                                i + 1,
                                path),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```infixcalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn assert_value(src: &str, expected: f64) {
    match solve(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "\"{src}\": got {value}, expected {expected}"),
        Err(e) => panic!("\"{src}\" failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match solve(src) {
        Ok(value) => panic!("\"{src}\" succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("5 - 2", 3.0);
    assert_value("3 * 4", 12.0);
    assert_value("10 / 2", 5.0);
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("8 - 6 / 2", 5.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 3 - 2", 5.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 * 6 / 3", 4.0);
    assert_value("8 / 2 * 4", 16.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn parentheses() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 / (5 - 3)", 5.0);
    assert_value("(2 - 1) / (1 + 4 * 2 - 5)", 0.25);
    assert_value("3 + 4 * 2 / (1 - 5)", 1.0);
    assert_value("((1 + 2) * (3 + 4))", 21.0);
    assert_value("10 - (3 - 2)", 9.0);
    assert_value("(((7)))", 7.0);
}

#[test]
fn demo_expression() {
    assert_value("1 / 10 + (2 * 100.2 + 28 + 0.06) / 2 + 3 * 102.12", 420.69);
}

#[test]
fn numeric_literals() {
    assert_value("3.5", 3.5);
    assert_value("1.5e2", 150.0);
    assert_value("2E-1 * 10", 2.0);
    assert_value("2. + 5e0", 7.0);
}

#[test]
fn leading_dot_is_not_a_literal() {
    let err = assert_failure(".5");
    assert!(matches!(err, Error::Parse(ParseError::InvalidCharacter { pos: 0, .. })));
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(solve("1+2"), solve(" 1 + 2 "));
    assert_eq!(solve("2*(3+4)"), solve("\t2 *\n( 3 + 4 )\n"));
}

#[test]
fn repeated_solves_are_identical() {
    let expression = "0.1 + 0.2 * 3 / 7";
    let first = solve(expression).unwrap();
    let second = solve(expression).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    assert_eq!(solve("5 / 0"), solve("5 / 0"));
}

#[test]
fn division_by_zero() {
    let err = assert_failure("5 / 0");
    assert_eq!(err, Error::Evaluation(RuntimeError::DivisionByZero { pos: 2 }));
    assert_eq!(err.status(), Status::EvaluationError);

    assert_failure("1 / (2 - 2)");
    assert_failure("1 / 0.0");
}

#[test]
fn division_by_tiny_value_is_allowed() {
    assert_value("1 / 0.5", 2.0);
    assert!(solve("1 / 1e-300").is_ok());
}

#[test]
fn unbalanced_parentheses() {
    let err = assert_failure(")1+2(");
    assert_eq!(err, Error::Parse(ParseError::UnbalancedParentheses { pos: 0 }));
    assert_eq!(err.status(), Status::ParseError);

    assert_failure("1 + 2)");
    assert_failure("(1 + 2))");
}

#[test]
fn unclosed_parenthesis() {
    let err = assert_failure("(1 + 2");
    assert_eq!(err, Error::Parse(ParseError::UnclosedParenthesis { pos: 0 }));

    let err = assert_failure("2 * ((1 + 2)");
    assert_eq!(err, Error::Parse(ParseError::UnclosedParenthesis { pos: 4 }));
}

#[test]
fn dangling_operators() {
    let err = assert_failure("3 *");
    assert_eq!(err, Error::Evaluation(RuntimeError::Underflow { pos: 2 }));

    let err = assert_failure("2 + +");
    assert_eq!(err.status(), Status::EvaluationError);

    assert_failure("* 3");
    assert_failure("()");
}

#[test]
fn missing_operator() {
    let err = assert_failure("1 2");
    assert_eq!(err, Error::Evaluation(RuntimeError::MalformedExpression { remaining: 2 }));

    assert_failure("(1)(2)");
}

#[test]
fn empty_expression() {
    let err = assert_failure("");
    assert_eq!(err, Error::Evaluation(RuntimeError::MalformedExpression { remaining: 0 }));

    assert_failure("   \n\t");
}

#[test]
fn invalid_characters() {
    let err = assert_failure("1 + x");
    assert_eq!(err,
               Error::Parse(ParseError::InvalidCharacter { lexeme: "x".to_string(),
                                                           pos:    4, }));
    assert_eq!(err.position(), Some(4));

    assert_failure("2 ^ 3");
    assert_failure("1,5 + 1");
    assert_failure("1 + 2\r");
}

#[test]
fn parse_errors_stop_before_evaluation() {
    // Would divide by zero, but the stray character is found first.
    let err = assert_failure("5 / 0 $");
    assert_eq!(err.status(), Status::ParseError);
}

#[test]
fn non_utf8_input_is_an_invalid_argument() {
    let err = solve_bytes(&[b'1', b' ', b'+', b' ', 0xc3]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(err.status(), Status::InvalidArgument);
    assert_eq!(err.position(), Some(4));

    assert_eq!(solve_bytes(b"(2 + 3) * 4"), Ok(20.0));
}

#[test]
fn status_exit_codes() {
    assert_eq!(Status::from(&solve("1 + 1")), Status::Success);
    assert_eq!(Status::from(&solve("1 + 1")).exit_code(), 0);
    assert_eq!(Status::from(&solve_bytes(&[0xff])).exit_code(), 1);
    assert_eq!(Status::from(&solve("1 # 1")).exit_code(), 2);
    assert_eq!(Status::from(&solve("1 / 0")).exit_code(), 3);
    assert_eq!(Status::OutOfMemory.exit_code(), 4);
}

#[test]
fn long_expressions_grow_the_stacks() {
    let sum = vec!["1"; 500].join(" + ");
    assert_value(&sum, 500.0);

    let nested = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    assert_value(&nested, 1.0);
}

#[test]
fn solve_is_reentrant_across_threads() {
    let handles: Vec<_> = (1..=8).map(|n| {
                                     std::thread::spawn(move || {
                                         solve(&format!("{n} * ({n} + 1) / 2"))
                                     })
                                 })
                                 .collect();

    for (n, handle) in (1..=8).zip(handles) {
        let expected = f64::from(n * (n + 1) / 2);
        assert_eq!(handle.join().unwrap(), Ok(expected));
    }
}
