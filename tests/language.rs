use std::fs;

use prefixa::{
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, parser::core::parse},
    run_script,
};

fn assert_success(src: &str) {
    if let Err(e) = run_script(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn eval_str(src: &str) -> i64 {
    let expr = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    Context::new().eval(&expr)
                  .unwrap_or_else(|e| panic!("Failed to evaluate {src:?}: {e}"))
}

#[test]
fn literals() {
    assert_eq!(eval_str("42"), 42);
    assert_eq!(eval_str("0"), 0);
    assert_eq!(eval_str("-7"), -7);
    assert_eq!(eval_str("9223372036854775807"), i64::MAX);
    assert_eq!(eval_str("-9223372036854775808"), i64::MIN);
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_str("(+ 2 3)"), 5);
    assert_eq!(eval_str("(- 2 3)"), -1);
    assert_eq!(eval_str("(* 4 5)"), 20);
    assert_eq!(eval_str("(/ 9 2)"), 4);
    assert_eq!(eval_str("(/ -7 2)"), -3);
}

#[test]
fn nested_expressions() {
    assert_eq!(eval_str("(+ (* 2 3) 4)"), 10);
    assert_eq!(eval_str("(+ 4 (* 2 3))"), 10);
    assert_eq!(eval_str("(- (* 3 3) (/ 8 2))"), 5);
    // An operand after two closed subexpressions sits behind two
    // consecutive ')' tokens.
    assert_eq!(eval_str("(+ (* 2 (+ 1 1)) 4)"), 8);
}

#[test]
fn grammar_tolerance() {
    // Closing parentheses are skipped, never matched, so a missing final
    // ')' parses to the same tree.
    assert_eq!(eval_str("(+ (* 2 3) 4"), 10);
    assert_eq!(eval_str(") 5"), 5);
    assert_eq!(eval_str("(+  1   2)"), 3);
    // The scanner stops after one complete expression.
    assert_eq!(eval_str("(+ 1 2) junk"), 3);
}

#[test]
fn variable_lookup() {
    let mut context = Context::new();
    context.define("x", 5);

    let expr = parse("(+ x 3)").unwrap();
    assert_eq!(context.eval(&expr).unwrap(), 8);
}

#[test]
fn unknown_variable_is_error() {
    let context = Context::new();

    let expr = parse("y").unwrap();
    assert!(matches!(context.eval(&expr),
                     Err(RuntimeError::UnknownVariable { ref name, pos: 0 }) if name == "y"));

    let expr = parse("(+ 1 y)").unwrap();
    assert!(matches!(context.eval(&expr),
                     Err(RuntimeError::UnknownVariable { ref name, pos: 5 }) if name == "y"));
}

#[test]
fn division_by_zero_is_error() {
    let context = Context::new();

    let expr = parse("(/ 5 0)").unwrap();
    assert!(matches!(context.eval(&expr), Err(RuntimeError::DivisionByZero { pos: 0 })));

    // The reported offset is the offending subexpression's '('.
    let expr = parse("(+ 1 (/ 2 0))").unwrap();
    assert!(matches!(context.eval(&expr), Err(RuntimeError::DivisionByZero { pos: 5 })));
}

#[test]
fn overflow_is_error() {
    let context = Context::new();

    for src in ["(+ 9223372036854775807 1)",
                "(- -9223372036854775808 1)",
                "(* 2 4611686018427387904)",
                "(/ -9223372036854775808 -1)"]
    {
        let expr = parse(src).unwrap();
        assert!(matches!(context.eval(&expr), Err(RuntimeError::Overflow { .. })),
                "{src} did not overflow");
    }
}

#[test]
fn constant_chaining() {
    let mut context = Context::new();
    context.define_constant("const a (+ 1 2)").unwrap();
    context.define_constant("const b (* a 10)").unwrap();

    assert_eq!(context.lookup("a"), Some(3));
    assert_eq!(context.lookup("b"), Some(30));
}

#[test]
fn definition_keyword_is_ignored() {
    let mut context = Context::new();
    context.define_constant("whatever pi 3").unwrap();

    assert_eq!(context.lookup("pi"), Some(3));
}

#[test]
fn redefinition_overwrites() {
    let mut context = Context::new();
    context.define_constant("const a 1").unwrap();
    context.define_constant("const a 2").unwrap();

    assert_eq!(context.lookup("a"), Some(2));
}

#[test]
fn malformed_definitions_are_errors() {
    let mut context = Context::new();

    assert!(context.define_constant("const").is_err());
    assert!(context.define_constant("const a").is_err());
    assert!(context.define_constant("const  a 1").is_err());
    assert!(context.define_constant("const a (+ 1").is_err());
}

#[test]
fn printing_round_trip() {
    for src in ["42", "-7", "x", "(+ 1 2)", "(+ (* 2 3) 4)", "(/ (- 10 x) 2)"] {
        let expr = parse(src).unwrap();
        assert_eq!(expr.to_string(), src);
    }
}

#[test]
fn malformed_expressions_are_errors() {
    assert!(matches!(parse(""), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("("), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("(+ 1"), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("()"), Err(ParseError::ExpectedOperator { .. })));
    assert!(matches!(parse("(% 1 2)"), Err(ParseError::ExpectedOperator { .. })));
    assert!(matches!(parse("5x"),
                     Err(ParseError::UnexpectedToken { ref token, pos: 0 }) if token == "5x"));
}

#[test]
fn variable_name_length_cap() {
    // 20 bytes is accepted, 21 is not.
    assert!(parse("abcdefghijklmnopqrst").is_ok());
    assert!(matches!(parse("abcdefghijklmnopqrstu"),
                     Err(ParseError::NameTooLong { pos: 0, .. })));
}

#[test]
fn deep_nesting() {
    let mut src = String::from("0");
    for _ in 0..400 {
        src = format!("(+ 1 {src})");
    }

    assert_eq!(eval_str(&src), 400);
}

#[test]
fn scripts() {
    assert_success("const a (+ 1 2)\n(* a 2)");
    assert_success("\n\nconst a 1\n\na\n");
    assert_failure("(/ 1 0)");
    assert_failure("missing");
    assert_failure("const a (+ 1 b)");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.pre").unwrap();
    assert_success(&contents);
}
