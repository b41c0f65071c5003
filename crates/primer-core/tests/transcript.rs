//! End-to-end tests for lesson output.

use primer_core::{Lesson, LessonConfig, PrimerError, Runner};

fn run_to_string(runner: &Runner, selection: &[Lesson]) -> (String, Result<(), PrimerError>) {
    let mut out = Vec::new();
    let result = runner.run(selection, &mut out);
    (String::from_utf8(out).expect("output is UTF-8"), result)
}

/// The full default run, byte for byte.
#[test]
fn test_default_transcript() {
    let transcript = Runner::default().transcript().expect("default run succeeds");
    insta::assert_snapshot!("default_transcript", transcript);
}

/// Identical inputs give identical output.
#[test]
fn test_runs_are_deterministic() {
    let runner = Runner::default();
    let first = runner.transcript().unwrap();
    let second = runner.transcript().unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_inventory_totals_in_order() {
    let (out, result) = run_to_string(&Runner::default(), &[Lesson::Operators]);
    result.unwrap();

    let totals: Vec<i64> = out
        .lines()
        .filter(|line| line.starts_with("Total inventory after"))
        .map(|line| line.rsplit(": ").next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(totals, vec![19, 20, 25, 15]);
}

#[test]
fn test_unimplemented_exercises_print_nothing() {
    let (out, result) = run_to_string(&Runner::default(), &[Lesson::Operators]);
    result.unwrap();

    assert!(!out.contains("Exercise 3"));
    assert!(!out.contains("Access validation"));
    assert!(!out.contains("Support ticket load"));
}

/// A bad numeric literal stops the run but keeps what was already printed.
#[test]
fn test_parse_failure_keeps_earlier_output() {
    let config = LessonConfig::from_toml("[conversions]\nnumeric_text = \"12three\"\n").unwrap();
    let (out, result) = run_to_string(&Runner::new(config), &[]);

    match result {
        Err(PrimerError::InvalidNumericLiteral { text, reason, .. }) => {
            assert_eq!(text, "12three");
            assert_eq!(reason, "`t` is not a digit");
        }
        other => panic!("expected InvalidNumericLiteral, got {other:?}"),
    }

    assert!(out.contains("=== Lesson 1: Introduction ==="));
    assert!(out.ends_with("4. Integer price: 19.\n"));
    assert!(!out.contains("5. Converted text"));
    assert!(!out.contains("Lesson 3"));
}

#[test]
fn test_config_overrides_only_named_values() {
    let toml = r#"
[profile]
name = "Ada Lovelace"

[payroll]
hours_worked = 38
    "#;
    let runner = Runner::new(LessonConfig::from_toml(toml).unwrap());
    let transcript = runner.transcript().unwrap();

    assert!(transcript.contains("Hello! My name is Ada Lovelace!"));
    assert!(transcript.contains("3. I am 26 years old."));
    assert!(transcript.contains("Total salary: 760\n"));
    assert!(transcript.contains("Total inventory after devices delivered: 15"));
}

#[test]
fn test_decimal_product_is_exact() {
    let toml = "[arithmetic]\ndecimal = \"0.1\"\nmultiplier = 3\n";
    let runner = Runner::new(LessonConfig::from_toml(toml).unwrap());
    let (out, result) = run_to_string(&runner, &[Lesson::Variables]);
    result.unwrap();

    assert!(out.contains("2. Result 2 (decimal 0.1 * int 3): 0.3\n"));
}

/// The inferred float keeps the course's literal.
#[test]
fn test_inferred_float_literal() {
    let (out, result) = run_to_string(&Runner::default(), &[Lesson::Variables]);
    result.unwrap();
    assert!(out.contains("3. Type of decimal_number (3.14): f64\n"));
}

#[test]
fn test_salary_overflow_is_fatal() {
    let toml = format!("[payroll]\nhourly_rate = {}\n", i64::MAX);
    let runner = Runner::new(LessonConfig::from_toml(&toml).unwrap());
    let (out, result) = run_to_string(&runner, &[Lesson::Operators]);

    assert!(matches!(result, Err(PrimerError::ArithmeticOverflow { .. })));
    assert!(out.contains("Total inventory after devices delivered: 15\n"));
    assert!(!out.contains("Total salary"));
}
