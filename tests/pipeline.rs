//! End-to-end tests for rewriting followed by evaluation.

use proptest::prelude::*;
use stackcalc::calculator::{
    CalcError, EvalOptions, ParenMode, evaluate, evaluate_with, format_literal, rewrite,
};

fn grouping() -> EvalOptions {
    EvalOptions {
        parentheses: ParenMode::Grouping,
        ..EvalOptions::default()
    }
}

fn run(input: &str) -> Result<f64, CalcError> {
    evaluate(&rewrite(input)?)
}

#[test]
fn test_arithmetic() {
    assert_eq!(evaluate("3 + 4 X 2"), Ok(11.0));
    assert_eq!(evaluate("10 / 2 - 3"), Ok(2.0));
    assert_eq!(evaluate("5 / 0"), Err(CalcError::DivisionByZero));
    assert!(matches!(evaluate("+ 3"), Err(CalcError::MalformedExpression(_))));
    assert!(matches!(evaluate(""), Err(CalcError::MalformedExpression(_))));
}

#[test]
fn test_function_rewrites() {
    assert_eq!(rewrite("SQRT(9)").unwrap(), "3.0");
    assert_eq!(evaluate("3.0"), Ok(3.0));
    assert_eq!(rewrite("(4)^2").unwrap(), "16.0");
    assert_eq!(rewrite("sin(0)").unwrap(), "0.0");
    assert_eq!(rewrite("cos(0)").unwrap(), "1.0");
    assert_eq!(rewrite("SQRT(4) + 3").unwrap(), "2.0 + 3");
    assert_eq!(run("SQRT(4) + 3"), Ok(5.0));
}

#[test]
fn test_trig_arguments_in_radians() {
    assert_eq!(rewrite("sin(1)").unwrap(), format_literal(1f64.sin()));
    assert_eq!(rewrite("cos(3)").unwrap(), format_literal(3f64.cos()));
    assert_eq!(run("cos(180) + 1"), Ok(180f64.cos() + 1.0));
}

#[test]
fn test_mixed_pipeline() {
    assert_eq!(run("SQRT(16) X (3)^2 - cos(0)"), Ok(35.0));
    assert_eq!(run("(SQRT(9))^2 / 3"), Ok(3.0));
    assert_eq!(run("SQRT(1 / 0) + 1"), Err(CalcError::DivisionByZero));
}

#[test]
fn test_parentheses_do_not_group() {
    // `(` is reduced as soon as `+` arrives and finds a single operand.
    assert_eq!(
        evaluate("( 2 + 3 ) X 4"),
        Err(CalcError::MalformedExpression("missing operand"))
    );
    assert_eq!(evaluate_with("( 2 + 3 ) X 4", grouping()), Ok(20.0));
}

proptest! {
    #[test]
    fn prop_rewrite_without_functions_is_identity(expr in "[0-9 +X/().-]{0,40}") {
        prop_assert_eq!(rewrite(&expr).unwrap(), expr);
    }

    #[test]
    fn prop_literal_round_trips(x in -1e300..1e300f64) {
        let literal = format_literal(x);
        prop_assert_eq!(literal.parse::<f64>().unwrap(), x);
        prop_assert_eq!(evaluate(&literal), Ok(x));
    }

    #[test]
    fn prop_sqrt_matches_std(x in 0.0..1e6f64) {
        let rewritten = rewrite(&format!("SQRT({x})")).unwrap();
        prop_assert_eq!(rewritten, format_literal(x.sqrt()));
    }

    #[test]
    fn prop_modes_agree_without_parentheses(
        first in 1u32..100,
        rest in prop::collection::vec(
            (prop_oneof![Just("+"), Just("-"), Just("X"), Just("/")], 1u32..100),
            0..8,
        ),
    ) {
        let mut expr = first.to_string();
        for (op, n) in &rest {
            expr.push_str(&format!(" {op} {n}"));
        }
        prop_assert_eq!(evaluate(&expr), evaluate_with(&expr, grouping()));
    }
}
