//! Function rewriting ahead of evaluation.
//!
//! The evaluator only understands numbers and operator characters, so the
//! function forms `SQRT(...)`, `(...)^2`, `sin(...)` and `cos(...)` are
//! replaced by numeric literals first. Each form has its own pass and the
//! passes always run in the same order: square root, power, trigonometry.
//!
//! A pass scans the current text once from left to right. It never looks at
//! its own replacements, and an argument may not contain `)`, so nested calls
//! are not supported. An argument that still contains a function name for a
//! later pass is evaluated as-is, and the evaluator skips the unknown token.

use super::error::Result;
use super::evaluator::{EvalOptions, evaluate_with};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SQRT_CALL: Regex = Regex::new(r"SQRT\(([^)]+)\)").unwrap();
    static ref SQUARE_CALL: Regex = Regex::new(r"\(([^)]+)\)\^2").unwrap();
    static ref TRIG_CALL: Regex = Regex::new(r"(sin|cos)\(([^)]+)\)").unwrap();
}

/// One function form: where its argument is captured and what to compute.
struct RewritePattern {
    name: &'static str,
    regex: &'static Regex,
    /// Capture group holding the argument text.
    inner: usize,
    function: fn(&Captures<'_>, f64) -> f64,
}

fn sqrt(_: &Captures<'_>, x: f64) -> f64 {
    x.sqrt()
}

fn square(_: &Captures<'_>, x: f64) -> f64 {
    x.powi(2)
}

fn trig(caps: &Captures<'_>, x: f64) -> f64 {
    match &caps[1] {
        "sin" => x.sin(),
        _ => x.cos(),
    }
}

/// The passes, in the order they run.
fn passes() -> [RewritePattern; 3] {
    [
        RewritePattern {
            name: "sqrt",
            regex: &SQRT_CALL,
            inner: 1,
            function: sqrt,
        },
        RewritePattern {
            name: "power",
            regex: &SQUARE_CALL,
            inner: 1,
            function: square,
        },
        RewritePattern {
            name: "trig",
            regex: &TRIG_CALL,
            inner: 2,
            function: trig,
        },
    ]
}

/// Rewrite every function form using the default evaluation options.
pub fn rewrite(expression: &str) -> Result<String> {
    rewrite_with(expression, EvalOptions::default())
}

/// Rewrite every function form, evaluating arguments with `options`.
///
/// Fails only when evaluating a captured argument fails; the first such
/// failure aborts the rewrite.
pub fn rewrite_with(expression: &str, options: EvalOptions) -> Result<String> {
    let mut current = expression.to_string();
    for pattern in passes() {
        current = apply_pass(&pattern, &current, options)?;
    }
    Ok(current)
}

fn apply_pass(pattern: &RewritePattern, expression: &str, options: EvalOptions) -> Result<String> {
    let mut output = String::with_capacity(expression.len());
    let mut last_end = 0;
    let mut replaced = 0;

    for caps in pattern.regex.captures_iter(expression) {
        let whole = caps.get_match();
        let argument = evaluate_with(&caps[pattern.inner], options)?;
        let value = (pattern.function)(&caps, argument);

        output.push_str(&expression[last_end..whole.start()]);
        output.push_str(&format_literal(value));
        last_end = whole.end();
        replaced += 1;
    }
    output.push_str(&expression[last_end..]);

    if replaced > 0 {
        tracing::debug!(pass = pattern.name, replaced, output = %output, "rewrote function calls");
    }
    Ok(output)
}

/// Shortest text that parses back to exactly `value`.
///
/// Integral values keep a trailing `.0`, so `3` is written as `3.0`.
pub fn format_literal(value: f64) -> String {
    format!("{value:?}")
}
