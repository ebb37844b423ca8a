//! Full evaluation pipeline for front-ends.
//!
//! Rewrites function calls, evaluates the result, and turns the outcome into
//! a [`CalcResult`] with display and clipboard strings. Errors from either
//! stage stop here; front-ends only see a value or a failure reason.

use super::evaluator::{EvalOptions, evaluate_with};
use super::preprocess::rewrite_with;

/// A trimmed input expression and what came of evaluating it.
#[derive(Clone, Debug, PartialEq)]
pub struct CalcResult {
    pub expression: String,
    pub outcome: Outcome,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A finite value, pre-formatted for the screen and for the clipboard.
    Value {
        value: f64,
        display: String,
        clipboard: String,
    },
    /// Evaluation failed, or produced NaN or an infinity.
    Failed(String),
}

impl CalcResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Value { .. })
    }

    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Value { value, .. } => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    /// Formatted value, or the failure reason.
    pub fn display(&self) -> &str {
        match &self.outcome {
            Outcome::Value { display, .. } => display,
            Outcome::Failed(reason) => reason,
        }
    }

    /// Raw number to copy; `None` on failure.
    pub fn clipboard(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Value { clipboard, .. } => Some(clipboard),
            Outcome::Failed(_) => None,
        }
    }
}

/// Rewrite and evaluate an expression, formatting the value with
/// `decimals` fixed decimal places.
pub fn evaluate_expression(input: &str, options: EvalOptions, decimals: u16) -> CalcResult {
    let expression = input.trim().to_string();

    let outcome = match rewrite_with(&expression, options)
        .and_then(|rewritten| evaluate_with(&rewritten, options))
    {
        Ok(value) if value.is_nan() => Outcome::Failed("Not a Number".to_string()),
        Ok(value) if value.is_infinite() => {
            let reason = if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            };
            Outcome::Failed(reason.to_string())
        }
        Ok(value) => Outcome::Value {
            value,
            display: format_display(value, decimals),
            clipboard: format_clipboard(value),
        },
        Err(err) => {
            tracing::warn!(expression = %expression, error = %err, "evaluation failed");
            Outcome::Failed(err.to_string())
        }
    };

    CalcResult {
        expression,
        outcome,
    }
}

fn format_display(value: f64, decimals: u16) -> String {
    format!("{:.*}", usize::from(decimals), value)
}

/// Integral values lose their `.0`; everything else is the shortest exact form.
fn format_clipboard(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
