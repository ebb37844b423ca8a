//! Calculator module for evaluating space-separated infix expressions.
//!
//! This module provides functionality to:
//! - Rewrite `SQRT(...)`, `(...)^2`, `sin(...)` and `cos(...)` into numbers
//! - Evaluate the rewritten expression with a two-stack evaluator
//! - Copy results to the clipboard

mod clipboard;
mod error;
mod evaluation;
mod evaluator;
mod preprocess;
mod token;

pub use clipboard::copy_to_clipboard;
pub use error::{CalcError, Result};
pub use evaluation::{CalcResult, Outcome, evaluate_expression};
pub use evaluator::{EvalOptions, ParenMode, evaluate, evaluate_with};
pub use preprocess::{format_literal, rewrite, rewrite_with};
pub use token::{Operator, Token, TokenPolicy, classify, tokenize};
