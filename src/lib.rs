//! A calculator for space-separated infix expressions.
//!
//! Expressions such as `3 + 4 X 2` are evaluated with a two-stack
//! operator-precedence evaluator. The function forms `SQRT(...)`, `(...)^2`,
//! `sin(...)` and `cos(...)` are first rewritten into numeric literals.
//!
//! ```
//! use stackcalc::calculator::{evaluate, rewrite};
//!
//! let rewritten = rewrite("SQRT(4) + 3").unwrap();
//! assert_eq!(rewritten, "2.0 + 3");
//! assert_eq!(evaluate(&rewritten), Ok(5.0));
//! ```

pub mod calculator;
pub mod config;
