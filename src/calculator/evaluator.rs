//! Two-stack operator-precedence evaluator.
//!
//! Operands go on a value stack and pending operators on an operator stack.
//! Before an operator is pushed, every pending operator it yields to is
//! applied. Both stacks live only for the duration of a single call.

use super::error::{CalcError, Result};
use super::token::{Operator, Token, TokenPolicy, tokenize};
use serde::Deserialize;

/// How parenthesis tokens are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParenMode {
    /// Parentheses are ordinary operators that evaluate to zero and do not
    /// group anything.
    #[default]
    Literal,
    /// Conventional grouping.
    Grouping,
}

/// Evaluation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub parentheses: ParenMode,
    pub unknown_tokens: TokenPolicy,
}

/// Evaluate an expression with the default options.
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_with(expression, EvalOptions::default())
}

/// Evaluate a whitespace-separated infix expression.
pub fn evaluate_with(expression: &str, options: EvalOptions) -> Result<f64> {
    let tokens = tokenize(expression, options.unknown_tokens)?;
    let mut stacks = Stacks::default();

    for token in tokens {
        match token {
            Token::Number(value) => stacks.values.push(value),
            Token::Operator(op) => match options.parentheses {
                ParenMode::Literal => stacks.push_literal(op)?,
                ParenMode::Grouping => stacks.push_grouping(op)?,
            },
        }
    }

    let result = stacks.finish(options.parentheses)?;
    tracing::debug!(expression, result, "evaluated expression");
    Ok(result)
}

#[derive(Default)]
struct Stacks {
    values: Vec<f64>,
    operators: Vec<Operator>,
}

impl Stacks {
    fn push_literal(&mut self, op: Operator) -> Result<()> {
        while let Some(&top) = self.operators.last()
            && op.yields_to(top)
        {
            self.operators.pop();
            self.reduce(top)?;
        }
        self.operators.push(op);
        Ok(())
    }

    fn push_grouping(&mut self, op: Operator) -> Result<()> {
        match op {
            Operator::Open => self.operators.push(op),
            Operator::Close => loop {
                match self.operators.pop() {
                    Some(Operator::Open) => break,
                    Some(pending) => self.reduce(pending)?,
                    None => return Err(CalcError::UnbalancedParenthesis),
                }
            },
            _ => {
                while let Some(&top) = self.operators.last()
                    && top != Operator::Open
                    && op.yields_to(top)
                {
                    self.operators.pop();
                    self.reduce(top)?;
                }
                self.operators.push(op);
            }
        }
        Ok(())
    }

    /// Apply the remaining operators and take the single result.
    fn finish(mut self, mode: ParenMode) -> Result<f64> {
        while let Some(op) = self.operators.pop() {
            if mode == ParenMode::Grouping && op == Operator::Open {
                return Err(CalcError::UnbalancedParenthesis);
            }
            self.reduce(op)?;
        }

        let result = self
            .values
            .pop()
            .ok_or(CalcError::MalformedExpression("no value to return"))?;
        if !self.values.is_empty() {
            return Err(CalcError::MalformedExpression("operands left over"));
        }
        Ok(result)
    }

    /// Pop two operands, apply `op`, and push the result.
    fn reduce(&mut self, op: Operator) -> Result<()> {
        let right = self
            .values
            .pop()
            .ok_or(CalcError::MalformedExpression("missing operand"))?;
        let left = self
            .values
            .pop()
            .ok_or(CalcError::MalformedExpression("missing operand"))?;
        let value = op.apply(right, left)?;
        tracing::trace!(op = %op.as_char(), left, right, value, "applied operator");
        self.values.push(value);
        Ok(())
    }
}
