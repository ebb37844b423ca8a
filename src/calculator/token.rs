//! Whitespace tokenizer for calculator expressions.
//!
//! Tokens are separated by runs of whitespace. A token is a number when the
//! whole of it parses as one; otherwise only its first character decides
//! whether it is an operator, so `(2` is read as `(` and the `2` is lost.

use super::error::{CalcError, Result};
use serde::Deserialize;

/// A binary operator or a parenthesis character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `X`
    Mul,
    /// `/`
    Div,
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Operator {
    /// Map an operator character to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            'X' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => 'X',
            Self::Div => '/',
            Self::Open => '(',
            Self::Close => ')',
        }
    }

    /// Whether `top` should be applied before `self` is pushed.
    ///
    /// False only when `self` is multiplicative and `top` is additive. Every
    /// other pair, parentheses included, counts as equal precedence.
    pub fn yields_to(self, top: Operator) -> bool {
        !(matches!(self, Self::Mul | Self::Div) && matches!(top, Self::Add | Self::Sub))
    }

    /// Apply the operator to `left` and `right`.
    ///
    /// Parentheses have no arithmetic meaning and evaluate to zero.
    pub fn apply(self, right: f64, left: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(left / right)
            }
            Self::Open | Self::Close => Ok(0.0),
        }
    }
}

/// A classified token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

/// What to do with a token that is neither a number nor an operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicy {
    /// Drop it silently.
    #[default]
    Skip,
    /// Fail with [`CalcError::UnrecognizedToken`].
    Reject,
}

/// Classify a single non-empty token.
///
/// Returns `None` for an unrecognized token.
pub fn classify(word: &str) -> Option<Token> {
    if let Ok(value) = word.parse::<f64>() {
        return Some(Token::Number(value));
    }

    word.chars()
        .next()
        .and_then(Operator::from_char)
        .map(Token::Operator)
}

/// Split an expression on whitespace and classify every token.
pub fn tokenize(expression: &str, policy: TokenPolicy) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    for word in expression.split_whitespace() {
        match classify(word) {
            Some(token) => tokens.push(token),
            None => match policy {
                TokenPolicy::Skip => {
                    tracing::debug!(token = word, "skipping unrecognized token");
                }
                TokenPolicy::Reject => {
                    return Err(CalcError::UnrecognizedToken(word.to_string()));
                }
            },
        }
    }

    Ok(tokens)
}
