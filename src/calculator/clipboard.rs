//! Clipboard support for copying calculator results.

use super::evaluation::CalcResult;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy the clipboard form of a successful result.
///
/// Returns `Ok(false)` without touching the clipboard for error results.
pub fn copy_to_clipboard(result: &CalcResult) -> Result<bool> {
    let Some(text) = result.clipboard() else {
        return Ok(false);
    };

    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;

    tracing::debug!(text, "copied result to clipboard");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Outcome;

    #[test]
    fn test_error_result_is_not_copied() {
        let result = CalcResult {
            expression: "1 / 0".to_string(),
            outcome: Outcome::Failed("Cannot divide by zero".to_string()),
        };
        assert!(!copy_to_clipboard(&result).unwrap());
    }
}
