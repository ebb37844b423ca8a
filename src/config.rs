//! User settings loaded from a TOML file.
//!
//! The default location is `$XDG_CONFIG_HOME/stackcalc/config.toml`. Every
//! field is optional; a missing default file means default settings.

use crate::calculator::{EvalOptions, ParenMode, TokenPolicy};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Whether parentheses group or behave as zero-valued operators.
    pub parentheses: ParenMode,
    /// What to do with tokens the evaluator does not recognize.
    pub unknown_tokens: TokenPolicy,
    /// Decimal places shown for results.
    pub decimals: u16,
    /// Text shown in place of a result when evaluation fails.
    pub error_marker: String,
    /// Copy successful results to the clipboard.
    pub copy_result: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parentheses: ParenMode::default(),
            unknown_tokens: TokenPolicy::default(),
            decimals: 2,
            error_marker: "Error".to_string(),
            copy_result: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist; the default file may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?settings, "loaded config");
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            parentheses: self.parentheses,
            unknown_tokens: self.unknown_tokens,
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stackcalc").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_config() {
        let settings = Settings::from_toml(
            r#"
            parentheses = "grouping"
            unknown_tokens = "reject"
            decimals = 4
            error_marker = "ERR"
            copy_result = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.parentheses, ParenMode::Grouping);
        assert_eq!(settings.unknown_tokens, TokenPolicy::Reject);
        assert_eq!(settings.decimals, 4);
        assert_eq!(settings.error_marker, "ERR");
        assert!(settings.copy_result);
        assert_eq!(
            settings.eval_options(),
            EvalOptions {
                parentheses: ParenMode::Grouping,
                unknown_tokens: TokenPolicy::Reject,
            }
        );
    }

    #[test]
    fn test_invalid_config() {
        assert!(Settings::from_toml(r#"parentheses = "curly""#).is_err());
        assert!(Settings::from_toml("decimals = -1").is_err());
        assert!(Settings::from_toml("decimals = 70000").is_err());
        assert!(Settings::from_toml("colour = true").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("stackcalc-does-not-exist.toml");
        assert!(Settings::load(Some(&path)).is_err());
    }
}
