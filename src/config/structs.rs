//! Configuration structures.
//!
//! Defaults live here (`Default` + `serde(default)`); the loader only layers
//! the file and environment on top.

use serde::{Deserialize, Serialize};

use crate::error::{GitxError, Result};
use crate::message::{CommitMessageFormatter, MessageMode, PrefixToken};

/// Application configuration.
///
/// Built once at startup and passed by reference to every command.
///
/// # Example
/// ```toml
/// [format]
/// default_mode = "default"
/// prefixes = ["feat", "fix", "chore"]
///
/// [ui]
/// colored = true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// Commit message formatting.
    #[serde(default)]
    pub format: FormatConfig,

    /// Terminal UI behavior.
    #[serde(default)]
    pub ui: UIConfig,
}

impl AppConfig {
    /// Validates configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.format.validate()
    }

    /// Formatter bound to the configured prefix vocabulary.
    pub fn formatter(&self) -> CommitMessageFormatter {
        CommitMessageFormatter::new(self.format.prefixes.clone())
    }
}

/// Formatting configuration.
///
/// # Fields
/// - `default_mode`: mode used when the command line does not name one (default: `default`)
/// - `prefixes`: recognised commit prefixes, a subset of the built-in seven (default: all)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FormatConfig {
    #[serde(default)]
    pub default_mode: MessageMode,

    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<PrefixToken>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            default_mode: MessageMode::default(),
            prefixes: default_prefixes(),
        }
    }
}

impl FormatConfig {
    fn validate(&self) -> Result<()> {
        if self.prefixes.is_empty() {
            return Err(GitxError::Config(
                "format.prefixes must not be empty".to_string(),
            ));
        }

        for (idx, prefix) in self.prefixes.iter().enumerate() {
            if self.prefixes[..idx].contains(prefix) {
                return Err(GitxError::Config(format!(
                    "format.prefixes: '{}' is listed more than once",
                    prefix
                )));
            }
        }

        Ok(())
    }
}

/// UI configuration.
///
/// # Fields
/// - `colored`: enable colored output (default: `true`)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UIConfig {
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_prefixes() -> Vec<PrefixToken> {
    PrefixToken::ALL.to_vec()
}
