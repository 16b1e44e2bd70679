//! Conventional-commit prefix vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Conventional-commit category recognised in AI responses.
///
/// The set is closed: configuration can narrow it but never extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixToken {
    Feat,
    Test,
    Revert,
    Chore,
    Style,
    Refactor,
    Fix,
}

impl PrefixToken {
    /// Every known prefix, in canonical order.
    pub const ALL: [PrefixToken; 7] = [
        PrefixToken::Feat,
        PrefixToken::Test,
        PrefixToken::Revert,
        PrefixToken::Chore,
        PrefixToken::Style,
        PrefixToken::Refactor,
        PrefixToken::Fix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixToken::Feat => "feat",
            PrefixToken::Test => "test",
            PrefixToken::Revert => "revert",
            PrefixToken::Chore => "chore",
            PrefixToken::Style => "style",
            PrefixToken::Refactor => "refactor",
            PrefixToken::Fix => "fix",
        }
    }

    /// Delimiter form as it appears in raw text, e.g. `feat:`.
    pub fn delimiter(&self) -> String {
        format!("{}:", self.as_str())
    }
}

impl fmt::Display for PrefixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrefixToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PrefixToken::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("Unknown commit prefix: {}", s))
    }
}
