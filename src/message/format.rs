//! Raw response → `git commit` argument formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::classify::classify;
use super::lexer::{Token, tokenize};
use super::prefix::PrefixToken;
use crate::error::Result;

/// How a raw response is turned into commit lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageMode {
    /// Split on prefixes and line breaks, force one dominant prefix onto the subject.
    #[default]
    Default,
    /// Keep every non-blank line as its own paragraph, no prefix handling.
    Github,
}

impl MessageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageMode::Default => "default",
            MessageMode::Github => "github",
        }
    }
}

impl fmt::Display for MessageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "github" => Ok(Self::Github),
            _ => Err(format!("Unknown message mode: {} (expected default|github)", s)),
        }
    }
}

/// Arguments for `git`: `commit` followed by one `-m <line>` pair per commit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedCommitArgs {
    args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dominant: Option<PrefixToken>,
}

impl FormattedCommitArgs {
    fn new(lines: Vec<String>, dominant: Option<PrefixToken>) -> Self {
        let mut args = Vec::with_capacity(1 + lines.len() * 2);
        args.push("commit".to_string());
        for line in lines {
            args.push("-m".to_string());
            args.push(line);
        }
        Self { args, dominant }
    }

    /// Full argument list, starting with `commit`.
    pub fn as_args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Message lines in order, without the `-m` flags.
    pub fn commit_lines(&self) -> impl Iterator<Item = &str> {
        self.args[1..].chunks(2).map(|pair| pair[1].as_str())
    }

    pub fn pair_count(&self) -> usize {
        (self.args.len() - 1) / 2
    }

    /// `false` for the degenerate `["commit"]` result, which git would reject.
    pub fn has_message(&self) -> bool {
        self.pair_count() > 0
    }

    /// Dominant prefix chosen in default mode; `None` in github mode.
    pub fn dominant(&self) -> Option<PrefixToken> {
        self.dominant
    }
}

/// Formats AI responses against a fixed prefix vocabulary.
#[derive(Debug, Clone)]
pub struct CommitMessageFormatter {
    vocabulary: Vec<PrefixToken>,
}

impl Default for CommitMessageFormatter {
    fn default() -> Self {
        Self::new(PrefixToken::ALL.to_vec())
    }
}

impl CommitMessageFormatter {
    pub fn new(vocabulary: Vec<PrefixToken>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &[PrefixToken] {
        &self.vocabulary
    }

    /// Lexes `raw` with this formatter's vocabulary.
    pub fn tokenize<'a>(&self, raw: &'a str) -> Vec<Token<'a>> {
        tokenize(raw, &self.vocabulary)
    }

    /// Formats `raw` into `git commit` arguments.
    ///
    /// # Errors
    /// [`GitxError::NoPrefixFound`](crate::error::GitxError::NoPrefixFound) in default mode when no known prefix occurs.
    /// Github mode never fails; blank input yields `["commit"]`.
    pub fn format(&self, raw: &str, mode: MessageMode) -> Result<FormattedCommitArgs> {
        match mode {
            MessageMode::Github => Ok(format_github(raw)),
            MessageMode::Default => self.format_default(raw),
        }
    }

    fn format_default(&self, raw: &str) -> Result<FormattedCommitArgs> {
        let tokens = self.tokenize(raw);
        let dominant = classify(&tokens)?.dominant;

        let mut lines: Vec<String> = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Text(text) => Some(text.trim()),
                _ => None,
            })
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if let Some(subject) = lines.first_mut()
            && !subject.starts_with(dominant.as_str())
        {
            *subject = format!("{}: {}", dominant, subject);
        }

        Ok(FormattedCommitArgs::new(lines, Some(dominant)))
    }
}

fn format_github(raw: &str) -> FormattedCommitArgs {
    let lines = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    FormattedCommitArgs::new(lines, None)
}

/// Formats with the full prefix vocabulary.
pub fn format_commit_message(raw: &str, mode: MessageMode) -> Result<FormattedCommitArgs> {
    CommitMessageFormatter::default().format(raw, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitxError;
    use pretty_assertions::assert_eq;

    fn args(raw: &str, mode: MessageMode) -> Vec<String> {
        format_commit_message(raw, mode).unwrap().into_args()
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("github".parse::<MessageMode>(), Ok(MessageMode::Github));
        assert_eq!("Default".parse::<MessageMode>(), Ok(MessageMode::Default));
        assert!("pr".parse::<MessageMode>().is_err());
    }

    #[test]
    fn test_default_mode_prefixes_subject_only() {
        assert_eq!(
            args("feat: add X\nfeat: add Y\nfix: patch Z", MessageMode::Default),
            vec!["commit", "-m", "feat: add X", "-m", "add Y", "-m", "patch Z"]
        );
    }

    #[test]
    fn test_default_mode_unprefixed_subject_gets_dominant() {
        assert_eq!(
            args("Summary line\n1. fix: null check\n2. fix: retry", MessageMode::Default),
            vec![
                "commit",
                "-m",
                "fix: Summary line",
                "-m",
                "1.",
                "-m",
                "null check",
                "-m",
                "2.",
                "-m",
                "retry",
            ]
        );
    }

    #[test]
    fn test_subject_starting_with_prefix_word_is_kept() {
        // "feature" already starts with "feat", so no prefix is added.
        let result = args("feature flag cleanup\nfeat: x", MessageMode::Default);
        assert_eq!(result[2], "feature flag cleanup");
    }

    #[test]
    fn test_github_mode_splits_on_newline_only() {
        assert_eq!(
            args("  Title \r\n\nfeat: body\rmore\n", MessageMode::Github),
            vec!["commit", "-m", "Title", "-m", "feat: body\rmore"]
        );
    }

    #[test]
    fn test_github_mode_blank_input_is_degenerate() {
        let formatted = format_commit_message(" \n\t\n", MessageMode::Github).unwrap();
        assert_eq!(formatted.as_args(), ["commit"]);
        assert!(!formatted.has_message());
        assert_eq!(formatted.dominant(), None);
    }

    #[test]
    fn test_default_mode_blank_input_fails() {
        let err = format_commit_message("   ", MessageMode::Default).unwrap_err();
        assert!(matches!(err, GitxError::NoPrefixFound));
    }

    #[test]
    fn test_prefix_only_input_has_no_lines() {
        let formatted = format_commit_message("feat:\n", MessageMode::Default).unwrap();
        assert_eq!(formatted.as_args(), ["commit"]);
        assert_eq!(formatted.dominant(), Some(PrefixToken::Feat));
    }

    #[test]
    fn test_restricted_vocabulary() {
        let formatter = CommitMessageFormatter::new(vec![PrefixToken::Fix]);
        let formatted = formatter
            .format("chore: bump\nfix: crash", MessageMode::Default)
            .unwrap();
        assert_eq!(
            formatted.as_args(),
            ["commit", "-m", "fix: chore: bump", "-m", "crash"]
        );

        let err = formatter.format("chore: bump", MessageMode::Default);
        assert!(matches!(err, Err(GitxError::NoPrefixFound)));
    }

    #[test]
    fn test_commit_lines_and_pair_count() {
        let formatted = format_commit_message("test: a\nb", MessageMode::Default).unwrap();
        assert_eq!(formatted.pair_count(), 2);
        assert_eq!(formatted.commit_lines().collect::<Vec<_>>(), vec!["test: a", "b"]);
    }
}
