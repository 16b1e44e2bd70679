use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitxError>;

#[derive(Error, Debug)]
pub enum GitxError {
    #[error("No valid commit message prefix found in AI response")]
    NoPrefixFound,

    #[error("Commit message is empty after formatting")]
    EmptyMessage,

    #[error("git executable not found in PATH")]
    GitNotFound,

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    #[error("Configuration serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GitxError {
    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            GitxError::NoPrefixFound => Some(
                "Start the message with one of feat:, test:, revert:, chore:, style:, refactor:, fix: or use github mode",
            ),
            GitxError::EmptyMessage => {
                Some("The input has no non-blank lines; check the AI response before committing")
            }
            GitxError::GitNotFound => Some("Install git and make sure it is on your PATH"),
            GitxError::GitCommand(msg) if msg.contains("nothing to commit") => {
                Some("Run 'git add <files>' to stage your changes first")
            }
            GitxError::Config(msg) if msg.contains("prefixes") => Some(
                "Set [format] prefixes in ~/.config/gitx/config.toml to a non-empty list without duplicates",
            ),
            GitxError::ConfigParse(_) => {
                Some("Run 'gitx config validate' and check ~/.config/gitx/config.toml")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_no_prefix_found() {
        let suggestion = GitxError::NoPrefixFound.suggestion().unwrap();
        assert!(suggestion.contains("feat:"));
        assert!(suggestion.contains("github mode"));
    }

    #[test]
    fn test_suggestion_nothing_to_commit() {
        let err = GitxError::GitCommand(
            "On branch main\nnothing to commit, working tree clean".to_string(),
        );
        assert_eq!(
            err.suggestion(),
            Some("Run 'git add <files>' to stage your changes first")
        );
    }

    #[test]
    fn test_suggestion_config_prefixes() {
        let err = GitxError::Config("format.prefixes must not be empty".to_string());
        assert!(err.suggestion().unwrap().contains("[format] prefixes"));
    }

    #[test]
    fn test_suggestion_returns_none_for_other_errors() {
        let cases = vec![
            GitxError::InvalidInput("bad input".to_string()),
            GitxError::GitCommand("fatal: not a git repository".to_string()),
            GitxError::Config("some random config error".to_string()),
        ];

        for err in cases {
            assert!(
                err.suggestion().is_none(),
                "Expected None for {:?}, got {:?}",
                err,
                err.suggestion()
            );
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GitxError::NoPrefixFound.to_string(),
            "No valid commit message prefix found in AI response"
        );
        assert_eq!(
            GitxError::GitCommand("boom".to_string()).to_string(),
            "Git command failed: boom"
        );
    }
}
