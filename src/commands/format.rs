use clap::ValueEnum;

/// How `format` and `classify` print their result.
///
/// Parsed by clap from `-f/--format`; unknown values are rejected at parse time.
/// `--json` is a shortcut for `--format json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Shell line or count table for the terminal
    #[default]
    Text,
    /// `{"success": ..., "data": ...}` envelope on stdout
    Json,
}

impl OutputFormat {
    /// Resolves `--format` together with the `--json` shortcut.
    pub fn from_cli(format: OutputFormat, json: bool) -> Self {
        if json { Self::Json } else { format }
    }

    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    /// JSON output is never colored; otherwise the config decides.
    pub fn effective_colored(&self, config_colored: bool) -> bool {
        config_colored && !self.is_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shortcut_overrides_format() {
        assert_eq!(
            OutputFormat::from_cli(OutputFormat::Text, true),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_cli(OutputFormat::Text, false),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_value_names() {
        assert_eq!(
            OutputFormat::from_str("json", true).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_str("TEXT", true).unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_json_disables_color() {
        assert!(!OutputFormat::Json.effective_colored(true));
        assert!(OutputFormat::Text.effective_colored(true));
        assert!(!OutputFormat::Text.effective_colored(false));
    }
}
