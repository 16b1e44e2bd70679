use serde::Serialize;

use super::input::read_raw_response;
use super::json;
use super::options::FormatOptions;
use crate::config::AppConfig;
use crate::error::Result;
use crate::message::{FormattedCommitArgs, MessageMode, PrefixToken};
use crate::ui;

/// JSON payload of the `format` command.
#[derive(Debug, Serialize)]
pub struct FormatResult {
    pub mode: MessageMode,
    pub dominant_prefix: Option<PrefixToken>,
    pub args: Vec<String>,
    pub lines: Vec<String>,
}

impl FormatResult {
    pub fn new(mode: MessageMode, formatted: &FormattedCommitArgs) -> Self {
        Self {
            mode,
            dominant_prefix: formatted.dominant(),
            args: formatted.as_args().to_vec(),
            lines: formatted.commit_lines().map(str::to_string).collect(),
        }
    }
}

/// Format the AI response and print the resulting git invocation.
pub fn run(options: &FormatOptions<'_>, config: &AppConfig) -> Result<()> {
    let raw = read_raw_response(options.input)?;
    let formatted = config.formatter().format(&raw, options.mode)?;

    tracing::debug!(
        "mode={}, dominant={:?}, {} lines",
        options.mode,
        formatted.dominant(),
        formatted.pair_count()
    );

    if let Some(warning) = empty_message_warning(&formatted) {
        ui::warning(warning, options.format.effective_colored(config.ui.colored));
    }

    if options.format.is_json() {
        json::output_json(FormatResult::new(options.mode, &formatted))
    } else {
        println!("{}", shell_command_line(&formatted));
        Ok(())
    }
}

/// Warning for a result without `-m` pairs; `gitx commit` would refuse it.
fn empty_message_warning(formatted: &FormattedCommitArgs) -> Option<&'static str> {
    (!formatted.has_message())
        .then_some("No message lines left after formatting; git would reject this commit")
}

/// Render `git <args>` as a copy-pasteable POSIX shell line.
pub fn shell_command_line(args: &FormattedCommitArgs) -> String {
    let mut line = String::from("git");
    for arg in args.as_args() {
        line.push(' ');
        line.push_str(&shell_quote(arg));
    }
    line
}

fn shell_quote(arg: &str) -> String {
    let is_plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@,+%".contains(c));
    if is_plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
