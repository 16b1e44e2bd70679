use super::format_message::shell_command_line;
use super::input::read_raw_response;
use super::options::CommitOptions;
use crate::config::AppConfig;
use crate::error::{GitxError, Result};
use crate::git;
use crate::ui;

/// Format the AI response and commit staged changes with it.
///
/// Flow: read input → format → reject empty message → preview → `git commit`.
/// With `dry_run` the git command is printed instead of executed.
pub fn run(options: &CommitOptions<'_>, config: &AppConfig) -> Result<()> {
    let colored = config.ui.colored;

    let raw = read_raw_response(options.input)?;
    let formatted = config.formatter().format(&raw, options.mode)?;

    if let Some(prefix) = formatted.dominant() {
        tracing::debug!("Dominant prefix: {}", prefix);
    }

    // github mode lets blank input through; git would reject it anyway
    if !formatted.has_message() {
        return Err(GitxError::EmptyMessage);
    }

    ui::step("1/2", "Formatted commit message:", colored);
    println!();
    println!("{}", ui::format_message_preview(&formatted, colored));
    println!();

    if options.dry_run {
        println!("{}", ui::info("Dry run, not committing:", colored));
        println!("{}", shell_command_line(&formatted));
        return Ok(());
    }

    ui::step("2/2", "Committing...", colored);
    git::ensure_git_available()?;
    git::commit_with_args(&formatted)?;
    ui::success("Committed with AI-generated message.", colored);

    Ok(())
}
