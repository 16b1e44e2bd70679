use std::path::Path;
use std::process::Command;

use crate::error::{GitxError, Result};
use crate::message::FormattedCommitArgs;

/// Check that a `git` executable is reachable through `PATH`.
pub fn ensure_git_available() -> Result<()> {
    which::which("git").map_err(|_| GitxError::GitNotFound)?;
    Ok(())
}

/// Execute git commit with pre-formatted arguments
///
/// Use git CLI so GPG signing, hooks and user config apply as usual.
///
/// # Arguments
/// * `args` - Formatted arguments, starting with `commit`
///
/// # Errors
/// - [`GitxError::EmptyMessage`] when `args` carries no `-m` pair
/// - [`GitxError::GitCommand`] when git exits non-zero
pub fn commit_with_args(args: &FormattedCommitArgs) -> Result<()> {
    commit_with_args_in(None, args)
}

/// Same as [`commit_with_args`], running git inside `repo_dir` when given.
pub fn commit_with_args_in(repo_dir: Option<&Path>, args: &FormattedCommitArgs) -> Result<()> {
    if !args.has_message() {
        return Err(GitxError::EmptyMessage);
    }

    tracing::debug!("Running git {}", args.as_args().join(" "));

    let mut command = Command::new("git");
    if let Some(dir) = repo_dir {
        command.current_dir(dir);
    }
    let output = command.args(args.as_args()).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let error_msg = if stderr.trim().is_empty() {
            // Some git errors are output to stdout instead of stderr
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(GitxError::GitCommand(error_msg));
    }

    tracing::debug!("{}", String::from_utf8_lossy(&output.stdout).trim());

    Ok(())
}
