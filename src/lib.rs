//! # gitx
//!
//! Turns a free-form AI response into `git commit` arguments.
//!
//! An AI assistant asked to describe staged changes usually answers with a
//! handful of conventional-commit lines (`feat: ...`, `fix: ...`). gitx picks
//! the dominant prefix, normalizes the lines and produces the argument vector
//! `["commit", "-m", <subject>, "-m", <body>, ...]`.
//!
//! ## Quick start
//!
//! ```bash
//! git add .
//! ai-tool describe | gitx commit
//!
//! # Preview only
//! gitx format -i response.txt
//! gitx classify -i response.txt --json
//! ```
//!
//! ## As a library
//! ```
//! use gitx::message::{MessageMode, format_commit_message};
//!
//! let args = format_commit_message("feat: add login\nfix: typo", MessageMode::Default).unwrap();
//! assert_eq!(args.as_args(), ["commit", "-m", "feat: add login", "-m", "typo"]);
//! ```
//!
//! ## Modules
//! - [`message`] - lexer, prefix classification and argument formatting
//! - [`commands`] - CLI command implementations
//! - [`config`] - configuration loading
//! - [`git`] - `git commit` invocation
//! - [`error`] - unified error type
//! - [`ui`] - terminal output helpers
//!
//! ## Configuration
//! Config file location:
//! - Linux: `~/.config/gitx/config.toml`
//! - macOS: `~/Library/Application Support/gitx/config.toml`
//! - Windows: `%APPDATA%\gitx\config\config.toml`
//!
//! ```toml
//! [format]
//! default_mode = "default"
//! prefixes = ["feat", "fix", "refactor"]
//!
//! [ui]
//! colored = true
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod message;
pub mod ui;
