//! command option structure
//!
//! Provide a unified parameter passing method for each command, which is constructed from CLI parameter parsing.
//!
//! # Design
//! - Borrow paths from the parsed CLI instead of cloning
//! - Resolve the message mode against configuration once, here
//!
//! # Example
//! ```no_run
//! use gitx::commands::options::FormatOptions;
//! use gitx::commands::format::OutputFormat;
//! use gitx::message::MessageMode;
//!
//! let options = FormatOptions {
//!     mode: MessageMode::Github,
//!     input: None,
//!     format: OutputFormat::Json,
//! };
//! ```

use std::path::{Path, PathBuf};

use super::format::OutputFormat;
use crate::config::AppConfig;
use crate::message::MessageMode;

/// `format` command options
#[derive(Debug, Clone)]
pub struct FormatOptions<'a> {
    /// Effective message mode
    pub mode: MessageMode,

    /// Input file; `None` reads stdin
    pub input: Option<&'a Path>,

    /// Output format
    pub format: OutputFormat,
}

impl<'a> FormatOptions<'a> {
    pub fn from_cli(
        mode: Option<MessageMode>,
        input: &'a Option<PathBuf>,
        format: OutputFormat,
        json: bool,
        config: &AppConfig,
    ) -> Self {
        Self {
            mode: mode.unwrap_or(config.format.default_mode),
            input: input.as_deref(),
            format: OutputFormat::from_cli(format, json),
        }
    }
}

/// `classify` command options
#[derive(Debug, Clone)]
pub struct ClassifyOptions<'a> {
    pub input: Option<&'a Path>,
    pub format: OutputFormat,
}

impl<'a> ClassifyOptions<'a> {
    pub fn from_cli(input: &'a Option<PathBuf>, format: OutputFormat, json: bool) -> Self {
        Self {
            input: input.as_deref(),
            format: OutputFormat::from_cli(format, json),
        }
    }
}

/// `commit` command options
///
/// # Field description
/// - `mode`: effective message mode
/// - `input`: input file, stdin when `None`
/// - `dry_run`: print the git command without running it
#[derive(Debug, Clone)]
pub struct CommitOptions<'a> {
    pub mode: MessageMode,
    pub input: Option<&'a Path>,
    pub dry_run: bool,
}

impl<'a> CommitOptions<'a> {
    pub fn from_cli(
        mode: Option<MessageMode>,
        input: &'a Option<PathBuf>,
        dry_run: bool,
        config: &AppConfig,
    ) -> Self {
        Self {
            mode: mode.unwrap_or(config.format.default_mode),
            input: input.as_deref(),
            dry_run,
        }
    }
}
