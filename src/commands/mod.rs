//! Command implementations.
//!
//! # Modules
//! - `format_message` - `format`: print the formatted git invocation.
//! - `classify` - `classify`: prefix counts and dominant prefix.
//! - `commit` - `commit`: format and run `git commit`.
//! - `config` - `config`: show, validate and locate configuration.
//! - `input` - reading the AI response from a file or stdin.
//! - `format` - Output format definition.
//! - `options` - Command option structs.
//! - `json` - JSON output helpers.
//!
//! # Architecture
//! ```text
//! CLI (cli.rs)
//!   ├── commands/format_message.rs ─┐
//!   ├── commands/classify.rs       ├─> message (lexer → classify → format)
//!   ├── commands/commit.rs ────────┘──> git::commit_with_args
//!   └── commands/config.rs ─> config::load_config_from
//! ```

/// Classify command flow.
pub mod classify;
/// Commit command flow.
pub mod commit;
/// Configuration inspection commands.
pub mod config;
/// Output format types and parsing helpers.
pub mod format;
/// Format command flow.
pub mod format_message;
/// AI response input helpers.
pub mod input;
/// Shared JSON output helpers.
pub mod json;
/// Shared command option structs.
pub mod options;

pub use format::OutputFormat;
pub use options::{ClassifyOptions, CommitOptions, FormatOptions};
