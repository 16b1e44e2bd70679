//! Commit message formatting.
//!
//! Turns a freeform AI response into `git commit` arguments:
//! [`lexer`] splits the text on prefix and line-break delimiters, [`classify`]
//! picks the dominant prefix, and [`format`] assembles the `-m` pairs.
//!
//! Everything here is pure: no I/O, no logging.

pub mod classify;
pub mod format;
pub mod lexer;
pub mod prefix;

pub use classify::{Classification, PrefixCount, PrefixTally, classify};
pub use format::{CommitMessageFormatter, FormattedCommitArgs, MessageMode, format_commit_message};
pub use lexer::{Token, tokenize};
pub use prefix::PrefixToken;
