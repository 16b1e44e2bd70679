//! `git` invocation at the output boundary.
//!
//! The only git interaction is a single `git commit` call with formatted arguments.

pub mod commit;

pub use commit::{commit_with_args, commit_with_args_in, ensure_git_available};
