use std::path::PathBuf;

use clap::{Parser, Subcommand, builder::styling};

use crate::commands::OutputFormat;
use crate::message::MessageMode;

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "gitx")]
#[command(author, version, long_about = None)]
#[command(about = "Turn AI-generated commit text into conventional git commit arguments")]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format an AI response into `git commit` arguments and print them
    Format {
        /// Message mode: default | github (defaults to format.default_mode)
        mode: Option<MessageMode>,

        /// File holding the AI response (stdin when omitted or `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Shortcut for --format json
        #[arg(long)]
        json: bool,
    },

    /// Show prefix counts and the dominant prefix of an AI response
    Classify {
        /// File holding the AI response (stdin when omitted or `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Shortcut for --format json
        #[arg(long)]
        json: bool,
    },

    /// Format an AI response and run `git commit` with it
    Commit {
        /// Message mode: default | github (defaults to format.default_mode)
        mode: Option<MessageMode>,

        /// File holding the AI response (stdin when omitted or `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Only print the git command, do not commit
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Load and validate configuration
    Validate,

    /// Print the configuration file location
    Path,
}
