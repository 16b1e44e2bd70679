use colored::{ColoredString, Colorize};

use crate::message::FormattedCommitArgs;

/// Kind of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Status::Success => "✓",
            Status::Error => "✗",
            Status::Warning => "⚠",
            Status::Info => "ℹ",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Status::Success => text.green(),
            Status::Error => text.red(),
            Status::Warning => text.yellow(),
            Status::Info => text.blue(),
        }
    }

    fn render(self, msg: &str, colored: bool) -> String {
        if colored {
            format!("{} {}", self.paint(self.symbol()).bold(), self.paint(msg))
        } else {
            format!("{} {}", self.symbol(), msg)
        }
    }
}

/// Success line on stdout.
pub fn success(msg: &str, colored: bool) {
    println!("{}", Status::Success.render(msg, colored));
}

/// Error line on stderr.
pub fn error(msg: &str, colored: bool) {
    eprintln!("{}", Status::Error.render(msg, colored));
}

/// Warning line on stderr, so JSON on stdout stays parseable.
pub fn warning(msg: &str, colored: bool) {
    eprintln!("{}", Status::Warning.render(msg, colored));
}

/// Info line, returned for the caller to place.
pub fn info(msg: &str, colored: bool) -> String {
    Status::Info.render(msg, colored)
}

/// `[1/2] Formatted commit message:` style progress line.
pub fn step(step: &str, msg: &str, colored: bool) {
    println!("{}", render_step(step, msg, colored));
}

fn render_step(step: &str, msg: &str, colored: bool) -> String {
    let label = format!("[{}]", step);
    if colored {
        format!("{} {}", label.bright_black().bold(), msg.bright_black())
    } else {
        format!("{} {}", label, msg)
    }
}

/// Renders the commit message as git would store it: subject, then paragraphs.
pub fn format_message_preview(args: &FormattedCommitArgs, colored: bool) -> String {
    let mut lines = args.commit_lines();
    let Some(subject) = lines.next() else {
        return String::new();
    };

    let mut out = if colored {
        subject.bold().to_string()
    } else {
        subject.to_string()
    };
    for line in lines {
        out.push_str("\n\n");
        out.push_str(line);
    }
    out
}
