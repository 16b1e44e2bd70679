use colored::Colorize;
use serde::Serialize;

use super::input::read_raw_response;
use super::json;
use super::options::ClassifyOptions;
use crate::config::AppConfig;
use crate::error::Result;
use crate::message::{Classification, PrefixCount, PrefixToken, classify};

/// JSON payload of the `classify` command.
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    pub dominant_prefix: PrefixToken,
    pub counts: Vec<PrefixCount>,
}

impl From<Classification> for ClassifyResult {
    fn from(c: Classification) -> Self {
        Self {
            dominant_prefix: c.dominant,
            counts: c.tally.counts().to_vec(),
        }
    }
}

/// Print prefix counts and the dominant prefix of the AI response.
pub fn run(options: &ClassifyOptions<'_>, config: &AppConfig) -> Result<()> {
    let raw = read_raw_response(options.input)?;
    let tokens = config.formatter().tokenize(&raw);
    tracing::debug!("Lexed {} tokens", tokens.len());

    let result = ClassifyResult::from(classify(&tokens)?);

    if options.format.is_json() {
        return json::output_json(result);
    }

    let colored = options.format.effective_colored(config.ui.colored);
    print!("{}", render_text(&result, colored));
    Ok(())
}

fn render_text(result: &ClassifyResult, colored: bool) -> String {
    let mut out = String::new();
    for entry in &result.counts {
        let name = format!("{:<10}", entry.prefix.as_str());
        let marker = if entry.prefix == result.dominant_prefix {
            "*"
        } else {
            " "
        };
        if colored && entry.prefix == result.dominant_prefix {
            out.push_str(&format!("{} {} {}\n", marker, name.green().bold(), entry.count));
        } else {
            out.push_str(&format!("{} {} {}\n", marker, name, entry.count));
        }
    }
    out
}
