//! Delimiter lexer for raw AI responses.
//!
//! Splits a response into a flat sequence of [`Token`]s. A delimiter is either
//! `<prefix>:` for any prefix in the active vocabulary, or a single `\n` / `\r`.
//! Prefix delimiters are recognised anywhere in the text, not only at line start.

use super::prefix::PrefixToken;

/// A lexed piece of a raw response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A `<prefix>:` delimiter.
    Prefix(PrefixToken),
    /// A single `\n` or `\r`.
    LineBreak,
    /// Text between two delimiters. Never empty, not trimmed.
    Text(&'a str),
}

impl Token<'_> {
    pub fn is_delimiter(&self) -> bool {
        !matches!(self, Token::Text(_))
    }
}

/// Tokenizes `raw`, recognising only prefixes listed in `vocabulary`.
///
/// Scanning is leftmost-first: at every position a delimiter is tried before
/// the position is treated as text, and scanning resumes after the match.
pub fn tokenize<'a>(raw: &'a str, vocabulary: &[PrefixToken]) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < raw.len() {
        let rest = &raw[pos..];
        let matched = match_delimiter(rest, vocabulary);

        match matched {
            Some((token, len)) => {
                if text_start < pos {
                    tokens.push(Token::Text(&raw[text_start..pos]));
                }
                tokens.push(token);
                pos += len;
                text_start = pos;
            }
            None => {
                // Advance one char; delimiters are ASCII so boundaries stay valid.
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if text_start < raw.len() {
        tokens.push(Token::Text(&raw[text_start..]));
    }

    tokens
}

fn match_delimiter<'a>(rest: &str, vocabulary: &[PrefixToken]) -> Option<(Token<'a>, usize)> {
    if rest.starts_with('\n') || rest.starts_with('\r') {
        return Some((Token::LineBreak, 1));
    }

    vocabulary.iter().find_map(|prefix| {
        let word = prefix.as_str();
        let is_match = rest.starts_with(word) && rest[word.len()..].starts_with(':');
        is_match.then_some((Token::Prefix(*prefix), word.len() + 1))
    })
}
