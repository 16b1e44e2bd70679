//! Dominant-prefix classification over lexed tokens.

use serde::Serialize;

use super::lexer::Token;
use super::prefix::PrefixToken;
use crate::error::{GitxError, Result};

/// One prefix and how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixCount {
    pub prefix: PrefixToken,
    pub count: usize,
}

/// Prefix occurrence counts, kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrefixTally {
    counts: Vec<PrefixCount>,
}

impl PrefixTally {
    /// Counts every prefix delimiter in `tokens`. Line breaks and text are ignored.
    pub fn from_tokens(tokens: &[Token<'_>]) -> Self {
        let mut tally = Self::default();
        for token in tokens {
            if let Token::Prefix(prefix) = token {
                tally.record(*prefix);
            }
        }
        tally
    }

    fn record(&mut self, prefix: PrefixToken) {
        match self.counts.iter_mut().find(|c| c.prefix == prefix) {
            Some(entry) => entry.count += 1,
            None => self.counts.push(PrefixCount { prefix, count: 1 }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[PrefixCount] {
        &self.counts
    }

    pub fn count_of(&self, prefix: PrefixToken) -> usize {
        self.counts
            .iter()
            .find(|c| c.prefix == prefix)
            .map_or(0, |c| c.count)
    }

    /// Prefix with the strictly greatest count.
    ///
    /// Ties go to the prefix that appeared first in the text.
    pub fn dominant(&self) -> Option<PrefixToken> {
        let mut best: Option<PrefixCount> = None;
        for entry in &self.counts {
            if best.is_none_or(|b| entry.count > b.count) {
                best = Some(*entry);
            }
        }
        best.map(|b| b.prefix)
    }
}

/// Result of classifying one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub dominant: PrefixToken,
    pub tally: PrefixTally,
}

/// Picks the dominant prefix of a lexed response.
///
/// Fails with [`GitxError::NoPrefixFound`] when no prefix delimiter occurred,
/// whether or not the text contained line breaks.
pub fn classify(tokens: &[Token<'_>]) -> Result<Classification> {
    let tally = PrefixTally::from_tokens(tokens);
    let dominant = tally.dominant().ok_or(GitxError::NoPrefixFound)?;
    Ok(Classification { dominant, tally })
}
