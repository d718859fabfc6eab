use serde::Serialize;

use super::first_max;
use crate::document::{Corpus, Position};
use crate::error::{Error, Result};
use crate::index::{FrequencyIndex, TokenCounts};
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OverlapMatch {
    Found { position: Position, total_score: u64 },
    /// The query sentence has no tokens at all.
    NoValidTokens,
    /// Every document scored zero.
    NoMatch,
}

/// Sum of the document frequencies of every query token. Repeated query
/// tokens contribute once per repetition.
pub fn overlap_score<S: AsRef<str>>(counts: &TokenCounts, query_tokens: &[S]) -> u64 {
    query_tokens.iter().map(|t| counts.count(t.as_ref()) as u64).sum()
}

pub fn find_best_overlap(corpus: &Corpus, index: &FrequencyIndex, query: &str) -> Result<OverlapMatch> {
    if index.fingerprint() != corpus.fingerprint() {
        return Err(Error::StaleIndex { expected: corpus.fingerprint(), found: index.fingerprint() });
    }
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Ok(OverlapMatch::NoValidTokens);
    }
    let best = first_max(index.iter().map(|counts| overlap_score(counts, query_tokens.as_slice())));
    Ok(match best {
        Some((position, total_score)) if total_score > 0 => OverlapMatch::Found { position, total_score },
        _ => OverlapMatch::NoMatch,
    })
}
