//! Front-end facing records. Absent headline, topic and body become empty
//! strings here and nowhere else.

use serde::Serialize;

use crate::document::{Document, Position};
use crate::matcher::{round_score, OverlapMatch, SimilarityMatch, WordMatch};

/// Maximum number of characters in a body excerpt before truncation.
pub const DEFAULT_EXCERPT_CHARS: usize = 400;

/// Decimal places reported for similarity scores.
pub const SIMILARITY_DIGITS: i32 = 4;

pub const NO_DOCUMENTS_NOTICE: &str = "no documents available to compare against";
pub const NO_VALID_TOKENS_NOTICE: &str = "the sentence contains no valid tokens for frequency scoring";
pub const NO_MATCH_NOTICE: &str = "no document contains any token of the sentence (all scores are 0)";

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: Option<&str>, max_chars: usize) -> String {
    let text = text.unwrap_or("");
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn or_empty(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRow {
    pub position: Position,
    pub headline: String,
    pub topic: String,
    pub excerpt: String,
}

impl DocumentRow {
    pub fn new(doc: &Document, excerpt_chars: usize) -> Self {
        Self {
            position: doc.id,
            headline: or_empty(&doc.headline),
            topic: or_empty(&doc.topic),
            excerpt: excerpt(doc.body.as_deref(), excerpt_chars),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordReport {
    pub query: String,
    pub found: bool,
    pub position: Option<Position>,
    pub headline: String,
    pub frequency: u32,
}

impl WordReport {
    pub fn new(query: &str, matched: WordMatch, doc: Option<&Document>) -> Self {
        Self {
            query: query.to_string(),
            found: matches!(matched, WordMatch::Found { .. }),
            position: matched.position(),
            headline: doc.map(|d| or_empty(&d.headline)).unwrap_or_default(),
            frequency: matched.frequency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimilarityReport {
    Found {
        position: Position,
        headline: String,
        topic: String,
        similarity: f64,
        body_excerpt: String,
    },
    NoDocuments { notice: String },
}

impl SimilarityReport {
    pub fn new(matched: SimilarityMatch, doc: Option<&Document>, excerpt_chars: usize) -> Self {
        match (matched, doc) {
            (SimilarityMatch::Found { position, similarity }, Some(doc)) => SimilarityReport::Found {
                position,
                headline: or_empty(&doc.headline),
                topic: or_empty(&doc.topic),
                similarity: round_score(similarity, SIMILARITY_DIGITS),
                body_excerpt: excerpt(doc.body.as_deref(), excerpt_chars),
            },
            _ => SimilarityReport::NoDocuments { notice: NO_DOCUMENTS_NOTICE.to_string() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OverlapReport {
    Found {
        position: Position,
        total_score: u64,
        topic: String,
        headline: String,
    },
    NoValidTokens { notice: String },
    NoMatch { notice: String },
}

impl OverlapReport {
    pub fn new(matched: OverlapMatch, doc: Option<&Document>) -> Self {
        match (matched, doc) {
            (OverlapMatch::Found { position, total_score }, Some(doc)) => OverlapReport::Found {
                position,
                total_score,
                topic: or_empty(&doc.topic),
                headline: or_empty(&doc.headline),
            },
            (OverlapMatch::NoValidTokens, _) => OverlapReport::NoValidTokens { notice: NO_VALID_TOKENS_NOTICE.to_string() },
            _ => OverlapReport::NoMatch { notice: NO_MATCH_NOTICE.to_string() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceReport {
    pub query: String,
    pub similarity: SimilarityReport,
    pub overlap: OverlapReport,
}
