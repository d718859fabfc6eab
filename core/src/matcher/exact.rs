use serde::Serialize;

use super::first_max;
use crate::document::{Corpus, Position};
use crate::tokenizer::tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordMatch {
    Found { position: Position, frequency: u32 },
    NotFound,
}

impl WordMatch {
    pub fn position(&self) -> Option<Position> {
        match *self {
            WordMatch::Found { position, .. } => Some(position),
            WordMatch::NotFound => None,
        }
    }

    pub fn frequency(&self) -> u32 {
        match *self {
            WordMatch::Found { frequency, .. } => frequency,
            WordMatch::NotFound => 0,
        }
    }
}

/// Occurrences of `word` among the tokens of `text`, case-insensitive, whole tokens only.
pub fn count_word(text: Option<&str>, word: &str) -> u32 {
    let Some(text) = text else { return 0 };
    let target = word.to_lowercase();
    tokens(text).iter().filter(|t| *t == target).count() as u32
}

/// Document with the most occurrences of `word`; the first one on ties.
pub fn find_best_word_match(corpus: &Corpus, word: &str) -> WordMatch {
    let best = first_max(corpus.bodies().map(|body| count_word(body, word)));
    match best {
        Some((position, frequency)) if frequency > 0 => WordMatch::Found { position, frequency },
        _ => WordMatch::NotFound,
    }
}
