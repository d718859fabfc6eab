use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::document::{Corpus, CorpusFingerprint, Position};
use crate::tokenizer::tokens;

/// Token → occurrence count for a single document body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: HashMap<String, u32>,
}

impl TokenCounts {
    /// Absent text yields empty counts.
    pub fn from_text(text: Option<&str>) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        if let Some(text) = text {
            for tok in tokens(text).iter() {
                *counts.entry(tok.to_owned()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Zero when the token never occurs.
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn distinct(&self) -> usize { self.counts.len() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }
}

/// Per-document token counts, aligned by position with the corpus it was built from.
#[derive(Debug, Clone)]
pub struct FrequencyIndex {
    fingerprint: CorpusFingerprint,
    counts: Vec<TokenCounts>,
}

impl FrequencyIndex {
    pub fn get(&self, position: Position) -> Option<&TokenCounts> { self.counts.get(position) }

    pub fn count(&self, position: Position, token: &str) -> u32 {
        self.get(position).map(|c| c.count(token)).unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &TokenCounts> + '_ { self.counts.iter() }

    pub fn fingerprint(&self) -> CorpusFingerprint { self.fingerprint }
}

pub fn build_index(corpus: &Corpus) -> FrequencyIndex {
    let counts: Vec<TokenCounts> = corpus.bodies().map(TokenCounts::from_text).collect();
    tracing::info!(
        num_docs = counts.len(),
        num_terms = counts.iter().map(TokenCounts::distinct).sum::<usize>(),
        corpus = %corpus.fingerprint(),
        "built frequency index"
    );
    FrequencyIndex { fingerprint: corpus.fingerprint(), counts }
}

/// Frequency indices keyed by corpus fingerprint. Safe to share across threads.
#[derive(Default)]
pub struct IndexCache {
    entries: RwLock<HashMap<CorpusFingerprint, Arc<FrequencyIndex>>>,
}

impl IndexCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_build(&self, corpus: &Corpus) -> Arc<FrequencyIndex> {
        let key = corpus.fingerprint();
        if let Some(index) = self.entries.read().get(&key) {
            tracing::debug!(corpus = %key, "frequency index cache hit");
            return Arc::clone(index);
        }
        tracing::debug!(corpus = %key, "frequency index cache miss");
        let mut entries = self.entries.write();
        // another reader may have built it while we waited for the lock
        Arc::clone(entries.entry(key).or_insert_with(|| Arc::new(build_index(corpus))))
    }

    pub fn invalidate(&self, fingerprint: CorpusFingerprint) -> bool {
        self.entries.write().remove(&fingerprint).is_some()
    }

    pub fn clear(&self) { self.entries.write().clear(); }

    pub fn len(&self) -> usize { self.entries.read().len() }

    pub fn is_empty(&self) -> bool { self.entries.read().is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn counts_occurrences() {
        let c = TokenCounts::from_text(Some("the cat and the hat"));
        assert_eq!(c.count("the"), 2);
        assert_eq!(c.count("cat"), 1);
        assert_eq!(c.count("dog"), 0);
        assert_eq!(c.total(), 5);
        assert_eq!(c.distinct(), 4);
    }

    #[test]
    fn missing_body_has_empty_counts() {
        let corpus = Corpus::from_documents(vec![Document::default(), Document::new(None, None, Some("x".into()))]);
        let index = build_index(&corpus);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(0).unwrap().total(), 0);
        assert_eq!(index.count(1, "x"), 1);
        assert_eq!(index.count(5, "x"), 0);
    }

    #[test]
    fn cache_reuses_and_invalidates() {
        let cache = IndexCache::new();
        let corpus = Corpus::from_bodies(["a b", "b c"]);
        let first = cache.get_or_build(&corpus);
        let second = cache.get_or_build(&corpus);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        let other = Corpus::from_bodies(["a b"]);
        cache.get_or_build(&other);
        assert_eq!(cache.len(), 2);

        assert!(cache.invalidate(corpus.fingerprint()));
        assert!(!cache.invalidate(corpus.fingerprint()));
        let rebuilt = cache.get_or_build(&corpus);
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        cache.clear();
        assert!(cache.is_empty());
    }
}
