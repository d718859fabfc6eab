use std::sync::Arc;

use crate::document::{Corpus, Document, Position};
use crate::error::Result;
use crate::index::{FrequencyIndex, IndexCache};
use crate::matcher::{find_best_overlap, find_best_word_match, find_most_similar_with, OverlapMatch, SimilarityMatch, VectorizerOptions};
use crate::report::{DocumentRow, OverlapReport, SentenceReport, SimilarityReport, WordReport, DEFAULT_EXCERPT_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub excerpt_chars: usize,
    pub vectorizer: VectorizerOptions,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { excerpt_chars: DEFAULT_EXCERPT_CHARS, vectorizer: VectorizerOptions::default() }
    }
}

/// A user query. Blank input is not a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Word(String),
    Sentence(String),
}

impl Query {
    pub fn parse(input: &str) -> Option<Query> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.contains(char::is_whitespace) {
            Some(Query::Sentence(trimmed.to_string()))
        } else {
            Some(Query::Word(trimmed.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryReport {
    Word(WordReport),
    Sentence(SentenceReport),
}

/// Owns the loaded corpus and answers queries against it. The frequency
/// index is built on first use and cached by corpus fingerprint.
pub struct Searcher {
    corpus: Arc<Corpus>,
    cache: IndexCache,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_options(corpus, SearchOptions::default())
    }

    pub fn with_options(corpus: Corpus, options: SearchOptions) -> Self {
        Self { corpus: Arc::new(corpus), cache: IndexCache::new(), options }
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn options(&self) -> SearchOptions { self.options }

    pub fn index(&self) -> Arc<FrequencyIndex> {
        self.cache.get_or_build(&self.corpus)
    }

    /// Swap in a new corpus, dropping the index of the old one.
    pub fn reload(&mut self, corpus: Corpus) {
        let old = self.corpus.fingerprint();
        if old != corpus.fingerprint() {
            self.cache.invalidate(old);
        }
        tracing::info!(num_docs = corpus.len(), corpus = %corpus.fingerprint(), "corpus reloaded");
        self.corpus = Arc::new(corpus);
    }

    pub fn document(&self, position: Position) -> Option<&Document> {
        self.corpus.get(position)
    }

    pub fn rows(&self) -> Vec<DocumentRow> {
        self.corpus.iter().map(|d| DocumentRow::new(d, self.options.excerpt_chars)).collect()
    }

    /// `None` when `word` is blank.
    pub fn word_query(&self, word: &str) -> Option<WordReport> {
        if word.trim().is_empty() {
            return None;
        }
        let matched = find_best_word_match(&self.corpus, word);
        tracing::debug!(word, ?matched, "word query");
        let doc = matched.position().and_then(|p| self.corpus.get(p));
        Some(WordReport::new(word, matched, doc))
    }

    /// Runs both sentence matchers. `Ok(None)` when `sentence` is blank.
    pub fn sentence_query(&self, sentence: &str) -> Result<Option<SentenceReport>> {
        if sentence.trim().is_empty() {
            return Ok(None);
        }
        let similar = find_most_similar_with(self.corpus.bodies(), sentence, self.options.vectorizer);
        let similar_doc = match similar {
            SimilarityMatch::Found { position, .. } => self.corpus.get(position),
            SimilarityMatch::NoDocuments => None,
        };

        let index = self.index();
        let overlap = find_best_overlap(&self.corpus, &index, sentence)?;
        let overlap_doc = match overlap {
            OverlapMatch::Found { position, .. } => self.corpus.get(position),
            _ => None,
        };
        tracing::debug!(sentence, ?similar, ?overlap, "sentence query");

        Ok(Some(SentenceReport {
            query: sentence.to_string(),
            similarity: SimilarityReport::new(similar, similar_doc, self.options.excerpt_chars),
            overlap: OverlapReport::new(overlap, overlap_doc),
        }))
    }

    pub fn run(&self, query: &Query) -> Result<Option<QueryReport>> {
        Ok(match query {
            Query::Word(w) => self.word_query(w).map(QueryReport::Word),
            Query::Sentence(s) => self.sentence_query(s)?.map(QueryReport::Sentence),
        })
    }
}
