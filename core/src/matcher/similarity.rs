use serde::Serialize;
use std::collections::HashMap;

use super::first_max;
use crate::document::Position;
use crate::tokenizer::tokens;

pub type TermId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizerOptions {
    /// Tokens shorter than this many characters are left out of the vector space.
    pub min_token_chars: usize,
}

impl Default for VectorizerOptions {
    fn default() -> Self { Self { min_token_chars: 1 } }
}

/// Term → dimension mapping, grown while texts are vectorized.
#[derive(Debug, Default)]
pub struct Vocabulary {
    terms: HashMap<String, TermId>,
}

impl Vocabulary {
    pub fn new() -> Self { Self::default() }

    pub fn term_id(&self, term: &str) -> Option<TermId> { self.terms.get(term).copied() }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Count vector of `text`; unseen terms get fresh dimensions.
    pub fn vectorize(&mut self, text: Option<&str>, options: VectorizerOptions) -> SparseVector {
        let mut tf: HashMap<TermId, u32> = HashMap::new();
        if let Some(text) = text {
            for tok in tokens(text).iter() {
                if tok.chars().count() < options.min_token_chars {
                    continue;
                }
                let next = self.terms.len() as TermId;
                let tid = *self.terms.entry(tok.to_owned()).or_insert(next);
                *tf.entry(tid).or_insert(0) += 1;
            }
        }
        SparseVector::from_counts(tf)
    }
}

/// Non-negative term counts, sorted by term id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseVector {
    entries: Vec<(TermId, u32)>,
}

impl SparseVector {
    pub fn from_counts<I: IntoIterator<Item = (TermId, u32)>>(counts: I) -> Self {
        let mut entries: Vec<(TermId, u32)> = counts.into_iter().filter(|&(_, c)| c > 0).collect();
        entries.sort_unstable_by_key(|&(t, _)| t);
        Self { entries }
    }

    pub fn dot(&self, other: &SparseVector) -> u64 {
        let (mut i, mut j, mut acc) = (0, 0, 0u64);
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, ca) = self.entries[i];
            let (tb, cb) = other.entries[j];
            if ta == tb {
                acc += ca as u64 * cb as u64;
                i += 1;
                j += 1;
            } else if ta < tb {
                i += 1;
            } else {
                j += 1;
            }
        }
        acc
    }

    pub fn norm(&self) -> f64 {
        (self.entries.iter().map(|&(_, c)| (c as f64) * (c as f64)).sum::<f64>()).sqrt()
    }

    pub fn nnz(&self) -> usize { self.entries.len() }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }
}

/// dot(a, b) / (|a| |b|), or 0 when either vector is zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    let sim = a.dot(b) as f64 / (a.norm() * b.norm());
    sim.clamp(0.0, 1.0)
}

/// Round half away from zero to `digits` decimals.
pub fn round_score(score: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (score * scale).round() / scale
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimilarityMatch {
    Found { position: Position, similarity: f64 },
    NoDocuments,
}

pub fn find_most_similar<'a, I>(bodies: I, query: &str) -> SimilarityMatch
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    find_most_similar_with(bodies, query, VectorizerOptions::default())
}

/// Rank `bodies` by cosine similarity of term-count vectors against `query`.
/// The vocabulary is built from scratch over the query and all bodies.
pub fn find_most_similar_with<'a, I>(bodies: I, query: &str, options: VectorizerOptions) -> SimilarityMatch
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut vocab = Vocabulary::new();
    let q = vocab.vectorize(Some(query), options);
    let docs: Vec<SparseVector> = bodies.into_iter().map(|b| vocab.vectorize(b, options)).collect();
    tracing::debug!(num_docs = docs.len(), vocab = vocab.len(), "vectorized sentence query");

    match first_max(docs.iter().map(|d| cosine_similarity(&q, d))) {
        Some((position, similarity)) => SimilarityMatch::Found { position, similarity },
        None => SimilarityMatch::NoDocuments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_norm() {
        let a = SparseVector::from_counts([(0, 1), (2, 2)]);
        let b = SparseVector::from_counts([(2, 3), (1, 5)]);
        assert_eq!(a.dot(&b), 6);
        assert!((a.norm() - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_has_zero_similarity() {
        let a = SparseVector::default();
        let b = SparseVector::from_counts([(0, 1)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn picks_most_similar_body() {
        let bodies = [Some("the cat sat"), Some("dogs bark loudly"), None];
        match find_most_similar(bodies, "dogs bark") {
            SimilarityMatch::Found { position, similarity } => {
                assert_eq!(position, 1);
                assert!(similarity > 0.8);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn short_tokens_can_be_ignored() {
        let opts = VectorizerOptions { min_token_chars: 2 };
        let bodies = [Some("a a a b"), Some("ab")];
        let m = find_most_similar_with(bodies, "a ab", opts);
        assert_eq!(m, SimilarityMatch::Found { position: 1, similarity: 1.0 });
    }

    #[test]
    fn no_documents() {
        assert_eq!(find_most_similar(Vec::<Option<&str>>::new(), "cat"), SimilarityMatch::NoDocuments);
    }

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_score(0.123456, 4), 0.1235);
        assert_eq!(round_score(1.0, 4), 1.0);
    }
}
