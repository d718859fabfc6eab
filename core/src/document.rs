use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;

use crate::tokenizer::tokenize_opt;

/// Corpus row position. The only identity a document has.
pub type Position = usize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Position,
    pub headline: Option<String>,
    pub topic: Option<String>,
    pub body: Option<String>,
}

impl Document {
    /// Build a document whose id is assigned when it joins a [`Corpus`].
    pub fn new(headline: Option<String>, topic: Option<String>, body: Option<String>) -> Self {
        Self { id: 0, headline, topic, body }
    }

    pub fn body_tokens(&self) -> Vec<String> {
        tokenize_opt(self.body.as_deref())
    }
}

/// Content hash of a corpus; key of the frequency index cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorpusFingerprint([u8; 20]);

impl fmt::Display for CorpusFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0[..6] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Immutable, ordered set of documents. Order is corpus file order.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    fingerprint: CorpusFingerprint,
}

impl Corpus {
    pub fn from_documents<I: IntoIterator<Item = Document>>(documents: I) -> Self {
        let documents: Vec<Document> = documents
            .into_iter()
            .enumerate()
            .map(|(id, doc)| Document { id, ..doc })
            .collect();
        let fingerprint = fingerprint(&documents);
        Self { documents, fingerprint }
    }

    /// Corpus with bodies only; handy for tests and ad-hoc use.
    pub fn from_bodies<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_documents(bodies.into_iter().map(|b| Document::new(None, None, Some(b.into()))))
    }

    pub fn get(&self, position: Position) -> Option<&Document> { self.documents.get(position) }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Document> + '_ { self.documents.iter() }

    pub fn bodies(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.documents.iter().map(|d| d.body.as_deref())
    }

    pub fn fingerprint(&self) -> CorpusFingerprint { self.fingerprint }
}

fn fingerprint(documents: &[Document]) -> CorpusFingerprint {
    let mut hasher = Sha1::new();
    hasher.update((documents.len() as u64).to_le_bytes());
    for doc in documents {
        for field in [&doc.headline, &doc.topic, &doc.body] {
            match field {
                // absent and empty must hash differently
                None => hasher.update([0u8]),
                Some(s) => {
                    hasher.update([1u8]);
                    hasher.update((s.len() as u64).to_le_bytes());
                    hasher.update(s.as_bytes());
                }
            }
        }
    }
    CorpusFingerprint(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_positions() {
        let corpus = Corpus::from_documents(vec![
            Document { id: 7, ..Document::new(Some("a".into()), None, None) },
            Document { id: 3, ..Document::new(Some("b".into()), None, None) },
        ]);
        let ids: Vec<_> = corpus.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Corpus::from_bodies(["the cat sat"]);
        let b = Corpus::from_bodies(["the cat sat"]);
        let c = Corpus::from_bodies(["the cat ran"]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn absent_body_differs_from_empty_body() {
        let empty = Corpus::from_bodies([""]);
        let absent = Corpus::from_documents(vec![Document::default()]);
        assert_ne!(empty.fingerprint(), absent.fingerprint());
        assert!(absent.get(0).unwrap().body_tokens().is_empty());
    }
}
