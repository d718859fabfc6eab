use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::document::{Corpus, Document};
use crate::error::{Error, Result};

/// Column names of the tabular corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSchema {
    pub body_column: String,
    pub headline_column: String,
    pub topic_column: String,
}

impl Default for CorpusSchema {
    fn default() -> Self {
        Self {
            body_column: "texto".into(),
            headline_column: "titular".into(),
            topic_column: "topico".into(),
        }
    }
}

pub fn load_corpus<P: AsRef<Path>>(path: P, schema: &CorpusSchema) -> Result<Corpus> {
    let path = path.as_ref();
    let f = File::open(path)?;
    let corpus = read_corpus(f, schema)?;
    tracing::info!(path = %path.display(), num_docs = corpus.len(), corpus = %corpus.fingerprint(), "corpus loaded");
    Ok(corpus)
}

/// Read a CSV corpus with a header row. The body column is required;
/// headline and topic columns are optional. Empty cells become absent fields.
pub fn read_corpus<R: Read>(reader: R, schema: &CorpusSchema) -> Result<Corpus> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let body_idx = column(&schema.body_column).ok_or_else(|| Error::MissingColumn {
        column: schema.body_column.clone(),
        available: headers.iter().map(str::to_owned).collect(),
    })?;
    let headline_idx = column(&schema.headline_column);
    let topic_idx = column(&schema.topic_column);
    if headline_idx.is_none() {
        tracing::warn!(column = %schema.headline_column, "headline column missing; headlines will be empty");
    }
    if topic_idx.is_none() {
        tracing::warn!(column = %schema.topic_column, "topic column missing; topics will be empty");
    }

    let mut documents = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        documents.push(Document::new(cell(headline_idx), cell(topic_idx), cell(Some(body_idx))));
    }
    Ok(Corpus::from_documents(documents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_columns() {
        let data = "titular,topico,texto\nH1,T1,the cat sat\nH2,,\"the cat, ran\"\n";
        let corpus = read_corpus(data.as_bytes(), &CorpusSchema::default()).unwrap();
        assert_eq!(corpus.len(), 2);
        let d1 = corpus.get(1).unwrap();
        assert_eq!(d1.headline.as_deref(), Some("H2"));
        assert_eq!(d1.topic, None);
        assert_eq!(d1.body.as_deref(), Some("the cat, ran"));
    }

    #[test]
    fn missing_body_column_is_fatal() {
        let data = "titular,topico\nH1,T1\n";
        match read_corpus(data.as_bytes(), &CorpusSchema::default()) {
            Err(Error::MissingColumn { column, available }) => {
                assert_eq!(column, "texto");
                assert_eq!(available, vec!["titular", "topico"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let data = "texto\nonly a body\n\n";
        let corpus = read_corpus(data.as_bytes(), &CorpusSchema::default()).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get(0).unwrap().headline, None);
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let data = "titular,texto\nH1\nH2,body\n";
        let corpus = read_corpus(data.as_bytes(), &CorpusSchema::default()).unwrap();
        assert_eq!(corpus.get(0).unwrap().body, None);
        assert_eq!(corpus.get(1).unwrap().body.as_deref(), Some("body"));
    }
}
