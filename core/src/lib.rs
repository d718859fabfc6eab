pub mod document;
pub mod error;
pub mod index;
pub mod loader;
pub mod matcher;
pub mod report;
pub mod searcher;
pub mod tokenizer;

pub use document::{Corpus, CorpusFingerprint, Document, Position};
pub use error::{Error, Result};
pub use index::{build_index, FrequencyIndex, IndexCache, TokenCounts};
pub use loader::{load_corpus, read_corpus, CorpusSchema};
pub use searcher::{Query, QueryReport, SearchOptions, Searcher};
