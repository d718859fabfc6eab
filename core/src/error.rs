use crate::document::CorpusFingerprint;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The corpus has no column holding document bodies. Fatal for that corpus.
    #[error("column '{column}' not found in corpus (available: {})", .available.join(", "))]
    MissingColumn { column: String, available: Vec<String> },

    #[error("frequency index was built for corpus {found}, not {expected}")]
    StaleIndex {
        expected: CorpusFingerprint,
        found: CorpusFingerprint,
    },
}
