use docmatch_core::{load_corpus, CorpusSchema, Error, Searcher};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_corpus_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.csv");
    fs::write(&path, "titular,topico,texto\nGatos,mascotas,el gato duerme\nPerros,mascotas,el perro corre y el perro ladra\n").unwrap();

    let corpus = load_corpus(&path, &CorpusSchema::default()).unwrap();
    assert_eq!(corpus.len(), 2);

    let searcher = Searcher::new(corpus);
    let report = searcher.word_query("perro").unwrap();
    assert_eq!(report.headline, "Perros");
    assert_eq!(report.frequency, 2);
}

#[test]
fn custom_schema_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.csv");
    fs::write(&path, "title,body\nA,alpha beta\n").unwrap();
    let schema = CorpusSchema { body_column: "body".into(), headline_column: "title".into(), topic_column: "topic".into() };
    let corpus = load_corpus(&path, &schema).unwrap();
    assert_eq!(corpus.get(0).unwrap().headline.as_deref(), Some("A"));
    assert_eq!(corpus.get(0).unwrap().topic, None);
}

#[test]
fn missing_body_column_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.csv");
    fs::write(&path, "titular\nA\n").unwrap();
    let err = load_corpus(&path, &CorpusSchema::default()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }));
    assert!(err.to_string().contains("texto"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_corpus(dir.path().join("nope.csv"), &CorpusSchema::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
