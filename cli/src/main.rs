use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docmatch_core::matcher::VectorizerOptions;
use docmatch_core::report::DEFAULT_EXCERPT_CHARS;
use docmatch_core::{load_corpus, CorpusSchema, Query, QueryReport, SearchOptions, Searcher};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

mod render;

#[derive(Parser)]
#[command(name = "docmatch")]
#[command(about = "Find the documents of a CSV corpus that best match a word or a sentence", long_about = None)]
struct Cli {
    #[command(flatten)]
    corpus: CorpusArgs,
    /// Print results as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// CSV corpus file
    #[arg(long, env = "DOCMATCH_CORPUS", default_value = "./corpus.csv", global = true)]
    corpus: String,
    /// Column holding document bodies
    #[arg(long, default_value = "texto", global = true)]
    body_column: String,
    /// Column holding headlines
    #[arg(long, default_value = "titular", global = true)]
    headline_column: String,
    /// Column holding topics
    #[arg(long, default_value = "topico", global = true)]
    topic_column: String,
    /// Maximum characters of body text shown per document
    #[arg(long, default_value_t = DEFAULT_EXCERPT_CHARS, global = true)]
    excerpt_chars: usize,
    /// Ignore shorter tokens when ranking by cosine similarity
    #[arg(long, default_value_t = 1, global = true)]
    min_token_chars: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document table
    Show,
    /// Find the document where a word occurs most often
    Word { word: String },
    /// Find the documents that best match a sentence
    Sentence { sentence: String },
    /// Read queries from stdin, one per line
    Repl,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let searcher = open_searcher(&cli.corpus)?;

    match cli.command {
        Commands::Show => emit(cli.json, &searcher.rows(), render::table),
        Commands::Word { word } => match searcher.word_query(&word) {
            Some(report) => emit(cli.json, &report, render::word),
            None => Ok(()),
        },
        Commands::Sentence { sentence } => match searcher.sentence_query(&sentence)? {
            Some(report) => emit(cli.json, &report, render::sentence),
            None => Ok(()),
        },
        Commands::Repl => repl(&searcher, cli.json),
    }
}

fn open_searcher(args: &CorpusArgs) -> Result<Searcher> {
    let schema = CorpusSchema {
        body_column: args.body_column.clone(),
        headline_column: args.headline_column.clone(),
        topic_column: args.topic_column.clone(),
    };
    let corpus = load_corpus(&args.corpus, &schema).with_context(|| format!("loading corpus {}", args.corpus))?;
    let options = SearchOptions {
        excerpt_chars: args.excerpt_chars,
        vectorizer: VectorizerOptions { min_token_chars: args.min_token_chars },
    };
    Ok(Searcher::with_options(corpus, options))
}

fn emit<T: Serialize>(json: bool, value: &T, text: fn(&T) -> String) -> Result<()> {
    let out = if json { serde_json::to_string_pretty(value)? } else { text(value) };
    println!("{out}");
    Ok(())
}

fn repl(searcher: &Searcher, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    tracing::info!(num_docs = searcher.corpus().len(), "ready for queries");
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == ":q" || line == ":quit" {
            break;
        }
        if line == ":show" {
            emit(json, &searcher.rows(), render::table)?;
            continue;
        }
        let query = match line.strip_prefix(":w ") {
            Some(w) => Query::parse(w).map(|q| match q {
                Query::Sentence(s) => Query::Word(s),
                word => word,
            }),
            None => Query::parse(line),
        };
        let Some(query) = query else { continue };
        match searcher.run(&query)? {
            Some(QueryReport::Word(r)) => emit(json, &r, render::word)?,
            Some(QueryReport::Sentence(r)) => emit(json, &r, render::sentence)?,
            None => {}
        }
    }
    Ok(())
}
