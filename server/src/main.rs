use anyhow::Result;
use axum::Router;
use clap::Parser;
use docmatch_core::matcher::VectorizerOptions;
use docmatch_core::report::DEFAULT_EXCERPT_CHARS;
use docmatch_core::{CorpusSchema, SearchOptions};
use server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// CSV corpus file
    #[arg(long, env = "DOCMATCH_CORPUS", default_value = "./corpus.csv")]
    corpus: String,
    /// Column holding document bodies
    #[arg(long, default_value = "texto")]
    body_column: String,
    /// Column holding headlines
    #[arg(long, default_value = "titular")]
    headline_column: String,
    /// Column holding topics
    #[arg(long, default_value = "topico")]
    topic_column: String,
    /// Maximum characters of body text returned per document
    #[arg(long, default_value_t = DEFAULT_EXCERPT_CHARS)]
    excerpt_chars: usize,
    /// Ignore shorter tokens when ranking by cosine similarity
    #[arg(long, default_value_t = 1)]
    min_token_chars: usize,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let schema = CorpusSchema {
        body_column: args.body_column.clone(),
        headline_column: args.headline_column.clone(),
        topic_column: args.topic_column.clone(),
    };
    let options = SearchOptions {
        excerpt_chars: args.excerpt_chars,
        vectorizer: VectorizerOptions { min_token_chars: args.min_token_chars },
    };
    let app: Router = build_app(&args.corpus, &schema, options)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, corpus = %args.corpus, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
