use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use docmatch_core::report::DocumentRow;
use docmatch_core::{load_corpus, CorpusSchema, Document, SearchOptions, Searcher};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<Searcher>,
}

/// Load the corpus once and build the router around it.
pub fn build_app(corpus_path: &str, schema: &CorpusSchema, options: SearchOptions) -> Result<Router> {
    let corpus = load_corpus(corpus_path, schema)?;
    let searcher = Searcher::with_options(corpus, options);
    // build the frequency index up front so the first query does not pay for it
    searcher.index();
    Ok(router(searcher))
}

pub fn router(searcher: Searcher) -> Router {
    let app_state = AppState { searcher: Arc::new(searcher) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/documents", get(documents_handler))
        .route("/doc/:position", get(doc_handler))
        .route("/search/word", get(word_handler))
        .route("/search/sentence", get(sentence_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn documents_handler(State(state): State<AppState>) -> Json<Vec<DocumentRow>> {
    Json(state.searcher.rows())
}

pub async fn doc_handler(State(state): State<AppState>, Path(position): Path<usize>) -> Result<Json<Document>, (StatusCode, String)> {
    state
        .searcher
        .document(position)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("no document at position {position}")))
}

pub async fn word_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    match state.searcher.word_query(&params.q) {
        Some(report) => Json(report).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn sentence_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    match state.searcher.sentence_query(&params.q) {
        Ok(Some(report)) => Json(report).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "sentence query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
