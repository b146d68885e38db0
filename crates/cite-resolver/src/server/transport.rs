//! Axum routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::SourceError;
use crate::formatters::{candidates_json, error_json};
use crate::resolver::CitationResolver;

/// Query parameters for `/api/cite`.
#[derive(Debug, Deserialize)]
pub struct CiteQuery {
    #[serde(default)]
    q: String,
}

/// Create the HTTP router.
pub fn create_router(resolver: Arc<CitationResolver>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/api/cite", get(handle_cite))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(resolver)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "cite-resolver",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /api/cite?q=<title or arXiv URL>`
async fn handle_cite(
    State(resolver): State<Arc<CitationResolver>>,
    Query(query): Query<CiteQuery>,
) -> Response {
    let q = query.q.trim();
    if q.is_empty() {
        let err = SourceError::MalformedQuery("missing query parameter `q`".to_string());
        return (StatusCode::BAD_REQUEST, Json(error_json(&err.to_string()))).into_response();
    }

    tracing::debug!(query = q, "Handling citation lookup");
    let candidates = resolver.resolve(q).await;
    Json(candidates_json(&candidates)).into_response()
}
