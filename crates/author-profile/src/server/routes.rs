//! JSON routes over the profile service.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::limits;
use crate::error::ProfileError;
use crate::models::SOURCE_NAME;
use crate::service::ProfileService;

/// Query parameters for `/author_search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    name: String,
    #[serde(default = "default_per_page")]
    per_page: u32,
}

const fn default_per_page() -> u32 {
    limits::SEARCH_PER_PAGE
}

/// Query parameters for `/ranking`.
#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    author_id: String,
}

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub service: ProfileService,
}

/// Create the HTTP router.
pub fn create_router(service: ProfileService) -> Router {
    let state = Arc::new(HttpState { service });

    Router::new()
        .route("/", get(describe))
        .route("/health", get(health_check))
        .route("/author_search", get(author_search))
        .route("/ranking", get(ranking))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn describe(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let settings = state.service.settings();
    Json(serde_json::json!({
        "message": "OK",
        "endpoints": ["/author_search", "/ranking", "/health"],
        "source": SOURCE_NAME,
        "tools": [
            format!("top_papers_by_citation_rate (top {})", settings.top_papers),
            format!("top_coauthors_by_joint_articles (top {})", settings.top_coauthors),
        ],
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "author-profile",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn author_search(
    State(state): State<Arc<HttpState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return rejection_response(&rejection),
    };

    match state.service.search_authors(&query.name, query.per_page).await {
        Ok(results) => Json(results).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn ranking(
    State(state): State<Arc<HttpState>>,
    query: Result<Query<RankingQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return rejection_response(&rejection),
    };

    match state.service.ranking(&query.author_id).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Map a service error onto an HTTP status and `{"detail": ...}` body.
fn error_response(err: &ProfileError) -> Response {
    let status = match err {
        ProfileError::Upstream(_) => StatusCode::BAD_GATEWAY,
        ProfileError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };

    (status, Json(serde_json::json!({ "detail": err.to_user_message() }))).into_response()
}

/// Missing or malformed query parameters are validation failures too.
fn rejection_response(rejection: &QueryRejection) -> Response {
    error_response(&ProfileError::validation("query", rejection.body_text()))
}
