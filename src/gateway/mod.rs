//! HTTP gateway (Axum) exposing the scorer.
//!
//! This module is primarily used by the `twist-judge` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{score_handler, semantic_score_handler};
pub use payload::HealthResponse;
pub use state::HandlerState;

use crate::embedding::SemanticSimilarity;

/// Response header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Response header carrying a short machine-readable failure class.
pub const TWIST_STATUS_HEADER: &str = "x-twist-status";

pub fn create_router_with_state<S>(state: HandlerState<S>) -> Router
where
    S: SemanticSimilarity + 'static,
{
    Router::new()
        .route("/health", get(health_handler::<S>))
        .route("/score", post(score_handler::<S>))
        .route("/semantic-score", post(semantic_score_handler::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /health`. Always 200 while the process is serving; the body says whether a real
/// encoder is loaded.
#[tracing::instrument(skip(state))]
pub async fn health_handler<S>(State(state): State<HandlerState<S>>) -> Response
where
    S: SemanticSimilarity + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse::healthy(state.embedder_mode)),
    )
        .into_response()
}
