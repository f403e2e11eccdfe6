use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::embedding::{EmbeddingError, SemanticSimilarity};
use crate::gateway::REQUEST_ID_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{SemanticBreakdown, SemanticScoreRequest, SemanticScoreResponse};
use crate::gateway::state::HandlerState;
use crate::scoring::{ScoreRequest, ScoringError};

/// Phrase for an embedding-only score in `0.0..=100.0`.
pub fn semantic_score_tier(score: f64) -> &'static str {
    if score >= 90.0 {
        "Excellent! Your guess captures the twist almost perfectly."
    } else if score >= 75.0 {
        "Great job! Your guess is very close to the actual twist."
    } else if score >= 60.0 {
        "Good effort! You captured some key elements of the twist."
    } else if score >= 40.0 {
        "Decent attempt. You identified some aspects but missed key details."
    } else if score >= 20.0 {
        "You're on the right track but the actual twist is quite different."
    } else {
        "The actual twist is very different from your guess."
    }
}

fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn join_error(err: tokio::task::JoinError) -> GatewayError {
    GatewayError::InternalError(format!("scoring task failed: {}", err))
}

/// `POST /score`: full hybrid score.
#[instrument(skip(state, body), fields(request_id = tracing::field::Empty))]
pub async fn score_handler<S>(
    State(state): State<HandlerState<S>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    S: SemanticSimilarity + 'static,
{
    let request_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));

    let Json(body) = body?;
    let request = ScoreRequest::from_json(&body)?;
    debug!(
        guess_len = request.guess.len(),
        reference_len = request.reference.len(),
        guess_tags = request.guess_tags.len(),
        reference_tags = request.reference_tags.len(),
        "Scoring request received"
    );

    // The encoder forward pass is CPU-bound.
    let scorer = Arc::clone(&state.scorer);
    let result = tokio::task::spawn_blocking(move || scorer.score_request(&request))
        .await
        .map_err(join_error)??;

    info!(
        score = result.score,
        confidence = result.confidence,
        "Guess scored"
    );

    Ok(with_request_id(
        (StatusCode::OK, Json(result)).into_response(),
        &request_id,
    ))
}

/// `POST /semantic-score`: cosine similarity scaled to `0..=100`, nothing else.
#[instrument(skip(state, body), fields(request_id = tracing::field::Empty))]
pub async fn semantic_score_handler<S>(
    State(state): State<HandlerState<S>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    S: SemanticSimilarity + 'static,
{
    let request_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));

    let Json(body) = body?;
    let request: SemanticScoreRequest = serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request schema: {}", e)))?;

    let guess_length = request.guess.split_whitespace().count();
    let actual_length = request.actual_twist.split_whitespace().count();

    let scorer = Arc::clone(&state.scorer);
    let similarity = tokio::task::spawn_blocking(move || {
        scorer
            .similarity_source()
            .similarity(&request.guess, &request.actual_twist)
    })
    .await
    .map_err(join_error)?
    .map_err(ScoringError::from)?;

    let similarity = f64::from(similarity);
    if !similarity.is_finite() {
        return Err(ScoringError::from(EmbeddingError::InferenceFailed {
            reason: format!("non-finite similarity: {similarity}"),
        })
        .into());
    }

    let score = (similarity * 100.0).clamp(0.0, 100.0);
    info!(score = score, "Semantic score computed");

    let response = SemanticScoreResponse {
        score,
        justification: semantic_score_tier(score).to_string(),
        similarity_breakdown: SemanticBreakdown {
            cosine_similarity: similarity,
            semantic_overlap: score,
            guess_length,
            actual_length,
        },
    };

    Ok(with_request_id(
        (StatusCode::OK, Json(response)).into_response(),
        &request_id,
    ))
}
