//! Wire types that only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

use crate::embedding::EmbedderMode;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub embedder_mode: String,
    pub models_loaded: bool,
}

impl HealthResponse {
    pub fn healthy(mode: EmbedderMode) -> Self {
        Self {
            status: "healthy".to_string(),
            embedder_mode: mode.as_str().to_string(),
            models_loaded: mode == EmbedderMode::Model,
        }
    }
}

/// Body of `POST /semantic-score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticScoreRequest {
    pub guess: String,
    pub actual_twist: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticBreakdown {
    /// Raw cosine similarity, may be negative.
    pub cosine_similarity: f64,
    /// Same value as the response score.
    pub semantic_overlap: f64,
    /// Whitespace-separated word counts.
    pub guess_length: usize,
    pub actual_length: usize,
}

/// Embedding-only score; no lexical or tag signal, no calibration curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticScoreResponse {
    pub score: f64,
    pub justification: String,
    pub similarity_breakdown: SemanticBreakdown,
}
