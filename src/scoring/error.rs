use thiserror::Error;

use crate::embedding::EmbeddingError;

/// Failures surfaced by [`HybridScorer`](super::HybridScorer).
///
/// The engine's own arithmetic is total, so these are the only two ways a scoring call can
/// fail. A collaborator failure is never folded into a low score.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("semantic similarity unavailable: {0}")]
    EmbeddingUnavailable(#[from] EmbeddingError),
}

impl ScoringError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        ScoringError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the semantic collaborator failed.
    pub fn is_embedding_unavailable(&self) -> bool {
        matches!(self, ScoringError::EmbeddingUnavailable(_))
    }
}
