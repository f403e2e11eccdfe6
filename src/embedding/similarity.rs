//! The semantic-similarity seam between the scoring engine and whatever produces embeddings.

use std::sync::Arc;

use super::error::EmbeddingError;

/// External capability: "how close in meaning are these two texts?".
///
/// Implementations return a cosine similarity in `[-1, 1]` and must be safe to query from many
/// threads at once. Failures are reported, never replaced by a default value.
pub trait SemanticSimilarity: Send + Sync {
    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, EmbeddingError>;
}

impl<T: SemanticSimilarity + ?Sized> SemanticSimilarity for Arc<T> {
    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, EmbeddingError> {
        (**self).similarity(text_a, text_b)
    }
}

impl<T: SemanticSimilarity + ?Sized> SemanticSimilarity for Box<T> {
    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, EmbeddingError> {
        (**self).similarity(text_a, text_b)
    }
}

impl<T: SemanticSimilarity + ?Sized> SemanticSimilarity for &T {
    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, EmbeddingError> {
        (**self).similarity(text_a, text_b)
    }
}

/// Cosine similarity of two equal-length vectors. Zero vectors compare as `0.0`.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
            (dot + av * bv, na + av * av, nb + bv * bv)
        });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
    }
}
