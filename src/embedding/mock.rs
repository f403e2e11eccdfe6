use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::EmbeddingError;
use super::similarity::SemanticSimilarity;

/// Scripted [`SemanticSimilarity`] for tests.
///
/// Identical texts compare as `1.0`, scripted pairs return their value (in either order), and
/// everything else returns the fallback. A failing mock rejects every query with
/// [`EmbeddingError::ModelUnavailable`].
#[derive(Debug, Default)]
pub struct MockSimilarity {
    pairs: HashMap<(String, String), f32>,
    fallback: f32,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockSimilarity {
    pub fn new(fallback: f32) -> Self {
        Self {
            fallback,
            ..Default::default()
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn with_pair(mut self, text_a: &str, text_b: &str, similarity: f32) -> Self {
        self.pairs
            .insert((text_a.to_string(), text_b.to_string()), similarity);
        self.pairs
            .insert((text_b.to_string(), text_a.to_string()), similarity);
        self
    }

    /// Number of similarity queries served (including failed ones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl SemanticSimilarity for MockSimilarity {
    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        if let Some(reason) = &self.failure {
            return Err(EmbeddingError::ModelUnavailable {
                reason: reason.clone(),
            });
        }

        if let Some(&scripted) = self
            .pairs
            .get(&(text_a.to_string(), text_b.to_string()))
        {
            return Ok(scripted);
        }

        if text_a == text_b {
            return Ok(1.0);
        }

        Ok(self.fallback)
    }
}
