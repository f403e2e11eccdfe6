use std::sync::Arc;

use crate::embedding::{EmbedderMode, SemanticSimilarity};
use crate::scoring::HybridScorer;

/// Shared, read-only state handed to every request.
pub struct HandlerState<S: SemanticSimilarity + 'static> {
    pub scorer: Arc<HybridScorer<S>>,

    pub embedder_mode: EmbedderMode,
}

impl<S: SemanticSimilarity + 'static> Clone for HandlerState<S> {
    fn clone(&self) -> Self {
        Self {
            scorer: Arc::clone(&self.scorer),
            embedder_mode: self.embedder_mode,
        }
    }
}

impl<S: SemanticSimilarity + 'static> HandlerState<S> {
    pub fn new(scorer: Arc<HybridScorer<S>>, embedder_mode: EmbedderMode) -> Self {
        Self {
            scorer,
            embedder_mode,
        }
    }
}
