//! Embedding + model utilities.
//!
//! - [`SemanticSimilarity`] is the seam the scorer depends on.
//! - [`sentence`] provides the default implementation (BERT sentence encoder, or a stub).

/// BERT encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Scripted similarity source for tests.
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Sentence embedder.
pub mod sentence;
/// Similarity trait and cosine helper.
pub mod similarity;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSimilarity;
pub use sentence::{
    EmbedderMode, SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, SentenceConfig, SentenceEmbedder,
};
pub use similarity::{SemanticSimilarity, cosine_similarity};
