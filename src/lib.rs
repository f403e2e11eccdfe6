//! Twist-judge library crate (used by the server binary and integration tests).
//!
//! Scores a free-text guess of a story's plot twist against the reference twist by fusing
//! three signals: semantic similarity from an injected collaborator, lexical token overlap and
//! tag overlap. The result carries a calibrated 0-100 score, a confidence estimate, a
//! per-signal breakdown and a short justification.
//!
//! # Public API Surface
//!
//! ## Scoring
//! - [`HybridScorer`] - the engine; generic over its [`SemanticSimilarity`] source and its
//!   [`Calibrator`]
//! - [`ScoreRequest`], [`ScoreResult`], [`ScoreBreakdown`] - request and result types
//! - [`ScoringConfig`], [`SignalWeights`], [`PiecewiseCurve`] - tunable policy
//! - [`ScoringError`] - `InvalidInput` or `EmbeddingUnavailable`
//!
//! ## Embedding
//! - [`SemanticSimilarity`] - the collaborator seam
//! - [`SentenceEmbedder`], [`SentenceConfig`] - BERT sentence encoder (or stub)
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - server configuration
//! - [`gateway`] - Axum router and handlers
//!
//! ## Test/Mock Support
//! [`MockSimilarity`] is available behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Example
//!
//! ```
//! use twist_judge::{EmbeddingError, HybridScorer, SemanticSimilarity};
//!
//! struct Unrelated;
//!
//! impl SemanticSimilarity for Unrelated {
//!     fn similarity(&self, _: &str, _: &str) -> Result<f32, EmbeddingError> {
//!         Ok(0.2)
//!     }
//! }
//!
//! let scorer = HybridScorer::new(Unrelated);
//! let result = scorer
//!     .score("The detective was the killer", "The detective committed the murder")
//!     .unwrap();
//! assert!(result.breakdown.shared_tokens.contains(&"detective".to_string()));
//! ```

pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod scoring;

pub use config::{Config, ConfigError};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockSimilarity;
pub use embedding::{
    EmbedderMode, EmbeddingError, SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN,
    SemanticSimilarity, SentenceConfig, SentenceEmbedder, cosine_similarity,
};
pub use scoring::{
    Calibrator, HybridScorer, LexicalBreakdown, PiecewiseCurve, ScoreBreakdown, ScoreRequest,
    ScoreResult, ScoringConfig, ScoringError, SignalWeights, to_score,
};
