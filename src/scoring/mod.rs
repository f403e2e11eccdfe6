//! Hybrid scoring of a guess against a reference twist.
//!
//! The pipeline is linear and request-scoped:
//!
//! 1. [`semantic`](HybridScorer::semantic_similarity) similarity from the injected
//!    [`SemanticSimilarity`](crate::embedding::SemanticSimilarity) collaborator, clamped to `[0, 1]`
//! 2. [`lexical`] token-set overlap ([`tokenize`] defines a token)
//! 3. [`tags`] overlap, neutral when the reference has no tags
//! 4. [`calibration`]: weighted sum, then a pluggable [`Calibrator`] curve, floored to `0..=100`
//! 5. [`confidence`] from text length and semantic sharpness
//! 6. [`justification`] text
//!
//! # Failure Semantics
//!
//! Only the semantic step can fail. Its error propagates as
//! [`ScoringError::EmbeddingUnavailable`]; the scorer never substitutes a lexical-and-tag-only
//! score, because a silently degraded score would be indistinguishable from a poor guess.

pub mod calibration;
pub mod confidence;
pub mod config;
pub mod error;
pub mod justification;
pub mod lexical;
pub mod scorer;
pub mod tags;
pub mod tokenize;
pub mod types;


pub use calibration::{Calibrator, PiecewiseCurve, SignalWeights, to_score};
pub use config::ScoringConfig;
pub use error::ScoringError;
pub use lexical::LexicalBreakdown;
pub use scorer::HybridScorer;
pub use tokenize::{token_count, token_set, word_tokens};
pub use types::{ScoreBreakdown, ScoreRequest, ScoreResult};
