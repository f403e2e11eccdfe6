use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::constants::MAX_BREAKDOWN_TOKENS;
use crate::embedding::{EmbeddingError, SemanticSimilarity};

use super::calibration::{Calibrator, PiecewiseCurve, SignalWeights, to_score};
use super::confidence::{self, round3};
use super::config::ScoringConfig;
use super::error::ScoringError;
use super::justification::justify;
use super::lexical::LexicalBreakdown;
use super::tags::tag_match;
use super::tokenize::token_count;
use super::types::{ScoreBreakdown, ScoreRequest, ScoreResult};

/// Fuses semantic, lexical and tag signals into one calibrated, explained score.
///
/// The semantic collaborator is injected at construction and only ever queried, so a scorer
/// can be shared behind an `Arc` and called from any number of threads.
pub struct HybridScorer<S, C = PiecewiseCurve> {
    similarity: S,
    weights: SignalWeights,
    calibrator: C,
}

impl<S, C> std::fmt::Debug for HybridScorer<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HybridScorer")
            .field("weights", &self.weights)
            .field("calibrator", &std::any::type_name::<C>())
            .finish()
    }
}

impl<S: SemanticSimilarity> HybridScorer<S> {
    /// Scorer with the default weights and calibration curve.
    pub fn new(similarity: S) -> Self {
        Self {
            similarity,
            weights: SignalWeights::default(),
            calibrator: PiecewiseCurve::default(),
        }
    }

    /// Scorer with a validated [`ScoringConfig`].
    pub fn with_config(similarity: S, config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            similarity,
            weights: config.weights,
            calibrator: config.curve,
        })
    }
}

impl<S: SemanticSimilarity, C: Calibrator> HybridScorer<S, C> {
    /// Scorer with a custom calibration policy.
    pub fn with_calibrator(
        similarity: S,
        weights: SignalWeights,
        calibrator: C,
    ) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self {
            similarity,
            weights,
            calibrator,
        })
    }

    pub fn weights(&self) -> SignalWeights {
        self.weights
    }

    pub fn calibrator(&self) -> &C {
        &self.calibrator
    }

    /// The injected semantic collaborator.
    pub fn similarity_source(&self) -> &S {
        &self.similarity
    }

    /// Semantic similarity clamped to `[0, 1]`; negative cosine means "unrelated".
    pub fn semantic_similarity(&self, guess: &str, reference: &str) -> Result<f64, ScoringError> {
        let raw = self.similarity.similarity(guess, reference)?;

        if !raw.is_finite() {
            warn!(raw = %raw, "Semantic collaborator returned a non-finite similarity");
            return Err(ScoringError::EmbeddingUnavailable(
                EmbeddingError::InferenceFailed {
                    reason: format!("non-finite similarity: {raw}"),
                },
            ));
        }

        Ok(f64::from(raw).clamp(0.0, 1.0))
    }

    /// Scores a guess without tags (the tag signal is neutral).
    pub fn score(&self, guess: &str, reference: &str) -> Result<ScoreResult, ScoringError> {
        self.score_with_tags::<&str, &str>(guess, reference, &[], &[])
    }

    /// Scores a [`ScoreRequest`].
    pub fn score_request(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoringError> {
        self.score_with_tags(
            &request.guess,
            &request.reference,
            &request.guess_tags,
            &request.reference_tags,
        )
    }

    /// Scores a guess against a reference, with optional tags on either side.
    pub fn score_with_tags<G, R>(
        &self,
        guess: &str,
        reference: &str,
        guess_tags: &[G],
        reference_tags: &[R],
    ) -> Result<ScoreResult, ScoringError>
    where
        G: AsRef<str>,
        R: AsRef<str>,
    {
        let semantic = self.semantic_similarity(guess, reference)?;
        let lexical = LexicalBreakdown::compute(guess, reference);
        let tags = tag_match(guess_tags, reference_tags);

        let raw = self.weights.combine(semantic, lexical.overlap, tags);
        let score = to_score(self.calibrator.calibrate(raw));

        let confidence = confidence::estimate(token_count(guess), token_count(reference), semantic);

        let shared_tokens = lexical.shared_head(MAX_BREAKDOWN_TOKENS);
        let missing_tokens = lexical.missing_head(MAX_BREAKDOWN_TOKENS);
        let justification = justify(score, semantic, &shared_tokens, &missing_tokens, confidence);

        debug!(
            semantic = semantic,
            lexical = lexical.overlap,
            tags = tags,
            raw = raw,
            score = score,
            confidence = confidence,
            "Scored guess"
        );

        Ok(ScoreResult {
            score,
            confidence,
            breakdown: ScoreBreakdown {
                semantic_similarity: round3(semantic),
                lexical_overlap: round3(lexical.overlap),
                tag_match: round3(tags),
                shared_tokens,
                missing_tokens,
            },
            justification,
        })
    }
}
