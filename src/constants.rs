//! Cross-cutting, shared constants.
//!
//! Scoring policy defaults live here so the config layer, the engine and the tests agree on
//! one set of numbers. Runtime overrides go through [`ScoringConfig`](crate::scoring::ScoringConfig).

/// Default weight of the semantic signal.
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.6;
/// Default weight of the lexical signal.
pub const DEFAULT_LEXICAL_WEIGHT: f64 = 0.3;
/// Default weight of the tag signal.
pub const DEFAULT_TAG_WEIGHT: f64 = 0.1;

/// Tolerance when checking that weights sum to one.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Raw scores below this are suppressed by the calibration curve.
pub const DEFAULT_CURVE_LOW_THRESHOLD: f64 = 0.3;
/// Raw scores above this are boosted by the calibration curve.
pub const DEFAULT_CURVE_HIGH_THRESHOLD: f64 = 0.7;
/// Slope applied below the low threshold.
pub const DEFAULT_CURVE_LOW_FACTOR: f64 = 0.8;
/// Slope applied above the high threshold.
pub const DEFAULT_CURVE_HIGH_FACTOR: f64 = 1.2;

/// Tag score used when the reference carries no tags.
pub const NEUTRAL_TAG_MATCH: f64 = 0.5;

/// Token count at which text length stops limiting confidence.
pub const FULL_TRUST_TOKENS: f64 = 20.0;
/// Lower bound of the length factor.
pub const MIN_LENGTH_FACTOR: f64 = 0.3;
/// Lower bound of the semantic certainty term.
pub const MIN_SEMANTIC_CERTAINTY: f64 = 0.5;
/// Confidence below which the justification carries an uncertainty note.
pub const UNCERTAINTY_NOTE_THRESHOLD: f64 = 0.6;

/// Maximum number of shared/missing tokens reported in a breakdown.
pub const MAX_BREAKDOWN_TOKENS: usize = 10;
/// Shared tokens listed by the justification when many matched.
pub const MAX_JUSTIFIED_SHARED: usize = 5;
/// Missing tokens listed by the justification.
pub const MAX_JUSTIFIED_MISSING: usize = 3;

/// Output dimension of the all-MiniLM-L6-v2 sentence encoder.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8001;
