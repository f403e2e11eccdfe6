use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ScoringError;

/// One guess to be judged against one reference twist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Player's free-text guess.
    pub guess: String,
    /// Reference twist statement.
    #[serde(alias = "actual_twist")]
    pub reference: String,
    /// Tags the player attached to the guess.
    #[serde(default)]
    pub guess_tags: Vec<String>,
    /// Ground-truth tags of the reference.
    #[serde(default)]
    pub reference_tags: Vec<String>,
}

impl ScoreRequest {
    pub fn new(guess: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
            reference: reference.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<G, R>(mut self, guess_tags: G, reference_tags: R) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        self.guess_tags = guess_tags.into_iter().map(Into::into).collect();
        self.reference_tags = reference_tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a request from loosely-typed JSON.
    ///
    /// Text fields accept strings, and numbers or booleans are coerced to their string form.
    /// `null`, arrays and objects are rejected with [`ScoringError::InvalidInput`]. Tag fields
    /// may be absent or `null` (empty) or an array of scalars.
    pub fn from_json(value: &Value) -> Result<Self, ScoringError> {
        let Value::Object(fields) = value else {
            return Err(ScoringError::invalid_input("request body must be a JSON object"));
        };

        let guess = coerce_text(fields.get("guess"), "guess")?;
        let reference = match fields.get("reference") {
            Some(v) => coerce_text(Some(v), "reference")?,
            None => coerce_text(fields.get("actual_twist"), "reference")?,
        };
        let guess_tags = coerce_tags(fields.get("guess_tags"), "guess_tags")?;
        let reference_tags = coerce_tags(fields.get("reference_tags"), "reference_tags")?;

        Ok(Self {
            guess,
            reference,
            guess_tags,
            reference_tags,
        })
    }
}

fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_text(value: Option<&Value>, field: &str) -> Result<String, ScoringError> {
    let value =
        value.ok_or_else(|| ScoringError::invalid_input(format!("missing field `{field}`")))?;

    coerce_scalar(value).ok_or_else(|| {
        ScoringError::invalid_input(format!("`{field}` must be a string, got {}", kind(value)))
    })
}

fn coerce_tags(value: Option<&Value>, field: &str) -> Result<Vec<String>, ScoringError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                coerce_scalar(item).ok_or_else(|| {
                    ScoringError::invalid_input(format!(
                        "`{field}[{idx}]` must be a string, got {}",
                        kind(item)
                    ))
                })
            })
            .collect(),
        Some(other) => Err(ScoringError::invalid_input(format!(
            "`{field}` must be an array of strings, got {}",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Per-signal detail behind a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Clamped cosine similarity, rounded to three decimals.
    pub semantic_similarity: f64,
    /// Fraction of reference tokens found in the guess, rounded to three decimals.
    pub lexical_overlap: f64,
    /// Fraction of reference tags found in the guess tags, rounded to three decimals.
    pub tag_match: f64,
    /// Up to ten shared tokens, lexicographic order.
    pub shared_tokens: Vec<String>,
    /// Up to ten missing reference tokens, lexicographic order.
    pub missing_tokens: Vec<String>,
}

/// Final judgement for one guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Calibrated score in `0..=100`.
    pub score: u8,
    /// Trust in the score, `0.0..=1.0`, three decimals.
    pub confidence: f64,
    pub breakdown: ScoreBreakdown,
    /// Human-readable explanation.
    pub justification: String,
}

impl std::fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/100 (confidence {:.3}): {}",
            self.score, self.confidence, self.justification
        )
    }
}
