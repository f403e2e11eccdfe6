//! Signal weighting and the raw-to-score calibration curve.
//!
//! The curve is a policy: [`HybridScorer`](super::HybridScorer) is generic over
//! [`Calibrator`], with [`PiecewiseCurve`] as the default. Any `Fn(f64) -> f64` closure is
//! also a calibrator, which keeps experiments out of the pipeline code.

use crate::config::ConfigError;
use crate::constants::{
    DEFAULT_CURVE_HIGH_FACTOR, DEFAULT_CURVE_HIGH_THRESHOLD, DEFAULT_CURVE_LOW_FACTOR,
    DEFAULT_CURVE_LOW_THRESHOLD, DEFAULT_LEXICAL_WEIGHT, DEFAULT_SEMANTIC_WEIGHT,
    DEFAULT_TAG_WEIGHT, WEIGHT_SUM_EPSILON,
};

/// Maps a weighted raw signal in `[0, 1]` onto the calibrated scale.
pub trait Calibrator: Send + Sync {
    /// Returns the calibrated value. Callers clamp the result, so it may leave `[0, 1]`.
    fn calibrate(&self, raw: f64) -> f64;
}

impl<F> Calibrator for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn calibrate(&self, raw: f64) -> f64 {
        self(raw)
    }
}

/// Three-piece linear curve: suppress below `low_threshold`, boost above `high_threshold`,
/// identity in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseCurve {
    pub low_threshold: f64,
    pub high_threshold: f64,
    pub low_factor: f64,
    pub high_factor: f64,
}

impl Default for PiecewiseCurve {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_CURVE_LOW_THRESHOLD,
            high_threshold: DEFAULT_CURVE_HIGH_THRESHOLD,
            low_factor: DEFAULT_CURVE_LOW_FACTOR,
            high_factor: DEFAULT_CURVE_HIGH_FACTOR,
        }
    }
}

impl PiecewiseCurve {
    /// Checks `0 <= low <= high <= 1` and non-negative, finite factors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.low_threshold,
            self.high_threshold,
            self.low_factor,
            self.high_factor,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidCalibration {
                reason: "curve parameters must be finite".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.low_threshold)
            || !(0.0..=1.0).contains(&self.high_threshold)
            || self.low_threshold > self.high_threshold
        {
            return Err(ConfigError::InvalidCalibration {
                reason: format!(
                    "thresholds must satisfy 0 <= low <= high <= 1, got low={} high={}",
                    self.low_threshold, self.high_threshold
                ),
            });
        }

        if self.low_factor < 0.0 || self.high_factor < 0.0 {
            return Err(ConfigError::InvalidCalibration {
                reason: format!(
                    "factors must be non-negative, got low={} high={}",
                    self.low_factor, self.high_factor
                ),
            });
        }

        Ok(())
    }
}

impl Calibrator for PiecewiseCurve {
    fn calibrate(&self, raw: f64) -> f64 {
        if raw < self.low_threshold {
            raw * self.low_factor
        } else if raw > self.high_threshold {
            self.high_threshold + (raw - self.high_threshold) * self.high_factor
        } else {
            raw
        }
    }
}

/// Relative importance of the three signals. Must sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWeights {
    pub semantic: f64,
    pub lexical: f64,
    pub tag: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            semantic: DEFAULT_SEMANTIC_WEIGHT,
            lexical: DEFAULT_LEXICAL_WEIGHT,
            tag: DEFAULT_TAG_WEIGHT,
        }
    }
}

impl SignalWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [self.semantic, self.lexical, self.tag];

        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights {
                reason: format!(
                    "weights must be finite and non-negative, got semantic={} lexical={} tag={}",
                    self.semantic, self.lexical, self.tag
                ),
            });
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::InvalidWeights {
                reason: format!("weights must sum to 1.0, got {sum}"),
            });
        }

        Ok(())
    }

    /// Weighted sum of the three signals.
    pub fn combine(&self, semantic: f64, lexical: f64, tag: f64) -> f64 {
        semantic * self.semantic + lexical * self.lexical + tag * self.tag
    }
}

/// Converts a calibrated value into an integer score in `0..=100` (floored).
///
/// Non-finite input maps to `0`.
pub fn to_score(calibrated: f64) -> u8 {
    let scaled = calibrated * 100.0;
    if !scaled.is_finite() {
        return 0;
    }

    scaled.clamp(0.0, 100.0).floor() as u8
}
