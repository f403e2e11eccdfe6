use crate::config::{ConfigError, parse_f64_from_env};

use super::calibration::{PiecewiseCurve, SignalWeights};

/// Tunable scoring policy: signal weights and the calibration curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoringConfig {
    pub weights: SignalWeights,
    pub curve: PiecewiseCurve,
}

impl ScoringConfig {
    pub const ENV_WEIGHT_SEMANTIC: &'static str = "TWIST_WEIGHT_SEMANTIC";
    pub const ENV_WEIGHT_LEXICAL: &'static str = "TWIST_WEIGHT_LEXICAL";
    pub const ENV_WEIGHT_TAG: &'static str = "TWIST_WEIGHT_TAG";
    pub const ENV_CURVE_LOW: &'static str = "TWIST_CURVE_LOW";
    pub const ENV_CURVE_HIGH: &'static str = "TWIST_CURVE_HIGH";
    pub const ENV_CURVE_LOW_FACTOR: &'static str = "TWIST_CURVE_LOW_FACTOR";
    pub const ENV_CURVE_HIGH_FACTOR: &'static str = "TWIST_CURVE_HIGH_FACTOR";

    /// Reads `TWIST_WEIGHT_*` / `TWIST_CURVE_*` overrides and validates the result.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let weights = SignalWeights {
            semantic: parse_f64_from_env(Self::ENV_WEIGHT_SEMANTIC, defaults.weights.semantic)?,
            lexical: parse_f64_from_env(Self::ENV_WEIGHT_LEXICAL, defaults.weights.lexical)?,
            tag: parse_f64_from_env(Self::ENV_WEIGHT_TAG, defaults.weights.tag)?,
        };

        let curve = PiecewiseCurve {
            low_threshold: parse_f64_from_env(Self::ENV_CURVE_LOW, defaults.curve.low_threshold)?,
            high_threshold: parse_f64_from_env(
                Self::ENV_CURVE_HIGH,
                defaults.curve.high_threshold,
            )?,
            low_factor: parse_f64_from_env(Self::ENV_CURVE_LOW_FACTOR, defaults.curve.low_factor)?,
            high_factor: parse_f64_from_env(
                Self::ENV_CURVE_HIGH_FACTOR,
                defaults.curve.high_factor,
            )?,
        };

        let config = Self { weights, curve };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.curve.validate()
    }

    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_curve(mut self, curve: PiecewiseCurve) -> Self {
        self.curve = curve;
        self
    }
}
