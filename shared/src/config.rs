use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::*;
use crate::error::ConfigError;

/// Tunables for the wheel. Every field falls back to the stock game when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_timing_and_effects"))]
pub struct WheelConfig {
    #[validate(custom = "validate_weights")]
    pub weights: Vec<f64>,
    #[validate(range(min = 1))]
    pub full_turns: u32,
    pub settle_delay_ms: u32,
    pub celebration_delay_ms: u32,
    pub particle_intensity: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            weights: PRIZE_WEIGHTS.to_vec(),
            full_turns: FULL_TURNS_PER_SPIN,
            settle_delay_ms: SETTLE_DELAY_MS,
            celebration_delay_ms: CELEBRATION_DELAY_MS,
            particle_intensity: PARTICLE_INTENSITY,
        }
    }
}

impl WheelConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

// The sum is left unchecked; the draw fallback absorbs a total other than 1.
pub fn validate_weights(weights: &[f64]) -> Result<(), ValidationError> {
    if weights.len() != WHEEL_SLOTS {
        return Err(ValidationError::new("weights_must_cover_every_slot"));
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ValidationError::new("weights_must_be_non_negative"));
    }
    if !weights.iter().any(|w| *w > 0.0) {
        return Err(ValidationError::new("weights_must_not_all_be_zero"));
    }
    Ok(())
}

// The wheel's CSS transition is fixed at 5s; settling sooner would reveal the prize mid-turn
pub fn validate_timing_and_effects(config: &WheelConfig) -> Result<(), ValidationError> {
    if config.settle_delay_ms < SETTLE_DELAY_MS {
        return Err(ValidationError::new("settle_delay_shorter_than_wheel_transition"));
    }

    let intensity = config.particle_intensity;
    if !(intensity > 0.0 && intensity <= 1.0) {
        return Err(ValidationError::new("particle_intensity_out_of_range"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WheelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weights.len(), WHEEL_SLOTS);
        assert_eq!(config.settle_delay_ms, 5_000);
        assert_eq!(config.celebration_delay_ms, 6_000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WheelConfig::from_json(r#"{ "celebration_delay_ms": 3000 }"#).unwrap();
        assert_eq!(config.celebration_delay_ms, 3_000);
        assert_eq!(config.weights, PRIZE_WEIGHTS.to_vec());
        assert_eq!(config.full_turns, 5);
    }

    #[test]
    fn test_weight_sum_is_not_enforced() {
        let config =
            WheelConfig::from_json(r#"{ "weights": [1, 1, 1, 1, 1, 1, 1, 1] }"#).unwrap();
        assert_eq!(config.weights.iter().sum::<f64>(), 8.0);
    }

    #[test]
    fn test_rejects_bad_weights() {
        let too_few = WheelConfig::from_json(r#"{ "weights": [0.5, 0.5] }"#);
        assert!(matches!(too_few, Err(ConfigError::Invalid(_))));

        let negative = WheelConfig::from_json(r#"{ "weights": [1.2, -0.2, 0, 0, 0, 0, 0, 0] }"#);
        assert!(matches!(negative, Err(ConfigError::Invalid(_))));

        let zeros = WheelConfig::from_json(r#"{ "weights": [0, 0, 0, 0, 0, 0, 0, 0] }"#);
        assert!(matches!(zeros, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_turns_and_intensity() {
        let no_turns = WheelConfig::from_json(r#"{ "full_turns": 0 }"#);
        assert!(matches!(no_turns, Err(ConfigError::Invalid(_))));

        let loud = WheelConfig::from_json(r#"{ "particle_intensity": 1.5 }"#);
        assert!(matches!(loud, Err(ConfigError::Invalid(_))));

        let hasty = WheelConfig::from_json(r#"{ "settle_delay_ms": 100, "full_turns": 40 }"#);
        assert!(matches!(hasty, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_settle_delay_may_outlast_the_wheel() {
        let slow = WheelConfig::from_json(r#"{ "settle_delay_ms": 7000 }"#).unwrap();
        assert_eq!(slow.settle_delay_ms, 7_000);
    }

    #[test]
    fn test_malformed_json() {
        let err = WheelConfig::from_json("{ weights: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Malformed wheel config"));
    }
}
