//! Settings controlling how weights are turned into colours

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::ConfigError;

/// Immutable styling parameters supplied by the caller. Field names follow
/// the camelCase convention of the JSON files these are usually read from,
/// and any field left out takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeightHighlightConfig {
    /// Factor applied per brace (or divided per bracket) of a run.
    pub parenthesis_boost: f64,
    /// Distance from 1.0 at which colour intensity saturates.
    pub max_delta_for_intensity: f64,
    pub up_hue: f64,
    pub down_hue: f64,
    pub saturation: f64,
    pub saturation_boost: f64,
    pub base_lightness: f64,
    pub lightness_delta: f64,
    pub intensity_exponent: f64,
    /// Colour for structural markup. Used by stylesheets and the terminal,
    /// never by the weight mapping.
    pub neutral_color: String,
    /// Colour for the closing `::` of a numeric weight.
    pub colon_color: String,
}

impl Default for WeightHighlightConfig {
    fn default() -> Self {
        WeightHighlightConfig {
            parenthesis_boost: 1.1,
            max_delta_for_intensity: 3.0,
            up_hue: 12.0,
            down_hue: 208.0,
            saturation: 68.0,
            saturation_boost: 18.0,
            base_lightness: 56.0,
            lightness_delta: 26.0,
            intensity_exponent: 0.7,
            neutral_color: "#6b7280".to_string(),
            colon_color: "#16a34a".to_string(),
        }
    }
}

impl WeightHighlightConfig {
    /// Read a JSON configuration file. Missing fields are defaulted, then
    /// the whole thing is validated.
    pub fn load(filename: &Path) -> Result<WeightHighlightConfig, ConfigError> {
        let content = std::fs::read_to_string(filename).map_err(|error| {
            debug!(?error);
            ConfigError::Unreadable(
                filename
                    .display()
                    .to_string(),
                error
                    .kind()
                    .to_string(),
            )
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<WeightHighlightConfig, ConfigError> {
        let config: WeightHighlightConfig = serde_json::from_str(content)
            .map_err(|error| ConfigError::Malformed(error.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the weight and colour arithmetic can't use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("parenthesisBoost", self.parenthesis_boost),
            ("maxDeltaForIntensity", self.max_delta_for_intensity),
            ("intensityExponent", self.intensity_exponent),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive(name, value));
            }
        }

        let finite = [
            ("upHue", self.up_hue),
            ("downHue", self.down_hue),
            ("saturation", self.saturation),
            ("saturationBoost", self.saturation_boost),
            ("baseLightness", self.base_lightness),
            ("lightnessDelta", self.lightness_delta),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        Ok(())
    }
}
