//! Configuration for the generators.
//!
//! Every section has working defaults, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [tone]
//! min_value = 10.0
//! max_value = 95.0
//! max_step = 20.0
//!
//! [expansion]
//! main_set_maximum = 10
//! max_attempts = 1000
//!
//! [lookup]
//! radius = 20.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tincture_core::logging::targets;

use crate::error::ConfigError;

/// Value bounds and step cap for tonal ramps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Shades must stay strictly above this value.
    pub min_value: f64,
    /// Tints must stay strictly below this value.
    pub max_value: f64,
    /// Largest value difference between neighbouring tones.
    pub max_step: f64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            min_value: 10.0,
            max_value: 95.0,
            max_step: 20.0,
        }
    }
}

impl ToneConfig {
    /// Create a tone configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower value bound.
    pub fn min_value(mut self, value: f64) -> Self {
        self.min_value = value;
        self
    }

    /// Set the upper value bound.
    pub fn max_value(mut self, value: f64) -> Self {
        self.max_value = value;
        self
    }

    /// Set the step cap.
    pub fn max_step(mut self, step: f64) -> Self {
        self.max_step = step;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.min_value) || !(0.0..=100.0).contains(&self.max_value) {
            return Err(ConfigError::invalid(
                "tone",
                "value bounds must lie within [0, 100]",
            ));
        }
        if self.min_value >= self.max_value {
            return Err(ConfigError::invalid(
                "tone.min_value",
                format!("{} is not below max_value {}", self.min_value, self.max_value),
            ));
        }
        if self.max_step <= 0.0 {
            return Err(ConfigError::invalid("tone.max_step", "must be positive"));
        }
        Ok(())
    }
}

/// Thresholds for growing a handful of seed colors into a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Upper bound on the main set; half of it may come from the seeds.
    pub main_set_maximum: usize,
    /// Hue distance (degrees) under which two members count as similar.
    pub hue_separation: f64,
    /// Saturation distance under which two similar hues collide.
    pub saturation_separation: f64,
    /// Saturation below which a member counts as grey.
    pub grey_saturation_threshold: f64,
    /// Candidates drawn before giving up on filling the main set.
    pub max_attempts: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            main_set_maximum: 10,
            hue_separation: 15.0,
            saturation_separation: 50.0,
            grey_saturation_threshold: 10.0,
            max_attempts: 1000,
        }
    }
}

impl ExpansionConfig {
    /// Create an expansion configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main set size cap.
    pub fn main_set_maximum(mut self, maximum: usize) -> Self {
        self.main_set_maximum = maximum;
        self
    }

    /// Set the hue collision distance.
    pub fn hue_separation(mut self, degrees: f64) -> Self {
        self.hue_separation = degrees;
        self
    }

    /// Set the saturation collision distance.
    pub fn saturation_separation(mut self, distance: f64) -> Self {
        self.saturation_separation = distance;
        self
    }

    /// Set the grey threshold.
    pub fn grey_saturation_threshold(mut self, threshold: f64) -> Self {
        self.grey_saturation_threshold = threshold;
        self
    }

    /// Set the attempt cap.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.main_set_maximum < 2 {
            return Err(ConfigError::invalid(
                "expansion.main_set_maximum",
                "must be at least 2",
            ));
        }
        if self.hue_separation < 0.0 || self.saturation_separation < 0.0 {
            return Err(ConfigError::invalid(
                "expansion",
                "separations must not be negative",
            ));
        }
        Ok(())
    }
}

/// Settings for nearest-name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Half-width of the RGB cube searched before falling back to the full
    /// reference set.
    pub radius: f64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self { radius: 20.0 }
    }
}

impl LookupConfig {
    /// Set the neighbourhood radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// Complete generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyConfig {
    /// Tonal ramp settings.
    pub tone: ToneConfig,
    /// Seed palette expansion settings.
    pub expansion: ExpansionConfig,
    /// Name lookup settings.
    pub lookup: LookupConfig,
}

impl HarmonyConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tone section.
    pub fn with_tone(mut self, tone: ToneConfig) -> Self {
        self.tone = tone;
        self
    }

    /// Replace the expansion section.
    pub fn with_expansion(mut self, expansion: ExpansionConfig) -> Self {
        self.expansion = expansion;
        self
    }

    /// Replace the lookup section.
    pub fn with_lookup(mut self, lookup: LookupConfig) -> Self {
        self.lookup = lookup;
        self
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed input and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded configuration");
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tone.validate()?;
        self.expansion.validate()?;
        if self.lookup.radius < 0.0 {
            return Err(ConfigError::invalid("lookup.radius", "must not be negative"));
        }
        Ok(())
    }
}
