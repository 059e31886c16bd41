//! Conversion settings
//!
//! Settings are grouped the way the pipeline is:
//! - Flattening (Bezier sampling density)
//! - Fitting (margin, degenerate-geometry policy)
//! - Encoding (path merge tolerance)
//!
//! Files may be JSON or TOML; the format follows the file extension. Missing
//! keys take their defaults.

use crate::error::{ConfigError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tekvec_core::constants::{
    DEFAULT_BEZIER_SAMPLES, MARGIN, MAX_X_COORDINATE, MAX_Y_COORDINATE, MIN_BEZIER_SAMPLES,
};
use tekvec_vector::{
    ConversionParameters, DegeneratePolicy, EncoderConfig, FitterConfig, FlattenerConfig,
};
use tracing::debug;

/// Curve flattening settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenSettings {
    /// Samples per cubic Bezier segment, endpoints included
    pub bezier_samples: usize,
}

impl Default for FlattenSettings {
    fn default() -> Self {
        Self {
            bezier_samples: DEFAULT_BEZIER_SAMPLES,
        }
    }
}

/// Fitting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitSettings {
    /// Free space kept on each side of the device rectangle
    pub margin: f64,
    /// Handling of zero-width or zero-height geometry
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            margin: MARGIN,
            degenerate_policy: DegeneratePolicy::Reject,
        }
    }
}

/// Encoding settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    /// Per-axis distance under which adjacent paths are joined; 0 is exact
    pub merge_tolerance: f64,
}

/// Complete conversion configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub flatten: FlattenSettings,
    pub fit: FitSettings,
    pub encode: EncodeSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )
        .into()),
    }
}

impl Config {
    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.json` or `.toml` file and validate it.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate and write configuration to a `.json` or `.toml` file.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let out_of_range = |key: &str, value: String| ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value,
        };

        if self.flatten.bezier_samples < MIN_BEZIER_SAMPLES {
            return Err(out_of_range(
                "flatten.bezier_samples",
                self.flatten.bezier_samples.to_string(),
            ));
        }

        let margin = self.fit.margin;
        if !margin.is_finite()
            || margin < 0.0
            || 2.0 * margin >= MAX_X_COORDINATE.min(MAX_Y_COORDINATE)
        {
            return Err(out_of_range("fit.margin", margin.to_string()));
        }

        let tolerance = self.encode.merge_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(out_of_range("encode.merge_tolerance", tolerance.to_string()));
        }

        Ok(())
    }

    /// Pipeline parameters for this configuration.
    pub fn to_parameters(&self) -> ConversionParameters {
        ConversionParameters {
            flatten: FlattenerConfig {
                bezier_samples: self.flatten.bezier_samples,
                ..Default::default()
            },
            fit: FitterConfig {
                margin: self.fit.margin,
                degenerate_policy: self.fit.degenerate_policy,
                ..Default::default()
            },
            encode: EncoderConfig {
                merge_tolerance: self.encode.merge_tolerance,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_device_constants() {
        let config = Config::new();
        assert_eq!(config.flatten.bezier_samples, 6);
        assert_eq!(config.fit.margin, 10.0);
        assert_eq!(config.fit.degenerate_policy, DegeneratePolicy::Reject);
        assert_eq!(config.encode.merge_tolerance, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.flatten.bezier_samples = 1;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.fit.margin = 390.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.encode.merge_tolerance = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [fit]
            degenerate_policy = "unit-scale"
            "#,
        )
        .unwrap();
        assert_eq!(config.fit.degenerate_policy, DegeneratePolicy::UnitScale);
        assert_eq!(config.fit.margin, 10.0);
        assert_eq!(config.flatten.bezier_samples, 6);
    }

    #[test]
    fn test_to_parameters() {
        let mut config = Config::new();
        config.flatten.bezier_samples = 12;
        config.fit.margin = 20.0;
        config.encode.merge_tolerance = 0.25;

        let params = config.to_parameters();
        assert_eq!(params.flatten.bezier_samples, 12);
        assert_eq!(params.fit.margin, 20.0);
        assert_eq!(params.fit.max_x, 1023.0);
        assert_eq!(params.encode.merge_tolerance, 0.25);
        assert!(params.validate().is_ok());
    }
}
