// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{DEFAULT_CACHE_CAPACITY, MAX_BEND_ANGLE_DEG, SINGULARITY_EPSILON_DEG};
use crate::error::{KFactorError, KFactorResult};
use crate::input::LengthUnit;

/// Calculator configuration.
/// Every field has a default, so a partial JSON file is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Display unit for lengths. Label only, values are never converted.
    #[serde(default)]
    pub unit: LengthUnit,
    /// Bend deduction is skipped within this distance of 180° [deg].
    #[serde(default = "default_singularity_epsilon")]
    pub singularity_epsilon_deg: f64,
    /// Maximum memoized K-factor entries (0 disables the cache).
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Initial input values offered to the user.
    #[serde(default)]
    pub defaults: InputDefaults,
}

/// Starting values for the input form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    #[serde(default = "default_angle")]
    pub angle_deg: f64,
}

fn default_singularity_epsilon() -> f64 {
    SINGULARITY_EPSILON_DEG
}
fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}
fn default_radius() -> f64 {
    1.0
}
fn default_thickness() -> f64 {
    1.0
}
fn default_angle() -> f64 {
    90.0
}

impl Default for InputDefaults {
    fn default() -> Self {
        InputDefaults {
            radius: default_radius(),
            thickness: default_thickness(),
            angle_deg: default_angle(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            unit: LengthUnit::default(),
            singularity_epsilon_deg: default_singularity_epsilon(),
            cache_capacity: default_cache_capacity(),
            defaults: InputDefaults::default(),
        }
    }
}

impl CalculatorConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> KFactorResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!(path, unit = config.unit.label(), "loaded calculator config");
        Ok(config)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> KFactorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KFactorResult<()> {
        let eps = self.singularity_epsilon_deg;
        if !eps.is_finite() || eps < 0.0 || eps >= MAX_BEND_ANGLE_DEG {
            return Err(KFactorError::ConfigError(format!(
                "singularity_epsilon_deg must be finite and in [0, 180), got {eps}"
            )));
        }
        let d = &self.defaults;
        if !d.thickness.is_finite() || d.thickness <= 0.0 {
            return Err(KFactorError::ConfigError(format!(
                "default thickness must be finite and > 0, got {}",
                d.thickness
            )));
        }
        if !d.radius.is_finite() || d.radius < 0.0 {
            return Err(KFactorError::ConfigError(format!(
                "default radius must be finite and >= 0, got {}",
                d.radius
            )));
        }
        if !d.angle_deg.is_finite() || d.angle_deg <= 0.0 || d.angle_deg > MAX_BEND_ANGLE_DEG {
            return Err(KFactorError::ConfigError(format!(
                "default angle must be in (0, 180], got {}",
                d.angle_deg
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR is crates/kfactor-types/, the sample config
    /// lives two levels up at the workspace root.
    fn sample_config_path() -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("calculator.json")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_load_sample_config() {
        let cfg = CalculatorConfig::from_file(&sample_config_path()).unwrap();
        assert_eq!(cfg.unit, LengthUnit::Millimetres);
        assert_eq!(cfg.cache_capacity, 4096);
        assert!((cfg.singularity_epsilon_deg - 1e-3).abs() < 1e-15);
        assert!((cfg.defaults.angle_deg - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = CalculatorConfig::from_json(r#"{ "unit": "inches" }"#).unwrap();
        assert_eq!(cfg.unit, LengthUnit::Inches);
        assert_eq!(cfg.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!((cfg.defaults.thickness - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_epsilon() {
        let err = CalculatorConfig::from_json(r#"{ "singularity_epsilon_deg": -1.0 }"#);
        assert!(matches!(err, Err(KFactorError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_zero_default_thickness() {
        let err = CalculatorConfig::from_json(r#"{ "defaults": { "thickness": 0.0 } }"#);
        assert!(matches!(err, Err(KFactorError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CalculatorConfig::from_file("/nonexistent/calculator.json");
        assert!(matches!(err, Err(KFactorError::Io(_))));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = CalculatorConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2 = CalculatorConfig::from_json(&json).unwrap();
        assert_eq!(cfg.unit, cfg2.unit);
        assert_eq!(cfg.cache_capacity, cfg2.cache_capacity);
    }
}
