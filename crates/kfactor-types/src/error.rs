// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KFactorError {
    #[error("Sheet thickness must be finite and > 0, got {0}")]
    InvalidThickness(f64),

    #[error("Inner bend radius must be finite and >= 0, got {0}")]
    InvalidRadius(f64),

    #[error("r/s ratio must be finite and >= 0, got {0}")]
    InvalidRatio(f64),

    #[error("Invalid bend angle {angle_deg}°: {reason}")]
    InvalidAngle { angle_deg: f64, reason: String },

    #[error("Invalid bend count: {0}")]
    InvalidBendCount(String),

    #[error("Numeric overflow: {0}")]
    Overflow(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KFactorResult<T> = Result<T, KFactorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KFactorError::InvalidThickness(0.0);
        assert!(format!("{err}").contains("thickness"));

        let err = KFactorError::InvalidAngle {
            angle_deg: 181.0,
            reason: "outside (0, 180]".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("181"));
        assert!(msg.contains("outside"));

        let err = KFactorError::Overflow("r/s ratio is not finite".to_string());
        assert!(format!("{err}").contains("overflow"));

        let err = KFactorError::UnknownMaterial("Unobtainium".to_string());
        assert!(format!("{err}").contains("Unobtainium"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{ not json");
        let err: KFactorError = parse.unwrap_err().into();
        assert!(matches!(err, KFactorError::Json(_)));
    }
}
