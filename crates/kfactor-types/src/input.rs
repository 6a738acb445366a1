// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Bend Inputs and Results
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validated bend inputs and the derived result record.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_BEND_ANGLE_DEG;
use crate::error::{KFactorError, KFactorResult};

/// Length unit label. No conversion is ever applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "mm")]
    Millimetres,
    #[serde(rename = "inches")]
    Inches,
}

impl LengthUnit {
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Millimetres => "mm",
            LengthUnit::Inches => "inches",
        }
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = KFactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" => Ok(LengthUnit::Millimetres),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            other => Err(KFactorError::ConfigError(format!("unknown unit '{other}'"))),
        }
    }
}

/// Number of identical bends in a part, always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BendCount(NonZeroU32);

impl BendCount {
    pub const ONE: BendCount = BendCount(NonZeroU32::MIN);

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Accepts only finite, integral values >= 1.
    pub fn from_f64(value: f64) -> KFactorResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(KFactorError::InvalidBendCount(format!(
                "expected a whole number, got {value}"
            )));
        }
        if value < 1.0 || value > f64::from(u32::MAX) {
            return Err(KFactorError::InvalidBendCount(format!(
                "expected a count >= 1, got {value}"
            )));
        }
        Self::try_from(value as i64)
    }
}

impl TryFrom<i64> for BendCount {
    type Error = KFactorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(BendCount)
            .ok_or_else(|| {
                KFactorError::InvalidBendCount(format!("expected a count >= 1, got {value}"))
            })
    }
}

/// Geometry of a single bend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendInput {
    /// Inner bend radius r.
    pub radius: f64,
    /// Sheet thickness s, same unit as `radius`.
    pub thickness: f64,
    /// Bend angle [deg]. `None` skips allowance and deduction.
    pub angle_deg: Option<f64>,
    /// Number of identical bends for the total allowance.
    pub bends: Option<BendCount>,
}

impl BendInput {
    pub fn new(radius: f64, thickness: f64) -> Self {
        BendInput {
            radius,
            thickness,
            angle_deg: None,
            bends: None,
        }
    }

    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = Some(angle_deg);
        self
    }

    /// Bend count for the total allowance. Only valid together with an angle.
    pub fn with_bends(mut self, bends: BendCount) -> Self {
        self.bends = Some(bends);
        self
    }

    pub fn validate(&self) -> KFactorResult<()> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(KFactorError::InvalidThickness(self.thickness));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(KFactorError::InvalidRadius(self.radius));
        }
        match (self.angle_deg, self.bends) {
            (Some(angle), _) => validate_angle(angle)?,
            (None, Some(n)) => {
                return Err(KFactorError::InvalidBendCount(format!(
                    "{} bends given without a bend angle",
                    n.get()
                )));
            }
            (None, None) => {}
        }
        Ok(())
    }

    /// r/s, only after the thickness has been checked.
    pub fn ratio(&self) -> KFactorResult<f64> {
        self.validate()?;
        let ratio = self.radius / self.thickness;
        if !ratio.is_finite() {
            return Err(KFactorError::Overflow(format!(
                "r/s = {} / {} is not representable",
                self.radius, self.thickness
            )));
        }
        Ok(ratio)
    }
}

/// Accepts angles in (0, 180].
pub fn validate_angle(angle_deg: f64) -> KFactorResult<()> {
    if !angle_deg.is_finite() {
        return Err(KFactorError::InvalidAngle {
            angle_deg,
            reason: "angle must be finite".to_string(),
        });
    }
    if angle_deg <= 0.0 || angle_deg > MAX_BEND_ANGLE_DEG {
        return Err(KFactorError::InvalidAngle {
            angle_deg,
            reason: "angle must lie in (0, 180]".to_string(),
        });
    }
    Ok(())
}

/// Derived bend metrics. Recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendResult {
    pub ratio: f64,
    pub k_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_allowance: Option<f64>,
    /// `None` when no angle was given or the angle sits at the tangent singularity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_deduction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_allowance: Option<f64>,
}
