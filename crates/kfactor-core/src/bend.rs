// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Bend Allowance and Deduction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flat-pattern bend metrics.

use kfactor_types::constants::MAX_BEND_ANGLE_DEG;
use kfactor_types::error::{KFactorError, KFactorResult};
use kfactor_types::input::BendCount;

/// Bend allowance: neutral-axis arc length through the bend.
///
/// `BA = θ · (r + k·s)`, θ in radians. A zero angle gives zero allowance.
pub fn bend_allowance(k_factor: f64, angle_deg: f64, r: f64, s: f64) -> f64 {
    angle_deg.to_radians() * (r + k_factor * s)
}

/// Outside setback: `tan(θ/2) · (r + s)`.
pub fn setback(r: f64, s: f64, angle_deg: f64) -> f64 {
    (angle_deg.to_radians() / 2.0).tan() * (r + s)
}

/// Bend deduction: `2 · setback - BA`.
///
/// Unchecked. Diverges as the angle approaches 180°.
pub fn bend_deduction(bend_allowance: f64, r: f64, s: f64, angle_deg: f64) -> f64 {
    2.0 * setback(r, s, angle_deg) - bend_allowance
}

/// Bend deduction, refusing angles within `epsilon_deg` of 180°.
pub fn try_bend_deduction(
    bend_allowance: f64,
    r: f64,
    s: f64,
    angle_deg: f64,
    epsilon_deg: f64,
) -> KFactorResult<f64> {
    if near_singularity(angle_deg, epsilon_deg) {
        return Err(KFactorError::InvalidAngle {
            angle_deg,
            reason: format!("bend deduction is undefined within {epsilon_deg}° of 180°"),
        });
    }
    let deduction = bend_deduction(bend_allowance, r, s, angle_deg);
    if !deduction.is_finite() {
        return Err(KFactorError::Overflow(format!(
            "bend deduction for r = {r}, s = {s}, angle = {angle_deg}° is not finite"
        )));
    }
    Ok(deduction)
}

/// True when `tan(θ/2)` is too close to its pole to be meaningful.
pub fn near_singularity(angle_deg: f64, epsilon_deg: f64) -> bool {
    MAX_BEND_ANGLE_DEG - angle_deg < epsilon_deg
}

/// Allowance for `count` identical bends.
pub fn total_allowance(bend_allowance: f64, count: BendCount) -> f64 {
    bend_allowance * f64::from(count.get())
}
