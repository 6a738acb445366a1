// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — K-Factor Curve
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Logistic approximation of the neutral-axis position.
//!
//! `k = d + (a - d) / (1 + (r/s / c)^b)`
//!
//! The coefficients are an empirical fit. K starts at `a` for a sharp bend
//! and rises towards `d` for large radii.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use kfactor_types::constants::{KF_A, KF_B, KF_C, KF_D};
use kfactor_types::error::{KFactorError, KFactorResult};

/// Four-parameter logistic curve K(r/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KFactorCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl KFactorCurve {
    /// The fitted sheet-metal curve.
    pub const STANDARD: KFactorCurve = KFactorCurve {
        a: KF_A,
        b: KF_B,
        c: KF_C,
        d: KF_D,
    };

    /// K-factor at `ratio = r/s`.
    ///
    /// The caller guarantees `ratio >= 0`. A negative ratio raises a negative
    /// base to a fractional power and returns NaN.
    #[inline]
    pub fn evaluate(&self, ratio: f64) -> f64 {
        self.d + (self.a - self.d) / (1.0 + (ratio / self.c).powf(self.b))
    }

    /// Checked variant of [`evaluate`](Self::evaluate).
    pub fn try_evaluate(&self, ratio: f64) -> KFactorResult<f64> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(KFactorError::InvalidRatio(ratio));
        }
        Ok(self.evaluate(ratio))
    }

    /// K as r/s → 0.
    pub fn lower_asymptote(&self) -> f64 {
        self.a
    }

    /// K as r/s → ∞.
    pub fn upper_asymptote(&self) -> f64 {
        self.d
    }
}

impl Default for KFactorCurve {
    fn default() -> Self {
        KFactorCurve::STANDARD
    }
}

/// K-factor from the standard curve.
pub fn compute_k_factor(ratio: f64) -> f64 {
    KFactorCurve::STANDARD.evaluate(ratio)
}

/// Evaluate the curve at `steps` evenly spaced ratios in `[min, max]`.
///
/// Returns `(ratio, k)` pairs for charting. Points are computed in parallel.
pub fn sample_curve(curve: &KFactorCurve, min: f64, max: f64, steps: usize) -> Vec<(f64, f64)> {
    if steps == 0 {
        return Vec::new();
    }
    let dr = if steps > 1 {
        (max - min) / (steps as f64 - 1.0)
    } else {
        0.0
    };

    (0..steps)
        .into_par_iter()
        .map(|i| {
            let ratio = min + dr * i as f64;
            (ratio, curve.evaluate(ratio))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ratio_is_lower_asymptote() {
        let k = compute_k_factor(0.0);
        assert!((k - 0.277833218).abs() < 1e-6, "k(0) = {k}");
    }

    #[test]
    fn test_unit_ratio() {
        // Hand evaluation: (1/c)^b = 1.690..., k = d + (a-d)/2.690... = 0.41899
        let k = compute_k_factor(1.0);
        assert!((k - 0.418995).abs() < 1e-5, "k(1) = {k}");
    }

    #[test]
    fn test_inflection_ratio_is_midpoint() {
        let curve = KFactorCurve::STANDARD;
        let k = curve.evaluate(curve.c);
        let mid = 0.5 * (curve.a + curve.d);
        assert!((k - mid).abs() < 1e-12);
    }

    #[test]
    fn test_large_ratio_approaches_upper_asymptote() {
        let k = compute_k_factor(1.0e6);
        assert!((k - 0.502506534).abs() < 1e-4, "k(1e6) = {k}");
        assert!(k < KFactorCurve::STANDARD.upper_asymptote());
    }

    #[test]
    fn test_try_evaluate_rejects_negative() {
        let curve = KFactorCurve::STANDARD;
        assert!(matches!(
            curve.try_evaluate(-0.5),
            Err(KFactorError::InvalidRatio(_))
        ));
        assert!(curve.try_evaluate(f64::NAN).is_err());
        assert!(curve.try_evaluate(f64::INFINITY).is_err());
        assert!(curve.evaluate(-0.5).is_nan());
    }

    #[test]
    fn test_sample_curve_bounds_and_order() {
        let pts = sample_curve(&KFactorCurve::STANDARD, 0.0, 25.0, 101);
        assert_eq!(pts.len(), 101);
        assert!((pts.first().unwrap().0 - 0.0).abs() < 1e-12);
        assert!((pts.last().unwrap().0 - 25.0).abs() < 1e-12);
        for w in pts.windows(2) {
            assert!(w[1].0 > w[0].0);
            assert!(w[1].1 >= w[0].1);
        }
    }

    #[test]
    fn test_sample_curve_degenerate_steps() {
        assert!(sample_curve(&KFactorCurve::STANDARD, 0.0, 1.0, 0).is_empty());
        let one = sample_curve(&KFactorCurve::STANDARD, 2.0, 5.0, 1);
        assert_eq!(one.len(), 1);
        assert!((one[0].0 - 2.0).abs() < 1e-12);
    }
}
