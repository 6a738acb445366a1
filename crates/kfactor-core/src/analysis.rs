// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — K-Factor Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sampled K-factor table with material-behaviour labels and trend bands.

use serde::{Deserialize, Serialize};

use kfactor_types::constants::NEUTRAL_AXIS_CENTRE;

use crate::curve::KFactorCurve;

/// Ratios shown in the analysis table.
pub const SAMPLE_RATIOS: [f64; 12] = [
    0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 7.5, 10.0, 15.0, 20.0, 25.0,
];

const SOFT_BELOW_K: f64 = 0.35;
const MEDIUM_BELOW_K: f64 = 0.45;

/// Coarse material response implied by a K-factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialBehavior {
    Soft,
    Medium,
    Hard,
}

impl MaterialBehavior {
    pub fn classify(k: f64) -> Self {
        if k < SOFT_BELOW_K {
            MaterialBehavior::Soft
        } else if k < MEDIUM_BELOW_K {
            MaterialBehavior::Medium
        } else {
            MaterialBehavior::Hard
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialBehavior::Soft => "Soft",
            MaterialBehavior::Medium => "Medium",
            MaterialBehavior::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Sample(MaterialBehavior),
    UserInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub ratio: f64,
    pub k_factor: f64,
    /// `0.5 - k`
    pub diff_from_centre: f64,
    pub kind: RowKind,
}

impl AnalysisRow {
    fn sample(ratio: f64, k: f64) -> Self {
        AnalysisRow {
            ratio,
            k_factor: k,
            diff_from_centre: NEUTRAL_AXIS_CENTRE - k,
            kind: RowKind::Sample(MaterialBehavior::classify(k)),
        }
    }

    fn user(ratio: f64, k: f64) -> Self {
        AnalysisRow {
            ratio,
            k_factor: k,
            diff_from_centre: NEUTRAL_AXIS_CENTRE - k,
            kind: RowKind::UserInput,
        }
    }
}

/// Curve values at [`SAMPLE_RATIOS`], with the user's `(ratio, k)` slotted in
/// before the first sample it does not exceed, or appended last.
pub fn analysis_table(curve: &KFactorCurve, user: Option<(f64, f64)>) -> Vec<AnalysisRow> {
    let mut rows = Vec::with_capacity(SAMPLE_RATIOS.len() + 1);
    let mut pending = user;

    for &ratio in &SAMPLE_RATIOS {
        if let Some((user_ratio, user_k)) = pending {
            if user_ratio <= ratio {
                rows.push(AnalysisRow::user(user_ratio, user_k));
                pending = None;
            }
        }
        rows.push(AnalysisRow::sample(ratio, curve.evaluate(ratio)));
    }

    if let Some((user_ratio, user_k)) = pending {
        rows.push(AnalysisRow::user(user_ratio, user_k));
    }
    rows
}

/// Qualitative r/s regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendBand {
    /// r/s < 1: sharp bends.
    Low,
    /// 1 <= r/s <= 5: gradual transition.
    Medium,
    /// r/s > 5: large-radius bends.
    High,
}

impl TrendBand {
    pub const ALL: [TrendBand; 3] = [TrendBand::Low, TrendBand::Medium, TrendBand::High];

    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < 1.0 {
            TrendBand::Low
        } else if ratio <= 5.0 {
            TrendBand::Medium
        } else {
            TrendBand::High
        }
    }

    pub fn ratio_label(self) -> &'static str {
        match self {
            TrendBand::Low => "Low r/s (< 1.0)",
            TrendBand::Medium => "Medium r/s (1.0-5.0)",
            TrendBand::High => "High r/s (> 5.0)",
        }
    }

    /// Typical K span, as shown to users.
    pub fn k_range(self) -> (f64, f64) {
        match self {
            TrendBand::Low => (0.33, 0.42),
            TrendBand::Medium => (0.42, 0.48),
            TrendBand::High => (0.48, 0.50),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TrendBand::Low => "Sharp bends",
            TrendBand::Medium => "Gradual transition",
            TrendBand::High => "Large radius bends",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(MaterialBehavior::classify(0.30), MaterialBehavior::Soft);
        assert_eq!(MaterialBehavior::classify(0.35), MaterialBehavior::Medium);
        assert_eq!(MaterialBehavior::classify(0.4499), MaterialBehavior::Medium);
        assert_eq!(MaterialBehavior::classify(0.45), MaterialBehavior::Hard);
    }

    #[test]
    fn test_table_without_user() {
        let rows = analysis_table(&KFactorCurve::STANDARD, None);
        assert_eq!(rows.len(), SAMPLE_RATIOS.len());
        // k(0.5) = 0.3786, k(2.0) = 0.4527
        assert_eq!(rows[0].kind, RowKind::Sample(MaterialBehavior::Medium));
        assert_eq!(rows[3].kind, RowKind::Sample(MaterialBehavior::Hard));
        assert!((rows[0].diff_from_centre - (0.5 - rows[0].k_factor)).abs() < 1e-15);
    }

    #[test]
    fn test_user_row_inserted_before_first_not_smaller_sample() {
        let rows = analysis_table(&KFactorCurve::STANDARD, Some((1.2, 0.43)));
        assert_eq!(rows.len(), SAMPLE_RATIOS.len() + 1);
        assert_eq!(rows[2].kind, RowKind::UserInput);
        assert!((rows[1].ratio - 1.0).abs() < 1e-12);
        assert!((rows[3].ratio - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_user_row_on_exact_sample_goes_first() {
        let rows = analysis_table(&KFactorCurve::STANDARD, Some((0.5, 0.3786)));
        assert_eq!(rows[0].kind, RowKind::UserInput);
        assert!(matches!(rows[1].kind, RowKind::Sample(_)));
    }

    #[test]
    fn test_user_row_beyond_samples_appended() {
        let rows = analysis_table(&KFactorCurve::STANDARD, Some((40.0, 0.499)));
        assert_eq!(rows.last().unwrap().kind, RowKind::UserInput);
        assert!((rows.last().unwrap().ratio - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_bands() {
        assert_eq!(TrendBand::for_ratio(0.3), TrendBand::Low);
        assert_eq!(TrendBand::for_ratio(1.0), TrendBand::Medium);
        assert_eq!(TrendBand::for_ratio(5.0), TrendBand::Medium);
        assert_eq!(TrendBand::for_ratio(5.1), TrendBand::High);
        for band in TrendBand::ALL {
            let (lo, hi) = band.k_range();
            assert!(lo < hi);
        }
    }
}
