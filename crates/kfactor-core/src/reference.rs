// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Reference Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tabulated shop-floor K-factors, used for comparison only.

use serde::{Deserialize, Serialize};

/// One `(r/s, k)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub ratio: f64,
    pub k: f64,
}

const fn entry(ratio: f64, k: f64) -> ReferenceEntry {
    ReferenceEntry { ratio, k }
}

/// Reference K-factors, increasing in both columns.
pub const REFERENCE_TABLE: [ReferenceEntry; 15] = [
    entry(0.2, 0.33),
    entry(0.4, 0.37),
    entry(0.6, 0.385),
    entry(0.8, 0.405),
    entry(1.0, 0.42),
    entry(1.5, 0.44),
    entry(2.0, 0.455),
    entry(2.5, 0.46),
    entry(3.0, 0.47),
    entry(4.0, 0.475),
    entry(5.0, 0.48),
    entry(7.0, 0.485),
    entry(10.0, 0.49),
    entry(15.0, 0.495),
    entry(25.0, 0.5),
];

/// Entry whose ratio is nearest `ratio`.
///
/// Linear scan. On equal distance the earlier (lower) entry wins.
/// Returns `None` only for an empty table.
pub fn closest_reference_entry(ratio: f64, table: &[ReferenceEntry]) -> Option<ReferenceEntry> {
    let (first, rest) = table.split_first()?;
    let mut best = *first;
    let mut best_diff = (first.ratio - ratio).abs();
    for e in rest {
        let diff = (e.ratio - ratio).abs();
        if diff < best_diff {
            best = *e;
            best_diff = diff;
        }
    }
    Some(best)
}

/// Calculated K next to the nearest tabulated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceComparison {
    pub entry: ReferenceEntry,
    pub calculated_ratio: f64,
    pub calculated_k: f64,
    /// `|calculated_k - entry.k|`
    pub difference: f64,
}

/// Compare a calculated `(ratio, k)` against [`REFERENCE_TABLE`].
pub fn compare_with_reference(ratio: f64, k: f64) -> ReferenceComparison {
    // REFERENCE_TABLE is non-empty
    let entry = closest_reference_entry(ratio, &REFERENCE_TABLE).unwrap_or(REFERENCE_TABLE[0]);
    ReferenceComparison {
        entry,
        calculated_ratio: ratio,
        calculated_k: k,
        difference: (k - entry.k).abs(),
    }
}
