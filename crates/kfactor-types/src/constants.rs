// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Logistic K-factor curve, lower asymptote (K at r/s = 0).
pub const KF_A: f64 = 0.277833218;

/// Logistic K-factor curve, slope exponent.
pub const KF_B: f64 = 1.056058295;

/// Logistic K-factor curve, inflection ratio r/s.
pub const KF_C: f64 = 0.608320238;

/// Logistic K-factor curve, upper asymptote (K as r/s → ∞).
pub const KF_D: f64 = 0.502506534;

/// Largest accepted bend angle [deg].
pub const MAX_BEND_ANGLE_DEG: f64 = 180.0;

/// Bend deduction is not evaluated when `180 - angle` falls below this [deg].
/// At 180° `tan(θ/2)` is ~1.6e16 in f64; at 179.999° it is already ~1.1e5.
pub const SINGULARITY_EPSILON_DEG: f64 = 1e-3;

/// Default upper bound on memoized K-factor entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Neutral axis exactly at mid-thickness.
pub const NEUTRAL_AXIS_CENTRE: f64 = 0.5;
