// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — K-Factor Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sheet-metal bending model.
//!
//! - `curve`: logistic K-factor response over r/s
//! - `bend`: bend allowance, setback, bend deduction
//! - `cache`: bounded read-through memo for the curve
//! - `reference`, `materials`: static comparison data
//! - `analysis`: sample table and trend bands
//! - `report`: text and CSV export of a result
//! - `calculator`: validated end-to-end evaluation

pub mod analysis;
pub mod bend;
pub mod cache;
pub mod calculator;
pub mod curve;
pub mod materials;
pub mod reference;
pub mod report;
