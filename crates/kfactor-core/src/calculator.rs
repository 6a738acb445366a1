// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Bend Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validated end-to-end evaluation of a [`BendInput`].
//!
//! A result is produced in full from validated inputs or not at all.
//! The one exception is the deduction near 180°: the tangent pole makes it
//! meaningless, so it is reported as `None` instead of failing the bend.

use tracing::{debug, warn};

use kfactor_types::config::CalculatorConfig;
use kfactor_types::error::{KFactorError, KFactorResult};
use kfactor_types::input::{BendInput, BendResult, LengthUnit};

use crate::analysis::{analysis_table, AnalysisRow};
use crate::bend::{bend_allowance, near_singularity, total_allowance, try_bend_deduction};
use crate::cache::KFactorCache;
use crate::curve::KFactorCurve;
use crate::reference::{compare_with_reference, ReferenceComparison};
use crate::report::{csv_report, text_report};

#[derive(Debug)]
pub struct BendCalculator {
    config: CalculatorConfig,
    cache: KFactorCache,
}

impl BendCalculator {
    pub fn new(config: CalculatorConfig) -> KFactorResult<Self> {
        config.validate()?;
        let cache = KFactorCache::new(KFactorCurve::STANDARD, config.cache_capacity);
        Ok(BendCalculator { config, cache })
    }

    pub fn from_file(path: &str) -> KFactorResult<Self> {
        Self::new(CalculatorConfig::from_file(path)?)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn unit(&self) -> LengthUnit {
        self.config.unit
    }

    pub fn cache(&self) -> &KFactorCache {
        &self.cache
    }

    /// Starting input from the configured defaults, angle included.
    pub fn default_input(&self) -> BendInput {
        let d = &self.config.defaults;
        BendInput::new(d.radius, d.thickness).with_angle(d.angle_deg)
    }

    /// Memoized K-factor. `ratio` must be non-negative.
    pub fn k_factor(&self, ratio: f64) -> f64 {
        self.cache.get_or_compute(ratio)
    }

    pub fn calculate(&self, input: &BendInput) -> KFactorResult<BendResult> {
        let ratio = input.ratio()?;
        let k_factor = self.k_factor(ratio);
        let (r, s) = (input.radius, input.thickness);

        let mut result = BendResult {
            ratio,
            k_factor,
            bend_allowance: None,
            bend_deduction: None,
            total_allowance: None,
        };

        if let Some(angle) = input.angle_deg {
            let ba = finite(bend_allowance(k_factor, angle, r, s), "bend allowance")?;
            let eps = self.config.singularity_epsilon_deg;
            result.bend_allowance = Some(ba);
            result.bend_deduction = if near_singularity(angle, eps) {
                warn!(angle, eps, "bend deduction skipped at tangent singularity");
                None
            } else {
                Some(try_bend_deduction(ba, r, s, angle, eps)?)
            };
            result.total_allowance = match input.bends {
                Some(n) => Some(finite(total_allowance(ba, n), "total allowance")?),
                None => None,
            };
        }

        debug!(
            r,
            s,
            ratio,
            k_factor,
            bend_allowance = ?result.bend_allowance,
            bend_deduction = ?result.bend_deduction,
            "bend evaluated"
        );
        Ok(result)
    }

    /// Nearest reference-table entry for a computed result.
    pub fn compare(&self, result: &BendResult) -> ReferenceComparison {
        compare_with_reference(result.ratio, result.k_factor)
    }

    /// Analysis table with the result's row inserted.
    pub fn analysis(&self, result: Option<&BendResult>) -> Vec<AnalysisRow> {
        analysis_table(self.cache.curve(), result.map(|r| (r.ratio, r.k_factor)))
    }

    pub fn text_report(&self, input: &BendInput, result: &BendResult) -> String {
        text_report(input, result, self.config.unit)
    }

    pub fn csv_report(&self, input: &BendInput, result: &BendResult) -> KFactorResult<String> {
        csv_report(input, result, self.config.unit)
    }
}

fn finite(value: f64, what: &str) -> KFactorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KFactorError::Overflow(format!("{what} is not finite")))
    }
}

impl Default for BendCalculator {
    fn default() -> Self {
        let config = CalculatorConfig::default();
        let cache = KFactorCache::new(KFactorCurve::STANDARD, config.cache_capacity);
        BendCalculator { config, cache }
    }
}
