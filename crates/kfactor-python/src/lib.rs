// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Python Bindings
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PyO3 Python bindings for the K-factor calculator.
//!
//! The Python presentation layer supplies raw numbers; validation and all
//! bend arithmetic happen here.

use ndarray::Array1;
use numpy::{IntoPyArray, PyArray1};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use kfactor_core::analysis::RowKind;
use kfactor_core::bend;
use kfactor_core::calculator::BendCalculator;
use kfactor_core::curve::KFactorCurve;
use kfactor_core::materials::MATERIALS;
use kfactor_core::reference::{closest_reference_entry as closest_entry, REFERENCE_TABLE};
use kfactor_core::report;
use kfactor_types::config::CalculatorConfig;
use kfactor_types::constants::SINGULARITY_EPSILON_DEG;
use kfactor_types::error::KFactorError;
use kfactor_types::input::{BendCount, BendInput, LengthUnit};

fn to_py_err(err: KFactorError) -> PyErr {
    match err {
        KFactorError::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn build_input(
    r: f64,
    s: f64,
    angle_deg: Option<f64>,
    num_bends: Option<i64>,
) -> PyResult<BendInput> {
    let mut input = BendInput::new(r, s);
    if let Some(angle) = angle_deg {
        input = input.with_angle(angle);
    }
    if let Some(n) = num_bends {
        input = input.with_bends(BendCount::try_from(n).map_err(to_py_err)?);
    }
    Ok(input)
}

// ─── Calculator ───

/// Python-accessible bend calculator.
#[pyclass]
struct PyBendCalculator {
    inner: BendCalculator,
}

#[pymethods]
impl PyBendCalculator {
    /// Optional JSON config path and unit label ("mm", "in", "inches").
    /// An explicit unit overrides the one in the config file.
    #[new]
    #[pyo3(signature = (config_path=None, unit=None))]
    fn new(config_path: Option<&str>, unit: Option<&str>) -> PyResult<Self> {
        let mut config = match config_path {
            Some(path) => CalculatorConfig::from_file(path).map_err(to_py_err)?,
            None => CalculatorConfig::default(),
        };
        if let Some(label) = unit {
            config.unit = label.parse::<LengthUnit>().map_err(to_py_err)?;
        }
        let inner = BendCalculator::new(config).map_err(to_py_err)?;
        Ok(PyBendCalculator { inner })
    }

    /// Evaluate one bend. Raises ValueError on invalid geometry.
    #[pyo3(signature = (r, s, angle_deg=None, num_bends=None))]
    fn calculate(
        &self,
        r: f64,
        s: f64,
        angle_deg: Option<f64>,
        num_bends: Option<i64>,
    ) -> PyResult<PyBendResult> {
        let input = build_input(r, s, angle_deg, num_bends)?;
        let result = self.inner.calculate(&input).map_err(to_py_err)?;
        let comparison = self.inner.compare(&result);
        Ok(PyBendResult {
            ratio: result.ratio,
            k_factor: result.k_factor,
            bend_allowance: result.bend_allowance,
            bend_deduction: result.bend_deduction,
            total_allowance: result.total_allowance,
            closest_ratio: comparison.entry.ratio,
            closest_k: comparison.entry.k,
            reference_difference: comparison.difference,
        })
    }

    #[pyo3(signature = (r, s, angle_deg=None, num_bends=None))]
    fn text_report(
        &self,
        r: f64,
        s: f64,
        angle_deg: Option<f64>,
        num_bends: Option<i64>,
    ) -> PyResult<String> {
        let input = build_input(r, s, angle_deg, num_bends)?;
        let result = self.inner.calculate(&input).map_err(to_py_err)?;
        Ok(self.inner.text_report(&input, &result))
    }

    #[pyo3(signature = (r, s, angle_deg=None, num_bends=None))]
    fn csv_report(
        &self,
        r: f64,
        s: f64,
        angle_deg: Option<f64>,
        num_bends: Option<i64>,
    ) -> PyResult<String> {
        let input = build_input(r, s, angle_deg, num_bends)?;
        let result = self.inner.calculate(&input).map_err(to_py_err)?;
        self.inner.csv_report(&input, &result).map_err(to_py_err)
    }

    /// Analysis rows as (ratio, k, diff_from_0.5, label).
    #[pyo3(signature = (r=None, s=None))]
    fn analysis_table(
        &self,
        r: Option<f64>,
        s: Option<f64>,
    ) -> PyResult<Vec<(f64, f64, f64, String)>> {
        let result = match (r, s) {
            (Some(r), Some(s)) => Some(
                self.inner
                    .calculate(&BendInput::new(r, s))
                    .map_err(to_py_err)?,
            ),
            _ => None,
        };
        Ok(self
            .inner
            .analysis(result.as_ref())
            .into_iter()
            .map(|row| {
                let label = match row.kind {
                    RowKind::Sample(b) => b.label().to_string(),
                    RowKind::UserInput => "Your Input".to_string(),
                };
                (row.ratio, row.k_factor, row.diff_from_centre, label)
            })
            .collect())
    }

    /// Configured starting input as (r, s, angle_deg).
    #[getter]
    fn defaults(&self) -> (f64, f64, Option<f64>) {
        let input = self.inner.default_input();
        (input.radius, input.thickness, input.angle_deg)
    }

    /// Display unit label ("mm" or "inches").
    #[getter]
    fn unit(&self) -> &'static str {
        self.inner.unit().label()
    }

    /// Number of memoized K-factor entries.
    fn cache_len(&self) -> usize {
        self.inner.cache().len()
    }
}

// ─── Result types ───

#[pyclass]
#[derive(Clone)]
struct PyBendResult {
    #[pyo3(get)]
    ratio: f64,
    #[pyo3(get)]
    k_factor: f64,
    #[pyo3(get)]
    bend_allowance: Option<f64>,
    #[pyo3(get)]
    bend_deduction: Option<f64>,
    #[pyo3(get)]
    total_allowance: Option<f64>,
    #[pyo3(get)]
    closest_ratio: f64,
    #[pyo3(get)]
    closest_k: f64,
    #[pyo3(get)]
    reference_difference: f64,
}

#[pymethods]
impl PyBendResult {
    fn __repr__(&self) -> String {
        format!(
            "BendResult(r/s={:.3}, K={:.4}, BA={:?}, BD={:?})",
            self.ratio, self.k_factor, self.bend_allowance, self.bend_deduction
        )
    }
}

// ─── Formulas ───

/// K-factor for r/s. Raises ValueError for negative or non-finite ratios.
#[pyfunction]
fn compute_k_factor(ratio: f64) -> PyResult<f64> {
    KFactorCurve::STANDARD.try_evaluate(ratio).map_err(to_py_err)
}

#[pyfunction]
fn bend_allowance(k_factor: f64, angle_deg: f64, r: f64, s: f64) -> f64 {
    bend::bend_allowance(k_factor, angle_deg, r, s)
}

/// Raises ValueError within the singularity epsilon of 180°.
#[pyfunction]
fn bend_deduction(bend_allowance: f64, r: f64, s: f64, angle_deg: f64) -> PyResult<f64> {
    bend::try_bend_deduction(bend_allowance, r, s, angle_deg, SINGULARITY_EPSILON_DEG)
        .map_err(to_py_err)
}

#[pyfunction]
fn total_allowance(bend_allowance: f64, num_bends: i64) -> PyResult<f64> {
    let count = BendCount::try_from(num_bends).map_err(to_py_err)?;
    Ok(bend::total_allowance(bend_allowance, count))
}

/// Curve samples as two numpy arrays (ratios, k).
#[pyfunction]
fn sample_curve<'py>(
    py: Python<'py>,
    min: f64,
    max: f64,
    steps: usize,
) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
    let (ratios, ks): (Vec<f64>, Vec<f64>) =
        kfactor_core::curve::sample_curve(&KFactorCurve::STANDARD, min, max, steps)
            .into_iter()
            .unzip();
    (
        Array1::from_vec(ratios).into_pyarray(py),
        Array1::from_vec(ks).into_pyarray(py),
    )
}

// ─── Reference data ───

#[pyfunction]
fn reference_table() -> Vec<(f64, f64)> {
    REFERENCE_TABLE.iter().map(|e| (e.ratio, e.k)).collect()
}

#[pyfunction]
fn closest_reference_entry(ratio: f64) -> Option<(f64, f64)> {
    closest_entry(ratio, &REFERENCE_TABLE).map(|e| (e.ratio, e.k))
}

/// (name, description, typical K) for each material.
#[pyfunction]
fn materials() -> Vec<(&'static str, &'static str, f64)> {
    MATERIALS
        .iter()
        .map(|m| (m.name, m.description, m.typical_k))
        .collect()
}

#[pyfunction]
fn report_file_name(r: f64, s: f64) -> String {
    report::report_file_name(r, s)
}

// ─── Module registration ───

/// Sheet-metal K-factor calculator, Rust core.
#[pymodule]
fn kfactor_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBendCalculator>()?;
    m.add_class::<PyBendResult>()?;
    m.add_function(wrap_pyfunction!(compute_k_factor, m)?)?;
    m.add_function(wrap_pyfunction!(bend_allowance, m)?)?;
    m.add_function(wrap_pyfunction!(bend_deduction, m)?)?;
    m.add_function(wrap_pyfunction!(total_allowance, m)?)?;
    m.add_function(wrap_pyfunction!(sample_curve, m)?)?;
    m.add_function(wrap_pyfunction!(reference_table, m)?)?;
    m.add_function(wrap_pyfunction!(closest_reference_entry, m)?)?;
    m.add_function(wrap_pyfunction!(materials, m)?)?;
    m.add_function(wrap_pyfunction!(report_file_name, m)?)?;
    Ok(())
}

