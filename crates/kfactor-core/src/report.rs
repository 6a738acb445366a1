// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Reports
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plain-text and CSV renderings of a calculation.
//!
//! Lengths are printed with 3 decimals, K with 4, the angle with 1.

use std::io::Write;

use kfactor_types::error::KFactorResult;
use kfactor_types::input::{BendInput, BendResult, LengthUnit};

const REPORT_TITLE: &str = "K-Factor Calculation Report";
const REPORT_RULE: &str = "=====================================";

/// One `Parameter,Value` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub parameter: String,
    pub value: String,
}

impl ReportLine {
    fn new(parameter: impl Into<String>, value: impl Into<String>) -> Self {
        ReportLine {
            parameter: parameter.into(),
            value: value.into(),
        }
    }
}

/// Ordered report lines; bend lines only when an angle was evaluated.
pub fn report_lines(input: &BendInput, result: &BendResult, unit: LengthUnit) -> Vec<ReportLine> {
    let u = unit.label();
    let mut lines = vec![
        ReportLine::new("Inner Radius (r)", format!("{:.3} {u}", input.radius)),
        ReportLine::new("Sheet Thickness (s)", format!("{:.3} {u}", input.thickness)),
        ReportLine::new("r/s Ratio", format!("{:.3}", result.ratio)),
        ReportLine::new("K-Factor", format!("{:.4}", result.k_factor)),
    ];

    if let (Some(angle), Some(ba)) = (input.angle_deg, result.bend_allowance) {
        lines.push(ReportLine::new("Bend Angle", format!("{angle:.1}°")));
        lines.push(ReportLine::new("Bend Allowance", format!("{ba:.3} {u}")));
        let bd = match result.bend_deduction {
            Some(bd) => format!("{bd:.3} {u}"),
            None => "undefined at 180°".to_string(),
        };
        lines.push(ReportLine::new("Bend Deduction", bd));
        if let (Some(n), Some(total)) = (input.bends, result.total_allowance) {
            lines.push(ReportLine::new(
                format!("Total Bend Allowance ({} bends)", n.get()),
                format!("{total:.3} {u}"),
            ));
        }
    }
    lines
}

/// Downloadable text report.
pub fn text_report(input: &BendInput, result: &BendResult, unit: LengthUnit) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(REPORT_RULE);
    for line in report_lines(input, result, unit) {
        out.push('\n');
        out.push_str(&line.parameter);
        out.push_str(": ");
        out.push_str(&line.value);
    }
    out
}

/// Write `Parameter,Value` CSV to any writer.
pub fn write_csv<W: Write>(
    writer: &mut W,
    input: &BendInput,
    result: &BendResult,
    unit: LengthUnit,
) -> KFactorResult<()> {
    writeln!(writer, "Parameter,Value")?;
    for line in report_lines(input, result, unit) {
        writeln!(
            writer,
            "{},{}",
            escape_csv(&line.parameter),
            escape_csv(&line.value)
        )?;
    }
    Ok(())
}

pub fn csv_report(input: &BendInput, result: &BendResult, unit: LengthUnit) -> KFactorResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, input, result, unit)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `k_factor_calculation_{r}x{s}.txt`, whole numbers keep one decimal.
///
/// Numbers are always written positionally: `1e16` renders as
/// `10000000000000000.0` and `1e-5` as `0.00001`, never in exponent form.
pub fn report_file_name(radius: f64, thickness: f64) -> String {
    format!(
        "k_factor_calculation_{}x{}.txt",
        plain_number(radius),
        plain_number(thickness)
    )
}

fn plain_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kfactor_types::input::BendCount;

    fn plain() -> (BendInput, BendResult) {
        let input = BendInput::new(1.0, 1.0);
        let result = BendResult {
            ratio: 1.0,
            k_factor: 0.4189947874927432,
            bend_allowance: None,
            bend_deduction: None,
            total_allowance: None,
        };
        (input, result)
    }

    #[test]
    fn test_text_report_basic() {
        let (input, result) = plain();
        let text = text_report(&input, &result, LengthUnit::Millimetres);
        let expected = "K-Factor Calculation Report\n\
                        =====================================\n\
                        Inner Radius (r): 1.000 mm\n\
                        Sheet Thickness (s): 1.000 mm\n\
                        r/s Ratio: 1.000\n\
                        K-Factor: 0.4190";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_report_with_bend() {
        let input = BendInput::new(1.0, 1.0)
            .with_angle(90.0)
            .with_bends(BendCount::try_from(2).unwrap());
        let result = BendResult {
            ratio: 1.0,
            k_factor: 0.419,
            bend_allowance: Some(2.229),
            bend_deduction: Some(1.771),
            total_allowance: Some(4.458),
        };
        let text = text_report(&input, &result, LengthUnit::Inches);
        assert!(text.contains("Bend Angle: 90.0°"));
        assert!(text.contains("Bend Allowance: 2.229 inches"));
        assert!(text.contains("Bend Deduction: 1.771 inches"));
        assert!(text.contains("Total Bend Allowance (2 bends): 4.458 inches"));
    }

    #[test]
    fn test_missing_deduction_is_labelled() {
        let input = BendInput::new(1.0, 1.0).with_angle(180.0);
        let result = BendResult {
            ratio: 1.0,
            k_factor: 0.419,
            bend_allowance: Some(4.458),
            bend_deduction: None,
            total_allowance: None,
        };
        let text = text_report(&input, &result, LengthUnit::Millimetres);
        assert!(text.contains("Bend Deduction: undefined at 180°"));
    }

    #[test]
    fn test_csv_header_and_rows() {
        let (input, result) = plain();
        let csv = csv_report(&input, &result, LengthUnit::Millimetres).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Parameter,Value");
        assert_eq!(lines[1], "Inner Radius (r),1.000 mm");
        assert_eq!(lines[4], "K-Factor,0.4190");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name(1.0, 1.0), "k_factor_calculation_1.0x1.0.txt");
        assert_eq!(report_file_name(2.5, 0.8), "k_factor_calculation_2.5x0.8.txt");
        assert_eq!(
            report_file_name(1.0e16, 1.0e-5),
            "k_factor_calculation_10000000000000000.0x0.00001.txt"
        );
    }
}
