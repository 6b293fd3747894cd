//! Numeric label formatting
//!
//! Axis and legend labels for a set of tick values are formatted together:
//! all labels in one call share a precision, chosen as the smallest one that
//! still represents every value. This keeps `0.5, 1.0, 1.5` from rendering as
//! `0.5, 1, 1.5`.

use serde::{Deserialize, Serialize};

/// Relative tolerance used when deciding whether a precision is sufficient
const PRECISION_TOLERANCE: f64 = 1e-9;

/// Maximum number of fractional digits ever emitted
const MAX_PRECISION: usize = 12;

/// Display-formatting mode passed to label renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Plain notation unless the magnitudes call for scientific
    #[default]
    Auto,
    /// Always plain decimal notation
    Plain,
    /// Mantissa and power of ten, e.g. `1.5e3`
    Scientific,
    /// Like scientific, with exponents restricted to multiples of three
    Engineering,
}

impl NumberFormat {
    /// Parse a format name. Returns None if the name is not recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::Auto),
            "plain" => Some(Self::Plain),
            "scientific" => Some(Self::Scientific),
            "engineering" => Some(Self::Engineering),
            _ => None,
        }
    }

    /// Resolve `Auto` to a concrete mode for the given values
    fn resolve(self, values: &[f64]) -> Self {
        if self != Self::Auto {
            return self;
        }
        let finite = values.iter().copied().filter(|v| v.is_finite() && *v != 0.0);
        let (min_abs, max_abs) = finite.fold((f64::INFINITY, 0.0f64), |(lo, hi), v| {
            (lo.min(v.abs()), hi.max(v.abs()))
        });
        if max_abs >= 1e5 || (min_abs.is_finite() && min_abs < 1e-4) {
            Self::Scientific
        } else {
            Self::Plain
        }
    }
}

/// Format a group of numbers with a shared precision.
pub fn format_numbers(values: &[f64], format: NumberFormat) -> Vec<String> {
    match format.resolve(values) {
        NumberFormat::Scientific => format_exponential(values, 1),
        NumberFormat::Engineering => format_exponential(values, 3),
        _ => format_plain(values),
    }
}

/// Format a single number (precision chosen for this value alone)
pub fn format_number(value: f64, format: NumberFormat) -> String {
    format_numbers(&[value], format).pop().unwrap_or_default()
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Inf".to_string()
    } else {
        "-Inf".to_string()
    }
}

/// Smallest precision at which every value rounds to itself
fn shared_precision(values: impl Iterator<Item = f64> + Clone) -> usize {
    let scale = values.clone().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return 0;
    }
    let tolerance = scale * PRECISION_TOLERANCE;
    (0..=MAX_PRECISION)
        .find(|&precision| {
            let factor = 10f64.powi(precision as i32);
            values
                .clone()
                .all(|v| ((v * factor).round() / factor - v).abs() <= tolerance)
        })
        .unwrap_or(MAX_PRECISION)
}

fn format_plain(values: &[f64]) -> Vec<String> {
    let precision = shared_precision(values.iter().copied().filter(|v| v.is_finite()));
    values
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                return format_non_finite(v);
            }
            // Avoid rendering negative zero as "-0"
            let v = if v == 0.0 { 0.0 } else { v };
            let s = format!("{:.*}", precision, v);
            if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
                s[1..].to_string()
            } else {
                s
            }
        })
        .collect()
}

/// Split into mantissa and exponent, with the exponent a multiple of `step`
fn split_exponent(value: f64, step: i32) -> (f64, i32) {
    if value == 0.0 {
        return (0.0, 0);
    }
    let exponent = value.abs().log10().floor() as i32;
    let exponent = exponent.div_euclid(step) * step;
    (value / 10f64.powi(exponent), exponent)
}

fn format_exponential(values: &[f64], step: i32) -> Vec<String> {
    let parts: Vec<Option<(f64, i32)>> = values
        .iter()
        .map(|&v| v.is_finite().then(|| split_exponent(v, step)))
        .collect();
    let precision = shared_precision(parts.iter().flatten().map(|(m, _)| *m));

    values
        .iter()
        .zip(&parts)
        .map(|(&v, part)| match part {
            Some((mantissa, exponent)) => format!("{:.*}e{}", precision, mantissa, exponent),
            None => format_non_finite(v),
        })
        .collect()
}
