//! DateTime transform implementation
//!
//! Works on microseconds since Unix epoch; labels render as ISO datetimes.

use super::{TransformKind, TransformTrait};
use crate::format::NumberFormat;
use crate::plot::types::datetime_to_iso_string;

/// DateTime transform - for datetime data (microseconds since epoch)
#[derive(Debug, Clone, Copy)]
pub struct DateTime;

impl TransformTrait for DateTime {
    fn transform_kind(&self) -> TransformKind {
        TransformKind::DateTime
    }

    fn name(&self) -> &'static str {
        "datetime"
    }

    fn transform(&self, value: f64) -> f64 {
        value
    }

    fn inverse(&self, value: f64) -> f64 {
        value
    }

    fn label(&self, values: &[f64], _format: NumberFormat) -> Vec<String> {
        values
            .iter()
            .map(|v| {
                if v.is_finite() {
                    datetime_to_iso_string(v.round() as i64)
                } else {
                    String::new()
                }
            })
            .collect()
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_labels() {
        // 2024-01-15T10:30:00 UTC
        let micros = 1_705_314_600_000_000.0;
        let labels = DateTime.label(&[0.0, micros], NumberFormat::Auto);
        assert_eq!(labels, vec!["1970-01-01T00:00:00", "2024-01-15T10:30:00"]);
    }
}
