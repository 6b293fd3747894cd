//! Date transform implementation
//!
//! Works on the numeric representation of dates (days since Unix epoch).
//! The transform itself is identity; labels render as ISO dates.

use super::{TransformKind, TransformTrait};
use crate::format::NumberFormat;
use crate::plot::types::date_to_iso_string;

/// Date transform - for date data (days since epoch)
#[derive(Debug, Clone, Copy)]
pub struct Date;

impl TransformTrait for Date {
    fn transform_kind(&self) -> TransformKind {
        TransformKind::Date
    }

    fn name(&self) -> &'static str {
        "date"
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
                    date_to_iso_string(v.round() as i32)
                } else {
                    String::new()
                }
            })
            .collect()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_identity() {
        assert_eq!(Date.transform(19737.0), 19737.0);
        assert_eq!(Date.inverse(-4.0), -4.0);
    }

    #[test]
    fn test_date_labels() {
        let labels = Date.label(&[0.0, 19737.0, f64::NAN], NumberFormat::Auto);
        assert_eq!(labels, vec!["1970-01-01", "2024-01-15", ""]);
    }
}
