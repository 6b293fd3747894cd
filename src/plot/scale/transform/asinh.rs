//! Asinh transform implementation (inverse hyperbolic sine)

use super::{TransformKind, TransformTrait};
use crate::format::{format_numbers, NumberFormat};

/// Asinh transform - inverse hyperbolic sine
///
/// Domain: (-∞, +∞) - all real numbers
///
/// The asinh transform is useful for data that spans multiple orders of
/// magnitude and includes zero or negative values. It behaves like log
/// for large values but is well-defined for zero and negative values.
#[derive(Debug, Clone, Copy)]
pub struct Asinh;

impl TransformTrait for Asinh {
    fn transform_kind(&self) -> TransformKind {
        TransformKind::Asinh
    }

    fn name(&self) -> &'static str {
        "asinh"
    }

    fn transform(&self, value: f64) -> f64 {
        value.asinh()
    }

    fn inverse(&self, value: f64) -> f64 {
        value.sinh()
    }

    fn label(&self, values: &[f64], format: NumberFormat) -> Vec<String> {
        format_numbers(values, format)
            .into_iter()
            .map(|v| format!("sinh({})", v))
            .collect()
    }
}

impl std::fmt::Display for Asinh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asinh_transform() {
        let t = Asinh;
        assert!((t.transform(0.0) - 0.0).abs() < 1e-10);
        // asinh is odd function
        assert!((t.transform(-1.0) + t.transform(1.0)).abs() < 1e-10);
        // For large values, asinh(x) ≈ ln(2x)
        let large: f64 = 1000.0;
        assert!((t.transform(large) - (2.0 * large).ln()).abs() < 0.01);
    }

    #[test]
    fn test_asinh_roundtrip() {
        let t = Asinh;
        for &val in &[-100.0, -10.0, -1.0, 0.0, 1.0, 10.0, 100.0] {
            let back = t.inverse(t.transform(val));
            assert!(
                (back - val).abs() <= 1e-10 * val.abs().max(1.0),
                "Roundtrip failed for {}",
                val
            );
        }
    }

    #[test]
    fn test_asinh_labels() {
        assert_eq!(
            Asinh.label(&[-1.0, 0.0, 2.0], NumberFormat::Auto),
            vec!["sinh(-1)", "sinh(0)", "sinh(2)"]
        );
    }
}
