//! Sqrt transform implementation (square root)

use super::{TransformKind, TransformTrait};
use crate::format::{format_numbers, NumberFormat};

/// Sqrt transform - square root
///
/// Domain: [0, +∞) - non-negative values (includes 0)
#[derive(Debug, Clone, Copy)]
pub struct Sqrt;

impl TransformTrait for Sqrt {
    fn transform_kind(&self) -> TransformKind {
        TransformKind::Sqrt
    }

    fn name(&self) -> &'static str {
        "sqrt"
    }

    fn transform(&self, value: f64) -> f64 {
        value.sqrt()
    }

    fn inverse(&self, value: f64) -> f64 {
        value * value
    }

    fn label(&self, values: &[f64], format: NumberFormat) -> Vec<String> {
        format_numbers(values, format)
            .into_iter()
            .map(|root| format!("{}²", root))
            .collect()
    }
}

impl std::fmt::Display for Sqrt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_transform() {
        let t = Sqrt;
        assert_eq!(t.transform(0.0), 0.0);
        assert_eq!(t.transform(4.0), 2.0);
        assert_eq!(t.transform(9.0), 3.0);
        assert_eq!(t.inverse(3.0), 9.0);
    }

    #[test]
    fn test_sqrt_negative_is_nan() {
        assert!(Sqrt.transform(-1.0).is_nan());
    }

    #[test]
    fn test_sqrt_roundtrip() {
        let t = Sqrt;
        for &val in &[0.0, 1.0, 4.0, 100.0, 0.25] {
            let back = t.inverse(t.transform(val));
            assert!((back - val).abs() < 1e-10, "Roundtrip failed for {}", val);
        }
    }

    #[test]
    fn test_sqrt_labels() {
        assert_eq!(Sqrt.label(&[1.0, 2.0], NumberFormat::Auto), vec!["1²", "2²"]);
    }
}
