//! Log transforms for the three registered bases

use super::{TransformKind, TransformTrait};
use crate::format::{format_numbers, NumberFormat};

/// Log transform - logarithm in base 10, 2 or e
///
/// Domain: (0, +∞) - positive values only
///
/// Only the named constructors exist, so every instance has its own
/// `TransformKind`:
/// - Base 10 → `TransformKind::Log10`
/// - Base 2 → `TransformKind::Log2`
/// - Base e → `TransformKind::Ln`
#[derive(Debug, Clone, Copy)]
pub struct Log {
    base: f64,
}

impl Log {
    /// Create a base-10 logarithm transform
    pub fn base10() -> Self {
        Self { base: 10.0 }
    }

    /// Create a base-2 logarithm transform
    pub fn base2() -> Self {
        Self { base: 2.0 }
    }

    /// Create a natural logarithm transform (base e)
    pub fn natural() -> Self {
        Self {
            base: std::f64::consts::E,
        }
    }

    /// Get the base of this logarithm
    pub fn base(&self) -> f64 {
        self.base
    }

    fn is_base10(&self) -> bool {
        (self.base - 10.0).abs() < 1e-10
    }

    fn is_base2(&self) -> bool {
        (self.base - 2.0).abs() < 1e-10
    }

    /// How the base is written in labels
    fn base_label(&self) -> &'static str {
        if self.is_base10() {
            "10"
        } else if self.is_base2() {
            "2"
        } else {
            "e"
        }
    }
}

impl TransformTrait for Log {
    fn transform_kind(&self) -> TransformKind {
        if self.is_base10() {
            TransformKind::Log10
        } else if self.is_base2() {
            TransformKind::Log2
        } else {
            TransformKind::Ln
        }
    }

    fn name(&self) -> &'static str {
        self.transform_kind().name()
    }

    fn transform(&self, value: f64) -> f64 {
        if self.is_base10() {
            value.log10()
        } else if self.is_base2() {
            value.log2()
        } else {
            value.log(self.base)
        }
    }

    fn inverse(&self, value: f64) -> f64 {
        self.base.powf(value)
    }

    fn label(&self, values: &[f64], format: NumberFormat) -> Vec<String> {
        let base = self.base_label();
        format_numbers(values, format)
            .into_iter()
            .map(|exponent| format!("{}^{}", base, exponent))
            .collect()
    }
}

impl std::fmt::Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::scale::transform::Transform;
    use std::f64::consts::E;

    #[test]
    fn test_log10_transform() {
        let t = Log::base10();
        assert!((t.transform(1.0) - 0.0).abs() < 1e-10);
        assert!((t.transform(10.0) - 1.0).abs() < 1e-10);
        assert!((t.transform(100.0) - 2.0).abs() < 1e-10);
        assert!((t.transform(1000.0) - 3.0).abs() < 1e-10);
        assert!((t.transform(0.1) - (-1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_log10_inverse() {
        let t = Log::base10();
        assert!((t.inverse(0.0) - 1.0).abs() < 1e-10);
        assert!((t.inverse(2.0) - 100.0).abs() < 1e-10);
        assert!((t.inverse(-1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_log10_roundtrip() {
        let t = Log::base10();
        for &val in &[0.001, 0.1, 1.0, 10.0, 100.0, 1000.0] {
            let back = t.inverse(t.transform(val));
            assert!(
                (back - val).abs() / val < 1e-10,
                "Roundtrip failed for {}",
                val
            );
        }
    }

    #[test]
    fn test_log10_domain_violations_propagate() {
        let t = Log::base10();
        assert!(t.transform(-1.0).is_nan());
        assert_eq!(t.transform(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_log2_transform() {
        let t = Log::base2();
        assert_eq!(t.transform(8.0), 3.0);
        assert_eq!(t.transform(0.5), -1.0);
        assert!((t.inverse(3.0) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_log_natural_roundtrip() {
        let t = Log::natural();
        assert!((t.transform(E) - 1.0).abs() < 1e-10);
        for &val in &[0.001, 0.1, 1.0, E, 10.0, 100.0] {
            let back = t.inverse(t.transform(val));
            assert!((back - val).abs() / val < 1e-10, "Roundtrip failed for {}", val);
        }
    }

    #[test]
    fn test_kind_and_name() {
        assert_eq!(Log::base10().transform_kind(), TransformKind::Log10);
        assert_eq!(Log::base2().name(), "log2");
        assert_eq!(Log::natural().name(), "ln");
        assert_eq!(Log::natural().transform_kind(), TransformKind::Ln);
    }

    #[test]
    fn test_labels() {
        let labels = Log::base10().label(&[0.0, 1.0, 2.0], NumberFormat::Auto);
        assert_eq!(labels, vec!["10^0", "10^1", "10^2"]);

        let labels = Log::base2().label(&[0.5, 1.0], NumberFormat::Auto);
        assert_eq!(labels, vec!["2^0.5", "2^1.0"]);

        let labels = Log::natural().label(&[1.0], NumberFormat::Auto);
        assert_eq!(labels, vec!["e^1"]);
    }

    #[test]
    fn test_bases_have_distinct_kinds() {
        let kinds = [
            Log::base10().transform_kind(),
            Log::base2().transform_kind(),
            Log::natural().transform_kind(),
        ];
        assert_ne!(kinds[0], kinds[1]);
        assert_ne!(kinds[1], kinds[2]);
        assert_ne!(kinds[0], kinds[2]);
        for (log, kind) in [Log::base10(), Log::base2(), Log::natural()].iter().zip(kinds) {
            let registered = Transform::from_name(log.name()).map(|t| t.transform_kind());
            assert_eq!(registered, Some(kind));
        }
    }
}
