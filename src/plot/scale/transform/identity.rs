//! Identity transform implementation (no transformation)

use super::{TransformKind, TransformTrait};
use crate::format::{format_numbers, NumberFormat};

/// Identity transform - no transformation (linear scale)
#[derive(Debug, Clone, Copy)]
pub struct Identity;

impl TransformTrait for Identity {
    fn transform_kind(&self) -> TransformKind {
        TransformKind::Identity
    }

    fn name(&self) -> &'static str {
        "identity"
    }

    fn transform(&self, value: f64) -> f64 {
        value
    }

    fn inverse(&self, value: f64) -> f64 {
        value
    }

    fn label(&self, values: &[f64], format: NumberFormat) -> Vec<String> {
        format_numbers(values, format)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
