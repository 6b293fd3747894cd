//! Label formatters stored in the Aesthetics record
//!
//! Each scale installs a [`Labeler`] next to the field it writes. A labeler
//! owns everything it needs (the transform, the level sequence, the colour key
//! labels), so it can be serialised and called long after the scale ran.

use serde::{Deserialize, Serialize};

use super::transform::Transform;
use crate::format::{format_numbers, NumberFormat};
use crate::plot::types::Value;

/// Turns post-scale aesthetic values into display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Labeler {
    /// Continuous values rendered through a transform's label function
    Numeric {
        transform: Transform,
        #[serde(default)]
        format: NumberFormat,
    },
    /// 1-based level indices rendered as the level values
    Levels { levels: Vec<Value> },
    /// 1-based colour key positions rendered as the key's labels
    ColorKey { labels: Vec<String> },
}

impl Labeler {
    pub fn numeric(transform: Transform, format: NumberFormat) -> Self {
        Labeler::Numeric { transform, format }
    }

    pub fn levels(levels: Vec<Value>) -> Self {
        Labeler::Levels { levels }
    }

    pub fn color_key(labels: Vec<String>) -> Self {
        Labeler::ColorKey { labels }
    }

    /// Format one label per input value
    pub fn format(&self, values: &[f64]) -> Vec<String> {
        match self {
            Labeler::Numeric { transform, format } => transform.label(values, *format),
            Labeler::Levels { levels } => format_levels(levels, values),
            Labeler::ColorKey { labels } => values
                .iter()
                .map(|&v| {
                    position(v, labels.len())
                        .map(|i| labels[i].clone())
                        .unwrap_or_default()
                })
                .collect(),
        }
    }
}

/// 0-based offset for a 1-based position value, if it names an entry
fn position(value: f64, len: usize) -> Option<usize> {
    let rounded = value.round();
    if rounded >= 1.0 && rounded <= len as f64 {
        Some(rounded as usize - 1)
    } else {
        None
    }
}

fn format_levels(levels: &[Value], indices: &[f64]) -> Vec<String> {
    let recovered: Vec<Option<&Value>> = indices
        .iter()
        .map(|&v| position(v, levels.len()).map(|i| &levels[i]))
        .collect();

    let all_float = recovered.iter().flatten().all(|v| v.is_float());
    if all_float && recovered.iter().any(Option::is_some) {
        // Numeric categories get the same precision rules as continuous axes
        let numbers: Vec<f64> = recovered.iter().flatten().filter_map(|v| v.to_f64()).collect();
        let mut formatted = format_numbers(&numbers, NumberFormat::Auto).into_iter();
        return recovered
            .iter()
            .map(|v| match v {
                Some(_) => formatted.next().unwrap_or_default(),
                None => String::new(),
            })
            .collect();
    }

    recovered
        .iter()
        .map(|v| v.map(Value::to_key_string).unwrap_or_default())
        .collect()
}
