//! Identity colour scale: data values are colours already

use std::collections::BTreeSet;

use tracing::debug;

use super::{ScaleKind, ScaleTrait};
use crate::plot::aesthetic::Field;
use crate::plot::data::{AesColumn, Aesthetics, ColorColumn, Data};
use crate::plot::scale::colour::Color;
use crate::plot::types::Value;
use crate::{GgscaleError, Result};

/// Parses `color` values as CSS colours. No colour key is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityColorScale;

fn parse_cell(value: &Value) -> Result<Color> {
    match value {
        Value::String(s) => Color::parse(s),
        other => Err(GgscaleError::InvalidColor(other.to_key_string())),
    }
}

impl ScaleTrait for IdentityColorScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::IdentityColor
    }

    fn element_aesthetics(&self) -> &[Field] {
        &[Field::Color]
    }

    fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
        debug!(pairs = datas.len(), "applying identity colour scale");
        for (aes, data) in aess.iter_mut().zip(datas) {
            let Some(column) = data.get(Field::Color) else {
                continue;
            };
            let values = column
                .iter()
                .map(|cell| cell.as_ref().map(parse_cell).transpose())
                .collect::<Result<Vec<_>>>()?;
            let mut seen = BTreeSet::new();
            let palette = values
                .iter()
                .flatten()
                .filter(|c| seen.insert(**c))
                .copied()
                .collect();
            aes.set(Field::Color, AesColumn::Colors(ColorColumn { values, palette }));
        }
        Ok(())
    }
}

impl std::fmt::Display for IdentityColorScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "identity_color")
    }
}
