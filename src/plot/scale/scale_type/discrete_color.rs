//! Discrete colour scale: one shared palette for every panel

use std::sync::Arc;

use tracing::debug;

use super::{ScaleKind, ScaleTrait};
use crate::plot::aesthetic::Field;
use crate::plot::data::{AesColumn, Aesthetics, ColorColumn, Data};
use crate::plot::scale::colour::Color;
use crate::plot::scale::discretize::Discretizer;
use crate::plot::scale::labeler::Labeler;
use crate::plot::scale::palettes::{default_discrete_colors, manual_discrete_colors};
use crate::plot::scale::types::DiscreteOptions;
use crate::plot::types::{Column, Value};
use crate::Result;

/// Source of `n` colours for `n` levels
#[derive(Clone)]
pub enum ColorPalette {
    /// Distinguishable colours seeded with a medium blue
    Hue,
    /// The given colours first, extended by the same search when short
    Manual(Vec<Color>),
    /// Any caller-supplied function; must return exactly `n` colours
    Custom(Arc<dyn Fn(usize) -> Vec<Color> + Send + Sync>),
}

impl ColorPalette {
    pub fn colors(&self, n: usize) -> Vec<Color> {
        match self {
            ColorPalette::Hue => default_discrete_colors(n),
            ColorPalette::Manual(colors) => manual_discrete_colors(n, colors),
            ColorPalette::Custom(f) => f(n),
        }
    }
}

impl std::fmt::Debug for ColorPalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorPalette::Hue => write!(f, "Hue"),
            ColorPalette::Manual(colors) => f.debug_tuple("Manual").field(colors).finish(),
            ColorPalette::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Levels and colours resolved across every Data of one call
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteColorContext {
    pub levels: Vec<Value>,
    pub colors: Vec<Color>,
    /// Display label per level, parallel to `colors`
    pub labels: Vec<String>,
}

/// Maps categorical `color` values to a palette shared by all panels
#[derive(Debug, Clone)]
pub struct DiscreteColorScale {
    palette: ColorPalette,
    options: DiscreteOptions,
}

impl DiscreteColorScale {
    pub fn new(palette: ColorPalette, options: DiscreteOptions) -> Self {
        Self { palette, options }
    }

    /// Resolve the global level sequence and its colours.
    ///
    /// Returns `None` when no Data supplies a `color` column.
    pub fn scan(&self, datas: &[Data]) -> Result<Option<DiscreteColorContext>> {
        let columns: Vec<&Column> = datas.iter().filter_map(|d| d.get(Field::Color)).collect();
        if columns.is_empty() {
            return Ok(None);
        }

        // Derived levels are sorted unless preserve_order is set, so the
        // result never depends on panel or set iteration order
        let union: Column = columns
            .iter()
            .flat_map(|c| c.iter().flatten().cloned().map(Some))
            .collect();
        let levels = self.options.discretizer().apply(&union)?.into_parts().0;

        let colors = self.palette.colors(levels.len());
        let labels = levels.iter().map(Value::to_key_string).collect();

        debug!(levels = levels.len(), "resolved discrete colour levels");
        Ok(Some(DiscreteColorContext {
            levels,
            colors,
            labels,
        }))
    }

    /// Write colours, label formatter and key into every pair with a `color` column
    pub fn apply(
        &self,
        ctx: &DiscreteColorContext,
        aess: &mut [Aesthetics],
        datas: &[Data],
    ) -> Result<()> {
        let discretizer = Discretizer {
            levels: Some(ctx.levels.clone()),
            ..Default::default()
        };

        for (aes, data) in aess.iter_mut().zip(datas) {
            let Some(column) = data.get(Field::Color) else {
                continue;
            };
            let discretized = discretizer.apply(column)?;
            let values = discretized
                .indices()
                .iter()
                .map(|idx| idx.and_then(|i| ctx.colors.get(i - 1).copied()))
                .collect();

            aes.set(
                Field::Color,
                AesColumn::Colors(ColorColumn {
                    values,
                    palette: ctx.colors.clone(),
                }),
            );
            aes.set_label(Field::Color, Labeler::color_key(ctx.labels.clone()));
            aes.color_key_colors = ctx.colors.clone();
            aes.color_key_continuous = false;
        }
        Ok(())
    }
}

impl ScaleTrait for DiscreteColorScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::DiscreteColor
    }

    fn element_aesthetics(&self) -> &[Field] {
        &[Field::Color]
    }

    fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
        debug!(scale = %self, pairs = datas.len(), "applying discrete colour scale");
        match self.scan(datas)? {
            Some(ctx) => self.apply(&ctx, aess, datas),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for DiscreteColorScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.palette {
            ColorPalette::Manual(_) => write!(f, "discrete_color(manual)"),
            ColorPalette::Custom(_) => write!(f, "discrete_color(custom)"),
            ColorPalette::Hue => write!(f, "discrete_color(hue)"),
        }
    }
}
