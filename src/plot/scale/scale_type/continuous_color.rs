//! Continuous colour scale: gradient mapping over one shared range

use tracing::debug;

use super::{ScaleKind, ScaleTrait};
use crate::plot::aesthetic::Field;
use crate::plot::data::{AesColumn, Aesthetics, ColorColumn, Data};
use crate::plot::scale::breaks::optimize_ticks;
use crate::plot::scale::colour::{Color, Gradient};
use crate::plot::scale::labeler::Labeler;
use crate::plot::scale::transform::Transform;
use crate::plot::scale::types::ContinuousOptions;
use crate::plot::types::Value;
use crate::Result;

/// Unlabelled swatches drawn between two adjacent ticks in the key
pub const KEY_STEPS_BETWEEN_TICKS: usize = 4;

/// Range and ticks resolved across every Data of one call
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousColorContext {
    /// Value mapped to the start of the gradient (the first tick)
    pub cmin: f64,
    /// Value mapped to the end of the gradient (the last tick)
    pub cmax: f64,
    pub ticks: Vec<f64>,
}

impl ContinuousColorContext {
    /// Normalised gradient position of `value`. A zero-width range uses a
    /// span of one.
    pub fn position(&self, value: f64) -> f64 {
        let span = self.cmax - self.cmin;
        let span = if span == 0.0 { 1.0 } else { span };
        (value - self.cmin) / span
    }
}

/// Maps numeric `color` values through a gradient
#[derive(Debug, Clone)]
pub struct ContinuousColorScale {
    gradient: Gradient,
    options: ContinuousOptions,
}

impl ContinuousColorScale {
    pub fn new(gradient: Gradient, options: ContinuousOptions) -> Self {
        Self { gradient, options }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Find the global range and its ticks.
    ///
    /// Returns `None` when no Data holds a numeric `color` value. Cells that
    /// are not numbers are ignored.
    pub fn scan(&self, datas: &[Data]) -> Result<Option<ContinuousColorContext>> {
        let mut range: Option<(f64, f64)> = None;
        for column in datas.iter().filter_map(|d| d.get(Field::Color)) {
            for v in column.iter().flatten().filter_map(concrete_number) {
                range = Some(match range {
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    None => (v, v),
                });
            }
        }
        let Some((mut cmin, mut cmax)) = range else {
            return Ok(None);
        };

        if let Some(min) = self.options.minvalue {
            cmin = min;
        }
        if let Some(max) = self.options.maxvalue {
            cmax = max;
        }

        let mut ticks = optimize_ticks(cmin, cmax).ticks;
        // Data starting at one or above should not get a legend starting at zero
        if cmin >= 1.0 && ticks.first() == Some(&0.0) {
            ticks[0] = 1.0;
        }
        let cmin = ticks.first().copied().unwrap_or(cmin);
        let cmax = ticks.last().copied().unwrap_or(cmax);

        debug!(cmin, cmax, ticks = ?ticks, "resolved continuous colour range");
        Ok(Some(ContinuousColorContext { cmin, cmax, ticks }))
    }

    /// Colour key swatches and their labels, highest value first
    pub fn key(&self, ctx: &ContinuousColorContext) -> (Vec<Color>, Vec<String>) {
        let tick_labels = Labeler::numeric(Transform::identity(), self.options.format).format(&ctx.ticks);
        let mut colors = Vec::new();
        let mut labels = Vec::new();

        for (i, pair) in ctx.ticks.windows(2).enumerate() {
            let (lo, hi) = (pair[0], pair[1]);
            colors.push(self.gradient.at(ctx.position(lo)));
            labels.push(tick_labels[i].clone());
            for step in 1..=KEY_STEPS_BETWEEN_TICKS {
                let t = step as f64 / (KEY_STEPS_BETWEEN_TICKS + 1) as f64;
                colors.push(self.gradient.at(ctx.position(lo + t * (hi - lo))));
                labels.push(String::new());
            }
        }
        if let (Some(&last), Some(label)) = (ctx.ticks.last(), tick_labels.last()) {
            colors.push(self.gradient.at(ctx.position(last)));
            labels.push(label.clone());
        }

        colors.reverse();
        labels.reverse();
        (colors, labels)
    }

    /// Write colours, key and label formatter into every pair with a `color` column
    pub fn apply(
        &self,
        ctx: &ContinuousColorContext,
        aess: &mut [Aesthetics],
        datas: &[Data],
    ) -> Result<()> {
        let (key_colors, key_labels) = self.key(ctx);

        for (aes, data) in aess.iter_mut().zip(datas) {
            let Some(column) = data.get(Field::Color) else {
                continue;
            };
            let values = column
                .iter()
                .map(|cell| {
                    cell.as_ref()
                        .and_then(concrete_number)
                        .map(|x| self.gradient.at(ctx.position(x)))
                })
                .collect();

            aes.set(
                Field::Color,
                AesColumn::Colors(ColorColumn {
                    values,
                    palette: key_colors.clone(),
                }),
            );
            aes.set_label(Field::Color, Labeler::color_key(key_labels.clone()));
            aes.color_key_colors = key_colors.clone();
            aes.color_key_continuous = true;
        }
        Ok(())
    }
}

fn concrete_number(value: &Value) -> Option<f64> {
    value.to_f64().filter(|v| v.is_finite())
}

impl ScaleTrait for ContinuousColorScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::ContinuousColor
    }

    fn element_aesthetics(&self) -> &[Field] {
        &[Field::Color]
    }

    fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
        debug!(scale = %self, pairs = datas.len(), "applying continuous colour scale");
        match self.scan(datas)? {
            Some(ctx) => self.apply(&ctx, aess, datas),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for ContinuousColorScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "continuous_color")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colored(values: &[f64]) -> Data {
        Data::new().with_values(Field::Color, values.iter().copied())
    }

    fn run(scale: &ContinuousColorScale, datas: &[Data]) -> Vec<Aesthetics> {
        let mut aess = vec![Aesthetics::new(); datas.len()];
        scale.apply_scale(&mut aess, datas).unwrap();
        aess
    }

    #[test]
    fn test_global_range_across_panels() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let ctx = scale
            .scan(&[colored(&[0.0, 40.0]), colored(&[100.0])])
            .unwrap()
            .unwrap();
        assert_eq!(ctx.ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!((ctx.cmin, ctx.cmax), (0.0, 100.0));

        let aess = run(&scale, &[colored(&[0.0, 40.0]), colored(&[100.0])]);
        let g = Gradient::default();
        assert_eq!(aess[0].colors(Field::Color).unwrap(), &[Some(g.at(0.0)), Some(g.at(0.4))]);
        assert_eq!(aess[1].colors(Field::Color).unwrap(), &[Some(g.at(1.0))]);
        assert!(aess[0].color_key_continuous);
    }

    #[test]
    fn test_key_layout() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let aess = run(&scale, &[colored(&[0.0, 100.0])]);
        let aes = &aess[0];

        // 4 gaps of 5 swatches plus the final tick
        assert_eq!(aes.color_key_colors.len(), 4 * (KEY_STEPS_BETWEEN_TICKS + 1) + 1);
        let n = aes.color_key_colors.len() as f64;
        let labels = aes
            .format_labels(Field::Color, &(1..=aes.color_key_colors.len()).map(|i| i as f64).collect::<Vec<_>>())
            .unwrap();
        assert_eq!(labels[0], "100");
        assert_eq!(labels[1], "");
        assert_eq!(labels[5], "75");
        assert_eq!(labels[n as usize - 1], "0");
        assert_eq!(aes.color_key_colors[0], Gradient::default().at(1.0));
        assert_eq!(*aes.color_key_colors.last().unwrap(), Gradient::default().at(0.0));
    }

    #[test]
    fn test_degenerate_range() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let aess = run(&scale, &[colored(&[5.0, 5.0, 5.0])]);
        let expected = Gradient::default().at(0.0);
        for c in aess[0].colors(Field::Color).unwrap() {
            assert_eq!(*c, Some(expected));
        }
        assert_eq!(aess[0].color_key_colors, vec![expected]);
    }

    #[test]
    fn test_lower_tick_snaps_to_one() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let ctx = scale.scan(&[colored(&[1.0, 100.0])]).unwrap().unwrap();
        assert_eq!(ctx.ticks[0], 1.0);
        assert_eq!(ctx.cmin, 1.0);
    }

    #[test]
    fn test_bounds_override() {
        let scale = ContinuousColorScale::new(
            Gradient::default(),
            ContinuousOptions {
                minvalue: Some(0.0),
                maxvalue: Some(1.0),
                ..Default::default()
            },
        );
        let ctx = scale.scan(&[colored(&[0.2, 0.3])]).unwrap().unwrap();
        assert_eq!(ctx.cmin, 0.0);
        assert_eq!(ctx.cmax, 1.0);
    }

    #[test]
    fn test_missing_stays_missing() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let data = Data::new().with_column(
            Field::Color,
            vec![Some(Value::from(1.0)), None, Some(Value::from(f64::NAN))],
        );
        let aess = run(&scale, &[data]);
        let colors = aess[0].colors(Field::Color).unwrap();
        assert!(colors[0].is_some());
        assert_eq!(colors[1], None);
        assert_eq!(colors[2], None);
    }

    #[test]
    fn test_nothing_numeric_is_noop() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let data = Data::new().with_column(Field::Color, vec![None, None]);
        assert!(scale.scan(&[data.clone()]).unwrap().is_none());
        let aess = run(&scale, &[data]);
        assert!(aess[0].columns.is_empty());
        assert!(!aess[0].color_key_continuous);
    }

    #[test]
    fn test_text_colours_are_noop() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let data = Data::new().with_values(Field::Color, ["a", "b"]);
        assert!(scale.scan(&[data.clone()]).unwrap().is_none());
        let aess = run(&scale, &[data]);
        assert!(aess[0].columns.is_empty());
        assert!(aess[0].color_key_colors.is_empty());
    }

    #[test]
    fn test_text_cells_among_numbers_stay_missing() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let data = Data::new().with_column(
            Field::Color,
            vec![Some(Value::from(0.0)), Some(Value::from("n/a")), Some(Value::from(100.0))],
        );
        let aess = run(&scale, &[data]);
        let g = Gradient::default();
        assert_eq!(
            aess[0].colors(Field::Color).unwrap(),
            &[Some(g.at(0.0)), None, Some(g.at(1.0))]
        );
    }

    #[test]
    fn test_very_wide_range_completes() {
        let scale = ContinuousColorScale::new(Gradient::default(), Default::default());
        let aess = run(&scale, &[colored(&[0.0, 1e200])]);
        let colors = aess[0].colors(Field::Color).unwrap();
        assert!(colors.iter().all(Option::is_some));
        assert!(!aess[0].color_key_colors.is_empty());
    }
}
