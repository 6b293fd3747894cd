//! Continuous scale: elementwise numeric transforms

use tracing::{debug, trace};

use super::{ScaleKind, ScaleTrait};
use crate::plot::aesthetic::{Field, FieldSet};
use crate::plot::data::{AesColumn, Aesthetics, Data};
use crate::plot::scale::labeler::Labeler;
use crate::plot::scale::transform::Transform;
use crate::plot::scale::types::ContinuousOptions;
use crate::plot::types::Value;
use crate::{GgscaleError, Result};

/// Applies a transform to the position, size or opacity fields it claims
#[derive(Debug, Clone)]
pub struct ContinuousScale {
    fields: FieldSet,
    transform: Transform,
    options: ContinuousOptions,
}

impl ContinuousScale {
    pub fn new(fields: FieldSet, transform: Transform, options: ContinuousOptions) -> Self {
        Self {
            fields,
            transform,
            options,
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn options(&self) -> &ContinuousOptions {
        &self.options
    }

    /// Transform one column. Missing and non-finite elements pass through.
    pub fn transform_column(&self, field: Field, column: &[Option<Value>]) -> Result<Vec<Option<f64>>> {
        column
            .iter()
            .map(|cell| match cell {
                None => Ok(None),
                Some(v) if !v.is_concrete() => Ok(v.to_f64()),
                Some(v) => numeric_value(field, v).map(|x| Some(self.transform.transform(x))),
            })
            .collect()
    }
}

/// Numeric value of a concrete cell, or a `NonNumeric` error naming the field
fn numeric_value(field: Field, value: &Value) -> Result<f64> {
    value.to_f64().ok_or_else(|| GgscaleError::NonNumeric {
        field,
        value: value.to_key_string(),
    })
}

/// Short name of a field set for display
pub(super) fn field_set_name(fields: &FieldSet) -> &'static str {
    match fields {
        FieldSet::XFamily => "x",
        FieldSet::YFamily => "y",
        FieldSet::Single(field) => field.name(),
    }
}

impl ScaleTrait for ContinuousScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Continuous
    }

    fn element_aesthetics(&self) -> &[Field] {
        self.fields.fields()
    }

    fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
        debug!(scale = %self, pairs = datas.len(), "applying continuous scale");

        // View bounds are the same for every pair
        let viewmin = self.options.minvalue.map(|v| self.transform.transform(v));
        let viewmax = self.options.maxvalue.map(|v| self.transform.transform(v));

        for (aes, data) in aess.iter_mut().zip(datas) {
            for &field in self.fields.fields() {
                let Some(column) = data.get(field) else {
                    continue;
                };
                trace!(field = %field, len = column.len(), "transforming field");
                let values = self.transform_column(field, column)?;
                aes.set(field, AesColumn::Continuous(values));
                aes.set_label(
                    field,
                    Labeler::numeric(self.transform.clone(), self.options.format),
                );
            }
            aes.set_view(self.fields, viewmin, viewmax);
        }
        Ok(())
    }
}

impl std::fmt::Display for ContinuousScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "continuous({}, {})",
            field_set_name(&self.fields),
            self.transform.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NumberFormat;

    fn apply(scale: &ContinuousScale, data: Data) -> Aesthetics {
        let mut aess = vec![Aesthetics::new()];
        scale.apply_scale(&mut aess, &[data]).unwrap();
        aess.pop().unwrap()
    }

    fn assert_close(actual: &[Option<f64>], expected: &[Option<f64>]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            match (a, e) {
                (Some(a), Some(e)) => assert!((a - e).abs() < 1e-12, "{} != {}", a, e),
                _ => assert_eq!(a, e),
            }
        }
    }

    #[test]
    fn test_log10_with_view_bounds() {
        let scale = ContinuousScale::new(
            FieldSet::XFamily,
            Transform::log10(),
            ContinuousOptions {
                minvalue: Some(1.0),
                maxvalue: Some(1000.0),
                format: NumberFormat::Auto,
            },
        );
        let aes = apply(
            &scale,
            Data::new().with_values(Field::X, [1.0, 10.0, 100.0, 1000.0]),
        );
        assert_close(
            aes.numeric(Field::X).unwrap(),
            &[Some(0.0), Some(1.0), Some(2.0), Some(3.0)],
        );
        assert_eq!(aes.xviewmin, Some(0.0));
        assert!((aes.xviewmax.unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(aes.yviewmin, None);
    }

    #[test]
    fn test_missing_is_not_transformed() {
        let scale = ContinuousScale::new(FieldSet::YFamily, Transform::sqrt(), Default::default());
        let data = Data::new().with_column(
            Field::Y,
            vec![Some(Value::from(1.0)), None, Some(Value::from(9.0))],
        );
        let aes = apply(&scale, data);
        assert_eq!(aes.numeric(Field::Y).unwrap(), &[Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn test_non_finite_passes_through() {
        let scale = ContinuousScale::new(FieldSet::XFamily, Transform::log10(), Default::default());
        let aes = apply(&scale, Data::new().with_values(Field::X, [f64::INFINITY, 10.0]));
        assert_eq!(aes.numeric(Field::X).unwrap()[0], Some(f64::INFINITY));
    }

    #[test]
    fn test_domain_errors_propagate_as_nan() {
        let scale = ContinuousScale::new(FieldSet::XFamily, Transform::log10(), Default::default());
        let aes = apply(&scale, Data::new().with_values(Field::X, [-1.0, 0.0]));
        let x = aes.numeric(Field::X).unwrap();
        assert!(x[0].unwrap().is_nan());
        assert_eq!(x[1], Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_all_family_members_and_labels() {
        let scale = ContinuousScale::new(FieldSet::XFamily, Transform::log10(), Default::default());
        let data = Data::new()
            .with_values(Field::XMin, [10.0])
            .with_values(Field::X, [100.0]);
        let aes = apply(&scale, data);
        assert!(aes.numeric(Field::XMin).is_some());
        assert!(aes.numeric(Field::XMax).is_none());
        // Only x has a label slot
        assert!(aes.label(Field::XMin).is_none());
        assert_eq!(
            aes.format_labels(Field::X, &[2.0]),
            Some(vec!["10^2".to_string()])
        );
    }

    #[test]
    fn test_absent_field_leaves_aesthetics_alone() {
        let scale = ContinuousScale::new(FieldSet::XFamily, Transform::identity(), Default::default());
        let aes = apply(&scale, Data::new().with_values(Field::Y, [1.0]));
        assert!(aes.columns.is_empty());
        assert!(aes.labels.is_empty());
    }

    #[test]
    fn test_singleton_has_no_view() {
        let scale = ContinuousScale::new(
            FieldSet::Single(Field::Size),
            Transform::identity(),
            ContinuousOptions {
                minvalue: Some(0.0),
                ..Default::default()
            },
        );
        let aes = apply(&scale, Data::new().with_values(Field::Size, [3, 4]));
        assert_eq!(aes.numeric(Field::Size).unwrap(), &[Some(3.0), Some(4.0)]);
        assert_eq!(aes.xviewmin, None);
        assert!(aes.label(Field::Size).is_some());
    }

    #[test]
    fn test_dates_become_days() {
        let scale = ContinuousScale::new(FieldSet::XFamily, Transform::date(), Default::default());
        let data = Data::new().with_column(
            Field::X,
            vec![Value::from_date_string("1970-01-11")],
        );
        let aes = apply(&scale, data);
        assert_eq!(aes.numeric(Field::X).unwrap(), &[Some(10.0)]);
        assert_eq!(
            aes.format_labels(Field::X, &[10.0]),
            Some(vec!["1970-01-11".to_string()])
        );
    }

    #[test]
    fn test_non_numeric_error() {
        let scale = ContinuousScale::new(FieldSet::XFamily, Transform::identity(), Default::default());
        let mut aess = vec![Aesthetics::new()];
        let err = scale
            .apply_scale(&mut aess, &[Data::new().with_values(Field::X, ["a"])])
            .unwrap_err();
        assert_eq!(
            err,
            GgscaleError::NonNumeric {
                field: Field::X,
                value: "a".to_string()
            }
        );
    }
}
