//! Discrete scale: categorical positions and groupings

use tracing::{debug, trace};

use super::continuous::field_set_name;
use super::{ScaleKind, ScaleTrait};
use crate::plot::aesthetic::{Field, FieldSet};
use crate::plot::data::{AesColumn, Aesthetics, Data};
use crate::plot::scale::labeler::Labeler;
use crate::plot::scale::types::DiscreteOptions;
use crate::Result;

/// Discretizes each claimed field into 1-based level indices
///
/// Every field is discretized on its own, so `xmin` and `x` may end up with
/// different level sets when their values differ.
#[derive(Debug, Clone)]
pub struct DiscreteScale {
    fields: FieldSet,
    options: DiscreteOptions,
    grouping: bool,
}

impl DiscreteScale {
    pub fn new(fields: FieldSet, options: DiscreteOptions) -> Self {
        Self {
            fields,
            options,
            grouping: false,
        }
    }

    /// A discrete scale over a single grouping field
    pub fn grouping(field: Field, options: DiscreteOptions) -> Self {
        Self {
            fields: FieldSet::Single(field),
            options,
            grouping: true,
        }
    }

    pub fn options(&self) -> &DiscreteOptions {
        &self.options
    }
}

impl ScaleTrait for DiscreteScale {
    fn kind(&self) -> ScaleKind {
        if self.grouping {
            ScaleKind::Grouping
        } else {
            ScaleKind::Discrete
        }
    }

    fn element_aesthetics(&self) -> &[Field] {
        self.fields.fields()
    }

    fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
        debug!(scale = %self, pairs = datas.len(), "applying discrete scale");
        let discretizer = self.options.discretizer();

        for (aes, data) in aess.iter_mut().zip(datas) {
            for &field in self.fields.fields() {
                let Some(column) = data.get(field) else {
                    continue;
                };
                let (levels, indices) = discretizer.apply(column)?.into_parts();
                trace!(field = %field, levels = levels.len(), "discretized field");
                aes.set(field, AesColumn::Indices(indices));
                aes.set_label(field, Labeler::levels(levels));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for DiscreteScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind(), field_set_name(&self.fields))
    }
}
