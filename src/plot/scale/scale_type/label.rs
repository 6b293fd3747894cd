//! Label scale: one category per distinct text label

use tracing::debug;

use super::{ScaleKind, ScaleTrait};
use crate::plot::aesthetic::Field;
use crate::plot::data::{AesColumn, Aesthetics, Data};
use crate::plot::scale::types::DiscreteOptions;
use crate::Result;

/// Discretizes the `label` field, keeping the level pool with the indices
#[derive(Debug, Clone, Default)]
pub struct LabelScale {
    options: DiscreteOptions,
}

impl LabelScale {
    pub fn new(options: DiscreteOptions) -> Self {
        Self { options }
    }
}

impl ScaleTrait for LabelScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Label
    }

    fn element_aesthetics(&self) -> &[Field] {
        &[Field::Label]
    }

    fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
        debug!(pairs = datas.len(), "applying label scale");
        let discretizer = self.options.discretizer();
        for (aes, data) in aess.iter_mut().zip(datas) {
            if let Some(column) = data.get(Field::Label) {
                aes.set(Field::Label, AesColumn::Pooled(discretizer.apply(column)?));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for LabelScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "label")
    }
}
