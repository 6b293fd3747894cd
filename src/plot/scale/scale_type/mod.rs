//! Scale elements
//!
//! A scale element maps raw Data columns to Aesthetics columns for the fields
//! it claims. The set of element kinds is closed ([`ScaleKind`]); each kind
//! implements [`ScaleTrait`] and is wrapped in the cheap-to-clone [`Scale`].
//!
//! Elements are immutable once built and may be applied to any number of
//! (Aesthetics, Data) pairs. `apply_scale` always sees every pair of a call at
//! once, which is what lets the colour scales build one shared key.

mod continuous;
mod continuous_color;
mod discrete;
mod discrete_color;
mod identity_color;
mod label;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::colour::{Color, Gradient};
use super::transform::Transform;
use super::types::{ContinuousOptions, DiscreteOptions};
use crate::plot::aesthetic::{Field, FieldSet};
use crate::plot::data::{Aesthetics, Data};
use crate::Result;

pub use continuous::ContinuousScale;
pub use continuous_color::{ContinuousColorContext, ContinuousColorScale, KEY_STEPS_BETWEEN_TICKS};
pub use discrete::DiscreteScale;
pub use discrete_color::{ColorPalette, DiscreteColorContext, DiscreteColorScale};
pub use identity_color::IdentityColorScale;
pub use label::LabelScale;

/// Enum of all scale element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Continuous,
    Discrete,
    DiscreteColor,
    ContinuousColor,
    Label,
    Grouping,
    IdentityColor,
}

impl ScaleKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScaleKind::Continuous => "continuous",
            ScaleKind::Discrete => "discrete",
            ScaleKind::DiscreteColor => "discrete_color",
            ScaleKind::ContinuousColor => "continuous_color",
            ScaleKind::Label => "label",
            ScaleKind::Grouping => "grouping",
            ScaleKind::IdentityColor => "identity_color",
        }
    }
}

impl std::fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Behaviour shared by every scale element
pub trait ScaleTrait: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Which kind of element this is
    fn kind(&self) -> ScaleKind;

    /// Fields this element reads from Data and writes to Aesthetics
    fn element_aesthetics(&self) -> &[Field];

    /// Apply to every pair. `aess` and `datas` are parallel and equally long.
    fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()>;
}

/// Wrapper struct for scale trait objects
#[derive(Clone)]
pub struct Scale(Arc<dyn ScaleTrait>);

impl Scale {
    /// Wrap any element implementation
    pub fn new(scale: impl ScaleTrait + 'static) -> Self {
        Self(Arc::new(scale))
    }

    fn continuous(fields: FieldSet, transform: Transform, options: ContinuousOptions) -> Self {
        Self::new(ContinuousScale::new(fields, transform, options))
    }

    /// Linear x axis
    pub fn x_continuous(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::identity(), options)
    }

    /// Linear y axis
    pub fn y_continuous(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::identity(), options)
    }

    pub fn x_log10(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::log10(), options)
    }

    pub fn y_log10(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::log10(), options)
    }

    pub fn x_log2(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::log2(), options)
    }

    pub fn y_log2(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::log2(), options)
    }

    pub fn x_ln(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::ln(), options)
    }

    pub fn y_ln(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::ln(), options)
    }

    pub fn x_sqrt(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::sqrt(), options)
    }

    pub fn y_sqrt(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::sqrt(), options)
    }

    pub fn x_asinh(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::asinh(), options)
    }

    pub fn y_asinh(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::asinh(), options)
    }

    /// x axis of dates, labelled as ISO dates
    pub fn x_date(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::date(), options)
    }

    pub fn y_date(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::date(), options)
    }

    pub fn x_datetime(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::XFamily, Transform::datetime(), options)
    }

    pub fn y_datetime(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::YFamily, Transform::datetime(), options)
    }

    pub fn size_continuous(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::Single(Field::Size), Transform::identity(), options)
    }

    pub fn opacity_continuous(options: ContinuousOptions) -> Self {
        Self::continuous(FieldSet::Single(Field::Opacity), Transform::identity(), options)
    }

    /// Categorical x axis
    pub fn x_discrete(options: DiscreteOptions) -> Self {
        Self::new(DiscreteScale::new(FieldSet::XFamily, options))
    }

    /// Categorical y axis
    pub fn y_discrete(options: DiscreteOptions) -> Self {
        Self::new(DiscreteScale::new(FieldSet::YFamily, options))
    }

    /// Horizontal panel grouping
    pub fn xgroup(options: DiscreteOptions) -> Self {
        Self::new(DiscreteScale::grouping(Field::XGroup, options))
    }

    /// Vertical panel grouping
    pub fn ygroup(options: DiscreteOptions) -> Self {
        Self::new(DiscreteScale::grouping(Field::YGroup, options))
    }

    /// Generic `group` field
    pub fn group_discrete(options: DiscreteOptions) -> Self {
        Self::new(DiscreteScale::grouping(Field::Group, options))
    }

    pub fn label(options: DiscreteOptions) -> Self {
        Self::new(LabelScale::new(options))
    }

    /// Categorical colour with the default hue palette
    pub fn color_discrete(options: DiscreteOptions) -> Self {
        Self::new(DiscreteColorScale::new(ColorPalette::Hue, options))
    }

    /// Categorical colour starting from the given colours
    pub fn color_discrete_manual(colors: Vec<Color>, options: DiscreteOptions) -> Self {
        Self::new(DiscreteColorScale::new(ColorPalette::Manual(colors), options))
    }

    /// Numeric colour with the default gradient
    pub fn color_continuous(options: ContinuousOptions) -> Self {
        Self::new(ContinuousColorScale::new(Gradient::default(), options))
    }

    /// Numeric colour with a custom gradient
    pub fn color_continuous_gradient(gradient: Gradient, options: ContinuousOptions) -> Self {
        Self::new(ContinuousColorScale::new(gradient, options))
    }

    /// Colour values are CSS colours used as-is
    pub fn color_identity() -> Self {
        Self::new(IdentityColorScale)
    }

    pub fn kind(&self) -> ScaleKind {
        self.0.kind()
    }

    pub fn element_aesthetics(&self) -> &[Field] {
        self.0.element_aesthetics()
    }

    pub fn apply_scale(&self, aess: &mut [Aesthetics], datas: &[Data]) -> Result<()> {
        self.0.apply_scale(aess, datas)
    }
}

impl std::fmt::Debug for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::aesthetic::{X_VARS, Y_VARS};

    #[test]
    fn test_constructor_kinds() {
        assert_eq!(Scale::x_log10(Default::default()).kind(), ScaleKind::Continuous);
        assert_eq!(Scale::y_discrete(Default::default()).kind(), ScaleKind::Discrete);
        assert_eq!(Scale::xgroup(Default::default()).kind(), ScaleKind::Grouping);
        assert_eq!(Scale::label(Default::default()).kind(), ScaleKind::Label);
        assert_eq!(Scale::color_discrete(Default::default()).kind(), ScaleKind::DiscreteColor);
        assert_eq!(
            Scale::color_continuous(Default::default()).kind(),
            ScaleKind::ContinuousColor
        );
        assert_eq!(Scale::color_identity().kind(), ScaleKind::IdentityColor);
    }

    #[test]
    fn test_element_aesthetics() {
        assert_eq!(Scale::x_sqrt(Default::default()).element_aesthetics(), X_VARS);
        assert_eq!(Scale::y_discrete(Default::default()).element_aesthetics(), Y_VARS);
        assert_eq!(
            Scale::size_continuous(Default::default()).element_aesthetics(),
            &[Field::Size]
        );
        assert_eq!(
            Scale::ygroup(Default::default()).element_aesthetics(),
            &[Field::YGroup]
        );
        assert_eq!(Scale::label(Default::default()).element_aesthetics(), &[Field::Label]);
        assert_eq!(
            Scale::color_discrete(Default::default()).element_aesthetics(),
            &[Field::Color]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Scale::x_log10(Default::default()).to_string(), "continuous(x, log10)");
        assert_eq!(Scale::xgroup(Default::default()).to_string(), "grouping(xgroup)");
    }
}
