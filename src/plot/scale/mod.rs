//! Scale elements and the building blocks they share
//!
//! - [`transform`] - the registry of invertible numeric transforms
//! - [`discretize`] - level sets and index arrays for categorical data
//! - [`breaks`] - tick optimisation for continuous legends
//! - [`colour`] and [`palettes`] - colour values, gradients and palettes
//! - [`labeler`] - label formatters installed next to scaled fields
//! - [`scale_type`] - the scale element variants

pub mod breaks;
pub mod colour;
pub mod discretize;
pub mod labeler;
pub mod palettes;
pub mod scale_type;
pub mod transform;
mod types;

pub use colour::{interpolate_colors, Color, ColorSpace, Gradient};
pub use discretize::{discretize, Discretized, Discretizer};
pub use labeler::Labeler;
pub use palettes::{distinguishable_colors, PaletteOptions};
pub use scale_type::{
    ColorPalette, ContinuousColorContext, ContinuousColorScale, ContinuousScale,
    DiscreteColorContext, DiscreteColorScale, DiscreteScale, IdentityColorScale, LabelScale,
    Scale, ScaleKind, ScaleTrait,
};
pub use transform::{Transform, TransformKind, TransformTrait, ALL_TRANSFORM_NAMES};
pub use types::{scales_from_json, ContinuousOptions, DiscreteOptions, ScaleSpec};
