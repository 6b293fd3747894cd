//! Aesthetic classification utilities
//!
//! Aesthetics are the named visual channels a renderer consumes. The set is
//! closed: every field a scale may read or write is a [`Field`] variant, so
//! scales address columns generically without runtime reflection.
//!
//! # Aesthetic Families
//!
//! Positional aesthetics come in families where variants share one axis.
//! `xmin`, `xmax` and `xintercept` all belong to the "x" family and are
//! transformed by the same continuous scale.

use serde::{Deserialize, Serialize};

/// Every aesthetic field known to the scale layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    X,
    XMin,
    XMax,
    XIntercept,
    Y,
    YMin,
    YMax,
    YIntercept,
    Size,
    Opacity,
    Color,
    Label,
    XGroup,
    YGroup,
    Group,
}

/// The x family: fields sharing the horizontal axis
pub const X_VARS: &[Field] = &[Field::X, Field::XMin, Field::XMax, Field::XIntercept];

/// The y family: fields sharing the vertical axis
pub const Y_VARS: &[Field] = &[Field::Y, Field::YMin, Field::YMax, Field::YIntercept];

/// All fields, in declaration order
pub const ALL_FIELDS: &[Field] = &[
    Field::X,
    Field::XMin,
    Field::XMax,
    Field::XIntercept,
    Field::Y,
    Field::YMin,
    Field::YMax,
    Field::YIntercept,
    Field::Size,
    Field::Opacity,
    Field::Color,
    Field::Label,
    Field::XGroup,
    Field::YGroup,
    Field::Group,
];

impl Field {
    /// Canonical field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::X => "x",
            Field::XMin => "xmin",
            Field::XMax => "xmax",
            Field::XIntercept => "xintercept",
            Field::Y => "y",
            Field::YMin => "ymin",
            Field::YMax => "ymax",
            Field::YIntercept => "yintercept",
            Field::Size => "size",
            Field::Opacity => "opacity",
            Field::Color => "color",
            Field::Label => "label",
            Field::XGroup => "xgroup",
            Field::YGroup => "ygroup",
            Field::Group => "group",
        }
    }

    /// Look up a field by name. Accepts the British spelling of colour.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "colour" => Some(Field::Color),
            _ => ALL_FIELDS.iter().copied().find(|f| f.name() == name),
        }
    }

    /// Whether the Aesthetics record carries a `<field>_label` formatter slot
    /// for this field. Only primary axes, groupings, colour and size do.
    pub fn has_label_slot(&self) -> bool {
        matches!(
            self,
            Field::X | Field::Y | Field::XGroup | Field::YGroup | Field::Color | Field::Size
        )
    }

    /// Check if this field belongs to the x family
    pub fn is_x_family(&self) -> bool {
        X_VARS.contains(self)
    }

    /// Check if this field belongs to the y family
    pub fn is_y_family(&self) -> bool {
        Y_VARS.contains(self)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The set of fields a scale element claims
///
/// View-range overrides are only meaningful for the two positional families,
/// which this type makes explicit instead of comparing field lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSet {
    XFamily,
    YFamily,
    Single(Field),
}

impl FieldSet {
    /// The fields in this set
    pub fn fields(&self) -> &[Field] {
        match self {
            FieldSet::XFamily => X_VARS,
            FieldSet::YFamily => Y_VARS,
            FieldSet::Single(field) => std::slice::from_ref(field),
        }
    }
}
