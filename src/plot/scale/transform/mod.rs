//! Transform trait and implementations
//!
//! The transform registry is a closed catalogue of invertible numeric
//! transforms. Each entry pairs a forward function, its exact inverse, and a
//! label renderer that formats already-transformed tick values back into text
//! describing the original scale (`10^2` for a log10 tick at 2).
//!
//! # Architecture
//!
//! - `TransformKind`: Enum for pattern matching and serialization
//! - `TransformTrait`: Trait defining transform behavior
//! - `Transform`: Wrapper struct holding an Arc<dyn TransformTrait>
//!
//! Adding a transform means adding one `TransformTrait` implementation and one
//! `TransformKind` variant; scales never branch on the kind.
//!
//! # Supported Transforms
//!
//! | Transform    | Domain       | Label           |
//! |--------------|--------------|-----------------|
//! | `identity`   | (-∞, +∞)     | `2.5`           |
//! | `log10`      | (0, +∞)      | `10^2`          |
//! | `log2`       | (0, +∞)      | `2^3`           |
//! | `ln`         | (0, +∞)      | `e^1`           |
//! | `sqrt`       | [0, +∞)      | `3²`            |
//! | `asinh`      | (-∞, +∞)     | `sinh(2)`       |
//! | `date`       | days         | `2024-01-15`    |
//! | `datetime`   | microseconds | `2024-01-15T10:30:00` |
//!
//! Domains are documented, not enforced: a log of a non-positive value
//! produces NaN or -inf, which flows through to the caller unchanged.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::format::NumberFormat;
use crate::{GgscaleError, Result};

mod asinh;
mod date;
mod datetime;
mod identity;
mod log;
mod sqrt;

pub use self::asinh::Asinh;
pub use self::date::Date;
pub use self::datetime::DateTime;
pub use self::identity::Identity;
pub use self::log::Log;
pub use self::sqrt::Sqrt;

/// Enum of all transform types for pattern matching and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// No transformation (linear)
    Identity,
    /// Base-10 logarithm
    Log10,
    /// Base-2 logarithm
    Log2,
    /// Natural logarithm (base e)
    Ln,
    /// Square root
    Sqrt,
    /// Inverse hyperbolic sine
    Asinh,
    /// Date (days since epoch, labelled as ISO dates)
    Date,
    /// DateTime (microseconds since epoch, labelled as ISO datetimes)
    DateTime,
}

impl TransformKind {
    /// Returns the canonical name for this transform kind
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Identity => "identity",
            TransformKind::Log10 => "log10",
            TransformKind::Log2 => "log2",
            TransformKind::Ln => "ln",
            TransformKind::Sqrt => "sqrt",
            TransformKind::Asinh => "asinh",
            TransformKind::Date => "date",
            TransformKind::DateTime => "datetime",
        }
    }

    /// Returns true if this is a temporal transform
    pub fn is_temporal(&self) -> bool {
        matches!(self, TransformKind::Date | TransformKind::DateTime)
    }
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Core trait for transform behavior
///
/// Each transform type implements this trait. Implementations must satisfy
/// `inverse(transform(x)) == x` (within floating tolerance) for every `x`
/// in the transform's domain.
pub trait TransformTrait: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Returns which transform type this is (for pattern matching)
    fn transform_kind(&self) -> TransformKind;

    /// Canonical name for parsing and display
    fn name(&self) -> &'static str;

    /// Forward transformation: x -> transform(x)
    ///
    /// Maps a value from data space to transformed space.
    fn transform(&self, value: f64) -> f64;

    /// Inverse transformation: transform(x) -> x
    ///
    /// Maps a value from transformed space back to data space.
    fn inverse(&self, value: f64) -> f64;

    /// Render already-transformed values as labels describing the original
    /// scale. Returns one string per input value.
    fn label(&self, values: &[f64], format: NumberFormat) -> Vec<String>;
}

/// Wrapper struct for transform trait objects
///
/// This provides a convenient interface for working with transforms while
/// hiding the complexity of trait objects.
#[derive(Clone)]
pub struct Transform(Arc<dyn TransformTrait>);

impl Transform {
    /// Create an Identity transform (no transformation)
    pub fn identity() -> Self {
        Self(Arc::new(Identity))
    }

    /// Create a Log10 transform (base-10 logarithm)
    pub fn log10() -> Self {
        Self(Arc::new(Log::base10()))
    }

    /// Create a Log2 transform (base-2 logarithm)
    pub fn log2() -> Self {
        Self(Arc::new(Log::base2()))
    }

    /// Create a natural logarithm transform
    pub fn ln() -> Self {
        Self(Arc::new(Log::natural()))
    }

    /// Create a Sqrt transform (square root)
    pub fn sqrt() -> Self {
        Self(Arc::new(Sqrt))
    }

    /// Create an Asinh transform (inverse hyperbolic sine)
    pub fn asinh() -> Self {
        Self(Arc::new(Asinh))
    }

    /// Create a Date transform (days since epoch)
    pub fn date() -> Self {
        Self(Arc::new(Date))
    }

    /// Create a DateTime transform (microseconds since epoch)
    pub fn datetime() -> Self {
        Self(Arc::new(DateTime))
    }

    /// Create a Transform from a string name
    ///
    /// Returns None if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggscale::plot::scale::transform::Transform;
    ///
    /// let t = Transform::from_name("log").unwrap();
    /// assert_eq!(t.name(), "log10");
    ///
    /// assert!(Transform::from_name("unknown").is_none());
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "identity" | "linear" => Some(Self::identity()),
            "log" | "log10" => Some(Self::log10()),
            "log2" => Some(Self::log2()),
            "ln" => Some(Self::ln()),
            "sqrt" => Some(Self::sqrt()),
            "asinh" => Some(Self::asinh()),
            "date" => Some(Self::date()),
            "datetime" => Some(Self::datetime()),
            _ => None,
        }
    }

    /// Create a Transform from a TransformKind
    pub fn from_kind(kind: TransformKind) -> Self {
        match kind {
            TransformKind::Identity => Self::identity(),
            TransformKind::Log10 => Self::log10(),
            TransformKind::Log2 => Self::log2(),
            TransformKind::Ln => Self::ln(),
            TransformKind::Sqrt => Self::sqrt(),
            TransformKind::Asinh => Self::asinh(),
            TransformKind::Date => Self::date(),
            TransformKind::DateTime => Self::datetime(),
        }
    }

    /// Get the transform kind (for pattern matching)
    pub fn transform_kind(&self) -> TransformKind {
        self.0.transform_kind()
    }

    /// Get the canonical name
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Forward transformation: x -> transform(x)
    pub fn transform(&self, value: f64) -> f64 {
        self.0.transform(value)
    }

    /// Inverse transformation: transform(x) -> x
    pub fn inverse(&self, value: f64) -> f64 {
        self.0.inverse(value)
    }

    /// Render transformed values as labels in the original scale
    pub fn label(&self, values: &[f64], format: NumberFormat) -> Vec<String> {
        self.0.label(values, format)
    }

    /// Returns true if this is the identity transform
    pub fn is_identity(&self) -> bool {
        self.transform_kind() == TransformKind::Identity
    }

    /// Returns true if this is a temporal transform (Date or DateTime)
    pub fn is_temporal(&self) -> bool {
        self.transform_kind().is_temporal()
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transform::{:?}", self.transform_kind())
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.transform_kind() == other.transform_kind()
    }
}

impl Eq for Transform {}

impl Serialize for Transform {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.transform_kind().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let kind = TransformKind::deserialize(deserializer)?;
        Ok(Transform::from_kind(kind))
    }
}

impl std::str::FromStr for Transform {
    type Err = GgscaleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| GgscaleError::UnknownTransform(s.to_string()))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// List of all valid transform names
pub const ALL_TRANSFORM_NAMES: &[&str] = &[
    "identity",
    "linear", // alias for identity
    "log10",
    "log", // alias for log10
    "log2",
    "ln",
    "sqrt",
    "asinh",
    "date",
    "datetime",
];
