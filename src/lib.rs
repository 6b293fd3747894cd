/*!
# ggscale - scale transformations for the grammar of graphics

ggscale is the layer of a plotting pipeline that turns raw data columns into
the aesthetic values a renderer consumes: transformed positions, categorical
indices and colours. It also produces the label formatters used to annotate
axes and legends, so that a displayed label always agrees with the value it
annotates.

## Example

```rust
use ggscale::{apply_scales, Data, Field, Scale};

let data = Data::new()
    .with_values(Field::X, [1.0, 10.0, 100.0, 1000.0])
    .with_values(Field::Color, ["b", "a", "b", "a"]);

let scales = vec![Scale::x_log10(Default::default()), Scale::color_discrete(Default::default())];
let aes = apply_scales(&scales, &[data]).unwrap();

let x = aes[0].numeric(Field::X).unwrap();
assert!((x[3].unwrap() - 3.0).abs() < 1e-12);
assert_eq!(aes[0].color_key_colors.len(), 2);
```

## Core Components

- [`plot::scale::transform`] - the registry of invertible numeric transforms
- [`plot::scale::discretize`] - level sets and index arrays for categorical data
- [`plot::scale`] - the scale elements (continuous, discrete, colour, label, grouping)
- [`execute`] - the engine that applies an ordered list of scales to every panel
*/

pub mod execute;
pub mod format;
pub mod plot;

// Re-export key types for convenience
pub use execute::{apply_scales, apply_scales_into};
pub use format::NumberFormat;
pub use plot::{
    AesColumn, Aesthetics, Color, Column, Data, Discretized, Field, Labeler, Scale, ScaleKind,
    ScaleSpec, Transform, TransformKind, Value,
};

/// Main library error type
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GgscaleError {
    #[error("Order has {actual} entries but there are {expected} levels")]
    OrderLengthMismatch { expected: usize, actual: usize },

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Field '{field}' holds non-numeric value '{value}' but has a continuous scale")]
    NonNumeric { field: Field, value: String },

    #[error("Got {aesthetics} aesthetics for {data} data records")]
    LengthMismatch { aesthetics: usize, data: usize },

    #[error("Unknown transform: {0}")]
    UnknownTransform(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GgscaleError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
