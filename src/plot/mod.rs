//! Data model and scales
//!
//! - `types` - the cell type of input columns
//! - `aesthetic` - the closed set of aesthetic fields
//! - `data` - the Data input record and Aesthetics output record
//! - `scale` - scale elements and their building blocks

pub mod aesthetic;
pub mod data;
pub mod scale;
pub mod types;

pub use aesthetic::*;
pub use data::*;
pub use scale::*;
pub use types::*;
