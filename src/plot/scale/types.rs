//! Scale options and the serialisable scale specification
//!
//! Option records are plain data with `#[serde(default)]`, so a JSON
//! configuration only needs to name the settings it changes:
//!
//! ```json
//! [
//!   {"scale": "x_log10", "minvalue": 1, "maxvalue": 1000},
//!   {"scale": "color_discrete_manual", "colors": ["red", "#00f"], "order": [2, 1]}
//! ]
//! ```

use serde::{Deserialize, Serialize};

use super::colour::{Color, ColorSpace, Gradient};
use super::discretize::Discretizer;
use super::scale_type::Scale;
use crate::format::NumberFormat;
use crate::plot::types::Value;
use crate::Result;

/// Settings for continuous position, size, opacity and colour scales
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousOptions {
    /// Lower view bound, in data units
    pub minvalue: Option<f64>,
    /// Upper view bound, in data units
    pub maxvalue: Option<f64>,
    /// Label formatting mode
    pub format: NumberFormat,
}

/// Settings for discrete position, grouping, label and colour scales
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscreteOptions {
    /// Fixed level universe; values outside it become missing
    pub levels: Option<Vec<Value>>,
    /// 1-based permutation of the levels
    pub order: Option<Vec<usize>>,
    /// Keep first-seen order when levels are derived from data
    pub preserve_order: bool,
}

impl DiscreteOptions {
    pub(crate) fn discretizer(&self) -> Discretizer {
        Discretizer {
            levels: self.levels.clone(),
            order: self.order.clone(),
            preserve_order: self.preserve_order,
        }
    }
}

/// A scale element as written in configuration
///
/// Each variant names one built-in constructor on [`Scale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scale", rename_all = "snake_case")]
pub enum ScaleSpec {
    XContinuous(ContinuousOptions),
    YContinuous(ContinuousOptions),
    XLog10(ContinuousOptions),
    YLog10(ContinuousOptions),
    XLog2(ContinuousOptions),
    YLog2(ContinuousOptions),
    XLn(ContinuousOptions),
    YLn(ContinuousOptions),
    XSqrt(ContinuousOptions),
    YSqrt(ContinuousOptions),
    XAsinh(ContinuousOptions),
    YAsinh(ContinuousOptions),
    XDate(ContinuousOptions),
    YDate(ContinuousOptions),
    XDatetime(ContinuousOptions),
    YDatetime(ContinuousOptions),
    SizeContinuous(ContinuousOptions),
    OpacityContinuous(ContinuousOptions),
    XDiscrete(DiscreteOptions),
    YDiscrete(DiscreteOptions),
    #[serde(rename = "xgroup")]
    XGroup(DiscreteOptions),
    #[serde(rename = "ygroup")]
    YGroup(DiscreteOptions),
    GroupDiscrete(DiscreteOptions),
    Label(DiscreteOptions),
    ColorDiscrete(DiscreteOptions),
    ColorDiscreteManual {
        colors: Vec<String>,
        #[serde(flatten)]
        options: DiscreteOptions,
    },
    ColorContinuous(ContinuousOptions),
    ColorContinuousGradient {
        stops: Vec<String>,
        #[serde(default)]
        space: ColorSpace,
        #[serde(flatten)]
        options: ContinuousOptions,
    },
    ColorIdentity,
}

impl ScaleSpec {
    /// Build the scale element. Fails only on unparseable colours.
    pub fn into_scale(self) -> Result<Scale> {
        Ok(match self {
            ScaleSpec::XContinuous(o) => Scale::x_continuous(o),
            ScaleSpec::YContinuous(o) => Scale::y_continuous(o),
            ScaleSpec::XLog10(o) => Scale::x_log10(o),
            ScaleSpec::YLog10(o) => Scale::y_log10(o),
            ScaleSpec::XLog2(o) => Scale::x_log2(o),
            ScaleSpec::YLog2(o) => Scale::y_log2(o),
            ScaleSpec::XLn(o) => Scale::x_ln(o),
            ScaleSpec::YLn(o) => Scale::y_ln(o),
            ScaleSpec::XSqrt(o) => Scale::x_sqrt(o),
            ScaleSpec::YSqrt(o) => Scale::y_sqrt(o),
            ScaleSpec::XAsinh(o) => Scale::x_asinh(o),
            ScaleSpec::YAsinh(o) => Scale::y_asinh(o),
            ScaleSpec::XDate(o) => Scale::x_date(o),
            ScaleSpec::YDate(o) => Scale::y_date(o),
            ScaleSpec::XDatetime(o) => Scale::x_datetime(o),
            ScaleSpec::YDatetime(o) => Scale::y_datetime(o),
            ScaleSpec::SizeContinuous(o) => Scale::size_continuous(o),
            ScaleSpec::OpacityContinuous(o) => Scale::opacity_continuous(o),
            ScaleSpec::XDiscrete(o) => Scale::x_discrete(o),
            ScaleSpec::YDiscrete(o) => Scale::y_discrete(o),
            ScaleSpec::XGroup(o) => Scale::xgroup(o),
            ScaleSpec::YGroup(o) => Scale::ygroup(o),
            ScaleSpec::GroupDiscrete(o) => Scale::group_discrete(o),
            ScaleSpec::Label(o) => Scale::label(o),
            ScaleSpec::ColorDiscrete(o) => Scale::color_discrete(o),
            ScaleSpec::ColorDiscreteManual { colors, options } => {
                let colors = colors
                    .iter()
                    .map(|c| Color::parse(c))
                    .collect::<Result<Vec<_>>>()?;
                Scale::color_discrete_manual(colors, options)
            }
            ScaleSpec::ColorContinuous(o) => Scale::color_continuous(o),
            ScaleSpec::ColorContinuousGradient {
                stops,
                space,
                options,
            } => {
                let stops = stops.iter().map(String::as_str).collect::<Vec<_>>();
                Scale::color_continuous_gradient(Gradient::from_css(&stops, space)?, options)
            }
            ScaleSpec::ColorIdentity => Scale::color_identity(),
        })
    }
}

/// Decode a JSON array of scale specifications
pub fn scales_from_json(json: &str) -> Result<Vec<Scale>> {
    let specs: Vec<ScaleSpec> = serde_json::from_str(json)
        .map_err(|e| crate::GgscaleError::Config(e.to_string()))?;
    specs.into_iter().map(ScaleSpec::into_scale).collect()
}
