//! Color utilities for scale output
//!
//! Provides the [`Color`] value written into aesthetics, CSS color parsing,
//! and gradient interpolation for continuous color scales.

use palette::{FromColor, IntoColor, LinSrgb, Mix, Oklab, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{GgscaleError, Result};

// =============================================================================
// Color Value
// =============================================================================

/// An opaque sRGB color with 8-bit channels
///
/// Serializes as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse any CSS color: named colors, hex, rgb(), hsl(), ...
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = csscolorparser::parse(value)
            .map_err(|e| GgscaleError::InvalidColor(format!("'{}': {}", value, e)))?;
        let [r, g, b, _] = parsed.to_rgba8();
        Ok(Self { r, g, b })
    }

    /// Hex representation, e.g. `#ff0000`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert from floating-point sRGB, clamping out-of-gamut channels
    pub fn from_srgb(color: Srgb<f32>) -> Self {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(color.red),
            g: channel(color.green),
            b: channel(color.blue),
        }
    }

    /// Convert to floating-point sRGB
    pub fn to_srgb(&self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = GgscaleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Color Interpolation
// =============================================================================

/// Color space options for interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Oklab color space - perceptually uniform (recommended for most uses).
    /// Produces visually pleasing gradients that avoid muddy colors.
    #[default]
    Oklab,
    /// Linear RGB color space - simple linear interpolation in RGB.
    /// Can produce darker intermediate colors for complementary hues.
    LinearRgb,
}

/// Default continuous color ramp: dark blue through teal to yellow
pub const DEFAULT_GRADIENT_STOPS: &[&str] = &["#440154", "#21918c", "#fde725"];

/// A gradient function `f(p) -> color` over `p` in `[0, 1]`
///
/// Stops are spaced evenly; positions outside `[0, 1]` clamp to the ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradientDef")]
pub struct Gradient {
    stops: Vec<Color>,
    space: ColorSpace,
}

/// Unchecked wire form of [`Gradient`]
#[derive(Deserialize)]
struct GradientDef {
    stops: Vec<Color>,
    #[serde(default)]
    space: ColorSpace,
}

impl TryFrom<GradientDef> for Gradient {
    type Error = GgscaleError;

    fn try_from(def: GradientDef) -> Result<Self> {
        Gradient::new(def.stops, def.space)
    }
}

impl Gradient {
    /// Build a gradient from color stops. At least one stop is required.
    pub fn new(stops: Vec<Color>, space: ColorSpace) -> Result<Self> {
        if stops.is_empty() {
            return Err(GgscaleError::InvalidColor(
                "At least one color is required".to_string(),
            ));
        }
        Ok(Self { stops, space })
    }

    /// Build a gradient from CSS color strings
    pub fn from_css(stops: &[&str], space: ColorSpace) -> Result<Self> {
        let stops = stops
            .iter()
            .map(|s| Color::parse(s))
            .collect::<Result<Vec<_>>>()?;
        Self::new(stops, space)
    }

    /// The gradient stops
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Evaluate the gradient at position `p`
    pub fn at(&self, p: f64) -> Color {
        if self.stops.len() == 1 || p.is_nan() {
            return self.stops[0];
        }
        let t = p.clamp(0.0, 1.0) as f32;
        let num_segments = self.stops.len() - 1;
        let segment_float = t * num_segments as f32;
        let segment = (segment_float.floor() as usize).min(num_segments - 1);
        let segment_t = segment_float - segment as f32;

        let a = self.stops[segment].to_srgb();
        let b = self.stops[segment + 1].to_srgb();
        match self.space {
            ColorSpace::Oklab => {
                let a = Oklab::from_color(LinSrgb::from(a));
                let b = Oklab::from_color(LinSrgb::from(b));
                let lin: LinSrgb<f32> = a.mix(b, segment_t).into_color();
                Color::from_srgb(Srgb::from(lin))
            }
            ColorSpace::LinearRgb => {
                let interpolated = LinSrgb::from(a).mix(LinSrgb::from(b), segment_t);
                Color::from_srgb(Srgb::from(interpolated))
            }
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            stops: vec![
                Color::new(0x44, 0x01, 0x54),
                Color::new(0x21, 0x91, 0x8c),
                Color::new(0xfd, 0xe7, 0x25),
            ],
            space: ColorSpace::Oklab,
        }
    }
}

/// Interpolate between colors, returning `count` evenly-spaced colors.
pub fn interpolate_colors(colors: &[&str], count: usize, space: ColorSpace) -> Result<Vec<Color>> {
    let gradient = Gradient::from_css(colors, space)?;
    if count <= 1 {
        return Ok(gradient.stops.iter().take(count).copied().collect());
    }
    Ok((0..count)
        .map(|i| gradient.at(i as f64 / (count - 1) as f64))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("red").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::parse("green").unwrap().to_hex(), "#008000");
        assert_eq!(Color::parse("#F00").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::parse("rgb(0, 0, 255)").unwrap(), Color::new(0, 0, 255));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Color::parse("notacolor"),
            Err(GgscaleError::InvalidColor(_))
        ));
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn test_serde_hex() {
        let json = serde_json::to_string(&Color::new(18, 52, 86)).unwrap();
        assert_eq!(json, "\"#123456\"");
        let back: Color = serde_json::from_str("\"#123456\"").unwrap();
        assert_eq!(back, Color::new(18, 52, 86));
    }

    #[test]
    fn test_srgb_roundtrip() {
        let c = Color::new(10, 200, 99);
        assert_eq!(Color::from_srgb(c.to_srgb()), c);
    }

    #[test]
    fn test_gradient_endpoints() {
        let g = Gradient::from_css(&["red", "blue"], ColorSpace::Oklab).unwrap();
        assert_eq!(g.at(0.0).to_hex(), "#ff0000");
        assert_eq!(g.at(1.0).to_hex(), "#0000ff");
        // Clamped outside [0, 1]
        assert_eq!(g.at(-3.0), g.at(0.0));
        assert_eq!(g.at(7.0), g.at(1.0));
    }

    #[test]
    fn test_gradient_middle_stop() {
        let g = Gradient::from_css(&["red", "white", "blue"], ColorSpace::Oklab).unwrap();
        assert_eq!(g.at(0.5).to_hex(), "#ffffff");
    }

    #[test]
    fn test_gradient_single_stop() {
        let g = Gradient::from_css(&["coral"], ColorSpace::LinearRgb).unwrap();
        assert_eq!(g.at(0.3), g.at(0.9));
    }

    #[test]
    fn test_gradient_requires_stops() {
        assert!(Gradient::new(vec![], ColorSpace::Oklab).is_err());
    }

    #[test]
    fn test_default_gradient_matches_stops() {
        let g = Gradient::default();
        let css = Gradient::from_css(DEFAULT_GRADIENT_STOPS, ColorSpace::Oklab).unwrap();
        assert_eq!(g, css);
        assert_eq!(g.at(0.0).to_hex(), "#440154");
        assert_eq!(g.at(1.0).to_hex(), "#fde725");
    }

    #[test]
    fn test_oklab_vs_linear_rgb_red_cyan() {
        let oklab = interpolate_colors(&["red", "cyan"], 5, ColorSpace::Oklab).unwrap();
        let linear = interpolate_colors(&["red", "cyan"], 5, ColorSpace::LinearRgb).unwrap();
        assert_eq!(oklab[0], linear[0]);
        assert_eq!(oklab[4], linear[4]);
        assert_ne!(oklab[2], linear[2]);
    }

    #[test]
    fn test_interpolate_counts() {
        assert!(interpolate_colors(&["red", "blue"], 0, ColorSpace::Oklab)
            .unwrap()
            .is_empty());
        assert_eq!(
            interpolate_colors(&["red", "blue"], 1, ColorSpace::Oklab).unwrap(),
            vec![Color::new(255, 0, 0)]
        );
        assert!(interpolate_colors(&[], 3, ColorSpace::Oklab).is_err());
    }

    #[test]
    fn test_gradient_deserialization_checks_stops() {
        let g: Gradient = serde_json::from_str(r##"{"stops": ["#000000", "#ffffff"]}"##).unwrap();
        assert_eq!(g.stops().len(), 2);
        assert_eq!(g.at(0.0), Color::new(0, 0, 0));
        assert!(serde_json::from_str::<Gradient>(r#"{"stops": []}"#).is_err());
    }
}
