//! Palette synthesis for discrete colour scales
//!
//! Colours are chosen greedily: each new colour is the candidate whose
//! smallest CIEDE2000 distance to the colours already picked is largest.
//! Distances are measured after a partial deuteranopia simulation so that
//! red/green pairs, which look alike to many readers, are penalised.

use palette::color_difference::Ciede2000;
use palette::{FromColor, Lab, Lch, LinSrgb, Srgb};
use serde::{Deserialize, Serialize};

use super::colour::Color;

/// Default seed colour, LCh(70, 60, 240): a medium blue
pub const DEFAULT_SEED: (f32, f32, f32) = (70.0, 60.0, 240.0);

/// Viénot et al. deuteranope projection in linear RGB
const DEUTERANOPE: [[f32; 3]; 3] = [
    [0.29275, 0.70725, 0.0],
    [0.29275, 0.70725, 0.0],
    [-0.02234, 0.02234, 1.0],
];

/// Search space for [`distinguishable_colors`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    pub lightness: Vec<f32>,
    pub chroma: Vec<f32>,
    pub hues: Vec<f32>,
    /// Strength of the deuteranopia simulation, 0 (off) to 1 (full)
    pub deuteranopia: f32,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            lightness: vec![65.0, 70.0, 75.0, 80.0],
            chroma: vec![0.0, 50.0, 60.0, 70.0],
            hues: (0..24).map(|i| i as f32 * 330.0 / 23.0).collect(),
            deuteranopia: 0.5,
        }
    }
}

impl PaletteOptions {
    /// Every grid point converted to a displayable colour
    fn candidates(&self) -> Vec<Color> {
        let mut out = Vec::with_capacity(self.lightness.len() * self.chroma.len() * self.hues.len());
        for &l in &self.lightness {
            for &c in &self.chroma {
                for &h in &self.hues {
                    out.push(lch_to_color(l, c, h));
                }
            }
        }
        out
    }
}

/// Convert LCh coordinates to the nearest in-gamut sRGB colour
pub fn lch_to_color(l: f32, c: f32, h: f32) -> Color {
    let lch: Lch = Lch::new(l, c, h);
    Color::from_srgb(Srgb::from_color(lch))
}

/// Simulate deuteranopia at strength `p` in `[0, 1]`
pub fn deuteranopic(color: Color, p: f32) -> Color {
    let lin = LinSrgb::from(color.to_srgb());
    let rgb = [lin.red, lin.green, lin.blue];
    let sim: Vec<f32> = DEUTERANOPE
        .iter()
        .zip(rgb)
        .map(|(row, own)| {
            let projected = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
            (1.0 - p) * own + p * projected
        })
        .collect();
    Color::from_srgb(Srgb::from(LinSrgb::new(sim[0], sim[1], sim[2])))
}

fn to_lab(color: Color, p: f32) -> Lab {
    let seen = if p > 0.0 { deuteranopic(color, p) } else { color };
    Lab::from_color(LinSrgb::from(seen.to_srgb()))
}

/// Pick `n` mutually distinguishable colours, starting from `seed`.
///
/// Seed colours are returned first and unchanged. When `n` does not exceed
/// the seed count the seed prefix is returned. The result is a pure function
/// of the arguments.
pub fn distinguishable_colors(n: usize, seed: &[Color], options: &PaletteOptions) -> Vec<Color> {
    if n <= seed.len() {
        return seed[..n].to_vec();
    }

    let p = options.deuteranopia;
    let candidates = options.candidates();
    let candidate_labs: Vec<Lab> = candidates.iter().map(|&c| to_lab(c, p)).collect();

    let mut colors = seed.to_vec();
    // Distance from each candidate to its nearest already-chosen colour
    let mut nearest: Vec<f32> = candidate_labs
        .iter()
        .map(|&lab| {
            seed.iter()
                .map(|&s| lab.difference(to_lab(s, p)))
                .fold(f32::INFINITY, f32::min)
        })
        .collect();

    while colors.len() < n {
        let pick = nearest
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f32)>, (i, &d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((i, d)),
            });
        let Some((index, _)) = pick else {
            break;
        };

        let chosen = candidate_labs[index];
        colors.push(candidates[index]);
        for (dist, &lab) in nearest.iter_mut().zip(&candidate_labs) {
            *dist = dist.min(lab.difference(chosen));
        }
    }

    colors
}

/// Default hue palette: `n` colours seeded with a medium blue
pub fn default_discrete_colors(n: usize) -> Vec<Color> {
    let (l, c, h) = DEFAULT_SEED;
    distinguishable_colors(n, &[lch_to_color(l, c, h)], &PaletteOptions::default())
}

/// Manual palette: the given colours, extended by the same search if short
pub fn manual_discrete_colors(n: usize, colors: &[Color]) -> Vec<Color> {
    if colors.is_empty() {
        return default_discrete_colors(n);
    }
    distinguishable_colors(n, colors, &PaletteOptions::default())
}
