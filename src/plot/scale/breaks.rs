//! Break calculation algorithms for scales
//!
//! Provides tick optimisation: choosing a small set of human-friendly round
//! numbers that cover a numeric range. Used for continuous colour legends and
//! shared with anything else that needs axis-style ticks.

/// Default number of breaks
pub const DEFAULT_BREAK_COUNT: usize = 5;

/// Nice step multipliers, most preferred first
const NICE_STEPS: [f64; 6] = [1.0, 5.0, 2.0, 2.5, 4.0, 3.0];

/// Weights for simplicity, coverage, density and legibility
const WEIGHTS: [f64; 4] = [0.25, 0.2, 0.5, 0.05];

const EPS: f64 = 1e-10;

/// Ranges whose decimal exponent lies beyond this are searched rescaled
const RESCALE_EXPONENT: i32 = 20;

/// Upper bound on the step exponents tried for one step multiplier
const MAX_EXPONENT_STEPS: i32 = 64;

/// Result of tick optimisation
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    /// Tick values in ascending order
    pub ticks: Vec<f64>,
    /// Lower bound of the view range (never above the data minimum)
    pub viewmin: f64,
    /// Upper bound of the view range (never below the data maximum)
    pub viewmax: f64,
}

/// Pick nice tick values covering `[min, max]`.
///
/// Implements the extended Wilkinson search (Talbot, Lin and Hanrahan): every
/// candidate step `j * q * 10^z` is scored on simplicity, coverage and density,
/// and the best sequence whose ends cover the data is returned. The search is
/// deterministic for identical inputs.
///
/// A degenerate range (`min == max`) yields the single tick `min` with a view
/// range widened by one on each side.
pub fn optimize_ticks(min: f64, max: f64) -> Ticks {
    optimize_ticks_with_count(min, max, DEFAULT_BREAK_COUNT)
}

/// Like [`optimize_ticks`] with an explicit target tick count.
pub fn optimize_ticks_with_count(min: f64, max: f64, target: usize) -> Ticks {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    if !min.is_finite() || !max.is_finite() || max - min < EPS * min.abs().max(1.0) {
        return Ticks {
            ticks: vec![min],
            viewmin: min - 1.0,
            viewmax: min + 1.0,
        };
    }

    let target = target.max(2);
    // Squared distances overflow on very wide ranges, so search in units of
    // the range's order of magnitude and scale the ticks back afterwards
    let exponent = span_exponent(min, max);
    let factor = if exponent.abs() > RESCALE_EXPONENT {
        10f64.powi(exponent.clamp(-300, 300))
    } else {
        1.0
    };
    let ticks = match extended_search(min / factor, max / factor, target) {
        Some(best) => best
            .materialize()
            .into_iter()
            .map(|t| t * factor)
            .map(|t| match t {
                t if t.is_finite() => t,
                t if t > 0.0 => max,
                _ => min,
            })
            .collect(),
        None => vec![min, max],
    };

    let first = ticks.first().copied().unwrap_or(min);
    let last = ticks.last().copied().unwrap_or(max);
    Ticks {
        viewmin: first.min(min),
        viewmax: last.max(max),
        ticks,
    }
}

/// Decimal exponent of `max - min`, computed without overflowing
fn span_exponent(min: f64, max: f64) -> i32 {
    let half = max / 2.0 - min / 2.0;
    (half.log10() + 2f64.log10()).floor() as i32
}

/// A scored tick sequence: `count` ticks starting at `start * unit`
#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: f64,
    step: f64,
    count: usize,
    /// Number of decimal places needed to represent every tick exactly
    digits: i32,
}

impl Candidate {
    fn materialize(&self) -> Vec<f64> {
        let scale = 10f64.powi(self.digits.max(0));
        (0..self.count)
            .map(|i| {
                let v = self.start + self.step * i as f64;
                // Remove accumulated float noise (0.30000000000000004 -> 0.3)
                let v = (v * scale).round() / scale;
                if v == 0.0 {
                    0.0
                } else {
                    v
                }
            })
            .collect()
    }
}

fn extended_search(dmin: f64, dmax: f64, m: usize) -> Option<Candidate> {
    let n = NICE_STEPS.len() as f64;
    let [w_simplicity, w_coverage, w_density, w_legibility] = WEIGHTS;

    let mut best_score = -2.0;
    let mut best = None;

    let mut j = 1usize;
    'skip: loop {
        for (qi, &q) in NICE_STEPS.iter().enumerate() {
            let sm = 1.0 - qi as f64 / (n - 1.0) - j as f64 + 1.0;
            let upper = w_simplicity * sm + w_coverage + w_density + w_legibility;
            if cannot_improve(upper, best_score) {
                break 'skip;
            }

            let mut k = 2usize;
            loop {
                let dm = density_max(k, m);
                let upper = w_simplicity * sm + w_coverage + w_density * dm + w_legibility;
                if cannot_improve(upper, best_score) {
                    break;
                }

                let delta = (dmax - dmin) / (k + 1) as f64 / j as f64 / q;
                let z_start = delta.log10().ceil() as i32;
                for z in z_start..z_start.saturating_add(MAX_EXPONENT_STEPS) {
                    let step = j as f64 * q * 10f64.powi(z);
                    let cm = coverage_max(dmin, dmax, step * (k - 1) as f64);
                    let upper = w_simplicity * sm + w_coverage * cm + w_density * dm + w_legibility;
                    if cannot_improve(upper, best_score) {
                        break;
                    }

                    let min_start = ((dmax / step).floor() as i64) * j as i64
                        - (k as i64 - 1) * j as i64;
                    let max_start = ((dmin / step).ceil() as i64) * j as i64;

                    for start in min_start..=max_start {
                        let lmin = start as f64 * (step / j as f64);
                        let lmax = lmin + step * (k - 1) as f64;
                        // Ticks must cover the data
                        if lmin > dmin + EPS * step || lmax < dmax - EPS * step {
                            continue;
                        }

                        let s = simplicity(qi, j, lmin, lmax, step);
                        let c = coverage(dmin, dmax, lmin, lmax);
                        let g = density(k, m, dmin, dmax, lmin, lmax);
                        let score = w_simplicity * s
                            + w_coverage * c
                            + w_density * g
                            + w_legibility;

                        if score > best_score {
                            best_score = score;
                            best = Some(Candidate {
                                start: lmin,
                                step,
                                count: k,
                                digits: 1i32.saturating_sub(z),
                            });
                        }
                    }
                }
                k += 1;
            }
        }
        j += 1;
    }

    best
}

/// True when no candidate under `bound` can beat `best`. A NaN bound means
/// the scores are no longer comparable, so the search stops.
fn cannot_improve(bound: f64, best: f64) -> bool {
    bound.is_nan() || bound < best
}

fn simplicity(qi: usize, j: usize, lmin: f64, lmax: f64, step: f64) -> f64 {
    let n = NICE_STEPS.len() as f64;
    let remainder = lmin.rem_euclid(step);
    let has_zero =
        (remainder < EPS * step || step - remainder < EPS * step) && lmin <= 0.0 && lmax >= 0.0;
    let v = if has_zero { 1.0 } else { 0.0 };
    1.0 - qi as f64 / (n - 1.0) - j as f64 + v
}

fn coverage(dmin: f64, dmax: f64, lmin: f64, lmax: f64) -> f64 {
    let range = dmax - dmin;
    1.0 - 0.5 * ((dmax - lmax).powi(2) + (dmin - lmin).powi(2)) / (0.1 * range).powi(2)
}

fn coverage_max(dmin: f64, dmax: f64, span: f64) -> f64 {
    let range = dmax - dmin;
    if span > range {
        let half = (span - range) / 2.0;
        1.0 - 0.5 * (2.0 * half * half) / (0.1 * range).powi(2)
    } else {
        1.0
    }
}

fn density(k: usize, m: usize, dmin: f64, dmax: f64, lmin: f64, lmax: f64) -> f64 {
    let r = (k - 1) as f64 / (lmax - lmin);
    let rt = (m - 1) as f64 / (lmax.max(dmax) - dmin.min(lmin));
    2.0 - (r / rt).max(rt / r)
}

fn density_max(k: usize, m: usize) -> f64 {
    if k >= m {
        2.0 - (k - 1) as f64 / (m - 1) as f64
    } else {
        1.0
    }
}
