//! Cyclic colormap and value normalization.

use crate::analysis::GridStats;
use image::Rgb;

/// Number of entries in the lookup table.
pub const LUT_SIZE: usize = 512;

/// Keyframes approximating the `twilight_shifted` cyclic map: dark purple at
/// both ends, blue rising to near-white at the middle, then orange/red.
const TWILIGHT_SHIFTED: [(f64, [u8; 3]); 9] = [
    (0.000, [47, 20, 54]),
    (0.125, [95, 61, 151]),
    (0.250, [96, 125, 196]),
    (0.375, [154, 181, 211]),
    (0.500, [226, 217, 226]),
    (0.625, [206, 155, 135]),
    (0.750, [177, 81, 71]),
    (0.875, [116, 33, 80]),
    (1.000, [47, 20, 54]),
];

/// Lookup-table colormap over `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Colormap {
    lut: Vec<Rgb<u8>>,
}

impl Colormap {
    pub fn twilight_shifted() -> Self {
        Self::from_keyframes(&TWILIGHT_SHIFTED, LUT_SIZE)
    }

    /// Linear interpolation between sorted keyframes, sampled into `size` entries.
    pub fn from_keyframes(keyframes: &[(f64, [u8; 3])], size: usize) -> Self {
        let size = size.max(2);
        let lut = (0..size)
            .map(|i| interpolate(keyframes, i as f64 / (size - 1) as f64))
            .collect();
        Self { lut }
    }

    /// Color for `t` in `[0, 1]`; out-of-range values are clamped.
    pub fn map(&self, t: f64) -> Rgb<u8> {
        let n = self.lut.len();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let index = ((t * n as f64) as usize).min(n - 1);
        self.lut[index]
    }
}

fn interpolate(keyframes: &[(f64, [u8; 3])], t: f64) -> Rgb<u8> {
    let Some(&(_, first)) = keyframes.first() else {
        return Rgb([0, 0, 0]);
    };
    let mut prev = (keyframes[0].0, first);
    for &(pos, color) in keyframes {
        if t <= pos {
            let span = pos - prev.0;
            let f = if span > 0.0 { (t - prev.0) / span } else { 0.0 };
            let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
            return Rgb([
                lerp(prev.1[0], color[0]),
                lerp(prev.1[1], color[1]),
                lerp(prev.1[2], color[2]),
            ]);
        }
        prev = (pos, color);
    }
    Rgb(prev.1)
}

/// Linear map from the grid's value range onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn from_stats(stats: &GridStats) -> Self {
        Self {
            vmin: stats.min as f64,
            vmax: stats.max as f64,
        }
    }

    /// A constant grid maps every value to 0.
    pub fn apply(&self, value: i32) -> f64 {
        let range = self.vmax - self.vmin;
        if range <= 0.0 {
            return 0.0;
        }
        (value as f64 - self.vmin) / range
    }
}
