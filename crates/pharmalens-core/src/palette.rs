//! Therapeutic-area color palette.
//!
//! Each area gets a hue evenly spaced around the hue circle at fixed
//! lightness and saturation, so palettes are deterministic for a given
//! area list and visually distinct for any reasonable area count.

use std::collections::BTreeMap;

const LIGHTNESS: f64 = 0.8;
const SATURATION: f64 = 0.7;

/// Fallback when there are no areas to spread hues across.
const NEUTRAL: &str = "#cccccc";

/// Convert HLS to RGB.
///
/// Hue wraps around the circle; lightness and saturation are in [0, 1].
/// Returns channels in [0, 1].
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + 1.0 / 3.0),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// Hex color for the `index`-th of `total` areas.
///
/// Channels scale to [0, 255] by truncation, not rounding, so the output
/// is stable across platforms for identical (index, total) inputs.
pub fn area_color(index: usize, total: usize) -> String {
    if total == 0 {
        return NEUTRAL.to_string();
    }
    let h = index as f64 / total as f64;
    let (r, g, b) = hls_to_rgb(h, LIGHTNESS, SATURATION);
    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8
    )
}

/// Map each area, in order, to its generated color.
pub fn default_palette(areas: &[String]) -> BTreeMap<String, String> {
    areas
        .iter()
        .enumerate()
        .map(|(i, area)| (area.clone(), area_color(i, areas.len())))
        .collect()
}
