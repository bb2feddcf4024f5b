//! Color helpers.

use covstat_common::{CovstatError, Result};
use plotters::style::RGBColor;

/// Control points of the viridis ramp, dark to light.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Parse a `#rrggbb` color.
pub fn parse_color(color: &str) -> Result<RGBColor> {
    let invalid = || CovstatError::graph(format!("Invalid hex color '{color}'"));
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Map `t` in `[0, 1]` onto the viridis ramp. Values outside are clamped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - index as f64;

    let (a, b) = (VIRIDIS[index], VIRIDIS[index + 1]);
    let lerp = |x: u8, y: u8| (f64::from(y) - f64::from(x)).mul_add(frac, f64::from(x)).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Position of `value` between `min` and `max`, 0 when the range is empty.
pub fn normalize(value: i64, min: i64, max: i64) -> f64 {
    if max <= min {
        0.0
    } else {
        (value - min) as f64 / (max - min) as f64
    }
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text_color(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luminance = 0.114f64.mul_add(f64::from(b), 0.299f64.mul_add(f64::from(r), 0.587 * f64::from(g)));
    if luminance > 140.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}
