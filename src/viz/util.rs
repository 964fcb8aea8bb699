//! Drawing helpers: the layered green ramp and HSL conversion.

use plotters::style::RGBAColor;

/// Fill color for the overview layer at `depth` in draw order: a green
/// ramp that desaturates and lightens step by step so the stacked
/// silhouettes stay distinguishable.
pub fn layer_green(depth: usize) -> RGBAColor {
    let step = (depth + 1) as f64;
    hsla(
        125.0,
        ((100.0 - step) / 100.0).clamp(0.0, 1.0),
        ((step * 5.0) / 100.0).clamp(0.0, 0.95),
        0.9,
    )
}

/// Fill for the detail-view silhouette.
pub fn detail_fill() -> RGBAColor {
    hsla(125.0, 0.6, 0.35, 0.9)
}

/// Stroke for the temperature line.
pub fn aux_stroke() -> RGBAColor {
    hsla(210.0, 0.7, 0.45, 1.0)
}

/// Convert HSL(A), hue in degrees, to an RGBA color.
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> RGBAColor {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    RGBAColor(
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
        a,
    )
}
