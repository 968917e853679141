//! Utility functions for visualization: slot colors, axis scaling, label gutters.

use plotters::prelude::*;

use super::text::estimate_text_width_px;

/// Stroke colors for the two comparison slots: blue (#3B82F6) and green (#10B981).
pub const SLOT_COLORS: [RGBColor; 2] = [RGBColor(59, 130, 246), RGBColor(16, 185, 129)];

/// Grid lines (#E5E7EB), axis strokes (#9CA3AF) and tick text (#6B7280).
pub const GRID_COLOR: RGBColor = RGBColor(229, 231, 235);
pub const AXIS_COLOR: RGBColor = RGBColor(156, 163, 175);
pub const TICK_COLOR: RGBColor = RGBColor(107, 114, 128);

#[inline]
pub fn slot_color(idx: usize) -> RGBColor {
    SLOT_COLORS[idx % SLOT_COLORS.len()]
}

/// Pick a single Y-axis scale and its human label based on the overall magnitude.
/// Returns (scale, label), e.g. (1e6, "millions").
pub fn choose_axis_scale(max_abs: f64) -> (f64, &'static str) {
    if max_abs >= 1.0e12 {
        (1.0e12, "trillions")
    } else if max_abs >= 1.0e9 {
        (1.0e9, "billions")
    } else if max_abs >= 1.0e6 {
        (1.0e6, "millions")
    } else {
        (1.0, "")
    }
}

/// Y tick text for an already scaled value: fewer decimals for larger magnitudes.
pub fn y_tick_label(v: f64) -> String {
    let a = v.abs();
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    format!("{:.*}", prec, v)
}

/// Compute a tight left label area width for the Y axis (in pixels),
/// based on the formatted tick labels that will appear.
/// - `ymin_scaled..ymax_scaled`: the **scaled** Y range you pass to Plotters
/// - `ticks`: how many Y labels you plan to show (e.g., 10)
/// - `font_px`: font size used for axis labels (e.g., 12)
///
/// Returns a width clamped to a sensible range to avoid extremes.
pub fn compute_left_label_area_px(
    ymin_scaled: f64,
    ymax_scaled: f64,
    ticks: usize,
    font_px: u32,
) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let v = ymin_scaled + (ymax_scaled - ymin_scaled) * t;
        max_px = max_px.max(estimate_text_width_px(&y_tick_label(v), font_px));
    }

    // Room for tick marks and the rotated axis title.
    let with_padding = max_px.saturating_add(34);
    with_padding.clamp(48, 160)
}
