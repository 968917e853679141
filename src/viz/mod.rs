//! Visualization utilities: render the two-country comparison to **SVG** or **PNG**.
//!
//! - One line per selected country, legend `"<country> GDP"`, slot colors blue/green
//! - Categorical X axis over rows in their given order, short US date tick labels
//! - Locale-aware Y tick labels, scaled to millions/billions/trillions for large magnitudes
//! - Missing values are skipped; the line connects the neighbouring observations

pub mod text;
pub mod util;

use crate::format::{format_date, map_locale};
use crate::models::SeriesRow;
use crate::selection::CountryPair;
use anyhow::{Result, anyhow};
use num_format::{Locale, ToFormattedString};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use text::truncate_to_width;
use util::{
    AXIS_COLOR, GRID_COLOR, TICK_COLOR, choose_axis_scale, compute_left_label_area_px,
    slot_color, y_tick_label,
};

pub const DEFAULT_TITLE: &str = "GDP Comparison";

/// One-time registration for a "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        if plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            epaint_default_fonts::UBUNTU_LIGHT,
        )
        .is_err()
        {
            log::warn!("could not register chart font; labels may be missing");
        }
    });
}

/// The (x, y) points of one country's line: row index vs. value, gaps skipped.
pub fn series_points(rows: &[SeriesRow], country: &str) -> Vec<(f64, f64)> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, r)| r.get(country).map(|v| (i as f64, v)))
        .collect()
}

/// Convenience: plot with the default title and English number formatting.
pub fn plot_rows<P: AsRef<Path>>(
    rows: &[SeriesRow],
    pair: &CountryPair,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    plot_rows_locale(rows, pair, out_path, width, height, "en", DEFAULT_TITLE)
}

/// Render `rows` for the two countries of `pair`. The backend follows the file
/// extension: `.svg` → SVG, anything else → PNG.
pub fn plot_rows_locale<P: AsRef<Path>>(
    rows: &[SeriesRow],
    pair: &CountryPair,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
    title: &str,
) -> Result<()> {
    if rows.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    let values: Vec<f64> = rows
        .iter()
        .flat_map(|r| pair.as_slice().iter().filter_map(move |c| r.get(c)))
        .collect();
    if values.is_empty() {
        return Err(anyhow!("no numeric values to plot"));
    }
    let (mut min_val, mut max_val) = (
        values.iter().cloned().fold(f64::INFINITY, f64::min),
        values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    );
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }

    ensure_fonts_registered();
    let (num_locale, _dec_sep) = map_locale(locale_tag);
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let range = ValueRange { min_val, max_val };

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, rows, pair, range, num_locale, title)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, rows, pair, range, num_locale, title)?;
    }
    log::info!("wrote chart with {} rows to {}", rows.len(), out_path.display());
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct ValueRange {
    min_val: f64,
    max_val: f64,
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    rows: &[SeriesRow],
    pair: &CountryPair,
    range: ValueRange,
    num_locale: &Locale,
    title: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: u32 = 20;
    const Y_TICKS: usize = 10;
    const X_TICKS: usize = 12;

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let max_abs = range.min_val.abs().max(range.max_val.abs());
    let (yscale, scale_word) = choose_axis_scale(max_abs);
    let y_axis_title = if scale_word.is_empty() {
        "GDP".to_string()
    } else {
        format!("GDP ({scale_word})")
    };
    let (ymin, ymax) = (range.min_val / yscale, range.max_val / yscale);

    // Categorical X axis: one slot per row, half a slot of padding on each side.
    let n = rows.len();
    let x_min = -0.5f64;
    let x_max = n as f64 - 0.5;
    let date_labels: Vec<String> = rows.iter().map(|r| format_date(&r.date_time)).collect();
    // Only whole positions map to a row; fractional ticks stay blank.
    let x_label_fmt = |x: &f64| {
        let i = x.round();
        if i < 0.0 || (x - i).abs() > 1e-6 {
            return String::new();
        }
        date_labels.get(i as usize).cloned().unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| {
        if yscale == 1.0 && v.abs() >= 1000.0 {
            (v.round() as i64).to_formatted_string(num_locale)
        } else {
            y_tick_label(*v)
        }
    };

    let left_px = compute_left_label_area_px(ymin, ymax, Y_TICKS, 14);
    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 64)
        .build_cartesian_2d(x_min..x_max, ymin..ymax)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .y_desc(y_axis_title)
        .x_labels(X_TICKS.min(n.max(1)))
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .light_line_style(GRID_COLOR.mix(0.5))
        .bold_line_style(GRID_COLOR)
        .axis_style(AXIS_COLOR)
        .label_style((FontFamily::SansSerif, 14).into_font().color(&TICK_COLOR))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (idx, country) in pair.as_slice().iter().enumerate() {
        let points: Vec<(f64, f64)> = series_points(rows, country)
            .into_iter()
            .map(|(x, y)| (x, y / yscale))
            .collect();
        if points.is_empty() {
            log::warn!("no observations for {country}; skipping series");
            continue;
        }
        let color = slot_color(idx);
        let style = ShapeStyle {
            color: color.to_rgba(),
            filled: false,
            stroke_width: 2,
        };
        let label = truncate_to_width(&format!("{country} GDP"), 14, 240);
        chart
            .draw_series(LineSeries::new(points, style))
            .map_err(|e| anyhow!("{:?}", e))?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 8, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(AXIS_COLOR)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
