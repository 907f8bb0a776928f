//! SVG layout for the genre bar chart.
//!
//! Bars are drawn in the order given, genre names along the x axis (rotated
//! 45°) and listen counts up the y axis.

use std::fmt::{self, Write as _};

use crate::error::{ChartError, ChartResult};
use crate::ChartOptions;

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 150.0;
const BAR_FILL: f64 = 0.7;
const BAR_COLOR: &str = "#87ceeb";
const GRID_COLOR: &str = "#e0e0e0";

pub const X_LABEL: &str = "Genre";
pub const Y_LABEL: &str = "Listening Count";

/// Build the SVG document for `entries`.
pub fn bar_chart_svg(entries: &[(&str, i64)], options: &ChartOptions) -> ChartResult<String> {
    let mut out = String::new();
    write_chart(&mut out, entries, options)
        .map_err(|e| ChartError::Render(format!("SVG layout failed: {e}")))?;
    Ok(out)
}

#[allow(clippy::cast_precision_loss)]
fn write_chart(out: &mut String, entries: &[(&str, i64)], options: &ChartOptions) -> fmt::Result {
    let width = f64::from(options.width);
    let height = f64::from(options.height);
    let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let baseline = MARGIN_TOP + plot_h;

    let peak = entries.iter().map(|&(_, listens)| listens.max(0)).max().unwrap_or(0);
    let step = tick_step(peak);
    // Round the axis up to a whole tick; counts too close to i64::MAX use the peak as-is.
    let axis_max = peak
        .checked_add(step - 1)
        .and_then(|v| (v / step).max(1).checked_mul(step))
        .unwrap_or(peak);
    let scale = |value: i64| plot_h * value as f64 / axis_max as f64;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = options.width,
        h = options.height,
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="32" text-anchor="middle" font-size="20">{}</text>"#,
        width / 2.0,
        escape(&options.title)
    )?;

    // Grid and y ticks
    let mut tick = 0;
    while tick <= axis_max {
        let y = baseline - scale(tick);
        writeln!(
            out,
            r#"<line x1="{MARGIN_LEFT:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{GRID_COLOR}"/>"#,
            MARGIN_LEFT + plot_w,
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{tick}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
        )?;
        let Some(next) = tick.checked_add(step) else {
            break;
        };
        tick = next;
    }

    let slot = plot_w / entries.len().max(1) as f64;
    let bar_w = slot * BAR_FILL;
    for (i, &(genre, listens)) in entries.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0;
        let bar_h = scale(listens.max(0));
        let genre = escape(genre);
        writeln!(
            out,
            r#"<rect data-genre="{genre}" x="{x:.1}" y="{:.1}" width="{bar_w:.1}" height="{bar_h:.1}" fill="{BAR_COLOR}"/>"#,
            baseline - bar_h,
        )?;
        writeln!(
            out,
            r#"<text transform="translate({:.1},{:.1}) rotate(-45)" text-anchor="end" font-size="12">{genre}</text>"#,
            x + bar_w / 2.0,
            baseline + 14.0,
        )?;
    }

    // Axes
    writeln!(
        out,
        r#"<line x1="{MARGIN_LEFT:.1}" y1="{MARGIN_TOP:.1}" x2="{MARGIN_LEFT:.1}" y2="{baseline:.1}" stroke="black"/>"#
    )?;
    writeln!(
        out,
        r#"<line x1="{MARGIN_LEFT:.1}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w,
    )?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{X_LABEL}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        height - 16.0,
    )?;
    writeln!(
        out,
        r#"<text transform="translate(24,{:.1}) rotate(-90)" text-anchor="middle" font-size="14">{Y_LABEL}</text>"#,
        MARGIN_TOP + plot_h / 2.0,
    )?;
    writeln!(out, "</svg>")
}

/// Pick a round tick interval giving about five ticks up to `peak`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn tick_step(peak: i64) -> i64 {
    let raw = peak as f64 / 5.0;
    if raw <= 1.0 {
        return 1;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let nice = match raw / magnitude {
        n if n <= 1.0 => 1.0,
        n if n <= 2.0 => 2.0,
        n if n <= 5.0 => 5.0,
        _ => 10.0,
    };
    (nice * magnitude) as i64
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
