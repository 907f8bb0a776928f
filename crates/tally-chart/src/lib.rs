//! Bar-chart export for genre-tally.
//!
//! Draws every genre in a [`GenreStore`], most listened first, and writes the
//! chart as a PNG to a fixed path, replacing any earlier chart there.
//! Rasterization needs the `raster` feature (on by default); without it
//! [`plot_bar_chart`] fails softly with [`ChartError::Unavailable`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
#[cfg(feature = "raster")]
mod raster;
pub mod svg;

use std::path::PathBuf;

use tally_core::GenreStore;

pub use error::{ChartError, ChartResult};

/// Default output path, relative to the working directory.
pub const DEFAULT_CHART_PATH: &str = "popularity.png";

/// Where and how large to draw the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CHART_PATH),
            width: 1000,
            height: 600,
            title: String::from("Genre Popularity by Listening Count"),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

/// Render the store as a bar chart at `options.path`.
///
/// Returns the path written. An empty store is [`ChartError::NoData`] and no
/// file is produced.
pub fn plot_bar_chart(store: &GenreStore, options: &ChartOptions) -> ChartResult<PathBuf> {
    if store.is_empty() {
        log::warn!("Cannot generate chart: no data available");
        return Err(ChartError::NoData);
    }

    let ranked = store.ranked();
    let markup = svg::bar_chart_svg(&ranked, options)?;
    render(&markup, options)?;

    log::info!(
        "Chart of {} genres saved as {}",
        ranked.len(),
        options.path.display()
    );
    Ok(options.path.clone())
}

#[cfg(feature = "raster")]
fn render(markup: &str, options: &ChartOptions) -> ChartResult<()> {
    raster::write_png(markup, options.width, options.height, &options.path)
}

#[cfg(not(feature = "raster"))]
fn render(_markup: &str, _options: &ChartOptions) -> ChartResult<()> {
    log::warn!("Chart generation skipped: built without the `raster` feature");
    Err(ChartError::Unavailable)
}
