//! Chart export error types.

use thiserror::Error;

/// Errors that can occur while producing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The store has no genres to draw.
    #[error("no data available to chart")]
    NoData,

    /// The crate was built without a rendering backend.
    #[error("chart rendering unavailable: built without the `raster` feature")]
    Unavailable,

    /// The chart could not be rasterized or encoded.
    #[error("chart rendering failed: {0}")]
    Render(String),

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Returns `true` for failures that skip the chart but should not stop
    /// the caller.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::Unavailable | Self::Render(_) | Self::Io(_))
    }
}

/// Convenience alias for chart results.
pub type ChartResult<T> = std::result::Result<T, ChartError>;
