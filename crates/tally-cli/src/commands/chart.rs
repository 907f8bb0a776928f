use tally_chart::{plot_bar_chart, ChartError, ChartOptions};
use tally_core::GenreStore;

/// Draw the chart; every failure is reported and skipped.
pub fn plot_chart(store: &GenreStore, options: &ChartOptions) {
    match plot_bar_chart(store, options) {
        Ok(path) => println!("\nChart generated and saved as '{}'.", path.display()),
        Err(ChartError::NoData) => log::warn!("Cannot generate chart: no data available"),
        Err(e) if e.is_soft() => log::warn!("Chart generation skipped: {}", e),
        Err(e) => log::error!("Error generating chart: {}", e),
    }
}
