use tally_chart::ChartOptions;
use tally_core::GenreStore;

use super::{add_genre, delete_genre, plot_chart, show_data, show_statistics};

/// Genre additions replayed by `tally demo`, in order.
const SAMPLE_ADDS: &[(&str, &str)] = &[
    ("Pop", "500"),
    ("Rock", "350"),
    ("Jazz", "150"),
    ("Hip-Hop", "600"),
    ("Classical", "200"),
    ("Pop", "150"),
    ("Folk", "50"),
    ("Electronic", "300"),
];

/// Walk through every store operation, including the failure paths.
pub fn run_demo(store: &mut GenreStore, chart: &ChartOptions) {
    log::info!("Running sample session against {}", store.path().display());

    for &(genre, count) in SAMPLE_ADDS {
        add_genre(store, genre, count);
    }

    // Not tracked: reported, nothing saved.
    delete_genre(store, "sahil");

    show_data(store);
    show_statistics(store);
    plot_chart(store, chart);

    // Not an integer: reported, nothing saved.
    add_genre(store, "sahil", "");
}
