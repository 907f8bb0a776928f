//! End-to-end chart export against a real store.

#![cfg(feature = "raster")]

use tally_chart::{plot_bar_chart, ChartOptions};
use tally_core::GenreStore;
use tempfile::TempDir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn sample_store(dir: &TempDir) -> GenreStore {
    let mut store = GenreStore::open(dir.path().join("genres.csv"));
    for (name, count) in [("Pop", 650), ("Rock", 350), ("Jazz", 150), ("Folk", 50)] {
        store.add_listens(name, count).unwrap();
    }
    store
}

/// A non-empty store produces a PNG at the requested path
#[test]
fn test_chart_written_as_png() {
    let temp_dir = TempDir::new().unwrap();
    let store = sample_store(&temp_dir);
    let options = ChartOptions::default().with_path(temp_dir.path().join("popularity.png"));

    let written = plot_bar_chart(&store, &options).unwrap();
    assert_eq!(written, options.path);

    let bytes = std::fs::read(&written).unwrap();
    assert!(bytes.len() > PNG_SIGNATURE.len());
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}

/// An existing file at the chart path is replaced
#[test]
fn test_chart_overwrites_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = sample_store(&temp_dir);
    let path = temp_dir.path().join("popularity.png");
    std::fs::write(&path, b"stale").unwrap();

    plot_bar_chart(&store, &ChartOptions::default().with_path(&path)).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}

/// Charting never touches the record
#[test]
fn test_chart_does_not_save_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = sample_store(&temp_dir);
    let before = std::fs::read(store.path()).unwrap();

    let options = ChartOptions::default().with_path(temp_dir.path().join("chart.png"));
    plot_bar_chart(&store, &options).unwrap();
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

/// A chart path in a missing directory is a soft failure
#[test]
fn test_unwritable_path_is_soft_failure() {
    let temp_dir = TempDir::new().unwrap();
    let store = sample_store(&temp_dir);
    let options =
        ChartOptions::default().with_path(temp_dir.path().join("missing").join("chart.png"));

    let err = plot_bar_chart(&store, &options).unwrap_err();
    assert!(err.is_soft());
}

/// Counts at the edge of the integer range still chart
#[test]
fn test_extreme_count_still_charts() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = GenreStore::open(temp_dir.path().join("genres.csv"));
    store.add_listens("Pop", i64::MAX).unwrap();
    store.add_listens("Rock", 1).unwrap();
    let options = ChartOptions::default().with_path(temp_dir.path().join("chart.png"));

    let written = plot_bar_chart(&store, &options).unwrap();
    let bytes = std::fs::read(&written).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}
