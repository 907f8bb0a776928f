pub mod chart;
pub mod config;
pub mod demo;
pub mod genre;
pub mod stats;

use anyhow::{Context, Result};
use tally_core::GenreStore;

use crate::config::Config;

pub use chart::plot_chart;
pub use config::{init_config, show_config, show_example, show_path};
pub use demo::run_demo;
pub use genre::{add_genre, delete_genre, show_data};
pub use stats::show_statistics;

/// Open the store named by the config for reading. Nothing is created.
pub fn open_store(config: &Config) -> GenreStore {
    GenreStore::open(&config.record_path)
}

/// Open the store for commands that write, creating the record's directory.
pub fn open_store_for_update(config: &Config) -> Result<GenreStore> {
    if let Some(parent) = config.record_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create record directory {}", parent.display())
            })?;
        }
    }
    Ok(open_store(config))
}
