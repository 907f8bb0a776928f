//! Core data layer for genre-tally.
//!
//! This crate owns the genre → listen-count mapping ([`GenreStore`]), keeps
//! it in step with a two-column CSV record on disk, and derives popularity
//! statistics from it.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod normalize;
pub mod record;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
pub use normalize::{normalize_genre, parse_count};
pub use stats::{get_statistics, Share, Statistics};
pub use store::{Change, GenreStore};
