use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("count must be a valid integer, got {0:?}")]
    InvalidCount(String),

    #[error("adding {added} listens to '{genre}' overflows its count")]
    Overflow { genre: String, added: i64 },

    #[error("genre name must not be empty")]
    EmptyName,

    #[error("genre '{0}' not found")]
    NotFound(String),

    #[error("no data available")]
    NoData,

    #[error("failed to save {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns `true` when the error left the in-memory mapping changed
    /// but the record on disk stale.
    pub fn is_divergent(&self) -> bool {
        matches!(self, Self::Persist { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
