//! The genre store: an ordered genre → listen-count map kept in step with a
//! CSV record on disk.
//!
//! Every successful mutation is written through to the record immediately.
//! A failed write is reported but the in-memory change is kept, so memory and
//! disk may diverge until the next successful save.
//!
//! # Example
//!
//! ```no_run
//! use tally_core::GenreStore;
//!
//! let mut store = GenreStore::open("genres.csv");
//! store.add_genre("pop", "500").unwrap();
//! store.add_listens("Pop", 150).unwrap();
//! assert_eq!(store.get("Pop"), Some(650));
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::normalize::{normalize_genre, parse_count};
use crate::record;
use crate::stats::{self, Statistics};

/// The outcome of a successful [`GenreStore::add_genre`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A genre that was not tracked before.
    Added { genre: String, listens: i64 },
    /// An existing genre whose count was increased by `added`.
    Updated {
        genre: String,
        added: i64,
        total: i64,
    },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { genre, listens } => {
                write!(f, "Added new genre '{}' with {} listens.", genre, listens)
            }
            Self::Updated {
                genre,
                added,
                total,
            } => write!(
                f,
                "Updated '{}': +{} listens. New total: {}",
                genre, added, total
            ),
        }
    }
}

/// Genre listen counts backed by a CSV record.
#[derive(Debug)]
pub struct GenreStore {
    path: PathBuf,
    data: IndexMap<String, i64>,
    load_error: Option<Error>,
}

impl GenreStore {
    /// Create a store for the record at `path` and load it.
    ///
    /// A missing record gives an empty store. A malformed record is logged,
    /// kept in [`load_error`](Self::load_error), and also gives an empty
    /// store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            data: IndexMap::new(),
            load_error: None,
        };
        if let Err(e) = store.load() {
            log::error!("Error loading {}: {}", store.path.display(), e);
            store.load_error = Some(e);
        }
        log::info!(
            "Initialized. Loaded {} genres from {}",
            store.data.len(),
            store.path.display()
        );
        store
    }

    /// Replace the in-memory map with the contents of the record.
    ///
    /// Returns the number of genres loaded. A missing record loads as empty.
    /// On any other failure the current map is left as it was.
    pub fn load(&mut self) -> Result<usize> {
        match record::read_record(&self.path) {
            Ok(data) => {
                self.data = data;
                self.load_error = None;
                log::debug!(
                    "Loaded {} genres from {}",
                    self.data.len(),
                    self.path.display()
                );
                Ok(self.data.len())
            }
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No record at {}, starting empty", self.path.display());
                self.data.clear();
                self.load_error = None;
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    /// Write the full map to the record, replacing its previous contents.
    pub fn save(&self) -> Result<()> {
        record::write_record(&self.path, self.iter())?;
        log::info!(
            "Data saved successfully to {} ({} genres)",
            self.path.display(),
            self.data.len()
        );
        Ok(())
    }

    /// Add `count` listens to `name`, coercing the count from text first.
    ///
    /// The name is trimmed and title-cased. A count that is not an integer
    /// is rejected before anything changes.
    pub fn add_genre(&mut self, name: &str, count: &str) -> Result<Change> {
        let count = parse_count(count)?;
        self.add_listens(name, count)
    }

    /// Add `count` listens to `name`, inserting the genre if it is new.
    ///
    /// Counts accumulate; negative counts are accepted as given. A total that
    /// would not fit in an `i64` is [`Error::Overflow`] and nothing changes.
    /// The record is saved afterwards, and a save failure comes back as
    /// [`Error::Persist`] with the in-memory change already applied.
    pub fn add_listens(&mut self, name: &str, count: i64) -> Result<Change> {
        let genre = normalize_genre(name).ok_or(Error::EmptyName)?;

        let change = if let Some(listens) = self.data.get_mut(&genre) {
            let Some(total) = listens.checked_add(count) else {
                return Err(Error::Overflow {
                    genre,
                    added: count,
                });
            };
            *listens = total;
            Change::Updated {
                total: *listens,
                genre,
                added: count,
            }
        } else {
            self.data.insert(genre.clone(), count);
            Change::Added {
                genre,
                listens: count,
            }
        };
        log::debug!("{}", change);

        self.write_through()?;
        Ok(change)
    }

    /// Remove `name` and save. Returns the count the genre had.
    ///
    /// Deleting a genre that is not tracked is [`Error::NotFound`] and leaves
    /// both the map and the record untouched.
    pub fn delete_genre(&mut self, name: &str) -> Result<i64> {
        let genre = normalize_genre(name).ok_or(Error::EmptyName)?;

        let Some(listens) = self.data.shift_remove(&genre) else {
            log::debug!("Genre '{}' not found, nothing to delete", genre);
            return Err(Error::NotFound(genre));
        };
        log::debug!("Genre '{}' deleted ({} listens)", genre, listens);

        self.write_through()?;
        Ok(listens)
    }

    fn write_through(&self) -> Result<()> {
        self.save().map_err(|e| Error::Persist {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }

    /// Popularity statistics over the current map.
    pub fn get_statistics(&self) -> Result<Statistics> {
        stats::get_statistics(self)
    }

    /// Path of the backing record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The error from the load performed by [`open`](Self::open), if any.
    pub fn load_error(&self) -> Option<&Error> {
        self.load_error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Count for an exact (already normalized) genre name.
    pub fn get(&self, genre: &str) -> Option<i64> {
        self.data.get(genre).copied()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.data.iter().map(|(name, &listens)| (name.as_str(), listens))
    }

    /// Entries sorted by listens, highest first. Equal counts keep insertion
    /// order.
    pub fn ranked(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<(&str, i64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// A printable snapshot of the current data.
    pub fn display_current_data(&self) -> CurrentData<'_> {
        CurrentData(self)
    }
}

/// Display adapter returned by [`GenreStore::display_current_data`].
#[derive(Debug)]
pub struct CurrentData<'a>(&'a GenreStore);

impl fmt::Display for CurrentData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Current Data: (Empty)");
        }
        writeln!(f, "--- Current Data ---")?;
        for (genre, listens) in self.0.iter() {
            writeln!(f, "  {}: {}", genre, listens)?;
        }
        writeln!(f, "--------------------")
    }
}
