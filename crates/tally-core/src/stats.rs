//! Popularity statistics derived from a [`GenreStore`].
//!
//! Everything here is a pure read over the store; nothing is persisted.

use std::fmt;

use crate::error::{Error, Result};
use crate::store::GenreStore;

/// A genre's share of all listens.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub genre: String,
    pub listens: i64,
    /// Percentage of the total, or `None` when the total is zero.
    pub percent: Option<f64>,
}

/// Summary statistics over every tracked genre.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Sum of all counts, widened so any number of `i64` counts fits.
    pub total: i128,
    pub genre_count: usize,
    pub average: f64,
    /// First genre in insertion order with the highest count.
    pub most_popular: (String, i64),
    /// First genre in insertion order with the lowest count.
    pub least_popular: (String, i64),
    /// One entry per genre, in insertion order.
    pub shares: Vec<Share>,
}

/// Compute statistics for `store`.
///
/// Returns [`Error::NoData`] for an empty store without computing anything.
#[allow(clippy::cast_precision_loss)]
pub fn get_statistics(store: &GenreStore) -> Result<Statistics> {
    let mut entries = store.iter();
    let Some(first) = entries.next() else {
        return Err(Error::NoData);
    };

    let mut total = i128::from(first.1);
    let mut most = first;
    let mut least = first;
    for entry in entries {
        total += i128::from(entry.1);
        // Strict comparisons keep the earliest genre on ties.
        if entry.1 > most.1 {
            most = entry;
        }
        if entry.1 < least.1 {
            least = entry;
        }
    }

    let genre_count = store.len();
    let shares = store
        .iter()
        .map(|(genre, listens)| Share {
            genre: genre.to_string(),
            listens,
            percent: (total != 0).then(|| listens as f64 / total as f64 * 100.0),
        })
        .collect();

    Ok(Statistics {
        total,
        genre_count,
        average: total as f64 / genre_count as f64,
        most_popular: (most.0.to_string(), most.1),
        least_popular: (least.0.to_string(), least.1),
        shares,
    })
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(40);
        writeln!(f, "{rule}")?;
        writeln!(f, " MUSIC POPULARITY STATISTICS")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total Listens: {}", self.total)?;
        writeln!(f, "Number of Genres: {}", self.genre_count)?;
        writeln!(f, "Average Listens/Genre: {:.2}", self.average)?;
        writeln!(
            f,
            "Most Popular Genre: {} ({} listens)",
            self.most_popular.0, self.most_popular.1
        )?;
        writeln!(
            f,
            "Least Popular Genre: {} ({} listens)",
            self.least_popular.0, self.least_popular.1
        )?;
        writeln!(f, "{}", "-".repeat(40))?;
        writeln!(f, "Percentage Share:")?;
        for share in &self.shares {
            match share.percent {
                Some(percent) => writeln!(f, "  {}: {:.1}%", share.genre, percent)?,
                None => writeln!(f, "  {}: n/a", share.genre)?,
            }
        }
        writeln!(f, "{rule}")
    }
}
