use tally_core::{normalize_genre, Error, GenreStore};

/// Add listens and report the outcome.
pub fn add_genre(store: &mut GenreStore, genre: &str, count: &str) {
    match store.add_genre(genre, count) {
        Ok(change) => println!("{}", change),
        Err(e) => report(&e),
    }
}

/// Delete a genre and report the outcome.
pub fn delete_genre(store: &mut GenreStore, genre: &str) {
    match store.delete_genre(genre) {
        Ok(listens) => println!(
            "Genre '{}' deleted ({} listens).",
            normalize_genre(genre).unwrap_or_default(),
            listens
        ),
        Err(e) => report(&e),
    }
}

pub fn show_data(store: &GenreStore) {
    print!("{}", store.display_current_data());
}

pub(crate) fn report(error: &Error) {
    match error {
        Error::NotFound(_) | Error::NoData => log::warn!("{}", error),
        Error::Persist { .. } => {
            log::error!("{}", error);
            log::error!("In-memory data kept; the record on disk is out of date");
        }
        _ => log::error!("{}", error),
    }
}
