use tally_core::GenreStore;

use super::genre::report;

pub fn show_statistics(store: &GenreStore) {
    match store.get_statistics() {
        Ok(stats) => print!("\n{}", stats),
        Err(e) => report(&e),
    }
}
