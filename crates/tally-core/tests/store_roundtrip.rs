//! Integration tests for the store's persistence round-trip.
//!
//! Each test works against a real record file in a scratch directory.

use tally_core::{Error, GenreStore};
use tempfile::TempDir;

/// A saved store reloads into an identical map
#[test]
fn test_save_then_fresh_load_reproduces_map() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("genres.csv");

    let mut store = GenreStore::open(&path);
    store.add_listens("Pop", 500).unwrap();
    store.add_listens("rock", 350).unwrap();
    store.add_listens("hip-hop", 600).unwrap();
    store.add_listens("Pop", 150).unwrap();

    let reloaded = GenreStore::open(&path);
    let before: Vec<(&str, i64)> = store.iter().collect();
    let after: Vec<(&str, i64)> = reloaded.iter().collect();
    assert_eq!(before, after);
    assert_eq!(after, vec![("Pop", 650), ("Rock", 350), ("Hip-Hop", 600)]);
}

/// Externally edited keys load as-is and only match once normalized
#[test]
fn test_unnormalized_keys_survive_until_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("genres.csv");
    std::fs::write(&path, "Genre,Listens\nrock,10\n").unwrap();

    let mut store = GenreStore::open(&path);
    assert_eq!(store.get("rock"), Some(10));

    store.add_listens("rock", 5).unwrap();
    assert_eq!(store.get("rock"), Some(10));
    assert_eq!(store.get("Rock"), Some(5));

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Genre,Listens\nrock,10\nRock,5\n");

    // The unnormalized key cannot be targeted by delete.
    assert!(matches!(store.delete_genre("rock"), Ok(5)));
    assert!(matches!(store.delete_genre("rock"), Err(Error::NotFound(_))));
    assert_eq!(store.get("rock"), Some(10));
}

/// An invalid count leaves the record file untouched
#[test]
fn test_invalid_count_does_not_touch_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("genres.csv");

    let mut store = GenreStore::open(&path);
    store.add_listens("Pop", 650).unwrap();
    let before = std::fs::read(&path).unwrap();
    let mtime = std::fs::metadata(&path).unwrap().modified().unwrap();

    assert!(matches!(
        store.add_genre("sahil", ""),
        Err(Error::InvalidCount(_))
    ));
    assert!(matches!(
        store.add_genre("Pop", "ten"),
        Err(Error::InvalidCount(_))
    ));

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), mtime);
    assert_eq!(store.get("Pop"), Some(650));
    assert_eq!(store.get("Sahil"), None);
}

/// Deleting a missing genre leaves map and record unchanged
#[test]
fn test_delete_missing_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("genres.csv");

    let mut store = GenreStore::open(&path);
    store.add_listens("Classical", 200).unwrap();
    let before = std::fs::read(&path).unwrap();

    for _ in 0..2 {
        assert!(matches!(
            store.delete_genre("sahil"),
            Err(Error::NotFound(_))
        ));
    }

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(store.len(), 1);
}

/// The sample session replayed by `tally demo`
#[test]
fn test_sample_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("genres.csv");

    let mut store = GenreStore::open(&path);
    for (name, count) in [
        ("Pop", "500"),
        ("Rock", "350"),
        ("Jazz", "150"),
        ("Hip-Hop", "600"),
        ("Classical", "200"),
        ("Pop", "150"),
        ("Folk", "50"),
        ("Electronic", "300"),
    ] {
        store.add_genre(name, count).unwrap();
    }
    assert!(store.delete_genre("sahil").is_err());
    assert!(store.add_genre("sahil", "").is_err());

    let stats = store.get_statistics().unwrap();
    assert_eq!(stats.total, 2300);
    assert_eq!(stats.genre_count, 7);
    assert_eq!(stats.most_popular, ("Pop".to_string(), 650));
    assert_eq!(stats.least_popular, ("Folk".to_string(), 50));

    let reloaded = GenreStore::open(&path);
    assert_eq!(reloaded.len(), 7);
    assert_eq!(reloaded.get("Electronic"), Some(300));
}
