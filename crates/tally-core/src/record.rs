//! The persistent record: a two-column CSV table of genre names and counts.
//!
//! ```text
//! Genre,Listens
//! Pop,650
//! Rock,350
//! ```
//!
//! The first row is always treated as the header and discarded on read.
//! Writes replace the whole file.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};

/// Header row written at the top of every record.
pub const HEADER: [&str; 2] = ["Genre", "Listens"];

#[derive(Debug, Serialize)]
struct GenreRow<'a> {
    name: &'a str,
    listens: i64,
}

/// Read a record file into an ordered genre → count map.
///
/// Names are trimmed but not otherwise normalized. A repeated name keeps its
/// first position and takes the later count. The map is only returned when
/// every data row parsed, so a bad row never yields partial state.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened (including when it
/// does not exist) and [`Error::Malformed`] for a row that does not have
/// exactly two fields, has an empty name, or has a non-integer count.
pub fn read_record(path: &Path) -> Result<IndexMap<String, i64>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut scratch = IndexMap::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, |pos| pos.line());

        if row.len() != 2 {
            return Err(Error::Malformed {
                line,
                reason: format!("expected 2 fields, found {}", row.len()),
            });
        }

        let name = &row[0];
        if name.is_empty() {
            return Err(Error::Malformed {
                line,
                reason: String::from("empty genre name"),
            });
        }

        let listens = row[1].parse::<i64>().map_err(|_| Error::Malformed {
            line,
            reason: format!("invalid listen count {:?}", &row[1]),
        })?;

        scratch.insert(name.to_string(), listens);
    }

    Ok(scratch)
}

/// Overwrite `path` with the header followed by one row per entry.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a write or the final
/// flush fails. The file handle is released on every path.
pub fn write_record<'a, I>(path: &Path, entries: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(HEADER)?;
    for (name, listens) in entries {
        writer.serialize(GenreRow { name, listens })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("genres.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_skips_header_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Genre,Listens\nRock,350\nPop,650\nJazz,150\n");

        let map = read_record(&path).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Rock", "Pop", "Jazz"]);
        assert_eq!(map["Pop"], 650);
    }

    #[test]
    fn test_read_discards_first_row_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Metal,10\nPop,650\n");

        let map = read_record(&path).unwrap();
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("Metal"));
    }

    #[test]
    fn test_read_trims_without_title_casing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Genre,Listens\n  hip-hop  , 600 \n");

        let map = read_record(&path).unwrap();
        assert_eq!(map.get("hip-hop"), Some(&600));
    }

    #[test]
    fn test_read_duplicate_keeps_first_position_last_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Genre,Listens\nPop,1\nRock,2\nPop,3\n");

        let map = read_record(&path).unwrap();
        assert_eq!(map.get_index(0), Some((&"Pop".to_string(), &3)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_read_ignores_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Genre,Listens\n\nPop,5\n\n");

        assert_eq!(read_record(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_read_rejects_wrong_field_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Genre,Listens\nPop,5\nRock,1,2\n");

        match read_record(&path) {
            Err(Error::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_rejects_non_integer_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Genre,Listens\nPop,lots\n");

        assert!(matches!(
            read_record(&path),
            Err(Error::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "Genre,Listens\n ,5\n");

        assert!(matches!(read_record(&path), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_record(&dir.path().join("absent.csv")).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_empty_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genres.csv");

        write_record(&path, std::iter::empty()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Genre,Listens\n");
    }

    #[test]
    fn test_write_quotes_awkward_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genres.csv");

        write_record(&path, [("Folk, Indie", 4), ("Pop", 9)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Genre,Listens\n\"Folk, Indie\",4\nPop,9\n");

        let map = read_record(&path).unwrap();
        assert_eq!(map.get("Folk, Indie"), Some(&4));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("genres.csv");

        assert!(matches!(
            write_record(&path, [("Pop", 1)]),
            Err(Error::Io(_))
        ));
    }
}
