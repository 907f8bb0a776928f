//! Genre-name normalization and count coercion applied at mutation time.

use crate::error::{Error, Result};

/// Trim a raw genre name and convert it to title case.
///
/// An alphabetic character directly after another alphabetic character is
/// lower-cased; every other alphabetic character is upper-cased. So
/// `"  hip-hop "` becomes `"Hip-Hop"` and `"r&b"` becomes `"R&B"`.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_genre(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut after_letter = false;
    for ch in trimmed.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    Some(out)
}

/// Coerce a textual count into an integer.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// Anything else, including the empty string, is [`Error::InvalidCount`].
pub fn parse_count(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidCount(raw.to_string()))
}
