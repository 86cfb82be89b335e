//! Genre lists and their comma-joined storage encoding.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Separator used when a genre list is written to a single text column.
pub const GENRE_SEPARATOR: char = ',';

/// Genres a venue or artist may be tagged with.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Ordered list of genre names.
///
/// Stored as one text column joined by [`GENRE_SEPARATOR`]. A name that
/// itself contains the separator does not survive the round trip, which is
/// why form validation only admits entries of [`GENRE_CHOICES`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Wraps a list of genre names as given.
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Decodes the stored column. An empty column yields an empty list.
    #[must_use]
    pub fn from_stored(stored: &str) -> Self {
        if stored.is_empty() {
            return Self::default();
        }
        Self(stored.split(GENRE_SEPARATOR).map(str::to_string).collect())
    }

    /// Encodes the list for storage.
    #[must_use]
    pub fn to_stored(&self) -> String {
        self.0.join(&GENRE_SEPARATOR.to_string())
    }

    /// Borrows the genre names.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` when no genre is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the list, returning the names.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(names: &[&str]) -> Genres {
        Genres::new(names.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn join_uses_commas() {
        assert_eq!(genres(&["Jazz", "Reggae"]).to_stored(), "Jazz,Reggae");
    }

    #[test]
    fn comma_free_lists_round_trip() {
        for names in [
            &["Jazz", "Reggae", "Classical", "Folk"][..],
            &["Rock n Roll"][..],
            &["R&B", "Hip-Hop"][..],
        ] {
            let original = genres(names);
            assert_eq!(Genres::from_stored(&original.to_stored()), original);
        }
    }

    #[test]
    fn empty_column_is_empty_list() {
        assert!(Genres::from_stored("").is_empty());
        assert_eq!(Genres::default().to_stored(), "");
    }

    #[test]
    fn embedded_comma_is_lossy() {
        let original = genres(&["Folk, Acoustic"]);
        assert_eq!(Genres::from_stored(&original.to_stored()).as_slice().len(), 2);
    }

    #[test]
    fn choices_contain_no_separator() {
        assert!(GENRE_CHOICES.iter().all(|g| !g.contains(GENRE_SEPARATOR)));
    }
}
