//! Persistence layer: the booking store and its backends.
//!
//! [`BookingStore`] is the data-store handle threaded through the service.
//! [`postgres::PostgresStore`] uses `sqlx::PgPool` for async PostgreSQL
//! access; [`memory::MemoryStore`] keeps the same tables in process.
//!
//! Ordering is deterministic across backends: venues and artists by
//! `(name, id)` with names compared byte-wise (`COLLATE "C"` in SQL), shows
//! by `(start_time, id)`.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    Artist, ArtistDraft, ArtistId, ArtistListing, ArtistShow, ArtistSummary, ShowDraft, ShowId,
    ShowListing, Venue, VenueDraft, VenueId, VenueOverview, VenueShow,
};
use crate::error::BookingError;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Storage operations behind every query and command.
///
/// Each method is a single statement (or a single lock acquisition for the
/// in-memory backend); nothing spans several calls.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug {
    /// Inserts a venue, returning its generated key.
    async fn insert_venue(&self, draft: &VenueDraft) -> Result<VenueId, BookingError>;

    /// Overwrites every column of a venue. Returns `false` if absent.
    async fn update_venue(&self, id: VenueId, draft: &VenueDraft) -> Result<bool, BookingError>;

    /// Deletes a venue, returning the deleted name, or `None` if absent.
    /// Shows referencing the venue are left in place.
    async fn delete_venue(&self, id: VenueId) -> Result<Option<String>, BookingError>;

    /// Point lookup of a venue.
    async fn get_venue(&self, id: VenueId) -> Result<Option<Venue>, BookingError>;

    /// Scans venues with their upcoming show count, optionally keeping only
    /// names containing `name_filter` (case-insensitive).
    async fn venue_summaries(
        &self,
        name_filter: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueOverview>, BookingError>;

    /// Shows hosted by a venue, joined with their artists.
    async fn venue_shows(&self, id: VenueId) -> Result<Vec<VenueShow>, BookingError>;

    /// Returns `true` if the venue exists.
    async fn venue_exists(&self, id: VenueId) -> Result<bool, BookingError>;

    /// Inserts an artist, returning its generated key.
    async fn insert_artist(&self, draft: &ArtistDraft) -> Result<ArtistId, BookingError>;

    /// Overwrites every column of an artist. Returns `false` if absent.
    async fn update_artist(&self, id: ArtistId, draft: &ArtistDraft)
    -> Result<bool, BookingError>;

    /// Point lookup of an artist.
    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>, BookingError>;

    /// Artist analog of [`BookingStore::venue_summaries`].
    async fn artist_summaries(
        &self,
        name_filter: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistSummary>, BookingError>;

    /// Shows played by an artist, joined with their venues.
    async fn artist_shows(&self, id: ArtistId) -> Result<Vec<ArtistShow>, BookingError>;

    /// Every artist's key and name.
    async fn list_artists(&self) -> Result<Vec<ArtistListing>, BookingError>;

    /// Returns `true` if the artist exists.
    async fn artist_exists(&self, id: ArtistId) -> Result<bool, BookingError>;

    /// Inserts a show, returning its generated key. Does not check that the
    /// venue and artist exist.
    async fn insert_show(&self, draft: &ShowDraft) -> Result<ShowId, BookingError>;

    /// Every show joined with its venue and artist.
    async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError>;
}

/// Escapes `LIKE` wildcards so `term` matches literally inside a pattern.
#[must_use]
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_quotes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Hop"), "Hop");
    }
}
