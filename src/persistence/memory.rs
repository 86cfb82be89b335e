//! In-process booking store.
//!
//! [`MemoryStore`] keeps the three tables in `BTreeMap`s behind one
//! [`tokio::sync::RwLock`]. Keys are handed out from per-table counters,
//! mirroring `BIGSERIAL`. Used by the test suite and by
//! `STORE_BACKEND=memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::BookingStore;
use crate::domain::show::is_upcoming;
use crate::domain::{
    Artist, ArtistDraft, ArtistId, ArtistListing, ArtistShow, ArtistSummary, Show, ShowDraft,
    ShowId, ShowListing, Venue, VenueDraft, VenueId, VenueOverview, VenueShow,
};
use crate::error::BookingError;

#[derive(Debug, Default)]
struct Tables {
    venues: BTreeMap<VenueId, Venue>,
    artists: BTreeMap<ArtistId, Artist>,
    shows: BTreeMap<ShowId, Show>,
    last_venue_id: i64,
    last_artist_id: i64,
    last_show_id: i64,
}

impl Tables {
    /// Shows ordered by `(start_time, id)`.
    fn shows_by_start(&self) -> Vec<&Show> {
        let mut shows: Vec<&Show> = self.shows.values().collect();
        shows.sort_by_key(|show| (show.start_time, show.id));
        shows
    }

    fn upcoming_count<F>(&self, now: &DateTime<Utc>, belongs: F) -> i64
    where
        F: Fn(&Show) -> bool,
    {
        let count = self
            .shows
            .values()
            .filter(|show| belongs(show) && is_upcoming(&show.start_time, now))
            .count();
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

fn name_matches(name: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| name.to_lowercase().contains(needle))
}

/// Booking store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn insert_venue(&self, draft: &VenueDraft) -> Result<VenueId, BookingError> {
        let mut tables = self.tables.write().await;
        tables.last_venue_id += 1;
        let id = VenueId::new(tables.last_venue_id);
        tables.venues.insert(id, draft.clone().into_venue(id));
        Ok(id)
    }

    async fn update_venue(&self, id: VenueId, draft: &VenueDraft) -> Result<bool, BookingError> {
        let mut tables = self.tables.write().await;
        let Some(venue) = tables.venues.get_mut(&id) else {
            return Ok(false);
        };
        *venue = draft.clone().into_venue(id);
        Ok(true)
    }

    async fn delete_venue(&self, id: VenueId) -> Result<Option<String>, BookingError> {
        let mut tables = self.tables.write().await;
        Ok(tables.venues.remove(&id).map(|venue| venue.name))
    }

    async fn get_venue(&self, id: VenueId) -> Result<Option<Venue>, BookingError> {
        let tables = self.tables.read().await;
        Ok(tables.venues.get(&id).cloned())
    }

    async fn venue_summaries(
        &self,
        name_filter: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueOverview>, BookingError> {
        let tables = self.tables.read().await;
        let needle = name_filter.map(str::to_lowercase);
        let mut rows: Vec<VenueOverview> = tables
            .venues
            .values()
            .filter(|venue| name_matches(&venue.name, needle.as_deref()))
            .map(|venue| VenueOverview {
                id: venue.id,
                name: venue.name.clone(),
                city: venue.city.clone(),
                state: venue.state.clone(),
                num_upcoming_shows: tables.upcoming_count(&now, |show| show.venue_id == venue.id),
            })
            .collect();
        rows.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(rows)
    }

    async fn venue_shows(&self, id: VenueId) -> Result<Vec<VenueShow>, BookingError> {
        let tables = self.tables.read().await;
        let rows = tables
            .shows_by_start()
            .into_iter()
            .filter(|show| show.venue_id == id)
            .filter_map(|show| {
                // Inner join: shows whose artist is missing are skipped.
                let artist = tables.artists.get(&show.artist_id)?;
                Some(VenueShow {
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        Ok(rows)
    }

    async fn venue_exists(&self, id: VenueId) -> Result<bool, BookingError> {
        Ok(self.tables.read().await.venues.contains_key(&id))
    }

    async fn insert_artist(&self, draft: &ArtistDraft) -> Result<ArtistId, BookingError> {
        let mut tables = self.tables.write().await;
        tables.last_artist_id += 1;
        let id = ArtistId::new(tables.last_artist_id);
        tables.artists.insert(id, draft.clone().into_artist(id));
        Ok(id)
    }

    async fn update_artist(
        &self,
        id: ArtistId,
        draft: &ArtistDraft,
    ) -> Result<bool, BookingError> {
        let mut tables = self.tables.write().await;
        let Some(artist) = tables.artists.get_mut(&id) else {
            return Ok(false);
        };
        *artist = draft.clone().into_artist(id);
        Ok(true)
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>, BookingError> {
        let tables = self.tables.read().await;
        Ok(tables.artists.get(&id).cloned())
    }

    async fn artist_summaries(
        &self,
        name_filter: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistSummary>, BookingError> {
        let tables = self.tables.read().await;
        let needle = name_filter.map(str::to_lowercase);
        let mut rows: Vec<ArtistSummary> = tables
            .artists
            .values()
            .filter(|artist| name_matches(&artist.name, needle.as_deref()))
            .map(|artist| ArtistSummary {
                id: artist.id,
                name: artist.name.clone(),
                num_upcoming_shows: tables
                    .upcoming_count(&now, |show| show.artist_id == artist.id),
            })
            .collect();
        rows.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(rows)
    }

    async fn artist_shows(&self, id: ArtistId) -> Result<Vec<ArtistShow>, BookingError> {
        let tables = self.tables.read().await;
        let rows = tables
            .shows_by_start()
            .into_iter()
            .filter(|show| show.artist_id == id)
            .map(|show| {
                let venue = tables.venues.get(&show.venue_id);
                ArtistShow {
                    venue_id: show.venue_id,
                    venue_name: venue.map(|v| v.name.clone()),
                    venue_image_link: venue.and_then(|v| v.image_link.clone()),
                    start_time: show.start_time,
                }
            })
            .collect();
        Ok(rows)
    }

    async fn list_artists(&self) -> Result<Vec<ArtistListing>, BookingError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<ArtistListing> = tables
            .artists
            .values()
            .map(|artist| ArtistListing {
                id: artist.id,
                name: artist.name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(rows)
    }

    async fn artist_exists(&self, id: ArtistId) -> Result<bool, BookingError> {
        Ok(self.tables.read().await.artists.contains_key(&id))
    }

    async fn insert_show(&self, draft: &ShowDraft) -> Result<ShowId, BookingError> {
        let mut tables = self.tables.write().await;
        // Mirrors the foreign key on shows.artist_id; venue_id has none.
        if !tables.artists.contains_key(&draft.artist_id) {
            return Err(BookingError::ConstraintViolation(format!(
                "artist {} does not exist",
                draft.artist_id
            )));
        }
        tables.last_show_id += 1;
        let id = ShowId::new(tables.last_show_id);
        tables.shows.insert(
            id,
            Show {
                id,
                venue_id: draft.venue_id,
                artist_id: draft.artist_id,
                start_time: draft.start_time,
            },
        );
        Ok(id)
    }

    async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError> {
        let tables = self.tables.read().await;
        let rows = tables
            .shows_by_start()
            .into_iter()
            .filter_map(|show| {
                let artist = tables.artists.get(&show.artist_id)?;
                Some(ShowListing {
                    venue_id: show.venue_id,
                    venue_name: tables.venues.get(&show.venue_id).map(|v| v.name.clone()),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        Ok(rows)
    }
}
