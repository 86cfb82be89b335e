//! Booking service: the queries and commands behind every page.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::show::partition_by_start;
use crate::domain::{
    Artist, ArtistDetail, ArtistDraft, ArtistId, ArtistListing, ArtistSummary, CityGroup,
    SearchResults, ShowDraft, ShowId, ShowListing, Venue, VenueDetail, VenueDraft, VenueId,
    VenueSummary,
};
use crate::error::BookingError;
use crate::persistence::BookingStore;

/// Query/command layer over a [`BookingStore`].
///
/// Stateless coordinator: every call is one unit of work against the
/// injected store. "Upcoming" and "past" are judged against the clock at
/// the start of each call.
#[derive(Debug, Clone)]
pub struct BookingService {
    store: Arc<dyn BookingStore>,
}

impl BookingService {
    /// Creates a new `BookingService`.
    #[must_use]
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    // ── Venues ──────────────────────────────────────────────────────────

    /// Lists venues grouped by `(city, state)`, each with its upcoming show
    /// count. Groups are ordered by city then state, venues by name.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] if the store cannot be read.
    pub async fn list_venues_grouped_by_city(&self) -> Result<Vec<CityGroup>, BookingError> {
        let overviews = self.store.venue_summaries(None, Self::now()).await?;

        let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
        for overview in overviews {
            let key = (overview.city.clone(), overview.state.clone());
            areas.entry(key).or_default().push(overview.into());
        }

        Ok(areas
            .into_iter()
            .map(|((city, state), venues)| CityGroup {
                city,
                state,
                venues,
            })
            .collect())
    }

    /// Case-insensitive substring search on venue names. An empty term
    /// matches every venue.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] if the store cannot be read.
    pub async fn search_venues(
        &self,
        term: &str,
    ) -> Result<SearchResults<VenueSummary>, BookingError> {
        let overviews = self.store.venue_summaries(Some(term), Self::now()).await?;
        Ok(SearchResults::new(
            overviews.into_iter().map(VenueSummary::from).collect(),
        ))
    }

    /// Loads one venue.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the venue does not exist.
    pub async fn venue(&self, id: VenueId) -> Result<Venue, BookingError> {
        self.store
            .get_venue(id)
            .await?
            .ok_or(BookingError::venue_not_found(id.get()))
    }

    /// Loads a venue with its past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the venue does not exist.
    pub async fn get_venue_detail(&self, id: VenueId) -> Result<VenueDetail, BookingError> {
        let now = Self::now();
        let venue = self.venue(id).await?;
        let shows = self.store.venue_shows(id).await?;
        let (past_shows, upcoming_shows) = partition_by_start(shows, &now, |s| s.start_time);

        Ok(VenueDetail {
            venue,
            past_shows,
            upcoming_shows,
        })
    }

    /// Lists a new venue.
    ///
    /// # Errors
    ///
    /// Returns a write-failure [`BookingError`] if the insert fails; nothing
    /// is persisted in that case.
    pub async fn create_venue(&self, draft: &VenueDraft) -> Result<VenueId, BookingError> {
        match self.store.insert_venue(draft).await {
            Ok(id) => {
                tracing::info!(venue_id = %id, name = %draft.name, "venue listed");
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(name = %draft.name, error = %e, "venue could not be listed");
                Err(e)
            }
        }
    }

    /// Overwrites every field of a venue.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the venue does not exist, or a
    /// write-failure [`BookingError`] if the update fails.
    pub async fn update_venue(&self, id: VenueId, draft: &VenueDraft) -> Result<(), BookingError> {
        let updated = self.store.update_venue(id, draft).await.inspect_err(|e| {
            tracing::warn!(venue_id = %id, error = %e, "venue could not be edited");
        })?;
        if !updated {
            return Err(BookingError::venue_not_found(id.get()));
        }
        tracing::info!(venue_id = %id, name = %draft.name, "venue edited");
        Ok(())
    }

    /// Deletes a venue and returns its name.
    ///
    /// Shows booked at the venue are not removed and keep pointing at the
    /// deleted key.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the venue does not exist, or a
    /// write-failure [`BookingError`] if the delete fails.
    pub async fn delete_venue(&self, id: VenueId) -> Result<String, BookingError> {
        let deleted = self.store.delete_venue(id).await.inspect_err(|e| {
            tracing::warn!(venue_id = %id, error = %e, "venue could not be deleted");
        })?;
        let name = deleted.ok_or(BookingError::venue_not_found(id.get()))?;
        tracing::info!(venue_id = %id, name = %name, "venue deleted");
        Ok(name)
    }

    // ── Artists ─────────────────────────────────────────────────────────

    /// Lists every artist's key and name, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] if the store cannot be read.
    pub async fn list_artists(&self) -> Result<Vec<ArtistListing>, BookingError> {
        self.store.list_artists().await
    }

    /// Case-insensitive substring search on artist names. An empty term
    /// matches every artist.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] if the store cannot be read.
    pub async fn search_artists(
        &self,
        term: &str,
    ) -> Result<SearchResults<ArtistSummary>, BookingError> {
        let summaries = self.store.artist_summaries(Some(term), Self::now()).await?;
        Ok(SearchResults::new(summaries))
    }

    /// Loads one artist.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the artist does not exist.
    pub async fn artist(&self, id: ArtistId) -> Result<Artist, BookingError> {
        self.store
            .get_artist(id)
            .await?
            .ok_or(BookingError::artist_not_found(id.get()))
    }

    /// Loads an artist with its past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the artist does not exist.
    pub async fn get_artist_detail(&self, id: ArtistId) -> Result<ArtistDetail, BookingError> {
        let now = Self::now();
        let artist = self.artist(id).await?;
        let shows = self.store.artist_shows(id).await?;
        let (past_shows, upcoming_shows) = partition_by_start(shows, &now, |s| s.start_time);

        Ok(ArtistDetail {
            artist,
            past_shows,
            upcoming_shows,
        })
    }

    /// Lists a new artist.
    ///
    /// # Errors
    ///
    /// Returns a write-failure [`BookingError`] if the insert fails.
    pub async fn create_artist(&self, draft: &ArtistDraft) -> Result<ArtistId, BookingError> {
        match self.store.insert_artist(draft).await {
            Ok(id) => {
                tracing::info!(artist_id = %id, name = %draft.name, "artist listed");
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(name = %draft.name, error = %e, "artist could not be listed");
                Err(e)
            }
        }
    }

    /// Overwrites every field of an artist.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the artist does not exist, or a
    /// write-failure [`BookingError`] if the update fails.
    pub async fn update_artist(
        &self,
        id: ArtistId,
        draft: &ArtistDraft,
    ) -> Result<(), BookingError> {
        let updated = self.store.update_artist(id, draft).await.inspect_err(|e| {
            tracing::warn!(artist_id = %id, error = %e, "artist could not be edited");
        })?;
        if !updated {
            return Err(BookingError::artist_not_found(id.get()));
        }
        tracing::info!(artist_id = %id, name = %draft.name, "artist edited");
        Ok(())
    }

    // ── Shows ───────────────────────────────────────────────────────────

    /// Lists every show with its venue and artist, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] if the store cannot be read.
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError> {
        self.store.list_shows().await
    }

    /// Books an artist at a venue.
    ///
    /// The existence checks and the insert are separate round trips.
    /// Overlapping bookings for the same venue or artist are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] without inserting anything if
    /// the venue or the artist does not exist, or a write-failure
    /// [`BookingError`] if the insert fails.
    pub async fn create_show(&self, draft: &ShowDraft) -> Result<ShowId, BookingError> {
        if !self.store.venue_exists(draft.venue_id).await? {
            return Err(BookingError::Validation(format!(
                "venue {} does not exist",
                draft.venue_id
            )));
        }
        if !self.store.artist_exists(draft.artist_id).await? {
            return Err(BookingError::Validation(format!(
                "artist {} does not exist",
                draft.artist_id
            )));
        }

        let id = self.store.insert_show(draft).await.inspect_err(|e| {
            tracing::warn!(
                venue_id = %draft.venue_id,
                artist_id = %draft.artist_id,
                error = %e,
                "show could not be listed"
            );
        })?;
        tracing::info!(
            show_id = %id,
            venue_id = %draft.venue_id,
            artist_id = %draft.artist_id,
            "show listed"
        );
        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::Genres;
    use crate::persistence::MemoryStore;

    fn make_service() -> BookingService {
        BookingService::new(Arc::new(MemoryStore::new()))
    }

    fn genres(names: &[&str]) -> Genres {
        Genres::new(names.iter().map(|s| (*s).to_string()).collect())
    }

    fn venue_draft(name: &str, city: &str, state: &str) -> VenueDraft {
        VenueDraft {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: None,
            genres: genres(&["Jazz", "Reggae"]),
            website: None,
            seeking_talent: true,
            seeking_description: Some("Looking for local jazz acts".to_string()),
        }
    }

    fn artist_draft(name: &str) -> ArtistDraft {
        ArtistDraft {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: genres(&["Rock n Roll"]),
            image_link: Some("https://example.com/guns.jpg".to_string()),
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    async fn create_venue(service: &BookingService, name: &str) -> VenueId {
        let Ok(id) = service
            .create_venue(&venue_draft(name, "San Francisco", "CA"))
            .await
        else {
            panic!("venue creation failed");
        };
        id
    }

    async fn create_artist(service: &BookingService, name: &str) -> ArtistId {
        let Ok(id) = service.create_artist(&artist_draft(name)).await else {
            panic!("artist creation failed");
        };
        id
    }

    async fn book(
        service: &BookingService,
        venue_id: VenueId,
        artist_id: ArtistId,
        offset: Duration,
    ) -> ShowId {
        let draft = ShowDraft {
            venue_id,
            artist_id,
            start_time: Utc::now() + offset,
        };
        let Ok(id) = service.create_show(&draft).await else {
            panic!("show creation failed");
        };
        id
    }

    #[tokio::test]
    async fn new_venue_detail_has_genres_and_no_shows() {
        let service = make_service();
        let id = create_venue(&service, "The Musical Hop").await;

        let Ok(detail) = service.get_venue_detail(id).await else {
            panic!("venue not found");
        };
        assert_eq!(detail.venue.name, "The Musical Hop");
        assert_eq!(detail.venue.city, "San Francisco");
        assert_eq!(detail.venue.state, "CA");
        assert_eq!(detail.venue.genres, genres(&["Jazz", "Reggae"]));
        assert!(detail.past_shows.is_empty());
        assert!(detail.upcoming_shows.is_empty());
    }

    #[tokio::test]
    async fn booking_counts_on_both_sides() {
        let service = make_service();
        let artist = create_artist(&service, "Guns N Petals").await;
        let venue = create_venue(&service, "The Musical Hop").await;
        book(&service, venue, artist, Duration::days(30)).await;

        let Ok(venue_detail) = service.get_venue_detail(venue).await else {
            panic!("venue not found");
        };
        let Ok(artist_detail) = service.get_artist_detail(artist).await else {
            panic!("artist not found");
        };
        assert_eq!(venue_detail.upcoming_shows.len(), 1);
        assert_eq!(venue_detail.past_shows.len(), 0);
        assert_eq!(artist_detail.upcoming_shows.len(), 1);
        let Some(show) = artist_detail.upcoming_shows.first() else {
            panic!("missing show");
        };
        assert_eq!(show.venue_name.as_deref(), Some("The Musical Hop"));
    }

    #[tokio::test]
    async fn past_shows_are_split_from_upcoming() {
        let service = make_service();
        let artist = create_artist(&service, "Matt Quevedo").await;
        let venue = create_venue(&service, "Park Square Live Music & Coffee").await;
        book(&service, venue, artist, -Duration::days(400)).await;
        book(&service, venue, artist, -Duration::days(1)).await;
        book(&service, venue, artist, Duration::days(2)).await;

        let Ok(detail) = service.get_venue_detail(venue).await else {
            panic!("venue not found");
        };
        assert_eq!(detail.past_shows.len(), 2);
        assert_eq!(detail.upcoming_shows.len(), 1);

        let Ok(results) = service.search_venues("park").await else {
            panic!("search failed");
        };
        let Some(hit) = results.data.first() else {
            panic!("missing hit");
        };
        assert_eq!(hit.num_upcoming_shows, 1);
    }

    #[tokio::test]
    async fn venues_group_by_city_and_state() {
        let service = make_service();
        for (name, city, state) in [
            ("The Musical Hop", "San Francisco", "CA"),
            ("The Dueling Pianos Bar", "New York", "NY"),
            ("Park Square Live Music & Coffee", "San Francisco", "CA"),
            ("Portland Pub", "Portland", "OR"),
            ("Portland Hall", "Portland", "ME"),
        ] {
            let _ = service.create_venue(&venue_draft(name, city, state)).await;
        }

        let Ok(groups) = service.list_venues_grouped_by_city().await else {
            panic!("listing failed");
        };
        let keys: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.city.as_str(), g.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("New York", "NY"),
                ("Portland", "ME"),
                ("Portland", "OR"),
                ("San Francisco", "CA"),
            ]
        );
        let Some(sf) = groups.last() else {
            panic!("missing group");
        };
        let names: Vec<&str> = sf.venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);
    }

    #[tokio::test]
    async fn empty_search_matches_everything() {
        let service = make_service();
        for name in ["The Musical Hop", "The Dueling Pianos Bar", "Park Square"] {
            create_venue(&service, name).await;
        }
        create_artist(&service, "Guns N Petals").await;
        create_artist(&service, "The Wild Sax Band").await;

        let Ok(venues) = service.search_venues("").await else {
            panic!("search failed");
        };
        assert_eq!(venues.count, 3);
        assert_eq!(venues.data.len(), 3);

        let Ok(artists) = service.search_artists("").await else {
            panic!("search failed");
        };
        assert_eq!(artists.count, 2);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let service = make_service();
        create_artist(&service, "Guns N Petals").await;
        create_artist(&service, "Matt Quevedo").await;
        create_artist(&service, "The Wild Sax Band").await;

        let Ok(results) = service.search_artists("A").await else {
            panic!("search failed");
        };
        assert_eq!(results.count, 3);

        let Ok(results) = service.search_artists("band").await else {
            panic!("search failed");
        };
        let names: Vec<&str> = results.data.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["The Wild Sax Band"]);
    }

    #[tokio::test]
    async fn create_show_requires_existing_venue_and_artist() {
        let service = make_service();
        let artist = create_artist(&service, "Guns N Petals").await;
        let venue = create_venue(&service, "The Musical Hop").await;

        let missing_venue = ShowDraft {
            venue_id: VenueId::new(99),
            artist_id: artist,
            start_time: Utc::now(),
        };
        let missing_artist = ShowDraft {
            venue_id: venue,
            artist_id: ArtistId::new(99),
            start_time: Utc::now(),
        };
        assert!(matches!(
            service.create_show(&missing_venue).await,
            Err(BookingError::Validation(_))
        ));
        assert!(matches!(
            service.create_show(&missing_artist).await,
            Err(BookingError::Validation(_))
        ));

        let Ok(shows) = service.list_shows().await else {
            panic!("listing failed");
        };
        assert!(shows.is_empty());
    }

    #[tokio::test]
    async fn double_booking_is_accepted() {
        let service = make_service();
        let artist = create_artist(&service, "Guns N Petals").await;
        let venue = create_venue(&service, "The Musical Hop").await;
        let start_time = Utc::now() + Duration::days(5);
        for _ in 0..2 {
            let draft = ShowDraft {
                venue_id: venue,
                artist_id: artist,
                start_time,
            };
            assert!(service.create_show(&draft).await.is_ok());
        }
        let Ok(shows) = service.list_shows().await else {
            panic!("listing failed");
        };
        assert_eq!(shows.len(), 2);
    }

    #[tokio::test]
    async fn delete_venue_leaves_shows_dangling() {
        let service = make_service();
        let artist = create_artist(&service, "Guns N Petals").await;
        let doomed = create_venue(&service, "The Musical Hop").await;
        let kept = create_venue(&service, "The Dueling Pianos Bar").await;
        book(&service, doomed, artist, Duration::days(3)).await;

        let Ok(before) = service.venue(kept).await else {
            panic!("venue not found");
        };
        let Ok(name) = service.delete_venue(doomed).await else {
            panic!("delete failed");
        };
        assert_eq!(name, "The Musical Hop");

        assert!(matches!(
            service.venue(doomed).await,
            Err(BookingError::NotFound { .. })
        ));
        let Ok(after) = service.venue(kept).await else {
            panic!("venue not found");
        };
        assert_eq!(before, after);
        let Ok(remaining) = service.search_venues("").await else {
            panic!("search failed");
        };
        assert_eq!(remaining.count, 1);

        let Ok(shows) = service.list_shows().await else {
            panic!("listing failed");
        };
        let Some(show) = shows.first() else {
            panic!("show was removed");
        };
        assert_eq!(show.venue_id, doomed);
        assert_eq!(show.venue_name, None);

        let Ok(artist_detail) = service.get_artist_detail(artist).await else {
            panic!("artist not found");
        };
        assert_eq!(artist_detail.upcoming_shows.len(), 1);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let service = make_service();
        let venue = VenueId::new(404);
        let artist = ArtistId::new(404);

        assert!(matches!(
            service.get_venue_detail(venue).await,
            Err(BookingError::NotFound { .. })
        ));
        assert!(matches!(
            service.get_artist_detail(artist).await,
            Err(BookingError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete_venue(venue).await,
            Err(BookingError::NotFound { .. })
        ));
        assert!(matches!(
            service
                .update_venue(venue, &venue_draft("X", "Austin", "TX"))
                .await,
            Err(BookingError::NotFound { .. })
        ));
        assert!(matches!(
            service.update_artist(artist, &artist_draft("X")).await,
            Err(BookingError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let service = make_service();
        let id = create_artist(&service, "Guns N Petals").await;

        let mut draft = artist_draft("The Wild Sax Band");
        draft.image_link = None;
        draft.genres = genres(&["Jazz", "Classical"]);
        draft.seeking_venue = true;
        let Ok(()) = service.update_artist(id, &draft).await else {
            panic!("update failed");
        };

        let Ok(artist) = service.artist(id).await else {
            panic!("artist not found");
        };
        assert_eq!(artist, draft.into_artist(id));
    }

    #[tokio::test]
    async fn upcoming_count_ignores_other_venues() {
        let service = make_service();
        let artist = create_artist(&service, "Guns N Petals").await;
        let busy = create_venue(&service, "The Musical Hop").await;
        let quiet = create_venue(&service, "The Dueling Pianos Bar").await;
        book(&service, busy, artist, Duration::days(1)).await;
        book(&service, busy, artist, Duration::days(2)).await;
        book(&service, quiet, artist, -Duration::days(2)).await;

        let Ok(groups) = service.list_venues_grouped_by_city().await else {
            panic!("listing failed");
        };
        let counts: Vec<(VenueId, i64)> = groups
            .iter()
            .flat_map(|g| g.venues.iter().map(|v| (v.id, v.num_upcoming_shows)))
            .collect();
        assert!(counts.contains(&(busy, 2)));
        assert!(counts.contains(&(quiet, 0)));
    }
}
