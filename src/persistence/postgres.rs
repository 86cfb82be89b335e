//! PostgreSQL implementation of the booking store.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::{ArtistRow, VenueRow};
use super::{BookingStore, escape_like};
use crate::config::BookingConfig;
use crate::domain::{
    Artist, ArtistDraft, ArtistId, ArtistListing, ArtistShow, ArtistSummary, ShowDraft, ShowId,
    ShowListing, Venue, VenueDraft, VenueId, VenueOverview, VenueShow,
};
use crate::error::BookingError;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
     genres, website, seeking_talent, seeking_description";

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
     website, seeking_venue, seeking_description";

/// PostgreSQL-backed booking store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::StoreUnavailable`] if the database cannot be
    /// reached within the connect timeout.
    pub async fn connect(config: &BookingConfig) -> Result<Self, BookingError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| BookingError::StoreUnavailable(e.to_string()))?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::PersistenceError`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), BookingError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| BookingError::PersistenceError(e.to_string()))
    }
}

fn like_pattern(name_filter: Option<&str>) -> Option<String> {
    name_filter.map(|term| format!("%{}%", escape_like(term)))
}

#[async_trait]
impl BookingStore for PostgresStore {
    async fn insert_venue(&self, draft: &VenueDraft) -> Result<VenueId, BookingError> {
        let id = sqlx::query_scalar::<_, VenueId>(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link, \
             genres, website, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(draft.genres.to_stored())
        .bind(&draft.website)
        .bind(draft.seeking_talent)
        .bind(&draft.seeking_description)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_venue(&self, id: VenueId, draft: &VenueDraft) -> Result<bool, BookingError> {
        let result = sqlx::query(
            "UPDATE venues SET name = $2, city = $3, state = $4, address = $5, phone = $6, \
             image_link = $7, facebook_link = $8, genres = $9, website = $10, \
             seeking_talent = $11, seeking_description = $12 WHERE id = $1",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(draft.genres.to_stored())
        .bind(&draft.website)
        .bind(draft.seeking_talent)
        .bind(&draft.seeking_description)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_venue(&self, id: VenueId) -> Result<Option<String>, BookingError> {
        let name =
            sqlx::query_scalar::<_, String>("DELETE FROM venues WHERE id = $1 RETURNING name")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(name)
    }

    async fn get_venue(&self, id: VenueId) -> Result<Option<Venue>, BookingError> {
        let row = sqlx::query_as::<_, VenueRow>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Venue::from))
    }

    async fn venue_summaries(
        &self,
        name_filter: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueOverview>, BookingError> {
        let rows = sqlx::query_as::<_, VenueOverview>(
            "SELECT v.id, v.name, v.city, v.state, \
             COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
             FROM venues v LEFT JOIN shows s ON s.venue_id = v.id \
             WHERE $2::text IS NULL OR v.name ILIKE $2 \
             GROUP BY v.id ORDER BY v.name COLLATE \"C\", v.id",
        )
        .bind(now)
        .bind(like_pattern(name_filter))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn venue_shows(&self, id: VenueId) -> Result<Vec<VenueShow>, BookingError> {
        let rows = sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
             s.start_time \
             FROM shows s JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn venue_exists(&self, id: VenueId) -> Result<bool, BookingError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM venues WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn insert_artist(&self, draft: &ArtistDraft) -> Result<ArtistId, BookingError> {
        let id = sqlx::query_scalar::<_, ArtistId>(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link, \
             website, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(draft.genres.to_stored())
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_venue)
        .bind(&draft.seeking_description)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_artist(
        &self,
        id: ArtistId,
        draft: &ArtistDraft,
    ) -> Result<bool, BookingError> {
        let result = sqlx::query(
            "UPDATE artists SET name = $2, city = $3, state = $4, phone = $5, genres = $6, \
             image_link = $7, facebook_link = $8, website = $9, seeking_venue = $10, \
             seeking_description = $11 WHERE id = $1",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(draft.genres.to_stored())
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_venue)
        .bind(&draft.seeking_description)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>, BookingError> {
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Artist::from))
    }

    async fn artist_summaries(
        &self,
        name_filter: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistSummary>, BookingError> {
        let rows = sqlx::query_as::<_, ArtistSummary>(
            "SELECT a.id, a.name, \
             COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
             FROM artists a LEFT JOIN shows s ON s.artist_id = a.id \
             WHERE $2::text IS NULL OR a.name ILIKE $2 \
             GROUP BY a.id ORDER BY a.name COLLATE \"C\", a.id",
        )
        .bind(now)
        .bind(like_pattern(name_filter))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn artist_shows(&self, id: ArtistId) -> Result<Vec<ArtistShow>, BookingError> {
        let rows = sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
             s.start_time \
             FROM shows s LEFT JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_artists(&self) -> Result<Vec<ArtistListing>, BookingError> {
        let rows = sqlx::query_as::<_, ArtistListing>(
            "SELECT id, name FROM artists ORDER BY name COLLATE \"C\", id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn artist_exists(&self, id: ArtistId) -> Result<bool, BookingError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM artists WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn insert_show(&self, draft: &ShowDraft) -> Result<ShowId, BookingError> {
        let id = sqlx::query_scalar::<_, ShowId>(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(draft.venue_id)
        .bind(draft.artist_id)
        .bind(draft.start_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError> {
        let rows = sqlx::query_as::<_, ShowListing>(
            "SELECT s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name, \
             a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             LEFT JOIN venues v ON v.id = s.venue_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
