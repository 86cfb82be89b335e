//! Database rows for venues and artists.
//!
//! Genres travel as the raw comma-joined column and are decoded when the
//! row is turned into its domain record.

use crate::domain::{Artist, ArtistId, Genres, Venue, VenueId};

/// A row of the `venues` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VenueRow {
    /// Primary key.
    pub id: VenueId,
    /// Name.
    pub name: String,
    /// City.
    pub city: String,
    /// State code.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Phone.
    pub phone: Option<String>,
    /// Picture link.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Comma-joined genres.
    pub genres: String,
    /// Website.
    pub website: Option<String>,
    /// Looking for performers.
    pub seeking_talent: bool,
    /// What the venue is looking for.
    pub seeking_description: Option<String>,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            genres: Genres::from_stored(&row.genres),
            website: row.website,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        }
    }
}

/// A row of the `artists` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArtistRow {
    /// Primary key.
    pub id: ArtistId,
    /// Name.
    pub name: String,
    /// City.
    pub city: String,
    /// State code.
    pub state: String,
    /// Phone.
    pub phone: Option<String>,
    /// Comma-joined genres.
    pub genres: String,
    /// Picture link.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Looking for venues.
    pub seeking_venue: bool,
    /// What the artist is looking for.
    pub seeking_description: Option<String>,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            genres: Genres::from_stored(&row.genres),
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
        }
    }
}
