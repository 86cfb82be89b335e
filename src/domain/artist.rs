//! Artist records and the validated input used to write them.

use serde::Serialize;
use utoipa::ToSchema;

use super::{ArtistId, Genres};

/// A stored artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Artist {
    /// Generated primary key.
    pub id: ArtistId,
    /// Display name. Not unique.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres the artist plays.
    pub genres: Genres,
    /// Link to a picture of the artist.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Artist website.
    pub website: Option<String>,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// Free-text description of what the artist is looking for.
    pub seeking_description: Option<String>,
}

/// Validated artist fields. Every write replaces all columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDraft {
    /// Display name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres played.
    pub genres: Genres,
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

impl ArtistDraft {
    /// Materialises the draft as a stored record with the given key.
    #[must_use]
    pub fn into_artist(self, id: ArtistId) -> Artist {
        Artist {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        }
    }
}
