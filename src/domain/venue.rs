//! Venue records and the validated input used to write them.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Genres, VenueId};

/// A stored venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Venue {
    /// Generated primary key.
    pub id: VenueId,
    /// Display name. Not unique.
    pub name: String,
    /// City the venue is located in.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Link to a picture of the venue.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Genres the venue books.
    pub genres: Genres,
    /// Venue website.
    pub website: Option<String>,
    /// Whether the venue is looking for performers.
    pub seeking_talent: bool,
    /// Free-text description of what the venue is looking for.
    pub seeking_description: Option<String>,
}

/// Validated venue fields, ready to be inserted or to overwrite a row.
///
/// Every write replaces all columns; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDraft {
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Picture link.
    pub image_link: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Booked genres.
    pub genres: Genres,
    /// Website.
    pub website: Option<String>,
    /// Looking for performers.
    pub seeking_talent: bool,
    /// What the venue is looking for.
    pub seeking_description: Option<String>,
}

impl VenueDraft {
    /// Materialises the draft as a stored record with the given key.
    #[must_use]
    pub fn into_venue(self, id: VenueId) -> Venue {
        Venue {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            genres: self.genres,
            website: self.website,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}
