//! Venue form and detail DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::show_dto::VenueShowDto;
use crate::domain::validation;
use crate::domain::{Venue, VenueDetail, VenueDraft, VenueId};
use crate::error::BookingError;

/// Request body for `POST /venues/create` and `POST /venues/{id}/edit`.
///
/// Optional text fields may be sent blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VenueForm {
    /// Venue name.
    pub name: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Picture link.
    #[serde(default)]
    pub image_link: String,
    /// Genres booked; one or more of the genre choices.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Facebook page.
    #[serde(default)]
    pub facebook_link: String,
    /// Website.
    #[serde(default)]
    pub website_link: String,
    /// Looking for performers.
    #[serde(default, deserialize_with = "super::common_dto::checkbox")]
    pub seeking_talent: bool,
    /// What the venue is looking for.
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    /// Validates the submission.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] naming the first invalid field.
    pub fn into_draft(self) -> Result<VenueDraft, BookingError> {
        Ok(VenueDraft {
            name: validation::required("name", &self.name)?,
            city: validation::required("city", &self.city)?,
            state: validation::state_code(&self.state)?,
            address: validation::required("address", &self.address)?,
            phone: validation::phone(&self.phone)?,
            image_link: validation::link("image_link", &self.image_link)?,
            facebook_link: validation::link("facebook_link", &self.facebook_link)?,
            genres: validation::genres(&self.genres)?,
            website: validation::link("website_link", &self.website_link)?,
            seeking_talent: self.seeking_talent,
            seeking_description: validation::optional(&self.seeking_description),
        })
    }
}

impl From<Venue> for VenueForm {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
            genres: venue.genres.into_inner(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
            website_link: venue.website.unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.unwrap_or_default(),
        }
    }
}

/// Response body for `GET /venues/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct VenueDetailResponse {
    /// Venue key.
    pub id: VenueId,
    /// Name.
    pub name: String,
    /// Genres booked.
    pub genres: Vec<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State code.
    pub state: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Looking for performers.
    pub seeking_talent: bool,
    /// What the venue is looking for.
    pub seeking_description: Option<String>,
    /// Picture link.
    pub image_link: Option<String>,
    /// Shows that already started.
    pub past_shows: Vec<VenueShowDto>,
    /// Shows starting now or later.
    pub upcoming_shows: Vec<VenueShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<VenueDetail> for VenueDetailResponse {
    fn from(detail: VenueDetail) -> Self {
        let venue = detail.venue;
        let past_shows: Vec<VenueShowDto> =
            detail.past_shows.into_iter().map(VenueShowDto::from).collect();
        let upcoming_shows: Vec<VenueShowDto> = detail
            .upcoming_shows
            .into_iter()
            .map(VenueShowDto::from)
            .collect();
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres.into_inner(),
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
