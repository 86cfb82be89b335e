//! Artist form and detail DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::show_dto::ArtistShowDto;
use crate::domain::validation;
use crate::domain::{Artist, ArtistDetail, ArtistDraft, ArtistId};
use crate::error::BookingError;

/// Request body for `POST /artists/create` and `POST /artists/{id}/edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArtistForm {
    /// Artist name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Picture link.
    #[serde(default)]
    pub image_link: String,
    /// Genres played; one or more of the genre choices.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Facebook page.
    #[serde(default)]
    pub facebook_link: String,
    /// Website.
    #[serde(default)]
    pub website_link: String,
    /// Looking for venues.
    #[serde(default, deserialize_with = "super::common_dto::checkbox")]
    pub seeking_venue: bool,
    /// What the artist is looking for.
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    /// Validates the submission.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] naming the first invalid field.
    pub fn into_draft(self) -> Result<ArtistDraft, BookingError> {
        Ok(ArtistDraft {
            name: validation::required("name", &self.name)?,
            city: validation::required("city", &self.city)?,
            state: validation::state_code(&self.state)?,
            phone: validation::phone(&self.phone)?,
            genres: validation::genres(&self.genres)?,
            image_link: validation::link("image_link", &self.image_link)?,
            facebook_link: validation::link("facebook_link", &self.facebook_link)?,
            website: validation::link("website_link", &self.website_link)?,
            seeking_venue: self.seeking_venue,
            seeking_description: validation::optional(&self.seeking_description),
        })
    }
}

impl From<Artist> for ArtistForm {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            genres: artist.genres.into_inner(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
            website_link: artist.website.unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.unwrap_or_default(),
        }
    }
}

/// Response body for `GET /artists/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistDetailResponse {
    /// Artist key.
    pub id: ArtistId,
    /// Name.
    pub name: String,
    /// Genres played.
    pub genres: Vec<String>,
    /// Home city.
    pub city: String,
    /// State code.
    pub state: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Facebook page.
    pub facebook_link: Option<String>,
    /// Looking for venues.
    pub seeking_venue: bool,
    /// What the artist is looking for.
    pub seeking_description: Option<String>,
    /// Picture link.
    pub image_link: Option<String>,
    /// Shows that already started.
    pub past_shows: Vec<ArtistShowDto>,
    /// Shows starting now or later.
    pub upcoming_shows: Vec<ArtistShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<ArtistDetail> for ArtistDetailResponse {
    fn from(detail: ArtistDetail) -> Self {
        let artist = detail.artist;
        let past_shows: Vec<ArtistShowDto> = detail
            .past_shows
            .into_iter()
            .map(ArtistShowDto::from)
            .collect();
        let upcoming_shows: Vec<ArtistShowDto> = detail
            .upcoming_shows
            .into_iter()
            .map(ArtistShowDto::from)
            .collect();
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres.into_inner(),
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn unknown_genre_is_rejected() {
        let form = ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            genres: vec!["Polka".to_string()],
            ..ArtistForm::default()
        };
        assert!(matches!(form.into_draft(), Err(BookingError::Validation(_))));
    }

    #[test]
    fn blank_optionals_become_none() {
        let form = ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "ca".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            seeking_description: "  ".to_string(),
            ..ArtistForm::default()
        };
        let Ok(draft) = form.into_draft() else {
            panic!("valid form rejected");
        };
        assert_eq!(draft.state, "CA");
        assert_eq!(draft.phone, None);
        assert_eq!(draft.seeking_description, None);
    }
}
