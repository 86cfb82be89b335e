//! Show form and listing DTOs. Start times are rendered with
//! [`format_start_time`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::show::format_start_time;
use crate::domain::validation;
use crate::domain::{ArtistId, ArtistShow, ShowDraft, ShowListing, VenueId, VenueShow};
use crate::error::BookingError;

/// Request body for `POST /shows/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ShowForm {
    /// Hosting venue.
    pub venue_id: i64,
    /// Performing artist.
    pub artist_id: i64,
    /// Start time, RFC 3339 or `YYYY-MM-DD HH:MM:SS` (UTC). Blank means now.
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    /// Validates the submission. A blank start time resolves to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] for non-positive keys or an
    /// unparseable start time.
    pub fn into_draft(self, now: DateTime<Utc>) -> Result<ShowDraft, BookingError> {
        Ok(ShowDraft {
            venue_id: VenueId::new(validation::record_key("venue_id", self.venue_id)?),
            artist_id: ArtistId::new(validation::record_key("artist_id", self.artist_id)?),
            start_time: validation::start_time(&self.start_time, now)?,
        })
    }
}

/// A show on a venue page.
#[derive(Debug, Serialize, ToSchema)]
pub struct VenueShowDto {
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist picture.
    pub artist_image_link: Option<String>,
    /// Formatted start time.
    pub start_time: String,
}

impl From<VenueShow> for VenueShowDto {
    fn from(show: VenueShow) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// A show on an artist page.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistShowDto {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue name; `null` once the venue has been deleted.
    pub venue_name: Option<String>,
    /// Venue picture.
    pub venue_image_link: Option<String>,
    /// Formatted start time.
    pub start_time: String,
}

impl From<ArtistShow> for ArtistShowDto {
    fn from(show: ArtistShow) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// A show on `GET /shows`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShowDto {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue name; `null` once the venue has been deleted.
    pub venue_name: Option<String>,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist picture.
    pub artist_image_link: Option<String>,
    /// Formatted start time.
    pub start_time: String,
}

impl From<ShowListing> for ShowDto {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn blank_start_time_defaults_to_now() {
        let now = Utc::now();
        let form = ShowForm {
            venue_id: 1,
            artist_id: 2,
            start_time: String::new(),
        };
        let Ok(draft) = form.into_draft(now) else {
            panic!("valid form rejected");
        };
        assert_eq!(draft.start_time, now);
        assert_eq!(draft.venue_id, VenueId::new(1));
        assert_eq!(draft.artist_id, ArtistId::new(2));
    }

    #[test]
    fn zero_ids_are_rejected() {
        let form = ShowForm {
            venue_id: 0,
            artist_id: 2,
            start_time: String::new(),
        };
        assert!(form.into_draft(Utc::now()).is_err());
    }
}
