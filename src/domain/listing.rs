//! Read models returned by list, search and detail queries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{Artist, ArtistId, Venue, VenueId};

/// A venue with its location and upcoming show count, as scanned from
/// the store before grouping.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct VenueOverview {
    /// Venue key.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// City.
    pub city: String,
    /// State code.
    pub state: String,
    /// Shows at this venue with `start_time >= now`.
    pub num_upcoming_shows: i64,
}

/// Venue entry inside a city group or a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VenueSummary {
    /// Venue key.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Shows at this venue with `start_time >= now`.
    pub num_upcoming_shows: i64,
}

impl From<VenueOverview> for VenueSummary {
    fn from(overview: VenueOverview) -> Self {
        Self {
            id: overview.id,
            name: overview.name,
            num_upcoming_shows: overview.num_upcoming_shows,
        }
    }
}

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CityGroup {
    /// City.
    pub city: String,
    /// State code.
    pub state: String,
    /// Venues in the area, ordered by name.
    pub venues: Vec<VenueSummary>,
}

/// Artist entry inside a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct ArtistSummary {
    /// Artist key.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Shows by this artist with `start_time >= now`.
    pub num_upcoming_shows: i64,
}

/// Artist entry on the artist index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct ArtistListing {
    /// Artist key.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
}

/// Result of a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchResults<T> {
    /// Number of matches.
    pub count: usize,
    /// The matches.
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    /// Wraps the matches, counting them.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show seen from its venue: the artist side is expanded.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct VenueShow {
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist picture.
    pub artist_image_link: Option<String>,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

/// A show seen from its artist: the venue side is expanded.
///
/// The venue columns are `None` when the venue was deleted after booking.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ArtistShow {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue name, if the venue still exists.
    pub venue_name: Option<String>,
    /// Venue picture.
    pub venue_image_link: Option<String>,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

/// A show on the global show index.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShowListing {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue name, if the venue still exists.
    pub venue_name: Option<String>,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist picture.
    pub artist_image_link: Option<String>,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

/// A venue with its shows split around the query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    /// The stored record.
    pub venue: Venue,
    /// Shows with `start_time < now`.
    pub past_shows: Vec<VenueShow>,
    /// Shows with `start_time >= now`.
    pub upcoming_shows: Vec<VenueShow>,
}

/// An artist with its shows split around the query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    /// The stored record.
    pub artist: Artist,
    /// Shows with `start_time < now`.
    pub past_shows: Vec<ArtistShow>,
    /// Shows with `start_time >= now`.
    pub upcoming_shows: Vec<ArtistShow>,
}
