//! Domain layer: records, identifiers, genre encoding and read models.
//!
//! Venues and artists are plain records; a show pairs one of each at a
//! start time. Shows are "upcoming" when `start_time >= now` at query time
//! and "past" otherwise.

pub mod artist;
pub mod genres;
pub mod ids;
pub mod listing;
pub mod show;
pub mod validation;
pub mod venue;

pub use artist::{Artist, ArtistDraft};
pub use genres::Genres;
pub use ids::{ArtistId, ShowId, VenueId};
pub use listing::{
    ArtistDetail, ArtistListing, ArtistShow, ArtistSummary, CityGroup, SearchResults, ShowListing,
    VenueDetail, VenueOverview, VenueShow, VenueSummary,
};
pub use show::{Show, ShowDraft};
pub use venue::{Venue, VenueDraft};
