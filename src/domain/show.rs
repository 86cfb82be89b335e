//! Shows: a venue booked with an artist at a start time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{ArtistId, ShowId, VenueId};

/// `strftime` pattern used for show start times on the wire.
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

/// A stored show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Show {
    /// Generated primary key.
    pub id: ShowId,
    /// Hosting venue. May dangle once the venue is deleted.
    pub venue_id: VenueId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

/// Validated show fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowDraft {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

/// Formats a start time as `YYYY-MM-DDTHH:MM:SS.ffffff±HHMM`.
#[must_use]
pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Returns `true` when a show starting at `start_time` counts as upcoming
/// at `now`. A show starting exactly now is upcoming.
#[must_use]
pub fn is_upcoming(start_time: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    start_time >= now
}

/// Splits shows into `(past, upcoming)` relative to `now`, preserving order.
pub fn partition_by_start<T, F>(shows: Vec<T>, now: &DateTime<Utc>, start_of: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let (upcoming, past) = shows
        .into_iter()
        .partition(|show| is_upcoming(&start_of(show), now));
    (past, upcoming)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn start_time_has_microseconds_and_offset() {
        let Some(at) = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).single() else {
            panic!("valid timestamp");
        };
        assert_eq!(format_start_time(&at), "2035-04-01T20:00:00.000000+0000");
    }

    #[test]
    fn now_is_upcoming() {
        let now = Utc::now();
        assert!(is_upcoming(&now, &now));
        assert!(!is_upcoming(&(now - Duration::seconds(1)), &now));
    }

    #[test]
    fn partition_keeps_order() {
        let now = Utc::now();
        let two_days_ago = now - Duration::days(2);
        let tomorrow = now + Duration::days(1);
        let yesterday = now - Duration::days(1);
        let in_three_days = now + Duration::days(3);
        let times = vec![two_days_ago, tomorrow, yesterday, in_three_days];
        let (past, upcoming) = partition_by_start(times, &now, |t| *t);
        assert_eq!(past, vec![two_days_ago, yesterday]);
        assert_eq!(upcoming, vec![tomorrow, in_three_days]);
    }
}
