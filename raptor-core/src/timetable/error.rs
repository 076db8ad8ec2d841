//! Timetable error types.

use crate::domain::{DomainError, RouteIndex, StopIndex};

/// Errors raised while building or loading a [`Timetable`](super::Timetable).
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    #[error("{route} has {len} stop(s); a pattern needs at least two")]
    PatternTooShort { route: RouteIndex, len: usize },

    #[error("{route} visits {stop}, outside network of {number_of_stops} stops")]
    UnknownStop {
        route: RouteIndex,
        stop: StopIndex,
        number_of_stops: usize,
    },

    #[error("{route} restricts position {pos}, pattern has {len} stops")]
    RestrictionOutOfRange {
        route: RouteIndex,
        pos: usize,
        len: usize,
    },

    #[error("trip {trip} on {route} has {actual} stop times, pattern has {expected}")]
    TripLength {
        route: RouteIndex,
        trip: String,
        expected: usize,
        actual: usize,
    },

    #[error("trip {trip} on {route} departs position {pos} before arriving")]
    DepartsBeforeArrival {
        route: RouteIndex,
        trip: String,
        pos: usize,
    },

    #[error("trip {trip} on {route} goes back in time at position {pos}")]
    DecreasingTimes {
        route: RouteIndex,
        trip: String,
        pos: usize,
    },

    #[error("trip {trip} on {route} overtakes trip {other} at position {pos}")]
    Overtaking {
        route: RouteIndex,
        trip: String,
        other: String,
        pos: usize,
    },

    #[error("invalid slack: {0}")]
    Slack(#[from] DomainError),

    #[error("failed to parse timetable: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read timetable: {0}")]
    Io(#[from] std::io::Error),
}
