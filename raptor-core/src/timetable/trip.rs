//! Trip times and trip handles.

use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::{RouteIndex, TransitTime};
use crate::transit::TripSchedule;

/// Arrival and departure times of one trip, by pattern position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripTimes {
    id: String,
    arrivals: Vec<TransitTime>,
    departures: Vec<TransitTime>,
}

impl TripTimes {
    /// Create trip times with separate arrival and departure times.
    ///
    /// Consistency is checked when the trip is added to a timetable.
    pub fn new(
        id: impl Into<String>,
        arrivals: Vec<TransitTime>,
        departures: Vec<TransitTime>,
    ) -> Self {
        Self {
            id: id.into(),
            arrivals,
            departures,
        }
    }

    /// Create trip times that arrive and depart at the same instant.
    pub fn uniform(id: impl Into<String>, times: Vec<TransitTime>) -> Self {
        Self::new(id, times.clone(), times)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrivals(&self) -> &[TransitTime] {
        &self.arrivals
    }

    pub fn departures(&self) -> &[TransitTime] {
        &self.departures
    }
}

/// A cheap, shareable handle to a trip of a [`Timetable`](super::Timetable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRef {
    route: RouteIndex,
    sort_index: usize,
    times: Arc<TripTimes>,
}

impl TripRef {
    pub(crate) fn new(route: RouteIndex, sort_index: usize, times: Arc<TripTimes>) -> Self {
        Self {
            route,
            sort_index,
            times,
        }
    }

    pub fn id(&self) -> &str {
        self.times.id()
    }

    pub fn route(&self) -> RouteIndex {
        self.route
    }
}

impl TripSchedule for TripRef {
    fn departure(&self, stop_pos: usize) -> TransitTime {
        self.times.departures[stop_pos]
    }

    fn arrival(&self, stop_pos: usize) -> TransitTime {
        self.times.arrivals[stop_pos]
    }

    fn trip_sort_index(&self) -> usize {
        self.sort_index
    }
}

impl Serialize for TripRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TripRef", 2)?;
        state.serialize_field("route", &self.route)?;
        state.serialize_field("id", self.id())?;
        state.end()
    }
}
