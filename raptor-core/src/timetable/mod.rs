//! In-memory timetable.
//!
//! [`Timetable`] is the crate's own [`TransitDataProvider`]: an immutable
//! set of routes and trips, built once with a validating
//! [`TimetableBuilder`] or loaded from JSON, then shared read-only between
//! searches.

mod builder;
mod error;
mod json;
mod trip;

use std::path::Path;

use crate::config::SearchConfig;
use crate::domain::{RouteIndex, StopIndex};
use crate::transit::{RoutePattern, SlackTable, TransitDataProvider};

pub use builder::TimetableBuilder;
pub use error::TimetableError;
pub use trip::{TripRef, TripTimes};

#[derive(Debug, Clone)]
struct Route {
    pattern: RoutePattern,
    /// Sorted by departure; no trip overtakes another.
    trips: Vec<TripRef>,
}

/// An immutable, validated set of routes and trips.
#[derive(Debug, Clone)]
pub struct Timetable {
    number_of_stops: usize,
    routes: Vec<Route>,
    /// Routes visiting each stop, ascending.
    routes_by_stop: Vec<Vec<RouteIndex>>,
    slack: SlackTable,
}

impl Timetable {
    /// Parse and validate a timetable from JSON.
    pub fn from_json(json: &str) -> Result<Self, TimetableError> {
        let parsed: json::TimetableJson = serde_json::from_str(json)?;
        parsed.into_builder()?.build()
    }

    /// Parse a timetable from JSON, taking slack from `config` when it
    /// sets one.
    pub fn from_json_with_config(json: &str, config: &SearchConfig) -> Result<Self, TimetableError> {
        let parsed: json::TimetableJson = serde_json::from_str(json)?;
        let mut builder = parsed.into_builder()?;
        if let Some(slack) = &config.slack {
            builder.slack(slack.clone());
        }
        builder.build()
    }

    /// Read, parse and validate a timetable from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn number_of_routes(&self) -> usize {
        self.routes.len()
    }

    pub fn slack(&self) -> &SlackTable {
        &self.slack
    }

    /// Returns the trips of `route` in departure order.
    pub fn trips(&self, route: RouteIndex) -> &[TripRef] {
        &self.routes[route.0].trips
    }
}

impl TransitDataProvider for Timetable {
    type Trip = TripRef;

    fn number_of_stops(&self) -> usize {
        self.number_of_stops
    }

    fn routes_touching(&self, stops: &[StopIndex]) -> Vec<RouteIndex> {
        let mut routes: Vec<RouteIndex> = stops
            .iter()
            .filter_map(|stop| self.routes_by_stop.get(stop.0))
            .flatten()
            .copied()
            .collect();
        routes.sort_unstable();
        routes.dedup();
        routes
    }

    fn pattern(&self, route: RouteIndex) -> &RoutePattern {
        &self.routes[route.0].pattern
    }

    fn number_of_trips(&self, route: RouteIndex) -> usize {
        self.routes[route.0].trips.len()
    }

    fn trip(&self, route: RouteIndex, index: usize) -> TripRef {
        self.routes[route.0].trips[index].clone()
    }

    fn board_slack(&self, route: RouteIndex) -> i32 {
        self.slack.board_slack(self.pattern(route).mode())
    }

    fn alight_slack(&self, route: RouteIndex) -> i32 {
        self.slack.alight_slack(self.pattern(route).mode())
    }

    fn transfer_slack(&self) -> i32 {
        self.slack.transfer_slack()
    }
}
