//! Validating timetable construction.

use std::sync::Arc;

use tracing::debug;

use crate::domain::RouteIndex;
use crate::transit::{RoutePattern, SlackTable};

use super::{Route, Timetable, TimetableError, TripRef, TripTimes};

/// Collects routes and trips, then validates them into a [`Timetable`].
///
/// # Examples
///
/// ```
/// use raptor_core::domain::{StopIndex, TransitMode, TransitTime};
/// use raptor_core::timetable::{TimetableBuilder, TripTimes};
/// use raptor_core::transit::RoutePattern;
///
/// let mut builder = TimetableBuilder::new(2);
/// builder.add_route(
///     RoutePattern::new(TransitMode::Bus, vec![StopIndex(0), StopIndex(1)]),
///     vec![TripTimes::uniform("t1", vec![TransitTime::hms(8, 0, 0), TransitTime::hms(8, 10, 0)])],
/// );
/// let timetable = builder.build().unwrap();
/// assert_eq!(timetable.number_of_routes(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableBuilder {
    number_of_stops: usize,
    routes: Vec<(RoutePattern, Vec<TripTimes>)>,
    slack: SlackTable,
}

impl TimetableBuilder {
    pub fn new(number_of_stops: usize) -> Self {
        Self {
            number_of_stops,
            ..Self::default()
        }
    }

    pub fn slack(&mut self, slack: SlackTable) -> &mut Self {
        self.slack = slack;
        self
    }

    /// Add a route with its trips, in any order.
    pub fn add_route(&mut self, pattern: RoutePattern, trips: Vec<TripTimes>) -> RouteIndex {
        self.routes.push((pattern, trips));
        RouteIndex(self.routes.len() - 1)
    }

    /// Validate the collected data and build the timetable.
    ///
    /// Trips are sorted by their first departure; a trip that overtakes
    /// another on the same route is an error.
    pub fn build(self) -> Result<Timetable, TimetableError> {
        self.slack.validate()?;

        let mut routes = Vec::with_capacity(self.routes.len());
        let mut routes_by_stop = vec![Vec::new(); self.number_of_stops];
        let mut number_of_trips = 0;

        for (i, (pattern, mut trips)) in self.routes.into_iter().enumerate() {
            let route = RouteIndex(i);
            validate_pattern(route, &pattern, self.number_of_stops)?;
            for trip in &trips {
                validate_trip(route, &pattern, trip)?;
            }

            trips.sort_by(|a, b| {
                a.departures()[0]
                    .cmp(&b.departures()[0])
                    .then_with(|| a.id().cmp(b.id()))
            });
            check_overtaking(route, &trips)?;

            for stop in pattern.stops() {
                let touching: &mut Vec<RouteIndex> = &mut routes_by_stop[stop.0];
                if touching.last() != Some(&route) {
                    touching.push(route);
                }
            }

            number_of_trips += trips.len();
            let trips = trips
                .into_iter()
                .enumerate()
                .map(|(sort_index, times)| TripRef::new(route, sort_index, Arc::new(times)))
                .collect();
            routes.push(Route { pattern, trips });
        }

        debug!(
            stops = self.number_of_stops,
            routes = routes.len(),
            trips = number_of_trips,
            "Timetable built"
        );

        Ok(Timetable {
            number_of_stops: self.number_of_stops,
            routes,
            routes_by_stop,
            slack: self.slack,
        })
    }
}

fn validate_pattern(
    route: RouteIndex,
    pattern: &RoutePattern,
    number_of_stops: usize,
) -> Result<(), TimetableError> {
    if pattern.len() < 2 {
        return Err(TimetableError::PatternTooShort {
            route,
            len: pattern.len(),
        });
    }
    if let Some(stop) = pattern.stops().iter().find(|s| s.0 >= number_of_stops) {
        return Err(TimetableError::UnknownStop {
            route,
            stop: *stop,
            number_of_stops,
        });
    }
    Ok(())
}

fn validate_trip(
    route: RouteIndex,
    pattern: &RoutePattern,
    trip: &TripTimes,
) -> Result<(), TimetableError> {
    let expected = pattern.len();
    for actual in [trip.arrivals().len(), trip.departures().len()] {
        if actual != expected {
            return Err(TimetableError::TripLength {
                route,
                trip: trip.id().to_string(),
                expected,
                actual,
            });
        }
    }

    for pos in 0..expected {
        if trip.departures()[pos] < trip.arrivals()[pos] {
            return Err(TimetableError::DepartsBeforeArrival {
                route,
                trip: trip.id().to_string(),
                pos,
            });
        }
        if pos > 0 && trip.arrivals()[pos] < trip.departures()[pos - 1] {
            return Err(TimetableError::DecreasingTimes {
                route,
                trip: trip.id().to_string(),
                pos,
            });
        }
    }
    Ok(())
}

fn check_overtaking(route: RouteIndex, trips: &[TripTimes]) -> Result<(), TimetableError> {
    for pair in trips.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        let overtaken = (0..earlier.departures().len()).find(|&pos| {
            later.departures()[pos] < earlier.departures()[pos]
                || later.arrivals()[pos] < earlier.arrivals()[pos]
        });
        if let Some(pos) = overtaken {
            return Err(TimetableError::Overtaking {
                route,
                trip: later.id().to_string(),
                other: earlier.id().to_string(),
                pos,
            });
        }
    }
    Ok(())
}
