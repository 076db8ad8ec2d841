//! The transit data provider trait.

use crate::domain::{RouteIndex, StopIndex, TransitTime};

use super::{RoutePattern, TripSchedule};

/// A trip found by a boarding search.
#[derive(Debug, Clone, PartialEq)]
pub struct TripBoarding<T> {
    /// Index of the trip in its route's departure order.
    pub trip_index: usize,
    pub trip: T,
    pub board_time: TransitTime,
}

/// Read access to an immutable transit timetable.
///
/// Trips of a route are sorted by departure and never overtake each
/// other, so their departure times are sorted at every pattern position.
pub trait TransitDataProvider: Send + Sync {
    type Trip: TripSchedule;

    /// Returns the number of stops; stop indices are `0..number_of_stops`.
    fn number_of_stops(&self) -> usize;

    /// Returns every route whose pattern visits at least one of `stops`,
    /// without duplicates and in ascending route order.
    fn routes_touching(&self, stops: &[StopIndex]) -> Vec<RouteIndex>;

    fn pattern(&self, route: RouteIndex) -> &RoutePattern;

    fn number_of_trips(&self, route: RouteIndex) -> usize;

    /// Returns the `index`-th trip of `route` in departure order.
    fn trip(&self, route: RouteIndex, index: usize) -> Self::Trip;

    /// Seconds a passenger must be at the stop before boarding `route`.
    fn board_slack(&self, route: RouteIndex) -> i32;

    /// Seconds between alighting `route` and leaving the stop.
    fn alight_slack(&self, route: RouteIndex) -> i32;

    /// Minimum seconds between alighting and boarding at a transfer.
    fn transfer_slack(&self) -> i32;

    /// Find the first trip of `route` departing pattern position
    /// `stop_pos` at or after `earliest`.
    fn first_trip_departing_at_or_after(
        &self,
        route: RouteIndex,
        stop_pos: usize,
        earliest: TransitTime,
    ) -> Option<TripBoarding<Self::Trip>> {
        let n = self.number_of_trips(route);
        let (mut lo, mut hi) = (0, n);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.trip(route, mid).departure(stop_pos) < earliest {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        (lo < n).then(|| {
            let trip = self.trip(route, lo);
            TripBoarding {
                trip_index: lo,
                board_time: trip.departure(stop_pos),
                trip,
            }
        })
    }
}
