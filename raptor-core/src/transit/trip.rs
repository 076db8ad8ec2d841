//! Trip schedules.

use crate::domain::TransitTime;

/// The stop times of one trip along its route pattern.
///
/// Positions index into the route pattern's stop list, not into the
/// network's stops.
pub trait TripSchedule: Clone {
    /// Returns the departure time at pattern position `stop_pos`.
    fn departure(&self, stop_pos: usize) -> TransitTime;

    /// Returns the arrival time at pattern position `stop_pos`.
    fn arrival(&self, stop_pos: usize) -> TransitTime;

    /// Returns the trip's position in its route's departure order.
    fn trip_sort_index(&self) -> usize;
}
