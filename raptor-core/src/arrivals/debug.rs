//! Debug hooks for stop arrivals.
//!
//! Only stops flagged for debugging in the [`ListenerSetup`](super::ListenerSetup)
//! report to the handler, so tracing a handful of stops costs nothing for
//! the rest of the network.

use tracing::trace;

use crate::domain::StopIndex;

use super::{ArrivalId, StopArrival};

/// Observer of stop-arrival events at debugged stops.
pub trait DebugHandler<T> {
    /// An arrival joined its stop's front.
    fn accepted(&mut self, _id: ArrivalId, _arrival: &StopArrival<T>) {}

    /// `evicted` left its stop's front because `by` dominates it.
    fn evicted(&mut self, _evicted: &StopArrival<T>, _by: &StopArrival<T>) {}

    /// An arrival was dominated on arrival and discarded.
    fn rejected(&mut self, _arrival: &StopArrival<T>) {}

    /// A stop's front was marked at the end of a round.
    fn marked(&mut self, _stop: StopIndex, _front_size: usize) {}
}

/// A handler that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDebugHandler;

impl<T> DebugHandler<T> for NoopDebugHandler {}

/// A handler that emits a `trace!` event per stop-arrival event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDebugHandler;

impl<T> DebugHandler<T> for TracingDebugHandler {
    fn accepted(&mut self, id: ArrivalId, arrival: &StopArrival<T>) {
        trace!(
            stop = %arrival.stop(),
            arrival = id.index(),
            arrival_time = %arrival.arrival_time(),
            c1 = arrival.c1(),
            round = arrival.round(),
            mode = %arrival.mode(),
            "Stop arrival accepted"
        );
    }

    fn evicted(&mut self, evicted: &StopArrival<T>, by: &StopArrival<T>) {
        trace!(
            stop = %evicted.stop(),
            arrival_time = %evicted.arrival_time(),
            c1 = evicted.c1(),
            round = evicted.round(),
            by_arrival_time = %by.arrival_time(),
            by_c1 = by.c1(),
            "Stop arrival evicted"
        );
    }

    fn rejected(&mut self, arrival: &StopArrival<T>) {
        trace!(
            stop = %arrival.stop(),
            arrival_time = %arrival.arrival_time(),
            c1 = arrival.c1(),
            round = arrival.round(),
            "Stop arrival rejected"
        );
    }

    fn marked(&mut self, stop: StopIndex, front_size: usize) {
        trace!(stop = %stop, front_size, "Stop marked");
    }
}
