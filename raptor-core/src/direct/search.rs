//! The direct transit search algorithm.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::config::{CostModel, SearchConfig};
use crate::domain::{AccessLeg, EgressLeg, RouteIndex, StopIndex};
use crate::pareto::ParetoSet;
use crate::path::{PathLeg, RaptorPath};
use crate::transit::{TransitDataProvider, TripSchedule};

use super::{DirectTransitRequest, RelaxedPathComparator};

/// Errors from running a direct transit search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search cancelled")]
    Cancelled,
}

/// The outcome of a direct transit search.
#[derive(Debug, Clone)]
pub struct DirectTransitResult<T> {
    /// Paths on the relaxed Pareto front, in insertion order.
    pub paths: Vec<RaptorPath<T>>,

    /// Number of routes examined.
    pub routes_searched: usize,

    /// Number of paths offered to the front.
    pub candidates: usize,
}

/// Boarding and alighting choice for one route, fixed by its cheapest
/// first departure.
struct Seed<'r> {
    trip_index: usize,
    board_pos: usize,
    alight_pos: usize,
    access: &'r AccessLeg,
    egress: &'r EgressLeg,
    c1: i32,
}

/// Relaxed search for one-seat rides.
///
/// The search borrows an immutable provider, so any number of searches
/// may run concurrently against one timetable.
pub struct DirectTransitSearch<'a, P> {
    provider: &'a P,
    cost: CostModel,
    max_routes: Option<usize>,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, P: TransitDataProvider> DirectTransitSearch<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            cost: CostModel::default(),
            max_routes: None,
            cancel: None,
        }
    }

    /// Create a search using the cost model and route limit of `config`.
    pub fn with_config(provider: &'a P, config: &SearchConfig) -> Self {
        Self {
            provider,
            cost: config.cost,
            max_routes: config.max_routes,
            cancel: None,
        }
    }

    pub fn with_cost_model(mut self, cost: CostModel) -> Self {
        self.cost = cost;
        self
    }

    /// Abort the search once `flag` is set. The flag is checked between
    /// routes.
    pub fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Run the search. An empty result is not an error.
    pub fn search(
        &self,
        request: &DirectTransitRequest,
    ) -> Result<DirectTransitResult<P::Trip>, SearchError> {
        let mut access_stops: Vec<StopIndex> = request.access().iter().map(|a| a.stop()).collect();
        access_stops.sort_unstable();
        access_stops.dedup();

        let mut routes = self.provider.routes_touching(&access_stops);
        if let Some(max) = self.max_routes.filter(|max| routes.len() > *max) {
            debug!(routes = routes.len(), max, "Limiting direct search routes");
            routes.truncate(max);
        }

        let mut front = ParetoSet::new(RelaxedPathComparator::new(request.relax_c1()));
        let mut routes_searched = 0;
        let mut candidates = 0;

        for route in routes {
            if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                debug!(routes_searched, "Direct search cancelled");
                return Err(SearchError::Cancelled);
            }
            routes_searched += 1;

            let Some(seed) = self.cheapest_seed(route, request) else {
                continue;
            };
            trace!(
                route = %route,
                trip_index = seed.trip_index,
                board_stop = %seed.access.stop(),
                alight_stop = %seed.egress.stop(),
                c1 = seed.c1,
                "Direct search seed"
            );
            candidates += self.scan_window(route, &seed, request, &mut front);
        }

        let paths = front.into_vec();
        debug!(
            routes_searched,
            candidates,
            paths = paths.len(),
            "Direct search complete"
        );

        Ok(DirectTransitResult {
            paths,
            routes_searched,
            candidates,
        })
    }

    /// Find the cheapest first departure on `route` over every usable
    /// (access, egress) pair.
    fn cheapest_seed<'r>(
        &self,
        route: RouteIndex,
        request: &'r DirectTransitRequest,
    ) -> Option<Seed<'r>> {
        let pattern = self.provider.pattern(route);
        let board_slack = self.provider.board_slack(route);
        let mut best: Option<Seed<'r>> = None;

        for access in request.access() {
            for board_pos in pattern.positions_of(access.stop()) {
                if !pattern.board_allowed(board_pos) {
                    continue;
                }
                let target = request.earliest_departure_time() + access.duration() + board_slack;
                let Some(boarding) =
                    self.provider
                        .first_trip_departing_at_or_after(route, board_pos, target)
                else {
                    continue;
                };

                for egress in request.egress() {
                    for alight_pos in pattern.positions_of(egress.stop()) {
                        if alight_pos <= board_pos || !pattern.alight_allowed(alight_pos) {
                            continue;
                        }
                        let path = self.build_path(
                            route,
                            boarding.trip.clone(),
                            board_pos,
                            alight_pos,
                            access,
                            egress,
                        );
                        if best.as_ref().is_none_or(|b| path.c1() < b.c1) {
                            best = Some(Seed {
                                trip_index: boarding.trip_index,
                                board_pos,
                                alight_pos,
                                access,
                                egress,
                                c1: path.c1(),
                            });
                        }
                    }
                }
            }
        }
        best
    }

    /// Offer one path per trip from the seed onwards, stopping at the first
    /// path that leaves at or after the end of the window. Returns the
    /// number of paths offered.
    fn scan_window(
        &self,
        route: RouteIndex,
        seed: &Seed<'_>,
        request: &DirectTransitRequest,
        front: &mut ParetoSet<RaptorPath<P::Trip>, RelaxedPathComparator>,
    ) -> usize {
        let window = request.search_window();
        let mut offered = 0;

        for trip_index in seed.trip_index..self.provider.number_of_trips(route) {
            let path = self.build_path(
                route,
                self.provider.trip(route, trip_index),
                seed.board_pos,
                seed.alight_pos,
                seed.access,
                seed.egress,
            );
            if !window.contains(path.start_time()) {
                trace!(
                    route = %route,
                    trip_index,
                    start_time = %path.start_time(),
                    window_end = %window.end(),
                    "Direct search window exhausted"
                );
                break;
            }
            offered += 1;
            let _ = front.add(path);
        }
        offered
    }

    fn build_path(
        &self,
        route: RouteIndex,
        trip: P::Trip,
        board_pos: usize,
        alight_pos: usize,
        access: &AccessLeg,
        egress: &EgressLeg,
    ) -> RaptorPath<P::Trip> {
        let pattern = self.provider.pattern(route);
        let board_slack = self.provider.board_slack(route);
        let alight_slack = self.provider.alight_slack(route);

        let board_time = trip.departure(board_pos);
        let alight_time = trip.arrival(alight_pos);
        let transit_c1 = self.cost.transit_cost(board_slack, alight_time - board_time);

        let ride = PathLeg::Transit {
            route,
            trip,
            board_stop: pattern.stop(board_pos),
            board_time,
            alight_stop: pattern.stop(alight_pos),
            alight_time,
        };
        RaptorPath::direct(access, board_slack, ride, alight_slack, egress, transit_c1)
    }
}
