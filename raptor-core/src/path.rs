//! Paths from origin to destination.
//!
//! A path is rebuilt on demand from a chain of stop arrivals plus the
//! egress leg that reaches the destination. Legs alternate between street
//! and transit movement: one access leg, then transit rides optionally
//! separated by transfers, then one egress leg.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::arrivals::{ArrivalArena, ArrivalId, ArrivalKind};
use crate::domain::{AccessLeg, EgressLeg, RouteIndex, StopIndex, TransitTime};

/// One leg of a [`RaptorPath`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathLeg<T> {
    Access {
        stop: StopIndex,
        from_time: TransitTime,
        to_time: TransitTime,
        c1: i32,
    },
    Transit {
        route: RouteIndex,
        trip: T,
        board_stop: StopIndex,
        board_time: TransitTime,
        alight_stop: StopIndex,
        alight_time: TransitTime,
    },
    Transfer {
        from_stop: StopIndex,
        to_stop: StopIndex,
        from_time: TransitTime,
        to_time: TransitTime,
    },
    Egress {
        stop: StopIndex,
        from_time: TransitTime,
        to_time: TransitTime,
        c1: i32,
    },
}

impl<T> PathLeg<T> {
    pub fn from_time(&self) -> TransitTime {
        match self {
            PathLeg::Access { from_time, .. }
            | PathLeg::Transfer { from_time, .. }
            | PathLeg::Egress { from_time, .. } => *from_time,
            PathLeg::Transit { board_time, .. } => *board_time,
        }
    }

    pub fn to_time(&self) -> TransitTime {
        match self {
            PathLeg::Access { to_time, .. }
            | PathLeg::Transfer { to_time, .. }
            | PathLeg::Egress { to_time, .. } => *to_time,
            PathLeg::Transit { alight_time, .. } => *alight_time,
        }
    }

    pub fn duration(&self) -> i32 {
        self.to_time() - self.from_time()
    }

    pub fn is_transit(&self) -> bool {
        matches!(self, PathLeg::Transit { .. })
    }

    /// Returns the stop where this leg ends, or `None` for the egress leg.
    fn end_stop(&self) -> Option<StopIndex> {
        match self {
            PathLeg::Access { stop, .. } => Some(*stop),
            PathLeg::Transit { alight_stop, .. } => Some(*alight_stop),
            PathLeg::Transfer { to_stop, .. } => Some(*to_stop),
            PathLeg::Egress { .. } => None,
        }
    }
}

/// A complete origin-to-destination path.
///
/// # Invariants
///
/// - The first leg is an access leg and the last is an egress leg.
/// - Legs are contiguous in time: no leg starts before its predecessor ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaptorPath<T> {
    legs: Vec<PathLeg<T>>,
    c1: i32,
}

impl<T> RaptorPath<T> {
    pub(crate) fn new(legs: Vec<PathLeg<T>>, c1: i32) -> Self {
        debug_assert!(matches!(legs.first(), Some(PathLeg::Access { .. })));
        debug_assert!(matches!(legs.last(), Some(PathLeg::Egress { .. })));
        debug_assert!(legs.windows(2).all(|w| w[0].to_time() <= w[1].from_time()));
        Self { legs, c1 }
    }

    /// Build a one-ride path: access, a single transit leg, egress.
    ///
    /// The access leg is shifted to end `board_slack` seconds before
    /// boarding, and the egress leg starts `alight_slack` seconds after
    /// alighting.
    pub(crate) fn direct(
        access: &AccessLeg,
        board_slack: i32,
        ride: PathLeg<T>,
        alight_slack: i32,
        egress: &EgressLeg,
        transit_c1: i32,
    ) -> Self {
        let board_time = ride.from_time();
        let alight_time = ride.to_time();
        let access_end = board_time - board_slack;
        let egress_start = alight_time + alight_slack;

        let legs = vec![
            PathLeg::Access {
                stop: access.stop(),
                from_time: access_end - access.duration(),
                to_time: access_end,
                c1: access.c1(),
            },
            ride,
            PathLeg::Egress {
                stop: egress.stop(),
                from_time: egress_start,
                to_time: egress_start + egress.duration(),
                c1: egress.c1(),
            },
        ];
        Self::new(legs, access.c1() + transit_c1 + egress.c1())
    }

    pub fn legs(&self) -> &[PathLeg<T>] {
        &self.legs
    }

    /// Returns the time the path leaves the origin.
    pub fn start_time(&self) -> TransitTime {
        self.legs[0].from_time()
    }

    /// Returns the time the path reaches the destination.
    pub fn end_time(&self) -> TransitTime {
        self.legs[self.legs.len() - 1].to_time()
    }

    pub fn duration(&self) -> i32 {
        self.end_time() - self.start_time()
    }

    /// Returns the total generalized cost.
    pub fn c1(&self) -> i32 {
        self.c1
    }

    pub fn transit_legs(&self) -> impl Iterator<Item = &PathLeg<T>> {
        self.legs.iter().filter(|leg| leg.is_transit())
    }

    pub fn number_of_transfers(&self) -> usize {
        self.transit_legs().count().saturating_sub(1)
    }

    /// Returns the departure as a calendar date-time on `service_date`.
    pub fn start_date_time(&self, service_date: NaiveDate) -> Option<NaiveDateTime> {
        self.start_time().to_date_time(service_date)
    }
}

impl<T: Clone> RaptorPath<T> {
    /// Rebuild the path ending at arrival `id` and continuing via `egress`.
    ///
    /// # Panics
    ///
    /// Panics if `egress` does not leave from the arrival's stop.
    pub fn from_stop_arrival(arena: &ArrivalArena<T>, id: ArrivalId, egress: &EgressLeg) -> Self {
        let last = arena.get(id);
        assert_eq!(
            last.stop(),
            egress.stop(),
            "egress must leave from the arrival's stop"
        );

        // A transit arrival already includes the alight slack
        let mut legs = Vec::new();
        legs.push(PathLeg::Egress {
            stop: egress.stop(),
            from_time: last.arrival_time(),
            to_time: last.arrival_time() + egress.duration(),
            c1: egress.c1(),
        });

        for (_, arrival) in arena.chain(id) {
            let to_time = arrival.arrival_time();
            let leg = match arrival.kind() {
                ArrivalKind::Access { leg } => PathLeg::Access {
                    stop: leg.stop(),
                    from_time: to_time - leg.duration(),
                    to_time,
                    c1: leg.c1(),
                },
                ArrivalKind::Transit {
                    route,
                    trip,
                    board_stop,
                    board_time,
                    alight_time,
                } => PathLeg::Transit {
                    route: *route,
                    trip: trip.clone(),
                    board_stop: *board_stop,
                    board_time: *board_time,
                    alight_stop: arrival.stop(),
                    alight_time: *alight_time,
                },
                ArrivalKind::Transfer {
                    from_stop,
                    duration,
                } => PathLeg::Transfer {
                    from_stop: *from_stop,
                    to_stop: arrival.stop(),
                    from_time: to_time - *duration,
                    to_time,
                },
            };
            legs.push(leg);
        }
        legs.reverse();

        Self::new(legs, last.c1() + egress.c1())
    }
}

impl<T> fmt::Display for RaptorPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leg in &self.legs {
            match leg {
                PathLeg::Access { .. } | PathLeg::Transfer { .. } | PathLeg::Egress { .. } => {
                    write!(f, "Walk {}s", leg.duration())?;
                }
                PathLeg::Transit {
                    route,
                    board_time,
                    alight_time,
                    ..
                } => write!(f, "{route} {board_time} {alight_time}")?,
            }
            if let Some(stop) = leg.end_stop() {
                write!(f, " ~ {stop} ~ ")?;
            }
        }
        write!(
            f,
            " [{} {} {}s, {} transfer(s), c1 {}]",
            self.start_time(),
            self.end_time(),
            self.duration(),
            self.number_of_transfers(),
            self.c1
        )
    }
}
