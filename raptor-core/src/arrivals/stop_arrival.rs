//! Stop arrival records.
//!
//! A stop arrival is one way of reaching a stop: when, at what cost, after
//! how many boardings, and how the previous arrival led here. Arrivals form
//! a tree through their `previous` handles; walking the handles back to the
//! root yields the path that produced the arrival.

use std::fmt;

use crate::domain::{AccessLeg, RouteIndex, StopIndex, TransitTime};

use super::ArrivalId;

/// How a stop (or the destination) was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrivalMode {
    Access,
    Transit,
    Transfer,
    Egress,
}

impl fmt::Display for ArrivalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArrivalMode::Access => "access",
            ArrivalMode::Transit => "transit",
            ArrivalMode::Transfer => "transfer",
            ArrivalMode::Egress => "egress",
        };
        f.write_str(name)
    }
}

/// Mode-specific data of a stop arrival.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrivalKind<T> {
    /// Reached from the origin by a street leg.
    Access { leg: AccessLeg },
    /// Reached by riding `trip` from `board_stop`. The stop arrival time
    /// is `alight_time` plus the alight slack.
    Transit {
        route: RouteIndex,
        trip: T,
        board_stop: StopIndex,
        board_time: TransitTime,
        alight_time: TransitTime,
    },
    /// Reached by walking from `from_stop`.
    Transfer { from_stop: StopIndex, duration: i32 },
}

/// A ride on one trip, from boarding to alighting.
///
/// `c1` is the cost added by the ride, including any wait before boarding.
/// The stop is reached `alight_slack` seconds after the vehicle arrives.
#[derive(Debug, Clone)]
pub struct TransitRide<T> {
    pub route: RouteIndex,
    pub trip: T,
    pub board_stop: StopIndex,
    pub board_time: TransitTime,
    pub alight_stop: StopIndex,
    pub alight_time: TransitTime,
    pub alight_slack: i32,
    pub c1: i32,
}

/// One arrival at a stop.
///
/// # Invariants
///
/// - Only access arrivals have no `previous` arrival.
/// - `c1` never decreases along the `previous` chain.
/// - `round` counts boardings: 0 for access, +1 per transit ride.
#[derive(Debug, Clone, PartialEq)]
pub struct StopArrival<T> {
    stop: StopIndex,
    arrival_time: TransitTime,
    c1: i32,
    round: u32,
    kind: ArrivalKind<T>,
    previous: Option<ArrivalId>,
}

impl<T> StopArrival<T> {
    /// Arrive at the access leg's stop, leaving the origin at `departure_time`.
    pub fn access(leg: AccessLeg, departure_time: TransitTime) -> Self {
        Self {
            stop: leg.stop(),
            arrival_time: departure_time + leg.duration(),
            c1: leg.c1(),
            round: 0,
            kind: ArrivalKind::Access { leg },
            previous: None,
        }
    }

    /// Arrive by riding a trip that was boarded at `from`'s stop.
    ///
    /// # Panics
    ///
    /// Panics if the ride does not start at `from`'s stop, alights before
    /// it boards, or has a negative alight slack.
    pub fn transit(previous: ArrivalId, from: &StopArrival<T>, ride: TransitRide<T>) -> Self {
        assert_eq!(
            ride.board_stop, from.stop,
            "ride must board where the previous arrival ends"
        );
        assert!(
            ride.alight_time >= ride.board_time,
            "ride alights at {} before boarding at {}",
            ride.alight_time,
            ride.board_time
        );
        assert!(ride.alight_slack >= 0, "alight slack must not be negative");
        debug_assert!(ride.board_time >= from.arrival_time);
        debug_assert!(ride.c1 >= 0);

        Self {
            stop: ride.alight_stop,
            arrival_time: ride.alight_time + ride.alight_slack,
            c1: from.c1 + ride.c1,
            round: from.round + 1,
            kind: ArrivalKind::Transit {
                route: ride.route,
                trip: ride.trip,
                board_stop: ride.board_stop,
                board_time: ride.board_time,
                alight_time: ride.alight_time,
            },
            previous: Some(previous),
        }
    }

    /// Arrive at `to_stop` by walking from `from`'s stop.
    ///
    /// # Panics
    ///
    /// Panics if `duration` or `c1` is negative.
    pub fn transfer(
        previous: ArrivalId,
        from: &StopArrival<T>,
        to_stop: StopIndex,
        duration: i32,
        c1: i32,
    ) -> Self {
        assert!(duration >= 0, "transfer duration must not be negative");
        assert!(c1 >= 0, "transfer cost must not be negative");

        Self {
            stop: to_stop,
            arrival_time: from.arrival_time + duration,
            c1: from.c1 + c1,
            round: from.round,
            kind: ArrivalKind::Transfer {
                from_stop: from.stop,
                duration,
            },
            previous: Some(previous),
        }
    }

    pub fn stop(&self) -> StopIndex {
        self.stop
    }

    pub fn arrival_time(&self) -> TransitTime {
        self.arrival_time
    }

    /// Returns the generalized cost accumulated up to this arrival.
    pub fn c1(&self) -> i32 {
        self.c1
    }

    /// Returns the number of transit rides taken to get here.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn kind(&self) -> &ArrivalKind<T> {
        &self.kind
    }

    pub fn previous(&self) -> Option<ArrivalId> {
        self.previous
    }

    pub fn mode(&self) -> ArrivalMode {
        match self.kind {
            ArrivalKind::Access { .. } => ArrivalMode::Access,
            ArrivalKind::Transit { .. } => ArrivalMode::Transit,
            ArrivalKind::Transfer { .. } => ArrivalMode::Transfer,
        }
    }

    /// Returns true if the stop was reached on board a vehicle.
    pub fn arrived_on_board(&self) -> bool {
        matches!(self.kind, ArrivalKind::Transit { .. })
    }

    /// Returns the number of transfers between rides so far.
    pub fn number_of_transfers(&self) -> u32 {
        self.round.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessEgress;

    fn access(stop: usize, duration: i32, c1: i32) -> StopArrival<()> {
        let leg = AccessEgress::new(StopIndex(stop), duration, c1).unwrap();
        StopArrival::access(leg, TransitTime::hms(8, 0, 0))
    }

    fn ride(from: usize, to: usize, board: i32, alight: i32, c1: i32) -> TransitRide<()> {
        TransitRide {
            route: RouteIndex(0),
            trip: (),
            board_stop: StopIndex(from),
            board_time: TransitTime::from_seconds(board),
            alight_stop: StopIndex(to),
            alight_time: TransitTime::from_seconds(alight),
            alight_slack: 0,
            c1,
        }
    }

    #[test]
    fn access_arrival() {
        let a = access(3, 300, 500);
        assert_eq!(a.stop(), StopIndex(3));
        assert_eq!(a.arrival_time(), TransitTime::from_seconds(29_100));
        assert_eq!(a.c1(), 500);
        assert_eq!(a.round(), 0);
        assert_eq!(a.mode(), ArrivalMode::Access);
        assert!(a.previous().is_none());
        assert!(!a.arrived_on_board());
        assert_eq!(a.number_of_transfers(), 0);
    }

    #[test]
    fn transit_accumulates_cost_and_round() {
        let a = access(0, 300, 500);
        let id = ArrivalId::new(0);
        let t = StopArrival::transit(id, &a, ride(0, 2, 29_400, 30_000, 1000));

        assert_eq!(t.stop(), StopIndex(2));
        assert_eq!(t.arrival_time(), TransitTime::from_seconds(30_000));
        assert_eq!(t.c1(), 1500);
        assert_eq!(t.round(), 1);
        assert_eq!(t.previous(), Some(id));
        assert_eq!(t.mode(), ArrivalMode::Transit);
        assert!(t.arrived_on_board());
        assert_eq!(t.number_of_transfers(), 0);
    }

    #[test]
    fn alight_slack_delays_the_stop_arrival() {
        let a = access(0, 300, 500);
        let r = TransitRide {
            alight_slack: 45,
            ..ride(0, 2, 29_400, 30_000, 1000)
        };
        let t = StopArrival::transit(ArrivalId::new(0), &a, r);

        assert_eq!(t.arrival_time(), TransitTime::from_seconds(30_045));
        assert!(matches!(
            t.kind(),
            ArrivalKind::Transit { alight_time, .. } if *alight_time == TransitTime::from_seconds(30_000)
        ));
    }

    #[test]
    fn transfer_keeps_round() {
        let a = access(0, 300, 500);
        let t = StopArrival::transit(ArrivalId::new(0), &a, ride(0, 2, 29_400, 30_000, 1000));
        let w = StopArrival::transfer(ArrivalId::new(1), &t, StopIndex(5), 120, 240);

        assert_eq!(w.stop(), StopIndex(5));
        assert_eq!(w.arrival_time(), TransitTime::from_seconds(30_120));
        assert_eq!(w.c1(), 1740);
        assert_eq!(w.round(), 1);
        assert_eq!(w.mode(), ArrivalMode::Transfer);
        assert!(matches!(
            w.kind(),
            ArrivalKind::Transfer { from_stop: StopIndex(2), duration: 120 }
        ));
    }

    #[test]
    #[should_panic(expected = "ride must board where the previous arrival ends")]
    fn transit_from_wrong_stop_panics() {
        let a = access(0, 300, 500);
        let _ = StopArrival::transit(ArrivalId::new(0), &a, ride(1, 2, 29_400, 30_000, 0));
    }

    #[test]
    fn mode_display() {
        assert_eq!(ArrivalMode::Transfer.to_string(), "transfer");
    }
}
