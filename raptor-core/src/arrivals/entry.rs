//! Per-stop Pareto front items.

use crate::domain::TransitTime;
use crate::pareto::ParetoComparator;

use super::{ArrivalId, StopArrival};

/// The criteria of a stop arrival, plus a handle to the full record.
///
/// Fronts compare these small copies; the arrival itself stays in the
/// arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalEntry {
    pub id: ArrivalId,
    pub arrival_time: TransitTime,
    pub c1: i32,
    pub round: u32,
    pub arrived_on_board: bool,
}

impl ArrivalEntry {
    pub fn new<T>(id: ArrivalId, arrival: &StopArrival<T>) -> Self {
        Self {
            id,
            arrival_time: arrival.arrival_time(),
            c1: arrival.c1(),
            round: arrival.round(),
            arrived_on_board: arrival.arrived_on_board(),
        }
    }
}

/// Dominance between arrivals at the same stop.
///
/// Earlier arrival, lower cost and fewer rounds are better. Arriving on
/// board beats arriving on foot, since only the former may still transfer
/// by walking. `right` dominates `left` when it is at least as good on
/// every criterion and strictly better on one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopArrivalComparator;

impl ParetoComparator<ArrivalEntry> for StopArrivalComparator {
    fn dominates(&self, right: &ArrivalEntry, left: &ArrivalEntry) -> bool {
        let no_worse = right.arrival_time <= left.arrival_time
            && right.c1 <= left.c1
            && right.round <= left.round
            && right.arrived_on_board >= left.arrived_on_board;
        let better = right.arrival_time < left.arrival_time
            || right.c1 < left.c1
            || right.round < left.round
            || right.arrived_on_board > left.arrived_on_board;
        no_worse && better
    }

    fn equivalent(&self, right: &ArrivalEntry, left: &ArrivalEntry) -> bool {
        right.arrival_time == left.arrival_time
            && right.c1 == left.c1
            && right.round == left.round
            && right.arrived_on_board == left.arrived_on_board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: i32, c1: i32, round: u32, on_board: bool) -> ArrivalEntry {
        ArrivalEntry {
            id: ArrivalId::new(0),
            arrival_time: TransitTime::from_seconds(time),
            c1,
            round,
            arrived_on_board: on_board,
        }
    }

    #[test]
    fn better_on_one_criterion_dominates() {
        let cmp = StopArrivalComparator;
        let base = entry(100, 100, 1, true);
        assert!(cmp.dominates(&entry(99, 100, 1, true), &base));
        assert!(cmp.dominates(&entry(100, 99, 1, true), &base));
        assert!(cmp.dominates(&entry(100, 100, 0, true), &base));
        assert!(cmp.dominates(&base, &entry(100, 100, 1, false)));
    }

    #[test]
    fn trade_offs_do_not_dominate() {
        let cmp = StopArrivalComparator;
        let fast = entry(100, 500, 1, true);
        let cheap = entry(200, 100, 1, true);
        assert!(!cmp.dominates(&fast, &cheap));
        assert!(!cmp.dominates(&cheap, &fast));

        let walked_earlier = entry(90, 100, 1, false);
        let rode = entry(100, 100, 1, true);
        assert!(!cmp.dominates(&walked_earlier, &rode));
        assert!(!cmp.dominates(&rode, &walked_earlier));
    }

    #[test]
    fn equal_entries_do_not_dominate() {
        let cmp = StopArrivalComparator;
        let a = entry(100, 100, 1, true);
        assert!(!cmp.dominates(&a, &a));
    }

    #[test]
    fn equivalence_ignores_the_arrival_handle() {
        let cmp = StopArrivalComparator;
        let a = entry(100, 100, 1, true);
        let b = ArrivalEntry {
            id: ArrivalId::new(7),
            ..a
        };
        assert!(cmp.equivalent(&a, &b));
        assert!(!cmp.equivalent(&a, &entry(100, 100, 1, false)));
        assert!(!cmp.equivalent(&a, &entry(100, 101, 1, true)));
    }
}
