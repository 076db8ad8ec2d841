//! Relaxed path dominance.

use crate::domain::RelaxFunction;
use crate::pareto::ParetoComparator;
use crate::path::RaptorPath;

/// Dominance between paths with a cost tolerance.
///
/// `right` dominates `left` if it starts no earlier, ends no later, and
/// stays no more expensive even after its cost is relaxed; at least one of
/// the three must hold strictly. A wider relax function makes dominance
/// harder, so more paths survive. With [`RelaxFunction::NORMAL`] this is
/// plain Pareto dominance on start time, end time and cost.
///
/// Paths with equal criteria are never equivalent here: each is a distinct
/// trip, and all of them are kept.
#[derive(Debug, Clone, Copy)]
pub struct RelaxedPathComparator {
    relax: RelaxFunction,
}

impl RelaxedPathComparator {
    pub fn new(relax: RelaxFunction) -> Self {
        Self { relax }
    }

    pub fn relax_function(&self) -> RelaxFunction {
        self.relax
    }
}

impl<T> ParetoComparator<RaptorPath<T>> for RelaxedPathComparator {
    fn dominates(&self, right: &RaptorPath<T>, left: &RaptorPath<T>) -> bool {
        let relaxed_c1 = self.relax.relax(right.c1());
        let no_worse = right.start_time() >= left.start_time()
            && right.end_time() <= left.end_time()
            && relaxed_c1 <= left.c1();
        let better = right.start_time() > left.start_time()
            || right.end_time() < left.end_time()
            || relaxed_c1 < left.c1();
        no_worse && better
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteIndex, StopIndex, TransitTime};
    use crate::path::PathLeg;

    /// A path leaving at `start`, riding to `end`, costing `c1`.
    pub(super) fn path(id: usize, start: i32, end: i32, c1: i32) -> RaptorPath<usize> {
        let legs = vec![
            PathLeg::Access {
                stop: StopIndex(0),
                from_time: TransitTime::from_seconds(start),
                to_time: TransitTime::from_seconds(start),
                c1: 0,
            },
            PathLeg::Transit {
                route: RouteIndex(0),
                trip: id,
                board_stop: StopIndex(0),
                board_time: TransitTime::from_seconds(start),
                alight_stop: StopIndex(1),
                alight_time: TransitTime::from_seconds(end),
            },
            PathLeg::Egress {
                stop: StopIndex(1),
                from_time: TransitTime::from_seconds(end),
                to_time: TransitTime::from_seconds(end),
                c1: 0,
            },
        ];
        RaptorPath::new(legs, c1)
    }

    #[test]
    fn normal_is_strict_pareto() {
        let cmp = RelaxedPathComparator::new(RelaxFunction::NORMAL);
        let base = path(0, 100, 200, 1000);
        assert!(cmp.dominates(&path(1, 100, 200, 999), &base));
        assert!(cmp.dominates(&path(1, 101, 200, 1000), &base));
        assert!(cmp.dominates(&path(1, 100, 199, 1000), &base));
        assert!(!cmp.dominates(&base, &base));
        assert!(!cmp.dominates(&path(1, 99, 150, 500), &base));
    }

    #[test]
    fn relaxation_keeps_near_optimal_paths() {
        let cmp = RelaxedPathComparator::new(RelaxFunction::new(1.0, 100).unwrap());
        let best = path(0, 100, 200, 1000);

        // Within the tolerance: not dominated
        assert!(!cmp.dominates(&best, &path(1, 100, 200, 1050)));
        assert!(!cmp.dominates(&best, &path(1, 100, 201, 1100)));
        // Beyond it
        assert!(cmp.dominates(&best, &path(1, 100, 200, 1101)));
        // Equal time and cost never dominate
        assert!(!cmp.dominates(&best, &best.clone()));
        assert!(!cmp.equivalent(&best, &path(1, 100, 200, 1000)));
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::tests::path;
    use super::*;
    use crate::pareto::ParetoSet;

    fn paths_strategy() -> impl Strategy<Value = Vec<RaptorPath<usize>>> {
        prop::collection::vec((0..50i32, 0..50i32, 0..3000i32), 0..40).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(id, (start, duration, c1))| path(id, start, start + duration, c1))
                .collect()
        })
    }

    fn relax_strategy() -> impl Strategy<Value = (RelaxFunction, RelaxFunction)> {
        (1.0..2.0f64, 0.0..1.0f64, 0..500i32, 0..500i32).prop_map(
            |(ratio, extra_ratio, slack, extra_slack)| {
                let narrow = RelaxFunction::new(ratio, slack).unwrap();
                let wide = RelaxFunction::new(ratio + extra_ratio, slack + extra_slack).unwrap();
                (narrow, wide)
            },
        )
    }

    fn survivors(paths: &[RaptorPath<usize>], relax: RelaxFunction) -> BTreeSet<usize> {
        let mut set = ParetoSet::new(RelaxedPathComparator::new(relax));
        for p in paths {
            let _ = set.add(p.clone());
        }
        set.iter()
            .map(|p| match p.legs()[1] {
                crate::path::PathLeg::Transit { trip, .. } => trip,
                _ => unreachable!(),
            })
            .collect()
    }

    proptest! {
        #[test]
        fn wider_relaxation_keeps_a_superset(
            paths in paths_strategy(),
            (narrow, wide) in relax_strategy(),
        ) {
            let normal = survivors(&paths, RelaxFunction::NORMAL);
            let narrow = survivors(&paths, narrow);
            let wide = survivors(&paths, wide);
            prop_assert!(normal.is_subset(&narrow));
            prop_assert!(narrow.is_subset(&wide));
        }

        #[test]
        fn relaxed_front_is_order_independent(
            paths in paths_strategy(),
            (relax, _) in relax_strategy(),
        ) {
            let forward = survivors(&paths, relax);
            let mut reversed = paths.clone();
            reversed.reverse();
            prop_assert_eq!(forward, survivors(&reversed, relax));
        }
    }
}
