//! Dominance comparators.

/// A strict dominance relation over `T`.
///
/// Implementations must be irreflexive (`dominates(a, a)` is false) and
/// should be transitive. They need not be total: two items may be
/// incomparable, in which case both survive in a Pareto set.
pub trait ParetoComparator<T> {
    /// Returns true if `right` dominates `left`.
    fn dominates(&self, right: &T, left: &T) -> bool;

    /// Returns true if `right` and `left` have the same criteria.
    ///
    /// A Pareto set rejects a new item that is equivalent to a member, so
    /// offering the same criteria twice leaves the set unchanged. The
    /// default treats no two items as equivalent.
    fn equivalent(&self, _right: &T, _left: &T) -> bool {
        false
    }
}

impl<T, F> ParetoComparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn dominates(&self, right: &T, left: &T) -> bool {
        self(right, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<C: ParetoComparator<i32>>(c: &C) -> bool {
        c.dominates(&1, &2)
    }

    #[test]
    fn closures_are_comparators() {
        assert!(check(&|r: &i32, l: &i32| r < l));
        assert!(!check(&|r: &i32, l: &i32| r > l));
    }

    #[test]
    fn closures_have_no_equivalence() {
        let cmp = |r: &i32, l: &i32| r < l;
        assert!(!cmp.equivalent(&1, &1));
    }
}
