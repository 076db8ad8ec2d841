//! The Pareto set container.

use super::ParetoComparator;

/// Receives notifications when a [`ParetoSet`] changes.
///
/// For a single accepted insertion, every `notify_element_evicted` call
/// happens before the `notify_element_added` call. Rejected insertions,
/// whether dominated or equivalent to a member, produce no notification at
/// all.
pub trait ParetoSetEventListener<T> {
    /// An item was appended to the set.
    fn notify_element_added(&mut self, _added: &T) {}

    /// `evicted` was removed because `by` dominates it.
    fn notify_element_evicted(&mut self, _evicted: &T, _by: &T) {}
}

/// A listener that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<T> ParetoSetEventListener<T> for NoopListener {}

/// Result of offering an item to a [`ParetoSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// The item joined the set, possibly evicting others.
    Accepted,
    /// A current member dominates the item or has the same criteria; the
    /// set is unchanged.
    Rejected,
}

impl AddOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, AddOutcome::Accepted)
    }
}

/// A set of mutually non-dominated items.
///
/// Items are kept in insertion order. A round marker splits the set into
/// items that were present at the last [`mark`](ParetoSet::mark) and items
/// added after it.
///
/// Insertion is O(n) in the size of the set. Fronts stay small in
/// practice because they are bounded by the number of independent
/// criteria.
///
/// # Examples
///
/// ```
/// use raptor_core::pareto::{AddOutcome, ParetoSet};
///
/// // (arrival time, cost): lower is better in both
/// let mut set = ParetoSet::new(|r: &(i32, i32), l: &(i32, i32)| {
///     r.0 <= l.0 && r.1 <= l.1 && r != l
/// });
///
/// assert_eq!(set.add((10, 5)), AddOutcome::Accepted);
/// assert_eq!(set.add((12, 3)), AddOutcome::Accepted);
/// assert_eq!(set.add((11, 6)), AddOutcome::Rejected);
/// assert_eq!(set.add((9, 3)), AddOutcome::Accepted);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![&(9, 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct ParetoSet<T, C> {
    elements: Vec<T>,
    comparator: C,
    /// Number of leading elements that were present at the last mark.
    marker: usize,
}

impl<T, C: ParetoComparator<T>> ParetoSet<T, C> {
    /// Create an empty set governed by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
            marker: 0,
        }
    }

    /// Offer an item without observing events.
    pub fn add(&mut self, item: T) -> AddOutcome {
        self.add_with_listener(item, &mut NoopListener)
    }

    /// Offer an item, reporting evictions and the addition to `listener`.
    ///
    /// If any member dominates `item`, or is equivalent to it under the
    /// comparator, the set is left untouched and no event fires. Otherwise every member dominated by `item` is removed
    /// (one eviction event each, in removal order), then `item` is appended
    /// and the added event fires.
    pub fn add_with_listener<L>(&mut self, item: T, listener: &mut L) -> AddOutcome
    where
        L: ParetoSetEventListener<T> + ?Sized,
    {
        if self.is_dominated(&item) || self.contains_equivalent(&item) {
            return AddOutcome::Rejected;
        }

        let mut evicted = Vec::new();
        let mut i = 0;
        while i < self.elements.len() {
            if self.comparator.dominates(&item, &self.elements[i]) {
                evicted.push(self.elements.remove(i));
                if i < self.marker {
                    self.marker -= 1;
                }
            } else {
                i += 1;
            }
        }

        for e in &evicted {
            listener.notify_element_evicted(e, &item);
        }

        self.elements.push(item);
        let added = &self.elements[self.elements.len() - 1];
        listener.notify_element_added(added);

        AddOutcome::Accepted
    }

    /// Returns true if some member dominates `item`.
    pub fn is_dominated(&self, item: &T) -> bool {
        self.elements
            .iter()
            .any(|e| self.comparator.dominates(e, item))
    }

    /// Returns true if some member has the same criteria as `item`.
    pub fn contains_equivalent(&self, item: &T) -> bool {
        self.elements
            .iter()
            .any(|e| self.comparator.equivalent(e, item))
    }

    /// Record the current size as a round boundary.
    pub fn mark(&mut self) {
        self.marker = self.elements.len();
    }

    /// Iterate over the members added since the last [`mark`](Self::mark).
    ///
    /// Each call returns a fresh iterator, so the sequence can be walked
    /// again after it is exhausted.
    pub fn elements_after_marker(&self) -> std::slice::Iter<'_, T> {
        self.elements[self.marker..].iter()
    }

    /// Returns true if members were added since the last mark.
    pub fn has_elements_after_marker(&self) -> bool {
        self.marker < self.elements.len()
    }

    /// Iterate over all members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove every member and reset the marker.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.marker = 0;
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Consume the set, returning its members in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<'a, T, C> IntoIterator for &'a ParetoSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Pair = (i32, i32);

    /// Lower is better on both axes.
    fn pair_dominates(r: &Pair, l: &Pair) -> bool {
        r.0 <= l.0 && r.1 <= l.1 && (r.0 < l.0 || r.1 < l.1)
    }

    struct LowerIsBetter;

    impl ParetoComparator<Pair> for LowerIsBetter {
        fn dominates(&self, right: &Pair, left: &Pair) -> bool {
            pair_dominates(right, left)
        }

        fn equivalent(&self, right: &Pair, left: &Pair) -> bool {
            right == left
        }
    }

    fn new_set() -> ParetoSet<Pair, LowerIsBetter> {
        ParetoSet::new(LowerIsBetter)
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl ParetoSetEventListener<Pair> for Recorder {
        fn notify_element_added(&mut self, added: &Pair) {
            self.events.push(format!("add {added:?}"));
        }

        fn notify_element_evicted(&mut self, evicted: &Pair, by: &Pair) {
            self.events.push(format!("evict {evicted:?} by {by:?}"));
        }
    }

    #[test]
    fn accepts_first_item() {
        let mut set = new_set();
        assert_eq!(set.add((5, 5)), AddOutcome::Accepted);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_dominated_item_without_events() {
        let mut set = new_set();
        let _ = set.add((5, 5));

        let mut recorder = Recorder::default();
        let outcome = set.add_with_listener((6, 5), &mut recorder);

        assert_eq!(outcome, AddOutcome::Rejected);
        assert!(!outcome.is_accepted());
        assert!(recorder.events.is_empty());
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![(5, 5)]);
    }

    #[test]
    fn keeps_incomparable_items() {
        let mut set = new_set();
        let _ = set.add((5, 1));
        let _ = set.add((1, 5));
        let _ = set.add((3, 3));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn equivalent_item_is_rejected_without_events() {
        let mut set = new_set();
        let _ = set.add((2, 2));
        set.mark();

        let mut recorder = Recorder::default();
        for _ in 0..5 {
            assert_eq!(
                set.add_with_listener((2, 2), &mut recorder),
                AddOutcome::Rejected
            );
        }

        assert_eq!(set.len(), 1);
        assert!(recorder.events.is_empty());
        assert!(!set.has_elements_after_marker());
    }

    #[test]
    fn without_equivalence_equal_items_coexist() {
        let mut set = ParetoSet::new(pair_dominates as fn(&Pair, &Pair) -> bool);
        let _ = set.add((2, 2));
        assert_eq!(set.add((2, 2)), AddOutcome::Accepted);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn evictions_reported_before_add_in_removal_order() {
        let mut set = new_set();
        let _ = set.add((5, 1));
        let _ = set.add((1, 9));
        let _ = set.add((3, 3));
        let _ = set.add((4, 2));

        let mut recorder = Recorder::default();
        let outcome = set.add_with_listener((1, 1), &mut recorder);

        assert!(outcome.is_accepted());
        assert_eq!(
            recorder.events,
            vec![
                "evict (5, 1) by (1, 1)",
                "evict (1, 9) by (1, 1)",
                "evict (3, 3) by (1, 1)",
                "evict (4, 2) by (1, 1)",
                "add (1, 1)",
            ]
        );
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn insertion_order_preserved_after_eviction() {
        let mut set = new_set();
        let _ = set.add((1, 9));
        let _ = set.add((5, 5));
        let _ = set.add((9, 1));
        let _ = set.add((4, 4));

        assert_eq!(
            set.iter().copied().collect::<Vec<_>>(),
            vec![(1, 9), (9, 1), (4, 4)]
        );
    }

    #[test]
    fn elements_after_marker() {
        let mut set = new_set();
        let _ = set.add((1, 9));
        let _ = set.add((9, 1));
        set.mark();
        assert!(!set.has_elements_after_marker());
        assert_eq!(set.elements_after_marker().count(), 0);

        let _ = set.add((5, 5));
        assert!(set.has_elements_after_marker());
        assert_eq!(
            set.elements_after_marker().copied().collect::<Vec<_>>(),
            vec![(5, 5)]
        );

        // Restartable
        assert_eq!(set.elements_after_marker().count(), 1);
        assert_eq!(set.elements_after_marker().count(), 1);
    }

    #[test]
    fn marker_shifts_when_marked_elements_are_evicted() {
        let mut set = new_set();
        let _ = set.add((1, 9));
        let _ = set.add((5, 5));
        let _ = set.add((9, 1));
        set.mark();

        let _ = set.add((4, 4));
        let after: Vec<_> = set.elements_after_marker().copied().collect();
        assert_eq!(after, vec![(4, 4)]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn evicting_new_elements_keeps_marker() {
        let mut set = new_set();
        let _ = set.add((1, 9));
        set.mark();
        let _ = set.add((5, 5));
        let _ = set.add((4, 4));

        let after: Vec<_> = set.elements_after_marker().copied().collect();
        assert_eq!(after, vec![(4, 4)]);
    }

    #[test]
    fn clear_resets_marker() {
        let mut set = new_set();
        let _ = set.add((1, 1));
        set.mark();
        set.clear();
        assert!(set.is_empty());
        let _ = set.add((2, 2));
        assert_eq!(set.elements_after_marker().count(), 1);
    }

    #[test]
    fn is_dominated_does_not_mutate() {
        let mut set = new_set();
        let _ = set.add((3, 3));
        assert!(set.is_dominated(&(4, 4)));
        assert!(!set.is_dominated(&(2, 5)));
        assert_eq!(set.len(), 1);
    }
}
