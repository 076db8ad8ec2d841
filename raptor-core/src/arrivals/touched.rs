//! Bit-set of stops touched in the current round.

use crate::domain::StopIndex;

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-size set of stop indices, one bit per stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedStops {
    words: Vec<u64>,
    capacity: usize,
}

impl TouchedStops {
    /// Create an empty set for stops `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
        }
    }

    /// Add `stop`, returning true if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `stop` is outside the set's capacity.
    pub fn insert(&mut self, stop: StopIndex) -> bool {
        assert!(
            stop.0 < self.capacity,
            "{stop} outside touched set of {} stops",
            self.capacity
        );
        let (word, bit) = (stop.0 / WORD_BITS, stop.0 % WORD_BITS);
        let was_set = self.words[word] & (1 << bit) != 0;
        self.words[word] |= 1 << bit;
        !was_set
    }

    pub fn contains(&self, stop: StopIndex) -> bool {
        stop.0 < self.capacity && self.words[stop.0 / WORD_BITS] & (1 << (stop.0 % WORD_BITS)) != 0
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the members in ascending stop order.
    pub fn iter(&self) -> impl Iterator<Item = StopIndex> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(StopIndex(i * WORD_BITS + bit))
            })
        })
    }
}
