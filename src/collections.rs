use std::{collections::HashMap, fmt::Debug, hash::Hash};

///
/// Hands out 1-based sequence numbers per key, in the order keys are seen
///
pub struct Counter<K> {
    counts: HashMap<K, usize>,
}

impl<K> Debug for Counter<K> where K : Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counter").field("counts", &self.counts).finish()
    }
}

impl<K : Eq + Hash> Counter<K> {
    ///
    /// Creates a new, empty Counter
    ///
    pub fn new() -> Self {
        Self { counts: HashMap::new() }
    }

    ///
    /// Increments the count for `key`, returning the new value.
    /// The first call for a key returns 1.
    ///
    pub fn next(&mut self, key: K) -> usize {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    ///
    /// The number of times `key` has been counted so far
    ///
    #[cfg(test)]
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;

    #[test]
    fn test_counter_starts_at_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.get(&"book"), 0);
        assert_eq!(counter.next("book"), 1);
        assert_eq!(counter.get(&"book"), 1);
    }

    #[test]
    fn test_counter_tracks_keys_independently() {
        let mut counter = Counter::new();
        assert_eq!(counter.next("first"), 1);
        assert_eq!(counter.next("second"), 1);
        assert_eq!(counter.next("first"), 2);
        assert_eq!(counter.next("first"), 3);
        assert_eq!(counter.next("second"), 2);

        assert_eq!(counter.get(&"first"), 3);
        assert_eq!(counter.get(&"second"), 2);
        assert_eq!(counter.get(&"third"), 0);
    }
}
