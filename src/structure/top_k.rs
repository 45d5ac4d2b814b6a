// Fri Oct 16 2026 - Alex

/// Keeps the `capacity` entries with the smallest keys, ascending.
///
/// A new entry only displaces existing ones when its key is strictly
/// smaller, so among equal keys the first inserted keeps its rank.
#[derive(Debug, Clone)]
pub struct TopK<K, V> {
    capacity: usize,
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> TopK<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn rank_of(&self, key: &K) -> usize {
        self.entries
            .iter()
            .position(|(existing, _)| key < existing)
            .unwrap_or(self.entries.len())
    }

    /// Inserts the entry if it ranks; `value` is only built when it does.
    pub fn insert_with<F>(&mut self, key: K, value: F) -> bool
    where
        F: FnOnce() -> V,
    {
        let rank = self.rank_of(&key);
        if rank >= self.capacity {
            return false;
        }
        self.entries.insert(rank, (key, value()));
        self.entries.truncate(self.capacity);
        true
    }

    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.insert_with(key, || value)
    }

    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_smallest_in_order() {
        let mut top = TopK::new(3);
        for (key, value) in [(5, 'a'), (3, 'b'), (9, 'c'), (1, 'd'), (4, 'e')] {
            top.insert(key, value);
        }
        assert_eq!(top.into_sorted_vec(), vec![(1, 'd'), (3, 'b'), (4, 'e')]);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let mut top = TopK::new(3);
        top.insert(16, "first");
        top.insert(16, "second");
        top.insert(16, "third");
        assert!(!top.insert(16, "fourth"));
        let values: Vec<_> = top.into_sorted_vec().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_fewer_entries_than_capacity() {
        let mut top = TopK::new(3);
        top.insert(2, ());
        assert_eq!(top.len(), 1);
        assert_eq!(top.into_sorted_vec(), vec![(2, ())]);
    }

    #[test]
    fn test_value_built_only_when_ranked() {
        let mut top = TopK::new(1);
        top.insert(1, 0);
        let mut built = false;
        let accepted = top.insert_with(5, || {
            built = true;
            1
        });
        assert!(!accepted);
        assert!(!built);
        assert!(!top.insert(1, 2));
        assert!(top.insert(0, 3));
        assert_eq!(top.into_sorted_vec(), vec![(0, 3)]);
    }

    #[test]
    fn test_zero_capacity_accepts_nothing() {
        let mut top: TopK<i32, ()> = TopK::new(0);
        assert!(!top.insert(0, ()));
        assert!(top.is_empty());
    }
}
