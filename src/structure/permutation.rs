// Fri Oct 16 2026 - Alex

/// Iterative Heap's algorithm over an owned buffer.
///
/// Each call to [`next_permutation`](Self::next_permutation) performs at most
/// one swap and lends out the current arrangement, so only one ordering is
/// ever held in memory. This cannot be a std `Iterator` because the yielded
/// slice borrows the generator. The enumeration order matches the classic
/// recursive formulation, starting with the input order.
#[derive(Debug, Clone)]
pub struct HeapPermutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
}

impl<T> HeapPermutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            index: 1,
            started: false,
        }
    }

    /// Number of arrangements this generator yields in total (`n!`), or
    /// `None` if that overflows `u64`.
    pub fn total(&self) -> Option<u64> {
        (1..=self.items.len() as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
    }

    pub fn next_permutation(&mut self) -> Option<&[T]> {
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }

        while self.index < self.items.len() {
            let i = self.index;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.index = 1;
                return Some(&self.items);
            }
            self.counters[i] = 0;
            self.index += 1;
        }
        None
    }
}
