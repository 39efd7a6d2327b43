use std::hash::BuildHasherDefault;
use indexmap::{IndexMap};
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;


/// Array-backed binary heap ordered by an injected comparator
/// less_than(a, b) == true means a must be popped before b
/// Duplicate entries are allowed - the consumer discards stale ones on pop
pub struct Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    items: Vec<T>,
    less_than: F,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{

    /// Create an empty heap owning its ordering rule
    pub fn new(less_than: F) -> Self {
        Self {
            items: Vec::new(),
            less_than,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append then sift up until the parent is at least as urgent
    pub fn push(&mut self, item: T) {
        self.items.push(item);

        let mut current = self.items.len() - 1;
        while current > 0 {
            let parent = (current - 1) / 2;
            if !(self.less_than)(&self.items[current], &self.items[parent]) {
                break;
            }
            self.items.swap(current, parent);
            current = parent;
        }
    }

    /// Remove and return the most urgent element
    /// The last element replaces the root and sifts down
    pub fn pop(&mut self) -> Option<T> {
        if self.items.len() <= 1 {
            return self.items.pop();
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        self.sift_down(0);

        top
    }

    /// Restore heap order below `current` after a root replacement
    fn sift_down(&mut self, mut current: usize) {
        loop {
            let left = current * 2 + 1;
            let right = current * 2 + 2;
            let mut smallest = current;

            if left < self.items.len() && (self.less_than)(&self.items[left], &self.items[smallest]) {
                smallest = left;
            }
            if right < self.items.len() && (self.less_than)(&self.items[right], &self.items[smallest]) {
                smallest = right;
            }

            if smallest == current {
                break;
            }

            self.items.swap(current, smallest);
            current = smallest;
        }
    }
}
