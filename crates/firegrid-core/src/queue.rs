//! Minimal ascending priority queue.
//!
//! Entries are kept as `(priority, item)` pairs in a sorted [`VecDeque`].
//! Insertion places a new entry after every entry with an equal or lower
//! priority, so items with tied priorities come out in the order they went
//! in. NaN priorities sort after everything else (see [`crate::ordering`]).
//!
//! Insertion is linear in the queue length, which is fine for the tens of
//! nodes an allocation pass deals with. [`std::collections::BinaryHeap`] is
//! the better choice at larger scale but gives up insertion-order ties.

use core::cmp::Ordering;
use std::collections::VecDeque;

use crate::ordering::ascending_nan_last;

/// A min-priority queue with stable ordering for equal priorities.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T> {
    entries: VecDeque<(f64, T)>,
}

impl<T> MinPriorityQueue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert an item with the given priority.
    pub fn enqueue(&mut self, item: T, priority: f64) {
        let at = self
            .entries
            .partition_point(|(existing, _)| ascending_nan_last(*existing, priority) != Ordering::Greater);
        self.entries.insert(at, (priority, item));
    }

    /// Remove and return the lowest-priority entry.
    pub fn dequeue(&mut self) -> Option<(f64, T)> {
        self.entries.pop_front()
    }

    /// Peek at the lowest-priority entry without removing it.
    pub fn peek(&self) -> Option<(f64, &T)> {
        self.entries.front().map(|(priority, item)| (*priority, item))
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, f64)> for MinPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, f64)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue(item, priority);
        }
    }
}

impl<T> FromIterator<(T, f64)> for MinPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
