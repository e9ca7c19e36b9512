//! Priority queue for the transform frontier.
//!
//! A plain binary min-heap over `(index, cost)` entries. There is no
//! decrease-key; the driver discards stale entries at pop time, so the heap
//! may transiently hold several entries for the same pixel.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::util::CostScalar;

/// Frontier entry: a pixel index and the path cost proposed for it.
#[derive(Clone, Copy, Debug)]
pub struct QueueEntry<T> {
    /// Linear pixel index into the output image.
    pub idx: usize,
    /// Accumulated path cost.
    pub cost: T,
}

impl<T: CostScalar> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl<T: CostScalar> Eq for QueueEntry<T> {}

impl<T: CostScalar> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: CostScalar> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum; reversing the cost order makes the
        // cheapest entry surface first. Entries compare by cost only.
        other.cost.total_cmp(&self.cost)
    }
}

/// Min-heap of frontier entries, cheapest first.
#[derive(Clone, Debug)]
pub struct CostQueue<T: CostScalar> {
    heap: BinaryHeap<QueueEntry<T>>,
}

impl<T: CostScalar> CostQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with space for `capacity` entries.
    ///
    /// Reserving a few multiples of the frame's pixel count up front keeps
    /// the transform free of heap growth across frames.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Reserves space for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
    }

    /// Pushes an entry.
    pub fn push(&mut self, entry: QueueEntry<T>) {
        self.heap.push(entry);
    }

    /// Returns the cheapest entry without removing it.
    pub fn peek(&self) -> Option<&QueueEntry<T>> {
        self.heap.peek()
    }

    /// Removes and returns the cheapest entry.
    pub fn pop(&mut self) -> Option<QueueEntry<T>> {
        self.heap.pop()
    }

    /// Returns true when the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the number of entries the queue can hold without growing.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Drops all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T: CostScalar> Default for CostQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
