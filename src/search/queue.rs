use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{CityId, EdgeIndex, Weight};

/// Marks the queue entry of the source city, which is not reached via any
/// edge.
pub const NO_EDGE: EdgeIndex = EdgeIndex::MAX;

#[derive(Copy, Clone, Debug)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub via: EdgeIndex,
    pub city: CityId,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // All keys are flipped. Equal weights are settled in edge load order
        // and then by city id, so the pop order never depends on insertion.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.via.cmp(&self.via))
            .then_with(|| other.city.cmp(&self.city))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DijkstraQueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraQueueElement {}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, via: EdgeIndex, city: CityId) -> DijkstraQueueElement {
        DijkstraQueueElement { weight, via, city }
    }
}

#[derive(Clone, Default)]
pub struct HeapQueue {
    queue: BinaryHeap<DijkstraQueueElement>,
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, state: DijkstraQueueElement) {
        self.queue.push(state)
    }

    pub fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.queue.pop()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
