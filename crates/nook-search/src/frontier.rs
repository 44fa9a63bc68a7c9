//! Min-priority frontier keyed by (distance, insertion order).

use nook_core::{Coord, Distance};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    distance: Distance,
    seq: u64,
    coord: Coord,
}

// BinaryHeap is a max-heap: reverse both keys so the smallest distance,
// then the earliest insertion, pops first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier with lazy deletion.
///
/// Decreasing a cell's key pushes a fresh entry; the old one stays in the
/// heap and the caller discards it on pop when its distance no longer
/// matches the cell.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, coord: Coord, distance: Distance) {
        self.heap.push(Entry {
            distance,
            seq: self.next_seq,
            coord,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(Coord, Distance)> {
        self.heap.pop().map(|e| (e.coord, e.distance))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: u32, col: u32) -> Coord {
        Coord::new(r, col)
    }

    #[test]
    fn pops_smallest_distance_first() {
        let mut f = Frontier::with_capacity(4);
        f.push(c(0, 0), Distance::new(5));
        f.push(c(0, 1), Distance::new(1));
        f.push(c(0, 2), Distance::new(3));
        assert_eq!(f.pop(), Some((c(0, 1), Distance::new(1))));
        assert_eq!(f.pop(), Some((c(0, 2), Distance::new(3))));
        assert_eq!(f.pop(), Some((c(0, 0), Distance::new(5))));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut f = Frontier::with_capacity(4);
        f.push(c(2, 2), Distance::new(1));
        f.push(c(0, 0), Distance::new(1));
        f.push(c(1, 1), Distance::new(1));
        assert_eq!(f.pop().map(|e| e.0), Some(c(2, 2)));
        assert_eq!(f.pop().map(|e| e.0), Some(c(0, 0)));
        assert_eq!(f.pop().map(|e| e.0), Some(c(1, 1)));
    }

    #[test]
    fn reinsertion_keeps_stale_entry() {
        let mut f = Frontier::default();
        f.push(c(0, 0), Distance::new(4));
        f.push(c(0, 0), Distance::new(2));
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop(), Some((c(0, 0), Distance::new(2))));
        assert_eq!(f.pop(), Some((c(0, 0), Distance::new(4))));
    }
}
