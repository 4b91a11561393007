//! Best-first queue of cells awaiting exploration.

use super::cell::Cell;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap handle into the cell arena.
///
/// The arena is append-only, so a cell's index doubles as its insertion
/// sequence number.
struct Entry<F> {
    bound: F,
    index: usize,
}

impl<F: Float> PartialEq for Entry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for Entry<F> {}

impl<F: Float> PartialOrd for Entry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for Entry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on bound; among equal bounds the older entry wins.
        self.bound
            .partial_cmp(&other.bound)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Cells ordered by [`Cell::bound`], largest first.
///
/// Cells with identical bounds come out in insertion order, which keeps the
/// whole search deterministic.
pub struct Frontier<F> {
    cells: Vec<Cell<F>>,
    heap: BinaryHeap<Entry<F>>,
}

impl<F: Float> Frontier<F> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty frontier with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Adds a cell.
    pub fn push(&mut self, cell: Cell<F>) {
        let index = self.cells.len();
        self.cells.push(cell);
        self.heap.push(Entry {
            bound: cell.bound(),
            index,
        });
    }

    /// Removes and returns the cell with the largest bound.
    pub fn pop(&mut self) -> Option<Cell<F>> {
        self.heap.pop().map(|entry| self.cells[entry.index])
    }

    /// Returns the largest bound still queued.
    pub fn peek_bound(&self) -> Option<F> {
        self.heap.peek().map(|entry| entry.bound)
    }

    /// Number of cells still queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no cells are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of cells ever pushed.
    #[inline]
    pub fn total_pushed(&self) -> usize {
        self.cells.len()
    }
}

impl<F: Float> Default for Frontier<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Extend<Cell<F>> for Frontier<F> {
    fn extend<I: IntoIterator<Item = Cell<F>>>(&mut self, iter: I) {
        for cell in iter {
            self.push(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::primitives::Point2;

    fn square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_empty() {
        let mut frontier: Frontier<f64> = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.len(), 0);
        assert!(frontier.pop().is_none());
        assert!(frontier.peek_bound().is_none());
    }

    #[test]
    fn test_pops_largest_bound_first() {
        let poly = square();
        let mut frontier = Frontier::new();
        frontier.push(Cell::new(Point2::new(1.0, 1.0), 0.5, &poly));
        frontier.push(Cell::new(Point2::new(5.0, 5.0), 0.5, &poly));
        frontier.push(Cell::new(Point2::new(3.0, 3.0), 0.5, &poly));
        frontier.push(Cell::new(Point2::new(20.0, 20.0), 0.5, &poly));

        let mut bounds = Vec::new();
        while let Some(cell) = frontier.pop() {
            bounds.push(cell.bound());
        }
        assert_eq!(bounds.len(), 4);
        assert!(bounds.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(frontier.total_pushed(), 4);
    }

    #[test]
    fn test_ties_pop_oldest_first() {
        let poly = square();
        let mut frontier = Frontier::new();
        // Four cells with the same bound: all 2 away from the boundary.
        let centers = [
            Point2::new(2.0, 5.0),
            Point2::new(8.0, 5.0),
            Point2::new(5.0, 2.0),
            Point2::new(5.0, 8.0),
        ];
        frontier.extend(centers.iter().map(|&c| Cell::new(c, 1.0, &poly)));

        let popped: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|c| c.center())
            .collect();
        assert_eq!(popped, centers.to_vec());
    }

    #[test]
    fn test_interleaved_push_pop() {
        let poly = square();
        let mut frontier = Frontier::with_capacity(8);
        frontier.push(Cell::point(Point2::new(1.0, 5.0), &poly));
        frontier.push(Cell::point(Point2::new(4.0, 5.0), &poly));

        let first = frontier.pop().unwrap();
        assert_eq!(first.center(), Point2::new(4.0, 5.0));

        frontier.push(Cell::point(Point2::new(5.0, 5.0), &poly));
        assert_eq!(frontier.peek_bound(), Some(5.0));
        assert_eq!(frontier.pop().unwrap().center(), Point2::new(5.0, 5.0));
        assert_eq!(frontier.pop().unwrap().center(), Point2::new(1.0, 5.0));
        assert!(frontier.is_empty());
    }
}
