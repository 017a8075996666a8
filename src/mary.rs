//! m-ary Heap implementation
//!
//! An array-backed heap where every node has up to `m` children. The tree is
//! implicit: element `i` has its parent at `(i - 1) / m` and its children at
//! `m * i + 1 ..= m * i + m`.
//!
//! A wider tree is shallower (depth O(log_m n)), so `push` does fewer swaps,
//! while `pop` scans up to `m` children per level.
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(log_m n)          |
//! | `pop`     | O(m log_m n)        |
//! | `peek`    | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use rust_mary_heaps::MaryHeap;
//! use rust_mary_heaps::compare::Greater;
//!
//! let mut heap = MaryHeap::with_comparator(4, Greater)?;
//! heap.push(3);
//! heap.push(9);
//! heap.push(1);
//!
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(1));
//! assert!(heap.pop().is_err());
//! # Ok::<(), rust_mary_heaps::HeapError>(())
//! ```

use log::debug;

use crate::compare::{Compare, Less};
use crate::traits::{Heap, HeapError, MIN_ARITY};

/// An m-ary heap ordered by a [`Compare`] strategy
///
/// The element that beats every other element under `C` sits at the root.
/// With the default [`Less`] strategy this is a min-heap.
///
/// Equal-priority elements are never swapped while sifting up, so an element
/// pushed later never climbs above an earlier equal element. While sifting
/// down the lowest-index child wins among equally good children, and the
/// sifted element keeps sinking past children it does not strictly beat.
#[derive(Debug, Clone)]
pub struct MaryHeap<T, C = Less> {
    data: Vec<T>,
    arity: usize,
    cmp: C,
}

impl<T, C: Compare<T> + Default> MaryHeap<T, C> {
    /// Creates an empty binary heap with the default strategy
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            arity: MIN_ARITY,
            cmp: C::default(),
        }
    }

    /// Creates an empty heap with `arity` children per node
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_arity(arity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(arity, C::default())
    }
}

impl<T, C: Compare<T>> MaryHeap<T, C> {
    /// Creates an empty heap with `arity` children per node, ordered by `cmp`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_comparator(arity: usize, cmp: C) -> Result<Self, HeapError> {
        Self::with_capacity(arity, cmp, 0)
    }

    /// Like [`with_comparator`](Self::with_comparator), reserving room for
    /// `capacity` elements up front
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_capacity(arity: usize, cmp: C, capacity: usize) -> Result<Self, HeapError> {
        if arity < MIN_ARITY {
            debug!("rejecting heap arity {arity}");
            return Err(HeapError::InvalidArity { arity });
        }
        debug!("creating {arity}-ary heap with capacity {capacity}");
        Ok(Self {
            data: Vec::with_capacity(capacity),
            arity,
            cmp,
        })
    }

    /// Returns the branching factor fixed at construction
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the ordering strategy
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Drops every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the highest-priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    /// Removes and returns the highest-priority element
    ///
    /// The last element takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }

        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.arity
    }

    /// `m * index + 1`, or `None` if that overflows
    #[inline]
    fn first_child(&self, index: usize) -> Option<usize> {
        self.arity.checked_mul(index)?.checked_add(1)
    }

    /// Move element at index up while it strictly beats its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self.cmp.beats(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Index of the best child of `index`, or `None` for a leaf
    ///
    /// A later child only replaces the current best if it strictly beats it.
    fn best_child(&self, index: usize) -> Option<usize> {
        let len = self.data.len();
        let first = self.first_child(index).filter(|&first| first < len)?;

        let end = first.saturating_add(self.arity).min(len);
        let mut best = first;
        for candidate in first + 1..end {
            if self.cmp.beats(&self.data[candidate], &self.data[best]) {
                best = candidate;
            }
        }
        Some(best)
    }

    /// Move element at index down until it strictly beats its best child
    fn sift_down(&mut self, mut index: usize) {
        while let Some(best) = self.best_child(index) {
            if self.cmp.beats(&self.data[index], &self.data[best]) {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for MaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        MaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MaryHeap::push(self, item)
    }

    fn peek(&self) -> Result<&T, HeapError> {
        MaryHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        MaryHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> Default for MaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
