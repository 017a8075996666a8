//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait implemented by
//! [`MaryHeap`](crate::mary::MaryHeap) and the [`HeapError`] type returned by
//! every fallible heap operation.
//!
//! Unlike `std::collections::BinaryHeap`, which returns `Option` from `peek`
//! and `pop`, these operations report an empty heap as
//! [`HeapError::Underflow`] so that callers can propagate it with `?`
//! alongside construction errors.

use std::fmt;

/// Smallest branching factor a heap can be built with
pub const MIN_ARITY: usize = 2;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The requested arity is below [`MIN_ARITY`]
    InvalidArity {
        /// The rejected arity
        arity: usize,
    },
    /// The operation needs at least one element but the heap is empty
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArity { arity } => {
                write!(f, "heap arity must be at least {MIN_ARITY}, got {arity}")
            }
            HeapError::Underflow => write!(f, "the heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority queues
///
/// The API mirrors `BinaryHeap`:
/// - `push` inserts an element
/// - `peek` borrows the highest-priority element
/// - `pop` removes and returns the highest-priority element
///
/// "Highest priority" is decided by the heap's ordering strategy, see
/// [`Compare`](crate::compare::Compare).
///
/// # Example
///
/// ```rust
/// use rust_mary_heaps::{Heap, HeapError, MaryHeap};
///
/// fn drain<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::with_capacity(heap.len());
///     while let Ok(item) = heap.pop() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap: MaryHeap<i32> = MaryHeap::with_arity(3)?;
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.pop(), Err(HeapError::Underflow));
/// # Ok::<(), HeapError>(())
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log_m n) comparisons and swaps for an m-ary heap.
    fn push(&mut self, item: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty. The heap is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(m log_m n) for an m-ary heap: O(log_m n) levels, each scanning up
    /// to `m` children.
    fn pop(&mut self) -> Result<T, HeapError>;
}
