//! m-ary Heaps and List Partitioning for Rust
//!
//! This crate provides two independent data-structure building blocks:
//!
//! - **[`MaryHeap`]**: an array-backed priority queue whose implicit tree has a
//!   configurable number of children per node (`m >= 2`) and whose order is an
//!   injectable [`Compare`](compare::Compare) strategy.
//!   O(log_m n) push, O(m log_m n) pop, O(1) peek.
//! - **[`List`](list::List)** with [`partition`](list::partition): an owning
//!   singly-linked list and a stable, iterative split around a pivot.
//!
//! # Example
//!
//! ```rust
//! use rust_mary_heaps::{HeapError, MaryHeap};
//!
//! let mut heap: MaryHeap<u32> = MaryHeap::with_arity(4)?;
//! heap.push(5);
//! heap.push(3);
//! assert_eq!(heap.peek(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//!
//! assert_eq!(
//!     MaryHeap::<u32>::with_arity(1).unwrap_err(),
//!     HeapError::InvalidArity { arity: 1 }
//! );
//! # Ok::<(), HeapError>(())
//! ```

pub mod compare;
pub mod list;
pub mod mary;
pub mod traits;

// Re-export the main types for convenience
pub use mary::MaryHeap;
pub use traits::{Heap, HeapError, MIN_ARITY};
