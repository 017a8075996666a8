//! Ordering strategies for [`MaryHeap`](crate::mary::MaryHeap)
//!
//! A heap never asks "which is smaller"; it asks "does `a` have strictly
//! higher priority than `b`". That single question is the [`Compare`] trait.
//!
//! - [`Less`]: smaller values first (min-heap), the default
//! - [`Greater`]: larger values first (max-heap)
//! - [`ByKey`]: smaller extracted keys first
//! - any `Fn(&T, &T) -> bool` closure or function item
//!
//! The relation does not have to be a total order. Returning `false` for a
//! pair means "no preference", and the heap never reorders such a pair on
//! the way up.
//!
//! # Example
//!
//! ```rust
//! use rust_mary_heaps::compare::{Compare, Greater, Less};
//!
//! assert!(Less.beats(&1, &2));
//! assert!(Greater.beats(&2, &1));
//!
//! let by_len = |a: &&str, b: &&str| a.len() < b.len();
//! assert!(by_len.beats(&"ab", &"abc"));
//! ```

/// A "has strictly higher priority than" predicate
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` must be served before `b`
    ///
    /// Must be irreflexive: `beats(x, x)` is false.
    fn beats(&self, a: &T, b: &T) -> bool;
}

/// Min-ordering: `a` beats `b` when `a < b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn beats(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Max-ordering: `a` beats `b` when `a > b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn beats(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Min-ordering on a key extracted from each element
///
/// ```rust
/// use rust_mary_heaps::compare::{ByKey, Compare};
///
/// let by_priority = ByKey(|job: &(u32, &str)| job.0);
/// assert!(by_priority.beats(&(1, "urgent"), &(7, "later")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn beats(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn beats(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
