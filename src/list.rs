//! Owning singly-linked list and stable partitioning
//!
//! [`List`] is a chain of boxed nodes, each owning the rest of the chain.
//! [`partition`] splits a list around a pivot by moving nodes, never by
//! copying values: every input node ends up in exactly one of the two
//! outputs, in the same relative order it had in the input.
//!
//! # Example
//!
//! ```rust
//! use rust_mary_heaps::list::{partition, List};
//!
//! let list: List<i32> = [5, 1, 9, 2, 3].into_iter().collect();
//! let (low, high) = partition(list, &3);
//!
//! assert_eq!(low.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(high.iter().copied().collect::<Vec<_>>(), vec![5, 9]);
//! ```

use std::fmt;

use log::trace;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly-linked list of owned nodes
pub struct List<T> {
    head: Link<T>,
}

impl<T> List<T> {
    /// Creates an empty list
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes
    ///
    /// # Time Complexity
    /// O(n), the list does not cache its length.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Prepends a value
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Removes and returns the first value
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.value
        })
    }

    /// Borrows the first value
    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Borrowing iterator, front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Splits into `(value <= pivot, value > pivot)`, see [`partition`]
    pub fn partition_at(self, pivot: &T) -> (List<T>, List<T>)
    where
        T: PartialOrd,
    {
        partition(self, pivot)
    }

    /// Tail slot of the chain: the `None` link after the last node
    fn tail_mut(&mut self) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        cursor
    }
}

/// Stores `node` in the empty slot `tail` and returns the new empty slot
fn append<T>(tail: &mut Link<T>, node: Box<Node<T>>) -> &mut Link<T> {
    &mut tail.insert(node).next
}

/// Splits `list` into `(value <= pivot, value > pivot)`
///
/// The input is consumed. Both outputs keep the input's relative order.
///
/// ```rust
/// use rust_mary_heaps::list::{partition, List};
///
/// let (low, high) = partition(List::<u8>::new(), &0);
/// assert!(low.is_empty() && high.is_empty());
/// ```
pub fn partition<T: PartialOrd>(list: List<T>, pivot: &T) -> (List<T>, List<T>) {
    partition_by(list, |value| value <= pivot)
}

/// Splits `list` into `(matching, rest)` by `pred`
///
/// Nodes are detached from the front of the input and appended to the tail
/// of their destination, one box at a time. The walk is iterative, so the
/// list length is not bounded by the call stack.
pub fn partition_by<T, F>(mut list: List<T>, mut pred: F) -> (List<T>, List<T>)
where
    F: FnMut(&T) -> bool,
{
    let mut matching = List::new();
    let mut rest = List::new();
    let (mut taken, mut left) = (0usize, 0usize);

    {
        let mut matching_tail = &mut matching.head;
        let mut rest_tail = &mut rest.head;
        let mut remaining = list.head.take();

        while let Some(mut node) = remaining {
            remaining = node.next.take();
            if pred(&node.value) {
                matching_tail = append(matching_tail, node);
                taken += 1;
            } else {
                rest_tail = append(rest_tail, node);
                left += 1;
            }
        }
    }

    trace!("partitioned {} nodes into {taken} + {left}", taken + left);
    (matching, rest)
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_mut();
        for value in iter {
            tail = append(tail, Box::new(Node { value, next: None }));
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`List`]
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_push_pop_front() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.peek_front(), Some(&3));

        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_collect_preserves_order() {
        let list: List<_> = (1..=4).collect();
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
        assert_eq!(format!("{list:?}"), "[1, 2, 3, 4]");
    }

    #[test]
    fn test_extend_appends_at_tail() {
        let mut list: List<_> = vec!['a', 'b'].into_iter().collect();
        list.extend(['c', 'd']);
        assert_eq!(to_vec(&list), vec!['a', 'b', 'c', 'd']);

        let mut empty = List::new();
        empty.extend(Some(1));
        assert_eq!(to_vec(&empty), vec![1]);
    }

    #[test]
    fn test_into_iter_owned() {
        let list: List<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let owned: Vec<String> = list.into_iter().collect();
        assert_eq!(owned, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_partition_example() {
        let list: List<i32> = [5, 1, 9, 2, 3].into_iter().collect();
        let (low, high) = partition(list, &3);
        assert_eq!(to_vec(&low), vec![1, 2, 3]);
        assert_eq!(to_vec(&high), vec![5, 9]);
    }

    #[test]
    fn test_partition_empty() {
        for pivot in [-1, 0, 7] {
            let (low, high) = partition(List::<i32>::new(), &pivot);
            assert!(low.is_empty());
            assert!(high.is_empty());
        }
    }

    #[test]
    fn test_partition_all_one_side() {
        let list: List<i32> = (1..=5).collect();
        let (low, high) = list.partition_at(&10);
        assert_eq!(to_vec(&low), vec![1, 2, 3, 4, 5]);
        assert!(high.is_empty());

        let list: List<i32> = (1..=5).collect();
        let (low, high) = list.partition_at(&0);
        assert!(low.is_empty());
        assert_eq!(to_vec(&high), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_partition_equal_goes_low() {
        let list: List<i32> = [3, 3, 4, 3].into_iter().collect();
        let (low, high) = partition(list, &3);
        assert_eq!(to_vec(&low), vec![3, 3, 3]);
        assert_eq!(to_vec(&high), vec![4]);
    }

    #[test]
    fn test_partition_moves_without_clone() {
        // String is not Copy; the values must move into the outputs.
        let list: List<String> = ["pear", "apple", "quince", "fig"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (low, high) = partition(list, &"m".to_string());
        assert_eq!(to_vec(&low), vec!["apple".to_string(), "fig".to_string()]);
        assert_eq!(to_vec(&high), vec!["pear".to_string(), "quince".to_string()]);
    }

    #[test]
    fn test_partition_by_predicate() {
        let list: List<u32> = (0..10).collect();
        let (even, odd) = partition_by(list, |v| v % 2 == 0);
        assert_eq!(to_vec(&even), vec![0, 2, 4, 6, 8]);
        assert_eq!(to_vec(&odd), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_outputs_are_appendable() {
        let list: List<i32> = [4, 1, 6].into_iter().collect();
        let (mut low, mut high) = partition(list, &3);
        low.extend([2]);
        high.push_front(0);
        assert_eq!(to_vec(&low), vec![1, 2]);
        assert_eq!(to_vec(&high), vec![0, 4, 6]);
    }

    #[test]
    fn test_equality() {
        let a: List<i32> = (0..3).collect();
        let b: List<i32> = (0..3).collect();
        let c: List<i32> = (0..4).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
