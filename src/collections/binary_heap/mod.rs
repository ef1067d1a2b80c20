//! A priority queue implemented with a binary heap.
//!
//! The heap is ordered by a [`TotalOrder`] supplied when it is created, and
//! always yields the *smallest* element under that order first. A max-heap is
//! obtained by supplying a reversed order, such as [`Reversed`].
//!
//! Insertion and popping the smallest element have *O*(log(*n*)) time
//! complexity. Checking the smallest element is *O*(1). Converting a vector to
//! a binary heap can be done in-place, and has *O*(*n*) complexity.
//!
//! # Examples
//!
//! This is a larger example that implements [Dijkstra's algorithm][dijkstra]
//! to solve the [shortest path problem][sssp] on a [directed graph][dir_graph].
//! It shows how to use [`BinaryHeap`] with a comparator over custom types.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [sssp]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [dir_graph]: https://en.wikipedia.org/wiki/Directed_graph
//! [`Reversed`]: crate::Reversed
//!
//! ```
//! use cmpheap::BinaryHeap;
//!
//! #[derive(Copy, Clone)]
//! struct State {
//!     cost: usize,
//!     position: usize,
//! }
//!
//! // Each node is represented as a `usize`, for a shorter implementation.
//! struct Edge {
//!     node: usize,
//!     cost: usize,
//! }
//!
//! // Start at `start` and use `dist` to track the current shortest distance
//! // to each node. This implementation isn't memory-efficient as it may leave
//! // duplicate nodes in the queue.
//! fn shortest_path(adj_list: &[Vec<Edge>], start: usize, goal: usize) -> Option<usize> {
//!     let mut dist: Vec<_> = (0..adj_list.len()).map(|_| usize::MAX).collect();
//!
//!     // The cheapest state is always popped first.
//!     let mut heap = BinaryHeap::new(|a: &State, b: &State| a.cost.cmp(&b.cost));
//!
//!     dist[start] = 0;
//!     heap.push(State { cost: 0, position: start });
//!
//!     while let Some(State { cost, position }) = heap.pop() {
//!         if position == goal { return Some(cost); }
//!
//!         // We may have already found a better way
//!         if cost > dist[position] { continue; }
//!
//!         for edge in &adj_list[position] {
//!             let next = State { cost: cost + edge.cost, position: edge.node };
//!             if next.cost < dist[next.position] {
//!                 heap.push(next);
//!                 dist[next.position] = next.cost;
//!             }
//!         }
//!     }
//!
//!     // Goal not reachable
//!     None
//! }
//!
//! //                  7
//! //          +-----------------+
//! //          |                 |
//! //          v   1        2    |  2
//! //          0 -----> 1 -----> 3 ---> 4
//! //          |        ^        ^      ^
//! //          |        | 1      |      |
//! //          |        |        | 3    | 1
//! //          +------> 2 -------+      |
//! //           10      |               |
//! //                   +---------------+
//! let graph = vec![
//!     // Node 0
//!     vec![Edge { node: 2, cost: 10 },
//!          Edge { node: 1, cost: 1 }],
//!     // Node 1
//!     vec![Edge { node: 3, cost: 2 }],
//!     // Node 2
//!     vec![Edge { node: 1, cost: 1 },
//!          Edge { node: 3, cost: 3 },
//!          Edge { node: 4, cost: 1 }],
//!     // Node 3
//!     vec![Edge { node: 0, cost: 7 },
//!          Edge { node: 4, cost: 2 }],
//!     // Node 4
//!     vec![]];
//!
//! assert_eq!(shortest_path(&graph, 0, 1), Some(1));
//! assert_eq!(shortest_path(&graph, 0, 3), Some(3));
//! assert_eq!(shortest_path(&graph, 3, 0), Some(7));
//! assert_eq!(shortest_path(&graph, 0, 4), Some(5));
//! assert_eq!(shortest_path(&graph, 4, 0), None);
//! ```

use core::fmt;
#[cfg(feature = "trusted_len")]
use core::iter::TrustedLen;
use core::iter::FusedIterator;
use core::mem::swap;
use core::ops::{Deref, DerefMut};

use alloc::collections::TryReserveError;
use alloc::slice;
use alloc::vec::{self, Vec};

use super::HeapError;
use crate::{OrdTotalOrder, TotalOrder};


/// A priority queue implemented with a binary heap.
///
/// This will be a min-heap under its [`TotalOrder`]: the root is always an
/// element that no other element compares [`Less`] than.
///
/// It is a logic error for an item or the order to be modified in such a way
/// that the item's ordering relative to any other item, as determined by that
/// order, changes while they are in the heap. This is normally only possible
/// through [`Cell`], [`RefCell`], global state, I/O, or unsafe code. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `BinaryHeap` that observed the logic error and not
/// result in undefined behavior. This could include panics, incorrect results,
/// and elements that [`contains`] can no longer find.
///
/// # Examples
///
/// ```
/// use cmpheap::BinaryHeap;
///
/// // The default order is `Ord`, smallest first.
/// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
///
/// // We can use peek to look at the next item in the heap. In this case,
/// // there's no items in there yet so we get None.
/// assert_eq!(heap.peek(), None);
///
/// heap.push(5);
/// heap.push(1);
/// heap.push(2);
///
/// // Now peek shows the most important item in the heap.
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.len(), 3);
///
/// // We can iterate over the items in the heap, although they are returned
/// // in the order of the underlying array, not in priority order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// // If we instead pop these scores, they should come back in order.
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), None);
///
/// heap.clear();
/// assert!(heap.is_empty())
/// ```
///
/// Any closure `Fn(&T, &T) -> Ordering` can order the heap; reversing it makes
/// a max-heap:
///
/// ```
/// use cmpheap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new(|a: &i32, b: &i32| b.cmp(a));
/// heap.extend([1, 5, 2]);
///
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [peek]/[peek\_mut] | [contains]/[remove\_element] |
/// |---------------|---------------|--------------------|------------------------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1)             | *O*(*n*)                     |
///
/// [`Less`]: core::cmp::Ordering::Less
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [`contains`]: BinaryHeap::contains
/// [push]: BinaryHeap::push
/// [pop]: BinaryHeap::pop
/// [peek]: BinaryHeap::peek
/// [peek\_mut]: BinaryHeap::peek_mut
/// [contains]: BinaryHeap::contains
/// [remove\_element]: BinaryHeap::remove_element
pub struct BinaryHeap<T, C = OrdTotalOrder<T>> {
    data: Vec<T>,
    comparator: C,
}

/// Structure wrapping a mutable reference to the smallest item on a
/// `BinaryHeap`.
///
/// This `struct` is created by the [`peek_mut`] method on [`BinaryHeap`]. See
/// its documentation for more.
///
/// [`peek_mut`]: BinaryHeap::peek_mut
pub struct PeekMut<'a, T: 'a, C: TotalOrder<T>> {
    heap: &'a mut BinaryHeap<T, C>,
    // Set once a `&mut T` has been handed out, after which the root must be
    // sifted back into place.
    sift: bool,
}

impl<T: fmt::Debug, C: TotalOrder<T>> fmt::Debug for PeekMut<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.data[0]).finish()
    }
}

impl<T, C: TotalOrder<T>> Drop for PeekMut<'_, T, C> {
    fn drop(&mut self) {
        if self.sift {
            // PeekMut is only instantiated for non-empty heaps.
            self.heap.sift_down(0);
        }
    }
}

impl<T, C: TotalOrder<T>> Deref for PeekMut<'_, T, C> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.heap.data[0]
    }
}

impl<T, C: TotalOrder<T>> DerefMut for PeekMut<'_, T, C> {
    fn deref_mut(&mut self) -> &mut T {
        self.sift = true;
        &mut self.heap.data[0]
    }
}

impl<'a, T, C: TotalOrder<T>> PeekMut<'a, T, C> {
    /// Removes the peeked value from the heap and returns it.
    pub fn pop(mut this: PeekMut<'a, T, C>) -> T {
        // pop_root repositions whatever replaces the root, so the peeked
        // value's new contents don't matter.
        this.sift = false;
        this.heap.pop_root()
    }
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        BinaryHeap { data: self.data.clone(), comparator: self.comparator.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.comparator.clone_from(&source.comparator);
    }
}

impl<T, C: TotalOrder<T> + Default> Default for BinaryHeap<T, C> {
    /// Creates an empty `BinaryHeap` ordered by `C::default()`.
    #[inline]
    fn default() -> BinaryHeap<T, C> {
        BinaryHeap::new(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the implicit tree one depth per line: line *k* holds the (up to)
/// 2<sup>*k*</sup> elements at depth *k*, separated by single spaces. An empty
/// heap renders as the empty string.
///
/// The layout is meant for diagnostics and is not a stable format.
///
/// ```
/// use cmpheap::BinaryHeap;
///
/// let heap: BinaryHeap<_> = (1..=6).collect();
/// assert_eq!(heap.to_string(), "1\n2 3\n4 5 6");
/// ```
impl<T: fmt::Display, C> fmt::Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut next_level = 1;
        for (pos, item) in self.data.iter().enumerate() {
            if pos == next_level {
                f.write_str("\n")?;
                next_level = 2 * next_level + 1;
            } else if pos > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

impl<T, C: TotalOrder<T>> BinaryHeap<T, C> {
    /// Creates an empty `BinaryHeap` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap = BinaryHeap::new(|a: &u32, b: &u32| a.cmp(b));
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(comparator: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::new(), comparator }
    }

    /// Creates an empty `BinaryHeap` with at least the specified capacity.
    ///
    /// The binary heap will be able to hold at least `capacity` elements without
    /// reallocating. This method is allowed to allocate for more elements than
    /// `capacity`. If `capacity` is 0, the binary heap will not allocate.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::{BinaryHeap, OrdTotalOrder};
    /// let mut heap = BinaryHeap::with_capacity(OrdTotalOrder::<i32>::new(), 10);
    /// heap.push(4);
    /// assert!(heap.capacity() >= 10);
    /// ```
    #[must_use]
    pub fn with_capacity(comparator: C, capacity: usize) -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::with_capacity(capacity), comparator }
    }

    /// Builds a heap out of `vec`, in place and in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2], |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn from_vec(vec: Vec<T>, comparator: C) -> BinaryHeap<T, C> {
        let mut heap = BinaryHeap { data: vec, comparator };
        heap.rebuild();
        heap
    }

    /// Builds a heap out of `elements`, kept in their iteration order until
    /// the heap is repaired bottom-up in *O*(*n*) time.
    ///
    /// This is cheaper than pushing the elements one at a time, which costs
    /// *O*(*n* log(*n*)). Both strategies drain in the same order, although
    /// the underlying arrays may differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::{BinaryHeap, OrdTotalOrder};
    ///
    /// let heap = BinaryHeap::from_elements(["pear", "fig", "apple"], OrdTotalOrder::<&str>::new());
    /// assert_eq!(heap.peek(), Some(&"apple"));
    /// ```
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I, comparator: C) -> BinaryHeap<T, C> {
        BinaryHeap::from_vec(elements.into_iter().collect(), comparator)
    }

    /// Returns a mutable reference to the smallest item in the binary heap, or
    /// `None` if it is empty.
    ///
    /// Note: If the `PeekMut` value is leaked, the heap may be left out of
    /// order. This cannot cause undefined behavior.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 5, 2]);
    /// assert_eq!(heap.peek(), Some(&1));
    /// {
    ///     let mut val = heap.peek_mut().unwrap();
    ///     *val = 8;
    /// }
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    ///
    /// # Time complexity
    ///
    /// If the item is modified then the worst case time complexity is *O*(log(*n*)),
    /// otherwise it's *O*(1).
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, T, C>> {
        if self.is_empty() { None } else { Some(PeekMut { heap: self, sift: false }) }
    }

    /// Removes the smallest item from the binary heap and returns it, or `None`
    /// if it is empty.
    ///
    /// [`remove_min`](Self::remove_min) is the variant that reports an empty
    /// heap as an error.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() { None } else { Some(self.pop_root()) }
    }

    /// Removes the smallest item from the binary heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::{BinaryHeap, HeapError};
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([2]);
    ///
    /// assert_eq!(heap.remove_min(), Ok(2));
    /// assert_eq!(heap.remove_min(), Err(HeapError::EmptyCollection));
    /// ```
    pub fn remove_min(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::EmptyCollection)
    }

    /// Pushes an item onto the binary heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `push` is *O*(log(*n*)) comparisons, plus an
    /// occasional *O*(*n*) reallocation when capacity is exhausted, amortized
    /// over all pushes.
    pub fn push(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        self.sift_up(0, old_len);
    }

    /// Inserts an item that may be absent.
    ///
    /// A present item is pushed exactly as by [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidArgument`] without modifying the heap if
    /// `item` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::{BinaryHeap, HeapError};
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    ///
    /// assert_eq!(heap.insert(7), Ok(()));
    /// assert_eq!(heap.insert(Some(3)), Ok(()));
    /// assert_eq!(heap.insert(None), Err(HeapError::InvalidArgument));
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn insert<I: Into<Option<T>>>(&mut self, item: I) -> Result<(), HeapError> {
        let item = item.into().ok_or(HeapError::InvalidArgument)?;
        self.push(item);
        Ok(())
    }

    /// Returns `true` if the heap holds an item equal to `item` under the
    /// heap's order.
    ///
    /// The heap property gives no shortcut for arbitrary items, so this
    /// searches the tree depth-first in pre-order, stopping at the first
    /// match.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let heap = BinaryHeap::from_vec(vec!["one", "three"], |a: &&str, b: &&str| a.len().cmp(&b.len()));
    ///
    /// assert!(heap.contains(&"six"));
    /// assert!(!heap.contains(&"four"));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n*) in the worst case.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Removes one item equal to `item` under the heap's order, returning
    /// whether one was found.
    ///
    /// When several items are equal to `item`, which of them is removed is
    /// unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([4, 4, 2, 4]);
    ///
    /// assert!(heap.remove_element(&4));
    /// assert!(!heap.remove_element(&7));
    /// assert_eq!(heap.into_sorted_vec(), [2, 4, 4]);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n*): the search is linear, and the whole heap is rebuilt after
    /// the removal.
    pub fn remove_element(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(pos) => {
                trace!(pos, len = self.len(), "removing matched element");
                // The last element takes the vacated slot; it may belong
                // either above or below it, so repair the whole heap.
                self.data.swap_remove(pos);
                self.rebuild();
                true
            }
            None => false,
        }
    }

    /// Consumes the `BinaryHeap` and returns a vector in sorted order,
    /// smallest first under the heap's order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// let vec = heap.into_sorted_vec();
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // The smallest remaining element moves behind the shrinking heap,
            // leaving the vector largest first.
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        let mut vec = self.into_vec();
        vec.reverse();
        vec
    }

    /// Removes the root of a non-empty heap.
    fn pop_root(&mut self) -> T {
        debug_assert!(!self.is_empty());
        // swap_remove moves the last element into the root's slot.
        let item = self.data.swap_remove(0);
        if !self.is_empty() {
            self.sift_down(0);
        }
        item
    }

    /// Moves the element at `pos` up towards `start` while it is smaller than
    /// its parent, returning its final position.
    ///
    /// The caller must guarantee that `pos < self.len()`.
    fn sift_up(&mut self, start: usize, mut pos: usize) -> usize {
        while pos > start {
            let parent = (pos - 1) / 2;
            if !self.comparator.lt(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Take an element at `pos` and move it down the heap,
    /// while its children are smaller.
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    fn sift_down_range(&mut self, mut pos: usize, end: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= end {
                return;
            }

            // compare with the smaller of the two children, the left one on a tie
            let right = left + 1;
            let child = if right < end && self.comparator.gt(&self.data[left], &self.data[right]) {
                right
            } else {
                left
            };

            // if we are already in order, stop.
            if !self.comparator.lt(&self.data[child], &self.data[pos]) {
                return;
            }

            self.data.swap(pos, child);
            pos = child;
        }
    }

    /// The caller must guarantee that `pos < self.len()`.
    fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        self.sift_down_range(pos, len);
    }

    /// Restores the heap property, assuming `data[..start]` already has it.
    ///
    /// Either sifts each tail element up, at most log2(`start`) comparisons
    /// apiece, or rebuilds everything for at most 2 * `len` comparisons,
    /// whichever bound is smaller.
    fn rebuild_tail(&mut self, start: usize) {
        let len = self.len();
        if start == len {
            return;
        }

        let tail_len = len - start;
        let better_to_rebuild = start < tail_len || {
            let depth = start.ilog2() as usize;
            2 * len < tail_len * depth
        };

        if better_to_rebuild {
            self.rebuild();
        } else {
            for i in start..len {
                self.sift_up(0, i);
            }
        }
    }

    /// Restores the heap property over the whole array, bottom-up.
    ///
    /// Every parent, from the last one back to the root, is sifted down; the
    /// leaves (the back half of the array) are already trivial heaps. This
    /// takes *O*(*n*) time rather than the *O*(*n* log(*n*)) of pushing each
    /// element in turn: a node at height *h* needs at most *h* sift steps,
    /// about *n*/2 nodes are leaves needing none, *n*/4 need at most one,
    /// *n*/8 at most two, and so on. The total is bounded by
    /// *n* · Σ *h*/2<sup>*h*+1</sup>, a convergent series whose sum is below *n*.
    fn rebuild(&mut self) {
        trace!(len = self.len(), "rebuilding heap");
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            self.sift_down(n);
        }
    }

    /// Finds the first element equal to `item` in pre-order: a node, then its
    /// left subtree, then its right subtree.
    fn position(&self, item: &T) -> Option<usize> {
        let len = self.len();
        let mut pos = (len > 0).then_some(0);
        while let Some(current) = pos {
            if self.comparator.eq(item, &self.data[current]) {
                return Some(current);
            }
            pos = preorder_successor(current, len);
        }
        None
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// Both heaps keep their own order; `other`'s elements are re-ordered by
    /// `self`'s order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    ///
    /// let mut a: BinaryHeap<_> = BinaryHeap::from([-10, 1, 2, 3, 3]);
    /// let mut b: BinaryHeap<_> = BinaryHeap::from([-20, 5, 43]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if self.len() < other.len() {
            // Moving the longer vector avoids copying it, but its prefix is
            // only ordered under `other`'s order, so nothing can be assumed.
            swap(&mut self.data, &mut other.data);
            self.data.append(&mut other.data);
            self.rebuild();
            return;
        }

        let start = self.data.len();

        self.data.append(&mut other.data);

        self.rebuild_tail(start);
    }

    /// Clears the binary heap, returning an iterator over the removed elements
    /// in heap order. If the iterator is dropped before being fully consumed,
    /// the remaining elements are removed too.
    ///
    /// Note: `.drain_sorted()` is *O*(*n* \* log(*n*)); much slower than
    /// `.drain()`. You should use the latter when order doesn't matter.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([3, 1, 5, 2, 4]);
    /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { inner: self }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns
    /// `false`. The elements are visited in unsorted (and unspecified) order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([-10, -5, 1, 2, 4, 13]);
    ///
    /// heap.retain(|x| x % 2 == 0); // only keep even numbers
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-10, 2, 4])
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        struct RebuildOnDrop<'a, T, C: TotalOrder<T>> {
            heap: &'a mut BinaryHeap<T, C>,
            first_removed: usize,
        }

        let mut guard = RebuildOnDrop { first_removed: self.len(), heap: self };

        let mut i = 0;
        guard.heap.data.retain(|e| {
            let keep = f(e);
            if !keep && i < guard.first_removed {
                guard.first_removed = i;
            }
            i += 1;
            keep
        });

        impl<T, C: TotalOrder<T>> Drop for RebuildOnDrop<'_, T, C> {
            fn drop(&mut self) {
                // data[..first_removed] is untouched, so we only need to
                // rebuild the tail:
                self.heap.rebuild_tail(self.first_removed);
            }
        }
    }

    /// Mutably borrow this heap's order. When the returned guard is dropped,
    /// the heap is rebuilt under the (possibly changed) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::{BinaryHeap, TotalOrder};
    /// use core::cmp::Ordering;
    ///
    /// struct Toggle {
    ///     descending: bool,
    /// }
    ///
    /// impl TotalOrder<i32> for Toggle {
    ///     fn cmp(&self, this: &i32, that: &i32) -> Ordering {
    ///         if self.descending { that.cmp(this) } else { this.cmp(that) }
    ///     }
    /// }
    ///
    /// let mut heap = BinaryHeap::from_vec(vec![1, 5, 2], Toggle { descending: false });
    /// assert_eq!(heap.peek(), Some(&1));
    ///
    /// heap.comparator_mut().descending = true;
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    pub fn comparator_mut(&mut self) -> ComparatorMut<'_, T, C> {
        ComparatorMut { heap: self }
    }
}

/// The pre-order successor of `pos` in a complete binary tree of `len` nodes.
///
/// Descends to the left child when there is one; otherwise climbs until it
/// reaches a left child whose right sibling exists and moves there.
fn preorder_successor(mut pos: usize, len: usize) -> Option<usize> {
    let left = 2 * pos + 1;
    if left < len {
        return Some(left);
    }
    while pos > 0 {
        if pos % 2 == 1 && pos + 1 < len {
            return Some(pos + 1);
        }
        pos = (pos - 1) / 2;
    }
    None
}

/// Guard returned by [`BinaryHeap::comparator_mut`].
///
/// Dereferences to the heap's order; rebuilds the heap when dropped.
pub struct ComparatorMut<'a, T, C: TotalOrder<T>> {
    heap: &'a mut BinaryHeap<T, C>,
}

impl<T, C: TotalOrder<T>> Deref for ComparatorMut<'_, T, C> {
    type Target = C;
    fn deref(&self) -> &Self::Target {
        &self.heap.comparator
    }
}

impl<T, C: TotalOrder<T>> DerefMut for ComparatorMut<'_, T, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.heap.comparator
    }
}

impl<T, C: TotalOrder<T>> Drop for ComparatorMut<'_, T, C> {
    fn drop(&mut self) {
        self.heap.rebuild()
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Returns an iterator visiting all values in the underlying vector.
    ///
    /// The values come in the order of the underlying array, which is the
    /// breadth-first order of the implicit tree. This is **not** priority
    /// order: only the first value is guaranteed to be the smallest. Use
    /// [`into_sorted_vec`], [`into_iter_sorted`] or [`drain_sorted`] when
    /// order matters.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([4, 3, 2, 1]);
    ///
    /// assert_eq!(heap.iter().count(), 4);
    /// assert_eq!(heap.iter().next(), Some(&1));
    /// ```
    ///
    /// [`into_sorted_vec`]: BinaryHeap::into_sorted_vec
    /// [`into_iter_sorted`]: BinaryHeap::into_iter_sorted
    /// [`drain_sorted`]: BinaryHeap::drain_sorted
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns an iterator which retrieves elements in heap order.
    /// This method consumes the original heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { inner: self }
    }

    /// Returns the smallest item in the binary heap, or `None` if it is empty.
    ///
    /// [`peek_min`](Self::peek_min) is the variant that reports an empty heap
    /// as an error.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(1);
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the smallest item in the binary heap.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::{BinaryHeap, HeapError};
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// assert_eq!(heap.peek_min(), Err(HeapError::EmptyCollection));
    ///
    /// heap.push(3);
    /// assert_eq!(heap.peek_min(), Ok(&3));
    /// ```
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::EmptyCollection)
    }

    /// Borrow this heap's order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::{BinaryHeap, TotalOrder};
    /// use core::cmp::Ordering;
    ///
    /// let heap = BinaryHeap::<u8, _>::new(|a: &u8, b: &u8| b.cmp(a));
    /// assert_eq!(heap.comparator().cmp(&1, &2), Ordering::Greater);
    /// ```
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements the binary heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for at least `additional` elements more than
    /// the current length. Unlike [`reserve`], this will not
    /// deliberately over-allocate to speculatively avoid frequent allocations.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    ///
    /// [`reserve`]: BinaryHeap::reserve
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length. The allocator may reserve more space to speculatively
    /// avoid frequent allocations.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// heap.reserve(100);
    /// assert!(heap.capacity() >= 100);
    /// heap.push(4);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` elements more than
    /// the current length.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an error
    /// is returned.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Discards capacity with a lower bound.
    ///
    /// The capacity will remain at least as large as both the length
    /// and the supplied value.
    #[inline]
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.data.shrink_to(min_capacity)
    }

    /// Returns a slice of all values in the underlying vector.
    ///
    /// Like [`iter`](Self::iter), this is array order, not priority order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Copies the values of the underlying vector into a new `Vec`, in array
    /// order rather than priority order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([5, 3, 8, 1, 9, 2]);
    ///
    /// let snapshot = heap.to_vec();
    /// assert_eq!(snapshot.len(), 6);
    /// assert_eq!(snapshot[0], 1);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the `BinaryHeap` and returns the underlying vector
    /// in array order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the length of the binary heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the binary heap, returning an iterator over the removed elements
    /// in array order. If the iterator is dropped before being fully
    /// consumed, it drops the remaining elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmpheap::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.drain().count(), 2);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all items from the binary heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

// The array-order iterators all forward to the `iter` field they wrap.
macro_rules! array_order_iter {
    ($name:ident<$($lt:lifetime,)? $t:ident> => $item:ty) => {
        impl<$($lt,)? $t> Iterator for $name<$($lt,)? $t> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<$item> {
                self.iter.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }
        }

        impl<$($lt,)? $t> DoubleEndedIterator for $name<$($lt,)? $t> {
            #[inline]
            fn next_back(&mut self) -> Option<$item> {
                self.iter.next_back()
            }
        }

        impl<$($lt,)? $t> ExactSizeIterator for $name<$($lt,)? $t> {
            #[cfg(feature = "exact_size_is_empty")]
            fn is_empty(&self) -> bool {
                self.iter.is_empty()
            }
        }

        impl<$($lt,)? $t> FusedIterator for $name<$($lt,)? $t> {}
    };
}

/// An iterator over the elements of a `BinaryHeap`, in array order.
///
/// This `struct` is created by [`BinaryHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

array_order_iter!(Iter<'a, T> => &'a T);

/// An owning iterator over the elements of a `BinaryHeap`, in array order.
///
/// This `struct` is created by [`BinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

array_order_iter!(IntoIter<T> => T);

/// An owning iterator over the elements of a `BinaryHeap`, in heap order.
///
/// This `struct` is created by [`BinaryHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, C = OrdTotalOrder<T>> {
    inner: BinaryHeap<T, C>,
}

impl<T, C: TotalOrder<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, C: TotalOrder<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: TotalOrder<T>> FusedIterator for IntoIterSorted<T, C> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T, C: TotalOrder<T>> TrustedLen for IntoIterSorted<T, C> {}

/// A draining iterator over the elements of a `BinaryHeap`, in array order.
///
/// This `struct` is created by [`BinaryHeap::drain()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

array_order_iter!(Drain<'a, T> => T);

/// A draining iterator over the elements of a `BinaryHeap`, in heap order.
///
/// This `struct` is created by [`BinaryHeap::drain_sorted()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct DrainSorted<'a, T, C: TotalOrder<T>> {
    inner: &'a mut BinaryHeap<T, C>,
}

impl<T, C: TotalOrder<T>> Drop for DrainSorted<'_, T, C> {
    /// Removes the remaining heap elements.
    fn drop(&mut self) {
        self.inner.clear();
    }
}

impl<T, C: TotalOrder<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, C: TotalOrder<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: TotalOrder<T>> FusedIterator for DrainSorted<'_, T, C> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T, C: TotalOrder<T>> TrustedLen for DrainSorted<'_, T, C> {}

impl<T, C: TotalOrder<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    /// Converts a `Vec<T>` into a `BinaryHeap<T, C>` ordered by `C::default()`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> BinaryHeap<T, C> {
        BinaryHeap::from_vec(vec, C::default())
    }
}

impl<T, C: TotalOrder<T> + Default, const N: usize> From<[T; N]> for BinaryHeap<T, C> {
    /// ```
    /// use cmpheap::BinaryHeap;
    ///
    /// let mut h1: BinaryHeap<_> = BinaryHeap::from([1, 4, 2, 3]);
    /// let mut h2: BinaryHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, C> From<BinaryHeap<T, C>> for Vec<T> {
    /// Converts a `BinaryHeap<T, C>` into a `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryHeap<T, C>) -> Vec<T> {
        heap.data
    }
}

impl<T, C: TotalOrder<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, C> {
        BinaryHeap::from_elements(iter, C::default())
    }
}

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the binary heap in array order. The binary heap cannot be used
    /// after calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C: TotalOrder<T>> Extend<T> for BinaryHeap<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a, T: 'a + Copy, C: TotalOrder<T>> Extend<&'a T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
