//! Ready-made total orders.
//!
//! [`OrdTotalOrder`] makes a heap behave as if it used the [`Ord`] trait
//! directly, yielding its *smallest* element first. [`Reversed`] flips any
//! other order, which is how a max-heap is obtained.

use crate::TotalOrder;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
///
/// This is the default order of [`BinaryHeap`](crate::BinaryHeap).
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> OrdTotalOrder<T> {
    /// Creates the order.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Ord> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + Ord> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized + Ord> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder<T> {
    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // The default implementations of the following methods are overridden so
    // that they delegate to `T`'s implementations of [`PartialEq`] and
    // [`PartialOrd`] rather than merely using its implementation of [`Ord`].
    //
    // If, as required by those traits, `T`'s implementations are consistent
    // with one another, then these overrides have no effect.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// A total order that reverses another, turning a min-heap into a max-heap.
///
/// ```
/// use cmpheap::{BinaryHeap, OrdTotalOrder, Reversed};
///
/// let mut heap = BinaryHeap::new(Reversed(OrdTotalOrder::<i32>::new()));
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: TotalOrder<T>> TotalOrder<T> for Reversed<O> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self.0.cmp(that, this)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ord_total_order_matches_ord() {
        let order = OrdTotalOrder::<i32>::new();
        assert_eq!(order.cmp(&1, &2), Ordering::Less);
        assert_eq!(order.cmp(&2, &2), Ordering::Equal);
        assert!(order.lt(&1, &2));
        assert!(order.ge(&2, &2));
        assert!(order.ne(&3, &2));
    }

    #[test]
    fn reversed_flips_every_comparison() {
        let order = Reversed(OrdTotalOrder::<i32>::new());
        assert_eq!(order.cmp(&1, &2), Ordering::Greater);
        assert_eq!(order.cmp(&2, &2), Ordering::Equal);
        assert!(order.gt(&1, &2));
        assert!(order.le(&5, &3));
    }

    #[test]
    fn reversed_closure() {
        let order = Reversed(|a: &str, b: &str| a.len().cmp(&b.len()));
        assert!(order.lt("long", "ab"));
        assert!(order.eq("ab", "cd"));
    }
}
