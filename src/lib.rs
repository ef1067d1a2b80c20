#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::useless_vec,
    )
)]

extern crate alloc;

#[macro_use]
mod polyfill;

pub mod collections;
pub mod default;

#[cfg(test)]
mod testing;

pub use collections::{binary_heap, BinaryHeap, HeapError};
pub use default::{OrdTotalOrder, Reversed};

use core::cmp::Ordering;

/// A total order over values of type `T`, supplied to a collection at runtime.
///
/// Implementations must be pure, deterministic and transitive: if `a < b` and
/// `b < c` then `a < c`, and `cmp(a, b)` must be the reverse of `cmp(b, a)`.
/// Breaking this contract is a logic error. The behavior resulting from such a
/// logic error is not specified, but will be encapsulated to the collection
/// that observed it and will not result in undefined behavior. This could
/// include panics, incorrect results and elements that can no longer be found.
///
/// Elements that compare [`Equal`](Ordering::Equal) need not be identical:
/// collections ordered by a `TotalOrder` treat them as interchangeable for
/// lookup but keep each of them.
///
/// Every closure or function of type `Fn(&T, &T) -> Ordering` is a
/// `TotalOrder<T>`:
///
/// ```
/// use cmpheap::TotalOrder;
/// use core::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.cmp(&"abc", &"xy"), Ordering::Greater);
/// assert!(by_len.eq(&"ab", &"xy"));
/// ```
pub trait TotalOrder<T: ?Sized> {
    /// Compares `this` with `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Whether `this` and `that` are equal under this order.
    fn eq(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Whether `this` and `that` are not equal under this order.
    fn ne(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Whether `this` is greater than or equal to `that` under this order.
    fn ge(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Whether `this` is strictly greater than `that` under this order.
    fn gt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Whether `this` is less than or equal to `that` under this order.
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Whether `this` is strictly less than `that` under this order.
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_lt()
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}
