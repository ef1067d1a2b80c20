//! Collection types.

pub mod binary_heap;

#[doc(no_inline)]
pub use binary_heap::BinaryHeap;

use core::fmt::{self, Display};

/// The error type for the fallible operations of [`BinaryHeap`].
///
/// Each variant has an infallible counterpart that reports the same
/// condition through [`Option`] instead: [`BinaryHeap::pop`] and
/// [`BinaryHeap::peek`] return `None` where [`BinaryHeap::remove_min`] and
/// [`BinaryHeap::peek_min`] fail with [`EmptyCollection`], and
/// [`BinaryHeap::push`] accepts only present values.
///
/// [`EmptyCollection`]: HeapError::EmptyCollection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The heap holds no elements.
    EmptyCollection,

    /// An absent element was offered for insertion.
    InvalidArgument,
}

impl Display for HeapError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(match self {
            HeapError::EmptyCollection => "the heap is empty",
            HeapError::InvalidArgument => "cannot insert an absent element into the heap",
        })
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "error_in_core")] {
        impl core::error::Error for HeapError {}
    } else if #[cfg(feature = "std")] {
        impl std::error::Error for HeapError {}
    }
}

#[cfg(test)]
mod tests {
    use super::HeapError;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(HeapError::EmptyCollection.to_string(), "the heap is empty");
        assert_eq!(
            HeapError::InvalidArgument.to_string(),
            "cannot insert an absent element into the heap"
        );
    }
}
