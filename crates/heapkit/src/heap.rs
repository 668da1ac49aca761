//! Binary heaps over a dense slot sequence and the ordering policy they share

use std::fmt;

mod binary;
pub mod sift;

pub use binary::Heap;

/// Selects which extremum a heap keeps at its root.
///
/// The policy is fixed when a heap is constructed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// The root holds the smallest value
    #[default]
    Min,
    /// The root holds the largest value
    Max,
}

impl Order {
    /// Returns true if `a` may sit above `b` in a heap with this ordering,
    /// i.e. `a <= b` for a min-heap and `a >= b` for a max-heap
    #[inline]
    #[must_use]
    pub fn is_not_worse<T: PartialOrd + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            Self::Min => a <= b,
            Self::Max => a >= b,
        }
    }

    /// Returns true if this is [`Order::Max`]
    #[inline]
    #[must_use]
    pub fn is_max(self) -> bool { matches!(self, Self::Max) }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Max => "max",
        })
    }
}

/// Error indicating a heap was peeked or popped while it held no entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Peek or pop from an empty heap")]
pub struct Empty;
