use std::{fmt, mem, slice, vec};

use super::{
    sift::{self, HeapSlots, HeapSlotsMut},
    Empty, Order,
};

/// A binary heap of anonymous values, ordered as either a min-heap or a
/// max-heap
///
/// Iteration visits values in slot order, not sorted order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Heap<T> {
    vals: Vec<T>,
    order: Order,
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { vals, order } = self;
        f.debug_struct("Heap")
            .field("order", order)
            .field("slots", vals)
            .finish()
    }
}

impl<T> Default for Heap<T> {
    #[inline]
    fn default() -> Self { Self::new(Order::Min) }
}

impl<T> Heap<T> {
    /// Construct a new, empty heap with the given ordering
    #[inline]
    #[must_use]
    pub const fn new(order: Order) -> Self {
        Self {
            vals: Vec::new(),
            order,
        }
    }

    /// Construct a new, empty min-heap
    #[inline]
    #[must_use]
    pub const fn min() -> Self { Self::new(Order::Min) }

    /// Construct a new, empty max-heap
    #[inline]
    #[must_use]
    pub const fn max() -> Self { Self::new(Order::Max) }

    /// The ordering policy chosen at construction
    #[inline]
    #[must_use]
    pub fn order(&self) -> Order { self.order }

    /// Gets the number of values in the heap
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.vals.len() }

    /// Returns true if the heap holds no values
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.vals.is_empty() }

    /// Look at the root value without removing it
    ///
    /// # Errors
    /// Returns [`Empty`] if the heap holds no values.
    #[inline]
    pub fn peek(&self) -> Result<&T, Empty> { self.vals.first().ok_or(Empty) }

    /// The value stored at `slot`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&T> { self.vals.get(slot) }

    /// The slots in heap order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] { &self.vals }

    /// Values in slot order
    #[inline]
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, T> { self.vals.iter() }

    /// Remove every value, keeping the ordering policy
    #[inline]
    pub fn clear(&mut self) { self.vals.clear(); }

    /// Consume the heap, returning its slots in heap order
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> { self.vals }

    #[inline]
    fn slots_mut(&mut self) -> SlotsMut<'_, T> { SlotsMut(self) }
}

impl<T: PartialEq> Heap<T> {
    /// Linear search for `value` across all slots
    #[must_use]
    pub fn contains(&self, value: &T) -> bool { self.vals.contains(value) }
}

impl<T: PartialOrd> Heap<T> {
    /// Construct a heap with the given ordering from a sequence of values in
    /// linear time
    #[must_use]
    pub fn from_iter_with_order<I: IntoIterator<Item = T>>(order: Order, iter: I) -> Self {
        let mut heap = Self::new(order);
        heap.extend(iter);
        heap
    }

    /// Insert `value`, sifting it up to its place
    pub fn push(&mut self, value: T) {
        self.vals.push(value);
        let last = self.vals.len() - 1;
        sift::sift_up(&mut self.slots_mut(), last);
    }

    /// Remove and return the root value
    ///
    /// # Errors
    /// Returns [`Empty`] if the heap holds no values.
    pub fn pop(&mut self) -> Result<T, Empty> {
        let last = self.vals.len().checked_sub(1).ok_or(Empty)?;
        self.vals.swap(0, last);
        let top = self.vals.pop().unwrap_or_else(|| unreachable!());

        if !self.vals.is_empty() {
            sift::sift_down(&mut self.slots_mut(), 0);
        }

        Ok(top)
    }

    /// Push `value`, then pop the root, in a single sift
    ///
    /// If `value` would itself become the root it is returned immediately and
    /// the heap is left untouched.  An empty heap hands `value` straight back
    /// as well, where [`pop_push`](Self::pop_push) would return [`Empty`].
    pub fn push_pop(&mut self, value: T) -> T {
        let order = self.order;
        let Some(top) = self.vals.first_mut() else {
            return value;
        };

        if order.is_not_worse(&value, top) {
            return value;
        }

        let top = mem::replace(top, value);
        sift::sift_down(&mut self.slots_mut(), 0);
        top
    }

    /// Pop the root, then push `value`, in a single sift
    ///
    /// Unlike [`push_pop`](Self::push_pop) this always replaces the root, even
    /// if `value` is worse than every other value in the heap.
    ///
    /// # Errors
    /// Returns [`Empty`] if the heap holds no values, in which case `value` is
    /// dropped and the heap is left untouched.
    pub fn pop_push(&mut self, value: T) -> Result<T, Empty> {
        let top = self.vals.first_mut().ok_or(Empty)?;
        let top = mem::replace(top, value);
        sift::sift_down(&mut self.slots_mut(), 0);
        Ok(top)
    }

    /// Drain the heap in pop order
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.vals.len());
        while let Ok(val) = self.pop() {
            out.push(val);
        }
        out
    }

    /// Check heap order across every slot
    ///
    /// # Panics
    /// Panics if any slot is better than its parent.
    #[cfg(any(test, feature = "test"))]
    pub fn assert_invariants(&self) {
        assert!(sift::is_heap(self), "Heap order violated: {:?}", self.order);
    }
}

impl<T: PartialOrd> HeapSlots for Heap<T> {
    type Value = T;

    #[inline]
    fn len(&self) -> usize { self.vals.len() }

    #[inline]
    fn order(&self) -> Order { self.order }

    #[inline]
    fn value(&self, slot: usize) -> &T { &self.vals[slot] }
}

struct SlotsMut<'a, T>(&'a mut Heap<T>);

impl<T: PartialOrd> HeapSlots for SlotsMut<'_, T> {
    type Value = T;

    #[inline]
    fn len(&self) -> usize { self.0.vals.len() }

    #[inline]
    fn order(&self) -> Order { self.0.order }

    #[inline]
    fn value(&self, slot: usize) -> &T { &self.0.vals[slot] }
}

impl<T: PartialOrd> HeapSlotsMut for SlotsMut<'_, T> {
    #[inline]
    fn swap(&mut self, a: usize, b: usize) { self.0.vals.swap(a, b); }
}

impl<T: PartialOrd> Extend<T> for Heap<T> {
    /// Append every value, then rebuild heap order in one linear pass
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vals.extend(iter);
        sift::heapify(&mut self.slots_mut());
    }
}

impl<T: PartialOrd> FromIterator<T> for Heap<T> {
    /// Collect into a min-heap
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_order(Order::Min, iter)
    }
}

impl<T> IntoIterator for Heap<T> {
    type IntoIter = vec::IntoIter<T>;
    type Item = T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.vals.into_iter() }
}

impl<'a, T> IntoIterator for &'a Heap<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.vals.iter() }
}
