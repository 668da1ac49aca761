//! Order-restoring walks over an implicit binary tree.
//!
//! Slot `i` has its parent at `(i - 1) / 2` and its children at `2i + 1` and
//! `2i + 2`.  Both [`Heap`](super::Heap) and [`KeyHeap`](crate::KeyHeap) drive
//! these functions through the [`HeapSlots`] and [`HeapSlotsMut`]
//! capabilities, so any container exposing them can reuse the same walks.

use super::Order;

/// Read access to a dense sequence of heap slots
pub trait HeapSlots {
    /// The priority stored at each slot
    type Value: PartialOrd + ?Sized;

    /// The number of occupied slots
    fn len(&self) -> usize;

    /// Returns true if no slot is occupied
    #[inline]
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// The ordering policy the slots are arranged by
    fn order(&self) -> Order;

    /// The priority stored at `slot`.  Callers guarantee `slot < self.len()`.
    fn value(&self, slot: usize) -> &Self::Value;
}

/// Write access to a dense sequence of heap slots
pub trait HeapSlotsMut: HeapSlots {
    /// Exchange the entries at slots `a` and `b`.
    ///
    /// Implementors keeping an index of their entries must update it here,
    /// since the walks below never touch it.
    fn swap(&mut self, a: usize, b: usize);
}

/// The parent of `slot`, or `None` for the root
#[inline]
#[must_use]
pub const fn parent(slot: usize) -> Option<usize> {
    if slot == 0 {
        None
    } else {
        Some((slot - 1) / 2)
    }
}

/// The left child of `slot`.  The right child is the slot after it.
#[inline]
#[must_use]
pub const fn left_child(slot: usize) -> usize { 2 * slot + 1 }

/// Move the entry at `slot` toward the root until its parent is not worse
/// than it, returning the slot it settles in
pub fn sift_up<H: HeapSlotsMut + ?Sized>(heap: &mut H, mut slot: usize) -> usize {
    debug_assert!(slot < heap.len());
    let order = heap.order();

    while let Some(up) = parent(slot) {
        if order.is_not_worse(heap.value(up), heap.value(slot)) {
            break;
        }

        heap.swap(slot, up);
        slot = up;
    }

    slot
}

/// Move the entry at `slot` toward the leaves until it is not worse than
/// either child, returning the slot it settles in
///
/// When both children tie, the left one is promoted.
pub fn sift_down<H: HeapSlotsMut + ?Sized>(heap: &mut H, mut slot: usize) -> usize {
    debug_assert!(slot < heap.len());
    let len = heap.len();
    let order = heap.order();

    loop {
        let left = left_child(slot);
        if left >= len {
            break;
        }

        let right = left + 1;
        let child = if right < len && !order.is_not_worse(heap.value(left), heap.value(right)) {
            right
        } else {
            left
        };

        if order.is_not_worse(heap.value(slot), heap.value(child)) {
            break;
        }

        heap.swap(slot, child);
        slot = child;
    }

    slot
}

/// Restore order around a slot whose entry changed in an unknown direction.
///
/// Sifts down first, and sifts up only if the entry did not move.
pub fn sift<H: HeapSlotsMut + ?Sized>(heap: &mut H, slot: usize) -> usize {
    let settled = sift_down(heap, slot);

    if settled == slot {
        sift_up(heap, slot)
    } else {
        settled
    }
}

/// Arrange every slot into heap order in linear time
pub fn heapify<H: HeapSlotsMut + ?Sized>(heap: &mut H) {
    let len = heap.len();

    for slot in (0..len / 2).rev() {
        sift_down(heap, slot);
    }

    tracing::trace!(len, order = %heap.order(), "Heapified slots");
}

/// Returns true if every non-root slot is not better than its parent
#[must_use]
pub fn is_heap<H: HeapSlots + ?Sized>(heap: &H) -> bool {
    let order = heap.order();

    (1..heap.len()).all(|slot| {
        let up = parent(slot).unwrap_or_else(|| unreachable!());
        order.is_not_worse(heap.value(up), heap.value(slot))
    })
}
