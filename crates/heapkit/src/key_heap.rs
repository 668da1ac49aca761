//! A binary heap addressable by key, for decrease-key style algorithms such
//! as Dijkstra's or Prim's
//!
//! Entries live in an insertion-ordered hash map whose positions double as
//! heap slots.  Every slot exchange goes through the map, so the key→slot
//! index and the slot sequence can never disagree.

use std::{fmt, hash::Hash, ops::Index};

use hashbrown::DefaultHashBuilder;
use indexmap::{map::Entry, Equivalent, IndexMap};

use crate::heap::{
    sift::{self, HeapSlots, HeapSlotsMut},
    Empty, Order,
};

/// Error indicating a key passed to a [`KeyHeap`] operation is not present
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Key not found in heap")]
pub struct NoKey;

/// A binary heap of `(key, value)` entries ordered by value, supporting
/// lookup, reprioritization and removal by key in `O(log n)`
#[derive(Clone)]
pub struct KeyHeap<K, V> {
    slots: IndexMap<K, V, DefaultHashBuilder>,
    order: Order,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeyHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { slots, order } = self;
        f.debug_struct("KeyHeap")
            .field("order", order)
            .field("slots", slots)
            .finish()
    }
}

impl<K, V> Default for KeyHeap<K, V> {
    #[inline]
    fn default() -> Self { Self::new(Order::Min) }
}

impl<K, V> KeyHeap<K, V> {
    /// Construct a new, empty heap with the given ordering
    #[inline]
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self {
            slots: IndexMap::default(),
            order,
        }
    }

    /// Construct a new, empty min-heap
    #[inline]
    #[must_use]
    pub fn min() -> Self { Self::new(Order::Min) }

    /// Construct a new, empty max-heap
    #[inline]
    #[must_use]
    pub fn max() -> Self { Self::new(Order::Max) }

    /// The ordering policy chosen at construction
    #[inline]
    #[must_use]
    pub fn order(&self) -> Order { self.order }

    /// Gets the number of entries in the heap
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns true if the heap holds no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Look at the root entry without removing it
    ///
    /// # Errors
    /// Returns [`Empty`] if the heap holds no entries.
    #[inline]
    pub fn peek(&self) -> Result<(&K, &V), Empty> { self.slots.first().ok_or(Empty) }

    /// Keys in slot order
    #[inline]
    #[must_use]
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> { self.slots.keys() }

    /// Values in slot order
    #[inline]
    #[must_use]
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> { self.slots.values() }

    /// Entries in slot order
    #[inline]
    #[must_use]
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> { self.slots.iter() }

    /// Remove every entry, keeping the ordering policy
    pub fn clear(&mut self) {
        tracing::trace!(len = self.slots.len(), "Clearing key heap");
        self.slots.clear();
    }

    #[inline]
    fn slots_mut(&mut self) -> SlotsMut<'_, K, V> { SlotsMut(self) }
}

impl<K: Hash + Eq, V> KeyHeap<K, V> {
    /// Returns true if `key` has an entry in the heap
    #[inline]
    #[must_use]
    pub fn contains_key<Q: ?Sized + Hash + Equivalent<K>>(&self, key: &Q) -> bool {
        self.slots.contains_key(key)
    }

    /// Look up the value stored for `key`
    ///
    /// # Errors
    /// Returns [`NoKey`] if `key` is not in the heap.
    #[inline]
    pub fn get<Q: ?Sized + Hash + Equivalent<K>>(&self, key: &Q) -> Result<&V, NoKey> {
        self.slots.get(key).ok_or(NoKey)
    }

    /// The slot currently holding `key`, if any
    #[inline]
    #[must_use]
    pub fn slot_of<Q: ?Sized + Hash + Equivalent<K>>(&self, key: &Q) -> Option<usize> {
        self.slots.get_index_of(key)
    }
}

impl<K: Hash + Eq, V: PartialOrd> KeyHeap<K, V> {
    /// Construct a heap with the given ordering from a sequence of entries in
    /// linear time.  Later entries win over earlier ones with the same key.
    #[must_use]
    pub fn from_iter_with_order<I: IntoIterator<Item = (K, V)>>(order: Order, iter: I) -> Self {
        let mut heap = Self::new(order);
        heap.update(iter);
        heap
    }

    /// Insert `key` with `value`, or reprioritize it if already present,
    /// returning the value it replaced
    ///
    /// A value equal to the stored one is not stored: it is handed straight
    /// back and every entry stays in place.  Otherwise the entry only ever
    /// moves toward the root if its value improved, and toward the leaves if
    /// it got worse.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let (slot, old) = match self.slots.entry(key) {
            Entry::Vacant(e) => {
                let slot = e.index();
                e.insert(value);
                (slot, None)
            },
            Entry::Occupied(mut e) => {
                if *e.get() == value {
                    return Some(value);
                }

                (e.index(), Some(e.insert(value)))
            },
        };

        match &old {
            None => {
                sift::sift_up(&mut self.slots_mut(), slot);
            },
            Some(old) => {
                if self.order.is_not_worse(&self.slots[slot], old) {
                    sift::sift_up(&mut self.slots_mut(), slot);
                } else {
                    sift::sift_down(&mut self.slots_mut(), slot);
                }
            },
        }

        old
    }

    /// Insert or overwrite every entry without sifting, then rebuild heap
    /// order in one linear pass
    ///
    /// Accepts anything yielding pairs, so both maps and pair sequences can
    /// be merged in.  When a key repeats, the last value wins.
    pub fn update<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let before = self.slots.len();

        for (key, value) in iter {
            self.slots.insert(key, value);
        }

        tracing::trace!(
            before,
            after = self.slots.len(),
            "Merged entries into key heap"
        );
        sift::heapify(&mut self.slots_mut());
    }

    /// Remove `key` and its value
    ///
    /// # Errors
    /// Returns [`NoKey`] if `key` is not in the heap.
    #[inline]
    pub fn delete<Q: ?Sized + Hash + Equivalent<K>>(&mut self, key: &Q) -> Result<(), NoKey> {
        self.pop_key(key).map(drop)
    }

    /// Remove `key`, returning its value, regardless of where it sits in the
    /// heap
    ///
    /// # Errors
    /// Returns [`NoKey`] if `key` is not in the heap.
    pub fn pop_key<Q: ?Sized + Hash + Equivalent<K>>(&mut self, key: &Q) -> Result<V, NoKey> {
        let (slot, _, value) = self.slots.swap_remove_full(key).ok_or(NoKey)?;
        self.refill(slot);
        Ok(value)
    }

    /// Remove and return the root entry
    ///
    /// # Errors
    /// Returns [`Empty`] if the heap holds no entries.
    pub fn pop(&mut self) -> Result<(K, V), Empty> {
        let top = self.slots.swap_remove_index(0).ok_or(Empty)?;
        self.refill(0);
        Ok(top)
    }

    /// Drain the heap in pop order
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.slots.len());
        while let Ok(entry) = self.pop() {
            out.push(entry);
        }
        out
    }

    // The former last entry now sits in `slot` and may belong either above or
    // below it.
    fn refill(&mut self, slot: usize) {
        if slot < self.slots.len() {
            sift::sift(&mut self.slots_mut(), slot);
        }
    }

    /// Check heap order across every slot, and that every key maps back to
    /// the slot holding it
    ///
    /// # Panics
    /// Panics if either property is violated.
    #[cfg(any(test, feature = "test"))]
    pub fn assert_invariants(&self) {
        assert!(sift::is_heap(self), "Heap order violated: {:?}", self.order);

        for (slot, key) in self.slots.keys().enumerate() {
            assert_eq!(
                self.slots.get_index_of(key),
                Some(slot),
                "Key index out of step with slot {slot}"
            );
        }
    }
}

impl<K, V: PartialOrd> HeapSlots for KeyHeap<K, V> {
    type Value = V;

    #[inline]
    fn len(&self) -> usize { self.slots.len() }

    #[inline]
    fn order(&self) -> Order { self.order }

    #[inline]
    fn value(&self, slot: usize) -> &V { &self.slots[slot] }
}

struct SlotsMut<'a, K, V>(&'a mut KeyHeap<K, V>);

impl<K, V: PartialOrd> HeapSlots for SlotsMut<'_, K, V> {
    type Value = V;

    #[inline]
    fn len(&self) -> usize { self.0.slots.len() }

    #[inline]
    fn order(&self) -> Order { self.0.order }

    #[inline]
    fn value(&self, slot: usize) -> &V { &self.0.slots[slot] }
}

impl<K, V: PartialOrd> HeapSlotsMut for SlotsMut<'_, K, V> {
    // IndexMap rewrites both positions in its hash index here
    #[inline]
    fn swap(&mut self, a: usize, b: usize) { self.0.slots.swap_indices(a, b); }
}

impl<K: Hash + Eq, V, Q: ?Sized + Hash + Equivalent<K>> Index<&Q> for KeyHeap<K, V> {
    type Output = V;

    /// # Panics
    /// Panics if `key` is not in the heap.
    fn index(&self, key: &Q) -> &V {
        self.slots
            .get(key)
            .unwrap_or_else(|| panic!("Key not found in heap"))
    }
}

impl<K: Hash + Eq, V: PartialOrd> Extend<(K, V)> for KeyHeap<K, V> {
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) { self.update(iter); }
}

impl<K: Hash + Eq, V: PartialOrd> FromIterator<(K, V)> for KeyHeap<K, V> {
    /// Collect into a min-heap
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_iter_with_order(Order::Min, iter)
    }
}

impl<K, V> IntoIterator for KeyHeap<K, V> {
    type IntoIter = indexmap::map::IntoIter<K, V>;
    type Item = (K, V);

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.slots.into_iter() }
}

impl<'a, K, V> IntoIterator for &'a KeyHeap<K, V> {
    type IntoIter = indexmap::map::Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.slots.iter() }
}
