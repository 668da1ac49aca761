//! Union-find over arbitrary hashable elements

use std::{fmt, hash::Hash};

use hashbrown::{DefaultHashBuilder, HashSet};
use indexmap::{Equivalent, IndexSet};

use super::{
    disjoint_set::{self, NoNode, Unioned},
    vec_forest::VecForestSet,
};

/// A disjoint-set data structure over arbitrary hashable elements
///
/// Each element is assigned a dense ID on insertion, which indexes into the
/// same forest used by [`DenseUnionFind`](super::DenseUnionFind).
#[derive(Clone)]
pub struct UnionFind<T> {
    elems: IndexSet<T, DefaultHashBuilder>,
    forest: VecForestSet,
}

impl<T> Default for UnionFind<T> {
    #[inline]
    fn default() -> Self {
        Self {
            elems: IndexSet::default(),
            forest: VecForestSet::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UnionFind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_map();

        for (id, elem) in self.elems.iter().enumerate() {
            f.entry(elem, self.elem(self.root_of(id)));
        }

        f.finish()
    }
}

impl<T> UnionFind<T> {
    /// Construct an empty union-find
    #[inline]
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Gets the number of elements in the union-find
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.elems.len() }

    /// Returns true if the union-find has no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.elems.is_empty() }

    /// The number of disjoint subsets, maintained incrementally
    #[inline]
    #[must_use]
    pub fn n_subset(&self) -> usize { self.forest.subsets() }

    /// Every element, in insertion order
    #[inline]
    #[must_use]
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> { self.elems.iter() }

    /// The representative of every subset
    #[must_use]
    pub fn roots(&self) -> impl Iterator<Item = &T> + '_ {
        self.forest.roots().map(|id| self.elem(id))
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.elems.clear();
        self.forest.clear();
    }

    fn elem(&self, id: usize) -> &T { self.elems.get_index(id).unwrap_or_else(|| unreachable!()) }

    #[inline]
    fn root_of(&self, id: usize) -> usize {
        disjoint_set::forest_find(&self.forest, id).unwrap_or_else(|_| unreachable!())
    }
}

impl<T: Hash + Eq> UnionFind<T> {
    /// Returns true if `elem` has been added
    #[inline]
    #[must_use]
    pub fn contains<Q: ?Sized + Hash + Equivalent<T>>(&self, elem: &Q) -> bool {
        self.elems.contains(elem)
    }

    /// Add `elem` as a new singleton subset.  Returns false and leaves the
    /// structure untouched if it was already present.
    pub fn add(&mut self, elem: T) -> bool {
        let (id, added) = self.elems.insert_full(elem);

        if added {
            let node = self.forest.add();
            debug_assert_eq!(id, node);
        }

        added
    }

    fn id_of<'q, Q: ?Sized + Hash + Equivalent<T>>(
        &self,
        elem: &'q Q,
    ) -> Result<usize, NoNode<&'q Q>> {
        self.elems.get_index_of(elem).ok_or(NoNode(elem))
    }

    /// Find the representative of the subset holding `elem`, and optimize the
    /// search path between the two
    ///
    /// # Errors
    /// Returns an error if `elem` was never added.
    pub fn find<'q, Q: ?Sized + Hash + Equivalent<T>>(
        &self,
        elem: &'q Q,
    ) -> Result<&T, NoNode<&'q Q>> {
        let id = self.id_of(elem)?;
        Ok(self.elem(self.root_of(id)))
    }

    /// Perform the in-place union of the subsets holding the two given
    /// elements
    ///
    /// # Errors
    /// This method first checks if both elements are present, returning an
    /// error if either was never added.
    pub fn union<'q, Q: ?Sized + Hash + Equivalent<T>>(
        &mut self,
        a: &'q Q,
        b: &'q Q,
    ) -> Result<Unioned<&T>, NoNode<&'q Q>> {
        let a = self.id_of(a)?;
        let b = self.id_of(b)?;
        let unioned =
            disjoint_set::ranked_union(&mut self.forest, a, b).unwrap_or_else(|_| unreachable!());

        Ok(unioned.map(|id| self.elem(id)))
    }

    /// Returns true if both elements share a subset
    ///
    /// # Errors
    /// Returns an error if either element was never added.
    pub fn is_same_subset<'q, Q: ?Sized + Hash + Equivalent<T>>(
        &self,
        a: &'q Q,
        b: &'q Q,
    ) -> Result<bool, NoNode<&'q Q>> {
        let a = self.id_of(a)?;
        let b = self.id_of(b)?;
        Ok(self.root_of(a) == self.root_of(b))
    }

    /// The current partition, as one set of elements per subset, in no
    /// particular order
    #[must_use]
    pub fn subsets(&self) -> Vec<HashSet<&T>> {
        self.forest
            .partition()
            .into_iter()
            .map(|ids| ids.into_iter().map(|id| self.elem(id)).collect())
            .collect()
    }
}

impl<T: Hash + Eq> Extend<T> for UnionFind<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for UnionFind<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a UnionFind<T> {
    type IntoIter = indexmap::set::Iter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod test {
    use hashbrown::HashSet;

    use super::{NoNode, UnionFind};

    #[test]
    fn letters() {
        let mut uf: UnionFind<char> = ('a'..='e').collect();
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.n_subset(), 5);
        assert_ne!(uf.find(&'a'), uf.find(&'b'));
        assert_eq!(uf.find(&'c'), Ok(&'c'));

        uf.union(&'a', &'b').unwrap();
        assert_eq!(uf.find(&'a'), uf.find(&'b'));
        assert_eq!(uf.n_subset(), 4);

        uf.union(&'c', &'d').unwrap();
        uf.union(&'e', &'d').unwrap();
        assert_eq!(uf.is_same_subset(&'c', &'e'), Ok(true));
        assert_eq!(uf.is_same_subset(&'a', &'e'), Ok(false));
        assert_eq!(uf.n_subset(), 2);
        assert_eq!(uf.roots().count(), 2);
    }

    #[test]
    fn add_is_noop_for_present() {
        let mut uf = UnionFind::new();
        assert!(uf.add(1_i32));
        assert!(uf.add(2));
        uf.union(&1_i32, &2_i32).unwrap();

        assert!(!uf.add(1));
        assert_eq!(uf.len(), 2);
        assert_eq!(uf.n_subset(), 1);
        assert_eq!(uf.is_same_subset(&1_i32, &2_i32), Ok(true));
    }

    #[test]
    fn subsets() {
        let mut uf: UnionFind<u32> = (0..5).collect();
        uf.union(&0_u32, &1_u32).unwrap();
        uf.union(&2_u32, &4_u32).unwrap();

        let mut parts: Vec<Vec<u32>> = uf
            .subsets()
            .into_iter()
            .map(|s| {
                let mut v: Vec<_> = s.into_iter().copied().collect();
                v.sort_unstable();
                v
            })
            .collect();
        parts.sort();
        assert_eq!(parts, [vec![0, 1], vec![2, 4], vec![3]]);
    }

    #[test]
    fn borrowed_lookup() {
        let mut uf: UnionFind<String> = ["left", "right", "other"]
            .into_iter()
            .map(String::from)
            .collect();

        let u = uf.union("left", "right").unwrap();
        assert!(u.did_merge());
        assert_eq!(u.root, "right");
        assert_eq!(u.unioned.map(String::as_str), Some("left"));

        assert!(uf.contains("other"));
        assert_eq!(uf.find("left").map(String::as_str), Ok("right"));
        assert_eq!(uf.find("missing"), Err(NoNode("missing")));
        assert_eq!(uf.union("left", "nope"), Err(NoNode("nope")));
        assert_eq!(uf.is_same_subset("gone", "left"), Err(NoNode("gone")));
    }

    #[test]
    fn copy_and_clear() {
        let mut uf: UnionFind<u8> = (0..3).collect();
        uf.union(&0_u8, &1_u8).unwrap();

        let mut copy = uf.clone();
        copy.union(&1_u8, &2_u8).unwrap();
        assert_eq!(uf.n_subset(), 2);
        assert_eq!(copy.n_subset(), 1);

        uf.clear();
        assert!(uf.is_empty());
        assert_eq!(uf.n_subset(), 0);
        assert_eq!(uf.find(&0_u8), Err(NoNode(&0_u8)));

        let all: HashSet<_> = copy.iter().copied().collect();
        assert_eq!(all, (0..3).collect());
        assert_eq!(copy.subsets().len(), 1);
    }

    #[test]
    fn debug_shows_roots() {
        let mut uf: UnionFind<u8> = (0..2).collect();
        let u = uf.union(&0_u8, &1_u8).unwrap().copied();
        assert_eq!((u.root, u.unioned), (1, Some(0)));
        assert_eq!(format!("{uf:?}"), "{0: 1, 1: 1}");
    }
}
