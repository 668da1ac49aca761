//! The vector-backed forest engine

use std::{
    fmt, iter, slice,
    sync::atomic::{self, AtomicUsize},
};

use hashbrown::HashMap;

use super::disjoint_set::{ForestFind, NoNode, RankedUnion, forest_find};

#[derive(Debug)]
pub(super) struct Node {
    pub parent: AtomicUsize,
    pub rank: u32,
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent.load(atomic::Ordering::Relaxed).into(),
            rank: self.rank,
        }
    }
}

/// A disjoint-set forest over the dense ID range `0..len`
///
/// Parent pointers are atomics so that [`forest_find`] can compress paths
/// through a shared reference.
#[derive(Default, Clone)]
pub struct VecForestSet {
    nodes: Vec<Node>,
    subsets: usize,
    sole_root: Option<usize>,
}

impl fmt::Debug for VecForestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_map();

        for id in 0..self.nodes.len() {
            let root = self.peek_root(id);
            f.entry(&id, &(root != id).then_some(root));
        }

        f.finish()
    }
}

impl VecForestSet {
    /// Construct an empty forest
    #[must_use]
    #[inline]
    pub fn new() -> Self { Self::default() }

    /// Construct a forest of `len` singleton trees
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        let mut set = Self {
            nodes: Vec::with_capacity(len),
            ..Self::default()
        };

        for _ in 0..len {
            set.add();
        }

        set
    }

    /// Gets the number of nodes in the forest
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns true if the forest has no nodes
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// The number of disjoint trees
    #[must_use]
    #[inline]
    pub fn subsets(&self) -> usize { self.subsets }

    /// Add a singleton tree, returning its ID
    pub fn add(&mut self) -> usize {
        let key = self.nodes.len();
        self.nodes.push(Node {
            parent: key.into(),
            rank: 0,
        });
        self.subsets += 1;
        self.sole_root = (self.subsets == 1).then_some(key);
        key
    }

    /// Remove every node
    pub fn clear(&mut self) {
        tracing::trace!(len = self.nodes.len(), "Clearing disjoint-set forest");
        self.nodes.clear();
        self.subsets = 0;
        self.sole_root = None;
    }

    /// The ID of every root, in ascending order
    #[inline]
    pub fn roots(&self) -> Roots<'_> { Roots(self.nodes.iter().enumerate()) }

    /// Group every ID by its root.  Compresses every path in the forest.
    #[must_use]
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut parts: HashMap<usize, Vec<usize>> = HashMap::with_capacity(self.subsets);

        for id in 0..self.nodes.len() {
            let root = forest_find(self, id).unwrap_or_else(|_| unreachable!());
            parts.entry(root).or_default().push(id);
        }

        debug_assert_eq!(parts.len(), self.subsets);
        parts.into_values().collect()
    }

    // Walk to the root without compressing anything
    fn peek_root(&self, mut id: usize) -> usize {
        loop {
            let node = self.nodes.get(id).unwrap_or_else(|| unreachable!());
            let parent = node.parent.load(atomic::Ordering::Relaxed);

            if parent == id {
                break id;
            }

            id = parent;
        }
    }
}

impl ForestFind<usize> for VecForestSet {
    fn load_parent(&self, key: usize) -> Option<usize> {
        Some(self.nodes.get(key)?.parent.load(atomic::Ordering::SeqCst))
    }

    fn compare_exchange_parent(
        &self,
        key: usize,
        current: usize,
        new: usize,
    ) -> Option<Result<usize, usize>> {
        Some(self.nodes.get(key)?.parent.compare_exchange(
            current,
            new,
            atomic::Ordering::SeqCst,
            atomic::Ordering::SeqCst,
        ))
    }

    #[inline]
    fn sole_root(&self) -> Option<usize> { self.sole_root }
}

impl RankedUnion<usize> for VecForestSet {
    type Rank = u32;
    type Root = usize;

    #[inline]
    fn find(&self, key: usize) -> Result<usize, NoNode<usize>> { forest_find(self, key) }

    #[inline]
    fn rank(&self, &key: &usize) -> Option<Self::Rank> { Some(self.nodes.get(key)?.rank) }

    fn merge(&mut self, &root: &usize, &merged: &usize) {
        let merged_rank = self.nodes.get(merged).unwrap_or_else(|| unreachable!()).rank;
        let node = self.nodes.get_mut(root).unwrap_or_else(|| unreachable!());

        if node.rank == merged_rank {
            node.rank = node.rank.checked_add(1).unwrap_or_else(|| unreachable!());
        }

        self.nodes
            .get_mut(merged)
            .unwrap_or_else(|| unreachable!())
            .parent = root.into();

        self.subsets -= 1;
        if self.subsets == 1 {
            self.sole_root = Some(root);
        }

        tracing::trace!(root, merged, subsets = self.subsets, "Merged subsets");
    }
}

/// Iterator over the roots of a [`VecForestSet`]
#[derive(Debug, Clone)]
#[must_use]
#[repr(transparent)]
pub struct Roots<'a>(iter::Enumerate<slice::Iter<'a, Node>>);

impl Iterator for Roots<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            let (id, node) = self.0.next()?;

            let parent = node.parent.load(atomic::Ordering::Relaxed);
            if parent == id {
                break Some(parent);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::VecForestSet;
    use crate::union_find::disjoint_set::{forest_find, ranked_union};

    #[test]
    fn ranks_break_ties_toward_b() {
        let mut set = VecForestSet::with_len(4);

        let u = ranked_union(&mut set, 0, 1).unwrap();
        assert_eq!((u.root, u.unioned), (1, Some(0)));
        assert_eq!(set.nodes[1].rank, 1);

        // Lower rank goes under higher regardless of argument order
        let u = ranked_union(&mut set, 1, 2).unwrap();
        assert_eq!((u.root, u.unioned), (1, Some(2)));
        assert_eq!(set.nodes[1].rank, 1);
        assert_eq!(set.subsets(), 2);
    }

    #[test]
    fn find_compresses_paths() {
        let mut set = VecForestSet::with_len(5);
        // Build a chain 0 -> 1 -> 3 by stacking equal-rank trees
        ranked_union(&mut set, 0, 1).unwrap();
        ranked_union(&mut set, 2, 3).unwrap();
        ranked_union(&mut set, 1, 3).unwrap();
        assert_eq!(set.peek_root(0), 3);
        assert_eq!(
            set.nodes[0].parent.load(std::sync::atomic::Ordering::Relaxed),
            1
        );

        assert_eq!(forest_find(&set, 0), Ok(3));
        assert_eq!(
            set.nodes[0].parent.load(std::sync::atomic::Ordering::Relaxed),
            3
        );
        assert_eq!(set.subsets(), 2);
        assert_eq!(set.sole_root, None);
    }

    #[test]
    fn sole_root_tracks_collapse() {
        let mut set = VecForestSet::new();
        assert_eq!(set.sole_root, None);

        set.add();
        assert_eq!(set.sole_root, Some(0));

        set.add();
        assert_eq!(set.sole_root, None);

        let u = ranked_union(&mut set, 0, 1).unwrap();
        assert_eq!(set.sole_root, Some(u.root));
        assert_eq!(forest_find(&set, 0), Ok(u.root));

        set.clear();
        assert_eq!((set.len(), set.subsets(), set.sole_root), (0, 0, None));
    }

    #[test]
    fn roots_and_partition_agree() {
        let mut set = VecForestSet::with_len(6);
        ranked_union(&mut set, 0, 5).unwrap();
        ranked_union(&mut set, 2, 3).unwrap();

        assert_eq!(set.roots().count(), set.subsets());

        let mut parts = set.partition();
        for part in &mut parts {
            part.sort_unstable();
        }
        parts.sort();
        assert_eq!(parts, [vec![0, 5], vec![1], vec![2, 3], vec![4]]);
    }
}
