//! Forest algorithms shared by every union-find front-end

/// Error indicating an element passed to a union-find operation does not
/// exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No disjoint-set element found matching {0:?}")]
pub struct NoNode<T>(pub T);

/// The outcome of a union: the surviving root, and the root merged beneath
/// it if the two sets were distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unioned<K> {
    /// The root of the combined set
    pub root: K,
    /// The former root now attached beneath `root`, or `None` if both
    /// elements already shared a set
    pub unioned: Option<K>,
}

impl<K> Unioned<K> {
    /// Convert both roots with `f`
    #[must_use]
    pub fn map<J, F: Fn(K) -> J>(self, f: F) -> Unioned<J> {
        Unioned {
            root: f(self.root),
            unioned: self.unioned.map(f),
        }
    }

    /// Returns true if two distinct sets were combined
    #[inline]
    #[must_use]
    pub fn did_merge(&self) -> bool { self.unioned.is_some() }
}

impl<K: Copy> Unioned<&K> {
    /// Copy both roots out of their borrows
    #[inline]
    #[must_use]
    pub fn copied(self) -> Unioned<K> {
        Unioned {
            root: *self.root,
            unioned: self.unioned.copied(),
        }
    }
}

/// Parent-pointer access for [`forest_find`]
pub trait ForestFind<K> {
    /// The current parent of `key`, or `None` if it has no node
    fn load_parent(&self, key: K) -> Option<K>;

    /// Repoint `key` from `current` to `new` if its parent is still
    /// `current`, returning the parent observed.  `None` if `key` has no node.
    fn compare_exchange_parent(&self, key: K, current: K, new: K) -> Option<Result<K, K>>;

    /// The root of every element, if the forest has collapsed into a single
    /// tree
    #[inline]
    fn sole_root(&self) -> Option<K> { None }
}

/// Find the root of `key`, repointing every node visited on the way directly
/// at it
///
/// # Errors
/// Returns an error if `key` has no node in the forest.
///
/// # Panics
/// Panics if a node on the path is repointed anywhere other than the root
/// while compressing.
pub fn forest_find<K: Copy + Eq, F: ForestFind<K> + ?Sized>(
    set: &F,
    key: K,
) -> Result<K, NoNode<K>> {
    let parent = set.load_parent(key).ok_or(NoNode(key))?;

    if parent == key {
        return Ok(key);
    }

    if let Some(root) = set.sole_root() {
        return Ok(root);
    }

    let mut visited = vec![(key, parent)];
    let mut node = parent;
    let root = loop {
        let next = set.load_parent(node).unwrap_or_else(|| unreachable!());

        if next == node {
            break node;
        }

        visited.push((node, next));
        node = next;
    };

    for (node, parent) in visited {
        if parent == root {
            continue;
        }

        let prev = set
            .compare_exchange_parent(node, parent, root)
            .unwrap_or_else(|| unreachable!());
        assert!(prev == Ok(parent) || prev == Err(root));
    }

    Ok(root)
}

/// Root bookkeeping for [`ranked_union`]
pub trait RankedUnion<K> {
    /// Identifies the root of a set
    type Root: Eq;
    /// The approximate height of a tree
    type Rank: Ord;

    /// Find the root of the set holding `key`
    ///
    /// # Errors
    /// Returns an error if `key` has no node in the forest.
    fn find(&self, key: K) -> Result<Self::Root, NoNode<K>>;

    /// The rank of `root`, or `None` if it has no node
    fn rank(&self, root: &Self::Root) -> Option<Self::Rank>;

    /// Attach `merged` beneath `root`, adjusting the rank of `root` if the two
    /// trees were the same height
    fn merge(&mut self, root: &Self::Root, merged: &Self::Root);
}

/// Merge the sets containing `a` and `b`, attaching the lower-ranked root
/// beneath the higher-ranked one
///
/// On a rank tie the root of `b` survives.  Merging two elements already in
/// the same set is a no-op reported by [`Unioned::did_merge`].
///
/// # Errors
/// Returns an error if either element has no node in the forest.
pub fn ranked_union<K: Copy, S: RankedUnion<K> + ?Sized>(
    set: &mut S,
    a: K,
    b: K,
) -> Result<Unioned<S::Root>, NoNode<K>> {
    let a = set.find(a)?;
    let b = set.find(b)?;

    if a == b {
        return Ok(Unioned {
            root: a,
            unioned: None,
        });
    }

    let a_rank = set.rank(&a).unwrap_or_else(|| unreachable!());
    let b_rank = set.rank(&b).unwrap_or_else(|| unreachable!());

    let (root, merged) = if a_rank > b_rank { (a, b) } else { (b, a) };

    set.merge(&root, &merged);

    Ok(Unioned {
        root,
        unioned: Some(merged),
    })
}
