//! Union-find over the integer range `0..len`

use std::{fmt, ops::Range};

use super::{
    disjoint_set::{self, NoNode, Unioned},
    vec_forest::{self, VecForestSet},
};

/// A disjoint-set data structure over the integer range `0..len`
#[derive(Default, Clone)]
pub struct DenseUnionFind(VecForestSet);

impl fmt::Debug for DenseUnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(forest) = self;
        fmt::Debug::fmt(forest, f)
    }
}

impl DenseUnionFind {
    /// Construct a union-find holding the singletons `0..len`
    #[must_use]
    #[inline]
    pub fn new(len: usize) -> Self { Self(VecForestSet::with_len(len)) }

    /// Gets the number of elements in the union-find
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns true if the union-find has no elements
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// The number of disjoint subsets, maintained incrementally
    #[must_use]
    #[inline]
    pub fn n_subset(&self) -> usize { self.0.subsets() }

    /// Returns true if `id` is within `0..len`
    #[must_use]
    #[inline]
    pub fn contains(&self, id: usize) -> bool { id < self.0.len() }

    /// Every element, in ascending order
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Range<usize> { 0..self.0.len() }

    /// The representative of every subset
    #[inline]
    pub fn roots(&self) -> vec_forest::Roots<'_> { self.0.roots() }

    /// Add the next integer as a new singleton, returning it
    #[inline]
    pub fn add(&mut self) -> usize { self.0.add() }

    /// Remove every element
    #[inline]
    pub fn clear(&mut self) { self.0.clear(); }

    /// Find the representative of the subset holding `id`, and optimize the
    /// search path between the two
    ///
    /// # Errors
    /// This method first checks if `id` is valid, returning an error if it is
    /// out of range.
    #[inline]
    pub fn find(&self, id: usize) -> Result<usize, NoNode<usize>> {
        disjoint_set::forest_find(&self.0, id)
    }

    /// Perform the in-place union of the subsets holding the two given
    /// elements
    ///
    /// # Errors
    /// This method first checks if both elements are valid, returning an
    /// error if either is out of range.
    #[inline]
    pub fn union(&mut self, a: usize, b: usize) -> Result<Unioned<usize>, NoNode<usize>> {
        disjoint_set::ranked_union(&mut self.0, a, b)
    }

    /// Returns true if both elements share a subset
    ///
    /// # Errors
    /// Returns an error if either element is out of range.
    pub fn is_same_subset(&self, a: usize, b: usize) -> Result<bool, NoNode<usize>> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// The current partition, as one list of elements per subset, in no
    /// particular order
    #[must_use]
    pub fn subsets(&self) -> Vec<Vec<usize>> { self.0.partition() }
}

impl IntoIterator for &DenseUnionFind {
    type IntoIter = Range<usize>;
    type Item = usize;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
