//! A disjoint-set data structure with union-by-rank and path compression
//!
//! Both front-ends share one forest engine.  [`DenseUnionFind`] addresses
//! elements by their position in `0..len` and stores nothing else, while
//! [`UnionFind`] assigns each hashable element a dense ID on insertion.

pub mod dense;
pub mod disjoint_set;
pub mod hashed;
pub mod vec_forest;

pub use dense::DenseUnionFind;
pub use disjoint_set::{NoNode, Unioned};
pub use hashed::UnionFind;

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use prop::sample::SizeRange;
    use proptest::prelude::*;

    use super::{DenseUnionFind, UnionFind};

    // Reference partition: relabel one whole class on every merge
    fn naive(len: usize, merges: &[(usize, usize)]) -> Vec<usize> {
        let mut labels: Vec<_> = (0..len).collect();

        for &(a, b) in merges {
            let (from, to) = (labels[a], labels[b]);
            labels.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);
        }

        labels
    }

    fn run_diff(len: usize, merges: &[(usize, usize)]) {
        let labels = naive(len, merges);
        let mut dense = DenseUnionFind::new(len);
        let mut hashed: UnionFind<String> = (0..len).map(|i| i.to_string()).collect();

        for &(a, b) in merges {
            let before = dense.n_subset();
            let dense_u = dense.union(a, b).unwrap();
            let hashed_u = hashed.union(&a.to_string(), &b.to_string()).unwrap();

            assert_eq!(dense_u.did_merge(), hashed_u.did_merge());
            assert_eq!(
                dense.n_subset(),
                before - usize::from(dense_u.did_merge())
            );
            assert_eq!(dense.n_subset(), hashed.n_subset());
        }

        let distinct: BTreeSet<_> = labels.iter().collect();
        assert_eq!(dense.n_subset(), distinct.len());

        for a in 0..len {
            for b in [0, a / 2, len - 1] {
                let same = labels[a] == labels[b];
                assert_eq!(dense.is_same_subset(a, b), Ok(same));
                assert_eq!(
                    hashed.is_same_subset(&a.to_string(), &b.to_string()),
                    Ok(same)
                );
            }
        }
    }

    fn len_and_merges(
        len: impl Strategy<Value = usize>,
        merge_len: impl Clone + Into<SizeRange>,
    ) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        len.prop_flat_map(move |l| {
            prop::collection::vec((0..l, 0..l), merge_len.clone()).prop_map(move |v| (l, v))
        })
    }

    proptest! {
        #[test]
        fn differential((len, merges) in len_and_merges(1..=256_usize, 0..=128)) {
            run_diff(len, &merges);
        }
    }

    #[test]
    fn chain_collapses() {
        let mut uf = DenseUnionFind::new(5);
        assert_ne!(uf.find(0), uf.find(1));
        assert_eq!(uf.find(0), uf.find(0));
        assert_eq!(uf.n_subset(), 5);

        uf.union(1, 0).unwrap();
        assert_eq!(uf.n_subset(), 4);
        assert_eq!(uf.find(0), uf.find(1));
        assert_ne!(uf.find(0), uf.find(2));

        for (a, b) in [(2, 4), (2, 3), (3, 4), (0, 4)] {
            uf.union(a, b).unwrap();
        }
        assert_eq!(uf.find(1), uf.find(3));
        assert_eq!(uf.n_subset(), 1);
    }
}
