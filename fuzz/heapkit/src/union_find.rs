use arbitrary::Arbitrary;
use heapkit::{DenseUnionFind, UnionFind};

#[derive(Debug, Clone, Copy, Arbitrary)]
pub enum Op {
    Add,
    Union(u8, u8),
    Check(u8, u8),
}

#[derive(Debug, Clone, Arbitrary)]
pub struct Input {
    len: u8,
    ops: Vec<Op>,
}

impl Input {
    pub fn run(self) {
        let Self { len, ops } = self;
        let mut labels: Vec<usize> = (0..usize::from(len)).collect();
        let mut dense = DenseUnionFind::new(labels.len());
        let mut hashed: UnionFind<usize> = (0..labels.len()).collect();

        for op in ops {
            match op {
                Op::Add => {
                    let id = dense.add();
                    assert_eq!(id, labels.len());
                    assert!(hashed.add(id));
                    labels.push(id);
                },
                Op::Union(a, b) => {
                    let (a, b) = (usize::from(a), usize::from(b));
                    let (Some(&from), Some(&to)) = (labels.get(a), labels.get(b)) else {
                        assert!(dense.union(a, b).is_err());
                        assert!(hashed.union(&a, &b).is_err());
                        continue;
                    };

                    let merged = dense.union(a, b).unwrap().did_merge();
                    assert_eq!(merged, from != to);
                    assert_eq!(hashed.union(&a, &b).unwrap().did_merge(), merged);
                    labels.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);
                },
                Op::Check(a, b) => {
                    let (a, b) = (usize::from(a), usize::from(b));
                    let expect = match (labels.get(a), labels.get(b)) {
                        (Some(l), Some(r)) => Some(l == r),
                        _ => None,
                    };
                    assert_eq!(dense.is_same_subset(a, b).ok(), expect);
                    assert_eq!(hashed.is_same_subset(&a, &b).ok(), expect);
                },
            }

            let mut distinct = labels.clone();
            distinct.sort_unstable();
            distinct.dedup();
            assert_eq!(dense.n_subset(), distinct.len());
            assert_eq!(hashed.n_subset(), distinct.len());
        }
    }
}
