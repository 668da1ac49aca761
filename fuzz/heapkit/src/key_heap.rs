use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use heapkit::{Empty, KeyHeap, NoKey, Order};

use crate::{best, Max};

#[derive(Debug, Clone, Arbitrary)]
pub enum Op {
    Set(u8, i16),
    Update(Vec<(u8, i16)>),
    Delete(u8),
    PopKey(u8),
    Pop,
    Clear,
}

#[derive(Debug, Clone, Arbitrary)]
pub struct Input {
    order: Max,
    ops: Vec<Op>,
}

fn assert_root(order: Order, heap: &KeyHeap<u8, i16>, model: &BTreeMap<u8, i16>) {
    match heap.peek() {
        Ok((key, val)) => {
            assert_eq!(model.get(key), Some(val));
            assert_eq!(Some(val), best(order, model.values()));
        },
        Err(Empty) => assert!(model.is_empty()),
    }
}

impl Input {
    pub fn run(self) {
        let Self { order, ops } = self;
        let order = order.into();
        let mut heap = KeyHeap::new(order);
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => assert_eq!(heap.set(k, v), model.insert(k, v)),
                Op::Update(entries) => {
                    heap.update(entries.iter().copied());
                    model.extend(entries);
                },
                Op::Delete(k) => assert_eq!(
                    heap.delete(&k),
                    model.remove(&k).map(|_| ()).ok_or(NoKey)
                ),
                Op::PopKey(k) => assert_eq!(heap.pop_key(&k), model.remove(&k).ok_or(NoKey)),
                Op::Pop => match heap.pop() {
                    Ok((k, v)) => {
                        assert_eq!(Some(&v), best(order, model.values()));
                        assert_eq!(model.remove(&k), Some(v));
                    },
                    Err(Empty) => assert!(model.is_empty()),
                },
                Op::Clear => {
                    heap.clear();
                    model.clear();
                },
            }

            heap.assert_invariants();
            assert_eq!(heap.len(), model.len());
            assert_root(order, &heap, &model);
        }
    }
}
