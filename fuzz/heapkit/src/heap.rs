use arbitrary::Arbitrary;
use heapkit::{Empty, Heap, Order};

use crate::{best, Max};

#[derive(Debug, Clone, Copy, Arbitrary)]
pub enum Op {
    Push(i16),
    Pop,
    PushPop(i16),
    PopPush(i16),
}

#[derive(Debug, Clone, Arbitrary)]
pub struct Input {
    order: Max,
    init: Vec<i16>,
    ops: Vec<Op>,
}

fn take_best(order: Order, model: &mut Vec<i16>) -> Option<i16> {
    let &val = best(order, model.iter())?;
    let pos = model.iter().position(|&v| v == val).unwrap();
    Some(model.swap_remove(pos))
}

impl Input {
    pub fn run(self) {
        let Self { order, init, ops } = self;
        let order = order.into();
        let mut heap = Heap::from_iter_with_order(order, init.iter().copied());
        let mut model = init;
        heap.assert_invariants();

        for op in ops {
            match op {
                Op::Push(v) => {
                    heap.push(v);
                    model.push(v);
                },
                Op::Pop => assert_eq!(heap.pop().ok(), take_best(order, &mut model)),
                Op::PushPop(v) => {
                    model.push(v);
                    assert_eq!(Some(heap.push_pop(v)), take_best(order, &mut model));
                },
                Op::PopPush(v) => match take_best(order, &mut model) {
                    Some(top) => {
                        model.push(v);
                        assert_eq!(heap.pop_push(v), Ok(top));
                    },
                    None => assert_eq!(heap.pop_push(v), Err(Empty)),
                },
            }

            heap.assert_invariants();
            assert_eq!(heap.len(), model.len());
            assert_eq!(heap.peek().ok(), best(order, model.iter()));
        }

        let mut sorted = model;
        sorted.sort_unstable();
        if order.is_max() {
            sorted.reverse();
        }
        assert_eq!(heap.into_sorted_vec(), sorted);
    }
}
