pub mod heap;
pub mod key_heap;
pub mod union_find;

use arbitrary::Arbitrary;
use heapkit::Order;

#[derive(Debug, Clone, Copy, Arbitrary)]
pub struct Max(bool);

impl From<Max> for Order {
    fn from(Max(max): Max) -> Self { if max { Order::Max } else { Order::Min } }
}

fn best<'a, V: Ord + 'a>(order: Order, vals: impl IntoIterator<Item = &'a V>) -> Option<&'a V> {
    if order.is_max() {
        vals.into_iter().max()
    } else {
        vals.into_iter().min()
    }
}
