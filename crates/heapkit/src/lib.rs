//! Keyed binary heaps and disjoint-set forests, the bookkeeping containers
//! behind shortest-path, spanning-tree and scheduling algorithms

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod heap;
pub mod key_heap;
pub mod union_find;

pub use heap::{Empty, Heap, Order};
pub use key_heap::{KeyHeap, NoKey};
pub use union_find::{DenseUnionFind, NoNode, UnionFind, Unioned};
