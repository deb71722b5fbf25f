mod max_query;

use super::{
    query_tree::{Query, QueryTree},
    NegativeInfinity, Result,
};
use max_query::MaxQuery;
use std::ops::RangeBounds;

/// Range-maximum tree. Unwritten leaves hold -infinity.
#[derive(Debug)]
pub struct MaxTree<V: Copy + NegativeInfinity + PartialOrd> {
    tree: QueryTree<V, MaxQuery>,
}

impl<V: Copy + NegativeInfinity + PartialOrd> MaxTree<V> {
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            tree: QueryTree::with_capacity(capacity)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    pub fn root_value(&self) -> V {
        self.tree.root_value()
    }

    pub fn set(&mut self, index: usize, value: V) -> Result<()> {
        self.tree.set(index, value)
    }

    pub fn set_many(&mut self, indices: &[usize], values: &[V]) -> Result<()> {
        self.tree.set_many(indices, values)
    }

    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.tree.reset(index)
    }

    pub fn partial_reduce<R: RangeBounds<usize>>(&self, range: R) -> Result<V> {
        self.tree.partial_reduce(range)
    }
}
