mod min_query;

use super::{
    query_tree::{Positions, Query, QueryTree},
    Infinity, Result,
};
use min_query::MinQuery;
use std::ops::RangeBounds;

/// Range-minimum tree. Unwritten leaves hold +infinity.
#[derive(Debug)]
pub struct MinTree<V: Copy + Infinity + PartialOrd> {
    tree: QueryTree<V, MinQuery>,
}

impl<V: Copy + Infinity + PartialOrd> MinTree<V> {
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            tree: QueryTree::with_capacity(capacity)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn root_value(&self) -> V {
        self.tree.root_value()
    }

    pub fn leaves(&self) -> &[V] {
        self.tree.leaves()
    }

    pub fn get(&self, index: usize) -> Result<V> {
        self.tree.get(index)
    }

    pub fn set(&mut self, index: usize, value: V) -> Result<()> {
        self.tree.set(index, value)
    }

    pub fn set_many(&mut self, indices: &[usize], values: &[V]) -> Result<()> {
        self.tree.set_many(indices, values)
    }

    pub fn set_all(&mut self, values: &[V]) -> Result<()> {
        self.tree.set_all(values)
    }

    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.tree.reset(index)
    }

    pub fn partial_reduce<R: RangeBounds<usize>>(&self, range: R) -> Result<V> {
        self.tree.partial_reduce(range)
    }

    pub fn partial_reduce_batch<'a>(
        &self,
        start: impl Into<Positions<'a>>,
        stop: impl Into<Positions<'a>>,
    ) -> Result<Vec<V>> {
        self.tree.partial_reduce_batch(start, stop)
    }
}
