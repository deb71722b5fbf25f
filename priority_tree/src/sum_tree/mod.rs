mod sampling;
mod sum_query;

use super::{
    query_tree::{Positions, Query, QueryTree},
    Priority, Result, Zero,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::RangeBounds;
use sum_query::SumQuery;

/// Sum-reduction tree over non-negative weights, with weighted sampling of
/// leaf indices. Owns the generator that drives [`SumTree::sample`].
#[derive(Debug)]
pub struct SumTree<P: Priority> {
    tree: QueryTree<P, SumQuery>,
    rng: ChaCha8Rng,
}

impl<P: Priority> SumTree<P> {
    /// Creates a tree of `capacity` zero-weight leaves. Two trees built with
    /// the same seed draw the same samples for the same sequence of calls.
    pub fn new(capacity: usize, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            tree: QueryTree::with_capacity(capacity)?,
            rng,
        })
    }

    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn root_value(&self) -> P {
        self.tree.root_value()
    }

    pub fn leaves(&self) -> &[P] {
        self.tree.leaves()
    }

    pub fn get(&self, index: usize) -> Result<P> {
        self.tree.get(index)
    }

    pub fn set(&mut self, index: usize, value: P) -> Result<()> {
        self.tree.set(index, value)
    }

    pub fn set_many(&mut self, indices: &[usize], values: &[P]) -> Result<()> {
        self.tree.set_many(indices, values)
    }

    pub fn set_all(&mut self, values: &[P]) -> Result<()> {
        self.tree.set_all(values)
    }

    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.tree.reset(index)
    }

    pub fn partial_reduce<R: RangeBounds<usize>>(&self, range: R) -> Result<P> {
        self.tree.partial_reduce(range)
    }

    pub fn partial_reduce_batch<'a>(
        &self,
        start: impl Into<Positions<'a>>,
        stop: impl Into<Positions<'a>>,
    ) -> Result<Vec<P>> {
        self.tree.partial_reduce_batch(start, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_tree() -> SumTree<f64> {
        let mut tree = SumTree::new(8, Some(13)).unwrap();
        tree.set_all(&[13.0, 7.0, 11.0, 17.0, 19.0, 5.0, 3.0, 23.0])
            .unwrap();
        tree
    }

    #[test]
    fn fresh_tree_sums_to_zero() {
        let tree = SumTree::<f64>::new(14, None).unwrap();
        assert_eq!(tree.leaves().len(), 14);
        assert_eq!(tree.depth(), 5);
        assert_eq!(tree.root_value(), 0.0);
    }

    #[test]
    fn reductions_over_example_leaves() {
        let tree = example_tree();
        assert_eq!(tree.root_value(), 98.0);
        assert_eq!(tree.partial_reduce(3..8).unwrap(), 67.0);
        assert_eq!(tree.partial_reduce(..).unwrap(), 98.0);
    }

    #[test]
    fn writing_same_values_twice_is_idempotent() {
        let mut tree = example_tree();
        let before = tree.partial_reduce_batch(0usize, &[1usize, 3, 5, 8]).unwrap();
        tree.set_all(&[13.0, 7.0, 11.0, 17.0, 19.0, 5.0, 3.0, 23.0])
            .unwrap();
        assert_eq!(tree.root_value(), 98.0);
        assert_eq!(
            tree.partial_reduce_batch(0usize, &[1usize, 3, 5, 8]).unwrap(),
            before
        );
    }

    #[test]
    fn subset_writes_update_the_total() {
        let mut tree = SumTree::<f64>::new(14, None).unwrap();
        tree.set_many(&[2, 6, 5, 12, 13], &[7.0, 13.0, 11.0, 17.0, 5.0])
            .unwrap();
        assert_eq!(tree.root_value(), 53.0);
        assert_eq!(tree.leaves().iter().sum::<f64>(), 53.0);
        tree.reset(6).unwrap();
        assert_eq!(tree.root_value(), 40.0);
    }
}
