use super::tree::Tree;
use super::{Result, TreeError};
use std::ops::{Bound, RangeBounds};

/// Reduction strategy of a [`QueryTree`]. `combine` must be associative and
/// commutative, and `identity` must leave any value unchanged under `combine`.
pub trait Query<V: Copy> {
    fn identity() -> V;
    fn combine(lhs: V, rhs: V) -> V;
}

/// One side of a batched range query: either a single position shared by
/// every pair, or one position per pair.
#[derive(Debug, Clone, Copy)]
pub enum Positions<'a> {
    Scalar(usize),
    Batch(&'a [usize]),
}

impl Positions<'_> {
    fn len(&self) -> Option<usize> {
        match self {
            Positions::Scalar(_) => None,
            Positions::Batch(positions) => Some(positions.len()),
        }
    }

    fn get(&self, i: usize) -> usize {
        match self {
            Positions::Scalar(position) => *position,
            Positions::Batch(positions) => positions[i],
        }
    }
}

impl From<usize> for Positions<'_> {
    fn from(position: usize) -> Self {
        Positions::Scalar(position)
    }
}

impl<'a> From<&'a [usize]> for Positions<'a> {
    fn from(positions: &'a [usize]) -> Self {
        Positions::Batch(positions)
    }
}

impl<'a> From<&'a Vec<usize>> for Positions<'a> {
    fn from(positions: &'a Vec<usize>) -> Self {
        Positions::Batch(positions)
    }
}

impl<'a, const N: usize> From<&'a [usize; N]> for Positions<'a> {
    fn from(positions: &'a [usize; N]) -> Self {
        Positions::Batch(positions)
    }
}

#[derive(Debug)]
pub struct QueryTree<V, Q: Query<V>>
where
    V: Copy,
{
    tree: Tree<V>,
    capacity: usize,
    _marker: std::marker::PhantomData<Q>,
}

impl<V: Copy, Q: Query<V>> QueryTree<V, Q> {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TreeError::InvalidArgument(
                "capacity must be positive".to_string(),
            ));
        }
        let tree = Tree::new(Q::identity(), capacity);
        tracing::debug!(
            capacity,
            size = tree.size(),
            depth = tree.depth(),
            "allocated reduction tree"
        );
        Ok(Self {
            tree,
            capacity,
            _marker: std::marker::PhantomData,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn size(&self) -> usize {
        self.tree.size()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn root_value(&self) -> V {
        self.tree.value(self.tree.root())
    }

    pub fn leaves(&self) -> &[V] {
        self.tree.leaves(self.capacity)
    }

    pub fn get(&self, index: usize) -> Result<V> {
        self.check_index(index)?;
        Ok(self.tree.value(self.tree.leaf(index)))
    }

    pub(crate) fn tree(&self) -> &Tree<V> {
        &self.tree
    }

    pub fn set(&mut self, index: usize, value: V) -> Result<()> {
        self.check_index(index)?;
        self.update_value(index, value);
        Ok(())
    }

    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.set(index, Q::identity())
    }

    /// Writes `values[k]` to leaf `indices[k]`. When an index repeats, the
    /// later write wins.
    pub fn set_many(&mut self, indices: &[usize], values: &[V]) -> Result<()> {
        if indices.len() != values.len() {
            return Err(TreeError::LengthMismatch {
                expected: indices.len(),
                actual: values.len(),
            });
        }
        for &index in indices {
            self.check_index(index)?;
        }
        if indices.len() > self.size() / self.depth() {
            for (&index, &value) in indices.iter().zip(values) {
                let leaf = self.tree.leaf(index);
                self.tree.set_value(leaf, value);
            }
            self.rebuild();
        } else {
            for (&index, &value) in indices.iter().zip(values) {
                self.update_value(index, value);
            }
        }
        Ok(())
    }

    /// Replaces every leaf at once.
    pub fn set_all(&mut self, values: &[V]) -> Result<()> {
        if values.len() != self.capacity {
            return Err(TreeError::LengthMismatch {
                expected: self.capacity,
                actual: values.len(),
            });
        }
        self.tree.leaves_mut(self.capacity).copy_from_slice(values);
        self.rebuild();
        Ok(())
    }

    /// Reduces the leaves covered by `range`. Open ends default to the first
    /// and one-past-last leaf, so `..` reduces everything.
    pub fn partial_reduce<R: RangeBounds<usize>>(&self, range: R) -> Result<V> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&stop) => stop.saturating_add(1),
            Bound::Excluded(&stop) => stop,
            Bound::Unbounded => self.capacity,
        };
        self.check_range(start, stop)?;
        Ok(self.reduce_unchecked(start, stop))
    }

    /// Reduces many `[start, stop)` ranges. A scalar side is broadcast against
    /// the other; two batches must have equal length. Every pair is validated
    /// before any is reduced.
    pub fn partial_reduce_batch<'a>(
        &self,
        start: impl Into<Positions<'a>>,
        stop: impl Into<Positions<'a>>,
    ) -> Result<Vec<V>> {
        let (start, stop) = (start.into(), stop.into());
        let len = match (start.len(), stop.len()) {
            (None, None) => 1,
            (Some(len), None) | (None, Some(len)) => len,
            (Some(start_len), Some(stop_len)) if start_len == stop_len => start_len,
            (Some(start_len), Some(stop_len)) => {
                return Err(TreeError::LengthMismatch {
                    expected: start_len,
                    actual: stop_len,
                })
            }
        };
        for i in 0..len {
            self.check_range(start.get(i), stop.get(i))?;
        }
        Ok((0..len)
            .map(|i| self.reduce_unchecked(start.get(i), stop.get(i)))
            .collect())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.capacity {
            Ok(())
        } else {
            Err(TreeError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            })
        }
    }

    fn check_range(&self, start: usize, stop: usize) -> Result<()> {
        if start >= stop {
            return Err(TreeError::InvalidRange { start, stop });
        }
        if stop > self.capacity {
            return Err(TreeError::IndexOutOfRange {
                index: stop,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    // assumes start < stop <= capacity
    fn reduce_unchecked(&self, start: usize, stop: usize) -> V {
        let mut left = self.tree.leaf(start);
        let mut right = self.tree.leaf(stop);
        let mut acc_left = Q::identity();
        let mut acc_right = Q::identity();
        while left < right {
            if left & 1 == 1 {
                acc_left = Q::combine(acc_left, self.tree.value(left));
                left += 1;
            }
            if right & 1 == 1 {
                right -= 1;
                acc_right = Q::combine(self.tree.value(right), acc_right);
            }
            left /= 2;
            right /= 2;
        }
        Q::combine(acc_left, acc_right)
    }

    // assumes a valid leaf index was provided
    fn update_value(&mut self, index: usize, value: V) {
        let leaf = self.tree.leaf(index);
        self.tree.set_value(leaf, value);
        self.update_ancestors(leaf);
    }

    fn update_ancestors(&mut self, mut node: usize) {
        while let Some(parent) = self.tree.parent(node) {
            let value = self.children_query(parent);
            self.tree.set_value(parent, value);
            node = parent;
        }
    }

    fn children_query(&self, node: usize) -> V {
        match self.tree.children(node) {
            Some((left, right)) => Q::combine(self.tree.value(left), self.tree.value(right)),
            None => self.tree.value(node),
        }
    }

    fn rebuild(&mut self) {
        tracing::trace!(size = self.size(), "rebuilding reduction tree");
        for node in (self.tree.root()..self.tree.size()).rev() {
            let value = self.children_query(node);
            self.tree.set_value(node, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[derive(Debug)]
    struct IntSum;

    impl Query<i64> for IntSum {
        fn identity() -> i64 {
            0
        }
        fn combine(lhs: i64, rhs: i64) -> i64 {
            lhs + rhs
        }
    }

    fn filled(values: &[i64]) -> QueryTree<i64, IntSum> {
        let mut tree = QueryTree::with_capacity(values.len()).unwrap();
        tree.set_all(values).unwrap();
        tree
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = QueryTree::<i64, IntSum>::with_capacity(0);
        assert!(matches!(result, Err(TreeError::InvalidArgument(_))));
    }

    #[test]
    fn range_forms_default_their_open_ends() {
        let tree = filled(&[13, 7, 11, 17, 19, 5, 3, 23]);
        assert_eq!(tree.partial_reduce(..).unwrap(), 98);
        assert_eq!(tree.partial_reduce(3..).unwrap(), 67);
        assert_eq!(tree.partial_reduce(..2).unwrap(), 20);
        assert_eq!(tree.partial_reduce(2..=3).unwrap(), 28);
    }

    #[test]
    fn every_range_matches_naive_sum() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for capacity in [1, 2, 3, 5, 8, 13, 14, 31] {
            let values: Vec<i64> = (0..capacity).map(|_| rng.gen_range(-50..50)).collect();
            let tree = filled(&values);
            for start in 0..capacity {
                for stop in start + 1..=capacity {
                    let expected: i64 = values[start..stop].iter().sum();
                    assert_eq!(tree.partial_reduce(start..stop).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn empty_and_inverted_ranges_are_rejected() {
        let tree = filled(&[1, 2, 3]);
        let err = tree.partial_reduce(1..1).unwrap_err();
        assert_eq!(err, TreeError::InvalidRange { start: 1, stop: 1 });
        assert_eq!(
            err.to_string(),
            "inconsistent ranges detected from (start, stop) = (1, 1)"
        );
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = tree.partial_reduce(2..1);
        assert!(matches!(inverted, Err(TreeError::InvalidRange { .. })));
    }

    #[test]
    fn stop_past_capacity_is_rejected() {
        let tree = filled(&[1, 2, 3]);
        assert_eq!(
            tree.partial_reduce(0..4),
            Err(TreeError::IndexOutOfRange {
                index: 4,
                capacity: 3
            })
        );
    }

    #[test]
    fn batch_broadcasts_scalars() {
        let tree = filled(&[13, 7, 11, 17, 19, 5, 3, 23]);
        let stops = [1usize, 4, 8];
        assert_eq!(
            tree.partial_reduce_batch(0usize, &stops).unwrap(),
            vec![13, 48, 98]
        );
        let starts: Vec<usize> = vec![0, 5, 7];
        assert_eq!(tree.partial_reduce_batch(&starts, 8usize).unwrap(), vec![98, 31, 23]);
        assert_eq!(tree.partial_reduce_batch(3usize, 8usize).unwrap(), vec![67]);
    }

    #[test]
    fn batch_rejects_mismatched_lengths_and_bad_pairs() {
        let tree = filled(&[1, 2, 3, 4]);
        assert_eq!(
            tree.partial_reduce_batch(&[0usize, 1], &[2usize, 3, 4]),
            Err(TreeError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            tree.partial_reduce_batch(&[0usize, 2], &[2usize, 2]),
            Err(TreeError::InvalidRange { start: 2, stop: 2 })
        );
    }

    #[test]
    fn set_many_paths_agree() {
        // 14 leaves pad to 16 with depth 5, so more than 3 writes trigger a rebuild
        let mut propagated = QueryTree::<i64, IntSum>::with_capacity(14).unwrap();
        propagated.set_many(&[2, 6, 5], &[7, 13, 11]).unwrap();
        propagated.set_many(&[12, 13], &[17, 5]).unwrap();

        let mut rebuilt = QueryTree::<i64, IntSum>::with_capacity(14).unwrap();
        rebuilt
            .set_many(&[2, 6, 5, 12, 13], &[7, 13, 11, 17, 5])
            .unwrap();

        assert_eq!(propagated.root_value(), 53);
        assert_eq!(rebuilt.root_value(), 53);
        assert_eq!(propagated.leaves(), rebuilt.leaves());
        for start in 0..14 {
            assert_eq!(
                propagated.partial_reduce(start..).unwrap(),
                rebuilt.partial_reduce(start..).unwrap()
            );
        }
    }

    #[test]
    fn duplicate_indices_keep_last_write() {
        let mut tree = QueryTree::<i64, IntSum>::with_capacity(4).unwrap();
        tree.set_many(&[1, 1], &[5, 9]).unwrap();
        assert_eq!(tree.get(1).unwrap(), 9);
        assert_eq!(tree.root_value(), 9);
    }

    #[test]
    fn rejected_writes_leave_tree_unchanged() {
        let mut tree = filled(&[1, 2, 3, 4]);
        assert_eq!(
            tree.set_many(&[0, 4], &[10, 10]),
            Err(TreeError::IndexOutOfRange {
                index: 4,
                capacity: 4
            })
        );
        assert_eq!(
            tree.set_many(&[0, 1], &[10]),
            Err(TreeError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            tree.set_all(&[1, 2, 3]),
            Err(TreeError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(tree.set(4, 1).is_err());
        assert_eq!(tree.leaves(), &[1, 2, 3, 4]);
        assert_eq!(tree.root_value(), 10);
    }

    #[test]
    fn reset_restores_identity() {
        let mut tree = filled(&[1, 2, 3]);
        tree.reset(1).unwrap();
        assert_eq!(tree.leaves(), &[1, 0, 3]);
        assert_eq!(tree.root_value(), 4);
    }
}
