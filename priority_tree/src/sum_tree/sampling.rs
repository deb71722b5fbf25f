use super::{Priority, Result, SumTree};
use crate::TreeError;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

impl<P: Priority> SumTree<P> {
    /// Maps a uniform draw `u` in `[0, 1]` to the leaf whose cumulative weight
    /// interval contains `u * root_value`.
    pub fn inverse_cdf(&self, u: P) -> Result<usize> {
        let total = self.total_for_sampling()?;
        check_unit(u, 0)?;
        Ok(self.descend(u * total))
    }

    /// Batched [`SumTree::inverse_cdf`]. All draws walk the tree together,
    /// one level per pass.
    pub fn inverse_cdf_batch(&self, us: &[P]) -> Result<Vec<usize>> {
        let total = self.total_for_sampling()?;
        for (position, &u) in us.iter().enumerate() {
            check_unit(u, position)?;
        }
        let targets = us.iter().map(|&u| u * total).collect();
        Ok(self.descend_batch(targets))
    }

    fn total_for_sampling(&self) -> Result<P> {
        let total = self.root_value();
        if total > P::zero() {
            Ok(total)
        } else {
            Err(TreeError::InvalidState(
                "cannot sample from a tree without positive total weight".to_string(),
            ))
        }
    }

    fn descend(&self, mut target: P) -> usize {
        let tree = self.tree.tree();
        let mut node = tree.root();
        while let Some((left, right)) = tree.children(node) {
            let left_value = tree.value(left);
            node = if target >= left_value && tree.value(right) > P::zero() {
                target -= left_value;
                right
            } else {
                left
            };
        }
        node - tree.size()
    }

    fn descend_batch(&self, mut targets: Vec<P>) -> Vec<usize> {
        let tree = self.tree.tree();
        let values = tree.nodes();
        let mut nodes = vec![tree.root(); targets.len()];
        for _ in 1..tree.depth() {
            for (node, target) in nodes.iter_mut().zip(targets.iter_mut()) {
                let left = 2 * *node;
                let left_value = values[left];
                // a subtree without mass is never entered, whatever the rounding
                let go_right = *target >= left_value && values[left + 1] > P::zero();
                *node = left + go_right as usize;
                if go_right {
                    *target -= left_value;
                }
            }
        }
        let size = tree.size();
        nodes.into_iter().map(|node| node - size).collect()
    }
}

impl<P: Priority> SumTree<P>
where
    Standard: Distribution<P>,
{
    /// Draws `n` leaf indices with probability proportional to their weight,
    /// using the tree's own generator.
    pub fn sample(&mut self, n: usize) -> Result<Vec<usize>> {
        let total = self.total_for_sampling()?;
        tracing::trace!(n, "sampling from sum tree");
        let rng = &mut self.rng;
        let targets = (0..n).map(|_| rng.gen::<P>() * total).collect();
        Ok(self.descend_batch(targets))
    }

    pub fn sample_with<R>(&self, n: usize, rng: &mut R) -> Result<Vec<usize>>
    where
        R: Rng,
    {
        let total = self.total_for_sampling()?;
        let targets = (0..n).map(|_| rng.gen::<P>() * total).collect();
        Ok(self.descend_batch(targets))
    }

    /// Like [`SumTree::sample`], but the uniform draws are restricted to
    /// `[range_start, range_end)`, a sub-interval of the unit interval.
    pub fn sample_from_range(
        &mut self,
        n: usize,
        range_start: P,
        range_end: P,
    ) -> Result<Vec<usize>> {
        let total = self.total_for_sampling()?;
        if !(range_start >= P::zero() && range_start < range_end && range_end <= P::one()) {
            return Err(TreeError::InvalidArgument(
                "sampling range must be a non-empty sub-interval of [0, 1]".to_string(),
            ));
        }
        let rng = &mut self.rng;
        let targets = (0..n)
            .map(|_| {
                let point = range_start + rng.gen::<P>() * (range_end - range_start);
                point * total
            })
            .collect();
        Ok(self.descend_batch(targets))
    }
}

fn check_unit<P: Priority>(u: P, position: usize) -> Result<()> {
    if u >= P::zero() && u <= P::one() {
        Ok(())
    } else {
        Err(TreeError::InvalidArgument(format!(
            "uniform draw at position {position} lies outside [0, 1]"
        )))
    }
}
