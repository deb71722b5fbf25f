mod sampling;

use super::{PrioritizedReplayConfig, PriorityCircBuffer, ReplayError, Result};
use super::{MaxTree, MinTree, SumTree};
use priority_tree::TreeError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl<V> PriorityCircBuffer<V> {
    pub fn new(config: PrioritizedReplayConfig) -> Result<Self> {
        config.validate()?;
        let capacity = config.capacity;
        // the stratified draws use their own stream so they never shift the tree's
        let rng = match config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            None => ChaCha8Rng::from_entropy(),
        };
        tracing::debug!(
            capacity,
            alpha = config.alpha,
            beta = config.beta,
            stratified = config.stratified,
            "creating prioritized replay buffer"
        );
        Ok(Self {
            priorities: SumTree::new(capacity, config.random_seed)?,
            priorities_min: MinTree::new(capacity)?,
            priorities_max: MaxTree::new(capacity)?,
            values: Vec::with_capacity(capacity),
            config,
            head: 0,
            rng,
        })
    }

    /// Stores `value` with the highest priority seen so far, so it is likely
    /// to be sampled at least once. Returns the slot it was written to.
    pub fn push(&mut self, value: V) -> Result<usize> {
        let priority = self.max_priority().unwrap_or(1.0);
        self.push_with_priority(value, priority)
    }

    pub fn push_with_priority(&mut self, value: V, priority: f64) -> Result<usize> {
        check_priority(priority)?;
        let index = self.head;
        self.write_priority(index, priority)?;
        if index == self.values.len() {
            self.values.push(value);
        } else {
            self.values[index] = value;
        }
        self.head += 1;
        if self.head == self.capacity() {
            tracing::debug!(capacity = self.capacity(), "replay buffer wrapped around");
            self.head = 0;
        }
        Ok(index)
    }

    /// Sets the priority of each stored entry from its latest error as
    /// `(|error| + epsilon) ^ alpha`. Nothing changes if any index is invalid.
    pub fn update_priorities(&mut self, indices: &[usize], errors: &[f64]) -> Result<()> {
        if indices.len() != errors.len() {
            return Err(ReplayError::Tree(TreeError::LengthMismatch {
                expected: indices.len(),
                actual: errors.len(),
            }));
        }
        for &index in indices {
            if index >= self.len() {
                return Err(ReplayError::NotStored {
                    index,
                    len: self.len(),
                });
            }
        }
        let priorities = errors
            .iter()
            .map(|error| (error.abs() + self.config.epsilon).powf(self.config.alpha))
            .collect::<Vec<_>>();
        for &priority in &priorities {
            check_priority(priority)?;
        }
        self.priorities.set_many(indices, &priorities)?;
        self.priorities_min.set_many(indices, &priorities)?;
        self.priorities_max.set_many(indices, &priorities)?;
        Ok(())
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        if beta.is_nan() || beta < 0.0 {
            return Err(ReplayError::InvalidConfig(format!(
                "beta must be non-negative, got {beta}"
            )));
        }
        self.config.beta = beta;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        for index in 0..self.values.len() {
            self.priorities.reset(index)?;
            self.priorities_min.reset(index)?;
            self.priorities_max.reset(index)?;
        }
        self.values.clear();
        self.head = 0;
        Ok(())
    }

    pub fn config(&self) -> &PrioritizedReplayConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    pub fn priority(&self, index: usize) -> Result<f64> {
        if index >= self.len() {
            return Err(ReplayError::NotStored {
                index,
                len: self.len(),
            });
        }
        Ok(self.priorities.get(index)?)
    }

    pub fn total_priority(&self) -> f64 {
        self.priorities.root_value()
    }

    pub fn min_priority(&self) -> Option<f64> {
        Some(self.priorities_min.root_value()).filter(|_| !self.is_empty())
    }

    pub fn max_priority(&self) -> Option<f64> {
        Some(self.priorities_max.root_value()).filter(|_| !self.is_empty())
    }

    fn write_priority(&mut self, index: usize, priority: f64) -> Result<()> {
        self.priorities.set(index, priority)?;
        self.priorities_min.set(index, priority)?;
        self.priorities_max.set(index, priority)?;
        Ok(())
    }
}

// a zero priority would zero the lowest priority that the weights divide by
fn check_priority(priority: f64) -> Result<()> {
    if priority.is_finite() && priority > 0.0 {
        Ok(())
    } else {
        Err(ReplayError::InvalidPriority(priority))
    }
}
