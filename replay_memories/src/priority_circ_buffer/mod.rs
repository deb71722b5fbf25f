mod impls;

use super::{PrioritizedReplayConfig, ReplayError, Result};
use priority_tree::{MaxTree, MinTree, SumTree};
use rand_chacha::ChaCha8Rng;

/// Fixed-size ring of values, each carrying a sampling priority. Once full,
/// every push overwrites the oldest entry.
pub struct PriorityCircBuffer<V> {
    priorities: SumTree<f64>,
    priorities_min: MinTree<f64>,
    priorities_max: MaxTree<f64>,
    values: Vec<V>,
    config: PrioritizedReplayConfig,
    head: usize,
    rng: ChaCha8Rng,
}

/// Entries drawn by [`PriorityCircBuffer::sample_batch`], with importance
/// weights normalized so the lowest-priority entry weighs 1.
#[derive(Debug)]
pub struct SampledBatch<'a, V> {
    pub indices: Vec<usize>,
    pub weights: Vec<f64>,
    pub values: Vec<&'a V>,
}
