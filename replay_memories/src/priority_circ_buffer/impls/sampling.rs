use super::{PriorityCircBuffer, ReplayError, Result};
use crate::SampledBatch;
use rand::Rng;

impl<V> PriorityCircBuffer<V> {
    /// Draws `batch_len` entries proportionally to their priority. Each
    /// weight is `(p_i / p_min) ^ -beta`, which is at most 1.
    pub fn sample_batch(&mut self, batch_len: usize) -> Result<SampledBatch<'_, V>> {
        if self.is_empty() {
            return Err(ReplayError::Empty);
        }
        let indices = if self.config.stratified {
            self.stratified_indices(batch_len)?
        } else {
            self.priorities.sample(batch_len)?
        };

        let min_priority = self.priorities_min.root_value();
        let beta = self.config.beta;
        let mut weights = Vec::with_capacity(indices.len());
        for &index in &indices {
            let priority = self.priorities.get(index)?;
            weights.push((priority / min_priority).powf(-beta));
        }
        let values = indices.iter().map(|&index| &self.values[index]).collect();
        tracing::trace!(batch_len, "sampled replay batch");
        Ok(SampledBatch {
            indices,
            weights,
            values,
        })
    }

    // one uniform draw inside each of batch_len equal slices of [0, 1)
    fn stratified_indices(&mut self, batch_len: usize) -> Result<Vec<usize>> {
        let segment = 1.0 / batch_len as f64;
        let rng = &mut self.rng;
        let uniforms: Vec<f64> = (0..batch_len)
            .map(|k| ((k as f64 + rng.gen::<f64>()) * segment).min(1.0))
            .collect();
        Ok(self.priorities.inverse_cdf_batch(&uniforms)?)
    }
}
