use super::{ReplayError, Result};
use serde::{Deserialize, Serialize};

/// Settings of a [`PriorityCircBuffer`](crate::PriorityCircBuffer). Only
/// `capacity` is required when deserializing; every other field falls back to
/// its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedReplayConfig {
    /// Number of entries kept before the oldest is overwritten.
    pub capacity: usize,
    /// Priority exponent. 0 samples uniformly, 1 fully by priority.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Importance-weight exponent. 0 disables the correction.
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Added to every error magnitude so no entry loses all priority.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Draw one sample from each of `n` equal slices of the priority mass.
    #[serde(default)]
    pub stratified: bool,
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_alpha() -> f64 {
    0.6
}

fn default_beta() -> f64 {
    0.4
}

fn default_epsilon() -> f64 {
    1e-4
}

impl PrioritizedReplayConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            alpha: default_alpha(),
            beta: default_beta(),
            epsilon: default_epsilon(),
            stratified: false,
            random_seed: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_stratified(mut self, stratified: bool) -> Self {
        self.stratified = stratified;
        self
    }

    pub fn with_random_seed(mut self, random_seed: u64) -> Self {
        self.random_seed = Some(random_seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ReplayError::InvalidConfig(
                "capacity must be positive".to_string(),
            ));
        }
        if self.alpha.is_nan() || self.alpha < 0.0 {
            return Err(ReplayError::InvalidConfig(format!(
                "alpha must be non-negative, got {}",
                self.alpha
            )));
        }
        if self.beta.is_nan() || self.beta < 0.0 {
            return Err(ReplayError::InvalidConfig(format!(
                "beta must be non-negative, got {}",
                self.beta
            )));
        }
        if self.epsilon.is_nan() || self.epsilon <= 0.0 {
            return Err(ReplayError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
