mod config;
mod error;
mod priority_circ_buffer;

pub use config::PrioritizedReplayConfig;
pub use error::{ReplayError, Result};
pub use priority_circ_buffer::{PriorityCircBuffer, SampledBatch};
