use priority_tree::TreeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReplayError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("invalid replay config: {0}")]
    InvalidConfig(String),

    #[error("priority must be finite and positive, got {0}")]
    InvalidPriority(f64),

    #[error("entry {index} has not been stored yet (len {len})")]
    NotStored { index: usize, len: usize },

    #[error("cannot sample from an empty replay buffer")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ReplayError>;
