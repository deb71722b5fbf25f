use thiserror::Error;

/// Errors reported by tree operations. A call that fails leaves the tree untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("leaf index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("inconsistent ranges detected from (start, stop) = ({start}, {stop})")]
    InvalidRange { start: usize, stop: usize },

    #[error("invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, TreeError>;
