//! Fixed-capacity reduction trees: O(log n) point updates and range
//! reductions, plus batched weighted sampling on the sum specialization.

mod error;
mod max_tree;
mod min_tree;
mod priority;
mod query_tree;
mod sum_tree;
mod traits;
mod tree;

pub use error::{Result, TreeError};
pub use max_tree::MaxTree;
pub use min_tree::MinTree;
pub use priority::Priority;
pub use query_tree::{Positions, Query, QueryTree};
pub use sum_tree::SumTree;
pub use traits::{Infinity, NegativeInfinity, One, Zero};
