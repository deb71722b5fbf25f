use super::{Query, Zero};
use std::ops::Add;

#[derive(Debug)]
pub struct SumQuery;

impl<V: Copy + Zero + Add<Output = V>> Query<V> for SumQuery {
    fn identity() -> V {
        V::zero()
    }
    fn combine(lhs: V, rhs: V) -> V {
        lhs + rhs
    }
}
