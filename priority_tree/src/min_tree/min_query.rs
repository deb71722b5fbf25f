use super::{Infinity, Query};

#[derive(Debug)]
pub struct MinQuery;

impl<V: Copy + Infinity + PartialOrd> Query<V> for MinQuery {
    fn identity() -> V {
        V::infinity()
    }
    fn combine(lhs: V, rhs: V) -> V {
        if rhs < lhs {
            rhs
        } else {
            lhs
        }
    }
}
