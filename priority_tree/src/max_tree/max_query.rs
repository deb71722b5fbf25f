use super::{NegativeInfinity, Query};

#[derive(Debug)]
pub struct MaxQuery;

impl<V: Copy + NegativeInfinity + PartialOrd> Query<V> for MaxQuery {
    fn identity() -> V {
        V::negative_infinity()
    }
    fn combine(lhs: V, rhs: V) -> V {
        if lhs < rhs {
            rhs
        } else {
            lhs
        }
    }
}
