use super::{One, Zero};
use std::ops::{Add, Mul, Sub, SubAssign};

pub trait Priority:
    Zero
    + One
    + Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
{
}
impl<P> Priority for P where
    P: Zero
        + One
        + Copy
        + PartialOrd
        + Add<Output = Self>
        + Sub<Output = Self>
        + SubAssign
        + Mul<Output = Self>
{
}
