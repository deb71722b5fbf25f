pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait NegativeInfinity {
    fn negative_infinity() -> Self;
}

pub trait Infinity {
    fn infinity() -> Self;
}

macro_rules! impl_float_traits {
    ($($t:ty),*) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    0.0
                }
            }

            impl One for $t {
                fn one() -> Self {
                    1.0
                }
            }

            impl Infinity for $t {
                fn infinity() -> Self {
                    <$t>::INFINITY
                }
            }

            impl NegativeInfinity for $t {
                fn negative_infinity() -> Self {
                    <$t>::NEG_INFINITY
                }
            }
        )*
    };
}

impl_float_traits!(f32, f64);
