use num::{Float, NumCast, Zero};
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{AddAssign, SubAssign},
};

pub trait Primitive: AddAssign + SubAssign + Sum + Zero + Float + NumCast
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static {}
impl Primitive for f32 {}
impl Primitive for f64 {}

/// Convert a value into the calculation's primitive type (rounding where necessary).
#[inline(always)]
pub(crate) fn cast<T: Primitive, V: NumCast>(v: V) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
