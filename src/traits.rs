use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for numeric values accepted by the special functions.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point arguments (`f32`, `f64`).
///
/// Required by everything that needs `ln`, `exp`, `sqrt`, or an epsilon.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
