mod euclideandistance;

pub use euclideandistance::EuclideanDistance;

use crate::memory::Primitive;

/// Distance measure used to compare two equally sized feature slices.
///
/// Implementations return the *squared* distance, which is what the assignment step
/// and the inertia need. Callers wanting the metric distance take the square root.
pub trait DistanceFunction<T: Primitive>: Sync + Send {
    fn distance(&self, a: &[T], b: &[T]) -> T;
}
