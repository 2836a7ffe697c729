use crate::distances::{DistanceFunction, EuclideanDistance};
use crate::error::{ClusterError, Result};
use crate::memory::Primitive;

/// A single observation (or centroid) in feature space.
///
/// The dimensionality is fixed at creation. The cluster membership tag is only ever
/// changed by the assignment step of a clustering run; `None` means "unassigned".
#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Primitive> {
    features: Vec<T>,
    cluster_id: Option<usize>,
}

impl<T: Primitive> Point<T> {
    /// Create a new, unassigned point.
    ///
    /// ## Errors
    /// [`ClusterError::NullArgument`] if **features** is empty.
    pub fn new(features: Vec<T>) -> Result<Self> {
        if features.is_empty() {
            return Err(ClusterError::NullArgument { name: "features" });
        }
        Ok(Self { features, cluster_id: None })
    }

    /// Build one point per row of a row-major sample buffer.
    ///
    /// ## Arguments
    /// - **samples**: Vector of samples [row-major] = [<sample0>,<sample1>,<sample2>,...]
    /// - **sample_dims**: Amount of dimensions each sample has
    pub fn from_row_major(samples: &[T], sample_dims: usize) -> Result<Vec<Self>> {
        if sample_dims == 0 {
            return Err(ClusterError::NullArgument { name: "sample_dims" });
        }
        if samples.len() % sample_dims != 0 {
            return Err(ClusterError::DimensionMismatch {
                expected: sample_dims,
                found: samples.len() % sample_dims,
            });
        }
        samples.chunks_exact(sample_dims)
            .map(|s| Self::new(s.to_vec()))
            .collect()
    }

    pub fn features(&self) -> &[T] { &self.features }
    pub fn dims(&self) -> usize { self.features.len() }
    pub fn cluster_id(&self) -> Option<usize> { self.cluster_id }

    pub(crate) fn set_cluster_id(&mut self, cluster_id: Option<usize>) {
        self.cluster_id = cluster_id;
    }

    /// Replace the whole feature vector. Only used for centroid recalculation.
    pub(crate) fn replace_features(&mut self, features: Vec<T>) {
        debug_assert_eq!(features.len(), self.features.len());
        self.features = features;
    }

    /// Independent, unassigned copy of this point's features (used when seeding centroids).
    pub(crate) fn detached(&self) -> Self {
        Self { features: self.features.clone(), cluster_id: None }
    }

    pub(crate) fn check_dims(&self, other: &Point<T>) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(ClusterError::DimensionMismatch { expected: self.dims(), found: other.dims() });
        }
        Ok(())
    }

    /// Squared euclidean distance to **other**.
    pub fn squared_distance_to(&self, other: &Point<T>) -> Result<T> {
        self.check_dims(other)?;
        Ok(EuclideanDistance.distance(&self.features, &other.features))
    }

    /// Euclidean distance `sqrt(Σ (a_i - b_i)^2)` to **other**.
    ///
    /// ## Errors
    /// [`ClusterError::DimensionMismatch`] if both points differ in dimensionality.
    pub fn distance_to(&self, other: &Point<T>) -> Result<T> {
        self.squared_distance_to(other).map(|d| d.sqrt())
    }
}
