use thiserror::Error;

/// Precondition failures raised by the clustering core.
///
/// None of these are retried internally; they surface synchronously at the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// Requested cluster count is zero, or larger than the amount of points.
    #[error("invalid cluster count: requested {k}, but input has {n_points} points")]
    InvalidK { k: usize, n_points: usize },

    /// There are no points to cluster.
    #[error("empty input: no points to cluster")]
    EmptyInput,

    /// Two points (or a point and a centroid) with differing dimensionality were compared.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A required argument was missing (e.g. an empty feature vector).
    #[error("required argument `{name}` is missing or empty")]
    NullArgument { name: &'static str },

    /// Any other parameter out of its valid range.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, ClusterError>;
