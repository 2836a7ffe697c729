use crate::{ClusterError, KMeansEngine, Point, Result, memory::*};

#[inline(always)]
pub fn calculate<T: Primitive>(engine: &KMeansEngine, points: &[Point<T>], computed: Vec<Point<T>>) -> Result<Vec<Point<T>>> {
    let sample_dims = engine.validate(points)?;
    if computed.is_empty() {
        return Err(ClusterError::NullArgument { name: "centroids" });
    }
    if computed.len() != engine.k() {
        return Err(ClusterError::InvalidParameter {
            name: "centroids",
            message: format!("initialized with {} centroids, but k is {}", computed.len(), engine.k()),
        });
    }
    if let Some(c) = computed.iter().find(|c| c.dims() != sample_dims) {
        return Err(ClusterError::DimensionMismatch { expected: sample_dims, found: c.dims() });
    }
    Ok(computed.iter().map(Point::detached).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KMeansConfig;

    #[test]
    fn train_with_precomputed_centroids() {
        let mut points = Point::from_row_major(&[0.0f64, 1.0, 10.0, 11.0, 20.0, 21.0], 1).unwrap();
        let centroids = Point::from_row_major(&[0.0, 20.0], 1).unwrap();

        let engine = KMeansEngine::new(2, 200).unwrap();
        let result = engine.cluster_with(&mut points, KMeansEngine::init_precomputed(centroids), &KMeansConfig::default()).unwrap();

        assert_approx_eq!(result.clusters[0].centroid().features()[0], 11.0 / 3.0, 1e-12);
        assert_approx_eq!(result.clusters[1].centroid().features()[0], 52.0 / 3.0, 1e-12);
        // 10.0 is equally far from both initial centroids -> lowest cluster id wins
        let assignments: Vec<_> = points.iter().map(|p| p.cluster_id().unwrap()).collect();
        assert_eq!(assignments, vec![0, 0, 0, 1, 1, 1]);
        assert!(result.converged);
    }

    #[test]
    fn precomputed_centroid_validation() {
        let points = Point::from_row_major(&[0.0f64, 1.0, 10.0, 11.0], 2).unwrap();
        let engine = KMeansEngine::with_k(2).unwrap();

        assert_eq!(calculate(&engine, &points, vec![]), Err(ClusterError::NullArgument { name: "centroids" }));

        let one = Point::from_row_major(&[0.0, 0.0], 2).unwrap();
        assert!(matches!(calculate(&engine, &points, one), Err(ClusterError::InvalidParameter { .. })));

        let wrong_dims = Point::from_row_major(&[0.0, 0.0, 0.0], 1).unwrap().into_iter().take(2).collect();
        assert_eq!(calculate(&engine, &points, wrong_dims), Err(ClusterError::DimensionMismatch { expected: 2, found: 1 }));
    }
}
