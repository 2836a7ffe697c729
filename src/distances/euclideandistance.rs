use crate::distances::DistanceFunction;
use crate::memory::Primitive;

pub struct EuclideanDistance;

impl<T: Primitive> DistanceFunction<T> for EuclideanDistance {
    #[inline(always)]
    fn distance(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter().cloned()
            .zip(b.iter().cloned())
            .map(|(av, bv)| av - bv)            // <a> - <b>
            .map(|v| v * v)                     // <vec_components> ^2
            .sum::<T>()                         // sum(<vec_components>^2)
    }
}

impl EuclideanDistance {
    /// Index and squared distance of the centroid nearest to `sample`.
    /// Scans all centroids in order; on equal distances the first (lowest index) wins.
    pub(crate) fn nearest<'a, T, I>(&self, sample: &[T], centroids: I) -> Option<(usize, T)>
            where T: Primitive, I: IntoIterator<Item = &'a [T]> {
        centroids.into_iter()
            .map(|c| self.distance(sample, c))
            .enumerate()
            .fold(None, |best: Option<(usize, T)>, (idx, dist)| match best {
                Some((_, best_dist)) if !(dist < best_dist) => best,
                _ => Some((idx, dist)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance() {
        let d: f64 = EuclideanDistance.distance(&[0.0, 0.0], &[3.0, 4.0]);
        assert_eq!(d, 25.0);
        let d: f32 = EuclideanDistance.distance(&[1.5f32], &[1.5]);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn nearest_prefers_lowest_index_on_ties() {
        let centroids = vec![vec![-1.0f64, 0.0], vec![1.0, 0.0], vec![-1.0, 0.0]];
        let (idx, dist) = EuclideanDistance.nearest(&[0.0, 0.0], centroids.iter().map(|c| c.as_slice())).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(dist, 1.0);

        let (idx, _) = EuclideanDistance.nearest(&[0.9, 0.0], centroids.iter().map(|c| c.as_slice())).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn nearest_without_centroids() {
        let centroids: Vec<Vec<f64>> = Vec::new();
        assert!(EuclideanDistance.nearest(&[0.0], centroids.iter().map(|c| c.as_slice())).is_none());
    }
}
