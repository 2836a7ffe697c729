//! Quality measures of a finished clustering.
//!
//! - [`inertia`]: within-cluster sum of squared distances (compactness). Never increases with a growing
//!   k, so it can not select k on its own.
//! - [`silhouette`]: mean over all points of `(b - a) / max(a, b)`, comparing cohesion within the own
//!   cluster (`a`) with the separation to the nearest other cluster (`b`).

use crate::distances::{DistanceFunction, EuclideanDistance};
use crate::memory::*;
use crate::Cluster;
use rayon::prelude::*;

/// Sum over all clusters and all of their members of the squared distance to the cluster's centroid.
///
/// The per-cluster sums are added up in cluster order, so the result does not depend on thread scheduling.
pub fn inertia<T: Primitive>(clusters: &[Cluster<T>]) -> T {
    let per_cluster: Vec<T> = clusters.par_iter()
        .map(|c| c.members().iter()
            .map(|m| EuclideanDistance.distance(m.features(), c.centroid().features()))
            .sum::<T>())
        .collect();
    per_cluster.into_iter().sum()
}

/// Silhouette value of every point, in cluster order and member order within each cluster.
///
/// - `a` is the mean distance to all *other* members of the own cluster, `0` for single-member clusters.
///   A point alone in its cluster therefore scores `1` whenever `b > 0`, so a clustering with k equal to the
///   point count has silhouette `1`.
/// - `b` is the smallest mean distance to the members of any other non-empty cluster.
/// - A point without any other non-empty cluster, or with `max(a, b) == 0`, scores `0`.
///
/// This compares every point with every other point (`O(N² · dims)`); the outer loop runs in parallel.
pub fn silhouette_samples<T: Primitive>(clusters: &[Cluster<T>]) -> Vec<T> {
    let points: Vec<(usize, &[T])> = clusters.iter()
        .enumerate()
        .flat_map(|(ci, c)| c.members().iter().map(move |m| (ci, m.features())))
        .collect();

    points.par_iter()
        .map(|&(own, sample)| {
            // Sum of (metric) distances from sample to the members of each cluster
            let dist_sums: Vec<T> = clusters.iter()
                .map(|c| c.members().iter()
                    .map(|m| EuclideanDistance.distance(sample, m.features()).sqrt())
                    .sum::<T>())
                .collect();

            let own_len = clusters[own].len();
            let a = if own_len > 1 {
                dist_sums[own] / cast::<T, usize>(own_len - 1)
            } else {
                T::zero()
            };
            let b = clusters.iter()
                .zip(dist_sums.iter().cloned())
                .enumerate()
                .filter(|&(ci, (c, _))| ci != own && !c.is_empty())
                .map(|(_, (c, sum))| sum / cast::<T, usize>(c.len()))
                .fold(None, |best: Option<T>, mean| match best {
                    Some(b) if !(mean < b) => Some(b),
                    _ => Some(mean),
                });

            match b {
                Some(b) if a.max(b) > T::zero() => (b - a) / a.max(b),
                _ => T::zero(),
            }
        })
        .collect()
}

/// Mean silhouette value over all points. `0` for a single cluster (or no points at all).
pub fn silhouette<T: Primitive>(clusters: &[Cluster<T>]) -> T {
    if clusters.len() < 2 {
        return T::zero();
    }
    let samples = silhouette_samples(clusters);
    if samples.is_empty() {
        return T::zero();
    }
    let cnt: T = cast(samples.len());
    samples.into_iter().sum::<T>() / cnt
}
