use crate::distances::{DistanceFunction, EuclideanDistance};
use crate::memory::*;
use crate::{KMeansConfig, KMeansEngine, Point, Result};
use log::warn;
use rand::prelude::*;
use rayon::prelude::*;

/// Draw the next centroid from all not yet chosen samples, weighted by **weights**.
///
/// Cumulative-sum sampling against one uniform draw. If rounding keeps the cumulative sum below the
/// threshold (or all weights are zero), the last eligible sample is taken.
fn draw_weighted<T: Primitive>(weights: &[T], chosen: &[bool], rnd: &mut dyn RngCore) -> Option<usize> {
    let eligible = || weights.iter().cloned().zip(chosen.iter().cloned())
        .enumerate()
        .filter(|(_, (_, c))| !c)
        .map(|(idx, (w, _))| (idx, w));

    let total: T = eligible().map(|(_, w)| w).sum();
    let threshold = cast::<T, f64>(rnd.gen::<f64>()) * total;

    let mut cumulative = T::zero();
    let mut last_eligible = None;
    for (idx, w) in eligible() {
        cumulative += w;
        if cumulative > threshold {
            return Some(idx);
        }
        last_eligible = Some(idx);
    }
    if last_eligible.is_some() && total > T::zero() {
        warn!("k-means++ cumulative weight {} never passed threshold {}, using last eligible sample", cumulative, threshold);
    }
    last_eligible
}

#[inline(always)]
pub fn calculate<T: Primitive>(engine: &KMeansEngine, points: &[Point<T>], config: &KMeansConfig<'_, T>) -> Result<Vec<Point<T>>> {
    engine.validate(points)?;
    let mut rnd = config.rnd.borrow_mut();

    let mut chosen = vec![false; points.len()];
    let mut centroids = Vec::with_capacity(engine.k());
    { // Randomly select first centroid
        let first_idx = rnd.gen_range(0..points.len());
        chosen[first_idx] = true;
        centroids.push(points[first_idx].detached());
    }

    // Squared distance of each sample to its nearest chosen centroid
    let mut min_distances = vec![T::infinity(); points.len()];
    while centroids.len() < engine.k() { // For each following centroid...
        if let Some(newest) = centroids.last() {
            min_distances.par_iter_mut()
                .zip(points.par_iter())
                .for_each(|(d, p)| {
                    let nd = EuclideanDistance.distance(p.features(), newest.features());
                    if nd < *d {
                        *d = nd;
                    }
                });
        }

        // validate() guarantees k <= sample count, so there is always an eligible sample left
        let Some(sampled_idx) = draw_weighted(&min_distances, &chosen, &mut *rnd) else { break };
        chosen[sampled_idx] = true;
        centroids.push(points[sampled_idx].detached());
    }
    Ok(centroids)
}
