use crate::memory::*;
use crate::{metrics, ClusterError, KMeansConfig, KMeansEngine, KMeansState, Point, Result, DEFAULT_MAX_ITERATIONS, FINAL_RUN_MAX_ITERATIONS};
use log::info;
use std::collections::BTreeMap;

/// Elbow k used when no interior k of the sweep shows a positive inertia-decrease ratio.
pub const DEFAULT_ELBOW_K: usize = 2;
/// Maximum distance between the elbow k and the silhouette k for both to count as agreeing.
pub const RECONCILE_WINDOW: usize = 2;

/// Outcome of a k sweep.
///
/// ## Fields
/// - **optimal_k**: The k chosen by reconciling both heuristics
/// - **elbow_k**: The k at the sharpest flattening of the inertia curve
/// - **silhouette_k**: The k with the highest silhouette score
/// - **inertia_by_k** / **silhouette_by_k**: The per-k metrics the decision was based on
#[derive(Clone, Debug, PartialEq)]
pub struct KSearchResult<T: Primitive> {
    pub optimal_k: usize,
    pub elbow_k: usize,
    pub silhouette_k: usize,
    pub inertia_by_k: BTreeMap<usize, T>,
    pub silhouette_by_k: BTreeMap<usize, T>,
}

/// Runs one full clustering per k in `min_k..=max_k` and picks the k both quality heuristics
/// can agree on.
///
/// The sweep is sequential in ascending k. A failing k (e.g. more clusters than points) aborts
/// the whole sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptimalKSelector {
    min_k: usize,
    max_k: usize,
    max_iterations: usize,
}

impl OptimalKSelector {
    /// ## Errors
    /// [`ClusterError::InvalidK`] if **min_k** is 0, [`ClusterError::InvalidParameter`] if **max_k** < **min_k**.
    pub fn new(min_k: usize, max_k: usize) -> Result<Self> {
        if min_k == 0 {
            return Err(ClusterError::InvalidK { k: min_k, n_points: 0 });
        }
        if max_k < min_k {
            return Err(ClusterError::InvalidParameter {
                name: "max_k",
                message: format!("max_k ({}) is smaller than min_k ({})", max_k, min_k),
            });
        }
        Ok(Self { min_k, max_k, max_iterations: DEFAULT_MAX_ITERATIONS })
    }

    /// Iteration limit of every clustering in the sweep.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn min_k(&self) -> usize { self.min_k }
    pub fn max_k(&self) -> usize { self.max_k }

    /// Sweep all candidate k, record inertia and silhouette of each clustering, and choose k.
    pub fn select<T: Primitive>(&self, points: &mut [Point<T>], config: &KMeansConfig<'_, T>) -> Result<KSearchResult<T>> {
        let mut inertia_by_k = BTreeMap::new();
        let mut silhouette_by_k = BTreeMap::new();

        for k in self.min_k..=self.max_k {
            let state = KMeansEngine::new(k, self.max_iterations)?.cluster(points, config)?;
            let silhouette = metrics::silhouette(&state.clusters);
            info!("k={}: inertia {:e}, silhouette {:.4}", k, state.distsum, silhouette);
            inertia_by_k.insert(k, state.distsum);
            silhouette_by_k.insert(k, silhouette);
        }

        let elbow_k = elbow_k(&inertia_by_k);
        // the sweep covers at least one k, so there always is a best silhouette
        let silhouette_k = silhouette_k(&silhouette_by_k).unwrap_or(self.min_k);
        let optimal_k = reconcile(silhouette_k, elbow_k);
        info!("elbow k = {}, silhouette k = {} -> optimal k = {}", elbow_k, silhouette_k, optimal_k);

        Ok(KSearchResult { optimal_k, elbow_k, silhouette_k, inertia_by_k, silhouette_by_k })
    }

    /// [`OptimalKSelector::select`], followed by one clustering at the chosen k with
    /// [`FINAL_RUN_MAX_ITERATIONS`]. The points end up tagged with that final clustering.
    pub fn select_and_cluster<T: Primitive>(&self, points: &mut [Point<T>], config: &KMeansConfig<'_, T>) -> Result<(KSearchResult<T>, KMeansState<T>)> {
        let search = self.select(points, config)?;
        let state = KMeansEngine::new(search.optimal_k, FINAL_RUN_MAX_ITERATIONS)?.cluster(points, config)?;
        Ok((search, state))
    }
}

/// Elbow of the inertia curve.
///
/// For every interior k (in ascending order), `ratio = (I[k-1] - I[k]) / (I[k] - I[k+1])` is computed where
/// the denominator is non-zero. The k with the largest ratio wins; [`DEFAULT_ELBOW_K`] if no ratio exceeds 0.
pub fn elbow_k<T: Primitive>(inertia_by_k: &BTreeMap<usize, T>) -> usize {
    let curve: Vec<(usize, T)> = inertia_by_k.iter().map(|(&k, &i)| (k, i)).collect();

    let mut best_k = DEFAULT_ELBOW_K;
    let mut best_ratio = T::zero();
    for w in curve.windows(3) {
        let (prev, (k, cur), next) = (w[0].1, w[1], w[2].1);
        let prev_diff = prev - cur;
        let next_diff = cur - next;
        if next_diff != T::zero() {
            let ratio = prev_diff / next_diff;
            if ratio > best_ratio {
                best_ratio = ratio;
                best_k = k;
            }
        }
    }
    best_k
}

/// The k with the strictly highest silhouette score; on exact ties the smallest k is kept.
pub fn silhouette_k<T: Primitive>(silhouette_by_k: &BTreeMap<usize, T>) -> Option<usize> {
    silhouette_by_k.iter()
        .fold(None, |best: Option<(usize, T)>, (&k, &score)| match best {
            Some((_, best_score)) if !(score > best_score) => best,
            _ => Some((k, score)),
        })
        .map(|(k, _)| k)
}

/// Prefer the smaller k when both heuristics lie within [`RECONCILE_WINDOW`] of each other,
/// otherwise trust the silhouette.
pub fn reconcile(silhouette_k: usize, elbow_k: usize) -> usize {
    if silhouette_k.abs_diff(elbow_k) <= RECONCILE_WINDOW {
        silhouette_k.min(elbow_k)
    } else {
        silhouette_k
    }
}
