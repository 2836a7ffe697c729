use crate::{memory::*, AbortStrategy, Cluster, ClusterError, Point, Result};
use std::cell::RefCell;
use rand::prelude::*;

/// Iteration limit of a plain clustering run.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Iteration limit used for the single clustering run at the finally selected k.
pub const FINAL_RUN_MAX_ITERATIONS: usize = 200;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, T);

/// This is a structure holding various configuration options for the a k-means calculations, such as
/// the random number generator to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current[`KMeansState`] after the iteration (updated centroids; cluster members are only filled in once the run finished)
    /// - **iteration_id**: Number of the current iteration
    /// - **distsum**: Inertia measured during the iteration's assignment pass (**state** contains the previous one)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The abort-strategy to use for the running calculation
    pub(crate) abort_strategy: AbortStrategy<T>
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_,_,_| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            abort_strategy: AbortStrategy::NoReassignment
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("abort_strategy", &self.abort_strategy)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used in the k-means calculation.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Shortcut for [`KMeansConfigBuilder::random_generator`] with a seeded [`StdRng`].
    pub fn seed(self, seed: u64) -> Self {
        self.random_generator(StdRng::seed_from_u64(seed))
    }
    /// Set the abort-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::NoReassignment`]
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy<T>) -> Self {
        self.config.abort_strategy = abort_strategy; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// State of a running k-means calculation, and its final result, as returned by the API.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested when calculating this k-means result
/// - **distsum**: The total sum of squared distances from all points to their respective centroids (inertia)
/// - **clusters**: The k clusters, in id order, each holding its centroid and its members
/// - **iterations**: Amount of assignment passes that were done
/// - **converged**: Whether the last pass did not move any point into another cluster
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub distsum: T,
    pub clusters: Vec<Cluster<T>>,
    pub iterations: usize,
    pub converged: bool,
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(centroids: Vec<Point<T>>) -> Self {
        Self {
            k: centroids.len(),
            distsum: T::infinity(),
            clusters: centroids.into_iter().enumerate().map(|(id, c)| Cluster::new(id, c)).collect(),
            iterations: 0,
            converged: false,
        }
    }

    /// Amount of points in each cluster, in cluster id order.
    pub fn centroid_frequency(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }

    pub fn into_clusters(self) -> Vec<Cluster<T>> {
        self.clusters
    }
}


/// Entrypoint for a single clustering run with a fixed k.
///
/// The engine itself is immutable, the points handed to [`KMeansEngine::cluster`] get their cluster
/// membership updated, and the resulting clusters are returned in a [`KMeansState`].
///
/// ## Supported initialization methods
/// - K-Mean++ [`KMeansEngine::init_kmeanplusplus`] (default)
/// - Random-Sample [`KMeansEngine::init_random_sample`]
/// - Precomputed [`KMeansEngine::init_precomputed`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KMeansEngine {
    k: usize,
    max_iterations: usize,
}
impl KMeansEngine {
    /// Create a new engine.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for (at least 1)
    /// - **max_iterations**: Limit the maximum amount of iterations (at least 1)
    pub fn new(k: usize, max_iterations: usize) -> Result<Self> {
        if k == 0 {
            return Err(ClusterError::InvalidK { k, n_points: 0 });
        }
        if max_iterations == 0 {
            return Err(ClusterError::InvalidParameter {
                name: "max_iterations",
                message: "must be a positive integer".to_string(),
            });
        }
        Ok(Self { k, max_iterations })
    }

    /// Engine with [`DEFAULT_MAX_ITERATIONS`].
    pub fn with_k(k: usize) -> Result<Self> {
        Self::new(k, DEFAULT_MAX_ITERATIONS)
    }

    pub fn k(&self) -> usize { self.k }
    pub fn max_iterations(&self) -> usize { self.max_iterations }

    /// Check that **points** can be clustered into k clusters: non-empty, uniform dimensionality
    /// and at least k points. Returns the dimensionality.
    pub(crate) fn validate<T: Primitive>(&self, points: &[Point<T>]) -> Result<usize> {
        let first = points.first().ok_or(ClusterError::EmptyInput)?;
        if let Some(p) = points.iter().find(|p| p.dims() != first.dims()) {
            return Err(ClusterError::DimensionMismatch { expected: first.dims(), found: p.dims() });
        }
        if self.k > points.len() {
            return Err(ClusterError::InvalidK { k: self.k, n_points: points.len() });
        }
        Ok(first.dims())
    }

    /// Normal k-means (Lloyd) clustering, seeded with K-Mean++.
    ///
    /// ## Arguments
    /// - **points**: Points to cluster, their cluster membership is updated in place
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result).
    ///
    /// ## Errors
    /// [`ClusterError::EmptyInput`] for an empty point list, [`ClusterError::InvalidK`] if k exceeds the
    /// amount of points, [`ClusterError::DimensionMismatch`] if the points differ in dimensionality.
    ///
    /// ## Example
    /// ```rust
    /// use gwas_kmeans::*;
    ///
    /// let mut points = Point::from_row_major(&[0.0f64, 0.0, 0.0, 1.0, 10.0, 0.0, 10.0, 1.0], 2).unwrap();
    /// let engine = KMeansEngine::with_k(2).unwrap();
    /// let result = engine.cluster(&mut points, &KMeansConfig::build().seed(7).build()).unwrap();
    ///
    /// assert_eq!(result.clusters.len(), 2);
    /// assert_eq!(result.centroid_frequency().iter().sum::<usize>(), 4);
    /// println!("Inertia: {}", result.distsum);
    /// ```
    pub fn cluster<T: Primitive>(&self, points: &mut [Point<T>], config: &KMeansConfig<'_, T>) -> Result<KMeansState<T>> {
        self.cluster_with(points, KMeansEngine::init_kmeanplusplus, config)
    }

    /// Same as [`KMeansEngine::cluster`], but with a custom initialization method.
    ///
    /// ## Arguments
    /// - **points**: Points to cluster, their cluster membership is updated in place
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    pub fn cluster_with<T: Primitive, F>(&self, points: &mut [Point<T>], init: F, config: &KMeansConfig<'_, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeansEngine, &[Point<T>], &KMeansConfig<'c, T>) -> Result<Vec<Point<T>>> {
        crate::variants::Lloyd::calculate(self, points, init, config)
    }

    /// K-Means++ initialization method
    ///
    /// ## Description
    /// This initialization method starts by selecting one point uniformly at random as first centroid.
    /// Proceeding from there, each following centroid is drawn from the not yet chosen points, with a
    /// probability proportional to the squared distance to their nearest already chosen centroid.
    ///
    /// Every initialization method returns exactly k centroids, which are independent copies
    /// (never references) of the points they were taken from.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to [`KMeansEngine::cluster_with`].
    pub fn init_kmeanplusplus<T: Primitive>(engine: &KMeansEngine, points: &[Point<T>], config: &KMeansConfig<'_, T>) -> Result<Vec<Point<T>>> {
        crate::inits::kmeanplusplus::calculate(engine, points, config)
    }

    /// Random sample initialization method (a.k.a. Forgy)
    ///
    /// ## Description
    /// This initialization method randomly selects k distinct points as initial centroids.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to [`KMeansEngine::cluster_with`].
    pub fn init_random_sample<T: Primitive>(engine: &KMeansEngine, points: &[Point<T>], config: &KMeansConfig<'_, T>) -> Result<Vec<Point<T>>> {
        crate::inits::randomsample::calculate(engine, points, config)
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Uses the given centroids as initial centroids. Their amount has to match k.
    pub fn init_precomputed<T: Primitive>(centroids: Vec<Point<T>>)
                -> impl for<'c> FnOnce(&KMeansEngine, &[Point<T>], &KMeansConfig<'c, T>) -> Result<Vec<Point<T>>> {
        move |engine, points, _config| {
            crate::inits::precomputed::calculate(engine, points, centroids)
        }
    }
}
