//! # gwas-kmeans - API documentation
//!
//! gwas-kmeans is a small rust library for k-means clustering of numeric feature vectors (such as
//! GWAS-derived per-sample features), including the automatic choice of the cluster count k.
//!
//! ## Design target
//! Inputs are plain [`Point`]s wrapping a feature vector, instead of any high-level matrix crate such as
//! nalgebra or ndarray. The heavy loops (assignment, centroid update, k-means++ distance updates and the
//! silhouette) are parallelized using rayon, while results stay reproducible for a seeded configuration.
//!
//! ## Algorithm
//! [`KMeansEngine`] runs Lloyd's algorithm: assign every point to its nearest centroid (squared euclidean
//! distance, ties go to the lowest cluster id), move each centroid to the mean of its members, repeat
//! until no point changes its cluster or the iteration limit is reached. Empty clusters keep their centroid.
//!
//! ## Supported centroid initializations
//! - [`KMeansEngine::init_kmeanplusplus`] (default, used by [`KMeansEngine::cluster`])
//! - [`KMeansEngine::init_random_sample`]
//! - [`KMeansEngine::init_precomputed`]
//!
//! ## Choosing k
//! [`OptimalKSelector`] clusters the data once per candidate k, records [`metrics::inertia`] and
//! [`metrics::silhouette`] for each, and reconciles the elbow of the inertia curve with the
//! silhouette maximum.
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use gwas_kmeans::*;
//!
//! fn main() -> Result<()> {
//!     let raw = [0.0, 0.0, 0.0, 1.0, 10.0, 0.0, 10.0, 1.0];
//!     let mut points = Point::from_row_major(&raw, 2)?;
//!
//!     let conf = KMeansConfig::build().seed(42).build();
//!     let state = KMeansEngine::with_k(2)?.cluster(&mut points, &conf)?;
//!
//!     println!("Centroids: {:?}", state.clusters.iter().map(|c| c.centroid().features()).collect::<Vec<_>>());
//!     println!("Error: {}", state.distsum);
//!     assert_eq!(state.clusters.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Example (automatic k, with status event callbacks)
//! ```rust
//! use gwas_kmeans::*;
//!
//! fn main() -> Result<()> {
//!     let raw: Vec<f64> = (0..60).map(|i| (i / 20) as f64 * 50.0 + (i % 20) as f64 * 0.1).collect();
//!     let mut points = Point::from_row_major(&raw, 1)?;
//!
//!     let conf = KMeansConfig::build()
//!         .seed(7)
//!         .iteration_done(&|s, nr, new_distsum|
//!             println!("k={} iteration {} - Error: {:.2} -> {:.2}", s.k, nr, s.distsum, new_distsum))
//!         .build();
//!
//!     let (search, state) = OptimalKSelector::new(2, 5)?.select_and_cluster(&mut points, &conf)?;
//!     println!("optimal k: {} (elbow {}, silhouette {})", search.optimal_k, search.elbow_k, search.silhouette_k);
//!     assert_eq!(state.k, search.optimal_k);
//!     Ok(())
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! A [`KMeansEngine`] only carries k and the iteration limit, so it is cheap to create one per run.
//! [`KMeansEngine::cluster`] tags every given [`Point`] with its cluster id and returns a [`KMeansState`],
//! holding the [`Cluster`]s with their centroids and member copies, the final inertia (`distsum`),
//! the number of iterations and whether the run converged.
//!
//! Randomness, status callbacks and the [`AbortStrategy`] are configured through [`KMeansConfig`].
//! Precondition failures are reported as [`ClusterError`].

#[macro_use] mod helpers;
mod memory;
mod error;
mod distances;
mod point;
mod cluster;
mod api;
mod variants;
mod inits;
mod abort_strategy;
pub mod metrics;
mod selector;

pub use abort_strategy::AbortStrategy;
pub use api::{KMeansState, KMeansConfig, KMeansConfigBuilder, KMeansEngine, InitDoneCallbackFn, IterationDoneCallbackFn,
    DEFAULT_MAX_ITERATIONS, FINAL_RUN_MAX_ITERATIONS};
pub use cluster::Cluster;
pub use distances::{DistanceFunction, EuclideanDistance};
pub use error::{ClusterError, Result};
pub use memory::Primitive;
pub use point::Point;
pub use selector::{elbow_k, reconcile, silhouette_k, KSearchResult, OptimalKSelector, DEFAULT_ELBOW_K, RECONCILE_WINDOW};
