use crate::distances::EuclideanDistance;
use crate::{metrics, ClusterError, Cluster, KMeansConfig, KMeansEngine, KMeansState, Point, Result, memory::*};
use log::{debug, info};
use rayon::prelude::*;

/// Outcome of one assignment pass, accumulated per rayon worker and merged afterwards.
/// Buckets hold point indices in input order, independent of the work splitting.
struct AssignmentPass<T: Primitive> {
	buckets: Vec<Vec<usize>>,
	reassigned: bool,
	distsum: T,
}
impl<T: Primitive> AssignmentPass<T> {
	fn empty(k: usize) -> Self {
		Self { buckets: vec![Vec::new(); k], reassigned: false, distsum: T::zero() }
	}

	fn merge(mut self, other: Self) -> Self {
		self.buckets.iter_mut()
			.zip(other.buckets)
			.for_each(|(b, ob)| b.extend(ob));
		self.reassigned |= other.reassigned;
		self.distsum += other.distsum;
		self
	}
}

pub(crate) struct Lloyd;
impl Lloyd {
	/// Assign every point to its nearest centroid, updating its membership tag in place.
	fn update_cluster_assignments<T: Primitive>(points: &mut [Point<T>], clusters: &[Cluster<T>]) -> AssignmentPass<T> {
		let k = clusters.len();
		points.par_iter_mut()
			.enumerate()
			.fold(|| AssignmentPass::empty(k), |mut pass, (idx, point)| {
				let nearest = EuclideanDistance.nearest(point.features(), clusters.iter().map(|c| c.centroid().features()));
				if let Some((centroid_id, dist)) = nearest {
					if point.cluster_id() != Some(centroid_id) {
						pass.reassigned = true;
					}
					point.set_cluster_id(Some(centroid_id));
					pass.distsum += dist;
					pass.buckets[centroid_id].push(idx);
				}
				pass
			})
			.reduce(|| AssignmentPass::empty(k), AssignmentPass::merge)
	}

	#[inline(always)] pub fn calculate<T, F>(engine: &KMeansEngine, points: &mut [Point<T>], init: F, config: &KMeansConfig<'_, T>) -> Result<KMeansState<T>>
				where T: Primitive, for<'c> F: FnOnce(&KMeansEngine, &[Point<T>], &KMeansConfig<'c, T>) -> Result<Vec<Point<T>>> {
		let sample_dims = engine.validate(points)?;

		let centroids = init(engine, points, config)?;
		if centroids.len() != engine.k() {
			return Err(ClusterError::InvalidParameter {
				name: "init",
				message: format!("produced {} centroids for k = {}", centroids.len(), engine.k()),
			});
		}
		if let Some(c) = centroids.iter().find(|c| c.dims() != sample_dims) {
			return Err(ClusterError::DimensionMismatch { expected: sample_dims, found: c.dims() });
		}

		// Every run starts from unassigned points, so the first pass always counts as a change
		points.par_iter_mut().for_each(|p| p.set_cluster_id(None));

		// Initialize clusters and notify subscriber
		let mut state = KMeansState::new(centroids);
		(config.init_done)(&state);
		let mut abort_strategy = config.abort_strategy.create_logic();

		// Member indices of the latest pass, the clusters only receive copies once the run is over
		let mut buckets = vec![Vec::new(); engine.k()];
		for i in 1..=engine.max_iterations() {
			let pass = Self::update_cluster_assignments(points, &state.clusters);
			let samples: &[Point<T>] = &*points;
			state.clusters.par_iter_mut()
				.zip(pass.buckets.par_iter())
				.for_each(|(c, members)| c.update_centroid_from(members.iter().map(|&idx| &samples[idx])));
			state.iterations = i;

			// Notify subscriber about finished iteration
			(config.iteration_done)(&state, i, pass.distsum);
			debug!("k={} iteration {}: distsum {:e}, reassigned: {}", engine.k(), i, pass.distsum, pass.reassigned);

			state.converged = !pass.reassigned;
			let proceed = abort_strategy.next(pass.reassigned, pass.distsum);
			state.distsum = pass.distsum;
			buckets = pass.buckets;
			if !proceed {
				break;
			}
		}

		let samples: &[Point<T>] = &*points;
		state.clusters.par_iter_mut()
			.zip(buckets.into_par_iter())
			.for_each(|(c, members)| c.set_members(members.into_iter().map(|idx| samples[idx].clone()).collect()));

		state.distsum = metrics::inertia(&state.clusters);
		if state.converged {
			info!("k={} converged after {} iterations, inertia {:e}", engine.k(), state.iterations, state.distsum);
		} else {
			info!("k={} stopped after {} iterations without converging, inertia {:e}", engine.k(), state.iterations, state.distsum);
		}
		Ok(state)
	}
}
