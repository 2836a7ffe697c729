#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use crate::{Cluster, Point, Primitive};
	use rand::prelude::*;
	use rand_distr::Normal;

	/// Isotropic gaussian blobs in 2D, **per_center** points around each center, emitted center by center.
	pub fn gaussian_blobs(centers: &[(f64, f64)], per_center: usize, std_dev: f64, seed: u64) -> Vec<Point<f64>> {
		let mut rnd = StdRng::seed_from_u64(seed);
		let normal = Normal::new(0.0, std_dev).unwrap();
		centers.iter()
			.flat_map(|&(cx, cy)| (0..per_center).map(move |_| (cx, cy)))
			.map(|(cx, cy)| Point::new(vec![cx + normal.sample(&mut rnd), cy + normal.sample(&mut rnd)]).unwrap())
			.collect()
	}

	#[test]
	fn blobs_are_seeded_and_centered() {
		let a = gaussian_blobs(&[(0.0, 0.0), (100.0, -50.0)], 200, 0.5, 3);
		assert_eq!(a, gaussian_blobs(&[(0.0, 0.0), (100.0, -50.0)], 200, 0.5, 3));
		assert_eq!(a.len(), 400);
		let mean = |pts: &[Point<f64>], d: usize| pts.iter().map(|p| p.features()[d]).sum::<f64>() / pts.len() as f64;
		assert!((mean(&a[200..], 0) - 100.0).abs() < 0.2);
		assert!((mean(&a[200..], 1) + 50.0).abs() < 0.2);
		assert!(a[..200].iter().all(|p| p.features()[0].abs() < 5.0));
	}

	/// Assert that the clusters form a partition of **points**: every point appears in exactly one
	/// cluster, and that cluster's id matches the point's membership tag.
	pub fn assert_partition<T: Primitive>(points: &[Point<T>], clusters: &[Cluster<T>]) {
		assert_eq!(clusters.iter().map(Cluster::len).sum::<usize>(), points.len());
		for (idx, cluster) in clusters.iter().enumerate() {
			assert_eq!(cluster.id(), idx);
			for m in cluster.members() {
				assert_eq!(m.cluster_id(), Some(idx));
			}
		}
		for p in points {
			let id = p.cluster_id().expect("point left unassigned");
			assert!(clusters[id].members().iter().any(|m| m.features() == p.features()));
		}
	}
}
