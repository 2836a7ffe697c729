use crate::error::Result;
use crate::memory::*;
use crate::point::Point;

/// One cluster of a clustering run: a stable id, its centroid and the points assigned
/// to it during the most recent iteration.
#[derive(Clone, Debug)]
pub struct Cluster<T: Primitive> {
    id: usize,
    centroid: Point<T>,
    members: Vec<Point<T>>,
}

impl<T: Primitive> Cluster<T> {
    pub fn new(id: usize, centroid: Point<T>) -> Self {
        Self { id, centroid, members: Vec::new() }
    }

    pub fn id(&self) -> usize { self.id }
    pub fn centroid(&self) -> &Point<T> { &self.centroid }
    pub fn members(&self) -> &[Point<T>] { &self.members }
    pub fn len(&self) -> usize { self.members.len() }
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Add a single member.
    ///
    /// ## Errors
    /// [`crate::ClusterError::DimensionMismatch`] if the point does not match the centroid's dimensionality.
    pub fn add_member(&mut self, point: Point<T>) -> Result<()> {
        self.centroid.check_dims(&point)?;
        self.members.push(point);
        Ok(())
    }

    pub fn clear_members(&mut self) {
        self.members.clear();
    }

    /// Members are produced by the assignment step, which already validated dimensionality.
    pub(crate) fn set_members(&mut self, members: Vec<Point<T>>) {
        self.members = members;
    }

    pub fn into_members(self) -> Vec<Point<T>> {
        self.members
    }

    /// Recompute the centroid as the per-dimension mean over all members.
    ///
    /// A cluster without members keeps its previous centroid.
    pub fn update_centroid(&mut self) {
        if let Some(mean) = mean_of(self.centroid.dims(), self.members.iter()) {
            self.centroid.replace_features(mean);
        }
    }

    /// Same as [`Cluster::update_centroid`], for members that are not stored in the cluster (yet).
    pub(crate) fn update_centroid_from<'p>(&mut self, members: impl Iterator<Item = &'p Point<T>>) {
        if let Some(mean) = mean_of(self.centroid.dims(), members) {
            self.centroid.replace_features(mean);
        }
    }
}

/// Per-dimension mean, `None` without any point.
fn mean_of<'p, T: Primitive>(dims: usize, points: impl Iterator<Item = &'p Point<T>>) -> Option<Vec<T>> {
    let mut sums = vec![T::zero(); dims];
    let mut cnt = 0usize;
    for p in points {
        sums.iter_mut()
            .zip(p.features().iter().cloned())
            .for_each(|(s, v)| *s += v);
        cnt += 1;
    }
    if cnt == 0 {
        return None;
    }
    let cnt: T = cast(cnt);
    Some(sums.into_iter().map(|s| s / cnt).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClusterError;

    fn p(features: &[f64]) -> Point<f64> {
        Point::new(features.to_vec()).unwrap()
    }

    #[test]
    fn centroid_is_member_mean() {
        let mut cluster = Cluster::new(0, p(&[100.0, 100.0]));
        cluster.add_member(p(&[0.0, 0.0])).unwrap();
        cluster.add_member(p(&[2.0, 1.0])).unwrap();
        cluster.add_member(p(&[4.0, 5.0])).unwrap();
        cluster.update_centroid();
        assert_approx_eq!(cluster.centroid().features()[0], 2.0);
        assert_approx_eq!(cluster.centroid().features()[1], 2.0);
    }

    #[test]
    fn centroid_update_is_idempotent() {
        let mut cluster = Cluster::new(0, p(&[0.0]));
        [0.1, 0.7, 1.3, 9.9].iter().for_each(|v| cluster.add_member(p(&[*v])).unwrap());
        cluster.update_centroid();
        let first = cluster.centroid().clone();
        cluster.update_centroid();
        assert_eq!(cluster.centroid(), &first);
    }

    #[test]
    fn empty_cluster_keeps_centroid() {
        let mut cluster = Cluster::new(3, p(&[1.5, -2.5]));
        cluster.add_member(p(&[1.0, 1.0])).unwrap();
        cluster.clear_members();
        cluster.update_centroid();
        assert_eq!(cluster.centroid().features(), &[1.5, -2.5]);
        assert!(cluster.is_empty());
        assert_eq!(cluster.id(), 3);
    }

    #[test]
    fn centroid_from_external_members() {
        let points = vec![p(&[0.0, 0.0]), p(&[2.0, 1.0]), p(&[4.0, 5.0])];
        let mut cluster = Cluster::new(0, p(&[100.0, 100.0]));
        cluster.update_centroid_from(points.iter());
        assert_eq!(cluster.centroid().features(), &[2.0, 2.0]);
        assert!(cluster.is_empty());

        cluster.update_centroid_from(points.iter().take(0));
        assert_eq!(cluster.centroid().features(), &[2.0, 2.0]);
    }

    #[test]
    fn into_members_keeps_order() {
        let mut cluster = Cluster::new(0, p(&[0.0]));
        [3.0, 1.0, 2.0].iter().for_each(|v| cluster.add_member(p(&[*v])).unwrap());
        let values: Vec<f64> = cluster.into_members().iter().map(|m| m.features()[0]).collect();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn mismatched_member_is_rejected() {
        let mut cluster = Cluster::new(0, p(&[0.0, 0.0]));
        assert_eq!(cluster.add_member(p(&[1.0])), Err(ClusterError::DimensionMismatch { expected: 2, found: 1 }));
        assert_eq!(cluster.len(), 0);
    }
}
