//! Static nearest-neighbor index over the loaded point cloud.

use kiddo::{ImmutableKdTree, SquaredEuclidean};

use crate::model::vector3::Vector3;

/// K-d tree over the full cloud, built once and queried read-only. Entry
/// order matches the cloud's point order, so returned items are indices
/// into the original point slice. Kiddo works in squared space; distances
/// cross this boundary as plain euclidean.
pub struct CloudIndex {
	tree: ImmutableKdTree<f64, 3>,
}

impl CloudIndex {
	pub fn build(points: &[Vector3]) -> Option<CloudIndex> {
		if points.is_empty() {
			return None;
		}

		let entries: Vec<[f64; 3]> = points.iter().map(|p| p.to_array()).collect();
		Some(CloudIndex {
			tree: ImmutableKdTree::new_from_slice(&entries),
		})
	}

	/// Index and distance of the single closest cloud point.
	pub fn nearest_one(&self, query: &Vector3) -> (usize, f64) {
		let result = self.tree.nearest_one::<SquaredEuclidean>(&query.to_array());
		(result.item as usize, result.distance.sqrt())
	}

	/// Up to `n` closest points, ordered by non-decreasing distance.
	pub fn nearest_n(&self, query: &Vector3, n: usize) -> Vec<(usize, f64)> {
		self.tree
			.nearest_n::<SquaredEuclidean>(&query.to_array(), n)
			.into_iter()
			.map(|nn| (nn.item as usize, nn.distance.sqrt()))
			.collect()
	}

	/// All points within `radius` of `query`, closest first.
	pub fn within(&self, query: &Vector3, radius: f64) -> Vec<(usize, f64)> {
		self.tree
			.within::<SquaredEuclidean>(&query.to_array(), radius * radius)
			.into_iter()
			.map(|nn| (nn.item as usize, nn.distance.sqrt()))
			.collect()
	}
}
