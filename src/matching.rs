//! Resolves grid cells against the cloud index under the selected policy.

use ord_subset::OrdSubsetIterExt;
use serde::Serialize;

use crate::grid::PatchGrid;
use crate::index::CloudIndex;
use crate::model::options::Strategy;
use crate::model::vector3::Vector3;

/// Multiplier applied to the grid step to bound the locality search.
const LOCAL_SEARCH_FACTOR: f64 = 1.5;

/// Which side of the patch plane a matched point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
	Above,
	Below,
	Coplanar,
}

impl Side {
	fn of(point_z: f64, plane_z: f64) -> Side {
		if point_z > plane_z {
			Side::Above
		} else if point_z < plane_z {
			Side::Below
		} else {
			Side::Coplanar
		}
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct Neighbor {
	/// Position of the matched point in the loaded cloud.
	pub index: usize,
	pub point: Vector3,
	/// Euclidean distance from the cell center.
	pub distance: f64,
	pub side: Side,
}

#[derive(Clone, Debug, Serialize)]
pub struct CellMatch {
	pub cell: usize,
	pub center: Vector3,
	pub neighbors: Vec<Neighbor>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MatchStats {
	pub cells: usize,
	/// Cells resolved from the previous match's neighborhood.
	pub local_hits: usize,
	/// Cells resolved by a full index query.
	pub full_queries: usize,
}

pub fn resolve(
	index: &CloudIndex,
	points: &[Vector3],
	grid: &PatchGrid,
	strategy: Strategy,
) -> (Vec<CellMatch>, MatchStats) {
	match strategy {
		Strategy::BatchThreeNearest => batch_three_nearest(index, points, grid),
		Strategy::LocalitySeededNearest => locality_seeded_nearest(index, points, grid),
	}
}

fn neighbor(points: &[Vector3], index: usize, distance: f64, plane_z: f64) -> Neighbor {
	let point = points[index];
	Neighbor {
		index,
		point,
		distance,
		side: Side::of(point.z, plane_z),
	}
}

fn batch_three_nearest(
	index: &CloudIndex,
	points: &[Vector3],
	grid: &PatchGrid,
) -> (Vec<CellMatch>, MatchStats) {
	let mut matches = Vec::with_capacity(grid.cells().len());
	for (cell, c) in grid.cells().iter().enumerate() {
		let center = c.center();
		let neighbors = index
			.nearest_n(&center, 3)
			.into_iter()
			.map(|(idx, dist)| neighbor(points, idx, dist, c.z))
			.collect();
		matches.push(CellMatch { cell, center, neighbors });
	}

	let stats = MatchStats {
		cells: matches.len(),
		local_hits: 0,
		full_queries: matches.len(),
	};
	(matches, stats)
}

fn locality_seeded_nearest(
	index: &CloudIndex,
	points: &[Vector3],
	grid: &PatchGrid,
) -> (Vec<CellMatch>, MatchStats) {
	let radius = LOCAL_SEARCH_FACTOR * grid.step_x().max(grid.step_y());

	let mut matches = Vec::with_capacity(grid.cells().len());
	let mut stats = MatchStats::default();
	// The previous cell's match seeds the next cell's local search.
	let mut seed: Option<Vector3> = None;

	for (cell, c) in grid.cells().iter().enumerate() {
		let center = c.center();
		let (idx, dist, local) = nearest_from_seed(index, points, &center, seed.as_ref(), radius);
		if local {
			stats.local_hits += 1;
		} else {
			stats.full_queries += 1;
		}

		let n = neighbor(points, idx, dist, c.z);
		seed = Some(n.point);
		matches.push(CellMatch { cell, center, neighbors: vec![n] });
	}

	stats.cells = matches.len();
	(matches, stats)
}

/// One cell of the locality-seeded policy: of the cloud points within
/// `radius` of the seed, take the one closest to the current center; with
/// no seed or an empty neighborhood, fall back to the full index. The
/// local pick is a heuristic and can miss the true nearest point when the
/// surface jumps relative to grid order.
fn nearest_from_seed(
	index: &CloudIndex,
	points: &[Vector3],
	center: &Vector3,
	seed: Option<&Vector3>,
	radius: f64,
) -> (usize, f64, bool) {
	if let Some(seed) = seed {
		let local = index.within(seed, radius);
		let pick = local
			.iter()
			.ord_subset_min_by_key(|&&(idx, _)| points[idx].distance_squared(center));
		if let Some(&(idx, _)) = pick {
			return (idx, points[idx].distance(center), true);
		}
	}

	let (idx, dist) = index.nearest_one(center);
	(idx, dist, false)
}
