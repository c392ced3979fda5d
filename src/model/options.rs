/// How grid cells are matched against the point cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
	/// Three nearest points per cell, every cell queried independently.
	BatchThreeNearest,
	/// One nearest point per cell, searching the previous match's
	/// neighborhood before the full index.
	LocalitySeededNearest,
}

/// How cell spans are derived from the patch bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMode {
	/// Literal 32-unit spans starting at the bounds' minimum. The grid can
	/// under- or overshoot the actual patch extent.
	FixedStep,
	/// Spans of extent/32 per axis, tiling the bounding box exactly.
	Scaled,
}
