pub mod bin_reader;
pub mod cloud;
pub mod csv_reader;
pub mod dip_reader;
pub mod grid;
pub mod index;
pub mod matching;
pub mod model;
pub mod pcd_reader;
pub mod ply_reader;
pub mod writer;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use ord_subset::OrdSubsetIterExt;

use cloud::PointCloud;
use grid::PatchGrid;
use index::CloudIndex;
use model::bounds::find_bounds;
use model::options::{GridMode, Strategy};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
	/// Three nearest cloud points per cell, cells queried independently
	#[value(name = "batch-3nn")]
	Batch3Nn,
	/// Single nearest point per cell, seeded by the previous cell's match
	#[value(name = "locality-1nn")]
	Locality1Nn,
}

impl From<CliStrategy> for Strategy {
	fn from(value: CliStrategy) -> Self {
		match value {
			CliStrategy::Batch3Nn => Strategy::BatchThreeNearest,
			CliStrategy::Locality1Nn => Strategy::LocalitySeededNearest,
		}
	}
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliGridMode {
	/// Literal 32-unit cell spans starting at the patch minimum
	#[value(name = "fixed-step")]
	FixedStep,
	/// Cell spans scaled so the grid tiles the patch bounding box
	#[value(name = "scaled")]
	Scaled,
}

impl From<CliGridMode> for GridMode {
	fn from(value: CliGridMode) -> Self {
		match value {
			CliGridMode::FixedStep => GridMode::FixedStep,
			CliGridMode::Scaled => GridMode::Scaled,
		}
	}
}

/// Correlate a grid over a surface patch with its nearest point-cloud samples
#[derive(Parser, Debug)]
#[command(name = "patch-closest-points", version, about)]
struct Cli {
	/// Surface patch mesh (.ply); only its bounding box is used
	#[arg(default_value = "projected_patch.ply")]
	patch: PathBuf,

	/// Point cloud (.dip/.xyz/.txt/.asc/.pts, .csv, .pcd or .bin)
	#[arg(default_value = "jcFS_ss_no-orientation.dip")]
	cloud: PathBuf,

	#[arg(long, value_enum, default_value_t = CliStrategy::Batch3Nn)]
	strategy: CliStrategy,

	#[arg(long, value_enum, default_value_t = CliGridMode::FixedStep)]
	grid_mode: CliGridMode,

	/// Print the per-cell correlation table as json on stdout
	#[arg(long)]
	json: bool,

	/// Write grid centers and matched points to a colored ply for inspection
	#[arg(long, value_name = "FILE")]
	plot: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();
	let cli = Cli::parse();

	let patch = ply_reader::from_ply(&fs::read(&cli.patch)?)?;
	let bounds = find_bounds(&patch).ok_or("patch mesh has no vertices")?;
	info!(
		"patch: {} vertices, bounds x [{:.3}, {:.3}] y [{:.3}, {:.3}]",
		patch.len(),
		bounds.min.x,
		bounds.max.x,
		bounds.min.y,
		bounds.max.y
	);

	let cloud = PointCloud::load(&cli.cloud)?;
	info!("point cloud: {} points", cloud.len());

	let index = CloudIndex::build(&cloud.points).ok_or("point cloud is empty")?;
	let grid = PatchGrid::new(&bounds, cli.grid_mode.into());

	let (matches, stats) = matching::resolve(&index, &cloud.points, &grid, cli.strategy.into());
	info!(
		"resolved {} cells ({} local, {} full queries)",
		stats.cells, stats.local_hits, stats.full_queries
	);

	if let Some(path) = &cli.plot {
		writer::write_debug_ply(&matches, path)?;
		info!("wrote {}", path.display());
	}

	if cli.json {
		serde_json::to_writer(std::io::stdout().lock(), &matches)?;
		println!();
	} else {
		let nearest: Vec<f64> = matches
			.iter()
			.filter_map(|m| m.neighbors.first())
			.map(|n| n.distance)
			.collect();
		if let (Some(min), Some(max)) = (
			nearest.iter().ord_subset_min(),
			nearest.iter().ord_subset_max(),
		) {
			println!(
				"{} cells matched; nearest distance min {:.3}, max {:.3}",
				stats.cells, min, max
			);
		}
	}

	Ok(())
}
