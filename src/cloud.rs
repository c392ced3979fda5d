use std::error::Error;
use std::fs;
use std::path::Path;

use crate::bin_reader;
use crate::csv_reader;
use crate::dip_reader;
use crate::model::vector3::Vector3;
use crate::pcd_reader;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudFormat {
	/// Whitespace-delimited ascii (dip exports, xyz dumps).
	Dip,
	Csv,
	Pcd,
	/// Raw little-endian f64 triplets.
	Bin,
}

impl CloudFormat {
	pub fn from_path(path: &Path) -> Option<CloudFormat> {
		path.extension()
			.and_then(|ext| ext.to_str())
			.map(|ext| ext.to_lowercase())
			.and_then(|ext| match ext.as_str() {
				"dip" | "xyz" | "txt" | "asc" | "pts" => Some(CloudFormat::Dip),
				"csv" => Some(CloudFormat::Csv),
				"pcd" => Some(CloudFormat::Pcd),
				"bin" => Some(CloudFormat::Bin),
				_ => None,
			})
	}
}

pub struct PointCloud {
	pub points: Vec<Vector3>,
}

impl PointCloud {
	pub fn load(path: &Path) -> Result<PointCloud, Box<dyn Error>> {
		let format = CloudFormat::from_path(path)
			.ok_or_else(|| format!("unsupported point cloud format: {}", path.display()))?;
		let buf = fs::read(path)?;

		let points = match format {
			CloudFormat::Dip => dip_reader::from_dip(&buf)?,
			CloudFormat::Csv => csv_reader::from_csv(&buf)?,
			CloudFormat::Pcd => pcd_reader::from_pcd(&buf)?,
			CloudFormat::Bin => bin_reader::from_bin(&buf)?,
		};

		Ok(PointCloud { points })
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;

	use super::{CloudFormat, PointCloud};

	#[test]
	fn test_format_from_path() {
		assert_eq!(
			CloudFormat::from_path(Path::new("jcFS_ss_no-orientation.dip")),
			Some(CloudFormat::Dip)
		);
		assert_eq!(
			CloudFormat::from_path(Path::new("scan.XYZ")),
			Some(CloudFormat::Dip)
		);
		assert_eq!(
			CloudFormat::from_path(Path::new("points.csv")),
			Some(CloudFormat::Csv)
		);
		assert_eq!(
			CloudFormat::from_path(Path::new("points.pcd")),
			Some(CloudFormat::Pcd)
		);
		assert_eq!(
			CloudFormat::from_path(Path::new("points.bin")),
			Some(CloudFormat::Bin)
		);
		assert_eq!(CloudFormat::from_path(Path::new("points.ply")), None);
		assert_eq!(CloudFormat::from_path(Path::new("points")), None);
	}

	#[test]
	fn test_load_dip() {
		let path = std::env::temp_dir().join("patch_closest_points_cloud.dip");
		fs::write(&path, "0 0 0\n10 0 0\n0 10 0\n").unwrap();

		let cloud = PointCloud::load(&path).unwrap();
		assert_eq!(cloud.len(), 3);

		fs::remove_file(&path).unwrap();
	}

	#[test]
	fn test_load_unknown_extension_errors() {
		assert!(PointCloud::load(Path::new("cloud.ply")).is_err());
	}
}
