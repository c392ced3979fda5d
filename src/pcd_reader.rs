use pcd_rs::{anyhow, DynReader, DynRecord};

use crate::model::vector3::Vector3;

pub fn from_pcd(buf: &[u8]) -> Result<Vec<Vector3>, Box<dyn std::error::Error>> {
	let reader = DynReader::from_bytes(buf)?;
	let records: Result<Vec<DynRecord>, anyhow::Error> = reader.collect();

	let mut points = Vec::new();
	for record in records?.iter() {
		let [x, y, z] = record
			.to_owned()
			.xyz::<f64>()
			.ok_or("pcd record without xyz fields")?;
		points.push(Vector3 { x, y, z });
	}

	Ok(points)
}

#[cfg(test)]
mod tests {
	use super::from_pcd;

	#[test]
	fn test_read_pcd_ascii() {
		let buf = b"VERSION .7\n\
FIELDS x y z\n\
SIZE 4 4 4\n\
TYPE F F F\n\
COUNT 1 1 1\n\
WIDTH 3\n\
HEIGHT 1\n\
VIEWPOINT 0 0 0 1 0 0 0\n\
POINTS 3\n\
DATA ascii\n\
0 0 0\n\
10 0 0\n\
0 10 0\n";
		let points = from_pcd(buf).unwrap();

		assert_eq!(points.len(), 3);
		assert_eq!(points[1].x, 10.0);
		assert_eq!(points[2].y, 10.0);
	}
}
