use csv::Reader;
use serde::Deserialize;

use crate::model::vector3::Vector3;

#[derive(Debug, Deserialize)]
struct Row {
	x: f64,
	y: f64,
	z: f64,
}

/// Csv cloud with `x,y,z` headers. Columns the matcher has no use for
/// (intensity, classification, ...) are ignored.
pub fn from_csv(buf: &[u8]) -> Result<Vec<Vector3>, Box<dyn std::error::Error>> {
	let mut rdr = Reader::from_reader(buf);
	let mut points = Vec::new();

	for result in rdr.deserialize() {
		let Row { x, y, z } = result?;
		points.push(Vector3 { x, y, z });
	}

	Ok(points)
}

#[cfg(test)]
mod tests {
	use super::from_csv;

	#[test]
	fn test_read_csv() {
		let buf = b"x,y,z\n0.0,0.0,0.0\n10.0,0.0,0.0\n0.0,10.0,0.0\n";
		let points = from_csv(buf).unwrap();

		assert_eq!(points.len(), 3);
		assert_eq!(points[1].x, 10.0);
	}

	#[test]
	fn test_read_csv_extra_columns() {
		let buf = b"x,y,z,intensity\n1.0,2.0,3.0,200\n";
		let points = from_csv(buf).unwrap();

		assert_eq!(points.len(), 1);
		assert_eq!(points[0].y, 2.0);
	}

	#[test]
	fn test_read_csv_missing_column() {
		let buf = b"x,y\n1.0,2.0\n";
		assert!(from_csv(buf).is_err());
	}
}
