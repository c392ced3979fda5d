use std::error::Error;
use std::io::BufReader;

use ply_rs::parser::Parser;
use ply_rs::ply::Property;

use crate::model::vector3::Vector3;

/// Vertex positions of a ply mesh. Faces, normals and colors are ignored;
/// the patch is only consumed through its bounding box.
pub fn from_ply(buf: &[u8]) -> Result<Vec<Vector3>, Box<dyn Error>> {
	let mut reader = BufReader::new(buf);
	let parser = Parser::<ply_rs::ply::DefaultElement>::new();
	let ply = parser.read_ply(&mut reader)?;

	let vertices = ply
		.payload
		.get("vertex")
		.ok_or("ply file has no vertex element")?;

	let mut points = Vec::with_capacity(vertices.len());
	for vertex in vertices {
		let x = float_property(vertex.get("x"))?;
		let y = float_property(vertex.get("y"))?;
		let z = float_property(vertex.get("z"))?;
		points.push(Vector3 { x, y, z });
	}

	Ok(points)
}

fn float_property(prop: Option<&Property>) -> Result<f64, Box<dyn Error>> {
	match prop {
		Some(Property::Float(v)) => Ok(*v as f64),
		Some(Property::Double(v)) => Ok(*v),
		Some(Property::Int(v)) => Ok(*v as f64),
		Some(Property::UInt(v)) => Ok(*v as f64),
		Some(Property::Short(v)) => Ok(*v as f64),
		Some(Property::UShort(v)) => Ok(*v as f64),
		Some(Property::Char(v)) => Ok(*v as f64),
		Some(Property::UChar(v)) => Ok(*v as f64),
		_ => Err("missing or non-numeric vertex coordinate".into()),
	}
}

#[cfg(test)]
mod tests {
	use super::from_ply;

	const PATCH: &[u8] = b"ply\n\
format ascii 1.0\n\
element vertex 4\n\
property float x\n\
property float y\n\
property float z\n\
end_header\n\
0 0 5\n\
96 0 5\n\
0 96 5\n\
96 96 5\n";

	#[test]
	fn test_read_ply_vertices() {
		let points = from_ply(PATCH).unwrap();

		assert_eq!(points.len(), 4);
		assert_eq!(points[1].x, 96.0);
		assert_eq!(points[3].z, 5.0);
	}

	#[test]
	fn test_no_vertex_element_errors() {
		let buf = b"ply\nformat ascii 1.0\nelement face 0\nend_header\n";
		assert!(from_ply(&buf[..]).is_err());
	}
}
