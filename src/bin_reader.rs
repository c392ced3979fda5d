use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::model::vector3::Vector3;

const POINT_BYTES: usize = 3 * 8;

/// Raw little-endian f64 xyz triplets.
pub fn from_bin(buf: &[u8]) -> Result<Vec<Vector3>, Box<dyn std::error::Error>> {
	if buf.len() % POINT_BYTES != 0 {
		return Err(format!(
			"binary cloud length {} is not a multiple of {}",
			buf.len(),
			POINT_BYTES
		)
		.into());
	}

	let count = buf.len() / POINT_BYTES;
	let mut cursor = Cursor::new(buf);
	let mut points = Vec::with_capacity(count);
	for _ in 0..count {
		points.push(Vector3 {
			x: cursor.read_f64::<LittleEndian>()?,
			y: cursor.read_f64::<LittleEndian>()?,
			z: cursor.read_f64::<LittleEndian>()?,
		});
	}

	Ok(points)
}
