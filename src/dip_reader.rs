use std::error::Error;
use std::io::{BufRead, BufReader};

use crate::model::vector3::Vector3;

/// Whitespace-delimited ascii cloud, one point per line. Blank lines and
/// `#` comments are skipped; columns past the first three (orientation
/// data in dip exports) are ignored.
pub fn from_dip(buf: &[u8]) -> Result<Vec<Vector3>, Box<dyn Error>> {
	let reader = BufReader::new(buf);
	let mut points = Vec::new();

	for (lineno, line) in reader.lines().enumerate() {
		let line = line?;
		let trimmed = line.trim();
		if trimmed.is_empty() || trimmed.starts_with('#') {
			continue;
		}

		let mut tokens = trimmed.split_whitespace();
		let x = next_coordinate(&mut tokens, lineno)?;
		let y = next_coordinate(&mut tokens, lineno)?;
		let z = next_coordinate(&mut tokens, lineno)?;
		points.push(Vector3 { x, y, z });
	}

	Ok(points)
}

fn next_coordinate<'a>(
	tokens: &mut impl Iterator<Item = &'a str>,
	lineno: usize,
) -> Result<f64, Box<dyn Error>> {
	let token = tokens
		.next()
		.ok_or_else(|| format!("line {}: expected 3 coordinates", lineno + 1))?;
	let value = token
		.parse::<f64>()
		.map_err(|_| format!("line {}: bad coordinate {:?}", lineno + 1, token))?;
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::from_dip;

	#[test]
	fn test_read_dip() {
		let buf = b"1.0 2.0 3.0\n-4.5 0.0 1e2\n";
		let points = from_dip(buf).unwrap();

		assert_eq!(points.len(), 2);
		assert_eq!(points[0].x, 1.0);
		assert_eq!(points[0].y, 2.0);
		assert_eq!(points[0].z, 3.0);
		assert_eq!(points[1].z, 100.0);
	}

	#[test]
	fn test_skips_comments_and_blank_lines() {
		let buf = b"# header\n\n1 2 3\n   \n# trailing\n";
		let points = from_dip(buf).unwrap();
		assert_eq!(points.len(), 1);
	}

	#[test]
	fn test_ignores_extra_columns() {
		let buf = b"1 2 3 45.0 270.0\n";
		let points = from_dip(buf).unwrap();
		assert_eq!(points.len(), 1);
		assert_eq!(points[0].z, 3.0);
	}

	#[test]
	fn test_short_line_errors() {
		let buf = b"1 2 3\n4 5\n";
		let err = from_dip(buf).unwrap_err();
		assert!(err.to_string().contains("line 2"));
	}

	#[test]
	fn test_bad_float_errors() {
		let buf = b"1 2 three\n";
		assert!(from_dip(buf).is_err());
	}
}
