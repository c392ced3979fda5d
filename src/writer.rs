use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::matching::CellMatch;
use crate::model::vector3::Vector3;

const CENTER_COLOR: [u8; 3] = [255, 255, 255];
const MATCH_COLOR: [u8; 3] = [0, 0, 255];

/// Ascii ply with one colored vertex per grid center and per matched
/// cloud point, for inspecting the correlation in an external viewer.
pub fn write_debug_ply(matches: &[CellMatch], path: &Path) -> Result<(), Box<dyn Error>> {
	let file = File::create(path)?;
	let mut writer = BufWriter::new(file);

	let num_matched: usize = matches.iter().map(|m| m.neighbors.len()).sum();
	writeln!(writer, "ply")?;
	writeln!(writer, "format ascii 1.0")?;
	writeln!(writer, "element vertex {}", matches.len() + num_matched)?;
	writeln!(writer, "property float x")?;
	writeln!(writer, "property float y")?;
	writeln!(writer, "property float z")?;
	writeln!(writer, "property uchar red")?;
	writeln!(writer, "property uchar green")?;
	writeln!(writer, "property uchar blue")?;
	writeln!(writer, "end_header")?;

	for m in matches {
		write_vertex(&mut writer, &m.center, CENTER_COLOR)?;
	}
	for m in matches {
		for n in &m.neighbors {
			write_vertex(&mut writer, &n.point, MATCH_COLOR)?;
		}
	}

	Ok(())
}

fn write_vertex(w: &mut impl Write, p: &Vector3, color: [u8; 3]) -> Result<(), Box<dyn Error>> {
	writeln!(
		w,
		"{} {} {} {} {} {}",
		p.x, p.y, p.z, color[0], color[1], color[2]
	)?;
	Ok(())
}
