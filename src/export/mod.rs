//! Wavefront OBJ export.
//!
//! Boundary-only serialization of a finalized hull: one `o` header line,
//! one `v` line per vertex, one `f` line per triangle with 1-based indices.

use crate::error::Result;
use crate::hull::ConvexHull;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a hull as Wavefront OBJ text to the given writer.
pub fn write_obj<W: Write>(hull: &ConvexHull<'_>, writer: &mut W, object_name: &str) -> Result<()> {
    writeln!(writer, "o {object_name}")?;

    for v in hull.vertices().as_slice() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    // OBJ indices are 1-based.
    for triangle in hull.indices().chunks_exact(3) {
        writeln!(
            writer,
            "f {} {} {}",
            triangle[0] + 1,
            triangle[1] + 1,
            triangle[2] + 1
        )?;
    }

    Ok(())
}

/// Write a hull to an OBJ file, creating or truncating the destination.
pub fn write_obj_file<P: AsRef<Path>>(
    hull: &ConvexHull<'_>,
    path: P,
    object_name: &str,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(hull, &mut writer, object_name)?;
    writer.flush()?;
    Ok(())
}
