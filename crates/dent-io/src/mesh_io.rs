//! JSON mesh files.

use std::fs;
use std::path::Path;

use dent_mesh::bounds::compute_bounds;
use dent_mesh::TriangleMesh;
use dent_types::{DentError, DentResult};

/// Reads a `TriangleMesh` from JSON and computes its bounds.
pub fn load_mesh_json(path: impl AsRef<Path>) -> DentResult<TriangleMesh> {
    let text = fs::read_to_string(path.as_ref())?;
    let mut mesh: TriangleMesh = serde_json::from_str(&text).map_err(|e| {
        DentError::Serialization(format!("{}: {e}", path.as_ref().display()))
    })?;
    compute_bounds(&mut mesh);
    Ok(mesh)
}

/// Writes a `TriangleMesh` as JSON.
pub fn save_mesh_json(mesh: &TriangleMesh, path: impl AsRef<Path>) -> DentResult<()> {
    let text =
        serde_json::to_string(mesh).map_err(|e| DentError::Serialization(e.to_string()))?;
    fs::write(path, text)?;
    Ok(())
}
