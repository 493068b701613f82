//! Serialization of catalogue meshes to .gltf files on disk

use crate::shapes;
use anyhow::{Context, Result};
use gltf_builder::{build_document, MeshData};
use std::fs;
use std::path::{Path, PathBuf};

/// Generator string stamped into every produced asset.
pub const GENERATOR: &str = "gen-mesh-assets";

/// Build the document for one mesh and write it as pretty-printed JSON to
/// `<output_dir>/<name>.gltf`. Returns the path written.
pub fn write_gltf(mesh: &MeshData, output_dir: &Path) -> Result<PathBuf> {
    let root = build_document(mesh, GENERATOR)
        .with_context(|| format!("Failed to build document for {}", mesh.name))?;
    let json = gltf_builder::json::serialize::to_string_pretty(&root)
        .with_context(|| format!("Failed to serialize document for {}", mesh.name))?;

    let path = output_dir.join(format!("{}.gltf", mesh.name));
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Generate every catalogue shape into `output_dir`, creating it first.
///
/// A failing shape is logged and skipped so the remaining shapes still get
/// written; the error returned at the end reports how many failed.
pub fn generate_all(output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    let mut written = Vec::new();
    let mut failures = 0usize;

    for mesh in shapes::all() {
        match write_gltf(&mesh, output_dir) {
            Ok(path) => {
                tracing::info!(
                    "Generated {} ({} vertices, {} indices)",
                    path.display(),
                    mesh.positions.len(),
                    mesh.indices.len()
                );
                written.push(path);
            }
            Err(err) => {
                tracing::error!("Skipping {}: {err:#}", mesh.name);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} shapes failed to generate", failures + written.len());
    }

    Ok(written)
}
