//! gen-mesh-assets - procedural glTF mesh generation tool
//!
//! Writes the built-in shape catalogue (diamond, cube, pyramid,
//! tetrahedron, icosphere) as self-contained .gltf files with embedded
//! base64 buffers.
//!
//! Usage:
//!   cargo run -p gen-mesh-assets -- --output assets/meshes

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen-mesh-assets")]
#[command(about = "Generate the built-in procedural mesh catalogue as glTF files")]
#[command(version)]
struct Cli {
    /// Output directory for the generated .gltf files
    #[arg(short, long, default_value = "assets/meshes")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let written = gen_mesh_assets::generate_all(&cli.output)?;
    tracing::info!("Generated {} meshes in {}", written.len(), cli.output.display());

    Ok(())
}
