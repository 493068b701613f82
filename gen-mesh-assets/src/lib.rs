//! gen-mesh-assets library
//!
//! Shape catalogue and .gltf file output, usable from other tools as well
//! as the bundled binary.

pub mod output;
pub mod shapes;

pub use output::{generate_all, write_gltf, GENERATOR};
