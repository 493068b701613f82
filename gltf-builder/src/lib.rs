//! Embedded glTF 2.0 generation for procedurally defined mesh assets
//!
//! Turns a [`MeshData`] (positions, triangle indices, optional per-vertex
//! colors) into a complete, self-contained glTF 2.0 document: one scene,
//! one node, one mesh, with radial normals derived from the positions and
//! every attribute stream packed into a single base64 `data:` URI buffer.
//!
//! The pieces compose bottom-up:
//! - [`compute_bounds`] finds the axis-aligned min/max corner for the
//!   POSITION accessor
//! - [`BufferPacker`] serializes attribute streams little-endian and keeps
//!   the buffer-view and accessor tables in sync
//! - [`build_document`] validates the mesh and assembles the document root
//!
//! # Example
//!
//! ```
//! use gltf_builder::{build_document, MeshData};
//!
//! let mesh = MeshData::new(
//!     "Triangle",
//!     vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
//!     vec![0, 1, 2],
//!     Vec::new(),
//! );
//! let root = build_document(&mesh, "gltf-builder").unwrap();
//! assert_eq!(root.asset.version, "2.0");
//! assert_eq!(root.meshes.len(), 1);
//! ```

pub mod bounds;
pub mod buffer;
pub mod document;
pub mod error;
pub mod mesh;

pub use bounds::compute_bounds;
pub use buffer::{AccessorIndex, BufferPacker};
pub use document::build_document;
pub use error::BuildError;
pub use mesh::{MeshData, DEFAULT_COLOR, MAX_VERTEX_COUNT};

// Re-export the document graph types so downstream crates do not need a
// direct gltf-json dependency for common cases.
pub use gltf_json as json;
pub use gltf_json::validation::Checked::Valid;
