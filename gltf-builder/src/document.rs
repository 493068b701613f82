//! Assembly of the one-scene/one-node/one-mesh glTF document

use crate::buffer::BufferPacker;
use crate::error::BuildError;
use crate::mesh::MeshData;
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Build a self-contained glTF 2.0 document for a single mesh.
///
/// Validates the mesh, derives radial normals, resolves per-vertex colors,
/// packs all attribute streams into one embedded base64 buffer and returns
/// the assembled document root. The accessor and buffer-view tables come
/// out in the fixed order positions (0), normals (1), colors (2),
/// indices (3); only the POSITION accessor carries min/max bounds.
///
/// All-or-nothing: any validation or encoding failure surfaces before a
/// document value exists.
pub fn build_document(mesh: &MeshData, generator: &str) -> Result<json::Root, BuildError> {
    mesh.validate()?;

    let normals = mesh.derive_normals();
    let colors = mesh.resolved_colors();
    let indices = mesh.indices_u16();

    let mut packer = BufferPacker::new(mesh.positions.len());
    let position_accessor = packer.pack_positions(&mesh.positions)?;
    let normal_accessor = packer.pack_normals(&normals)?;
    let color_accessor = packer.pack_colors(&colors)?;
    let index_accessor = packer.pack_indices(&indices);

    let mut attributes = BTreeMap::new();
    attributes.insert(
        Valid(json::mesh::Semantic::Positions),
        position_accessor.as_json_index(),
    );
    attributes.insert(
        Valid(json::mesh::Semantic::Normals),
        normal_accessor.as_json_index(),
    );
    attributes.insert(
        Valid(json::mesh::Semantic::Colors(0)),
        color_accessor.as_json_index(),
    );

    let primitive = json::mesh::Primitive {
        attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices: Some(index_accessor.as_json_index()),
        material: None,
        mode: Valid(json::mesh::Mode::Triangles),
        targets: None,
    };

    let byte_length = packer.data().len() as u64;
    let accessors = packer.accessors().to_vec();
    let buffer_views = packer.views().to_vec();
    let uri = packer.into_data_uri();

    Ok(json::Root {
        accessors,
        animations: Vec::new(),
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some(generator.to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers: vec![json::Buffer {
            byte_length: byte_length.into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: Some(uri),
        }],
        buffer_views,
        cameras: Vec::new(),
        extensions: Default::default(),
        extensions_required: Vec::new(),
        extensions_used: Vec::new(),
        extras: Default::default(),
        images: Vec::new(),
        materials: Vec::new(),
        meshes: vec![json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(mesh.name.clone()),
            primitives: vec![primitive],
            weights: None,
        }],
        nodes: vec![json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: Some(json::Index::new(0)),
            name: Some(mesh.name.clone()),
            rotation: None,
            scale: None,
            skin: None,
            translation: None,
            weights: None,
        }],
        samplers: Vec::new(),
        scene: Some(json::Index::new(0)),
        scenes: vec![json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            nodes: vec![json::Index::new(0)],
        }],
        skins: Vec::new(),
        textures: Vec::new(),
    })
}
