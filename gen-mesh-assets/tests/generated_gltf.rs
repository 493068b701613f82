//! End-to-end tests: generate the catalogue to disk, then re-import every
//! file with the gltf crate and verify structure and binary content.

use gen_mesh_assets::{generate_all, shapes, GENERATOR};
use std::path::Path;
use tempfile::tempdir;

/// (name, vertex count, index count) for every catalogue shape
const EXPECTED: [(&str, usize, usize); 5] = [
    ("Diamond", 24, 24),
    ("Cube", 8, 36),
    ("Pyramid", 5, 18),
    ("Tetrahedron", 4, 12),
    ("Icosphere", 12, 60),
];

fn import(dir: &Path, name: &str) -> (gltf::Document, Vec<gltf::buffer::Data>) {
    let path = dir.join(format!("{name}.gltf"));
    let (document, buffers, _) =
        gltf::import(&path).unwrap_or_else(|e| panic!("Failed to import {name}: {e}"));
    (document, buffers)
}

#[test]
fn test_generates_all_catalogue_files() {
    let dir = tempdir().unwrap();
    let written = generate_all(dir.path()).expect("generation failed");

    assert_eq!(written.len(), 5);
    for (name, _, _) in EXPECTED {
        assert!(
            dir.path().join(format!("{name}.gltf")).is_file(),
            "missing {name}.gltf"
        );
    }
}

#[test]
fn test_documents_have_expected_structure() {
    let dir = tempdir().unwrap();
    generate_all(dir.path()).unwrap();

    for (name, vertex_count, index_count) in EXPECTED {
        let (document, _) = import(dir.path(), name);

        assert_eq!(document.scenes().count(), 1, "{name} scene count");
        assert_eq!(document.nodes().count(), 1, "{name} node count");
        assert_eq!(document.meshes().count(), 1, "{name} mesh count");
        assert_eq!(document.accessors().count(), 4, "{name} accessor count");
        assert_eq!(document.views().count(), 4, "{name} view count");
        assert_eq!(document.buffers().count(), 1, "{name} buffer count");

        let scene = document.default_scene().expect("default scene");
        let node = scene.nodes().next().expect("scene root node");
        assert_eq!(node.name(), Some(name));
        let mesh = node.mesh().expect("node mesh");
        assert_eq!(mesh.name(), Some(name));

        let primitive = mesh.primitives().next().expect("primitive");
        assert_eq!(primitive.mode(), gltf::mesh::Mode::Triangles);
        for semantic in [
            gltf::Semantic::Positions,
            gltf::Semantic::Normals,
            gltf::Semantic::Colors(0),
        ] {
            let accessor = primitive
                .get(&semantic)
                .unwrap_or_else(|| panic!("{name} missing {semantic:?}"));
            assert_eq!(accessor.count(), vertex_count, "{name} {semantic:?} count");
        }
        assert_eq!(
            primitive.indices().expect("indices accessor").count(),
            index_count,
            "{name} index count"
        );
    }
}

#[test]
fn test_buffer_length_matches_packed_streams() {
    let dir = tempdir().unwrap();
    generate_all(dir.path()).unwrap();

    for (name, vertex_count, index_count) in EXPECTED {
        let (document, buffers) = import(dir.path(), name);
        let expected = vertex_count * 12 + vertex_count * 12 + vertex_count * 16 + index_count * 2;

        let buffer = document.buffers().next().unwrap();
        assert_eq!(buffer.length(), expected, "{name} buffer byteLength");
        // the resolved data may be padded by the importer, never truncated
        assert!(buffers[0].len() >= expected, "{name} decoded buffer length");
    }
}

#[test]
fn test_geometry_round_trips_through_import() {
    let dir = tempdir().unwrap();
    generate_all(dir.path()).unwrap();

    for mesh in shapes::all() {
        let (document, buffers) = import(dir.path(), &mesh.name);
        let primitive = document.meshes().next().unwrap().primitives().next().unwrap();
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<[f32; 3]> = reader.read_positions().expect("positions").collect();
        assert_eq!(positions, mesh.positions, "{} positions", mesh.name);

        let indices: Vec<u32> = reader
            .read_indices()
            .expect("indices")
            .into_u32()
            .collect();
        assert_eq!(indices, mesh.indices, "{} indices", mesh.name);

        let colors: Vec<[f32; 4]> = reader
            .read_colors(0)
            .expect("colors")
            .into_rgba_f32()
            .collect();
        assert_eq!(colors, mesh.colors, "{} colors", mesh.name);

        for (i, normal) in reader.read_normals().expect("normals").enumerate() {
            let len = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
            assert!(
                (len - 1.0).abs() < 1e-5,
                "{} normal {i} has length {len}",
                mesh.name
            );
        }
    }
}

#[test]
fn test_position_bounds_cover_all_vertices() {
    let dir = tempdir().unwrap();
    generate_all(dir.path()).unwrap();

    for mesh in shapes::all() {
        let (document, _) = import(dir.path(), &mesh.name);
        let primitive = document.meshes().next().unwrap().primitives().next().unwrap();
        let bounds = primitive.bounding_box();

        for p in &mesh.positions {
            for axis in 0..3 {
                assert!(bounds.min[axis] <= p[axis] && p[axis] <= bounds.max[axis]);
            }
        }
    }
}

#[test]
fn test_asset_metadata_and_embedded_uri() {
    let dir = tempdir().unwrap();
    generate_all(dir.path()).unwrap();

    for (name, _, _) in EXPECTED {
        let contents = std::fs::read_to_string(dir.path().join(format!("{name}.gltf"))).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(json["asset"]["version"], "2.0");
        assert_eq!(json["asset"]["generator"], GENERATOR);

        let uri = json["buffers"][0]["uri"].as_str().expect("buffer uri");
        let payload = uri
            .strip_prefix("data:application/octet-stream;base64,")
            .expect("data URI prefix");
        use base64::Engine;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .expect("valid base64");
        assert_eq!(
            decoded.len() as u64,
            json["buffers"][0]["byteLength"].as_u64().unwrap(),
            "{name} decoded length"
        );
    }
}
