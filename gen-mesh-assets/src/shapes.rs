//! The built-in shape catalogue
//!
//! Five small polyhedra sized to fit roughly inside the unit cube. The
//! diamond is flat-shaded (vertices duplicated per face so each face keeps
//! one solid color); the other shapes share vertices and blend colors
//! across faces.

use gltf_builder::MeshData;
use std::f32::consts::TAU;

/// All catalogue shapes, in generation order.
pub fn all() -> Vec<MeshData> {
    vec![diamond(), cube(), pyramid(), tetrahedron(), icosphere()]
}

/// Eight-faced diamond: a square ring of four vertices with an apex above
/// and below. Flat-shaded, so the 6 logical vertices become 24 (3 per
/// face, 8 faces), each face carrying a single color.
pub fn diamond() -> MeshData {
    let top = [0.0, 0.8, 0.0];
    let bottom = [0.0, -0.8, 0.0];
    let ring = [
        [0.55, 0.0, 0.0],
        [0.0, 0.0, 0.55],
        [-0.55, 0.0, 0.0],
        [0.0, 0.0, -0.55],
    ];

    let faces: [[[f32; 3]; 3]; 8] = [
        [top, ring[0], ring[1]],
        [top, ring[1], ring[2]],
        [top, ring[2], ring[3]],
        [top, ring[3], ring[0]],
        [bottom, ring[1], ring[0]],
        [bottom, ring[2], ring[1]],
        [bottom, ring[3], ring[2]],
        [bottom, ring[0], ring[3]],
    ];

    let face_colors: [[f32; 4]; 8] = [
        [1.0, 0.2, 0.2, 1.0],
        [0.2, 1.0, 0.2, 1.0],
        [0.2, 0.4, 1.0, 1.0],
        [1.0, 1.0, 0.2, 1.0],
        [1.0, 0.2, 1.0, 1.0],
        [0.2, 1.0, 1.0, 1.0],
        [1.0, 0.6, 0.2, 1.0],
        [0.7, 0.3, 1.0, 1.0],
    ];

    let mut positions = Vec::with_capacity(24);
    let mut colors = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(24);

    for (face, color) in faces.iter().zip(face_colors) {
        for corner in face {
            indices.push(positions.len() as u32);
            positions.push(*corner);
            colors.push(color);
        }
    }

    MeshData::new("Diamond", positions, indices, colors)
}

/// Axis-aligned cube with shared corner vertices, one color per corner.
pub fn cube() -> MeshData {
    let s = 0.4;
    let positions = vec![
        [-s, -s, -s],
        [s, -s, -s],
        [s, s, -s],
        [-s, s, -s],
        [-s, -s, s],
        [s, -s, s],
        [s, s, s],
        [-s, s, s],
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 2, 1, 0, 3, 2,
        4, 5, 6, 4, 6, 7,
        0, 1, 5, 0, 5, 4,
        2, 3, 7, 2, 7, 6,
        0, 4, 7, 0, 7, 3,
        1, 2, 6, 1, 6, 5,
    ];

    let colors = vec![
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0],
        [1.0, 0.5, 0.0, 1.0],
        [0.5, 0.0, 1.0, 1.0],
    ];

    MeshData::new("Cube", positions, indices, colors)
}

/// Square-based pyramid: apex plus four base corners, closed underneath.
pub fn pyramid() -> MeshData {
    let positions = vec![
        [0.0, 0.6, 0.0],
        [0.5, -0.3, 0.5],
        [-0.5, -0.3, 0.5],
        [-0.5, -0.3, -0.5],
        [0.5, -0.3, -0.5],
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,
        0, 2, 3,
        0, 3, 4,
        0, 4, 1,
        1, 3, 2,
        1, 4, 3,
    ];

    let colors = vec![
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 0.5, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.5, 1.0, 1.0],
        [1.0, 0.0, 0.5, 1.0],
    ];

    MeshData::new("Pyramid", positions, indices, colors)
}

/// The smallest closed shape in the catalogue: four vertices, four faces.
pub fn tetrahedron() -> MeshData {
    let t = 0.5;
    let positions = vec![
        [0.0, 0.6, 0.0],
        [t, -0.3, t],
        [-t, -0.3, t],
        [0.0, -0.3, -t * 1.2],
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,
        0, 2, 3,
        0, 3, 1,
        1, 3, 2,
    ];

    let colors = vec![
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
    ];

    MeshData::new("Tetrahedron", positions, indices, colors)
}

/// Regular icosahedron from three orthogonal golden-ratio rectangles, with
/// a rainbow hue swept across the twelve vertices.
pub fn icosphere() -> MeshData {
    let phi = (1.0 + 5.0f32.sqrt()) / 2.0;
    let a = 0.3;
    let b = a * phi;

    let positions = vec![
        [-a, b, 0.0],
        [a, b, 0.0],
        [-a, -b, 0.0],
        [a, -b, 0.0],
        [0.0, -a, b],
        [0.0, a, b],
        [0.0, -a, -b],
        [0.0, a, -b],
        [b, 0.0, -a],
        [b, 0.0, a],
        [-b, 0.0, -a],
        [-b, 0.0, a],
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 11, 5,   0, 5, 1,    0, 1, 7,    0, 7, 10,   0, 10, 11,
        1, 5, 9,    5, 11, 4,   11, 10, 2,  10, 7, 6,   7, 1, 8,
        3, 9, 4,    3, 4, 2,    3, 2, 6,    3, 6, 8,    3, 8, 9,
        4, 9, 5,    2, 4, 11,   6, 2, 10,   8, 6, 7,    9, 8, 1,
    ];

    let colors = (0..positions.len())
        .map(|i| {
            let hue = i as f32 / 12.0;
            [
                (hue * TAU).sin() * 0.5 + 0.5,
                (hue * TAU + 2.0).sin() * 0.5 + 0.5,
                (hue * TAU + 4.0).sin() * 0.5 + 0.5,
                1.0,
            ]
        })
        .collect();

    MeshData::new("Icosphere", positions, indices, colors)
}
