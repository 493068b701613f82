//! Mesh input data, validation and derived vertex attributes

use crate::error::BuildError;

/// Largest vertex count representable by the 16-bit on-disk index encoding.
pub const MAX_VERTEX_COUNT: usize = 1 << 16;

/// Opaque white, substituted for missing vertex colors.
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// A single mesh as supplied by the caller: a name, vertex positions,
/// triangle indices and optional per-vertex RGBA colors.
///
/// A `MeshData` is consumed once per document build; the encoder keeps no
/// state between builds.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub colors: Vec<[f32; 4]>,
}

impl MeshData {
    pub fn new(
        name: impl Into<String>,
        positions: Vec<[f32; 3]>,
        indices: Vec<u32>,
        colors: Vec<[f32; 4]>,
    ) -> Self {
        Self {
            name: name.into(),
            positions,
            indices,
            colors,
        }
    }

    /// Check every structural invariant eagerly, before any bytes are
    /// produced: non-empty name, non-empty position and index lists, all
    /// indices in range, vertex count within the u16 index encoding, and
    /// finite position/color components.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::InvalidInput("mesh name is empty".into()));
        }
        if self.positions.is_empty() {
            return Err(BuildError::InvalidInput("mesh has no vertices".into()));
        }
        if self.indices.is_empty() {
            return Err(BuildError::InvalidInput("mesh has no indices".into()));
        }
        if self.positions.len() > MAX_VERTEX_COUNT {
            return Err(BuildError::InvalidInput(format!(
                "{} vertices exceed the 16-bit index range",
                self.positions.len()
            )));
        }

        for (i, &index) in self.indices.iter().enumerate() {
            if index as usize >= self.positions.len() {
                return Err(BuildError::InvalidInput(format!(
                    "index {index} at position {i} is out of range for {} vertices",
                    self.positions.len()
                )));
            }
        }

        for (i, position) in self.positions.iter().enumerate() {
            if position.iter().any(|c| !c.is_finite()) {
                return Err(BuildError::InvalidInput(format!(
                    "position {i} has a non-finite component"
                )));
            }
        }
        for (i, color) in self.colors.iter().enumerate() {
            if color.iter().any(|c| !c.is_finite()) {
                return Err(BuildError::InvalidInput(format!(
                    "color {i} has a non-finite component"
                )));
            }
        }

        Ok(())
    }

    /// Radial normals: each vertex normal is its position normalized.
    /// A zero-length position yields the zero vector rather than NaN.
    /// Only geometrically correct for convex shapes centered at the origin.
    pub fn derive_normals(&self) -> Vec<[f32; 3]> {
        self.positions
            .iter()
            .map(|p| {
                let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
                let len = if len == 0.0 { 1.0 } else { len };
                [p[0] / len, p[1] / len, p[2] / len]
            })
            .collect()
    }

    /// Exactly one RGBA color per vertex: missing entries default to opaque
    /// white, surplus entries beyond the vertex count are ignored.
    pub fn resolved_colors(&self) -> Vec<[f32; 4]> {
        (0..self.positions.len())
            .map(|i| self.colors.get(i).copied().unwrap_or(DEFAULT_COLOR))
            .collect()
    }

    /// Narrow indices to the on-disk u16 encoding. Callers must have run
    /// `validate` first; out-of-range values would otherwise truncate.
    pub(crate) fn indices_u16(&self) -> Vec<u16> {
        self.indices.iter().map(|&i| i as u16).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshData {
        MeshData::new(
            "Triangle",
            vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            vec![0, 1, 2],
            Vec::new(),
        )
    }

    #[test]
    fn test_validate_accepts_triangle() {
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_positions() {
        let mesh = MeshData::new("Empty", Vec::new(), vec![0], Vec::new());
        assert!(matches!(
            mesh.validate(),
            Err(BuildError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_indices() {
        let mesh = MeshData::new("NoIndices", vec![[0.0; 3]], Vec::new(), Vec::new());
        assert!(matches!(
            mesh.validate(),
            Err(BuildError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut mesh = triangle();
        mesh.indices[2] = 3;
        assert!(matches!(
            mesh.validate(),
            Err(BuildError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_position() {
        let mut mesh = triangle();
        mesh.positions[1][1] = f32::NAN;
        assert!(matches!(
            mesh.validate(),
            Err(BuildError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_color() {
        let mut mesh = triangle();
        mesh.colors = vec![[1.0, 0.0, f32::INFINITY, 1.0]];
        assert!(matches!(
            mesh.validate(),
            Err(BuildError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_vertex_count_beyond_u16() {
        let count = MAX_VERTEX_COUNT + 1;
        let mesh = MeshData::new(
            "TooBig",
            vec![[0.0; 3]; count],
            vec![0, 1, 2],
            Vec::new(),
        );
        assert!(matches!(
            mesh.validate(),
            Err(BuildError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = MeshData::new(
            "Scaled",
            vec![[2.0, 0.0, 0.0], [0.0, 3.0, 4.0], [-1.0, -1.0, -1.0]],
            vec![0, 1, 2],
            Vec::new(),
        );
        for normal in mesh.derive_normals() {
            let len = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "normal length {len}");
        }
    }

    #[test]
    fn test_origin_vertex_gets_zero_normal() {
        let mesh = MeshData::new(
            "Origin",
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![0, 1, 2],
            Vec::new(),
        );
        assert_eq!(mesh.derive_normals()[0], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unit_positions_are_their_own_normals() {
        let mesh = triangle();
        assert_eq!(mesh.derive_normals(), mesh.positions);
    }

    #[test]
    fn test_missing_colors_default_to_opaque_white() {
        let mut mesh = triangle();
        mesh.colors = vec![[1.0, 0.0, 0.0, 1.0]];
        let colors = mesh.resolved_colors();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(colors[1], DEFAULT_COLOR);
        assert_eq!(colors[2], DEFAULT_COLOR);
    }

    #[test]
    fn test_surplus_colors_are_ignored() {
        let mut mesh = triangle();
        mesh.colors = vec![[0.5, 0.5, 0.5, 1.0]; 5];
        assert_eq!(mesh.resolved_colors().len(), 3);
    }
}
