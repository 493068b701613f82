//! Little-endian buffer packing with buffer-view and accessor bookkeeping

use crate::bounds::compute_bounds;
use crate::error::BuildError;
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by pack operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Serializes attribute streams into one contiguous little-endian buffer.
///
/// Each pack call appends the stream's raw bytes, one buffer view whose
/// byte offset is the running length of the segments written before it,
/// and one accessor describing the stream. Segments are written back to
/// back with no padding, so the final buffer length is exactly the sum of
/// the segment lengths. Per-vertex streams are checked against the vertex
/// count declared at construction.
pub struct BufferPacker {
    vertex_count: usize,
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferPacker {
    /// Create an empty packer for a mesh with the given vertex count
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            buffer: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Get the packed binary data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the buffer views
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    fn check_stream(&self, what: &str, len: usize) -> Result<(), BuildError> {
        if len != self.vertex_count {
            return Err(BuildError::EncodingError(format!(
                "{what} stream has {len} entries for {} vertices",
                self.vertex_count
            )));
        }
        Ok(())
    }

    /// Pack Vec3 positions and record the bounded POSITION accessor
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> Result<AccessorIndex, BuildError> {
        self.check_stream("position", positions.len())?;
        let (min, max) = compute_bounds(positions)?;

        let offset = self.buffer.len();
        for pos in positions {
            self.buffer.extend_from_slice(bytemuck::cast_slice(pos));
        }

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: (positions.len() * 12).into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(json::buffer::Target::ArrayBuffer)),
        });

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: positions.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::F32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Vec3),
            min: Some(json::Value::Array(
                min.into_iter().map(json::Value::from).collect(),
            )),
            max: Some(json::Value::Array(
                max.into_iter().map(json::Value::from).collect(),
            )),
            name: None,
            normalized: false,
            sparse: None,
        });

        Ok(AccessorIndex(accessor_idx))
    }

    /// Pack Vec3 normals (no bounds; only POSITION carries min/max)
    pub fn pack_normals(&mut self, normals: &[[f32; 3]]) -> Result<AccessorIndex, BuildError> {
        self.check_stream("normal", normals.len())?;

        let offset = self.buffer.len();
        for normal in normals {
            self.buffer.extend_from_slice(bytemuck::cast_slice(normal));
        }

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: (normals.len() * 12).into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(json::buffer::Target::ArrayBuffer)),
        });

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: normals.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::F32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Vec3),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        });

        Ok(AccessorIndex(accessor_idx))
    }

    /// Pack Vec4 RGBA colors
    pub fn pack_colors(&mut self, colors: &[[f32; 4]]) -> Result<AccessorIndex, BuildError> {
        self.check_stream("color", colors.len())?;

        let offset = self.buffer.len();
        for color in colors {
            self.buffer.extend_from_slice(bytemuck::cast_slice(color));
        }

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: (colors.len() * 16).into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(json::buffer::Target::ArrayBuffer)),
        });

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: colors.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::F32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Vec4),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        });

        Ok(AccessorIndex(accessor_idx))
    }

    /// Pack u16 triangle indices
    pub fn pack_indices(&mut self, indices: &[u16]) -> AccessorIndex {
        let offset = self.buffer.len();
        for idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: (indices.len() * 2).into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(json::buffer::Target::ElementArrayBuffer)),
        });

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: indices.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::U16,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Scalar),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        });

        AccessorIndex(accessor_idx)
    }

    /// Encode the packed buffer as a `data:` URI with a standard padded
    /// base64 payload (RFC 4648, not URL-safe), consuming the packer.
    pub fn into_data_uri(self) -> String {
        use base64::Engine;
        let payload = base64::engine::general_purpose::STANDARD.encode(&self.buffer);
        format!("data:application/octet-stream;base64,{payload}")
    }
}
