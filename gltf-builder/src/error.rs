//! Error types for document construction

/// Error type for mesh-to-glTF document construction.
///
/// All errors are raised synchronously before any document value is
/// produced; a `build_document` call either returns a complete document
/// or one of these.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The input mesh failed structural validation (empty attribute list,
    /// out-of-range index, non-finite component).
    #[error("invalid mesh input: {0}")]
    InvalidInput(String),

    /// A packed attribute stream disagrees with the declared vertex count.
    #[error("attribute encoding mismatch: {0}")]
    EncodingError(String),
}
