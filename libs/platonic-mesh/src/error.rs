//! # Error Types
//!
//! Error types for solid generation and build-request assembly. All errors
//! are explicit and provide clear debugging information.
//!
//! ## Error Policy
//!
//! - NO fallback geometry when validation fails
//! - All failures are detected before any descriptor is constructed
//! - Errors include context for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating solids or assembling requests.
///
/// ## Example
///
/// ```rust
/// use platonic_mesh::{generate, PlatonicError, SolidKind};
///
/// match generate(SolidKind::Cube, -1.0) {
///     Ok(mesh) => println!("Success: {} vertices", mesh.vertex_count()),
///     Err(PlatonicError::InvalidScale(value)) => eprintln!("Bad scale: {}", value),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PlatonicError {
    /// The requested uniform scale is zero, negative, or NaN.
    #[error("Scale must be positive, got {0}")]
    InvalidScale(f64),

    /// A color channel lies outside the [0, 1] range.
    #[error("Color channel '{channel}' out of [0, 1]: {value}")]
    ColorOutOfRange {
        /// Name of the offending channel (r, g, b, or a).
        channel: &'static str,
        /// The rejected channel value.
        value: f64,
    },

    /// A face references a vertex index outside the mesh's vertex list.
    #[error("Face {face} references vertex index {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfBounds {
        /// Position of the face in the face list.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face has fewer than three distinct vertex indices.
    #[error("Face {face} needs at least 3 distinct vertices, got {distinct}")]
    DegenerateFace {
        /// Position of the face in the face list.
        face: usize,
        /// Number of distinct indices the face references.
        distinct: usize,
    },

    /// An explicit edge references a vertex index outside the vertex list.
    #[error("Edge {edge} references vertex index {index}, but the mesh has {vertex_count} vertices")]
    EdgeIndexOutOfBounds {
        /// Position of the edge in the edge list.
        edge: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for solid generation operations.
///
/// ## Example
///
/// ```rust
/// use platonic_mesh::error::PlatonicResult;
/// use platonic_mesh::Mesh;
///
/// fn empty_mesh() -> PlatonicResult<Mesh> {
///     Ok(Mesh::default())
/// }
/// ```
pub type PlatonicResult<T> = Result<T, PlatonicError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let scale_err = PlatonicError::InvalidScale(-2.0);
        assert!(scale_err.to_string().contains("-2"));

        let color_err = PlatonicError::ColorOutOfRange {
            channel: "r",
            value: 1.5,
        };
        assert!(color_err.to_string().contains("'r'"));
        assert!(color_err.to_string().contains("1.5"));

        let face_err = PlatonicError::FaceIndexOutOfBounds {
            face: 3,
            index: 9,
            vertex_count: 4,
        };
        assert!(face_err.to_string().contains("Face 3"));
        assert!(face_err.to_string().contains("9"));
    }

    /// Test error types are Send + Sync for use across threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlatonicError>();
    }
}
