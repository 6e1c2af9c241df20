//! # Mesh Module
//!
//! Polygon mesh representation with explicit vertex positions and face loops.
//!
//! ## Structure
//!
//! - `Mesh` - vertex positions, optional explicit edges, and face index loops
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use platonic_mesh::Mesh;
//!
//! let triangle = Mesh {
//!     vertices: vec![
//!         DVec3::new(0.0, 0.0, 0.0),
//!         DVec3::new(1.0, 0.0, 0.0),
//!         DVec3::new(0.0, 1.0, 0.0),
//!     ],
//!     edges: Vec::new(),
//!     faces: vec![vec![0, 1, 2]],
//! };
//! assert!(triangle.validate().is_ok());
//! ```

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{PlatonicError, PlatonicResult};

/// Polygon mesh with unique vertex positions and faces stored as ordered
/// index loops.
///
/// Faces are kept exactly as authored; winding order is not normalized, so
/// consumers must not assume a consistent outward-facing convention across
/// solids and should apply their own normal-computation rules.
///
/// The edge list is optional explicit data: edges are inferable from the face
/// loops and the canonical tables leave the list empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions; a vertex's index in this list is its identity.
    pub vertices: Vec<DVec3>,
    /// Optional explicit edges as pairs of vertex indices.
    pub edges: Vec<[u32; 2]>,
    /// Faces as ordered loops of at least three distinct vertex indices.
    pub faces: Vec<Vec<u32>>,
}

impl Mesh {
    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of explicit edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks that every face and edge references valid vertices and that
    /// every face has at least three distinct indices.
    ///
    /// The canonical solid tables are checked once at catalog initialization;
    /// generation calls do not re-run this per call.
    ///
    /// # Errors
    ///
    /// Returns the first topology violation found: an edge or face index
    /// outside the vertex list, or a face with fewer than three distinct
    /// vertices.
    pub fn validate(&self) -> PlatonicResult<()> {
        let vertex_count = self.vertices.len();

        for (edge_idx, edge) in self.edges.iter().enumerate() {
            for &index in edge {
                if index as usize >= vertex_count {
                    return Err(PlatonicError::EdgeIndexOutOfBounds {
                        edge: edge_idx,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        for (face_idx, face) in self.faces.iter().enumerate() {
            for &index in face {
                if index as usize >= vertex_count {
                    return Err(PlatonicError::FaceIndexOutOfBounds {
                        face: face_idx,
                        index,
                        vertex_count,
                    });
                }
            }

            let mut distinct = face.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < 3 {
                return Err(PlatonicError::DegenerateFace {
                    face: face_idx,
                    distinct: distinct.len(),
                });
            }
        }

        Ok(())
    }

    /// Returns a new mesh with every vertex multiplied by `factor`.
    ///
    /// Topology is scale-invariant: the edge and face lists are copied
    /// unchanged.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v * factor).collect(),
            edges: self.edges.clone(),
            faces: self.faces.clone(),
        }
    }

    /// Returns the axis-aligned bounding box as a `(min, max)` pair.
    ///
    /// An empty mesh yields a degenerate box at the origin.
    #[must_use]
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for v in &self.vertices {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }
}
