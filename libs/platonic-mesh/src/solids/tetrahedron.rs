//! Canonical tetrahedron table.

use glam::DVec3;

use crate::mesh::Mesh;

/// Base triangle below the origin, apex on +Z. Each face omits exactly one
/// vertex, giving the four 3-of-4 index combinations.
pub(super) fn mesh() -> Mesh {
    Mesh {
        vertices: vec![
            DVec3::new(0.943, 0.0, -0.333),
            DVec3::new(-0.471, -0.816, -0.333),
            DVec3::new(-0.471, 0.816, -0.333),
            DVec3::new(0.0, 0.0, 1.0),
        ],
        edges: Vec::new(),
        faces: vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![0, 2, 3],
            vec![1, 2, 3],
        ],
    }
}
