//! Canonical icosahedron table.

use glam::DVec3;

use crate::mesh::Mesh;

/// Twelve vertices on three mutually orthogonal golden rectangles. Twenty
/// triangular faces.
pub(super) fn mesh() -> Mesh {
    Mesh {
        vertices: vec![
            DVec3::new(0.0, 1.0, 1.618),
            DVec3::new(0.0, -1.0, 1.618),
            DVec3::new(0.0, 1.0, -1.618),
            DVec3::new(0.0, -1.0, -1.618),
            DVec3::new(1.618, 0.0, 1.0),
            DVec3::new(1.618, 0.0, -1.0),
            DVec3::new(-1.618, 0.0, 1.0),
            DVec3::new(-1.618, 0.0, -1.0),
            DVec3::new(1.0, 1.618, 0.0),
            DVec3::new(-1.0, 1.618, 0.0),
            DVec3::new(1.0, -1.618, 0.0),
            DVec3::new(-1.0, -1.618, 0.0),
        ],
        edges: Vec::new(),
        faces: vec![
            vec![0, 1, 4],
            vec![0, 1, 6],
            vec![2, 3, 5],
            vec![2, 3, 7],
            vec![4, 5, 8],
            vec![4, 5, 10],
            vec![6, 7, 9],
            vec![6, 7, 11],
            vec![8, 9, 0],
            vec![8, 9, 2],
            vec![10, 11, 1],
            vec![10, 11, 3],
            vec![0, 4, 8],
            vec![1, 4, 10],
            vec![1, 6, 11],
            vec![0, 6, 9],
            vec![2, 5, 8],
            vec![3, 5, 10],
            vec![3, 7, 11],
            vec![2, 7, 9],
        ],
    }
}
