//! Canonical octahedron table.

use glam::DVec3;

use crate::mesh::Mesh;

/// Six vertices on the coordinate axes, poles at ±Z. Eight triangles fan
/// from each pole to the equatorial square.
pub(super) fn mesh() -> Mesh {
    Mesh {
        vertices: vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(0.0, -1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ],
        edges: Vec::new(),
        faces: vec![
            vec![0, 1, 2],
            vec![0, 2, 3],
            vec![0, 3, 4],
            vec![0, 4, 1],
            vec![5, 1, 2],
            vec![5, 2, 3],
            vec![5, 3, 4],
            vec![5, 4, 1],
        ],
    }
}
