//! Canonical cube table.

use glam::DVec3;

use crate::mesh::Mesh;

/// Corners at (±1, ±1, ±1); top ring first, then the bottom ring directly
/// beneath it. Six axis-aligned quadrilateral sides.
pub(super) fn mesh() -> Mesh {
    Mesh {
        vertices: vec![
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(1.0, -1.0, 1.0),
            DVec3::new(-1.0, -1.0, 1.0),
            DVec3::new(-1.0, 1.0, 1.0),
            DVec3::new(1.0, 1.0, -1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(-1.0, -1.0, -1.0),
            DVec3::new(-1.0, 1.0, -1.0),
        ],
        edges: Vec::new(),
        faces: vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![0, 4, 5, 1],
            vec![1, 5, 6, 2],
            vec![2, 6, 7, 3],
            vec![3, 7, 4, 0],
        ],
    }
}
