//! Canonical dodecahedron table.

use glam::DVec3;

use crate::mesh::Mesh;

/// Cube corners plus twelve golden-rectangle points (golden ratio written as
/// 1.618 / 0.618, matching the precision of the rest of the tables). Twelve
/// pentagonal faces.
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
            DVec3::new(0.0, 1.618, 0.618),
            DVec3::new(0.0, -1.618, 0.618),
            DVec3::new(0.0, -1.618, -0.618),
            DVec3::new(0.0, 1.618, -0.618),
            DVec3::new(0.618, 0.0, 1.618),
            DVec3::new(-0.618, 0.0, 1.618),
            DVec3::new(-0.618, 0.0, -1.618),
            DVec3::new(0.618, 0.0, -1.618),
            DVec3::new(1.618, 0.618, 0.0),
            DVec3::new(-1.618, 0.618, 0.0),
            DVec3::new(-1.618, -0.618, 0.0),
            DVec3::new(1.618, -0.618, 0.0),
        ],
        edges: Vec::new(),
        faces: vec![
            vec![8, 11, 4, 16, 0],
            vec![8, 11, 7, 17, 3],
            vec![9, 10, 5, 19, 1],
            vec![9, 10, 6, 18, 2],
            vec![12, 13, 3, 8, 0],
            vec![12, 13, 2, 9, 1],
            vec![15, 14, 7, 11, 4],
            vec![15, 14, 6, 10, 5],
            vec![16, 19, 1, 12, 0],
            vec![16, 19, 5, 15, 4],
            vec![17, 18, 2, 13, 3],
            vec![17, 18, 6, 14, 7],
        ],
    }
}
