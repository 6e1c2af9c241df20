//! Tests for the canonical solid tables and scaled generation.
//!
//! These tests verify that the tables:
//! - Carry the fixed vertex and face counts of each Platonic solid
//! - Reference only valid vertices, with at least 3 distinct indices per face
//! - Scale uniformly without touching topology
//! - Reject non-positive scale factors

use approx::assert_abs_diff_eq;
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

use super::*;

/// Fixed expectations: (kind, vertex count, face count).
const EXPECTED_COUNTS: [(SolidKind, usize, usize); 5] = [
    (SolidKind::Tetrahedron, 4, 4),
    (SolidKind::Cube, 8, 6),
    (SolidKind::Octahedron, 6, 8),
    (SolidKind::Dodecahedron, 20, 12),
    (SolidKind::Icosahedron, 12, 20),
];

/// Every solid carries its fixed vertex and face counts.
#[test]
fn test_vertex_and_face_counts() {
    for (kind, vertices, faces) in EXPECTED_COUNTS {
        let mesh = geometry_for(kind);
        assert_eq!(mesh.vertex_count(), vertices, "{} vertices", kind.name());
        assert_eq!(mesh.face_count(), faces, "{} faces", kind.name());
    }
}

/// The whole catalog passes the topology self-check.
#[test]
fn test_catalog_validates() {
    for kind in SolidKind::ALL {
        assert!(geometry_for(kind).validate().is_ok(), "{}", kind.name());
    }
}

/// Every face references in-range vertices and at least 3 distinct indices.
///
/// This re-states what `validate` checks, but walks the data directly so a
/// validation bug cannot mask a table bug.
#[test]
fn test_faces_are_well_formed() {
    for kind in SolidKind::ALL {
        let mesh = geometry_for(kind);
        for face in &mesh.faces {
            let mut distinct = face.clone();
            distinct.sort_unstable();
            distinct.dedup();
            assert!(distinct.len() >= 3, "{} face {:?}", kind.name(), face);
            for &index in face {
                assert!((index as usize) < mesh.vertex_count());
            }
        }
    }
}

/// Cube corners sit at (±1, ±1, ±1).
#[test]
fn test_cube_vertices_on_unit_corners() {
    for vertex in &geometry_for(SolidKind::Cube).vertices {
        for coord in [vertex.x, vertex.y, vertex.z] {
            assert_abs_diff_eq!(coord.abs(), 1.0, epsilon = EPSILON_TOLERANCE);
        }
    }
}

/// Octahedron vertices lie on the coordinate axes, one unit out.
#[test]
fn test_octahedron_vertices_on_axes() {
    for vertex in &geometry_for(SolidKind::Octahedron).vertices {
        let nonzero = [vertex.x, vertex.y, vertex.z]
            .iter()
            .filter(|c| c.abs() > EPSILON_TOLERANCE)
            .count();
        assert_eq!(nonzero, 1, "vertex {vertex} not on an axis");
        assert_abs_diff_eq!(vertex.length(), 1.0, epsilon = EPSILON_TOLERANCE);
    }
}

/// The tetrahedron's four faces are exactly the four 3-of-4 combinations.
#[test]
fn test_tetrahedron_faces_cover_all_triples() {
    let mut faces: Vec<Vec<u32>> = geometry_for(SolidKind::Tetrahedron)
        .faces
        .iter()
        .map(|face| {
            let mut sorted = face.clone();
            sorted.sort_unstable();
            sorted
        })
        .collect();
    faces.sort();
    assert_eq!(
        faces,
        vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
    );
}

/// The golden-ratio tables carry the authored 1.618/0.618 literals.
#[test]
fn test_golden_ratio_literals() {
    let dodecahedron = geometry_for(SolidKind::Dodecahedron);
    assert!(dodecahedron
        .vertices
        .contains(&DVec3::new(0.0, 1.618, 0.618)));

    let icosahedron = geometry_for(SolidKind::Icosahedron);
    assert!(icosahedron.vertices.contains(&DVec3::new(0.0, 1.0, 1.618)));
}

/// Generation multiplies every vertex by the scale factor and keeps topology.
#[test]
fn test_generate_scales_vertices() {
    for kind in SolidKind::ALL {
        let canonical = geometry_for(kind);
        let scaled = generate(kind, 2.5).unwrap();

        assert_eq!(scaled.vertex_count(), canonical.vertex_count());
        for (vertex, expected) in scaled.vertices.iter().zip(&canonical.vertices) {
            assert_abs_diff_eq!(vertex.x, expected.x * 2.5, epsilon = EPSILON_TOLERANCE);
            assert_abs_diff_eq!(vertex.y, expected.y * 2.5, epsilon = EPSILON_TOLERANCE);
            assert_abs_diff_eq!(vertex.z, expected.z * 2.5, epsilon = EPSILON_TOLERANCE);
        }

        assert_eq!(scaled.faces, canonical.faces);
        assert_eq!(scaled.edges, canonical.edges);
    }
}

/// Scaling by 1.0 reproduces the canonical geometry exactly.
#[test]
fn test_generate_unit_scale_roundtrip() {
    for kind in SolidKind::ALL {
        assert_eq!(&generate(kind, 1.0).unwrap(), geometry_for(kind));
    }
}

/// Zero, negative, and NaN scales are rejected.
#[test]
fn test_generate_rejects_bad_scale() {
    for scale in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            generate(SolidKind::Cube, scale),
            Err(PlatonicError::InvalidScale(_))
        ));
    }
}

/// Generation never hands out an alias of the catalog.
#[test]
fn test_generate_returns_fresh_mesh() {
    let mut generated = generate(SolidKind::Tetrahedron, 1.0).unwrap();
    generated.vertices[0] = DVec3::ZERO;
    assert_ne!(
        geometry_for(SolidKind::Tetrahedron).vertices[0],
        DVec3::ZERO
    );
}

/// The template order of `ALL` is fixed.
#[test]
fn test_all_order_is_fixed() {
    assert_eq!(
        SolidKind::ALL.map(SolidKind::name),
        [
            "Tetrahedron",
            "Cube",
            "Octahedron",
            "Dodecahedron",
            "Icosahedron"
        ]
    );
}
