//! # Solids Module
//!
//! Canonical geometry tables for the five Platonic solids and the scaled
//! generation entry point.
//!
//! Each solid's vertex coordinates and face loops are fixed authored data;
//! the face tuples encode the only topologically correct pairing of vertices
//! into planar polygons, so they are reproduced verbatim rather than derived.
//!
//! ## Example
//!
//! ```rust
//! use platonic_mesh::solids::{generate, SolidKind};
//!
//! let icosahedron = generate(SolidKind::Icosahedron, 1.0).unwrap();
//! assert_eq!(icosahedron.vertex_count(), 12);
//! assert_eq!(icosahedron.face_count(), 20);
//! ```

mod cube;
mod dodecahedron;
mod icosahedron;
mod octahedron;
mod tetrahedron;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{PlatonicError, PlatonicResult};
use crate::mesh::Mesh;

/// The closed set of Platonic solids; exactly five exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolidKind {
    /// Four triangular faces.
    Tetrahedron,
    /// Six quadrilateral faces.
    Cube,
    /// Eight triangular faces.
    Octahedron,
    /// Twelve pentagonal faces.
    Dodecahedron,
    /// Twenty triangular faces.
    Icosahedron,
}

impl SolidKind {
    /// Every kind, in the fixed order the template layout uses.
    pub const ALL: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ];

    /// Display name used for scene objects built from this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron => "Tetrahedron",
            SolidKind::Cube => "Cube",
            SolidKind::Octahedron => "Octahedron",
            SolidKind::Dodecahedron => "Dodecahedron",
            SolidKind::Icosahedron => "Icosahedron",
        }
    }
}

/// Canonical tables, built once and shared read-only between callers.
fn catalog() -> &'static [Mesh; 5] {
    static CATALOG: OnceLock<[Mesh; 5]> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let meshes = [
            tetrahedron::mesh(),
            cube::mesh(),
            octahedron::mesh(),
            dodecahedron::mesh(),
            icosahedron::mesh(),
        ];
        // The tables are fixed data; a validation failure here is a bug in them.
        for mesh in &meshes {
            debug_assert!(mesh.validate().is_ok());
        }
        meshes
    })
}

/// Returns the canonical geometry for `kind`.
///
/// Total over the closed enumeration: every kind has a table, so there is no
/// error path. The returned reference points into the shared catalog; use
/// [`generate`] for a mesh you can hand off.
///
/// # Examples
/// ```
/// use platonic_mesh::solids::{geometry_for, SolidKind};
///
/// let cube = geometry_for(SolidKind::Cube);
/// assert_eq!(cube.vertex_count(), 8);
/// ```
#[must_use]
pub fn geometry_for(kind: SolidKind) -> &'static Mesh {
    let index = match kind {
        SolidKind::Tetrahedron => 0,
        SolidKind::Cube => 1,
        SolidKind::Octahedron => 2,
        SolidKind::Dodecahedron => 3,
        SolidKind::Icosahedron => 4,
    };
    &catalog()[index]
}

/// Generates a fresh mesh for `kind` with every vertex multiplied by `scale`.
///
/// The face and edge lists are copied unchanged; topology is scale-invariant.
/// The canonical table is never aliased into the result.
///
/// # Errors
///
/// Returns [`PlatonicError::InvalidScale`] when `scale` is zero, negative,
/// or NaN.
pub fn generate(kind: SolidKind, scale: f64) -> PlatonicResult<Mesh> {
    if scale <= 0.0 || scale.is_nan() {
        return Err(PlatonicError::InvalidScale(scale));
    }
    Ok(geometry_for(kind).scaled(scale))
}

#[cfg(test)]
mod tests;
