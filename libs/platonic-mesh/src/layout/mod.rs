//! # Layout Module
//!
//! Arranges one build request per solid kind into a non-overlapping row.

use config::constants::TEMPLATE_SPACING;
use glam::DVec3;

use crate::builder::{build, BuildRequest, Rgba};
use crate::error::PlatonicResult;
use crate::solids::SolidKind;

/// X offsets of the template row, in multiples of the spacing constant.
/// Alternating sides keeps the row centered on the first solid.
const ROW_STEPS: [f64; 5] = [0.0, 1.0, -1.0, 2.0, -2.0];

/// Builds one request per solid kind, spread along the X axis.
///
/// The output order is fixed (tetrahedron, cube, octahedron, dodecahedron,
/// icosahedron) and must be preserved by consumers: it is what associates a
/// placement with its solid. Each request is named after its kind.
///
/// # Errors
///
/// Returns the first builder error: an invalid `scale` or a `color` channel
/// outside [0, 1]. Nothing is produced on failure.
///
/// # Examples
/// ```
/// use platonic_mesh::{layout_all, Rgba};
///
/// let requests = layout_all(1.0, Rgba::new(0.8, 0.8, 0.8, 1.0)).unwrap();
/// assert_eq!(requests.len(), 5);
/// assert_eq!(requests[0].name, "Tetrahedron");
/// ```
pub fn layout_all(scale: f64, color: Rgba) -> PlatonicResult<Vec<BuildRequest>> {
    SolidKind::ALL
        .iter()
        .zip(ROW_STEPS)
        .map(|(&kind, step)| {
            let translation = DVec3::new(step * TEMPLATE_SPACING, 0.0, 0.0);
            build(kind.name(), kind, scale, translation, color)
        })
        .collect()
}
