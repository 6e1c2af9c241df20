//! # Builder Module
//!
//! Assembles a named, placed, colored solid into a single build request a
//! scene host can consume.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use platonic_mesh::{build, Rgba, SolidKind};
//!
//! let request = build("Cube", SolidKind::Cube, 2.0, DVec3::ZERO, Rgba::new(1.0, 1.0, 1.0, 1.0))
//!     .unwrap();
//! assert_eq!(request.geometry.vertex_count(), 8);
//! assert_eq!(request.transform.scale, 1.0);
//! ```

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{PlatonicError, PlatonicResult};
use crate::mesh::Mesh;
use crate::solids::{self, SolidKind};

/// Flat RGBA color with every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Creates a color from four channel values.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Checks that every channel lies in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`PlatonicError::ColorOutOfRange`] naming the first channel
    /// outside the range (NaN channels are rejected too).
    pub fn validate(self) -> PlatonicResult<()> {
        let channels = [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)];
        for (channel, value) in channels {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlatonicError::ColorOutOfRange { channel, value });
            }
        }
        Ok(())
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(channels: [f64; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        config::constants::DEFAULT_COLOR.into()
    }
}

/// Flat-shaded appearance attributes for one scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Material color.
    pub color: Rgba,
}

/// Instance transform: uniform scale factor plus placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Uniform scale factor. Stays 1.0 for requests produced by [`build`],
    /// which bakes size into the geometry instead.
    pub scale: f64,
    /// Placement of the object's origin.
    pub translation: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: DVec3::ZERO,
        }
    }
}

/// A single renderable object, ready for a scene host.
///
/// Created per generation action and handed off immediately; the core keeps
/// no reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Scene object identifier.
    pub name: String,
    /// Vertex/face geometry, with scale already applied.
    pub geometry: Mesh,
    /// Flat material attributes.
    pub appearance: Appearance,
    /// Placement of the object.
    pub transform: Transform,
}

/// Assembles a build request for one solid.
///
/// `scale` is baked into the geometry exactly once; the request's transform
/// keeps a unit scale factor so a host applying both cannot double-scale,
/// and `translation` carries the placement.
///
/// # Errors
///
/// Returns [`PlatonicError::ColorOutOfRange`] before any geometry is built
/// when a channel of `color` is outside [0, 1], and
/// [`PlatonicError::InvalidScale`] when `scale` is not positive.
pub fn build(
    name: &str,
    kind: SolidKind,
    scale: f64,
    translation: DVec3,
    color: Rgba,
) -> PlatonicResult<BuildRequest> {
    color.validate()?;
    let geometry = solids::generate(kind, scale)?;
    Ok(BuildRequest {
        name: name.to_string(),
        geometry,
        appearance: Appearance { color },
        transform: Transform {
            scale: 1.0,
            translation,
        },
    })
}
