//! # Host Module
//!
//! The scene-host boundary: an external collaborator that turns build
//! requests into persistent scene objects, plus the generation operations
//! driving it from an explicit configuration value.
//!
//! ## Example
//!
//! ```rust
//! use platonic_mesh::{create_template, BuildOptions, MemoryHost};
//!
//! let mut host = MemoryHost::new();
//! let handles = create_template(&mut host, &BuildOptions::default()).unwrap();
//! assert_eq!(handles.len(), 5);
//! assert_eq!(host.objects()[1].name, "Cube");
//! ```

use config::constants::{DEFAULT_COLOR, DEFAULT_SCALE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::builder::{build, BuildRequest, Rgba};
use crate::error::PlatonicResult;
use crate::layout::layout_all;
use crate::solids::SolidKind;

/// External collaborator that owns scene objects.
///
/// Implementations apply a request's geometry, a flat material from its
/// appearance, and its transform, and track the created object under
/// whatever identity their runtime uses. The core hands each request over
/// once and keeps no reference to it.
pub trait SceneHost {
    /// Opaque identifier of a created scene object.
    type Handle;

    /// Creates a persistent renderable object from `request`.
    fn insert(&mut self, request: BuildRequest) -> Self::Handle;

    /// Removes every object previously created through this host.
    fn clear(&mut self);
}

/// In-process host retaining requests in insertion order.
///
/// Serves as the reference implementation and as a test double for wrapper
/// layers targeting a real 3D application.
#[derive(Debug, Default)]
pub struct MemoryHost {
    objects: Vec<BuildRequest>,
}

impl MemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The retained requests, oldest first.
    #[must_use]
    pub fn objects(&self) -> &[BuildRequest] {
        &self.objects
    }
}

impl SceneHost for MemoryHost {
    type Handle = usize;

    fn insert(&mut self, request: BuildRequest) -> usize {
        self.objects.push(request);
        self.objects.len() - 1
    }

    fn clear(&mut self) {
        self.objects.clear();
    }
}

/// Explicit per-call configuration for the generation operations.
///
/// Replaces ambient scene state: every call names its own kind, scale,
/// color, and clear behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Which solid to build.
    pub kind: SolidKind,
    /// Uniform scale baked into the geometry.
    pub scale: f64,
    /// Flat color for the object's material.
    pub color: Rgba,
    /// Empty the host before creating anything.
    pub clear_before_create: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            kind: SolidKind::Tetrahedron,
            scale: DEFAULT_SCALE,
            color: DEFAULT_COLOR.into(),
            clear_before_create: false,
        }
    }
}

/// Builds one solid at the origin, named after its kind, and hands it to
/// `host`.
///
/// The request is validated and assembled before the host is touched, so a
/// failure never clears or mutates the scene.
///
/// # Errors
///
/// Returns the builder's error for an invalid scale or color.
pub fn create_solid<H: SceneHost>(host: &mut H, options: &BuildOptions) -> PlatonicResult<H::Handle> {
    let request = build(
        options.kind.name(),
        options.kind,
        options.scale,
        DVec3::ZERO,
        options.color,
    )?;
    if options.clear_before_create {
        host.clear();
    }
    Ok(host.insert(request))
}

/// Builds the five-solid template row and hands it to `host` in layout
/// order.
///
/// As with [`create_solid`], all five requests are assembled before the host
/// is touched; `options.kind` is ignored since the template always contains
/// every kind.
///
/// # Errors
///
/// Returns the builder's error for an invalid scale or color.
pub fn create_template<H: SceneHost>(
    host: &mut H,
    options: &BuildOptions,
) -> PlatonicResult<Vec<H::Handle>> {
    let requests = layout_all(options.scale, options.color)?;
    if options.clear_before_create {
        host.clear();
    }
    Ok(requests
        .into_iter()
        .map(|request| host.insert(request))
        .collect())
}

#[cfg(test)]
mod tests;
