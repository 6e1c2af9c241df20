//! # Platonic Mesh
//!
//! Generates the five Platonic solids as explicit vertex/face meshes and
//! assembles them into build requests a scene host can turn into renderable
//! objects.
//!
//! ## Architecture
//!
//! ```text
//! solids (canonical tables + scaling)
//!       ↓
//! builder (geometry + appearance + placement → BuildRequest)
//!       ↓
//! layout (the five-solid template row)
//!       ↓
//! host (SceneHost boundary)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use platonic_mesh::{generate, SolidKind};
//!
//! let cube = generate(SolidKind::Cube, 2.0).unwrap();
//! assert_eq!(cube.vertex_count(), 8);
//! assert_eq!(cube.face_count(), 6);
//! ```

pub mod builder;
pub mod error;
pub mod host;
pub mod layout;
pub mod mesh;
pub mod solids;

pub use builder::{build, Appearance, BuildRequest, Rgba, Transform};
pub use error::{PlatonicError, PlatonicResult};
pub use host::{create_solid, create_template, BuildOptions, MemoryHost, SceneHost};
pub use layout::layout_all;
pub use mesh::Mesh;
pub use solids::{generate, geometry_for, SolidKind};

pub use glam::DVec3;
