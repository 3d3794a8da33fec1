//! # Mechgen Mesh
//!
//! Pure geometry for the parametric gear and wheel generators.
//!
//! ## Architecture
//!
//! ```text
//! params (validated inputs) → gear / primitives + wheel placement → Mesh
//! ```
//!
//! Nothing here knows about a scene. Object creation, modifiers, materials
//! and regeneration live in `mechgen-scene`, which feeds these meshes to a
//! host.
//!
//! ## Usage
//!
//! ```rust
//! use mechgen_mesh::{gear::build_gear_from, GearParameters};
//!
//! let params = GearParameters::default();
//! let mesh = build_gear_from(&params);
//! assert_eq!(mesh.vertex_count(), 4 * params.teeth() as usize);
//! ```

pub mod error;
pub mod gear;
pub mod mesh;
pub mod params;
pub mod primitives;
pub mod transform;
pub mod wheel;

pub use error::{MeshError, MeshResult, ParameterError};
pub use mesh::Mesh;
pub use params::{GearParameters, GearSettings, WheelParameters, WheelSettings};
pub use transform::Transform;
