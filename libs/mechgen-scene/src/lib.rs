//! # Mechgen Scene
//!
//! Drives the gear and wheel generators against a host scene.
//!
//! ## Architecture
//!
//! ```text
//! ui::Tool ─► gear::GearSession ─────► host (in-place geometry swap)
//!          └► wheel::WheelAssembler ─► host (destroy, rebuild, join)
//!                     │
//!                     └► appearance (get-or-create descriptors)
//! ```
//!
//! All host access goes through the traits in [`host`]. [`MemoryScene`]
//! implements them in memory.
//!
//! ## Usage
//!
//! ```rust
//! use mechgen_mesh::GearParameters;
//! use mechgen_scene::{GearSession, MemoryScene, ObjectStore};
//!
//! let mut scene = MemoryScene::new();
//! let mut session = GearSession::new();
//!
//! let gear = session.add_gear(&mut scene, &GearParameters::default())?;
//! let params = GearParameters::new(24, 2.0, 0.2, 0.3, 0.05)?;
//! assert!(session.update_gear(&mut scene, &params)?);
//! assert_eq!(scene.geometry(gear)?.vertex_count(), 96);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod appearance;
pub mod error;
pub mod gear;
pub mod host;
pub mod memory;
pub mod ui;
pub mod wheel;

pub use appearance::{get_or_create_metal, get_or_create_tire_surface, AppearanceDescriptor, AppearanceRegistry};
pub use error::{SceneError, SceneResult};
pub use gear::GearSession;
pub use host::{
    AppearanceStore, Host, ModifierKind, ModifierRef, ModifierStack, ObjectHandle, ObjectStore,
    PrimitiveConstructor,
};
pub use memory::MemoryScene;
pub use ui::{GearTool, Generator, ParamValue, ParameterSet, Regeneration, Tool, WheelTool};
pub use wheel::{PartSpan, WheelAssembler, WheelAssembly};
