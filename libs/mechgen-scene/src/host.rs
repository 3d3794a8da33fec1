//! # Host Collaborators
//!
//! The generators never own scene state. Everything they create or touch
//! goes through these traits, which a host application implements over its
//! own object model. [`MemoryScene`](crate::MemoryScene) implements all of
//! them for tests and headless use.

use std::fmt;

use config::constants::BEVEL_MODIFIER_NAME;
use mechgen_mesh::{Mesh, Transform};

use crate::appearance::AppearanceDescriptor;
use crate::error::SceneResult;

// =============================================================================
// HANDLES
// =============================================================================

/// Opaque reference to an object in the host store.
///
/// Handles are never reused, so a stale handle fails loudly instead of
/// aliasing a newer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(u64);

impl ObjectHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object #{}", self.0)
    }
}

/// Post-process kinds the generators attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// Edge rounding by a width, with a fixed subdivision level.
    Bevel,
}

impl ModifierKind {
    /// Name the host shows for a freshly attached modifier.
    pub fn default_name(&self) -> &'static str {
        match self {
            ModifierKind::Bevel => BEVEL_MODIFIER_NAME,
        }
    }
}

/// Reference to one modifier on one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModifierRef {
    pub object: ObjectHandle,
    pub index: usize,
}

impl fmt::Display for ModifierRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modifier {} on {}", self.index, self.object)
    }
}

/// A modifier as stored on an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub name: String,
    pub width: f64,
    pub segments: u32,
}

// =============================================================================
// TRAITS
// =============================================================================

/// Persistent objects: a name, a mesh, a transform and material slots.
pub trait ObjectStore {
    /// Creates an object at the origin. The host may alter `name` to keep
    /// names unique.
    fn create(&mut self, name: &str, mesh: Mesh) -> ObjectHandle;

    fn destroy(&mut self, handle: ObjectHandle) -> SceneResult<()>;

    fn contains(&self, handle: ObjectHandle) -> bool;

    fn name(&self, handle: ObjectHandle) -> SceneResult<&str>;

    /// Renames an object, subject to the same uniqueness rule as `create`.
    fn rename(&mut self, handle: ObjectHandle, name: &str) -> SceneResult<()>;

    fn geometry(&self, handle: ObjectHandle) -> SceneResult<&Mesh>;

    /// Replaces the geometry, keeping identity, transform, modifiers,
    /// materials, name and selection.
    fn set_geometry(&mut self, handle: ObjectHandle, mesh: Mesh) -> SceneResult<()>;

    fn transform(&self, handle: ObjectHandle) -> SceneResult<Transform>;

    fn set_transform(&mut self, handle: ObjectHandle, transform: Transform) -> SceneResult<()>;

    /// Every object whose name starts with any of `prefixes`, in creation
    /// order.
    fn find_by_prefix(&self, prefixes: &[&str]) -> Vec<ObjectHandle>;

    fn set_active(&mut self, handle: ObjectHandle) -> SceneResult<()>;

    fn active(&self) -> Option<ObjectHandle>;

    fn set_selected(&mut self, handle: ObjectHandle, selected: bool) -> SceneResult<()>;

    fn deselect_all(&mut self);

    fn set_smooth_shading(&mut self, handle: ObjectHandle, smooth: bool) -> SceneResult<()>;

    /// Material slot names, by slot index.
    fn materials(&self, handle: ObjectHandle) -> SceneResult<&[String]>;

    /// Appends a material slot and returns its index.
    fn append_material(&mut self, handle: ObjectHandle, material: &str) -> SceneResult<u32>;
}

/// Per-object post-process stack.
pub trait ModifierStack {
    fn attach(
        &mut self,
        handle: ObjectHandle,
        kind: ModifierKind,
        width: f64,
        segments: u32,
    ) -> SceneResult<ModifierRef>;

    /// First modifier of `kind` on the object, if any.
    fn find(&self, handle: ObjectHandle, kind: ModifierKind) -> Option<ModifierRef>;

    fn set_width(&mut self, modifier: ModifierRef, width: f64) -> SceneResult<()>;

    fn modifier(&self, modifier: ModifierRef) -> SceneResult<&Modifier>;
}

/// Host-provided primitive shapes. New objects sit at the origin with an
/// identity transform.
pub trait PrimitiveConstructor {
    fn create_cylinder(&mut self, segments: u32, radius: f64, depth: f64) -> SceneResult<ObjectHandle>;

    fn create_torus(
        &mut self,
        major_radius: f64,
        minor_radius: f64,
        major_segments: u32,
        minor_segments: u32,
    ) -> SceneResult<ObjectHandle>;
}

/// Named appearance descriptors.
pub trait AppearanceStore {
    fn appearance(&self, name: &str) -> Option<&AppearanceDescriptor>;

    fn appearance_mut(&mut self, name: &str) -> Option<&mut AppearanceDescriptor>;

    /// Creates a descriptor with the default surface. An existing descriptor
    /// of the same name is replaced.
    fn create_appearance(&mut self, name: &str) -> &mut AppearanceDescriptor;

    /// Returns the descriptor named `name`, creating it and running `init`
    /// on it only if it does not exist yet.
    fn get_or_create_appearance<F>(&mut self, name: &str, init: F) -> &mut AppearanceDescriptor
    where
        F: FnOnce(&mut AppearanceDescriptor);
}

/// Everything the generators need from a host.
pub trait Host: ObjectStore + ModifierStack + PrimitiveConstructor + AppearanceStore {}

impl<T> Host for T where T: ObjectStore + ModifierStack + PrimitiveConstructor + AppearanceStore {}
