//! # In-Memory Host
//!
//! A self-contained scene implementing every collaborator trait. Used by the
//! tests and by headless callers that only want the resulting meshes.
//!
//! Behaves like an interactive host where it matters to the generators:
//! names are kept unique with `.001` style suffixes, new primitives become
//! the only selected and active object, and destroying the active object
//! clears the active slot.

use std::collections::BTreeMap;

use mechgen_mesh::primitives::{cylinder, torus};
use mechgen_mesh::{Mesh, Transform};
use tracing::debug;

use crate::appearance::{AppearanceDescriptor, AppearanceRegistry};
use crate::error::{SceneError, SceneResult};
use crate::host::{
    AppearanceStore, Modifier, ModifierKind, ModifierRef, ModifierStack, ObjectHandle,
    ObjectStore, PrimitiveConstructor,
};

const CYLINDER_NAME: &str = "Cylinder";
const TORUS_NAME: &str = "Torus";

#[derive(Debug, Clone)]
struct SceneObject {
    name: String,
    mesh: Mesh,
    transform: Transform,
    materials: Vec<String>,
    modifiers: Vec<Modifier>,
    smooth: bool,
    selected: bool,
}

/// Scene held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: BTreeMap<ObjectHandle, SceneObject>,
    next_id: u64,
    active: Option<ObjectHandle>,
    appearances: AppearanceRegistry,
    revision: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Names of live objects in creation order.
    pub fn names(&self) -> Vec<&str> {
        self.objects.values().map(|o| o.name.as_str()).collect()
    }

    pub fn is_selected(&self, handle: ObjectHandle) -> SceneResult<bool> {
        Ok(self.object(handle)?.selected)
    }

    pub fn is_smooth(&self, handle: ObjectHandle) -> SceneResult<bool> {
        Ok(self.object(handle)?.smooth)
    }

    pub fn modifiers(&self, handle: ObjectHandle) -> SceneResult<&[Modifier]> {
        Ok(&self.object(handle)?.modifiers)
    }

    /// Deletes a modifier from its object's stack, as a user would in the
    /// host. Later modifiers on the same object shift down by one.
    pub fn remove_modifier(&mut self, modifier: ModifierRef) -> SceneResult<Modifier> {
        let object = self.object(modifier.object)?;
        if modifier.index >= object.modifiers.len() {
            return Err(SceneError::UnknownModifier(modifier));
        }
        Ok(self.object_mut(modifier.object)?.modifiers.remove(modifier.index))
    }

    pub fn appearances(&self) -> &AppearanceRegistry {
        &self.appearances
    }

    /// Counter bumped by every mutation of objects, modifiers or
    /// descriptors made through the collaborator traits.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn object(&self, handle: ObjectHandle) -> SceneResult<&SceneObject> {
        self.objects
            .get(&handle)
            .ok_or(SceneError::UnknownObject(handle))
    }

    fn object_mut(&mut self, handle: ObjectHandle) -> SceneResult<&mut SceneObject> {
        let object = self
            .objects
            .get_mut(&handle)
            .ok_or(SceneError::UnknownObject(handle))?;
        self.revision += 1;
        Ok(object)
    }

    /// Picks `base`, or the first free `base.NNN`, ignoring `except`.
    fn unique_name(&self, base: &str, except: Option<ObjectHandle>) -> String {
        let taken = |candidate: &str| {
            self.objects
                .iter()
                .any(|(handle, o)| Some(*handle) != except && o.name == candidate)
        };

        if !taken(base) {
            return base.to_string();
        }
        (1u32..)
            .map(|n| format!("{}.{:03}", base, n))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Adds a primitive the way an interactive host does: it becomes the
    /// only selected object and the active one.
    fn add_primitive(&mut self, name: &str, mesh: Mesh) -> ObjectHandle {
        let handle = ObjectStore::create(self, name, mesh);
        self.deselect_all();
        if let Some(object) = self.objects.get_mut(&handle) {
            object.selected = true;
        }
        self.active = Some(handle);
        handle
    }
}

impl ObjectStore for MemoryScene {
    fn create(&mut self, name: &str, mesh: Mesh) -> ObjectHandle {
        let handle = ObjectHandle::new(self.next_id);
        self.next_id += 1;
        self.revision += 1;

        let name = self.unique_name(name, None);
        debug!("creating {} as '{}'", handle, name);
        self.objects.insert(
            handle,
            SceneObject {
                name,
                mesh,
                transform: Transform::IDENTITY,
                materials: Vec::new(),
                modifiers: Vec::new(),
                smooth: false,
                selected: false,
            },
        );
        handle
    }

    fn destroy(&mut self, handle: ObjectHandle) -> SceneResult<()> {
        self.objects
            .remove(&handle)
            .ok_or(SceneError::UnknownObject(handle))?;
        self.revision += 1;
        if self.active == Some(handle) {
            self.active = None;
        }
        Ok(())
    }

    fn contains(&self, handle: ObjectHandle) -> bool {
        self.objects.contains_key(&handle)
    }

    fn name(&self, handle: ObjectHandle) -> SceneResult<&str> {
        Ok(&self.object(handle)?.name)
    }

    fn rename(&mut self, handle: ObjectHandle, name: &str) -> SceneResult<()> {
        self.object(handle)?;
        let name = self.unique_name(name, Some(handle));
        self.object_mut(handle)?.name = name;
        Ok(())
    }

    fn geometry(&self, handle: ObjectHandle) -> SceneResult<&Mesh> {
        Ok(&self.object(handle)?.mesh)
    }

    fn set_geometry(&mut self, handle: ObjectHandle, mesh: Mesh) -> SceneResult<()> {
        self.object_mut(handle)?.mesh = mesh;
        Ok(())
    }

    fn transform(&self, handle: ObjectHandle) -> SceneResult<Transform> {
        Ok(self.object(handle)?.transform)
    }

    fn set_transform(&mut self, handle: ObjectHandle, transform: Transform) -> SceneResult<()> {
        self.object_mut(handle)?.transform = transform;
        Ok(())
    }

    fn find_by_prefix(&self, prefixes: &[&str]) -> Vec<ObjectHandle> {
        self.objects
            .iter()
            .filter(|(_, o)| prefixes.iter().any(|p| o.name.starts_with(p)))
            .map(|(handle, _)| *handle)
            .collect()
    }

    fn set_active(&mut self, handle: ObjectHandle) -> SceneResult<()> {
        self.object_mut(handle)?;
        self.active = Some(handle);
        Ok(())
    }

    fn active(&self) -> Option<ObjectHandle> {
        self.active
    }

    fn set_selected(&mut self, handle: ObjectHandle, selected: bool) -> SceneResult<()> {
        self.object_mut(handle)?.selected = selected;
        Ok(())
    }

    fn deselect_all(&mut self) {
        self.revision += 1;
        self.objects.values_mut().for_each(|o| o.selected = false);
    }

    fn set_smooth_shading(&mut self, handle: ObjectHandle, smooth: bool) -> SceneResult<()> {
        self.object_mut(handle)?.smooth = smooth;
        Ok(())
    }

    fn materials(&self, handle: ObjectHandle) -> SceneResult<&[String]> {
        Ok(&self.object(handle)?.materials)
    }

    fn append_material(&mut self, handle: ObjectHandle, material: &str) -> SceneResult<u32> {
        let object = self.object_mut(handle)?;
        object.materials.push(material.to_string());
        Ok(object.materials.len() as u32 - 1)
    }
}

impl ModifierStack for MemoryScene {
    fn attach(
        &mut self,
        handle: ObjectHandle,
        kind: ModifierKind,
        width: f64,
        segments: u32,
    ) -> SceneResult<ModifierRef> {
        let object = self.object_mut(handle)?;
        object.modifiers.push(Modifier {
            kind,
            name: kind.default_name().to_string(),
            width,
            segments,
        });
        Ok(ModifierRef {
            object: handle,
            index: object.modifiers.len() - 1,
        })
    }

    fn find(&self, handle: ObjectHandle, kind: ModifierKind) -> Option<ModifierRef> {
        let object = self.objects.get(&handle)?;
        object
            .modifiers
            .iter()
            .position(|m| m.kind == kind)
            .map(|index| ModifierRef {
                object: handle,
                index,
            })
    }

    fn set_width(&mut self, modifier: ModifierRef, width: f64) -> SceneResult<()> {
        let object = self.object_mut(modifier.object)?;
        let entry = object
            .modifiers
            .get_mut(modifier.index)
            .ok_or(SceneError::UnknownModifier(modifier))?;
        entry.width = width;
        Ok(())
    }

    fn modifier(&self, modifier: ModifierRef) -> SceneResult<&Modifier> {
        self.object(modifier.object)?
            .modifiers
            .get(modifier.index)
            .ok_or(SceneError::UnknownModifier(modifier))
    }
}

impl PrimitiveConstructor for MemoryScene {
    fn create_cylinder(&mut self, segments: u32, radius: f64, depth: f64) -> SceneResult<ObjectHandle> {
        let mesh = cylinder(segments, radius, depth)?;
        Ok(self.add_primitive(CYLINDER_NAME, mesh))
    }

    fn create_torus(
        &mut self,
        major_radius: f64,
        minor_radius: f64,
        major_segments: u32,
        minor_segments: u32,
    ) -> SceneResult<ObjectHandle> {
        let mesh = torus(major_radius, minor_radius, major_segments, minor_segments)?;
        Ok(self.add_primitive(TORUS_NAME, mesh))
    }
}

impl AppearanceStore for MemoryScene {
    fn appearance(&self, name: &str) -> Option<&AppearanceDescriptor> {
        self.appearances.get(name)
    }

    fn appearance_mut(&mut self, name: &str) -> Option<&mut AppearanceDescriptor> {
        self.appearances.get_mut(name)
    }

    fn create_appearance(&mut self, name: &str) -> &mut AppearanceDescriptor {
        self.revision += 1;
        self.appearances.create(name)
    }

    fn get_or_create_appearance<F>(&mut self, name: &str, init: F) -> &mut AppearanceDescriptor
    where
        F: FnOnce(&mut AppearanceDescriptor),
    {
        if self.appearances.get(name).is_none() {
            self.revision += 1;
        }
        self.appearances.get_or_insert_with(name, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(&[0, 1, 2]);
        mesh
    }

    #[test]
    fn test_names_are_made_unique() {
        let mut scene = MemoryScene::new();
        let a = scene.create("Gear", triangle());
        let b = scene.create("Gear", triangle());
        let c = scene.create("Gear", triangle());
        assert_eq!(scene.name(a).unwrap(), "Gear");
        assert_eq!(scene.name(b).unwrap(), "Gear.001");
        assert_eq!(scene.name(c).unwrap(), "Gear.002");

        // Freed names are reused.
        scene.destroy(a).unwrap();
        let d = scene.create("Gear", triangle());
        assert_eq!(scene.name(d).unwrap(), "Gear");
    }

    #[test]
    fn test_rename_to_own_name_keeps_it() {
        let mut scene = MemoryScene::new();
        let a = scene.create("Rim", triangle());
        scene.rename(a, "Rim").unwrap();
        assert_eq!(scene.name(a).unwrap(), "Rim");
    }

    #[test]
    fn test_stale_handle_fails() {
        let mut scene = MemoryScene::new();
        let a = scene.create("Gear", triangle());
        scene.destroy(a).unwrap();
        assert!(!scene.contains(a));
        assert!(matches!(
            scene.set_geometry(a, triangle()),
            Err(SceneError::UnknownObject(h)) if h == a
        ));
        assert!(scene.destroy(a).is_err());
    }

    #[test]
    fn test_failed_mutation_keeps_revision() {
        let mut scene = MemoryScene::new();
        let a = scene.create("Gear", triangle());
        scene.destroy(a).unwrap();
        let revision = scene.revision();

        assert!(scene.rename(a, "Other").is_err());
        assert!(scene.set_selected(a, true).is_err());
        assert!(scene.set_transform(a, Transform::default()).is_err());
        assert!(scene.set_geometry(a, triangle()).is_err());
        assert_eq!(scene.revision(), revision);
    }

    #[test]
    fn test_remove_modifier() {
        let mut scene = MemoryScene::new();
        let a = scene.create("Gear", triangle());
        let bevel = scene.attach(a, ModifierKind::Bevel, 0.1, 2).unwrap();
        let revision = scene.revision();

        let removed = scene.remove_modifier(bevel).unwrap();
        assert_eq!(removed.width, 0.1);
        assert!(scene.find(a, ModifierKind::Bevel).is_none());
        assert_eq!(scene.revision(), revision + 1);

        assert!(matches!(
            scene.remove_modifier(bevel),
            Err(SceneError::UnknownModifier(_))
        ));
        assert_eq!(scene.revision(), revision + 1);
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut scene = MemoryScene::new();
        let a = scene.create("A", triangle());
        scene.destroy(a).unwrap();
        let b = scene.create("A", triangle());
        assert_ne!(a, b);
    }

    #[test]
    fn test_destroy_clears_active() {
        let mut scene = MemoryScene::new();
        let a = scene.create("A", triangle());
        scene.set_active(a).unwrap();
        scene.destroy(a).unwrap();
        assert_eq!(scene.active(), None);
    }

    #[test]
    fn test_find_by_prefix() {
        let mut scene = MemoryScene::new();
        let rim = scene.create("Rim", triangle());
        scene.create("Gear", triangle());
        let spoke = scene.create("Spoke_0", triangle());
        let rim_copy = scene.create("Rim", triangle());

        assert_eq!(
            scene.find_by_prefix(&["Rim", "Spoke_"]),
            vec![rim, spoke, rim_copy]
        );
        assert!(scene.find_by_prefix(&["Tire"]).is_empty());
    }

    #[test]
    fn test_primitive_becomes_active_and_only_selection() {
        let mut scene = MemoryScene::new();
        let first = scene.create_cylinder(8, 1.0, 1.0).unwrap();
        let second = scene.create_torus(1.0, 0.1, 8, 4).unwrap();

        assert_eq!(scene.name(first).unwrap(), "Cylinder");
        assert_eq!(scene.name(second).unwrap(), "Torus");
        assert_eq!(scene.active(), Some(second));
        assert!(!scene.is_selected(first).unwrap());
        assert!(scene.is_selected(second).unwrap());
        assert_eq!(scene.transform(second).unwrap(), Transform::IDENTITY);
    }

    #[test]
    fn test_primitive_errors_propagate() {
        let mut scene = MemoryScene::new();
        assert!(matches!(
            scene.create_cylinder(2, 1.0, 1.0),
            Err(SceneError::Primitive(_))
        ));
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_modifier_lookup() {
        let mut scene = MemoryScene::new();
        let a = scene.create("Gear", triangle());
        assert_eq!(scene.find(a, ModifierKind::Bevel), None);

        let bevel = scene.attach(a, ModifierKind::Bevel, 0.05, 2).unwrap();
        assert_eq!(scene.find(a, ModifierKind::Bevel), Some(bevel));

        scene.set_width(bevel, 0.2).unwrap();
        let modifier = scene.modifier(bevel).unwrap();
        assert_eq!(modifier.name, "Bevel");
        assert_eq!(modifier.width, 0.2);
        assert_eq!(modifier.segments, 2);

        let missing = ModifierRef { object: a, index: 3 };
        assert!(matches!(
            scene.set_width(missing, 0.1),
            Err(SceneError::UnknownModifier(_))
        ));
    }

    #[test]
    fn test_material_slots() {
        let mut scene = MemoryScene::new();
        let a = scene.create("Rim", triangle());
        assert_eq!(scene.append_material(a, "RimMaterial").unwrap(), 0);
        assert_eq!(scene.append_material(a, "TireMaterial").unwrap(), 1);
        assert_eq!(scene.materials(a).unwrap(), ["RimMaterial", "TireMaterial"]);
    }

    #[test]
    fn test_reads_do_not_bump_revision() {
        let mut scene = MemoryScene::new();
        let a = scene.create("A", triangle());
        let revision = scene.revision();

        let _ = scene.name(a);
        let _ = scene.geometry(a);
        let _ = scene.find_by_prefix(&["A"]);
        let _ = scene.find(a, ModifierKind::Bevel);
        assert_eq!(scene.revision(), revision);

        scene.set_smooth_shading(a, true).unwrap();
        assert!(scene.revision() > revision);
    }
}
