//! # Gear Regeneration
//!
//! Creates gear objects and regenerates the tracked one in place.
//!
//! A [`GearSession`] tracks at most one gear. Parameter edits rebuild that
//! gear's mesh and swap it into the same object, so transform, modifiers,
//! material slots, name and selection survive any number of edits.
//!
//! Adding a gear while one is tracked starts tracking the new one and leaves
//! the old object in the scene, untracked. It is not destroyed.

use config::constants::{BEVEL_SEGMENTS, GEAR_OBJECT_NAME};
use mechgen_mesh::gear::build_gear_from;
use mechgen_mesh::GearParameters;
use tracing::{debug, info};

use crate::error::SceneResult;
use crate::host::{ModifierKind, ModifierStack, ObjectHandle, ObjectStore};

/// Holds the gear that parameter edits apply to.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GearSession {
    active: Option<ObjectHandle>,
}

impl GearSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tracked gear, if any.
    pub fn active(&self) -> Option<ObjectHandle> {
        self.active
    }

    /// Stops tracking the current gear without touching the scene.
    pub fn release(&mut self) -> Option<ObjectHandle> {
        self.active.take()
    }

    /// Creates a new gear object and tracks it.
    ///
    /// The object is made active and selected, gets a bevel modifier of
    /// `bevel_width` with two segments, and is smooth shaded.
    pub fn add_gear<H>(&mut self, host: &mut H, params: &GearParameters) -> SceneResult<ObjectHandle>
    where
        H: ObjectStore + ModifierStack + ?Sized,
    {
        let mesh = build_gear_from(params);
        let handle = host.create(GEAR_OBJECT_NAME, mesh);
        host.set_active(handle)?;
        host.set_selected(handle, true)?;
        host.attach(handle, ModifierKind::Bevel, params.bevel_width(), BEVEL_SEGMENTS)?;
        host.set_smooth_shading(handle, true)?;

        if let Some(previous) = self.active.replace(handle) {
            debug!("releasing tracked gear {} without destroying it", previous);
        }
        info!(
            "added gear {} ({} teeth, radius {})",
            handle,
            params.teeth(),
            params.radius()
        );
        Ok(handle)
    }

    /// Rebuilds the tracked gear in place.
    ///
    /// Returns `false` without touching the host when no gear is tracked.
    /// If the tracked object was removed behind the session's back, the
    /// host's error is returned.
    pub fn update_gear<H>(&mut self, host: &mut H, params: &GearParameters) -> SceneResult<bool>
    where
        H: ObjectStore + ModifierStack + ?Sized,
    {
        let Some(handle) = self.active else {
            debug!("no tracked gear, skipping update");
            return Ok(false);
        };

        host.set_geometry(handle, build_gear_from(params))?;
        if let Some(bevel) = host.find(handle, ModifierKind::Bevel) {
            host.set_width(bevel, params.bevel_width())?;
        }

        debug!("regenerated gear {} in place", handle);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryScene;

    #[test]
    fn test_update_without_gear_is_noop() {
        let mut scene = MemoryScene::new();
        let mut session = GearSession::new();
        assert!(!session.update_gear(&mut scene, &GearParameters::default()).unwrap());
        assert_eq!(scene.revision(), 0);
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_add_gear_sets_up_object() {
        let mut scene = MemoryScene::new();
        let mut session = GearSession::new();
        let handle = session.add_gear(&mut scene, &GearParameters::default()).unwrap();

        assert_eq!(session.active(), Some(handle));
        assert_eq!(scene.name(handle).unwrap(), "Gear");
        assert_eq!(scene.active(), Some(handle));
        assert!(scene.is_selected(handle).unwrap());
        assert!(scene.is_smooth(handle).unwrap());
        assert_eq!(scene.geometry(handle).unwrap().vertex_count(), 48);

        let bevel = scene.find(handle, ModifierKind::Bevel).unwrap();
        let modifier = scene.modifier(bevel).unwrap();
        assert_eq!(modifier.width, 0.05);
        assert_eq!(modifier.segments, 2);
    }

    #[test]
    fn test_update_after_bevel_removed() {
        let mut scene = MemoryScene::new();
        let mut session = GearSession::new();
        let handle = session.add_gear(&mut scene, &GearParameters::default()).unwrap();
        let bevel = scene.find(handle, ModifierKind::Bevel).unwrap();
        scene.remove_modifier(bevel).unwrap();

        let params = GearParameters::new(20, 1.0, 0.2, 0.3, 0.2).unwrap();
        assert!(session.update_gear(&mut scene, &params).unwrap());

        assert_eq!(scene.geometry(handle).unwrap().vertex_count(), 80);
        assert_eq!(scene.geometry(handle).unwrap().face_count(), 61);
        assert!(scene.modifiers(handle).unwrap().is_empty());
        assert!(scene.find(handle, ModifierKind::Bevel).is_none());
    }

    #[test]
    fn test_release_forgets_without_destroying() {
        let mut scene = MemoryScene::new();
        let mut session = GearSession::new();
        let handle = session.add_gear(&mut scene, &GearParameters::default()).unwrap();

        assert_eq!(session.release(), Some(handle));
        assert_eq!(session.active(), None);
        assert!(scene.contains(handle));
        assert!(!session.update_gear(&mut scene, &GearParameters::default()).unwrap());
    }
}
