//! # Wheel Assembly
//!
//! Builds a wheel from host primitives and merges it into one object.
//!
//! ## Parts
//!
//! - **Rim**: a 64-segment cylinder along Z, `rim_width` deep
//! - **Tire**: a torus around the rim, scaled along Z to the tire width
//! - **Spokes**: thin cylinders laid radially between rim and tire
//!
//! ## Regeneration
//!
//! Every run starts from scratch: all objects named `Rim*`, `Tire*` or
//! `Spoke_*` are destroyed first, then the parts are rebuilt and joined into
//! the rim. The merged object keeps the name `Rim`, so the next run's
//! cleanup removes it too.

use std::ops::Range;

use config::constants::{
    approx_zero, RIM_OBJECT_NAME, RIM_SEGMENTS, SPOKE_NAME_PREFIX, SPOKE_RADIUS, SPOKE_SEGMENTS,
    TIRE_MAJOR_SEGMENTS, TIRE_MINOR_RADIUS, TIRE_MINOR_SEGMENTS, TIRE_OBJECT_NAME,
    WHEEL_PART_PREFIXES,
};
use glam::DVec3;
use mechgen_mesh::wheel::{spoke_placements, tire_z_scale};
use mechgen_mesh::WheelParameters;
use tracing::{debug, info, warn};

use crate::appearance::{get_or_create_metal, get_or_create_tire_surface};
use crate::error::SceneResult;
use crate::host::{Host, ObjectHandle, ObjectStore, PrimitiveConstructor};

// =============================================================================
// PART BUILDERS
// =============================================================================

/// Creates the rim cylinder and names it `Rim`.
pub fn build_rim<H>(host: &mut H, radius: f64, width: f64) -> SceneResult<ObjectHandle>
where
    H: ObjectStore + PrimitiveConstructor + ?Sized,
{
    let handle = host.create_cylinder(RIM_SEGMENTS, radius, width)?;
    host.rename(handle, RIM_OBJECT_NAME)?;
    Ok(handle)
}

/// Creates the tire torus and names it `Tire`.
///
/// The tube has a fixed radius of 0.05; `width` is reached by scaling the
/// object along Z by `width / 0.1`.
pub fn build_tire<H>(host: &mut H, outer_radius: f64, width: f64) -> SceneResult<ObjectHandle>
where
    H: ObjectStore + PrimitiveConstructor + ?Sized,
{
    let handle = host.create_torus(
        outer_radius,
        TIRE_MINOR_RADIUS,
        TIRE_MAJOR_SEGMENTS,
        TIRE_MINOR_SEGMENTS,
    )?;
    host.rename(handle, TIRE_OBJECT_NAME)?;

    let mut transform = host.transform(handle)?;
    transform.scale = DVec3::new(1.0, 1.0, tire_z_scale(width));
    host.set_transform(handle, transform)?;
    Ok(handle)
}

/// Creates `count` spokes named `Spoke_0..`, evenly spaced around Z.
///
/// A `tire_thickness` at or below 0.05 gives spokes of zero or negative
/// length; they are created anyway.
pub fn build_spokes<H>(
    host: &mut H,
    rim_radius: f64,
    tire_thickness: f64,
    count: u32,
) -> SceneResult<Vec<ObjectHandle>>
where
    H: ObjectStore + PrimitiveConstructor + ?Sized,
{
    let placements = spoke_placements(rim_radius, tire_thickness, count);
    if let Some(first) = placements.first() {
        if first.length < 0.0 || approx_zero(first.length) {
            warn!(
                "tire_thickness {} leaves no room for spokes (length {})",
                tire_thickness, first.length
            );
        }
    }

    placements
        .into_iter()
        .map(|placement| {
            let handle = host.create_cylinder(SPOKE_SEGMENTS, SPOKE_RADIUS, placement.length)?;
            host.rename(handle, &format!("{}{}", SPOKE_NAME_PREFIX, placement.index))?;
            host.set_transform(handle, placement.transform)?;
            Ok(handle)
        })
        .collect()
}

// =============================================================================
// ASSEMBLER
// =============================================================================

/// Faces of the merged wheel that came from one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSpan {
    pub name: String,
    pub faces: Range<usize>,
}

/// Result of one assembly run.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelAssembly {
    /// The merged object.
    pub handle: ObjectHandle,
    /// Provenance of the merged faces, rim first.
    pub parts: Vec<PartSpan>,
}

impl WheelAssembly {
    /// Span of the part with exactly this name.
    pub fn part(&self, name: &str) -> Option<&PartSpan> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Spans of every spoke.
    pub fn spokes(&self) -> impl Iterator<Item = &PartSpan> {
        self.parts
            .iter()
            .filter(|p| p.name.starts_with(SPOKE_NAME_PREFIX))
    }
}

/// Destroy-and-rebuild wheel pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct WheelAssembler;

impl WheelAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Removes the previous wheel, builds a new one and merges it into a
    /// single object at the world origin.
    ///
    /// Host failures abort the run and leave already created parts behind;
    /// the next run's cleanup removes them.
    pub fn assemble<H>(&self, host: &mut H, params: &WheelParameters) -> SceneResult<WheelAssembly>
    where
        H: Host + ?Sized,
    {
        let stale = host.find_by_prefix(&WHEEL_PART_PREFIXES);
        debug!("removing {} previous wheel parts", stale.len());
        for handle in stale {
            host.destroy(handle)?;
        }

        let rim = build_rim(host, params.rim_radius(), params.rim_width())?;
        let tire = build_tire(host, params.tire_outer_radius(), params.tire_width())?;
        let spokes = build_spokes(
            host,
            params.rim_radius(),
            params.tire_thickness(),
            params.spoke_count(),
        )?;

        if params.apply_materials() {
            let metal = get_or_create_metal(&mut *host).name().to_string();
            host.append_material(rim, &metal)?;
            for &spoke in &spokes {
                host.append_material(spoke, &metal)?;
            }
            let rubber = get_or_create_tire_surface(&mut *host).name().to_string();
            host.append_material(tire, &rubber)?;
        }

        let mut parts = Vec::with_capacity(spokes.len() + 2);
        parts.push(rim);
        parts.push(tire);
        parts.extend(spokes);

        host.deselect_all();
        for &part in &parts {
            host.set_selected(part, true)?;
        }
        host.set_active(rim)?;

        let spans = join(host, rim, &parts)?;

        let mut transform = host.transform(rim)?;
        transform.location = DVec3::ZERO;
        host.set_transform(rim, transform)?;

        info!("assembled wheel {} from {} parts", rim, spans.len());
        Ok(WheelAssembly {
            handle: rim,
            parts: spans,
        })
    }
}

/// Joins `parts` into `target` and destroys everything but `target`.
///
/// Each part's transform is baked into its vertices relative to `target`.
/// Material slots are unified by name; faces keep the material they had.
fn join<H>(host: &mut H, target: ObjectHandle, parts: &[ObjectHandle]) -> SceneResult<Vec<PartSpan>>
where
    H: ObjectStore + ?Sized,
{
    let target_inverse = host.transform(target)?.matrix().inverse();
    let mut merged = host.geometry(target)?.clone();
    let mut materials = host.materials(target)?.to_vec();
    let existing_materials = materials.len();

    let mut spans = vec![PartSpan {
        name: host.name(target)?.to_string(),
        faces: 0..merged.face_count(),
    }];

    for &part in parts.iter().filter(|&&p| p != target) {
        let mut mesh = host.geometry(part)?.clone();
        mesh.transform(&(target_inverse * host.transform(part)?.matrix()));

        let slot_map: Vec<u32> = host
            .materials(part)?
            .iter()
            .map(|name| match materials.iter().position(|m| m == name) {
                Some(slot) => slot as u32,
                None => {
                    materials.push(name.clone());
                    materials.len() as u32 - 1
                }
            })
            .collect();

        let faces = merged.merge_with_slots(&mesh, &slot_map);
        spans.push(PartSpan {
            name: host.name(part)?.to_string(),
            faces,
        });
        host.destroy(part)?;
    }

    for name in &materials[existing_materials..] {
        host.append_material(target, name)?;
    }
    debug!(
        "joined {} parts into {} ({} faces)",
        spans.len(),
        target,
        merged.face_count()
    );
    host.set_geometry(target, merged)?;
    Ok(spans)
}
