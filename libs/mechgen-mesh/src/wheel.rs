//! # Wheel Placement
//!
//! Pure placement math for the wheel parts. The parts themselves are
//! primitives created by the host; this module decides where they go.
//!
//! The wheel axis is Z. Spokes are cylinders laid along X by a quarter turn
//! about Y, then turned about Z to their angle, and centered halfway between
//! the rim and the inner edge of the tire.

use config::constants::{TIRE_INNER_INSET, TIRE_REFERENCE_WIDTH};
use glam::DVec3;

use crate::transform::Transform;

/// Radius at which spokes end, just inside the tire.
#[inline]
pub fn inner_tire_radius(rim_radius: f64, tire_thickness: f64) -> f64 {
    rim_radius + tire_thickness - TIRE_INNER_INSET
}

/// Length of every spoke.
///
/// Zero or negative when `tire_thickness <= 0.05`; callers are expected to
/// keep the thickness above the inset.
#[inline]
pub fn spoke_length(rim_radius: f64, tire_thickness: f64) -> f64 {
    inner_tire_radius(rim_radius, tire_thickness) - rim_radius
}

/// Scale applied to the tire along the wheel axis so its tube is `width`
/// thick.
///
/// # Example
///
/// ```rust
/// use mechgen_mesh::wheel::tire_z_scale;
///
/// assert_eq!(tire_z_scale(0.1), 1.0);
/// assert_eq!(tire_z_scale(0.25), 2.5);
/// ```
#[inline]
pub fn tire_z_scale(width: f64) -> f64 {
    width / TIRE_REFERENCE_WIDTH
}

/// Where one spoke goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpokePlacement {
    /// Position of the spoke in `0..count`.
    pub index: u32,
    /// Angle about the wheel axis, in radians.
    pub angle: f64,
    /// Cylinder depth.
    pub length: f64,
    /// Object transform placing the spoke.
    pub transform: Transform,
}

/// Computes the placement of `count` evenly spaced spokes.
///
/// Spoke `i` sits at `360° * i / count`.
pub fn spoke_placements(rim_radius: f64, tire_thickness: f64, count: u32) -> Vec<SpokePlacement> {
    let length = spoke_length(rim_radius, tire_thickness);
    let center = rim_radius + length / 2.0;

    (0..count)
        .map(|index| {
            let angle = (360.0 / count as f64 * index as f64).to_radians();
            let (sin, cos) = angle.sin_cos();
            SpokePlacement {
                index,
                angle,
                length,
                transform: Transform {
                    location: DVec3::new(center * cos, center * sin, 0.0),
                    rotation: DVec3::new(0.0, 90f64.to_radians(), angle),
                    scale: DVec3::ONE,
                },
            }
        })
        .collect()
}
