//! # Gear Builder
//!
//! Builds the toothed gear disc as an extruded profile ring.
//!
//! ## Layout
//!
//! The profile ring alternates tooth tips and roots in angular order:
//!
//! ```text
//! index 2i     outer tip   angle  i        * 2π/teeth   radius r
//! index 2i+1   inner root  angle (i + 0.5) * 2π/teeth   radius r - tooth_height
//! ```
//!
//! The ring is placed at `z = 0` and copied to `z = -depth`. Faces are one
//! top quad per tooth, an outer and an inner wall quad per tooth, and a
//! single bottom polygon over the whole lower ring in reverse order.
//!
//! With `T = teeth` the result always has `4T` vertices and `3T + 1` faces.
//! The top and the walls are stitched to each other with consistent
//! winding: the top faces +Z, outer walls face away from the axis, inner
//! walls face toward it. The lower ring edges are each used by a single
//! face, so the open edges all lie in the bottom plane.

use std::f64::consts::PI;

use glam::DVec3;
use tracing::debug;

use crate::mesh::Mesh;
use crate::params::GearParameters;

/// Builds a gear mesh from raw scalars.
///
/// `bevel_width` does not affect the geometry; it belongs to the
/// edge-rounding post-process the host applies afterwards.
///
/// Inputs are not validated. A `tooth_height` at or above `radius` collapses
/// or inverts the root ring, and `teeth == 0` yields an empty mesh; neither
/// panics.
///
/// # Example
///
/// ```rust
/// use mechgen_mesh::gear::build_gear;
///
/// let mesh = build_gear(12, 1.0, 0.2, 0.3, 0.05);
/// assert_eq!(mesh.vertex_count(), 48);
/// assert_eq!(mesh.face_count(), 37);
/// ```
pub fn build_gear(teeth: u32, radius: f64, depth: f64, tooth_height: f64, bevel_width: f64) -> Mesh {
    debug!(teeth, radius, depth, tooth_height, bevel_width, "building gear mesh");

    let t = teeth;
    let ring = 2 * t;
    let mut mesh = Mesh::with_capacity(2 * ring as usize, 3 * t as usize + 1);

    if t == 0 {
        return mesh;
    }

    let angle_step = 2.0 * PI / t as f64;
    let inner_radius = radius - tooth_height;

    for i in 0..t {
        let tip = i as f64 * angle_step;
        let root = (i as f64 + 0.5) * angle_step;
        mesh.add_vertex(DVec3::new(radius * tip.cos(), radius * tip.sin(), 0.0));
        mesh.add_vertex(DVec3::new(inner_radius * root.cos(), inner_radius * root.sin(), 0.0));
    }

    for i in 0..t {
        let n = (i + 1) % t;
        mesh.add_face(&[2 * i, 2 * n, 2 * n + 1, 2 * i + 1]);
    }

    // Lower ring
    for k in 0..ring {
        let v = mesh.vertex(k);
        mesh.add_vertex(DVec3::new(v.x, v.y, -depth));
    }

    for i in 0..t {
        let n = (i + 1) % t;
        mesh.add_face(&[2 * n, 2 * i, 2 * i + ring, 2 * n + ring]);
        mesh.add_face(&[2 * i + 1, 2 * n + 1, 2 * n + 1 + ring, 2 * i + 1 + ring]);
    }

    let bottom: Vec<u32> = (0..ring).rev().map(|k| ring + k).collect();
    mesh.add_face(&bottom);

    mesh
}

/// Builds a gear mesh from a validated parameter set.
pub fn build_gear_from(params: &GearParameters) -> Mesh {
    build_gear(
        params.teeth(),
        params.radius(),
        params.depth(),
        params.tooth_height(),
        params.bevel_width(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use config::constants::GEOMETRY_TOLERANCE;

    fn planar_radii(mesh: &Mesh) -> (f64, f64) {
        mesh.vertices()
            .iter()
            .map(|v| v.truncate().length())
            .fold((f64::MAX, f64::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)))
    }

    #[test]
    fn test_counts_for_every_valid_tooth_count() {
        for teeth in 3..=100u32 {
            let mesh = build_gear(teeth, 1.0, 0.2, 0.3, 0.05);
            assert_eq!(mesh.vertex_count(), 4 * teeth as usize);
            assert_eq!(mesh.face_count(), 3 * teeth as usize + 1);
            assert!(mesh
                .faces()
                .iter()
                .flatten()
                .all(|&i| i < 4 * teeth));
        }
    }

    #[test]
    fn test_minimum_teeth_is_valid() {
        let mesh = build_gear(3, 1.0, 0.2, 0.3, 0.0);
        mesh.validate().expect("three teeth form a valid mesh");
        assert_eq!(mesh.face(mesh.face_count() - 1).len(), 6);
    }

    #[test]
    fn test_radial_extent() {
        let mesh = build_gear(12, 1.0, 0.2, 0.3, 0.05);
        let (min, max) = planar_radii(&mesh);
        assert_abs_diff_eq!(max, 1.0, epsilon = GEOMETRY_TOLERANCE);
        assert_abs_diff_eq!(min, 0.7, epsilon = GEOMETRY_TOLERANCE);
    }

    #[test]
    fn test_extrusion_depth() {
        let mesh = build_gear(8, 2.0, 0.5, 0.4, 0.0);
        let (min, max) = mesh.bounding_box();
        assert_eq!(max.z, 0.0);
        assert_eq!(min.z, -0.5);
    }

    #[test]
    fn test_ring_alternates_tip_and_root() {
        let mesh = build_gear(4, 1.0, 0.2, 0.25, 0.0);
        let tip = mesh.vertex(2);
        let root = mesh.vertex(3);
        // Tip 1 sits at 90°, root 1 at 135°.
        assert_abs_diff_eq!(tip.y, 1.0, epsilon = GEOMETRY_TOLERANCE);
        assert_abs_diff_eq!(root.y.atan2(root.x).to_degrees(), 135.0, epsilon = 1e-9);
        assert_abs_diff_eq!(root.truncate().length(), 0.75, epsilon = GEOMETRY_TOLERANCE);
    }

    #[test]
    fn test_face_layout_wraps_around() {
        let mesh = build_gear(5, 1.0, 0.2, 0.3, 0.0);
        // Last top quad connects tooth 4 back to tooth 0.
        assert_eq!(mesh.face(4), &[8, 0, 1, 9]);
        // Last outer and inner walls.
        assert_eq!(mesh.face(13), &[0, 8, 18, 10]);
        assert_eq!(mesh.face(14), &[9, 1, 11, 19]);
        // Bottom polygon lists the lower ring in reverse.
        let bottom: Vec<u32> = (10..20).rev().collect();
        assert_eq!(mesh.face(15), bottom.as_slice());
    }

    #[test]
    fn test_top_and_walls_wind_consistently() {
        let mesh = build_gear(12, 1.0, 0.2, 0.3, 0.0);
        let step = 2.0 * PI / 12.0;

        assert!(mesh.face_normal(0).z > 0.99);

        // Outer wall of tooth 0 spans tips 0..1, inner wall spans roots 0..1.
        let outer_mid = DVec3::new((0.5 * step).cos(), (0.5 * step).sin(), 0.0);
        let inner_mid = DVec3::new(step.cos(), step.sin(), 0.0);
        assert!(mesh.face_normal(12).dot(outer_mid) > 0.99);
        assert!(mesh.face_normal(13).dot(inner_mid) < -0.99);
    }

    #[test]
    fn test_open_edges_lie_in_bottom_plane() {
        let depth = 0.2;
        let mesh = build_gear(12, 1.0, depth, 0.3, 0.0);
        let open = mesh.boundary_edges();
        assert!(!open.is_empty());
        assert!(open
            .iter()
            .flatten()
            .all(|&i| mesh.vertex(i).z == -depth));
    }

    #[test]
    fn test_deterministic() {
        let a = build_gear(17, 3.5, 0.7, 0.9, 0.1);
        let b = build_gear(17, 3.5, 0.7, 0.9, 0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bevel_width_does_not_change_geometry() {
        assert_eq!(build_gear(12, 1.0, 0.2, 0.3, 0.0), build_gear(12, 1.0, 0.2, 0.3, 0.5));
    }

    #[test]
    fn test_oversized_tooth_does_not_panic() {
        let mesh = build_gear(12, 0.5, 0.2, 0.8, 0.0);
        assert_eq!(mesh.vertex_count(), 48);
        let (min, _) = planar_radii(&mesh);
        assert_abs_diff_eq!(min, 0.3, epsilon = GEOMETRY_TOLERANCE);
    }

    #[test]
    fn test_zero_teeth_is_empty() {
        let mesh = build_gear(0, 1.0, 0.2, 0.3, 0.0);
        assert!(mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_build_from_parameters() {
        let params = GearParameters::default();
        assert_eq!(build_gear_from(&params), build_gear(12, 1.0, 0.2, 0.3, 0.05));
    }
}
