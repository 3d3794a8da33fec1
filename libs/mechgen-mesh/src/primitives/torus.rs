//! # Torus Primitive
//!
//! Generates a ring torus around the Z axis.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a torus in the XY plane, centered at the origin.
///
/// # Arguments
///
/// * `major_radius` - Distance from the center to the middle of the tube
/// * `minor_radius` - Radius of the tube
/// * `major_segments` - Segments around the ring
/// * `minor_segments` - Segments around the tube
///
/// Vertex `(i, j)` sits at ring angle `θ = 2πi/major_segments` and tube
/// angle `φ = 2πj/minor_segments`; every face is a quad.
///
/// # Example
///
/// ```rust
/// use mechgen_mesh::primitives::torus;
///
/// let mesh = torus(0.6, 0.05, 64, 12).unwrap();
/// assert_eq!(mesh.vertex_count(), 64 * 12);
/// assert!(mesh.is_closed());
/// ```
pub fn torus(
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
) -> MeshResult<Mesh> {
    if major_segments < 3 || minor_segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Torus segments must be at least 3: major={}, minor={}",
            major_segments, minor_segments
        )));
    }

    let count = (major_segments * minor_segments) as usize;
    let mut mesh = Mesh::with_capacity(count, count);

    for i in 0..major_segments {
        let theta = 2.0 * PI * i as f64 / major_segments as f64;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..minor_segments {
            let phi = 2.0 * PI * j as f64 / minor_segments as f64;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let ring = major_radius + minor_radius * cos_phi;
            mesh.add_vertex(DVec3::new(ring * cos_theta, ring * sin_theta, minor_radius * sin_phi));
        }
    }

    let index = |i: u32, j: u32| i * minor_segments + j;
    for i in 0..major_segments {
        let next_i = (i + 1) % major_segments;
        for j in 0..minor_segments {
            let next_j = (j + 1) % minor_segments;
            mesh.add_face(&[index(i, j), index(next_i, j), index(next_i, next_j), index(i, next_j)]);
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_torus_counts_and_closure() {
        let mesh = torus(1.0, 0.25, 8, 6).unwrap();
        assert_eq!(mesh.vertex_count(), 48);
        assert_eq!(mesh.face_count(), 48);
        mesh.validate().expect("valid topology");
        assert!(mesh.is_closed());
    }

    #[test]
    fn test_torus_extent() {
        let mesh = torus(0.6, 0.05, 64, 12).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_abs_diff_eq!(max.x, 0.65, epsilon = 1e-12);
        assert_abs_diff_eq!(min.x, -0.65, epsilon = 1e-12);
        assert_abs_diff_eq!(max.z, 0.05, epsilon = 1e-3);
    }

    #[test]
    fn test_torus_outer_faces_point_outward() {
        let mesh = torus(1.0, 0.25, 16, 8).unwrap();
        // Face (0, 0) straddles the outer equator at θ ≈ 0.
        let normal = mesh.face_normal(0);
        assert!(normal.x > 0.5, "normal {:?}", normal);
    }

    #[test]
    fn test_torus_too_few_segments() {
        assert!(torus(1.0, 0.25, 2, 8).is_err());
        assert!(torus(1.0, 0.25, 8, 2).is_err());
    }
}
