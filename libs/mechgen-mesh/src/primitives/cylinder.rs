//! # Cylinder Primitive
//!
//! Generates a capped cylinder with n-gon caps.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a capped cylinder centered at the origin along the Z axis.
///
/// # Arguments
///
/// * `segments` - Number of segments around circumference
/// * `radius` - Radius of both caps
/// * `depth` - Length along Z, from `-depth/2` to `depth/2`
///
/// The mesh has `2 * segments` vertices (bottom ring, then top ring),
/// `segments` side quads and two n-gon caps.
///
/// A zero or negative `depth` is not rejected: the result is flat or
/// inside-out, which callers placing degenerate spokes accept.
///
/// # Example
///
/// ```rust
/// use mechgen_mesh::primitives::cylinder;
///
/// let mesh = cylinder(64, 0.5, 0.2).unwrap();
/// assert_eq!(mesh.vertex_count(), 128);
/// assert_eq!(mesh.face_count(), 66);
/// ```
pub fn cylinder(segments: u32, radius: f64, depth: f64) -> MeshResult<Mesh> {
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let n = segments;
    let half = depth / 2.0;
    let mut mesh = Mesh::with_capacity(2 * n as usize, n as usize + 2);

    for z in [-half, half] {
        for j in 0..n {
            let theta = 2.0 * PI * j as f64 / n as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z));
        }
    }

    // Side quads: bottom j, bottom j+1, top j+1, top j
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_face(&[j, j_next, n + j_next, n + j]);
    }

    let top: Vec<u32> = (n..2 * n).collect();
    mesh.add_face(&top);

    let bottom: Vec<u32> = (0..n).rev().collect();
    mesh.add_face(&bottom);

    Ok(mesh)
}
