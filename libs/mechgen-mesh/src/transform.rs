//! Object placement: location, XYZ Euler rotation and scale.
//!
//! Parts are built at the origin and placed through a [`Transform`]; the
//! wheel assembler bakes these into vertex positions when merging.

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Placement of an object in world space.
///
/// Rotation is stored as XYZ Euler angles in radians: the X rotation is
/// applied first, then Y, then Z.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use mechgen_mesh::Transform;
///
/// let t = Transform::from_location(DVec3::new(1.0, 0.0, 0.0));
/// assert_eq!(t.matrix().transform_point3(DVec3::ZERO), DVec3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub location: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        location: DVec3::ZERO,
        rotation: DVec3::ZERO,
        scale: DVec3::ONE,
    };

    /// Creates a pure translation.
    pub fn from_location(location: DVec3) -> Self {
        Self {
            location,
            ..Self::IDENTITY
        }
    }

    /// Returns the rotation as a quaternion.
    pub fn quat(&self) -> DQuat {
        DQuat::from_rotation_z(self.rotation.z)
            * DQuat::from_rotation_y(self.rotation.y)
            * DQuat::from_rotation_x(self.rotation.x)
    }

    /// Returns the object-to-world matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.quat(), self.location)
    }
}
