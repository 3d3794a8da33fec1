//! # Parameter Sets
//!
//! Validated scalar inputs for the gear and wheel builders.
//!
//! Construction is the single validation point: out-of-range values are
//! clamped into their declared range, values no range can repair are
//! rejected. Builders trust whatever a parameter set hands them.
//!
//! Both sets (de)serialize as flat settings documents. Missing fields take
//! their defaults and loaded values go through the same validation.

use config::constants::{
    GEAR_BEVEL_DEFAULT, GEAR_BEVEL_MAX, GEAR_BEVEL_MIN, GEAR_DEPTH_DEFAULT, GEAR_DEPTH_MAX,
    GEAR_DEPTH_MIN, GEAR_RADIUS_DEFAULT, GEAR_RADIUS_MAX, GEAR_RADIUS_MIN, GEAR_TEETH_DEFAULT,
    GEAR_TEETH_MAX, GEAR_TEETH_MIN, GEAR_TOOTH_HEIGHT_DEFAULT, GEAR_TOOTH_HEIGHT_MAX,
    GEAR_TOOTH_HEIGHT_MIN, TIRE_WIDTH_ALLOWANCE, WHEEL_APPLY_MATERIALS_DEFAULT,
    WHEEL_RIM_RADIUS_DEFAULT, WHEEL_RIM_WIDTH_DEFAULT, WHEEL_SPOKE_COUNT_DEFAULT,
    WHEEL_SPOKE_COUNT_MAX, WHEEL_SPOKE_COUNT_MIN, WHEEL_TIRE_THICKNESS_DEFAULT,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ParameterError;

/// Clamps a float into `[min, max]`, rejecting NaN and infinities.
fn clamp_float(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { name, value });
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{}: {} outside [{}, {}], clamping to {}", name, value, min, max, clamped);
    }
    Ok(clamped)
}

/// Clamps a count into `[min, max]`.
fn clamp_count(name: &'static str, value: u32, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{}: {} outside [{}, {}], clamping to {}", name, value, min, max, clamped);
    }
    clamped
}

/// Rejects lengths that are not finite and strictly positive.
fn positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        Err(ParameterError::NotFinite { name, value })
    } else if value <= 0.0 {
        Err(ParameterError::NonPositive { name, value })
    } else {
        Ok(value)
    }
}

// =============================================================================
// GEAR
// =============================================================================

/// Inputs of the gear builder.
///
/// # Example
///
/// ```rust
/// use mechgen_mesh::GearParameters;
///
/// // Teeth are clamped into [3, 100].
/// let params = GearParameters::new(2, 1.0, 0.2, 0.3, 0.05).unwrap();
/// assert_eq!(params.teeth(), 3);
///
/// // A tooth as tall as the radius is rejected.
/// assert!(GearParameters::new(12, 0.5, 0.2, 0.5, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GearSettings", into = "GearSettings")]
pub struct GearParameters {
    teeth: u32,
    radius: f64,
    depth: f64,
    tooth_height: f64,
    bevel_width: f64,
}

impl GearParameters {
    /// Validates and clamps a full gear parameter set.
    pub fn new(
        teeth: u32,
        radius: f64,
        depth: f64,
        tooth_height: f64,
        bevel_width: f64,
    ) -> Result<Self, ParameterError> {
        let teeth = clamp_count("teeth", teeth, GEAR_TEETH_MIN, GEAR_TEETH_MAX);
        let radius = clamp_float("radius", radius, GEAR_RADIUS_MIN, GEAR_RADIUS_MAX)?;
        let depth = clamp_float("depth", depth, GEAR_DEPTH_MIN, GEAR_DEPTH_MAX)?;
        let tooth_height = clamp_float(
            "tooth_height",
            tooth_height,
            GEAR_TOOTH_HEIGHT_MIN,
            GEAR_TOOTH_HEIGHT_MAX,
        )?;
        let bevel_width = clamp_float("bevel_width", bevel_width, GEAR_BEVEL_MIN, GEAR_BEVEL_MAX)?;

        if tooth_height >= radius {
            return Err(ParameterError::ToothHeightExceedsRadius {
                tooth_height,
                radius,
            });
        }

        Ok(Self {
            teeth,
            radius,
            depth,
            tooth_height,
            bevel_width,
        })
    }

    /// Number of teeth.
    #[inline]
    pub fn teeth(&self) -> u32 {
        self.teeth
    }

    /// Outer (tooth tip) radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Extrusion depth.
    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Radial height of each tooth.
    #[inline]
    pub fn tooth_height(&self) -> f64 {
        self.tooth_height
    }

    /// Width forwarded to the edge-rounding modifier.
    #[inline]
    pub fn bevel_width(&self) -> f64 {
        self.bevel_width
    }
}

impl Default for GearParameters {
    fn default() -> Self {
        Self {
            teeth: GEAR_TEETH_DEFAULT,
            radius: GEAR_RADIUS_DEFAULT,
            depth: GEAR_DEPTH_DEFAULT,
            tooth_height: GEAR_TOOTH_HEIGHT_DEFAULT,
            bevel_width: GEAR_BEVEL_DEFAULT,
        }
    }
}

/// Unvalidated settings document for [`GearParameters`].
///
/// Missing fields take their defaults. Convert with `GearParameters::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearSettings {
    pub teeth: u32,
    pub radius: f64,
    pub depth: f64,
    pub tooth_height: f64,
    pub bevel_width: f64,
}

impl Default for GearSettings {
    fn default() -> Self {
        GearParameters::default().into()
    }
}

impl From<GearParameters> for GearSettings {
    fn from(p: GearParameters) -> Self {
        Self {
            teeth: p.teeth,
            radius: p.radius,
            depth: p.depth,
            tooth_height: p.tooth_height,
            bevel_width: p.bevel_width,
        }
    }
}

impl TryFrom<GearSettings> for GearParameters {
    type Error = ParameterError;

    fn try_from(s: GearSettings) -> Result<Self, Self::Error> {
        GearParameters::new(s.teeth, s.radius, s.depth, s.tooth_height, s.bevel_width)
    }
}

// =============================================================================
// WHEEL
// =============================================================================

/// Inputs of the wheel assembler.
///
/// Lengths have no upper bound but must be strictly positive. The spoke
/// count is clamped into `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WheelSettings", into = "WheelSettings")]
pub struct WheelParameters {
    rim_radius: f64,
    rim_width: f64,
    tire_thickness: f64,
    spoke_count: u32,
    apply_materials: bool,
}

impl WheelParameters {
    /// Validates a full wheel parameter set.
    pub fn new(
        rim_radius: f64,
        rim_width: f64,
        tire_thickness: f64,
        spoke_count: u32,
        apply_materials: bool,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            rim_radius: positive("rim_radius", rim_radius)?,
            rim_width: positive("rim_width", rim_width)?,
            tire_thickness: positive("tire_thickness", tire_thickness)?,
            spoke_count: clamp_count(
                "spoke_count",
                spoke_count,
                WHEEL_SPOKE_COUNT_MIN,
                WHEEL_SPOKE_COUNT_MAX,
            ),
            apply_materials,
        })
    }

    /// Radius of the rim cylinder.
    #[inline]
    pub fn rim_radius(&self) -> f64 {
        self.rim_radius
    }

    /// Depth of the rim cylinder.
    #[inline]
    pub fn rim_width(&self) -> f64 {
        self.rim_width
    }

    /// Radial thickness of the tire beyond the rim.
    #[inline]
    pub fn tire_thickness(&self) -> f64 {
        self.tire_thickness
    }

    /// Number of spokes.
    #[inline]
    pub fn spoke_count(&self) -> u32 {
        self.spoke_count
    }

    /// Whether appearance descriptors are attached to the parts.
    #[inline]
    pub fn apply_materials(&self) -> bool {
        self.apply_materials
    }

    /// Major radius of the tire torus.
    #[inline]
    pub fn tire_outer_radius(&self) -> f64 {
        self.rim_radius + self.tire_thickness
    }

    /// Width the tire is scaled to, slightly wider than the rim.
    #[inline]
    pub fn tire_width(&self) -> f64 {
        self.rim_width + TIRE_WIDTH_ALLOWANCE
    }
}

impl Default for WheelParameters {
    fn default() -> Self {
        Self {
            rim_radius: WHEEL_RIM_RADIUS_DEFAULT,
            rim_width: WHEEL_RIM_WIDTH_DEFAULT,
            tire_thickness: WHEEL_TIRE_THICKNESS_DEFAULT,
            spoke_count: WHEEL_SPOKE_COUNT_DEFAULT,
            apply_materials: WHEEL_APPLY_MATERIALS_DEFAULT,
        }
    }
}

/// Unvalidated settings document for [`WheelParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    pub rim_radius: f64,
    pub rim_width: f64,
    pub tire_thickness: f64,
    pub spoke_count: u32,
    pub apply_materials: bool,
}

impl Default for WheelSettings {
    fn default() -> Self {
        WheelParameters::default().into()
    }
}

impl From<WheelParameters> for WheelSettings {
    fn from(p: WheelParameters) -> Self {
        Self {
            rim_radius: p.rim_radius,
            rim_width: p.rim_width,
            tire_thickness: p.tire_thickness,
            spoke_count: p.spoke_count,
            apply_materials: p.apply_materials,
        }
    }
}

impl TryFrom<WheelSettings> for WheelParameters {
    type Error = ParameterError;

    fn try_from(s: WheelSettings) -> Result<Self, Self::Error> {
        WheelParameters::new(
            s.rim_radius,
            s.rim_width,
            s.tire_thickness,
            s.spoke_count,
            s.apply_materials,
        )
    }
}
