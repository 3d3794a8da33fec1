//! # Configuration Constants
//!
//! Centralized constants for the gear and wheel generators.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Gear**: Parameter ranges and defaults, bevel post-process settings
//! - **Wheel**: Parameter defaults and the fixed part construction conventions
//! - **Names**: Object, modifier and appearance names shared with the host
//! - **Appearance**: Surface attribute values for the wheel materials

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when checking generated geometry against its parameters.
///
/// Trigonometric placement accumulates a few ulps of error, so geometric
/// assertions compare against this rather than [`EPSILON`].
pub const GEOMETRY_TOLERANCE: f64 = 1e-9;

// =============================================================================
// GEAR CONSTANTS
// =============================================================================

/// Minimum number of gear teeth.
///
/// Three teeth is the smallest count that still produces a non-degenerate
/// profile ring.
pub const GEAR_TEETH_MIN: u32 = 3;

/// Maximum number of gear teeth.
pub const GEAR_TEETH_MAX: u32 = 100;

/// Default number of gear teeth.
pub const GEAR_TEETH_DEFAULT: u32 = 12;

/// Minimum outer gear radius.
pub const GEAR_RADIUS_MIN: f64 = 0.1;

/// Maximum outer gear radius.
pub const GEAR_RADIUS_MAX: f64 = 10.0;

/// Default outer gear radius.
pub const GEAR_RADIUS_DEFAULT: f64 = 1.0;

/// Minimum gear thickness (extrusion depth).
pub const GEAR_DEPTH_MIN: f64 = 0.01;

/// Maximum gear thickness (extrusion depth).
pub const GEAR_DEPTH_MAX: f64 = 2.0;

/// Default gear thickness (extrusion depth).
pub const GEAR_DEPTH_DEFAULT: f64 = 0.2;

/// Minimum tooth height.
pub const GEAR_TOOTH_HEIGHT_MIN: f64 = 0.01;

/// Maximum tooth height.
pub const GEAR_TOOTH_HEIGHT_MAX: f64 = 1.0;

/// Default tooth height.
///
/// # Example
///
/// ```rust
/// use config::constants::{GEAR_RADIUS_DEFAULT, GEAR_TOOTH_HEIGHT_DEFAULT};
///
/// // The default root radius stays positive.
/// assert!(GEAR_RADIUS_DEFAULT - GEAR_TOOTH_HEIGHT_DEFAULT > 0.0);
/// ```
pub const GEAR_TOOTH_HEIGHT_DEFAULT: f64 = 0.3;

/// Minimum bevel width forwarded to the edge-rounding modifier.
pub const GEAR_BEVEL_MIN: f64 = 0.0;

/// Maximum bevel width forwarded to the edge-rounding modifier.
pub const GEAR_BEVEL_MAX: f64 = 0.5;

/// Default bevel width forwarded to the edge-rounding modifier.
pub const GEAR_BEVEL_DEFAULT: f64 = 0.05;

/// Subdivision level of the edge-rounding modifier attached to new gears.
pub const BEVEL_SEGMENTS: u32 = 2;

// =============================================================================
// WHEEL CONSTANTS
// =============================================================================

/// Default rim radius.
pub const WHEEL_RIM_RADIUS_DEFAULT: f64 = 0.5;

/// Default rim width (cylinder depth).
pub const WHEEL_RIM_WIDTH_DEFAULT: f64 = 0.2;

/// Default tire thickness, measured radially from the rim.
pub const WHEEL_TIRE_THICKNESS_DEFAULT: f64 = 0.1;

/// Minimum number of spokes.
pub const WHEEL_SPOKE_COUNT_MIN: u32 = 1;

/// Maximum number of spokes.
pub const WHEEL_SPOKE_COUNT_MAX: u32 = 100;

/// Default number of spokes.
pub const WHEEL_SPOKE_COUNT_DEFAULT: u32 = 6;

/// Whether materials are attached to the wheel parts by default.
pub const WHEEL_APPLY_MATERIALS_DEFAULT: bool = true;

/// Radial segment count of the rim cylinder.
pub const RIM_SEGMENTS: u32 = 64;

/// Major (ring) segment count of the tire torus.
pub const TIRE_MAJOR_SEGMENTS: u32 = 64;

/// Minor (tube) segment count of the tire torus.
pub const TIRE_MINOR_SEGMENTS: u32 = 12;

/// Tube radius of the tire torus before scaling.
pub const TIRE_MINOR_RADIUS: f64 = 0.05;

/// Tube diameter the tire scale is measured against.
///
/// The tire is scaled along its thickness axis by `width / TIRE_REFERENCE_WIDTH`.
/// This is a fixed convention rather than a free parameter.
///
/// # Example
///
/// ```rust
/// use config::constants::{TIRE_MINOR_RADIUS, TIRE_REFERENCE_WIDTH};
///
/// // An unscaled tube is exactly one reference width thick.
/// assert_eq!(TIRE_MINOR_RADIUS * 2.0, TIRE_REFERENCE_WIDTH);
/// ```
pub const TIRE_REFERENCE_WIDTH: f64 = 0.1;

/// Extra width given to the tire over the rim width.
pub const TIRE_WIDTH_ALLOWANCE: f64 = 0.05;

/// Distance between the tire's outer radius and the point where spokes end.
pub const TIRE_INNER_INSET: f64 = 0.05;

/// Radius of each spoke cylinder.
pub const SPOKE_RADIUS: f64 = 0.01;

/// Radial segment count of each spoke cylinder.
pub const SPOKE_SEGMENTS: u32 = 32;

// =============================================================================
// NAME CONSTANTS
// =============================================================================

/// Name given to newly created gear objects and their meshes.
pub const GEAR_OBJECT_NAME: &str = "Gear";

/// Name of the edge-rounding modifier on gear objects.
pub const BEVEL_MODIFIER_NAME: &str = "Bevel";

/// Name of the rim part, also kept by the merged wheel object.
pub const RIM_OBJECT_NAME: &str = "Rim";

/// Name of the tire part.
pub const TIRE_OBJECT_NAME: &str = "Tire";

/// Prefix of the spoke parts (`Spoke_0`, `Spoke_1`, ...).
pub const SPOKE_NAME_PREFIX: &str = "Spoke_";

/// Prefixes of every object owned by the wheel pipeline.
///
/// Objects whose name starts with any of these are removed before a wheel
/// is rebuilt.
pub const WHEEL_PART_PREFIXES: [&str; 3] = [RIM_OBJECT_NAME, TIRE_OBJECT_NAME, SPOKE_NAME_PREFIX];

/// Name of the metallic appearance shared by rim and spokes.
pub const RIM_MATERIAL_NAME: &str = "RimMaterial";

/// Name of the rubber appearance used by the tire.
pub const TIRE_MATERIAL_NAME: &str = "TireMaterial";

// =============================================================================
// APPEARANCE CONSTANTS
// =============================================================================

/// Base color of a freshly created surface (RGBA, linear).
pub const DEFAULT_BASE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Metallic factor of a freshly created surface.
pub const DEFAULT_METALLIC: f64 = 0.0;

/// Roughness of a freshly created surface.
pub const DEFAULT_ROUGHNESS: f64 = 0.5;

/// Metallic factor of the rim material.
pub const RIM_METALLIC: f64 = 1.0;

/// Roughness of the rim material.
pub const RIM_ROUGHNESS: f64 = 0.3;

/// Base color of the tire material (RGBA, linear).
pub const TIRE_BASE_COLOR: [f32; 4] = [0.02, 0.02, 0.02, 1.0];

/// Roughness of the tire material.
pub const TIRE_ROUGHNESS: f64 = 0.7;

/// Scale of the noise field driving the tire bump.
pub const TIRE_NOISE_SCALE: f64 = 5.0;

/// Detail of the noise field driving the tire bump.
pub const TIRE_NOISE_DETAIL: f64 = 2.0;

/// Strength of the tire bump stage.
pub const TIRE_BUMP_STRENGTH: f64 = 0.3;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
