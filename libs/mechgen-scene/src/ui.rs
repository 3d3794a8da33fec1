//! # UI Surface
//!
//! Parameter panels and the register/unregister lifecycle of the two
//! generator tools.
//!
//! A [`Tool`] owns a generator and, while registered, a parameter set.
//! Editing a parameter goes through the parameter set's validating
//! constructor and then runs the generator's regeneration callback; the
//! panel's action button runs the explicit generate step.
//!
//! ```text
//! set_param ──► ParameterSet::set ──► Generator::regenerate
//! invoke    ──────────────────────► Generator::generate
//! ```

use config::constants::{
    GEAR_BEVEL_DEFAULT, GEAR_BEVEL_MAX, GEAR_BEVEL_MIN, GEAR_DEPTH_DEFAULT, GEAR_DEPTH_MAX,
    GEAR_DEPTH_MIN, GEAR_RADIUS_DEFAULT, GEAR_RADIUS_MAX, GEAR_RADIUS_MIN, GEAR_TEETH_DEFAULT,
    GEAR_TEETH_MAX, GEAR_TEETH_MIN, GEAR_TOOTH_HEIGHT_DEFAULT, GEAR_TOOTH_HEIGHT_MAX,
    GEAR_TOOTH_HEIGHT_MIN, WHEEL_APPLY_MATERIALS_DEFAULT, WHEEL_RIM_RADIUS_DEFAULT,
    WHEEL_RIM_WIDTH_DEFAULT, WHEEL_SPOKE_COUNT_DEFAULT, WHEEL_SPOKE_COUNT_MAX,
    WHEEL_SPOKE_COUNT_MIN, WHEEL_TIRE_THICKNESS_DEFAULT,
};
use mechgen_mesh::{GearParameters, WheelParameters};
use tracing::{debug, info};

use crate::error::{SceneError, SceneResult};
use crate::gear::GearSession;
use crate::host::{Host, ObjectHandle};
use crate::wheel::WheelAssembler;

// =============================================================================
// WIDGETS
// =============================================================================

/// A value edited through a panel widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Name of the value's kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
        }
    }
}

/// Input control kind with its declared range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetKind {
    Int { min: i64, max: i64 },
    /// `length` marks values shown in scene length units.
    Float { min: Option<f64>, max: Option<f64>, length: bool },
    Bool,
}

/// One declared panel input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Widget {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: WidgetKind,
    pub default: ParamValue,
}

/// Panel metadata shown by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub category: &'static str,
    pub action: &'static str,
}

/// A parameter set editable through widgets.
pub trait ParameterSet: Default {
    /// Declared inputs, in display order.
    fn widgets() -> Vec<Widget>;

    fn get(&self, key: &str) -> SceneResult<ParamValue>;

    /// Applies one edit through the validating constructor. On error the set
    /// is left unchanged.
    fn set(&mut self, key: &str, value: ParamValue) -> SceneResult<()>;
}

fn expect_int(key: &str, value: ParamValue) -> SceneResult<u32> {
    match value {
        ParamValue::Int(v) => Ok(v.clamp(0, i64::from(u32::MAX)) as u32),
        other => Err(kind_mismatch(key, "int", other)),
    }
}

fn expect_float(key: &str, value: ParamValue) -> SceneResult<f64> {
    match value {
        ParamValue::Float(v) => Ok(v),
        other => Err(kind_mismatch(key, "float", other)),
    }
}

fn expect_bool(key: &str, value: ParamValue) -> SceneResult<bool> {
    match value {
        ParamValue::Bool(v) => Ok(v),
        other => Err(kind_mismatch(key, "bool", other)),
    }
}

fn kind_mismatch(key: &str, expected: &'static str, found: ParamValue) -> SceneError {
    SceneError::ParameterKind {
        key: key.to_string(),
        expected,
        found: found.kind_name(),
    }
}

fn length(min: f64, max: f64) -> WidgetKind {
    WidgetKind::Float {
        min: Some(min),
        max: Some(max),
        length: true,
    }
}

const UNBOUNDED: WidgetKind = WidgetKind::Float {
    min: None,
    max: None,
    length: false,
};

impl ParameterSet for GearParameters {
    fn widgets() -> Vec<Widget> {
        vec![
            Widget {
                key: "teeth",
                label: "Teeth",
                kind: WidgetKind::Int {
                    min: GEAR_TEETH_MIN.into(),
                    max: GEAR_TEETH_MAX.into(),
                },
                default: ParamValue::Int(GEAR_TEETH_DEFAULT.into()),
            },
            Widget {
                key: "radius",
                label: "Radius",
                kind: length(GEAR_RADIUS_MIN, GEAR_RADIUS_MAX),
                default: ParamValue::Float(GEAR_RADIUS_DEFAULT),
            },
            Widget {
                key: "depth",
                label: "Thickness",
                kind: length(GEAR_DEPTH_MIN, GEAR_DEPTH_MAX),
                default: ParamValue::Float(GEAR_DEPTH_DEFAULT),
            },
            Widget {
                key: "tooth_height",
                label: "Tooth Height",
                kind: length(GEAR_TOOTH_HEIGHT_MIN, GEAR_TOOTH_HEIGHT_MAX),
                default: ParamValue::Float(GEAR_TOOTH_HEIGHT_DEFAULT),
            },
            Widget {
                key: "bevel_width",
                label: "Bevel",
                kind: length(GEAR_BEVEL_MIN, GEAR_BEVEL_MAX),
                default: ParamValue::Float(GEAR_BEVEL_DEFAULT),
            },
        ]
    }

    fn get(&self, key: &str) -> SceneResult<ParamValue> {
        Ok(match key {
            "teeth" => ParamValue::Int(self.teeth().into()),
            "radius" => ParamValue::Float(self.radius()),
            "depth" => ParamValue::Float(self.depth()),
            "tooth_height" => ParamValue::Float(self.tooth_height()),
            "bevel_width" => ParamValue::Float(self.bevel_width()),
            _ => return Err(SceneError::unknown_parameter(key)),
        })
    }

    fn set(&mut self, key: &str, value: ParamValue) -> SceneResult<()> {
        let (mut teeth, mut radius, mut depth, mut tooth_height, mut bevel_width) = (
            self.teeth(),
            self.radius(),
            self.depth(),
            self.tooth_height(),
            self.bevel_width(),
        );
        match key {
            "teeth" => teeth = expect_int(key, value)?,
            "radius" => radius = expect_float(key, value)?,
            "depth" => depth = expect_float(key, value)?,
            "tooth_height" => tooth_height = expect_float(key, value)?,
            "bevel_width" => bevel_width = expect_float(key, value)?,
            _ => return Err(SceneError::unknown_parameter(key)),
        }
        *self = GearParameters::new(teeth, radius, depth, tooth_height, bevel_width)?;
        Ok(())
    }
}

impl ParameterSet for WheelParameters {
    fn widgets() -> Vec<Widget> {
        vec![
            Widget {
                key: "rim_radius",
                label: "Rim Radius",
                kind: UNBOUNDED,
                default: ParamValue::Float(WHEEL_RIM_RADIUS_DEFAULT),
            },
            Widget {
                key: "rim_width",
                label: "Rim Width",
                kind: UNBOUNDED,
                default: ParamValue::Float(WHEEL_RIM_WIDTH_DEFAULT),
            },
            Widget {
                key: "tire_thickness",
                label: "Tire Thickness",
                kind: UNBOUNDED,
                default: ParamValue::Float(WHEEL_TIRE_THICKNESS_DEFAULT),
            },
            Widget {
                key: "spoke_count",
                label: "Spoke Count",
                kind: WidgetKind::Int {
                    min: WHEEL_SPOKE_COUNT_MIN.into(),
                    max: WHEEL_SPOKE_COUNT_MAX.into(),
                },
                default: ParamValue::Int(WHEEL_SPOKE_COUNT_DEFAULT.into()),
            },
            Widget {
                key: "apply_materials",
                label: "Apply Materials",
                kind: WidgetKind::Bool,
                default: ParamValue::Bool(WHEEL_APPLY_MATERIALS_DEFAULT),
            },
        ]
    }

    fn get(&self, key: &str) -> SceneResult<ParamValue> {
        Ok(match key {
            "rim_radius" => ParamValue::Float(self.rim_radius()),
            "rim_width" => ParamValue::Float(self.rim_width()),
            "tire_thickness" => ParamValue::Float(self.tire_thickness()),
            "spoke_count" => ParamValue::Int(self.spoke_count().into()),
            "apply_materials" => ParamValue::Bool(self.apply_materials()),
            _ => return Err(SceneError::unknown_parameter(key)),
        })
    }

    fn set(&mut self, key: &str, value: ParamValue) -> SceneResult<()> {
        let (mut rim_radius, mut rim_width, mut tire_thickness, mut spoke_count, mut apply_materials) = (
            self.rim_radius(),
            self.rim_width(),
            self.tire_thickness(),
            self.spoke_count(),
            self.apply_materials(),
        );
        match key {
            "rim_radius" => rim_radius = expect_float(key, value)?,
            "rim_width" => rim_width = expect_float(key, value)?,
            "tire_thickness" => tire_thickness = expect_float(key, value)?,
            "spoke_count" => spoke_count = expect_int(key, value)?,
            "apply_materials" => apply_materials = expect_bool(key, value)?,
            _ => return Err(SceneError::unknown_parameter(key)),
        }
        *self = WheelParameters::new(rim_radius, rim_width, tire_thickness, spoke_count, apply_materials)?;
        Ok(())
    }
}

// =============================================================================
// GENERATORS
// =============================================================================

/// How a pipeline reacts to a parameter edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regeneration {
    /// Swap new geometry into the existing object.
    InPlace,
    /// Destroy the previous result and build a new one.
    Rebuild,
}

/// A pipeline driven by a panel.
pub trait Generator {
    type Params: ParameterSet;

    const PANEL: Panel;
    const REGENERATION: Regeneration;

    /// The panel's action button.
    fn generate<H>(&mut self, host: &mut H, params: &Self::Params) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized;

    /// Called after every parameter edit.
    fn regenerate<H>(&mut self, host: &mut H, params: &Self::Params) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized;
}

impl Generator for GearSession {
    type Params = GearParameters;

    const PANEL: Panel = Panel {
        title: "Gear Generator",
        category: "Create",
        action: "Add Gear",
    };
    const REGENERATION: Regeneration = Regeneration::InPlace;

    fn generate<H>(&mut self, host: &mut H, params: &GearParameters) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized,
    {
        self.add_gear(host, params).map(Some)
    }

    fn regenerate<H>(&mut self, host: &mut H, params: &GearParameters) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized,
    {
        let updated = self.update_gear(host, params)?;
        Ok(self.active().filter(|_| updated))
    }
}

impl Generator for WheelAssembler {
    type Params = WheelParameters;

    const PANEL: Panel = Panel {
        title: "Wheel Generator",
        category: "WheelGen",
        action: "Generate Wheel",
    };
    const REGENERATION: Regeneration = Regeneration::Rebuild;

    fn generate<H>(&mut self, host: &mut H, params: &WheelParameters) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized,
    {
        Ok(Some(self.assemble(host, params)?.handle))
    }

    fn regenerate<H>(&mut self, host: &mut H, params: &WheelParameters) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized,
    {
        self.generate(host, params)
    }
}

// =============================================================================
// TOOL
// =============================================================================

/// A generator plus its registered parameter set.
#[derive(Debug)]
pub struct Tool<G: Generator> {
    generator: G,
    params: Option<G::Params>,
}

/// The gear panel.
pub type GearTool = Tool<GearSession>;

/// The wheel panel.
pub type WheelTool = Tool<WheelAssembler>;

impl<G: Generator + Default> Default for Tool<G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<G: Generator> Tool<G> {
    /// Creates an unregistered tool.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            params: None,
        }
    }

    pub fn panel(&self) -> Panel {
        G::PANEL
    }

    pub fn regeneration(&self) -> Regeneration {
        G::REGENERATION
    }

    pub fn widgets(&self) -> Vec<Widget> {
        G::Params::widgets()
    }

    pub fn is_registered(&self) -> bool {
        self.params.is_some()
    }

    /// Attaches a default parameter set. Registering twice resets it.
    pub fn register(&mut self) {
        info!("registering '{}'", G::PANEL.title);
        self.params = Some(G::Params::default());
    }

    /// Detaches the parameter set and returns it.
    pub fn unregister(&mut self) -> Option<G::Params> {
        info!("unregistering '{}'", G::PANEL.title);
        self.params.take()
    }

    pub fn params(&self) -> SceneResult<&G::Params> {
        self.params
            .as_ref()
            .ok_or(SceneError::ToolNotRegistered(G::PANEL.title))
    }

    /// Applies one parameter edit, then regenerates.
    pub fn set_param<H>(&mut self, host: &mut H, key: &str, value: ParamValue) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized,
    {
        let params = self
            .params
            .as_mut()
            .ok_or(SceneError::ToolNotRegistered(G::PANEL.title))?;
        params.set(key, value)?;
        debug!("'{}' set {} = {:?}", G::PANEL.title, key, value);
        self.generator.regenerate(host, params)
    }

    /// Runs the panel's action.
    pub fn invoke<H>(&mut self, host: &mut H) -> SceneResult<Option<ObjectHandle>>
    where
        H: Host + ?Sized,
    {
        let params = self
            .params
            .as_ref()
            .ok_or(SceneError::ToolNotRegistered(G::PANEL.title))?;
        debug!("'{}' action '{}'", G::PANEL.title, G::PANEL.action);
        self.generator.generate(host, params)
    }
}
