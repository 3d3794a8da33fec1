//! # Appearance Provider
//!
//! Named surface descriptors for the wheel parts, kept in an explicit
//! registry with get-or-create semantics.
//!
//! A descriptor is a small attribute set (base color, metallic, roughness)
//! plus an optional detail graph: nodes with scalar inputs, wired together
//! by named sockets.
//!
//! ## Idempotence
//!
//! [`get_or_create_metal`] and [`get_or_create_tire_surface`] only build a
//! descriptor when none of that name exists. An existing descriptor is
//! returned as is, including any edits made to it since.

use std::collections::BTreeMap;

use config::constants::{
    DEFAULT_BASE_COLOR, DEFAULT_METALLIC, DEFAULT_ROUGHNESS, RIM_MATERIAL_NAME, RIM_METALLIC,
    RIM_ROUGHNESS, TIRE_BASE_COLOR, TIRE_BUMP_STRENGTH, TIRE_MATERIAL_NAME, TIRE_NOISE_DETAIL,
    TIRE_NOISE_SCALE, TIRE_ROUGHNESS,
};
use tracing::debug;

use crate::host::AppearanceStore;

/// Attribute key for the RGBA base color.
pub const BASE_COLOR: &str = "base_color";
/// Attribute key for the metallic factor.
pub const METALLIC: &str = "metallic";
/// Attribute key for the roughness factor.
pub const ROUGHNESS: &str = "roughness";

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Value of a descriptor attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Scalar(f64),
    Color([f32; 4]),
}

/// Stage of a detail graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Procedural noise field.
    Noise,
    /// Turns a height input into a perturbed normal.
    Bump,
    /// The descriptor's own surface.
    Surface,
    /// Final output.
    Output,
}

/// One node of a detail graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailNode {
    pub kind: NodeKind,
    pub inputs: BTreeMap<String, f64>,
}

impl DetailNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            inputs: BTreeMap::new(),
        }
    }

    /// Sets a scalar input.
    pub fn with_input(mut self, socket: &str, value: f64) -> Self {
        self.inputs.insert(socket.to_string(), value);
        self
    }
}

/// A connection from an output socket to an input socket.
///
/// Nodes are referred to by their index in the graph's node list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLink {
    pub from_node: usize,
    pub from_socket: String,
    pub to_node: usize,
    pub to_socket: String,
}

impl DetailLink {
    pub fn new(from_node: usize, from_socket: &str, to_node: usize, to_socket: &str) -> Self {
        Self {
            from_node,
            from_socket: from_socket.to_string(),
            to_node,
            to_socket: to_socket.to_string(),
        }
    }
}

/// Nodes and links of a descriptor's detail chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailGraph {
    pub nodes: Vec<DetailNode>,
    pub links: Vec<DetailLink>,
}

impl DetailGraph {
    /// First node of `kind`, with its index.
    pub fn node(&self, kind: NodeKind) -> Option<(usize, &DetailNode)> {
        self.nodes.iter().enumerate().find(|(_, n)| n.kind == kind)
    }
}

/// A named, reusable surface description.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceDescriptor {
    name: String,
    attributes: BTreeMap<String, AttributeValue>,
    detail: Option<DetailGraph>,
}

impl AppearanceDescriptor {
    /// Creates a descriptor with the default surface: light grey,
    /// non-metallic, medium roughness.
    pub fn new(name: impl Into<String>) -> Self {
        let mut descriptor = Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            detail: None,
        };
        descriptor.set_attribute(BASE_COLOR, AttributeValue::Color(DEFAULT_BASE_COLOR));
        descriptor.set_attribute(METALLIC, AttributeValue::Scalar(DEFAULT_METALLIC));
        descriptor.set_attribute(ROUGHNESS, AttributeValue::Scalar(DEFAULT_ROUGHNESS));
        descriptor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<AttributeValue> {
        self.attributes.get(key).copied()
    }

    /// Attribute as a scalar, `None` if absent or a color.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        match self.attribute(key)? {
            AttributeValue::Scalar(value) => Some(value),
            AttributeValue::Color(_) => None,
        }
    }

    /// Attribute as a color, `None` if absent or a scalar.
    pub fn color(&self, key: &str) -> Option<[f32; 4]> {
        match self.attribute(key)? {
            AttributeValue::Color(value) => Some(value),
            AttributeValue::Scalar(_) => None,
        }
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    pub fn set_attribute(&mut self, key: &str, value: AttributeValue) {
        self.attributes.insert(key.to_string(), value);
    }

    /// Replaces the detail graph.
    pub fn build_detail_graph(&mut self, nodes: Vec<DetailNode>, links: Vec<DetailLink>) {
        self.detail = Some(DetailGraph { nodes, links });
    }

    pub fn detail_graph(&self) -> Option<&DetailGraph> {
        self.detail.as_ref()
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Name-keyed descriptor store.
#[derive(Debug, Default)]
pub struct AppearanceRegistry {
    descriptors: BTreeMap<String, AppearanceDescriptor>,
}

impl AppearanceRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AppearanceDescriptor> {
        self.descriptors.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AppearanceDescriptor> {
        self.descriptors.get_mut(name)
    }

    /// Creates a default descriptor, replacing any existing one.
    pub fn create(&mut self, name: &str) -> &mut AppearanceDescriptor {
        let slot = self
            .descriptors
            .entry(name.to_string())
            .or_insert_with(|| AppearanceDescriptor::new(name));
        *slot = AppearanceDescriptor::new(name);
        slot
    }

    /// Returns the descriptor named `name`, creating it with `init` applied
    /// to the default surface if it does not exist.
    pub fn get_or_insert_with<F>(&mut self, name: &str, init: F) -> &mut AppearanceDescriptor
    where
        F: FnOnce(&mut AppearanceDescriptor),
    {
        self.descriptors.entry(name.to_string()).or_insert_with(|| {
            debug!("creating appearance descriptor '{}'", name);
            let mut descriptor = AppearanceDescriptor::new(name);
            init(&mut descriptor);
            descriptor
        })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl AppearanceStore for AppearanceRegistry {
    fn appearance(&self, name: &str) -> Option<&AppearanceDescriptor> {
        self.get(name)
    }

    fn appearance_mut(&mut self, name: &str) -> Option<&mut AppearanceDescriptor> {
        self.get_mut(name)
    }

    fn create_appearance(&mut self, name: &str) -> &mut AppearanceDescriptor {
        self.create(name)
    }

    fn get_or_create_appearance<F>(&mut self, name: &str, init: F) -> &mut AppearanceDescriptor
    where
        F: FnOnce(&mut AppearanceDescriptor),
    {
        self.get_or_insert_with(name, init)
    }
}

// =============================================================================
// PRESETS
// =============================================================================

/// Polished metal for the rim and spokes.
pub fn get_or_create_metal<S>(store: &mut S) -> &mut AppearanceDescriptor
where
    S: AppearanceStore + ?Sized,
{
    store.get_or_create_appearance(RIM_MATERIAL_NAME, |descriptor| {
        descriptor.set_attribute(METALLIC, AttributeValue::Scalar(RIM_METALLIC));
        descriptor.set_attribute(ROUGHNESS, AttributeValue::Scalar(RIM_ROUGHNESS));
    })
}

/// Dark rubber with a noise-driven bump on the surface normal.
///
/// ```text
/// Noise.Fac → Bump.Height
/// Bump.Normal → Surface.Normal
/// Surface.BSDF → Output.Surface
/// ```
pub fn get_or_create_tire_surface<S>(store: &mut S) -> &mut AppearanceDescriptor
where
    S: AppearanceStore + ?Sized,
{
    store.get_or_create_appearance(TIRE_MATERIAL_NAME, |descriptor| {
        descriptor.set_attribute(BASE_COLOR, AttributeValue::Color(TIRE_BASE_COLOR));
        descriptor.set_attribute(ROUGHNESS, AttributeValue::Scalar(TIRE_ROUGHNESS));

        let nodes = vec![
            DetailNode::new(NodeKind::Output),
            DetailNode::new(NodeKind::Surface),
            DetailNode::new(NodeKind::Noise)
                .with_input("Scale", TIRE_NOISE_SCALE)
                .with_input("Detail", TIRE_NOISE_DETAIL),
            DetailNode::new(NodeKind::Bump).with_input("Strength", TIRE_BUMP_STRENGTH),
        ];
        let links = vec![
            DetailLink::new(2, "Fac", 3, "Height"),
            DetailLink::new(3, "Normal", 1, "Normal"),
            DetailLink::new(1, "BSDF", 0, "Surface"),
        ];
        descriptor.build_detail_graph(nodes, links);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surface() {
        let descriptor = AppearanceDescriptor::new("Plain");
        assert_eq!(descriptor.name(), "Plain");
        assert_eq!(descriptor.color(BASE_COLOR), Some(DEFAULT_BASE_COLOR));
        assert_eq!(descriptor.scalar(METALLIC), Some(0.0));
        assert_eq!(descriptor.scalar(ROUGHNESS), Some(0.5));
        assert!(descriptor.detail_graph().is_none());
    }

    #[test]
    fn test_kind_mismatch_reads_none() {
        let descriptor = AppearanceDescriptor::new("Plain");
        assert_eq!(descriptor.scalar(BASE_COLOR), None);
        assert_eq!(descriptor.color(METALLIC), None);
        assert_eq!(descriptor.scalar("missing"), None);
    }

    #[test]
    fn test_metal_preset() {
        let mut registry = AppearanceRegistry::new();
        let metal = get_or_create_metal(&mut registry);
        assert_eq!(metal.name(), "RimMaterial");
        assert_eq!(metal.scalar(METALLIC), Some(1.0));
        assert_eq!(metal.scalar(ROUGHNESS), Some(0.3));
        assert_eq!(metal.color(BASE_COLOR), Some(DEFAULT_BASE_COLOR));
    }

    #[test]
    fn test_metal_is_idempotent() {
        let mut registry = AppearanceRegistry::new();
        let first = get_or_create_metal(&mut registry).clone();
        let second = get_or_create_metal(&mut registry).clone();
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);

        get_or_create_metal(&mut registry).set_attribute(ROUGHNESS, AttributeValue::Scalar(0.9));
        let third = get_or_create_metal(&mut registry);
        assert_eq!(third.scalar(ROUGHNESS), Some(0.9));
    }

    #[test]
    fn test_tire_graph_wiring() {
        let mut registry = AppearanceRegistry::new();
        let tire = get_or_create_tire_surface(&mut registry);
        assert_eq!(tire.color(BASE_COLOR), Some([0.02, 0.02, 0.02, 1.0]));
        assert_eq!(tire.scalar(ROUGHNESS), Some(0.7));

        let graph = tire.detail_graph().unwrap();
        let (noise, noise_node) = graph.node(NodeKind::Noise).unwrap();
        let (bump, bump_node) = graph.node(NodeKind::Bump).unwrap();
        let (surface, _) = graph.node(NodeKind::Surface).unwrap();
        let (output, _) = graph.node(NodeKind::Output).unwrap();

        assert_eq!(noise_node.inputs["Scale"], 5.0);
        assert_eq!(noise_node.inputs["Detail"], 2.0);
        assert_eq!(bump_node.inputs["Strength"], 0.3);
        assert_eq!(
            graph.links,
            vec![
                DetailLink::new(noise, "Fac", bump, "Height"),
                DetailLink::new(bump, "Normal", surface, "Normal"),
                DetailLink::new(surface, "BSDF", output, "Surface"),
            ]
        );
    }

    #[test]
    fn test_tire_surface_keeps_user_edits() {
        let mut registry = AppearanceRegistry::new();
        let graph = get_or_create_tire_surface(&mut registry)
            .detail_graph()
            .cloned()
            .unwrap();

        get_or_create_tire_surface(&mut registry)
            .set_attribute(ROUGHNESS, AttributeValue::Scalar(0.11));
        let again = get_or_create_tire_surface(&mut registry);
        assert_eq!(again.scalar(ROUGHNESS), Some(0.11));
        assert_eq!(again.color(BASE_COLOR), Some(TIRE_BASE_COLOR));
        assert_eq!(again.detail_graph(), Some(&graph));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_replaces() {
        let mut registry = AppearanceRegistry::new();
        get_or_create_metal(&mut registry);
        let fresh = registry.create(RIM_MATERIAL_NAME);
        assert_eq!(fresh.scalar(METALLIC), Some(0.0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_presets_coexist() {
        let mut registry = AppearanceRegistry::new();
        get_or_create_metal(&mut registry);
        get_or_create_tire_surface(&mut registry);
        assert_eq!(registry.len(), 2);
        assert!(registry.get(TIRE_MATERIAL_NAME).is_some());
    }
}
