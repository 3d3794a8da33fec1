//! # Mesh Data Structure
//!
//! Polygon mesh representation: vertex positions, faces as ordered index
//! lists, and a material slot per face.

use std::collections::HashMap;
use std::ops::Range;

use glam::{DMat4, DVec3};

use crate::error::{MeshError, MeshResult};

/// A polygon mesh with vertices, faces and per-face material slots.
///
/// Faces are ordered lists of vertex indices into this mesh's own vertex
/// list. Quads and triangles are the norm, caps may be arbitrary n-gons.
/// Winding is counter-clockwise when viewed from outside.
///
/// # Example
///
/// ```rust
/// use mechgen_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(&[0, 1, 2, 3]);
/// assert_eq!(mesh.face_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Face index lists
    faces: Vec<Vec<u32>>,
    /// Material slot of each face, parallel to `faces`
    face_slots: Vec<u32>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            face_slots: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            face_slots: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face in material slot 0 and returns its index.
    pub fn add_face(&mut self, indices: &[u32]) -> usize {
        let index = self.faces.len();
        self.faces.push(indices.to_vec());
        self.face_slots.push(0);
        index
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &[u32] {
        &self.faces[index]
    }

    /// Returns the material slot of every face.
    #[inline]
    pub fn face_slots(&self) -> &[u32] {
        &self.face_slots
    }

    /// Moves every face into the given material slot.
    pub fn assign_slot(&mut self, slot: u32) {
        self.face_slots.iter_mut().for_each(|s| *s = slot);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Merges another mesh into this one, keeping its material slots.
    ///
    /// Returns the range of face indices the merged faces now occupy.
    pub fn merge(&mut self, other: &Mesh) -> Range<usize> {
        self.append(other, |slot| slot)
    }

    /// Merges another mesh into this one, remapping its material slots.
    ///
    /// Slot `s` of `other` becomes `slot_map[s]`; slots outside the map fall
    /// back to slot 0.
    pub fn merge_with_slots(&mut self, other: &Mesh, slot_map: &[u32]) -> Range<usize> {
        self.append(other, |slot| slot_map.get(slot as usize).copied().unwrap_or(0))
    }

    fn append(&mut self, other: &Mesh, map_slot: impl Fn(u32) -> u32) -> Range<usize> {
        let offset = self.vertices.len() as u32;
        let first_face = self.faces.len();

        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|face| face.iter().map(|&i| i + offset).collect::<Vec<_>>()),
        );
        self.face_slots
            .extend(other.face_slots.iter().map(|&slot| map_slot(slot)));

        first_face..self.faces.len()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every face has at least 3 indices
    /// - All face indices are valid
    /// - No face repeats a vertex
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len() as u32;

        for (face_index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::invalid_topology(format!(
                    "face {} has {} indices",
                    face_index,
                    face.len()
                )));
            }

            if let Some(&bad) = face.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {} references vertex {} (vertex count {})",
                    face_index, bad, vertex_count
                )));
            }

            for (k, index) in face.iter().enumerate() {
                if face[k + 1..].contains(index) {
                    return Err(MeshError::invalid_topology(format!(
                        "face {} repeats vertex {}",
                        face_index, index
                    )));
                }
            }
        }

        Ok(())
    }

    /// Counts every directed edge of every face.
    fn directed_edges(&self) -> HashMap<(u32, u32), usize> {
        let mut edges = HashMap::new();
        for face in &self.faces {
            for (k, &a) in face.iter().enumerate() {
                let b = face[(k + 1) % face.len()];
                *edges.entry((a, b)).or_insert(0) += 1;
            }
        }
        edges
    }

    /// Returns the directed edges that have no opposite half-edge.
    ///
    /// The result is sorted so it can be compared between builds.
    pub fn boundary_edges(&self) -> Vec<[u32; 2]> {
        let edges = self.directed_edges();
        let mut open: Vec<[u32; 2]> = edges
            .keys()
            .filter(|(a, b)| !edges.contains_key(&(*b, *a)))
            .map(|&(a, b)| [a, b])
            .collect();
        open.sort_unstable();
        open
    }

    /// Returns true if the mesh is closed and consistently wound.
    ///
    /// Every directed edge must occur exactly once and be matched by exactly
    /// one opposite edge, i.e. every undirected edge is shared by exactly two
    /// faces that traverse it in opposite directions.
    pub fn is_closed(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        let edges = self.directed_edges();
        edges
            .iter()
            .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    /// Computes the unit normal of a face using Newell's method.
    ///
    /// Returns zero for degenerate faces.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let face = &self.faces[index];
        let mut normal = DVec3::ZERO;
        for (k, &i) in face.iter().enumerate() {
            let current = self.vertices[i as usize];
            let next = self.vertices[face[(k + 1) % face.len()] as usize];
            normal.x += (current.y - next.y) * (current.z + next.z);
            normal.y += (current.z - next.z) * (current.x + next.x);
            normal.z += (current.x - next.x) * (current.y + next.y);
        }
        normal.normalize_or_zero()
    }
}
