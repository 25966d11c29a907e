//! Vertex welding on a fixed decimal grid.
//!
//! Two corners weld iff their coordinates round to the same multiple of
//! `10^-precision` on every axis. One pass, hash-map backed.

use std::collections::HashMap;

use mesh_types::{Mesh, Point3, Vec3, WeldedMesh, WeldedVertex};
use tracing::debug;

use crate::config::MAX_PRECISION;

/// Grid cell of a position at a given precision.
///
/// Each axis stores the bits of the rounded, scaled coordinate. Rounding is
/// exact in `f64`, so distinct cells never share a key at any magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey([u64; 3]);

impl VertexKey {
    /// `scale` is `10^precision`.
    pub fn new(p: &Point3, scale: f64) -> Self {
        Self([
            quantize(p.x, scale),
            quantize(p.y, scale),
            quantize(p.z, scale),
        ])
    }
}

fn quantize(c: f64, scale: f64) -> u64 {
    let q = (c * scale).round();
    // Past f64::MAX the grid no longer applies; fall back to the raw value.
    let q = if q.is_finite() { q } else { c };
    // Adding 0.0 turns -0.0 into 0.0.
    (q + 0.0).to_bits()
}

/// `10^precision`, with `precision` clamped to [`MAX_PRECISION`].
pub fn grid_scale(precision: u32) -> f64 {
    10f64.powi(precision.min(MAX_PRECISION) as i32)
}

/// Assigns indices to positions in first-seen order.
#[derive(Debug)]
pub struct Welder {
    scale: f64,
    index: HashMap<VertexKey, u32>,
    vertices: Vec<WeldedVertex>,
}

impl Welder {
    pub fn new(precision: u32) -> Self {
        Self {
            scale: grid_scale(precision),
            index: HashMap::new(),
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(precision: u32, capacity: usize) -> Self {
        Self {
            scale: grid_scale(precision),
            index: HashMap::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Index of the welded vertex for `position`, allocating one on first sight.
    pub fn insert(&mut self, position: Point3, source: usize) -> u32 {
        let key = VertexKey::new(&position, self.scale);
        let vertices = &mut self.vertices;
        *self.index.entry(key).or_insert_with(|| {
            let idx = vertices.len() as u32;
            vertices.push(WeldedVertex { position, source });
            idx
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vertices(self) -> Vec<WeldedVertex> {
        self.vertices
    }
}

/// Welding result before normals are assigned.
#[derive(Debug, Clone, Default)]
pub struct Welded {
    /// Vertices and faces; `normals` is left empty.
    pub mesh: WeldedMesh,
    /// Effective normal of each kept face, parallel to `mesh.faces`.
    pub face_normals: Vec<Vec3>,
    /// Faces dropped because two corners landed in the same cell.
    pub collapsed_faces: usize,
}

/// Weld the corners of `mesh` and rewrite its faces as index triples.
pub fn weld(mesh: &Mesh, precision: u32) -> Welded {
    let mut welder = Welder::with_capacity(precision, mesh.triangle_count() * 3);
    let mut faces = Vec::with_capacity(mesh.triangle_count());
    let mut face_normals = Vec::with_capacity(mesh.triangle_count());
    let mut collapsed_faces = 0;

    for (t, triangle) in mesh.triangles.iter().enumerate() {
        let [a, b, c] = triangle.vertices;
        let face = [
            welder.insert(a, 3 * t),
            welder.insert(b, 3 * t + 1),
            welder.insert(c, 3 * t + 2),
        ];
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            debug!(triangle = t, ?face, "face collapsed by welding");
            collapsed_faces += 1;
            continue;
        }
        faces.push(face);
        face_normals.push(triangle.effective_normal());
    }

    Welded {
        mesh: WeldedMesh {
            vertices: welder.into_vertices(),
            normals: Vec::new(),
            faces,
        },
        face_normals,
        collapsed_faces,
    }
}
