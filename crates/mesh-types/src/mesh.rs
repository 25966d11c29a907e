use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::point::Point3;
use crate::triangle::Triangle;
use crate::vector::Vec3;

/// Decoder output: validated facets in file order, vertices not shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Vertex positions in encounter order, three per triangle.
    pub fn corners(&self) -> impl Iterator<Item = &Point3> {
        self.triangles.iter().flat_map(|t| t.vertices.iter())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.corners())
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

/// A unique vertex after welding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeldedVertex {
    pub position: Point3,
    /// Encounter index (`3 * triangle + corner`) of the first occurrence.
    pub source: usize,
}

/// Indexed mesh with one smooth normal per unique vertex.
///
/// `faces` hold 0-based indices into `vertices`; `normals[i]` belongs to
/// `vertices[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeldedMesh {
    pub vertices: Vec<WeldedVertex>,
    pub normals: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
}

impl WeldedMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = &Point3> {
        self.vertices.iter().map(|v| &v.position)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.positions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_encounter_order() {
        let mesh: Mesh = vec![
            Triangle::new(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Vec3::Z,
            ),
            Triangle::new(
                Point3::new(5.0, 0.0, 0.0),
                Point3::new(6.0, 0.0, 0.0),
                Point3::new(5.0, 1.0, 0.0),
                Vec3::Z,
            ),
        ]
        .into_iter()
        .collect();

        let xs: Vec<f64> = mesh.corners().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 0.0, 5.0, 6.0, 5.0]);
        assert_eq!(mesh.bounds().unwrap().max_extent(), 6.0);
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert!(Mesh::new().bounds().is_none());
        assert!(WeldedMesh::default().bounds().is_none());
    }
}
