use serde::{Deserialize, Serialize};

use crate::point::Point3;
use crate::vector::Vec3;

/// Below this length a face normal is treated as unspecified.
const NORMAL_EPSILON: f64 = 1e-12;

/// One facet as read from the source file.
///
/// `normal` is the face normal stored in the file. The zero vector means the
/// file left it unspecified and it is recomputed from the winding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Point3; 3],
    pub normal: Vec3,
}

impl Triangle {
    pub fn new(a: Point3, b: Point3, c: Point3, normal: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
            normal,
        }
    }

    /// Cross product of the two edges leaving the first vertex.
    pub fn edge_cross(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a))
    }

    pub fn area(&self) -> f64 {
        0.5 * self.edge_cross().length()
    }

    /// Unit normal derived from the vertex winding, if the triangle has area.
    pub fn geometric_normal(&self) -> Option<Vec3> {
        self.edge_cross().normalized_or_none(NORMAL_EPSILON)
    }

    /// Normal used for shading: the stored normal when present, otherwise the
    /// geometric one. Returns zero only for a zero-area triangle with no
    /// stored normal.
    pub fn effective_normal(&self) -> Vec3 {
        self.normal
            .normalized_or_none(NORMAL_EPSILON)
            .or_else(|| self.geometric_normal())
            .unwrap_or(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_right_triangle(normal: Vec3) -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            normal,
        )
    }

    #[test]
    fn area_of_unit_right_triangle() {
        assert_relative_eq!(unit_right_triangle(Vec3::ZERO).area(), 0.5);
    }

    #[test]
    fn zero_normal_falls_back_to_winding() {
        let n = unit_right_triangle(Vec3::ZERO).effective_normal();
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn stored_normal_is_normalized() {
        let n = unit_right_triangle(Vec3::new(0.0, 0.0, -3.0)).effective_normal();
        assert_relative_eq!(n.z, -1.0);
        assert_relative_eq!(n.length(), 1.0);
    }
}
