//! Helper functions: error type and canned fixture geometry.

use mesh_types::{Mesh, Point3, Triangle, Vec3};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("STL error: {reason}")]
    StlError { reason: String },

    #[error("document parse error on line {line}: {reason}")]
    DocumentError { line: usize, reason: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}

// ── Fixture Geometry ────────────────────────────────────────────────────────

pub fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Triangle (0,0,0), (1,0,0), (0,1,0) with normal +Z.
pub fn single_triangle() -> Mesh {
    Mesh {
        triangles: vec![Triangle::new(
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            Vec3::Z,
        )],
    }
}

/// Two triangles folded 90° along the shared edge (0,0,0)-(1,0,0).
///
/// The first lies in the XY plane facing +Z, the second in the XZ plane
/// facing -Y. Four distinct corners, six occurrences.
pub fn folded_pair() -> Mesh {
    Mesh {
        triangles: vec![
            Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), Vec3::Z),
            Triangle::new(
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(0.0, 0.0, 1.0),
                Vec3::new(0.0, -1.0, 0.0),
            ),
        ],
    }
}

/// Unit square in the XY plane split along its diagonal.
pub fn flat_quad() -> Mesh {
    Mesh {
        triangles: vec![
            Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), Vec3::Z),
            Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0), Vec3::Z),
        ],
    }
}

/// Axis-aligned cube from `min` with edge `size`, 12 outward-facing triangles.
pub fn cube(min: Point3, size: f64) -> Mesh {
    let c = |i: usize| {
        p(
            min.x + if i & 1 != 0 { size } else { 0.0 },
            min.y + if i & 2 != 0 { size } else { 0.0 },
            min.z + if i & 4 != 0 { size } else { 0.0 },
        )
    };
    // Corner i has bits (x, y, z); quads wound counter-clockwise seen from outside.
    let quads: [([usize; 4], Vec3); 6] = [
        ([0, 2, 3, 1], Vec3::new(0.0, 0.0, -1.0)),
        ([4, 5, 7, 6], Vec3::new(0.0, 0.0, 1.0)),
        ([0, 1, 5, 4], Vec3::new(0.0, -1.0, 0.0)),
        ([2, 6, 7, 3], Vec3::new(0.0, 1.0, 0.0)),
        ([0, 4, 6, 2], Vec3::new(-1.0, 0.0, 0.0)),
        ([1, 3, 7, 5], Vec3::new(1.0, 0.0, 0.0)),
    ];

    let mut mesh = Mesh::with_capacity(12);
    for (q, n) in quads {
        mesh.push(Triangle::new(c(q[0]), c(q[1]), c(q[2]), n));
        mesh.push(Triangle::new(c(q[0]), c(q[2]), c(q[3]), n));
    }
    mesh
}

/// Euclidean length of a `[x, y, z]` triple.
pub fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_normals_match_winding() {
        for t in cube(Point3::ORIGIN, 2.0).triangles {
            let geometric = t.geometric_normal().unwrap();
            assert!(
                geometric.dot(&t.normal) > 0.99,
                "winding disagrees with stored normal {:?}",
                t.normal
            );
        }
    }

    #[test]
    fn folded_pair_normals_match_winding() {
        for t in folded_pair().triangles {
            assert!(t.geometric_normal().unwrap().dot(&t.normal) > 0.99);
        }
    }
}
