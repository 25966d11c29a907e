//! Per-facet numeric and geometric checks shared by both parse paths.

use std::fmt;

use mesh_types::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// Why a facet was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// A coordinate or normal component is NaN or infinite.
    InvalidNumeric,
    /// Coincident or collinear vertices.
    Degenerate,
    /// Wrong number of vertices, missing normal, or missing terminator.
    Incomplete,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::InvalidNumeric => "non-finite coordinate",
            Rejection::Degenerate => "zero-area facet",
            Rejection::Incomplete => "incomplete facet",
        };
        f.write_str(reason)
    }
}

/// Accept or reject a fully read facet.
pub fn check_facet(vertices: &[Point3; 3], normal: &Vec3, tolerance: f64) -> Result<(), Rejection> {
    if !normal.is_finite() || vertices.iter().any(|v| !v.is_finite()) {
        return Err(Rejection::InvalidNumeric);
    }
    if is_degenerate(vertices, tolerance) {
        return Err(Rejection::Degenerate);
    }
    Ok(())
}

/// True when two vertices coincide within `tolerance` or the edge vectors
/// from the first vertex are parallel.
pub fn is_degenerate(vertices: &[Point3; 3], tolerance: f64) -> bool {
    let [a, b, c] = vertices;
    if a.distance_to(b) < tolerance || b.distance_to(c) < tolerance || a.distance_to(c) < tolerance
    {
        return true;
    }
    (*b - *a).cross(&(*c - *a)).length() < tolerance
}
