//! Assertion helpers that report every failure with context.

use crate::helpers::{norm, HarnessError};
use crate::oracle::{OracleVerdict, ParsedDocument};

/// Fail with all failing verdicts joined, or succeed if every verdict passed.
pub fn assert_verdicts(verdicts: &[OracleVerdict], ctx: &str) -> Result<(), HarnessError> {
    let failures: Vec<String> = verdicts
        .iter()
        .filter(|v| !v.passed)
        .map(|v| format!("{}: {}", v.oracle_name, v.detail))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::OracleFailure {
            oracle: ctx.to_string(),
            detail: failures.join("; "),
        })
    }
}

/// Assert exact vertex, normal and face counts.
pub fn assert_counts(
    doc: &ParsedDocument,
    vertices: usize,
    normals: usize,
    faces: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = (doc.vertices.len(), doc.normals.len(), doc.faces.len());
    if actual == (vertices, normals, faces) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected v={} vn={} f={}, got v={} vn={} f={}",
                ctx, vertices, normals, faces, actual.0, actual.1, actual.2,
            ),
        })
    }
}

/// Assert the normal paired with the vertex written at `position` is close
/// to `expected`. Only meaningful for welded documents, where `vn` lines
/// follow `v` lines one to one.
pub fn assert_vertex_normal(
    doc: &ParsedDocument,
    position: [f64; 3],
    expected: [f64; 3],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let index = doc
        .vertices
        .iter()
        .position(|v| norm([v[0] - position[0], v[1] - position[1], v[2] - position[2]]) < tol)
        .ok_or_else(|| HarnessError::AssertionFailed {
            detail: format!("[{}] no vertex at {:?}", ctx, position),
        })?;

    let normal = doc.normals.get(index).ok_or_else(|| HarnessError::AssertionFailed {
        detail: format!("[{}] vertex {} has no normal", ctx, index + 1),
    })?;

    let diff = [
        normal[0] - expected[0],
        normal[1] - expected[1],
        normal[2] - expected[2],
    ];
    if norm(diff) > tol {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] normal at {:?}: expected {:?}, got {:?} (tol={})",
                ctx, position, expected, normal, tol,
            ),
        });
    }
    Ok(())
}
