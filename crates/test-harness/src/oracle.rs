//! Verification oracles over serialized mesh documents.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics,
//! so a test can collect every failure in one pass.

use crate::helpers::{norm, HarnessError};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
        }
    }
}

/// A face corner as written: 1-based `vertex//normal` indices.
pub type Corner = (usize, usize);

/// A document read back into plain arrays.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// `(key, value)` pairs from `# key: value` header lines.
    pub header: Vec<(String, usize)>,
    pub vertices: Vec<[f64; 3]>,
    pub normals: Vec<[f64; 3]>,
    pub faces: Vec<[Corner; 3]>,
}

impl ParsedDocument {
    pub fn header_count(&self, key: &str) -> Option<usize> {
        self.header
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, v)| v)
    }
}

/// Read a `v` / `vn` / `f a//a b//b c//c` document.
pub fn parse_document(text: &str) -> Result<ParsedDocument, HarnessError> {
    let mut doc = ParsedDocument::default();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let err = |reason: &str| HarnessError::DocumentError {
            line: line_no,
            reason: reason.to_string(),
        };

        if let Some(comment) = line.strip_prefix('#') {
            if let Some((key, value)) = comment.split_once(':') {
                if let Ok(n) = value.trim().parse::<usize>() {
                    doc.header.push((key.trim().to_string(), n));
                }
            }
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            None => {}
            Some("v") => doc.vertices.push(parse_triple(tokens).ok_or_else(|| err("bad v"))?),
            Some("vn") => doc.normals.push(parse_triple(tokens).ok_or_else(|| err("bad vn"))?),
            Some("f") => {
                let corners: Vec<Corner> = tokens
                    .map(parse_corner)
                    .collect::<Option<_>>()
                    .ok_or_else(|| err("bad face corner"))?;
                let &[a, b, c] = corners.as_slice() else {
                    return Err(err("face is not a triangle"));
                };
                doc.faces.push([a, b, c]);
            }
            Some(other) => return Err(err(&format!("unknown record '{}'", other))),
        }
    }

    Ok(doc)
}

fn parse_triple<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<[f64; 3]> {
    let mut next = || tokens.next()?.parse::<f64>().ok();
    Some([next()?, next()?, next()?])
}

fn parse_corner(token: &str) -> Option<Corner> {
    let (v, n) = token.split_once("//")?;
    Some((v.parse().ok()?, n.parse().ok()?))
}

// ── Document Oracles ────────────────────────────────────────────────────────

/// Check that the header's counts agree with the records that follow.
pub fn check_header_counts(doc: &ParsedDocument) -> OracleVerdict {
    let expected = [
        ("vertices", doc.vertices.len()),
        ("normals", doc.normals.len()),
        ("faces", doc.faces.len()),
    ];
    for (key, actual) in expected {
        match doc.header_count(key) {
            Some(n) if n == actual => {}
            Some(n) => {
                return OracleVerdict::fail(
                    "header_counts",
                    format!("header says {} {} but found {}", n, key, actual),
                )
            }
            None => {
                return OracleVerdict::fail("header_counts", format!("header lacks '{}'", key))
            }
        }
    }
    OracleVerdict::pass(
        "header_counts",
        format!(
            "{} vertices, {} normals, {} faces",
            doc.vertices.len(),
            doc.normals.len(),
            doc.faces.len()
        ),
    )
}

/// Check that every `vn` has length within `tolerance` of 1.
pub fn check_unit_normals(doc: &ParsedDocument, tolerance: f64) -> OracleVerdict {
    let bad: Vec<usize> = doc
        .normals
        .iter()
        .enumerate()
        .filter(|(_, n)| (norm(**n) - 1.0).abs() > tolerance)
        .map(|(i, _)| i)
        .collect();

    if bad.is_empty() {
        OracleVerdict::pass(
            "unit_normals",
            format!("all {} normals are unit length", doc.normals.len()),
        )
    } else {
        OracleVerdict::fail(
            "unit_normals",
            format!(
                "{} of {} normals are not unit length: {:?}",
                bad.len(),
                doc.normals.len(),
                &bad[..bad.len().min(5)]
            ),
        )
    }
}

/// Check that every face corner references an existing vertex and normal.
pub fn check_face_indices(doc: &ParsedDocument) -> OracleVerdict {
    let nv = doc.vertices.len();
    let nn = doc.normals.len();
    let mut bad = Vec::new();

    for (i, face) in doc.faces.iter().enumerate() {
        for &(v, n) in face {
            if v == 0 || v > nv || n == 0 || n > nn {
                bad.push((i, v, n));
            }
        }
    }

    if bad.is_empty() {
        OracleVerdict::pass(
            "face_indices",
            format!("all corners within 1..={} / 1..={}", nv, nn),
        )
    } else {
        OracleVerdict::fail(
            "face_indices",
            format!(
                "{} out-of-range corners (vertices={}, normals={}): {:?}",
                bad.len(),
                nv,
                nn,
                &bad[..bad.len().min(5)]
            ),
        )
    }
}

/// Check that no two `v` lines repeat the same written position.
pub fn check_unique_vertices(doc: &ParsedDocument) -> OracleVerdict {
    let mut seen = std::collections::HashSet::new();
    let duplicates = doc
        .vertices
        .iter()
        .filter(|v| !seen.insert((**v).map(f64::to_bits)))
        .count();

    if duplicates == 0 {
        OracleVerdict::pass(
            "unique_vertices",
            format!("{} distinct vertices", doc.vertices.len()),
        )
    } else {
        OracleVerdict::fail(
            "unique_vertices",
            format!("{} repeated vertex lines", duplicates),
        )
    }
}

// ── Composite ───────────────────────────────────────────────────────────────

/// Checks every document must satisfy, welded or not.
pub fn run_document_checks(doc: &ParsedDocument) -> Vec<OracleVerdict> {
    vec![
        check_header_counts(doc),
        check_unit_normals(doc, 1e-3),
        check_face_indices(doc),
    ]
}
