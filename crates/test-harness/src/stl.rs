//! STL writers for building decoder fixtures in binary and ASCII form.

use mesh_types::{Mesh, Triangle};

use crate::helpers::HarnessError;

/// Encode `mesh` as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
pub fn write_binary_stl(mesh: &Mesh, name: &str) -> Result<Vec<u8>, HarnessError> {
    validate(mesh)?;
    Ok(encode_binary(name.as_bytes(), mesh.triangles.len() as u32, &mesh.triangles))
}

/// Encode `mesh` as an ASCII STL string.
pub fn write_ascii_stl(mesh: &Mesh, name: &str) -> Result<String, HarnessError> {
    validate(mesh)?;
    Ok(encode_ascii(name, &mesh.triangles))
}

/// Binary encoding without validation.
///
/// `declared` is written as the triangle count and may disagree with
/// `triangles.len()`, and coordinates may be non-finite. Used to craft
/// truncated, padded or corrupt fixtures.
pub fn encode_binary(header: &[u8], declared: u32, triangles: &[Triangle]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(84 + triangles.len() * 50);

    buf.extend_from_slice(&header[..header.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&declared.to_le_bytes());

    for t in triangles {
        for c in t.normal.to_array() {
            buf.extend_from_slice(&(c as f32).to_le_bytes());
        }
        for v in &t.vertices {
            for c in v.to_array() {
                buf.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}

/// ASCII encoding without validation.
pub fn encode_ascii(name: &str, triangles: &[Triangle]) -> String {
    let mut out = String::with_capacity(triangles.len() * 300);
    out.push_str(&format!("solid {}\n", name));

    for t in triangles {
        let n = t.normal;
        out.push_str(&format!("  facet normal {:e} {:e} {:e}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &t.vertices {
            out.push_str(&format!("      vertex {:e} {:e} {:e}\n", v.x, v.y, v.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", name));
    out
}

fn validate(mesh: &Mesh) -> Result<(), HarnessError> {
    if mesh.is_empty() {
        return Err(HarnessError::StlError {
            reason: "mesh has no triangles".to_string(),
        });
    }
    for (i, t) in mesh.triangles.iter().enumerate() {
        if !t.normal.is_finite() || t.vertices.iter().any(|v| !v.is_finite()) {
            return Err(HarnessError::StlError {
                reason: format!("triangle {} has non-finite coordinates", i),
            });
        }
    }
    Ok(())
}
