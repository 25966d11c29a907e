//! Per-vertex smooth normals.

use mesh_types::Vec3;

/// Summed normals shorter than this fall back to [`Vec3::Z`].
pub const FALLBACK_THRESHOLD: f64 = 1e-4;

/// One normal per welded vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexNormals {
    pub normals: Vec<Vec3>,
    /// Vertices that received the fallback normal.
    pub fallbacks: usize,
}

/// Average the normals of every face touching each vertex.
///
/// `face_normals[i]` belongs to `faces[i]`. Vertices with no incident face,
/// or whose incident normals cancel, get `(0, 0, 1)`.
pub fn smooth_normals(
    vertex_count: usize,
    faces: &[[u32; 3]],
    face_normals: &[Vec3],
) -> VertexNormals {
    let mut sums = vec![Vec3::ZERO; vertex_count];
    for (face, normal) in faces.iter().zip(face_normals) {
        for &v in face {
            sums[v as usize] += *normal;
        }
    }

    let mut fallbacks = 0;
    let normals = sums
        .into_iter()
        .map(|sum| {
            sum.normalized_or_none(FALLBACK_THRESHOLD).unwrap_or_else(|| {
                fallbacks += 1;
                Vec3::Z
            })
        })
        .collect();

    VertexNormals { normals, fallbacks }
}
