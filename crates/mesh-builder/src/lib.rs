//! Turns a decoded [`Mesh`] into a renderable text document.
//!
//! Corners are welded on a decimal grid before normals are computed, so
//! every welded vertex gets one normal averaged over all faces touching it
//! and shading stays continuous across shared edges.

pub mod config;
pub mod normals;
pub mod obj;
pub mod transform;
pub mod weld;

pub use config::{BuildOptions, DEFAULT_PRECISION, MAX_PRECISION, TARGET_SIZE};
pub use normals::{smooth_normals, VertexNormals};
pub use transform::{center_and_scale, FitTransform};
pub use weld::{weld, VertexKey, Welder};

use mesh_types::{Mesh, Point3, Vec3, WeldedMesh};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Counters describing one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub welded: bool,
    pub input_triangles: usize,
    pub vertices: usize,
    pub faces: usize,
    /// Faces dropped because welding merged two of their corners.
    pub collapsed_faces: usize,
    /// Normals that fell back to (0, 0, 1).
    pub fallback_normals: usize,
}

/// A serialized document plus the counts written into its header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedMesh {
    pub text: String,
    pub vertex_count: usize,
    pub normal_count: usize,
    pub face_count: usize,
    pub stats: BuildStats,
}

impl SerializedMesh {
    /// No faces were written; consumers needing visible geometry should
    /// treat this as "no model available".
    pub fn is_empty(&self) -> bool {
        self.face_count == 0
    }
}

/// Build with default options.
pub fn build(mesh: &Mesh) -> SerializedMesh {
    MeshBuilder::default().build(mesh)
}

#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    options: BuildOptions,
}

impl MeshBuilder {
    /// `options.precision` is clamped to [`MAX_PRECISION`].
    pub fn new(mut options: BuildOptions) -> Self {
        options.precision = options.precision.min(MAX_PRECISION);
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Weld, assign smooth normals and apply the configured fit, without
    /// serializing.
    pub fn weld(&self, mesh: &Mesh) -> (WeldedMesh, BuildStats) {
        let welded = weld(mesh, self.options.precision);
        let mut out = welded.mesh;
        let normals = smooth_normals(out.vertices.len(), &out.faces, &welded.face_normals);
        out.normals = normals.normals;

        if let Some(target) = self.options.fit_size {
            if let Some(bounds) = out.bounds() {
                let fit = FitTransform::for_bounds(&bounds, target);
                for v in &mut out.vertices {
                    v.position = fit.apply(v.position);
                }
            }
        }

        let stats = BuildStats {
            welded: true,
            input_triangles: mesh.triangle_count(),
            vertices: out.vertex_count(),
            faces: out.face_count(),
            collapsed_faces: welded.collapsed_faces,
            fallback_normals: normals.fallbacks,
        };
        (out, stats)
    }

    #[instrument(skip_all, fields(triangles = mesh.triangle_count(), weld = self.options.weld))]
    pub fn build(&self, mesh: &Mesh) -> SerializedMesh {
        let serialized = if self.options.weld {
            self.build_welded(mesh)
        } else {
            self.build_flat(mesh)
        };

        info!(
            vertices = serialized.vertex_count,
            faces = serialized.face_count,
            collapsed = serialized.stats.collapsed_faces,
            fallback_normals = serialized.stats.fallback_normals,
            "built mesh document"
        );
        serialized
    }

    fn build_welded(&self, mesh: &Mesh) -> SerializedMesh {
        let (welded, stats) = self.weld(mesh);
        let text = obj::write_indexed(welded.positions(), &welded.normals, &welded.faces);
        SerializedMesh {
            text,
            vertex_count: welded.vertex_count(),
            normal_count: welded.normals.len(),
            face_count: welded.face_count(),
            stats,
        }
    }

    /// Encounter order, per-face normals, no welding.
    fn build_flat(&self, mesh: &Mesh) -> SerializedMesh {
        let mut positions: Vec<Point3> = mesh.corners().copied().collect();
        if let Some(target) = self.options.fit_size {
            center_and_scale(&mut positions, target);
        }

        let mut fallback_normals = 0;
        let face_normals: Vec<Vec3> = mesh
            .triangles
            .iter()
            .map(|t| {
                t.effective_normal()
                    .normalized_or_none(normals::FALLBACK_THRESHOLD)
                    .unwrap_or_else(|| {
                        fallback_normals += 1;
                        Vec3::Z
                    })
            })
            .collect();

        let text = obj::write_flat(&positions, &face_normals);
        SerializedMesh {
            text,
            vertex_count: positions.len(),
            normal_count: face_normals.len(),
            face_count: face_normals.len(),
            stats: BuildStats {
                welded: false,
                input_triangles: mesh.triangle_count(),
                vertices: positions.len(),
                faces: face_normals.len(),
                collapsed_faces: 0,
                fallback_normals,
            },
        }
    }
}
