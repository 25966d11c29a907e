//! STL bytes in, renderable mesh document out.
//!
//! Glues [`stl_decoder`] to [`mesh_builder`]. The pipeline itself never
//! fails; errors only arise from file access, configuration, or a caller
//! asking for [`Conversion::require_geometry`].

pub mod config;
pub mod errors;

pub use config::PipelineConfig;
pub use errors::ConvertError;

use std::path::Path;

use mesh_builder::{BuildStats, MeshBuilder, SerializedMesh};
use serde::Serialize;
use stl_decoder::{DecodeStats, StlFormat};
use tracing::{info, instrument};

/// Everything produced by one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub format: StlFormat,
    pub name: Option<String>,
    pub decode_stats: DecodeStats,
    pub document: SerializedMesh,
}

/// Diagnostics for one conversion, as reported by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport<'a> {
    pub format: StlFormat,
    pub name: Option<&'a str>,
    pub decode: DecodeStats,
    pub build: BuildStats,
}

impl Conversion {
    pub fn report(&self) -> ConversionReport<'_> {
        ConversionReport {
            format: self.format,
            name: self.name.as_deref(),
            decode: self.decode_stats,
            build: self.document.stats,
        }
    }

    /// The document, or [`ConvertError::EmptyMesh`] when nothing survived.
    pub fn require_geometry(&self) -> Result<&SerializedMesh, ConvertError> {
        if self.document.is_empty() {
            return Err(ConvertError::EmptyMesh {
                total: self.decode_stats.total,
            });
        }
        Ok(&self.document)
    }
}

/// Decode `bytes` and build a document.
#[instrument(skip_all, fields(len = bytes.len()))]
pub fn convert(bytes: &[u8], config: &PipelineConfig) -> Conversion {
    let decoded = stl_decoder::decode_with(bytes, &config.decoder);
    let document = MeshBuilder::new(config.builder).build(&decoded.mesh);

    info!(
        format = ?decoded.format,
        facets = decoded.stats.total,
        vertices = document.vertex_count,
        faces = document.face_count,
        "conversion complete"
    );

    Conversion {
        format: decoded.format,
        name: decoded.name,
        decode_stats: decoded.stats,
        document,
    }
}

/// Read `path` and convert its contents.
pub fn convert_file(path: &Path, config: &PipelineConfig) -> Result<Conversion, ConvertError> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(convert(&bytes, config))
}
