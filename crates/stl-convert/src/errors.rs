use std::path::PathBuf;

/// Errors at the edges of the pipeline: reading files, loading configuration,
/// and callers that require visible geometry.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("no valid triangles in input ({total} facets read)")]
    EmptyMesh { total: usize },
}
