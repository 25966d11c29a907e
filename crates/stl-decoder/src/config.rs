//! Tolerances for the decoder.

use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_HEADER_SIZE_TOLERANCE;

/// Default minimum vertex separation and edge cross-product magnitude.
pub const DEFAULT_DEGENERATE_TOLERANCE: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Facets with two vertices closer than this, or whose edge cross
    /// product is shorter than this, are degenerate.
    pub degenerate_tolerance: f64,
    /// How far the buffer length may stray from the size implied by the
    /// binary triangle count before a `solid` prefix wins and the buffer is
    /// read as ASCII (bytes).
    pub header_size_tolerance: u64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            degenerate_tolerance: DEFAULT_DEGENERATE_TOLERANCE,
            header_size_tolerance: DEFAULT_HEADER_SIZE_TOLERANCE,
        }
    }
}
