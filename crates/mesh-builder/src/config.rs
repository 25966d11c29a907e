use serde::{Deserialize, Serialize};

/// Decimal digits kept when keying vertices for welding.
pub const DEFAULT_PRECISION: u32 = 7;

/// Finest welding grid, in decimal digits.
pub const MAX_PRECISION: u32 = 12;

/// Largest extent of a mesh fitted for preview.
pub const TARGET_SIZE: f64 = 5.0;

/// Options for [`crate::MeshBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Merge coincident vertices and emit one smooth normal per vertex.
    /// When off, corners are written in encounter order with one normal per face.
    pub weld: bool,
    /// Decimal digits of the welding grid, at most [`MAX_PRECISION`].
    pub precision: u32,
    /// Center the mesh and scale its largest extent to this size.
    pub fit_size: Option<f64>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            weld: true,
            precision: DEFAULT_PRECISION,
            fit_size: None,
        }
    }
}

impl BuildOptions {
    /// Welded, centered and scaled to [`TARGET_SIZE`].
    pub fn preview() -> Self {
        Self {
            fit_size: Some(TARGET_SIZE),
            ..Self::default()
        }
    }

    /// Raw encounter order with per-face normals.
    pub fn unwelded() -> Self {
        Self {
            weld: false,
            ..Self::default()
        }
    }
}
