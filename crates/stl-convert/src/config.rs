//! Pipeline configuration, loadable from JSON.
//!
//! Every field is optional; missing fields take their defaults:
//!
//! ```json
//! {
//!   "decoder": { "degenerate_tolerance": 1e-7, "header_size_tolerance": 100 },
//!   "builder": { "weld": true, "precision": 7, "fit_size": 5.0 }
//! }
//! ```

use std::path::Path;

use mesh_builder::{BuildOptions, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use stl_decoder::DecoderConfig;

use crate::errors::ConvertError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub decoder: DecoderConfig,
    pub builder: BuildOptions,
}

impl PipelineConfig {
    /// Defaults tuned for the preview renderer: welded and fitted to
    /// [`mesh_builder::TARGET_SIZE`].
    pub fn preview() -> Self {
        Self {
            decoder: DecoderConfig::default(),
            builder: BuildOptions::preview(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConvertError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        let tol = self.decoder.degenerate_tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConvertError::Config(format!(
                "degenerate_tolerance must be finite and non-negative, got {tol}"
            )));
        }
        if self.builder.precision > MAX_PRECISION {
            return Err(ConvertError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.builder.precision
            )));
        }
        if let Some(size) = self.builder.fit_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConvertError::Config(format!(
                    "fit_size must be finite and positive, got {size}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = PipelineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config =
            PipelineConfig::from_json_str(r#"{ "builder": { "fit_size": 5.0 } }"#).unwrap();
        assert_eq!(config.builder.fit_size, Some(5.0));
        assert!(config.builder.weld);
        assert_eq!(config.builder.precision, 7);
        assert_eq!(config.decoder.header_size_tolerance, 100);
    }

    #[test]
    fn header_tolerance_is_configurable() {
        let config =
            PipelineConfig::from_json_str(r#"{ "decoder": { "header_size_tolerance": 0 } }"#)
                .unwrap();
        assert_eq!(config.decoder.header_size_tolerance, 0);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            PipelineConfig::from_json_str("{ decoder"),
            Err(ConvertError::Config(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(PipelineConfig::from_json_str(r#"{ "builder": { "precision": 40 } }"#).is_err());
        assert!(PipelineConfig::from_json_str(r#"{ "builder": { "fit_size": -1.0 } }"#).is_err());
        assert!(
            PipelineConfig::from_json_str(r#"{ "decoder": { "degenerate_tolerance": -1.0 } }"#)
                .is_err()
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PipelineConfig::load(Path::new("/nonexistent/pipeline.json")).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
