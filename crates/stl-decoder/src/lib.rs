//! STL decoding: variant sniffing, binary and ASCII parsing, facet validation.
//!
//! Decoding never fails. Malformed or degenerate facets are dropped and
//! tallied in [`DecodeStats`]; whatever survives is returned as a [`Mesh`].
//!
//! ```
//! let decoded = stl_decoder::decode(b"");
//! assert!(decoded.mesh.is_empty());
//! assert_eq!(decoded.stats.total, 0);
//! ```

pub mod ascii;
pub mod binary;
pub mod config;
pub mod format;
pub mod stats;
pub mod validate;

pub use config::DecoderConfig;
pub use format::{sniff_format, StlFormat};
pub use stats::DecodeStats;
pub use validate::Rejection;

use mesh_types::Mesh;
use tracing::{info, instrument, warn};

/// Result of decoding one STL buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// Variant the buffer was parsed as.
    pub format: StlFormat,
    /// Binary header text or ASCII `solid` name, when present.
    pub name: Option<String>,
    pub mesh: Mesh,
    pub stats: DecodeStats,
}

/// Decode with the default tolerances.
pub fn decode(bytes: &[u8]) -> Decoded {
    decode_with(bytes, &DecoderConfig::default())
}

/// Sniff the variant and decode with the given tolerances.
#[instrument(skip(bytes, config), fields(len = bytes.len()))]
pub fn decode_with(bytes: &[u8], config: &DecoderConfig) -> Decoded {
    let format = sniff_format(bytes, config.header_size_tolerance);
    let decoded = match format {
        StlFormat::Binary => binary::decode_binary(bytes, config),
        StlFormat::Ascii => ascii::decode_ascii(bytes, config),
    };

    let stats = &decoded.stats;
    info!(
        format = ?decoded.format,
        total = stats.total,
        valid = stats.valid,
        degenerate = stats.degenerate,
        invalid = stats.invalid,
        incomplete = stats.incomplete,
        zero_normal = stats.zero_normal,
        "decoded STL"
    );
    if decoded.mesh.is_empty() {
        warn!(total = stats.total, "no valid facets recovered");
    }

    decoded
}
