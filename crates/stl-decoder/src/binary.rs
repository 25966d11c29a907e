//! Binary STL parse path.

use mesh_types::{Mesh, Point3, Triangle, Vec3};
use tracing::{debug, warn};

use crate::config::DecoderConfig;
use crate::format::{declared_triangle_count, StlFormat, HEADER_SIZE, PREAMBLE_SIZE, RECORD_SIZE};
use crate::stats::DecodeStats;
use crate::validate::check_facet;
use crate::Decoded;

/// Decode `bytes` as binary STL regardless of what sniffing would say.
///
/// The declared triangle count is authoritative for `stats.total`: records
/// cut off by a truncated buffer are counted as incomplete. Bytes past the
/// declared records are ignored.
pub fn decode_binary(bytes: &[u8], config: &DecoderConfig) -> Decoded {
    let mut stats = DecodeStats::default();

    let Some(count) = declared_triangle_count(bytes) else {
        warn!(len = bytes.len(), "buffer shorter than binary preamble");
        return Decoded {
            format: StlFormat::Binary,
            name: None,
            mesh: Mesh::new(),
            stats,
        };
    };
    let declared = count as usize;

    let available = (bytes.len() - PREAMBLE_SIZE) / RECORD_SIZE;
    let readable = declared.min(available);
    let mut mesh = Mesh::with_capacity(readable);

    for (index, record) in bytes[PREAMBLE_SIZE..]
        .chunks_exact(RECORD_SIZE)
        .take(readable)
        .enumerate()
    {
        let triangle = read_record(record);
        match check_facet(&triangle.vertices, &triangle.normal, config.degenerate_tolerance) {
            Ok(()) => {
                stats.record_valid(triangle.normal.is_zero());
                mesh.push(triangle);
            }
            Err(rejection) => {
                debug!(index, reason = %rejection, "dropping facet");
                stats.record_rejection(rejection);
            }
        }
    }

    if readable < declared {
        warn!(
            declared,
            readable,
            len = bytes.len(),
            "binary buffer truncated"
        );
        stats.record_missing(declared - readable);
    }

    Decoded {
        format: StlFormat::Binary,
        name: header_name(&bytes[..HEADER_SIZE]),
        mesh,
        stats,
    }
}

/// Header text up to the first NUL, trimmed; `None` when blank.
fn header_name(header: &[u8]) -> Option<String> {
    let end = header.iter().position(|&b| b == 0).unwrap_or(header.len());
    let text = String::from_utf8_lossy(&header[..end]);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_record(record: &[u8]) -> Triangle {
    let normal = read_f32_triple(record, 0);
    let a = read_f32_triple(record, 12);
    let b = read_f32_triple(record, 24);
    let c = read_f32_triple(record, 36);
    Triangle::new(
        Point3::from_f32(a),
        Point3::from_f32(b),
        Point3::from_f32(c),
        Vec3::new(
            f64::from(normal[0]),
            f64::from(normal[1]),
            f64::from(normal[2]),
        ),
    )
}

fn read_f32_triple(buf: &[u8], offset: usize) -> [f32; 3] {
    let read = |o: usize| f32::from_le_bytes([buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]);
    [read(offset), read(offset + 4), read(offset + 8)]
}
