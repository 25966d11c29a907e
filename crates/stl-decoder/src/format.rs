//! Binary vs ASCII detection.
//!
//! Binary layout:
//! - 80 bytes: header (free text, may itself start with `solid`)
//! - 4 bytes: u32 LE triangle count
//! - 50 bytes per triangle: 3×f32 normal, 3×3×f32 vertices, u16 attribute

use serde::{Deserialize, Serialize};

pub const HEADER_SIZE: usize = 80;
/// Header plus the triangle count.
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;
pub const RECORD_SIZE: usize = 50;
pub const DEFAULT_HEADER_SIZE_TOLERANCE: u64 = 100;

const ASCII_MAGIC: &str = "solid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    Binary,
    Ascii,
}

/// Triangle count declared at offset 80, if the buffer is long enough.
pub fn declared_triangle_count(bytes: &[u8]) -> Option<u32> {
    if bytes.len() < PREAMBLE_SIZE {
        return None;
    }
    Some(u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]))
}

/// Buffer length a binary file declaring `count` triangles must have.
pub fn expected_binary_size(count: u32) -> u64 {
    PREAMBLE_SIZE as u64 + u64::from(count) * RECORD_SIZE as u64
}

/// Classify a buffer.
///
/// Precedence:
/// 1. shorter than the binary preamble: ASCII
/// 2. length equals `84 + 50 * count`: binary
/// 3. first five bytes are not UTF-8: binary
/// 4. starts with `solid` (any case) and the size mismatch exceeds
///    `header_size_tolerance`: ASCII
/// 5. otherwise binary
pub fn sniff_format(bytes: &[u8], header_size_tolerance: u64) -> StlFormat {
    let Some(count) = declared_triangle_count(bytes) else {
        return StlFormat::Ascii;
    };

    let expected = expected_binary_size(count);
    let actual = bytes.len() as u64;
    if actual == expected {
        return StlFormat::Binary;
    }

    let Ok(prefix) = std::str::from_utf8(&bytes[..ASCII_MAGIC.len()]) else {
        return StlFormat::Binary;
    };

    if prefix.eq_ignore_ascii_case(ASCII_MAGIC) && actual.abs_diff(expected) > header_size_tolerance
    {
        return StlFormat::Ascii;
    }

    StlFormat::Binary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_buffer(header: &[u8], count: u32, records: usize) -> Vec<u8> {
        let mut buf = header.to_vec();
        buf.resize(HEADER_SIZE, 0);
        buf.extend_from_slice(&count.to_le_bytes());
        buf.resize(PREAMBLE_SIZE + records * RECORD_SIZE, 0);
        buf
    }

    #[test]
    fn short_buffer_is_ascii() {
        assert_eq!(sniff_format(b"", 100), StlFormat::Ascii);
        assert_eq!(sniff_format(&[0u8; 83], 100), StlFormat::Ascii);
    }

    #[test]
    fn exact_size_is_binary_even_with_solid_header() {
        let buf = binary_buffer(b"solid exported by cad", 2, 2);
        assert_eq!(sniff_format(&buf, 100), StlFormat::Binary);
    }

    #[test]
    fn solid_prefix_with_large_mismatch_is_ascii() {
        let mut text = b"solid cube\n".to_vec();
        text.extend(std::iter::repeat(b' ').take(300));
        text.extend_from_slice(b"endsolid cube\n");
        assert_eq!(sniff_format(&text, 100), StlFormat::Ascii);
    }

    #[test]
    fn uppercase_solid_prefix_is_recognized() {
        let mut text = b"SOLID part\n".to_vec();
        text.resize(1000, b' ');
        assert_eq!(sniff_format(&text, 100), StlFormat::Ascii);
    }

    #[test]
    fn solid_prefix_within_tolerance_is_binary() {
        // One record short of the declared count: 50 bytes off.
        let buf = binary_buffer(b"solid", 3, 2);
        assert_eq!(sniff_format(&buf, 100), StlFormat::Binary);
    }

    #[test]
    fn tolerance_is_configurable() {
        let buf = binary_buffer(b"solid", 3, 2);
        assert_eq!(sniff_format(&buf, 10), StlFormat::Ascii);
    }

    #[test]
    fn non_utf8_prefix_is_binary() {
        let mut buf = binary_buffer(&[0xff, 0xfe, 0x00, 0x80, 0x81], 1, 0);
        buf.resize(2000, 0);
        assert_eq!(sniff_format(&buf, 100), StlFormat::Binary);
    }

    #[test]
    fn mismatched_size_without_solid_defaults_to_binary() {
        let mut buf = binary_buffer(b"exported", 10, 0);
        buf.resize(5000, 0);
        assert_eq!(sniff_format(&buf, 100), StlFormat::Binary);
    }

    #[test]
    fn expected_size_does_not_overflow() {
        assert_eq!(
            expected_binary_size(u32::MAX),
            84 + u64::from(u32::MAX) * 50
        );
    }
}
