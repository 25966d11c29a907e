//! Text serialization in the `v` / `vn` / `f a//a b//b c//c` format.
//!
//! ```text
//! # vertices: 3
//! # normals: 3
//! # faces: 1
//! v 0.000000 0.000000 0.000000
//! ...
//! vn 0.000000 0.000000 1.000000
//! ...
//! f 1//1 2//2 3//3
//! ```
//!
//! Coordinates use six fixed decimals and indices are 1-based.

use mesh_types::{Point3, Vec3};

fn write_header(out: &mut String, vertices: usize, normals: usize, faces: usize) {
    out.push_str(&format!("# vertices: {}\n", vertices));
    out.push_str(&format!("# normals: {}\n", normals));
    out.push_str(&format!("# faces: {}\n", faces));
}

fn write_vertex(out: &mut String, p: &Point3) {
    out.push_str(&format!("v {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
}

fn write_normal(out: &mut String, n: &Vec3) {
    out.push_str(&format!("vn {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
}

/// Welded layout: one normal per vertex, each corner reuses its vertex index
/// as its normal index.
pub fn write_indexed<'a>(
    positions: impl ExactSizeIterator<Item = &'a Point3>,
    normals: &[Vec3],
    faces: &[[u32; 3]],
) -> String {
    let mut out = String::with_capacity(64 + positions.len() * 80 + faces.len() * 32);
    write_header(&mut out, positions.len(), normals.len(), faces.len());

    for p in positions {
        write_vertex(&mut out, p);
    }
    for n in normals {
        write_normal(&mut out, n);
    }
    for [a, b, c] in faces {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        out.push_str(&format!("f {a}//{a} {b}//{b} {c}//{c}\n"));
    }

    out
}

/// Unwelded layout: three vertices and one normal per face; face `k` uses
/// vertices `3k+1..=3k+3` and normal `k+1`.
pub fn write_flat(positions: &[Point3], face_normals: &[Vec3]) -> String {
    debug_assert_eq!(positions.len(), face_normals.len() * 3);

    let mut out = String::with_capacity(64 + positions.len() * 40 + face_normals.len() * 72);
    write_header(&mut out, positions.len(), face_normals.len(), face_normals.len());

    for p in positions {
        write_vertex(&mut out, p);
    }
    for n in face_normals {
        write_normal(&mut out, n);
    }
    for k in 0..face_normals.len() {
        let n = k + 1;
        let (a, b, c) = (3 * k + 1, 3 * k + 2, 3 * k + 3);
        out.push_str(&format!("f {a}//{n} {b}//{n} {c}//{n}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_header_only() {
        let none: [Point3; 0] = [];
        let text = write_indexed(none.iter(), &[], &[]);
        assert_eq!(text, "# vertices: 0\n# normals: 0\n# faces: 0\n");
        assert_eq!(write_flat(&[], &[]), text);
    }

    #[test]
    fn indexed_faces_are_one_based() {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let text = write_indexed(positions.iter(), &[Vec3::Z; 3], &[[0, 1, 2]]);
        assert!(text.contains("v 1.000000 0.000000 0.000000\n"));
        assert!(text.contains("vn 0.000000 0.000000 1.000000\n"));
        assert!(text.ends_with("f 1//1 2//2 3//3\n"));
    }

    #[test]
    fn flat_faces_reference_their_own_normal() {
        let positions = [Point3::ORIGIN; 6];
        let text = write_flat(&positions, &[Vec3::Z, Vec3::Z]);
        assert!(text.contains("f 1//1 2//1 3//1\n"));
        assert!(text.ends_with("f 4//2 5//2 6//2\n"));
        assert!(text.starts_with("# vertices: 6\n# normals: 2\n# faces: 2\n"));
    }

    #[test]
    fn six_decimal_rounding() {
        let text = write_indexed([Point3::new(0.1234567, -2.0, 1e-9)].iter(), &[], &[]);
        assert!(text.contains("v 0.123457 -2.000000 0.000000\n"));
    }
}
