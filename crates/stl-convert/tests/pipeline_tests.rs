//! End-to-end conversion: STL bytes through decoder and builder.

use mesh_types::{Point3, Triangle, Vec3};
use stl_convert::{convert, convert_file, ConvertError, PipelineConfig};
use stl_decoder::StlFormat;
use test_harness::assertions::{assert_counts, assert_vertex_normal, assert_verdicts};
use test_harness::helpers::{cube, folded_pair, p, single_triangle};
use test_harness::oracle::{parse_document, run_document_checks};
use test_harness::stl::{encode_ascii, encode_binary, write_ascii_stl, write_binary_stl};

#[test]
fn binary_single_triangle_end_to_end() {
    let bytes = write_binary_stl(&single_triangle(), "tri").unwrap();
    let out = convert(&bytes, &PipelineConfig::default());

    assert_eq!(out.format, StlFormat::Binary);
    assert_eq!(out.name.as_deref(), Some("tri"));
    assert_eq!(out.decode_stats.valid, 1);

    let doc = parse_document(&out.document.text).unwrap();
    assert_counts(&doc, 3, 3, 1, "tri").unwrap();
    assert!(doc.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
    assert!(out.document.text.contains("f 1//1 2//2 3//3"));
}

#[test]
fn ascii_shared_edge_end_to_end() {
    let text = write_ascii_stl(&folded_pair(), "fold").unwrap();
    let out = convert(text.as_bytes(), &PipelineConfig::default());

    assert_eq!(out.format, StlFormat::Ascii);
    let doc = parse_document(&out.document.text).unwrap();
    assert_counts(&doc, 4, 4, 2, "fold").unwrap();
    assert_verdicts(&run_document_checks(&doc), "fold").unwrap();

    let h = std::f64::consts::FRAC_1_SQRT_2;
    assert_vertex_normal(&doc, [1.0, 0.0, 0.0], [0.0, -h, h], 1e-5, "edge").unwrap();
}

#[test]
fn empty_input_gives_header_only_document() {
    let out = convert(&[], &PipelineConfig::default());
    assert_eq!(out.document.text, "# vertices: 0\n# normals: 0\n# faces: 0\n");
    assert!(matches!(
        out.require_geometry(),
        Err(ConvertError::EmptyMesh { total: 0 })
    ));
}

#[test]
fn all_degenerate_input_is_empty_but_counted() {
    let a = p(1.0, 1.0, 1.0);
    let bytes = encode_binary(b"", 2, &[Triangle::new(a, a, a, Vec3::Z); 2]);
    let out = convert(&bytes, &PipelineConfig::default());

    assert_eq!(out.decode_stats.degenerate, 2);
    assert!(out.document.is_empty());
    assert!(matches!(
        out.require_geometry(),
        Err(ConvertError::EmptyMesh { total: 2 })
    ));
}

#[test]
fn ascii_missing_endfacet_keeps_earlier_facets() {
    let mesh = cube(Point3::ORIGIN, 1.0);
    let text = encode_ascii("cube", &mesh.triangles);
    let cut = &text[..text.rfind("  endfacet").unwrap()];

    let out = convert(cut.as_bytes(), &PipelineConfig::default());
    assert_eq!(out.decode_stats.total, 12);
    assert_eq!(out.decode_stats.valid, 11);
    assert_eq!(out.decode_stats.incomplete, 1);
    assert_eq!(out.document.face_count, 11);
    assert!(out.require_geometry().is_ok());
}

#[test]
fn binary_triangle_at_large_coordinates_end_to_end() {
    let far = Triangle::new(
        p(1e12, 0.0, 0.0),
        p(2e12, 0.0, 0.0),
        p(1e12, 1e12, 0.0),
        Vec3::Z,
    );
    let bytes = encode_binary(b"far", 1, &[far]);
    let out = convert(&bytes, &PipelineConfig::default());

    assert_eq!(out.decode_stats.valid, 1);
    assert_eq!(out.document.vertex_count, 3);
    assert_eq!(out.document.face_count, 1);
}

#[test]
fn unwelded_config_from_json() {
    let config = PipelineConfig::from_json_str(r#"{ "builder": { "weld": false } }"#).unwrap();
    let bytes = write_binary_stl(&cube(Point3::ORIGIN, 1.0), "cube").unwrap();
    let out = convert(&bytes, &config);

    let doc = parse_document(&out.document.text).unwrap();
    assert_counts(&doc, 36, 12, 12, "flat cube").unwrap();
    assert!(!out.report().build.welded);
}

#[test]
fn preview_config_fits_and_centers() {
    let bytes = write_binary_stl(&cube(p(40.0, 40.0, 40.0), 20.0), "").unwrap();
    let out = convert(&bytes, &PipelineConfig::preview());

    let doc = parse_document(&out.document.text).unwrap();
    for v in &doc.vertices {
        assert!(v.iter().all(|c| (c.abs() - 2.5).abs() < 1e-6), "{:?}", v);
    }
}

#[test]
fn report_serializes_both_stat_blocks() {
    let bytes = write_binary_stl(&single_triangle(), "tri").unwrap();
    let out = convert(&bytes, &PipelineConfig::default());

    let json = serde_json::to_value(out.report()).unwrap();
    assert_eq!(json["format"], "binary");
    assert_eq!(json["name"], "tri");
    assert_eq!(json["decode"]["valid"], 1);
    assert_eq!(json["build"]["vertices"], 3);
}

#[test]
fn convert_file_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("stl2obj-{}.stl", std::process::id()));
    std::fs::write(&path, write_binary_stl(&single_triangle(), "disk").unwrap()).unwrap();

    let out = convert_file(&path, &PipelineConfig::default());
    std::fs::remove_file(&path).ok();

    let out = out.unwrap();
    assert_eq!(out.name.as_deref(), Some("disk"));
    assert_eq!(out.document.face_count, 1);
}

#[test]
fn missing_input_file_is_io_error() {
    let err = convert_file(
        std::path::Path::new("/nonexistent/input.stl"),
        &PipelineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/input.stl"));
}
