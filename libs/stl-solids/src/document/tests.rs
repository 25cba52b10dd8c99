use super::*;
use crate::primitives::{generate_cube, CubeParams, CylinderParams};

#[test]
fn new_document_is_empty_with_zero_header() {
    let doc = Document::new();
    assert_eq!(doc.mesh_count(), 0);
    assert_eq!(doc.triangle_count().unwrap(), 0);
    assert_eq!(doc.encoded_len(), 84);
    assert!(doc.header().iter().all(|&b| b == 0));
}

#[test]
fn with_header_pads_text() {
    let doc = Document::with_header("cube and cylinder").unwrap();
    assert_eq!(&doc.header()[..17], b"cube and cylinder");
    assert!(doc.header()[17..].iter().all(|&b| b == 0));
}

#[test]
fn with_header_rejects_long_text() {
    let err = Document::with_header(&"a".repeat(81)).unwrap_err();
    assert!(matches!(err, StlError::Config(_)));
}

#[test]
fn meshes_keep_add_order() {
    let small = generate_cube(&CubeParams::new(0.0, 0.0, 0.0, 1.0)).unwrap();
    let large = generate_cube(&CubeParams::new(0.0, 0.0, 0.0, 9.0)).unwrap();
    let mut doc = Document::new();
    doc.add(small.clone());
    doc.add(large.clone());
    assert_eq!(doc.meshes(), &[small, large]);
}

#[test]
fn add_shape_propagates_invalid_parameters() {
    let mut doc = Document::new();
    let result = doc.add_shape(&CylinderParams::new(0.0, 0.0, 0.0, 1.0, 1.0, 1).into());
    assert!(matches!(result, Err(StlError::InvalidParameter { .. })));
    assert_eq!(doc.mesh_count(), 0);
}

#[test]
fn triangle_count_sums_meshes() {
    let mut doc = Document::new();
    doc.add_shape(&CubeParams::new(0.0, 0.0, 0.0, 5.0).into()).unwrap();
    doc.add_shape(&CubeParams::new(10.0, 0.0, 0.0, 5.0).into()).unwrap();
    doc.add_shape(&CylinderParams::new(0.0, 0.0, 0.0, 1.0, 2.0, 6).into()).unwrap();
    assert_eq!(doc.triangle_count().unwrap(), 12 + 12 + 24);
    assert_eq!(doc.encoded_len(), 84 + 50 * 48);
}
