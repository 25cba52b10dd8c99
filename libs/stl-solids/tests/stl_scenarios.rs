//! End-to-end scenarios for the binary writer.
//!
//! Each test builds a document from the public API and checks the encoded
//! bytes against the layout: 80-byte header, `u32` count, 50-byte records.

use stl_solids::{ByteOrder, CubeParams, CylinderParams, Document, Shape, WriterConfig};

const RECORD: usize = 50;
const PREFIX: usize = 84;

fn encode(shapes: &[Shape]) -> Vec<u8> {
    let mut doc = Document::new();
    for shape in shapes {
        doc.add_shape(shape).unwrap();
    }
    doc.to_bytes(ByteOrder::Little).unwrap()
}

fn count_field(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[80..84].try_into().unwrap())
}

fn cube() -> Shape {
    CubeParams::new(0.0, 0.0, 0.0, 5.0).into()
}

fn cylinder() -> Shape {
    CylinderParams::new(100.0, 0.0, 0.0, 3.0, 10.0, 10).into()
}

#[test]
fn cube_alone_is_684_bytes() {
    let bytes = encode(&[cube()]);
    assert_eq!(bytes.len(), 684);
    assert_eq!(count_field(&bytes), 12);
}

#[test]
fn cylinder_alone_is_2084_bytes() {
    let bytes = encode(&[cylinder()]);
    assert_eq!(bytes.len(), 2084);
    assert_eq!(count_field(&bytes), 40);
}

/// The combined file is the concatenation of the standalone records.
#[test]
fn cube_then_cylinder_concatenates_records() {
    let both = encode(&[cube(), cylinder()]);
    let cube_only = encode(&[cube()]);
    let cylinder_only = encode(&[cylinder()]);

    assert_eq!(count_field(&both), 52);
    assert_eq!(both.len(), PREFIX + RECORD * 52);
    assert_eq!(&both[PREFIX..PREFIX + 12 * RECORD], &cube_only[PREFIX..]);
    assert_eq!(&both[PREFIX + 12 * RECORD..], &cylinder_only[PREFIX..]);
}

#[test]
fn every_attribute_field_is_zero() {
    let bytes = encode(&[cube(), cylinder()]);
    for record in bytes[PREFIX..].chunks(RECORD) {
        assert_eq!(&record[48..], &[0, 0]);
    }
}

#[test]
fn encoding_is_deterministic() {
    assert_eq!(encode(&[cube(), cylinder()]), encode(&[cube(), cylinder()]));
}

#[test]
fn saved_file_matches_in_memory_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.stl");

    let mut doc = Document::new();
    doc.add_shape(&cube()).unwrap();
    doc.add_shape(&cylinder()).unwrap();
    doc.save(&path, &WriterConfig::default()).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk.len(), 2684);
    assert_eq!(on_disk, encode(&[cube(), cylinder()]));
}
