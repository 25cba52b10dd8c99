//! Parametric solids to binary STL.
//!
//! Generators turn cube and cylinder parameters into owned [`Mesh`] values, a
//! [`Document`] collects them in order and the [`export`] module serializes the
//! document to the flat binary STL layout.
//!
//! ```rust
//! use stl_solids::{ByteOrder, CubeParams, CylinderParams, Document};
//!
//! let mut doc = Document::new();
//! doc.add_shape(&CubeParams::new(0.0, 0.0, 0.0, 5.0).into()).unwrap();
//! doc.add_shape(&CylinderParams::new(100.0, 0.0, 0.0, 3.0, 10.0, 10).into()).unwrap();
//!
//! let bytes = doc.to_bytes(ByteOrder::Little).unwrap();
//! assert_eq!(bytes.len(), 84 + 50 * 52);
//! ```

pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod export;
pub mod mesh;
pub mod primitives;

pub use crate::config::{ByteOrder, WriterConfig};
pub use crate::core::triangle::Triangle;
pub use crate::core::vec3::Vec3;
pub use document::Document;
pub use error::{StlError, StlResult};
pub use mesh::Mesh;
pub use primitives::{generate_cube, generate_cylinder, CubeParams, CylinderParams, Shape};
