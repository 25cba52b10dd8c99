//! Document: the ordered set of meshes written to one STL file.

use log::debug;

use ::config::constants::{STL_COUNT_SIZE, STL_HEADER_SIZE, STL_TRIANGLE_RECORD_SIZE};

use crate::config::header_from_text;
use crate::error::{StlError, StlResult};
use crate::mesh::Mesh;
use crate::primitives::Shape;

/// Meshes in add order plus the 80-byte header.
///
/// The header is zero-filled unless set from text.
///
/// # Examples
/// ```
/// use stl_solids::{CubeParams, CylinderParams, Document};
///
/// let mut doc = Document::new();
/// doc.add_shape(&CubeParams::new(0.0, 0.0, 0.0, 5.0).into()).unwrap();
/// doc.add_shape(&CylinderParams::new(100.0, 0.0, 0.0, 3.0, 10.0, 10).into()).unwrap();
/// assert_eq!(doc.triangle_count().unwrap(), 52);
/// assert_eq!(doc.encoded_len(), 84 + 50 * 52);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    header: [u8; STL_HEADER_SIZE],
    meshes: Vec<Mesh>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            header: [0u8; STL_HEADER_SIZE],
            meshes: Vec::new(),
        }
    }
}

impl Document {
    /// Empty document with a zeroed header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document whose header starts with `text`, zero-padded.
    ///
    /// Fails with `StlError::Config` if `text` exceeds 80 bytes.
    pub fn with_header(text: &str) -> StlResult<Self> {
        Ok(Self {
            header: header_from_text(text)?,
            meshes: Vec::new(),
        })
    }

    /// Appends a mesh after the ones already added.
    pub fn add(&mut self, mesh: Mesh) {
        debug!(
            "document: added mesh #{} with {} triangles",
            self.meshes.len(),
            mesh.triangle_count()
        );
        self.meshes.push(mesh);
    }

    /// Generates `shape` and appends the result.
    pub fn add_shape(&mut self, shape: &Shape) -> StlResult<()> {
        let mesh = shape.generate()?;
        self.add(mesh);
        Ok(())
    }

    /// Header block written at offset 0.
    pub fn header(&self) -> &[u8; STL_HEADER_SIZE] {
        &self.header
    }

    /// Meshes in add order.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Number of meshes added so far.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Total triangles across all meshes, as stored in the count field.
    pub fn triangle_count(&self) -> StlResult<u32> {
        let total: usize = self.meshes.iter().map(Mesh::triangle_count).sum();
        u32::try_from(total).map_err(|_| StlError::TriangleCountOverflow(total))
    }

    /// Exact size of the encoded file: `84 + 50 * triangles`.
    pub fn encoded_len(&self) -> usize {
        let total: usize = self.meshes.iter().map(Mesh::triangle_count).sum();
        STL_HEADER_SIZE + STL_COUNT_SIZE + STL_TRIANGLE_RECORD_SIZE * total
    }
}

#[cfg(test)]
mod tests;
