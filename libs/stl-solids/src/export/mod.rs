//! Binary STL export.
//!
//! Layout: 80-byte header, `u32` triangle count, then per triangle the normal
//! and the three vertices as 12 `f32` values followed by a `u16` attribute.
//! Every numeric field uses the configured byte order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use tempfile::NamedTempFile;

use ::config::constants::STL_ATTRIBUTE_VALUE;

use crate::config::{ByteOrder, WriterConfig};
use crate::core::triangle::Triangle;
use crate::core::vec3::Vec3;
use crate::document::Document;
use crate::error::StlResult;

/// Writes `document` to `writer` in the binary layout.
///
/// The writer is used as-is; wrap files in a `BufWriter`.
///
/// # Examples
/// ```
/// use stl_solids::{export::write_binary, ByteOrder, CubeParams, Document};
///
/// let mut doc = Document::new();
/// doc.add_shape(&CubeParams::new(0.0, 0.0, 0.0, 5.0).into()).unwrap();
///
/// let mut bytes = Vec::new();
/// write_binary(&doc, &mut bytes, ByteOrder::Little).unwrap();
/// assert_eq!(bytes.len(), 684);
/// assert_eq!(&bytes[80..84], &12u32.to_le_bytes());
/// ```
pub fn write_binary<W: Write>(document: &Document, mut writer: W, order: ByteOrder) -> StlResult<()> {
    let count = document.triangle_count()?;

    writer.write_all(document.header())?;
    writer.write_all(&u32_bytes(count, order))?;

    for triangle in document.meshes().iter().flat_map(|mesh| mesh.iter()) {
        write_triangle(&mut writer, triangle, order)?;
    }

    Ok(())
}

/// One 50-byte record: normal, p1, p2, p3, attribute.
fn write_triangle<W: Write>(writer: &mut W, triangle: &Triangle, order: ByteOrder) -> StlResult<()> {
    for v in [triangle.normal, triangle.p1, triangle.p2, triangle.p3] {
        write_vec3(writer, v, order)?;
    }
    writer.write_all(&u16_bytes(STL_ATTRIBUTE_VALUE, order))?;
    Ok(())
}

fn write_vec3<W: Write>(writer: &mut W, v: Vec3, order: ByteOrder) -> StlResult<()> {
    for component in v.to_array() {
        let bytes = match order {
            ByteOrder::Little => component.to_le_bytes(),
            ByteOrder::Big => component.to_be_bytes(),
        };
        writer.write_all(&bytes)?;
    }
    Ok(())
}

fn u32_bytes(value: u32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

fn u16_bytes(value: u16, order: ByteOrder) -> [u8; 2] {
    match order {
        ByteOrder::Little => value.to_le_bytes(),
        ByteOrder::Big => value.to_be_bytes(),
    }
}

impl Document {
    /// Encodes the document into a byte vector.
    pub fn to_bytes(&self, order: ByteOrder) -> StlResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        write_binary(self, &mut bytes, order)?;
        Ok(bytes)
    }

    /// Writes the document to `path`, creating or replacing it.
    ///
    /// An open failure is returned before anything is written. With
    /// `config.atomic()` the bytes go to a temporary file next to `path`
    /// that is renamed over it once fully flushed, so a failed write leaves
    /// any previous file untouched.
    ///
    /// # Examples
    /// ```no_run
    /// use stl_solids::{config::WriterConfig, CubeParams, Document};
    ///
    /// let mut doc = Document::new();
    /// doc.add_shape(&CubeParams::new(0.0, 0.0, 0.0, 5.0).into()).unwrap();
    /// doc.save("cube.stl", &WriterConfig::default()).unwrap();
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P, config: &WriterConfig) -> StlResult<()> {
        let path = path.as_ref();
        info!(
            "writing {} bytes of STL to {}",
            self.encoded_len(),
            path.display()
        );

        if config.atomic() {
            self.save_atomic(path, config.byte_order())?;
        } else {
            let mut writer = BufWriter::new(File::create(path)?);
            write_binary(self, &mut writer, config.byte_order())?;
            writer.flush()?;
        }

        info!("wrote {}", path.display());
        Ok(())
    }

    fn save_atomic(&self, path: &Path, order: ByteOrder) -> StlResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;

        if let Err(err) = self.write_synced(temp.as_file_mut(), order) {
            warn!("discarding partial STL for {}: {err}", path.display());
            return Err(err);
        }

        temp.persist(path).map_err(|err| err.error)?;
        Ok(())
    }

    fn write_synced(&self, file: &mut File, order: ByteOrder) -> StlResult<()> {
        let mut writer = BufWriter::new(&mut *file);
        write_binary(self, &mut writer, order)?;
        writer.flush()?;
        drop(writer);
        file.sync_all()?;
        Ok(())
    }
}
