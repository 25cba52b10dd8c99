//! Writer configuration building on the shared `config` crate.
//!
//! The module re-exports the workspace settings so the writer stays decoupled
//! from literal constants.

use ::config::constants::{header_bytes, GlobalConfig, STL_HEADER_SIZE};

use crate::error::StlResult;

/// Settings for [`Document::save`](crate::Document::save).
///
/// # Examples
/// ```
/// use stl_solids::config::{ByteOrder, WriterConfig};
/// let cfg = WriterConfig::default();
/// assert_eq!(cfg.byte_order(), ByteOrder::Little);
/// assert!(cfg.atomic());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriterConfig {
    global: GlobalConfig,
}

impl WriterConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use stl_solids::config::{ByteOrder, WriterConfig};
    /// let cfg = WriterConfig::new(ByteOrder::Big, false);
    /// assert_eq!(cfg.byte_order(), ByteOrder::Big);
    /// assert!(!cfg.atomic());
    /// ```
    pub fn new(byte_order: ByteOrder, atomic: bool) -> Self {
        Self {
            global: GlobalConfig::new(byte_order, atomic),
        }
    }

    /// Byte order of every numeric field.
    pub fn byte_order(&self) -> ByteOrder {
        self.global.byte_order
    }

    /// Whether saves go through a temporary file that is renamed into place.
    pub fn atomic(&self) -> bool {
        self.global.atomic_write
    }
}

impl From<GlobalConfig> for WriterConfig {
    fn from(global: GlobalConfig) -> Self {
        Self { global }
    }
}

pub use ::config::constants::ByteOrder;

/// Zero-padded header block from free-form text.
pub(crate) fn header_from_text(text: &str) -> StlResult<[u8; STL_HEADER_SIZE]> {
    Ok(header_bytes(text)?)
}
