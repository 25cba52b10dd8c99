//! Centralized configuration values shared across the STL solids pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// BINARY LAYOUT
// =============================================================================

/// Size of the free-form header block that opens every binary STL file.
///
/// # Examples
/// ```
/// use config::constants::STL_HEADER_SIZE;
/// assert_eq!(STL_HEADER_SIZE, 80);
/// ```
pub const STL_HEADER_SIZE: usize = 80;

/// Size of the `u32` triangle count that follows the header.
///
/// # Examples
/// ```
/// use config::constants::STL_COUNT_SIZE;
/// assert_eq!(STL_COUNT_SIZE, 4);
/// ```
pub const STL_COUNT_SIZE: usize = 4;

/// Size of one triangle record: 12 `f32` values plus a `u16` attribute.
///
/// # Examples
/// ```
/// use config::constants::STL_TRIANGLE_RECORD_SIZE;
/// assert_eq!(STL_TRIANGLE_RECORD_SIZE, 12 * 4 + 2);
/// ```
pub const STL_TRIANGLE_RECORD_SIZE: usize = 50;

/// Value written to the per-triangle attribute field.
pub const STL_ATTRIBUTE_VALUE: u16 = 0;

// =============================================================================
// GENERATOR LIMITS
// =============================================================================

/// Smallest facet count that still closes a cylinder.
///
/// # Examples
/// ```
/// use config::constants::MIN_FACETS;
/// assert_eq!(MIN_FACETS, 3);
/// ```
pub const MIN_FACETS: u32 = 3;

/// Facet count used when a caller has no preference.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_FACETS, MIN_FACETS};
/// assert!(DEFAULT_FACETS >= MIN_FACETS);
/// ```
pub const DEFAULT_FACETS: u32 = 32;

/// Value of π used for facet angles.
///
/// Kept at 15 significant digits rather than `std::f64::consts::PI`: the
/// narrowed `f32` fields of near-axis normals depend on the exact value, and
/// generated files stay byte-stable only with this literal.
///
/// # Examples
/// ```
/// use config::constants::FACET_PI;
/// assert!((FACET_PI - std::f64::consts::PI).abs() < 1.0e-14);
/// ```
#[allow(clippy::approx_constant)]
pub const FACET_PI: f64 = 3.14159265358979;

/// Numerical tolerance used when comparing generated coordinates.
///
/// Coordinates are stored as `f32`, so the tolerance is relative: scale it by
/// the magnitude of the coordinates being compared.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-3);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-5;

// =============================================================================
// WRITER SETTINGS
// =============================================================================

/// Byte order of every multi-byte field in the binary layout.
///
/// # Examples
/// ```
/// use config::constants::ByteOrder;
/// assert_eq!(ByteOrder::default(), ByteOrder::Little);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Little-endian, the common interchange convention.
    #[default]
    Little,
    /// Big-endian.
    Big,
}

/// Immutable snapshot of writer settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::{ByteOrder, GlobalConfig};
/// let config = GlobalConfig::default();
/// assert_eq!(config.byte_order, ByteOrder::Little);
/// assert!(config.atomic_write);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Byte order used for the count, the floats and the attribute field.
    pub byte_order: ByteOrder,
    /// Write through a temporary file and rename it over the target.
    pub atomic_write: bool,
}

impl GlobalConfig {
    /// Builds a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ByteOrder, GlobalConfig};
    /// let cfg = GlobalConfig::new(ByteOrder::Big, false);
    /// assert_eq!(cfg.byte_order, ByteOrder::Big);
    /// ```
    pub fn new(byte_order: ByteOrder, atomic_write: bool) -> Self {
        Self {
            byte_order,
            atomic_write,
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Little,
            atomic_write: true,
        }
    }
}

/// Builds a zero-padded header block from free-form text.
///
/// # Examples
/// ```
/// use config::constants::{header_bytes, STL_HEADER_SIZE};
/// let header = header_bytes("solids").expect("fits");
/// assert_eq!(&header[..6], b"solids");
/// assert!(header[6..].iter().all(|&b| b == 0));
/// assert!(header_bytes(&"x".repeat(STL_HEADER_SIZE + 1)).is_err());
/// ```
pub fn header_bytes(text: &str) -> Result<[u8; STL_HEADER_SIZE], ConfigError> {
    let bytes = text.as_bytes();
    if bytes.len() > STL_HEADER_SIZE {
        return Err(ConfigError::HeaderTooLong(bytes.len()));
    }
    let mut header = [0u8; STL_HEADER_SIZE];
    header[..bytes.len()].copy_from_slice(bytes);
    Ok(header)
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when header text does not fit in the header block.
    HeaderTooLong(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HeaderTooLong(len) => {
                write!(f, "header must be at most {STL_HEADER_SIZE} bytes: {len}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
