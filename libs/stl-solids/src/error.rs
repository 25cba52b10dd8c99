//! # Error Types
//!
//! Error types for mesh generation and STL output. All errors are explicit
//! and carry enough context to tell which shape or sink failed.
//!
//! ## Error Policy
//!
//! - Generators reject invalid parameters instead of emitting degenerate triangles
//! - The writer fails fast when the sink cannot be opened
//! - Errors include context for debugging

use ::config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating or writing solids.
///
/// ## Example
///
/// ```rust
/// use stl_solids::{generate_cube, CubeParams, StlError};
///
/// match generate_cube(&CubeParams::new(0.0, 0.0, 0.0, -1.0)) {
///     Ok(mesh) => println!("{} triangles", mesh.triangle_count()),
///     Err(StlError::InvalidParameter { shape, message }) => eprintln!("{shape}: {message}"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum StlError {
    /// Shape parameters outside the generator's contract.
    #[error("Invalid {shape} parameter: {message}")]
    InvalidParameter {
        /// Shape kind that rejected its parameters (cube, cylinder)
        shape: &'static str,
        /// Which parameter was invalid and why
        message: String,
    },

    /// Failure opening, writing, flushing or renaming the sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid writer configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The document holds more triangles than the `u32` count field can carry.
    #[error("Triangle count {0} does not fit in the STL count field")]
    TriangleCountOverflow(usize),
}

impl StlError {
    pub(crate) fn invalid(shape: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            shape,
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for generation and output.
///
/// ## Example
///
/// ```rust
/// use stl_solids::error::StlResult;
/// use stl_solids::Mesh;
///
/// fn empty_mesh() -> StlResult<Mesh> {
///     Ok(Mesh::default())
/// }
/// # assert!(empty_mesh().is_ok());
/// ```
pub type StlResult<T> = Result<T, StlError>;

// =============================================================================
// TESTS
// =============================================================================
