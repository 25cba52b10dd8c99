//! # Config Crate
//!
//! Centralized configuration constants for the STL solids pipeline.
//! Record sizes of the binary layout, generator limits and the writer
//! defaults live here so the kernel never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{STL_COUNT_SIZE, STL_HEADER_SIZE, STL_TRIANGLE_RECORD_SIZE};
//!
//! // Size of a binary file holding a single cube
//! let bytes = STL_HEADER_SIZE + STL_COUNT_SIZE + 12 * STL_TRIANGLE_RECORD_SIZE;
//! assert_eq!(bytes, 684);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and small validated snapshots
//! - **Format Exact**: Sizes match the flat binary STL layout

pub mod constants;
