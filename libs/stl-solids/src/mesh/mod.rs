//! # Mesh Module
//!
//! Ordered triangle sequence produced by one generator call.
//!
//! ## Example
//!
//! ```rust
//! use stl_solids::{Mesh, Triangle, Vec3};
//!
//! let mesh: Mesh = [Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

use crate::core::triangle::Triangle;
use crate::core::vec3::Vec3;

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangles of one generated solid, in generation order.
///
/// A mesh is built in one go and never modified afterwards; the writer emits
/// its triangles in the order they appear here.
///
/// ## Example
///
/// ```rust
/// use stl_solids::Mesh;
///
/// let mesh = Mesh::new();
/// assert!(mesh.is_empty());
/// assert_eq!(mesh.triangle_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh owning the given triangles.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use stl_solids::{Mesh, Triangle, Vec3};
    ///
    /// let t = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
    /// let mesh = Mesh::from_triangles(vec![t, t]);
    /// assert_eq!(mesh.triangle_count(), 2);
    /// ```
    #[must_use]
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Get the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangles in generation order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterate over the triangles in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Axis-aligned bounds of every vertex, `None` for an empty mesh.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use stl_solids::{generate_cube, CubeParams, Vec3};
    ///
    /// let mesh = generate_cube(&CubeParams::new(1.0, 2.0, 3.0, 2.0)).unwrap();
    /// let (min, max) = mesh.bounding_box().unwrap();
    /// assert_eq!(min, Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(max, Vec3::new(3.0, 4.0, 5.0));
    /// ```
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.triangles.iter().flat_map(|t| t.vertices());
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
