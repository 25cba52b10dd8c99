//! Triangle record: three vertices and the face normal supplied by the
//! generator.

use crate::core::vec3::Vec3;

/// A single triangle of a generated mesh.
///
/// The normal is not derived from the vertices. Generators keep it
/// consistent with the counter-clockwise winding of `p1 → p2 → p3`.
///
/// # Examples
/// ```
/// use stl_solids::{Triangle, Vec3};
///
/// let t = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z);
/// assert_eq!(t.winding_normal(), Vec3::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub p1: Vec3,
    /// Second vertex.
    pub p2: Vec3,
    /// Third vertex.
    pub p3: Vec3,
    /// Outward face normal.
    pub normal: Vec3,
}

impl Triangle {
    /// Creates a triangle from its vertices and normal.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, normal: Vec3) -> Self {
        Self { p1, p2, p3, normal }
    }

    /// Returns the vertices in `p1, p2, p3` order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Unit normal implied by the vertex winding.
    ///
    /// Zero for a degenerate triangle.
    pub fn winding_normal(&self) -> Vec3 {
        (self.p2 - self.p1)
            .cross(self.p3 - self.p1)
            .normalize_or_zero()
    }
}

#[cfg(test)]
mod tests;
