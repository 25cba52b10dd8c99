//! Primitive geometry generators.
//!
//! Each generator validates its parameters and returns an owned [`Mesh`].
//! The set of shapes is closed, so [`Shape`] is a plain enum.

pub mod cube;
pub mod cylinder;

pub use cube::{generate_cube, CubeParams};
pub use cylinder::{generate_cylinder, CylinderParams};

use crate::error::StlResult;
use crate::mesh::Mesh;

/// Parameters of any supported solid.
///
/// # Examples
/// ```
/// use stl_solids::{CubeParams, Shape};
///
/// let mesh = Shape::Cube(CubeParams::new(0.0, 0.0, 0.0, 1.0)).generate().unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned cube.
    Cube(CubeParams),
    /// Faceted cylinder standing on the XY plane.
    Cylinder(CylinderParams),
}

impl Shape {
    /// Runs the matching generator.
    pub fn generate(&self) -> StlResult<Mesh> {
        match self {
            Shape::Cube(params) => generate_cube(params),
            Shape::Cylinder(params) => generate_cylinder(params),
        }
    }
}

impl From<CubeParams> for Shape {
    fn from(params: CubeParams) -> Self {
        Shape::Cube(params)
    }
}

impl From<CylinderParams> for Shape {
    fn from(params: CylinderParams) -> Self {
        Shape::Cylinder(params)
    }
}
