//! Cube primitive implementation.
//!
//! Twelve triangles, two per face, each tagged with the axis-aligned outward
//! normal of its face.


use log::debug;

use crate::core::triangle::Triangle;
use crate::core::vec3::{negate, unit_x, unit_y, unit_z, DVec3, Vec3};
use crate::error::{StlError, StlResult};
use crate::mesh::Mesh;

/// Face triangles as corner indices into the bit-pattern corner table.
///
/// Corner `i` sits at `origin + size * (i & 1, (i >> 1) & 1, (i >> 2) & 1)`.
/// Every triple is counter-clockwise seen from outside.
const FACE_TRIANGLES: [[usize; 3]; 12] = [
    // Front face (y = 0)
    [0, 1, 4],
    [1, 5, 4],
    // Right face (x = size)
    [1, 3, 7],
    [1, 7, 5],
    // Top face (z = size)
    [5, 7, 4],
    [7, 6, 4],
    // Bottom face (z = 0)
    [0, 2, 1],
    [1, 2, 3],
    // Left face (x = 0)
    [0, 4, 6],
    [0, 6, 2],
    // Back face (y = size)
    [3, 2, 6],
    [3, 6, 7],
];

/// Parameters of an axis-aligned cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeParams {
    /// Minimum corner.
    pub origin: DVec3,
    /// Edge length.
    pub size: f64,
}

impl CubeParams {
    /// Cube with its minimum corner at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64, size: f64) -> Self {
        Self {
            origin: DVec3::new(x, y, z),
            size,
        }
    }

    fn validate(&self) -> StlResult<()> {
        if !self.origin.is_finite() {
            return Err(StlError::invalid(
                "cube",
                format!("origin must be finite, got {}", self.origin),
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(StlError::invalid(
                "cube",
                format!("size must be positive, got {}", self.size),
            ));
        }
        Ok(())
    }
}

/// Generates the 12 triangles of a cube.
///
/// # Arguments
/// * `params` - Minimum corner and edge length.
///
/// # Returns
/// The cube `Mesh`, or `InvalidParameter` if the size is not positive.
///
/// # Examples
/// ```
/// use stl_solids::{generate_cube, CubeParams};
///
/// let mesh = generate_cube(&CubeParams::new(0.0, 0.0, 0.0, 5.0)).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn generate_cube(params: &CubeParams) -> StlResult<Mesh> {
    params.validate()?;

    let corners: [Vec3; 8] = std::array::from_fn(|i| {
        let step = DVec3::new(
            (i & 1) as f64,
            ((i >> 1) & 1) as f64,
            ((i >> 2) & 1) as f64,
        );
        (params.origin + step * params.size).as_vec3()
    });

    let normals = [
        negate(unit_y()),
        unit_x(),
        unit_z(),
        negate(unit_z()),
        negate(unit_x()),
        unit_y(),
    ];

    let mesh: Mesh = FACE_TRIANGLES
        .iter()
        .enumerate()
        .map(|(i, &[a, b, c])| Triangle::new(corners[a], corners[b], corners[c], normals[i / 2]))
        .collect();

    debug!(
        "generated cube at {} size {}: {} triangles",
        params.origin,
        params.size,
        mesh.triangle_count()
    );
    Ok(mesh)
}
