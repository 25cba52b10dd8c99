//! Thin wrapper around `glam::Vec3` shared across kernel modules.
//!
//! Vertices and normals are stored as `f32` because the binary layout stores
//! 4-byte floats. Generators do their trigonometry in `f64` and narrow once
//! through [`from_f64`].

pub use glam::DVec3;
pub use glam::Vec3;

/// Flips the sign of every component.
///
/// Computed as `0 - v`, so zero components stay `+0.0` in the written bytes.
///
/// # Examples
/// ```
/// use stl_solids::core::vec3::{negate, Vec3};
/// assert_eq!(negate(Vec3::new(1.0, -2.0, 0.5)), Vec3::new(-1.0, 2.0, -0.5));
/// ```
pub fn negate(v: Vec3) -> Vec3 {
    Vec3::ZERO - v
}

/// Component-wise `a - b`.
///
/// # Examples
/// ```
/// use stl_solids::core::vec3::{subtract, Vec3};
/// let d = subtract(Vec3::new(3.0, 2.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
/// assert_eq!(d, Vec3::new(2.0, 1.0, 0.0));
/// ```
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Component-wise `c * v`.
///
/// # Examples
/// ```
/// use stl_solids::core::vec3::{scale, Vec3};
/// assert_eq!(scale(2.0, Vec3::new(1.0, 2.0, 3.0)), Vec3::new(2.0, 4.0, 6.0));
/// ```
pub fn scale(c: f32, v: Vec3) -> Vec3 {
    c * v
}

/// Narrows double precision coordinates to the stored `f32` vector.
///
/// # Examples
/// ```
/// use stl_solids::core::vec3::{from_f64, Vec3};
/// assert_eq!(from_f64(0.5, 1.0, 2.0), Vec3::new(0.5, 1.0, 2.0));
/// ```
pub fn from_f64(x: f64, y: f64, z: f64) -> Vec3 {
    DVec3::new(x, y, z).as_vec3()
}

/// Creates a unit length vector along the X axis.
pub fn unit_x() -> Vec3 {
    Vec3::X
}

/// Creates a unit length vector along the Y axis.
pub fn unit_y() -> Vec3 {
    Vec3::Y
}

/// Creates a unit length vector along the Z axis.
pub fn unit_z() -> Vec3 {
    Vec3::Z
}
