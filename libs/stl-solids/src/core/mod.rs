//! Core data structures shared by the generators and the writer.
//!
//! Includes the `f32` vector alias (`Vec3`) and the `Triangle` record.

pub mod triangle;
pub mod vec3;
