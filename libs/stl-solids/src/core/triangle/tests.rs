use super::*;

#[test]
fn vertices_keep_field_order() {
    let t = Triangle::new(Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE);
    assert_eq!(t.vertices(), [Vec3::X, Vec3::Y, Vec3::Z]);
}

#[test]
fn clockwise_winding_points_down() {
    let t = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X, Vec3::NEG_Z);
    assert_eq!(t.winding_normal(), Vec3::NEG_Z);
}

#[test]
fn degenerate_triangle_has_zero_winding_normal() {
    let t = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Vec3::Z);
    assert_eq!(t.winding_normal(), Vec3::ZERO);
}
