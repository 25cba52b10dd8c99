//! Property-based tests for the shape generators.
//!
//! Run with: cargo test -p stl-solids -- proptest

use ::config::constants::EPSILON_TOLERANCE;
use proptest::prelude::*;
use stl_solids::{generate_cube, generate_cylinder, ByteOrder, CubeParams, CylinderParams, Document, Vec3};

// =============================================================================
// Strategies
// =============================================================================

fn arb_coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn arb_cube() -> impl Strategy<Value = CubeParams> {
    (arb_coord(), arb_coord(), arb_coord(), 0.01..50.0f64)
        .prop_map(|(x, y, z, size)| CubeParams::new(x, y, z, size))
}

fn arb_cylinder() -> impl Strategy<Value = CylinderParams> {
    (arb_coord(), arb_coord(), arb_coord(), 0.1..20.0f64, 0.1..20.0f64, 3u32..64)
        .prop_map(|(x, y, z, r, h, n)| CylinderParams::new(x, y, z, r, h, n))
}

// =============================================================================
// Cube properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_cube_counts_and_normals(params in arb_cube()) {
        let mesh = generate_cube(&params).unwrap();
        prop_assert_eq!(mesh.triangle_count(), 12);

        let axes = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
        for axis in axes {
            prop_assert_eq!(mesh.iter().filter(|t| t.normal == axis).count(), 2);
        }
    }

    #[test]
    fn proptest_cube_vertices_within_bounds(params in arb_cube()) {
        let mesh = generate_cube(&params).unwrap();
        let min = params.origin.as_vec3();
        let max = (params.origin + params.size).as_vec3();
        for t in &mesh {
            for p in t.vertices() {
                prop_assert!(p.cmpge(min).all() && p.cmple(max).all(), "{} outside {}..{}", p, min, max);
            }
        }
    }

    // =========================================================================
    // Cylinder properties
    // =========================================================================

    #[test]
    fn proptest_cylinder_counts(params in arb_cylinder()) {
        let mesh = generate_cylinder(&params).unwrap();
        prop_assert_eq!(mesh.triangle_count(), 4 * params.facets as usize);
    }

    #[test]
    fn proptest_cylinder_vertices_on_rim_or_center(params in arb_cylinder()) {
        let mesh = generate_cylinder(&params).unwrap();
        let bottom = params.base.as_vec3();
        let top = (params.base + stl_solids::core::vec3::DVec3::Z * params.height).as_vec3();
        let tolerance = EPSILON_TOLERANCE * (1.0 + params.base.abs().max_element() + params.radius);

        for facet in mesh.triangles().chunks(4) {
            prop_assert_eq!(facet[2].p3, bottom);
            prop_assert_eq!(facet[3].p3, top);
            for p in facet[0].vertices().into_iter().chain(facet[1].vertices()) {
                let dx = f64::from(p.x) - params.base.x;
                let dy = f64::from(p.y) - params.base.y;
                let distance = (dx * dx + dy * dy).sqrt();
                prop_assert!((distance - params.radius).abs() < tolerance);
            }
        }
    }

    // =========================================================================
    // Writer properties
    // =========================================================================

    #[test]
    fn proptest_encoded_size_law(cubes in prop::collection::vec(arb_cube(), 0..4),
                                 cylinders in prop::collection::vec(arb_cylinder(), 0..4)) {
        let mut doc = Document::new();
        for params in &cubes {
            doc.add(generate_cube(params).unwrap());
        }
        for params in &cylinders {
            doc.add(generate_cylinder(params).unwrap());
        }
        let triangles = 12 * cubes.len()
            + cylinders.iter().map(|c| 4 * c.facets as usize).sum::<usize>();

        let bytes = doc.to_bytes(ByteOrder::Little).unwrap();
        prop_assert_eq!(bytes.len(), 84 + 50 * triangles);
        prop_assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize, triangles);
    }
}
