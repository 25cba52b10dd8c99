//! Cylinder primitive.
//!
//! The curved wall is split into `facets` flat quads, each centered on
//! `2π·i/facets` and spanning half a sector on either side. Every facet adds
//! two wall triangles plus one triangle to each cap fan.

use log::debug;

use ::config::constants::{DEFAULT_FACETS, FACET_PI as PI, MIN_FACETS};

use crate::{
    core::{
        triangle::Triangle,
        vec3::{from_f64, negate, unit_z, DVec3},
    },
    error::{StlError, StlResult},
    mesh::Mesh,
};

/// Parameters of a cylinder standing on the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams {
    /// Center of the bottom cap.
    pub base: DVec3,
    /// Radius of both caps.
    pub radius: f64,
    /// Extent along +Z.
    pub height: f64,
    /// Number of flat wall facets.
    pub facets: u32,
}

impl CylinderParams {
    /// Cylinder whose bottom cap is centered on `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64, radius: f64, height: f64, facets: u32) -> Self {
        Self {
            base: DVec3::new(x, y, z),
            radius,
            height,
            facets,
        }
    }

    /// Cylinder with [`DEFAULT_FACETS`] wall facets.
    pub fn with_default_facets(x: f64, y: f64, z: f64, radius: f64, height: f64) -> Self {
        Self::new(x, y, z, radius, height, DEFAULT_FACETS)
    }

    fn validate(&self) -> StlResult<()> {
        if !self.base.is_finite() {
            return Err(StlError::invalid(
                "cylinder",
                format!("base must be finite, got {}", self.base),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(StlError::invalid(
                "cylinder",
                format!("radius must be positive, got {}", self.radius),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(StlError::invalid(
                "cylinder",
                format!("height must be positive, got {}", self.height),
            ));
        }
        if self.facets < MIN_FACETS {
            return Err(StlError::invalid(
                "cylinder",
                format!("facets must be >= {MIN_FACETS}, got {}", self.facets),
            ));
        }
        Ok(())
    }
}

/// Creates a faceted cylinder.
///
/// # Arguments
/// * `params` - Base center, radius, height and facet count.
///
/// # Returns
/// * `Ok(Mesh)` - `4 * facets` triangles, facet by facet.
/// * `Err(InvalidParameter)` - non-positive dimensions or fewer than 3 facets.
///
/// # Examples
/// ```
/// use stl_solids::{generate_cylinder, CylinderParams};
///
/// let mesh = generate_cylinder(&CylinderParams::new(100.0, 0.0, 0.0, 3.0, 10.0, 10)).unwrap();
/// assert_eq!(mesh.triangle_count(), 40);
/// ```
pub fn generate_cylinder(params: &CylinderParams) -> StlResult<Mesh> {
    params.validate()?;

    let CylinderParams {
        base,
        radius,
        height,
        facets,
    } = *params;
    let n = f64::from(facets);
    let half_sector = PI / n;

    let center_bottom = base.as_vec3();
    let center_top = (base + DVec3::Z * height).as_vec3();
    let bottom_normal = negate(unit_z());
    let top_normal = unit_z();

    // Rim points on the facet boundaries: boundary `k` is the leading edge of
    // facet `k` and the trailing edge of facet `k - 1`, so neighbours share
    // identical vertices and the last facet closes onto the first.
    let ring: Vec<(f64, f64)> = (0..facets)
        .map(|k| {
            let angle = 2.0 * PI * f64::from(k) / n - half_sector;
            let (sin, cos) = angle.sin_cos();
            (radius * cos + base.x, radius * sin + base.y)
        })
        .collect();
    let bottom_z = base.z;
    let top_z = base.z + height;

    let mut triangles = Vec::with_capacity(4 * ring.len());
    for (i, &(x1, y1)) in ring.iter().enumerate() {
        let (x2, y2) = ring[(i + 1) % ring.len()];

        let angle_n = 2.0 * PI * i as f64 / n;
        let (sin_n, cos_n) = angle_n.sin_cos();
        let wall_normal = from_f64(cos_n, sin_n, 0.0);

        let p0 = from_f64(x1, y1, bottom_z);
        let p1 = from_f64(x1, y1, top_z);
        let p2 = from_f64(x2, y2, bottom_z);
        let p3 = from_f64(x2, y2, top_z);

        triangles.push(Triangle::new(p0, p2, p1, wall_normal));
        triangles.push(Triangle::new(p1, p2, p3, wall_normal));
        triangles.push(Triangle::new(p2, p0, center_bottom, bottom_normal));
        triangles.push(Triangle::new(p1, p3, center_top, top_normal));
    }

    let mesh = Mesh::from_triangles(triangles);
    debug!(
        "generated cylinder at {} r={} h={} facets={}: {} triangles",
        base,
        radius,
        height,
        facets,
        mesh.triangle_count()
    );
    Ok(mesh)
}
