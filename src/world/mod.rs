use crate::geometry::*;
use crate::hittable::HitRecord;
use crate::math::*;

use anyhow::bail;

// shadow rays start this far along the light direction to clear the surface they leave from
pub const SHADOW_RAY_OFFSET: f64 = 1.0e-3;
pub const UNOCCLUDED: f64 = 1.0;
// fixed ambient floor for points that cannot see the light
pub const OCCLUDED: f64 = 0.25;

#[derive(Clone, Debug)]
pub struct World {
    pub solids: Vec<Solid>,
    // unit direction towards the light
    pub light: Vec3,
}

impl World {
    /// Normalizes `light`. A zero or non-finite light has no direction and is rejected.
    pub fn new(solids: Vec<Solid>, light: Vec3) -> anyhow::Result<Self> {
        let light = light.normalized();
        if !light.is_finite() {
            bail!("light direction must be a nonzero finite vector");
        }
        Ok(World { solids, light })
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Nearest visible hit along the ray, scanning every solid in sequence order.
    ///
    /// Each sphere consults the raw discriminant of the solid right before it when that solid
    /// is a sphere carrying `Subtract` or `Intersect`. The rule is pairwise only, so longer
    /// chains do not compose into real CSG. Planes always test against slot 0's plane.
    pub fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<HitRecord> {
        let r = Ray::new(origin, direction);
        let mut nearest: Option<HitRecord> = None;
        let mut previous_discriminant: Option<f64> = None;

        let mut accept = |time: f64, solid_index: usize, kind: SolidKind| {
            if !time.is_finite() || time < 0.0 {
                return;
            }
            if nearest.map_or(true, |hit| time < hit.time) {
                nearest = Some(HitRecord::new(time, solid_index, kind));
            }
        };

        for (i, solid) in self.solids.iter().enumerate() {
            match solid.kind {
                SolidKind::Sphere => {
                    let (b, raw_discriminant) = Sphere::from(solid).coefficients(r);
                    let discriminant = match previous_discriminant {
                        Some(previous) if i >= 1 => {
                            self.solids[i - 1].op.chain(previous, raw_discriminant)
                        }
                        _ => raw_discriminant,
                    };
                    if solid.is_visible() {
                        if let Some(time) = Sphere::nearer_root(b, discriminant) {
                            accept(time, i, SolidKind::Sphere);
                        }
                    }
                    previous_discriminant = Some(raw_discriminant);
                    continue;
                }
                SolidKind::Plane => {
                    if let Some(time) = Plane::from(&self.solids[0]).intersect(r) {
                        accept(time, 0, SolidKind::Plane);
                    }
                }
                SolidKind::Cylinder => {
                    if solid.is_visible() {
                        if let Some(time) = Cylinder::from(solid).intersect(r) {
                            accept(time, i, SolidKind::Cylinder);
                        }
                    }
                }
            }
            previous_discriminant = None;
        }
        nearest
    }

    /// Visibility of the light from `point`. Any occluder along the light direction counts.
    pub fn shadow(&self, point: Vec3) -> f64 {
        match self.raycast(point + self.light * SHADOW_RAY_OFFSET, self.light) {
            Some(_) => OCCLUDED,
            None => UNOCCLUDED,
        }
    }
}
