use super::SamplerIntegrator;
use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

use std::sync::Arc;

pub const SPECULAR_EXPONENT: i32 = 50;

/// Direct lighting from the single directional light: Lambertian diffuse, a colorless Phong
/// highlight and a hard shadow. No secondary bounces.
pub struct PhongIntegrator {
    pub world: Arc<World>,
}

impl PhongIntegrator {
    pub fn new(world: Arc<World>) -> Self {
        PhongIntegrator { world }
    }

    /// Light response at `point` on solid `solid_index`, seen along `view`.
    ///
    /// The result is not clamped; the highlight is added equally to every channel.
    pub fn shade(&self, normal: Vec3, point: Vec3, view: Vec3, solid_index: usize) -> RGBColor {
        let light = self.world.light;
        let mut ln = light * normal;
        let reflected = normal * (2.0 * ln) - light;
        let lv = -(reflected * view);
        let specular = if lv > 0.0 {
            lv.powi(SPECULAR_EXPONENT)
        } else {
            0.0
        };
        if ln < 0.0 {
            ln = 0.0;
        }
        let br = self.world.shadow(point);
        self.world.solids[solid_index].color * (ln * br) + specular * br
    }
}

impl SamplerIntegrator for PhongIntegrator {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> RGBColor {
        profile.camera_rays += 1;
        let hit = match self.world.raycast(camera_ray.origin, camera_ray.direction) {
            Some(hit) => hit,
            None => return RGBColor::BLACK,
        };
        let point = camera_ray.point_at_parameter(hit.time);
        let normal = self.world.solids[hit.solid_index].normal_at(hit.kind, point);
        if !normal.is_finite() {
            // hit exactly on a center or axis, nothing sensible to shade
            return RGBColor::BLACK;
        }
        profile.hits += 1;
        profile.shadow_rays += 1;
        let color = self.shade(normal, point, camera_ray.direction, hit.solid_index);
        debug_assert!(color.is_finite(), "{:?} resulted in {:?}", camera_ray, color);
        color
    }
}
