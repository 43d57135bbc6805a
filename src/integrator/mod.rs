mod phong;

pub use phong::PhongIntegrator;

use crate::math::*;
use crate::profile::Profile;

pub trait SamplerIntegrator: Sync + Send {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> RGBColor;
}
