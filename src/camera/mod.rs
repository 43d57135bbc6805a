use crate::math::*;

pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 100.0, 1500.0);

/// Fixed eye aiming one ray per pixel through the point `(x, y, 0)`.
///
/// There is no focal length or field of view. Pixel coordinates are used directly as world
/// coordinates on the z = 0 plane.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3) -> Self {
        Camera { eye }
    }

    pub fn get_ray(&self, x: usize, y: usize) -> Ray {
        let target = Vec3::new(x as f64, y as f64, 0.0);
        Ray::new(self.eye, (target - self.eye).normalized())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(DEFAULT_EYE)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ray_aims_through_pixel() {
        let camera = Camera::default();
        let ray = camera.get_ray(250, 100);
        assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
        // crosses z = 0 exactly at the pixel
        let time = -ray.origin.z / ray.direction.z;
        let crossing = ray.point_at_parameter(time);
        assert!((crossing - Vec3::new(250.0, 100.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_center_ray() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0));
        let ray = camera.get_ray(0, 0);
        assert_eq!(ray.direction, -Vec3::Z);
    }
}
