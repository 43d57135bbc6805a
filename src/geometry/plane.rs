use super::Solid;
use crate::math::*;

// rays closer than this to parallel are treated as missing the plane
pub const PARALLEL_EPSILON: f64 = 1.0e-7;

#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Plane {
        Plane { point, normal }
    }

    /// Ray parameter where the ray crosses the plane. Can be negative.
    pub fn intersect(&self, r: Ray) -> Option<f64> {
        let denom = self.normal * r.direction;
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }
        Some(-(self.normal * (r.origin - self.point)) / denom)
    }
}

impl From<&Solid> for Plane {
    fn from(solid: &Solid) -> Self {
        Plane::new(solid.position, solid.normal)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_floor() {
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);
        let ray = Ray::new(Vec3::new(3.0, 4.0, 0.0), -Vec3::Y);
        assert_eq!(plane.intersect(ray), Some(5.0));
    }

    #[test]
    fn test_parallel() {
        let plane = Plane::new(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert_eq!(plane.intersect(ray), None);
    }

    #[test]
    fn test_zero_normal_never_hits() {
        let plane = Plane::new(Vec3::ZERO, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y);
        assert_eq!(plane.intersect(ray), None);
    }
}
