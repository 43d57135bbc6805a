use super::Solid;
use crate::math::*;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub radius: f64,
    pub origin: Vec3,
}

impl Sphere {
    pub fn new(radius: f64, origin: Vec3) -> Sphere {
        Sphere { radius, origin }
    }

    /// Linear coefficient and discriminant of `t² + b·t + c = 0` for a unit-length ray direction.
    pub fn coefficients(&self, r: Ray) -> (f64, f64) {
        let oc: Vec3 = r.origin - self.origin;
        let b = 2.0 * (r.direction * oc);
        let c = oc * oc - self.radius * self.radius;
        (b, b * b - 4.0 * c)
    }

    /// Nearer root for a discriminant that may have been adjusted by a preceding CSG operator.
    pub fn nearer_root(b: f64, discriminant: f64) -> Option<f64> {
        if discriminant >= 0.0 {
            Some((-b - discriminant.sqrt()) / 2.0)
        } else {
            None
        }
    }

    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.origin).normalized()
    }
}

impl From<&Solid> for Sphere {
    fn from(solid: &Solid) -> Self {
        Sphere::new(solid.radius, solid.position)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_head_on_hit() {
        let sphere = Sphere::new(2.0, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
        let (b, d) = sphere.coefficients(ray);
        let time = Sphere::nearer_root(b, d).unwrap();
        assert!((time - 8.0).abs() < 1e-9);
        let normal = sphere.normal_at(ray.point_at_parameter(time));
        assert!((normal - Vec3::Z).norm() < 1e-9);
    }

    #[test]
    fn test_miss_has_negative_discriminant() {
        let sphere = Sphere::new(1.0, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(5.0, 0.0, 10.0), -Vec3::Z);
        let (b, d) = sphere.coefficients(ray);
        assert!(d < 0.0);
        assert!(Sphere::nearer_root(b, d).is_none());
    }

    #[test]
    fn test_behind_origin_root_is_negative() {
        let sphere = Sphere::new(1.0, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        let (b, d) = sphere.coefficients(ray);
        assert!(Sphere::nearer_root(b, d).unwrap() < 0.0);
    }
}
