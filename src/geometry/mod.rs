mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Sphere,
    Plane,
    Cylinder,
}

impl SolidKind {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(SolidKind::Sphere),
            1 => Some(SolidKind::Plane),
            2 => Some(SolidKind::Cylinder),
            _ => None,
        }
    }
}

/// How a solid combines with the one before it in the scene sequence.
///
/// Anything other than `None` makes the solid invisible on its own; its only effect is on the
/// discriminant of the sphere that follows it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CombineOp {
    #[default]
    None,
    Union,
    Subtract,
    Intersect,
}

impl CombineOp {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(CombineOp::None),
            1 => Some(CombineOp::Union),
            2 => Some(CombineOp::Subtract),
            3 => Some(CombineOp::Intersect),
            _ => None,
        }
    }

    /// Adjusts the current sphere's discriminant using the previous solid's raw discriminant,
    /// where `self` is the previous solid's op.
    pub fn chain(self, previous_discriminant: f64, discriminant: f64) -> f64 {
        match self {
            CombineOp::Subtract => (-previous_discriminant).min(discriminant),
            CombineOp::Intersect => -(-previous_discriminant).max(-discriminant),
            CombineOp::None | CombineOp::Union => discriminant,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Solid {
    pub kind: SolidKind,
    pub op: CombineOp,
    pub radius: f64,
    // sphere or cylinder center, or any point on a plane
    pub position: Vec3,
    // plane normal, zero for the other kinds
    pub normal: Vec3,
    pub color: RGBColor,
}

impl Solid {
    pub fn sphere(op: CombineOp, radius: f64, center: Vec3, color: RGBColor) -> Self {
        Solid {
            kind: SolidKind::Sphere,
            op,
            radius,
            position: center,
            normal: Vec3::ZERO,
            color,
        }
    }

    pub fn plane(op: CombineOp, point: Vec3, normal: Vec3, color: RGBColor) -> Self {
        Solid {
            kind: SolidKind::Plane,
            op,
            radius: 0.0,
            position: point,
            normal,
            color,
        }
    }

    pub fn cylinder(op: CombineOp, radius: f64, center: Vec3, color: RGBColor) -> Self {
        Solid {
            kind: SolidKind::Cylinder,
            op,
            radius,
            position: center,
            normal: Vec3::ZERO,
            color,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.op == CombineOp::None
    }

    /// Surface normal at `point` for a hit of the given kind recorded against this solid.
    ///
    /// Plane hits are always recorded against slot 0, so for those this is slot 0's stored
    /// normal. The result can be non-finite when `point` sits on the center or axis.
    pub fn normal_at(&self, kind: SolidKind, point: Vec3) -> Vec3 {
        match kind {
            SolidKind::Plane => self.normal,
            SolidKind::Cylinder => Cylinder::from(self).normal_at(point),
            SolidKind::Sphere => Sphere::from(self).normal_at(point),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(SolidKind::from_code(2), Some(SolidKind::Cylinder));
        assert_eq!(SolidKind::from_code(3), None);
        assert_eq!(CombineOp::from_code(3), Some(CombineOp::Intersect));
        assert_eq!(CombineOp::from_code(-1), None);
    }

    #[test]
    fn test_chain() {
        // a subtractor hit by the ray (positive discriminant) suppresses the next sphere
        assert!(CombineOp::Subtract.chain(5.0, 3.0) < 0.0);
        // a missed subtractor leaves the next sphere alone
        assert_eq!(CombineOp::Subtract.chain(-5.0, 3.0), 3.0);
        // intersect keeps the smaller of the two
        assert_eq!(CombineOp::Intersect.chain(2.0, 3.0), 2.0);
        assert_eq!(CombineOp::Intersect.chain(-2.0, 3.0), -2.0);
        assert_eq!(CombineOp::Union.chain(-2.0, 3.0), 3.0);
        assert_eq!(CombineOp::None.chain(100.0, -3.0), -3.0);
    }

    #[test]
    fn test_visibility() {
        let color = RGBColor::WHITE;
        assert!(Solid::sphere(CombineOp::None, 1.0, Vec3::ZERO, color).is_visible());
        assert!(!Solid::sphere(CombineOp::Subtract, 1.0, Vec3::ZERO, color).is_visible());
        assert!(!Solid::cylinder(CombineOp::Union, 1.0, Vec3::ZERO, color).is_visible());
    }
}
