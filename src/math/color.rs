use std::ops::{Add, Mul};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    // rec 709 weights, used for film statistics only
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

// adds the scalar uniformly to all three channels
impl Add<f64> for RGBColor {
    type Output = RGBColor;
    fn add(self, other: f64) -> RGBColor {
        RGBColor::new(self.r + other, self.g + other, self.b + other)
    }
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl From<[f64; 3]> for RGBColor {
    fn from(c: [f64; 3]) -> RGBColor {
        RGBColor::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_affine_blend() {
        let c = RGBColor::new(0.5, 0.25, 1.0) * 0.5 + 0.125;
        assert_eq!(c, RGBColor::new(0.375, 0.25, 0.625));
    }

    #[test]
    fn test_not_clamped() {
        let c = RGBColor::WHITE + RGBColor::WHITE;
        assert_eq!(c.r, 2.0);
    }
}
