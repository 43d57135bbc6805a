use crate::math::RGBColor;
use crate::renderer::Vec2D;

use super::Tonemapper;

/// Channel quantization: anything over 1 saturates, everything else is truncated.
/// Negative and NaN values map to 0.
pub fn quantize(value: f64) -> u8 {
    if value > 1.0 {
        255
    } else if value > 0.0 {
        (value * 255.0).floor() as u8
    } else {
        0
    }
}

#[derive(Clone, Debug)]
pub struct Clamp {
    silenced: bool,
}

impl Clamp {
    pub fn new(silenced: bool) -> Self {
        Self { silenced }
    }
}

impl Tonemapper for Clamp {
    fn initialize(&mut self, film: &Vec2D<RGBColor>) {
        let mut max_luminance = 0.0;
        let mut max_lum_xy = (0, 0);
        let mut total_luminance = 0.0;
        let mut saturated = 0usize;
        let mut non_finite = 0usize;

        for y in 0..film.height {
            for x in 0..film.width {
                let color = film.at(x, y);
                if !color.is_finite() {
                    non_finite += 1;
                    continue;
                }
                let lum = color.luminance();
                total_luminance += lum;
                if lum > max_luminance {
                    max_luminance = lum;
                    max_lum_xy = (x, y);
                }
                if color.r > 1.0 || color.g > 1.0 || color.b > 1.0 {
                    saturated += 1;
                }
            }
        }

        if self.silenced {
            return;
        }
        let avg_luminance = total_luminance / (film.total_pixels().max(1) as f64);
        info!("average luminance is {}", avg_luminance);
        info!(
            "max luminance occurred at {}, {}, is {}",
            max_lum_xy.0, max_lum_xy.1, max_luminance
        );
        info!("{} pixels have a saturated channel", saturated);
        if non_finite > 0 {
            warn!(
                "{} pixels are not finite and will be written as black",
                non_finite
            );
        }
    }

    fn map(&self, film: &Vec2D<RGBColor>, pixel: (usize, usize)) -> [u8; 3] {
        let color = film.at(pixel.0, pixel.1);
        [quantize(color.r), quantize(color.g), quantize(color.b)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(1.5), 255);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.999), 254);
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(-0.3), 0);
        assert_eq!(quantize(f64::NAN), 0);
        assert_eq!(quantize(f64::INFINITY), 255);
    }
}
