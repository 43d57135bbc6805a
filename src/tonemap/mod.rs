use crate::math::RGBColor;
use crate::parsing::config::OutputFormat;
use crate::renderer::Vec2D;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, Rgb, RgbImage};

mod clamp;

pub use clamp::Clamp;

pub trait Tonemapper: Send + Sync {
    fn initialize(&mut self, film: &Vec2D<RGBColor>);
    // should map a pixel from float color to 8 bit channels
    fn map(&self, film: &Vec2D<RGBColor>, pixel: (usize, usize)) -> [u8; 3];
}

pub struct Converter;

impl Converter {
    pub fn tonemap(film: &Vec2D<RGBColor>, tonemapper: &dyn Tonemapper) -> RgbImage {
        RgbImage::from_fn(film.width as u32, film.height as u32, |x, y| {
            Rgb(tonemapper.map(film, (x as usize, y as usize)))
        })
    }

    pub fn write_to_file<P: AsRef<Path>>(
        film: &Vec2D<RGBColor>,
        tonemapper: &dyn Tonemapper,
        format: OutputFormat,
        filename: P,
    ) -> anyhow::Result<()> {
        let filename = filename.as_ref();
        let now = Instant::now();
        let img = Self::tonemap(film, tonemapper);
        match format {
            OutputFormat::Ppm => {
                let writer = BufWriter::new(
                    File::create(filename)
                        .with_context(|| format!("failed to create {}", filename.display()))?,
                );
                PnmEncoder::new(writer)
                    .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
                    .write_image(
                        img.as_raw(),
                        img.width(),
                        img.height(),
                        ExtendedColorType::Rgb8,
                    )
                    .with_context(|| format!("failed to encode {}", filename.display()))?;
            }
            OutputFormat::Png => {
                img.save_with_format(filename, ImageFormat::Png)
                    .with_context(|| format!("failed to save {}", filename.display()))?;
            }
        }
        info!(
            "saved {} in {}s",
            filename.display(),
            (now.elapsed().as_millis() as f32) / 1000.0
        );
        Ok(())
    }
}
