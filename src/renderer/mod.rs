mod naive;
mod single_threaded;
mod vec2d;

pub use naive::NaiveRenderer;
pub use single_threaded::SingleThreadedRenderer;
pub use vec2d::Vec2D;

use crate::math::RGBColor;
use crate::parsing::config::{Config, RenderSettings};
use crate::tonemap::{Clamp, Converter, Tonemapper};
use crate::world::World;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

pub type Film = Vec2D<RGBColor>;

pub fn output_film(
    render_settings: &RenderSettings,
    output_directory: &str,
    film: &Film,
) -> anyhow::Result<PathBuf> {
    let filename = render_settings.filename.as_ref();
    let filename_str = filename.cloned().unwrap_or_else(|| String::from("out"));

    fs::create_dir_all(output_directory)
        .with_context(|| format!("failed to create output directory {}", output_directory))?;
    let path = PathBuf::from(output_directory).join(format!(
        "{}.{}",
        filename_str,
        render_settings.output_format.extension()
    ));

    let mut tonemapper = Clamp::new(false);
    tonemapper.initialize(film);
    Converter::write_to_file(film, &tonemapper, render_settings.output_format, &path)?;
    Ok(path)
}

pub trait Renderer {
    fn render(&self, world: World, config: &Config) -> anyhow::Result<()>;
}
