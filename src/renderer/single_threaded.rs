use super::{output_film, Film, Renderer};

use crate::camera::Camera;
use crate::integrator::{PhongIntegrator, SamplerIntegrator};
use crate::math::RGBColor;
use crate::parsing::config::{Config, RenderSettings};
use crate::profile::Profile;
use crate::world::World;

use std::sync::Arc;
use std::time::Instant;

/// Evaluates pixels one after another in row order on the calling thread.
#[derive(Default)]
pub struct SingleThreadedRenderer {}

impl SingleThreadedRenderer {
    pub fn new() -> SingleThreadedRenderer {
        SingleThreadedRenderer {}
    }

    pub fn render_film<I: SamplerIntegrator>(
        integrator: &I,
        settings: &RenderSettings,
        camera: &Camera,
    ) -> (Film, Profile) {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        let mut film = Film::new(width, height, RGBColor::BLACK);
        let mut profile = Profile::default();
        for y in 0..height {
            for x in 0..width {
                let color = integrator.color(camera.get_ray(x, y), &mut profile);
                film.write_at(x, y, color);
            }
        }
        (film, profile)
    }
}

impl Renderer for SingleThreadedRenderer {
    fn render(&self, world: World, config: &Config) -> anyhow::Result<()> {
        let integrator = PhongIntegrator::new(Arc::new(world));
        for render_settings in config.render_settings.iter() {
            let (width, height) = (
                render_settings.resolution.width,
                render_settings.resolution.height,
            );
            info!(
                "starting single threaded render with film resolution {}x{}",
                width, height
            );
            let camera = Camera::new(render_settings.eye());

            let now = Instant::now();
            let (film, profile) = Self::render_film(&integrator, render_settings, &camera);
            let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
            info!("took {}s", elapsed);
            profile.pretty_print(elapsed, 1);

            output_film(render_settings, &config.output_directory, &film)?;
        }
        Ok(())
    }
}
